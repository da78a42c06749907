/// Recursive budget-splitting subdivision shared by the path builders.
///
/// Produces the midpoint of `(a, b)`, spends one unit of `budget` on it, and
/// splits what is left evenly (integer division) between `(a, mid)` and
/// `(mid, b)`. Output order is left samples, mid, right samples. The
/// endpoints themselves are never emitted.
pub fn subdivide<T, F>(a: &T, b: &T, budget: usize, midpoint: &F, out: &mut Vec<T>)
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    if budget == 0 {
        return;
    }

    let mid = midpoint(a, b);
    let remaining = budget - 1;
    if remaining > 0 {
        let half = remaining / 2;
        subdivide(a, &mid, half, midpoint, out);
        out.push(mid.clone());
        subdivide(&mid, b, half, midpoint, out);
    } else {
        out.push(mid);
    }
}

/// Convenience wrapper around [`subdivide`] returning a fresh vector.
pub fn subdivided<T, F>(a: &T, b: &T, budget: usize, midpoint: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    let mut out = Vec::with_capacity(expected_sample_count(budget));
    subdivide(a, b, budget, &midpoint, &mut out);
    out
}

/// Number of samples [`subdivide`] emits for a given budget.
///
/// Equals `budget` when `budget + 1` is a power of two and is smaller
/// otherwise, since odd remainders are dropped at each split.
pub fn expected_sample_count(budget: usize) -> usize {
    if budget == 0 {
        0
    } else {
        1 + 2 * expected_sample_count((budget - 1) / 2)
    }
}
