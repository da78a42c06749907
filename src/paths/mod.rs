pub mod great_circle;
pub mod path;
pub mod rhumb;
pub mod subdivide;

/// Number of interior samples requested when the caller has no preference.
pub const DEFAULT_SEGMENT_COUNT: usize = 15;
