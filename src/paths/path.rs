use std::fmt;

use serde::Serialize;

use crate::coords::coordinates::Coordinates;

/// Ordered sequence of coordinates; index order is traversal order.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct Path {
    points: Vec<Coordinates>,
}

impl Path {
    pub fn new(points: Vec<Coordinates>) -> Self {
        Path { points }
    }

    pub fn points(&self) -> &[Coordinates] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinates> {
        self.points
    }

    /// First point of the path, `None` when empty.
    pub fn start(&self) -> Option<&Coordinates> {
        self.points.first()
    }

    /// Last point of the path, `None` when empty.
    pub fn last(&self) -> Option<&Coordinates> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinates> {
        self.points.iter()
    }
}

impl From<Vec<Coordinates>> for Path {
    fn from(points: Vec<Coordinates>) -> Self {
        Path::new(points)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coordinates;
    type IntoIter = std::slice::Iter<'a, Coordinates>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn end(f: &mut fmt::Formatter<'_>, c: Option<&Coordinates>) -> fmt::Result {
            match c {
                Some(c) => write!(f, "[Lat: {} | Long: {}]", c.lat(), c.lon()),
                None => write!(f, "[Lat:  | Long: ]"),
            }
        }

        end(f, self.start())?;
        write!(f, " --{}--> ", self.points.len())?;
        end(f, self.last())
    }
}
