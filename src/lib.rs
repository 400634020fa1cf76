//! Point Quadtree.
//! # Contracts:
//! - A node's boundary is the open region `(x - w, x + w) × (y - h, y + h)`
//! - Points on a node's edge or on one of its split lines can not be stored
//!
pub mod error;
pub mod quadtree;
pub mod rectangle;
pub mod render;
pub mod simulation;

pub use error::{Error, Result};
pub use quadtree::Quadtree;
pub use rectangle::Rectangle;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance
    pub fn distance_to(&self, rhs: &Self) -> f64 {
        let x = self.x - rhs.x;
        let y = self.y - rhs.y;
        (x * x + y * y).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);

        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(Point::new(0.1, 0.2), Point::from([0.1, 0.2]));
        assert_ne!(Point::new(0.1, 0.2), Point::new(0.1, 0.2 + f64::EPSILON));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
