use crate::Point;
use std::fmt;

/// Axis aligned region given by its center and half extents.
///
/// `contains` is strict, so points exactly on an edge are outside, while `intersects` treats
/// touching regions as overlapping. A query that only touches a node still visits it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle(x: {}, y: {}; w: {}, h: {})",
            self.x, self.y, self.w, self.h
        )
    }
}

impl Rectangle {
    /// `w` and `h` are expected to be non-negative; this is not checked here, see
    /// [`Quadtree::new`](crate::Quadtree::new).
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_center(center: Point, w: f64, h: f64) -> Self {
        Self::new(center.x(), center.y(), w, h)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn contains(&self, point: &Point) -> bool {
        let (x, y) = (point.x(), point.y());

        self.x - self.w < x && x < self.x + self.w && self.y - self.h < y && y < self.y + self.h
    }

    pub fn intersects(&self, other: &Rectangle) -> bool {
        if other.x - other.w > self.x + self.w || other.x + other.w < self.x - self.w {
            return false;
        }
        if other.y - other.h > self.y + self.h || other.y + other.h < self.y - self.h {
            return false;
        }
        true
    }

    /// Return the four quadrants in top-left, top-right, bottom-left, bottom-right order
    pub(crate) fn quadrants(&self) -> [Rectangle; 4] {
        let w = self.w / 2.0;
        let h = self.h / 2.0;
        [
            Self::new(self.x - w, self.y - h, w, h),
            Self::new(self.x + w, self.y - h, w, h),
            Self::new(self.x - w, self.y + h, w, h),
            Self::new(self.x + w, self.y + h, w, h),
        ]
    }
}
