
use crate::{Error, Point, Rectangle, Result};
use tracing::{debug, trace};

type Children = Option<Box<[Quadtree; 4]>>;

/// Bucketed point quadtree.
///
/// Each node holds up to `capacity` points. Once a node is full the next insertion splits it
/// into four quadrants and from then on every point reaching the node is routed into one of
/// its children, so the node's own bucket stays at exactly `capacity` points.
#[derive(Debug, Clone)]
pub struct Quadtree {
    boundary: Rectangle,
    capacity: usize,

    // top-left, top-right, bottom-left, bottom-right
    children: Children,

    items: Vec<Point>,
}

impl Quadtree {
    pub fn new(boundary: Rectangle, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        let finite = [boundary.x(), boundary.y(), boundary.w(), boundary.h()]
            .iter()
            .all(|v| v.is_finite());
        if !finite || boundary.w() < 0.0 || boundary.h() < 0.0 {
            return Err(Error::InvalidExtents(boundary));
        }
        Ok(Self::new_unchecked(boundary, capacity))
    }

    pub fn from_xywh(x: f64, y: f64, w: f64, h: f64, capacity: usize) -> Result<Self> {
        Self::new(Rectangle::new(x, y, w, h), capacity)
    }

    fn new_unchecked(boundary: Rectangle, capacity: usize) -> Self {
        Self {
            boundary,
            capacity,
            children: None,
            items: Vec::new(),
        }
    }

    /// Build a tree over the bounding box of `points`, padded by one unit on every side so that
    /// all of them are strictly inside the root.
    pub fn from_points<It>(points: It, capacity: usize) -> Result<Self>
    where
        It: IntoIterator<Item = Point>,
    {
        let mut min = [f64::INFINITY, f64::INFINITY];
        let mut max = [f64::NEG_INFINITY, f64::NEG_INFINITY];
        let points = points
            .into_iter()
            .map(|p| {
                min[0] = min[0].min(p.x());
                min[1] = min[1].min(p.y());
                max[0] = max[0].max(p.x());
                max[1] = max[1].max(p.y());
                p
            })
            .collect::<Vec<_>>();

        if points.is_empty() {
            min = [0.0, 0.0];
            max = [0.0, 0.0];
        }

        let boundary = Rectangle::new(
            (min[0] + max[0]) / 2.0,
            (min[1] + max[1]) / 2.0,
            (max[0] - min[0]) / 2.0 + 1.0,
            (max[1] - min[1]) / 2.0 + 1.0,
        );
        let mut tree = Self::new(boundary, capacity)?;
        tree.extend(points)?;
        Ok(tree)
    }

    /// Insert the points in order, stops at the first failure.
    pub fn extend<It>(&mut self, it: It) -> Result<()>
    where
        It: IntoIterator<Item = Point>,
    {
        for p in it {
            self.insert(p)?;
        }
        Ok(())
    }

    /// Fails if the point is not strictly inside this node or lies on a split line.
    pub fn insert(&mut self, point: Point) -> Result<()> {
        if !self.contains(&point) {
            return Err(Error::PointOutsideBoundary {
                point,
                boundary: self.boundary,
            });
        }
        self.insert_inner(point)
    }

    fn insert_inner(&mut self, point: Point) -> Result<()> {
        if self.items.len() < self.capacity {
            self.items.push(point);
            return Ok(());
        }

        if self.children.is_none() {
            self.split();
        }

        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                if child.contains(&point) {
                    return child.insert_inner(point);
                }
            }
        }

        // on a split line
        Err(Error::PointOutsideBoundary {
            point,
            boundary: self.boundary,
        })
    }

    fn split(&mut self) {
        debug_assert!(self.children.is_none());

        trace!(boundary = %self.boundary, "splitting node");

        let [tl, tr, bl, br] = self.boundary.quadrants();
        let capacity = self.capacity;
        self.children = Some(Box::new([
            Self::new_unchecked(tl, capacity),
            Self::new_unchecked(tr, capacity),
            Self::new_unchecked(bl, capacity),
            Self::new_unchecked(br, capacity),
        ]));
    }

    /// Return every stored point strictly inside `range`.
    ///
    /// Points come in pre-order: the node's own points in insertion order, then the results of
    /// the top-left, top-right, bottom-left and bottom-right subtrees.
    pub fn query(&self, range: &Rectangle) -> Vec<Point> {
        let mut out = Vec::new();
        self.query_into(range, &mut out);
        out
    }

    /// Same as `query` but appends into `out`, so the buffer can be reused between calls.
    pub fn query_into(&self, range: &Rectangle, out: &mut Vec<Point>) {
        if !self.intersects(range) {
            return;
        }

        out.extend(self.items.iter().filter(|p| range.contains(p)));

        if let Some(ref children) = self.children {
            for child in children.iter() {
                child.query_into(range, out);
            }
        }
    }

    /// Drop every point and all children. Boundary and capacity are kept.
    pub fn clear(&mut self) {
        debug!(points = self.len(), boundary = %self.boundary, "clearing tree");
        self.items.clear();
        self.children = None;
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.boundary.contains(point)
    }

    pub fn intersects(&self, range: &Rectangle) -> bool {
        self.boundary.intersects(range)
    }

    /// Number of points in the whole subtree
    pub fn len(&self) -> usize {
        let nested: usize = self
            .children()
            .map(|c| c.iter().map(Quadtree::len).sum())
            .unwrap_or(0);
        self.items.len() + nested
    }

    pub fn is_empty(&self) -> bool {
        // split nodes always hold a full bucket
        self.items.is_empty()
    }

    /// Number of levels, 1 for an unsplit node
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .and_then(|c| c.iter().map(Quadtree::depth).max())
            .unwrap_or(0)
    }

    /// Points held directly by this node
    pub fn points(&self) -> &[Point] {
        &self.items
    }

    pub fn children(&self) -> Option<&[Quadtree; 4]> {
        self.children.as_deref()
    }

    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn boundary(&self) -> &Rectangle {
        &self.boundary
    }

    pub fn x(&self) -> f64 {
        self.boundary.x()
    }

    pub fn y(&self) -> f64 {
        self.boundary.y()
    }

    pub fn w(&self) -> f64 {
        self.boundary.w()
    }

    pub fn h(&self) -> f64 {
        self.boundary.h()
    }
}
