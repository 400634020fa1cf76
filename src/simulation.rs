//! Near-duplicate counting over random point clouds.
//!
//! Every round scatters random points over the world, indexes them in a [`Quadtree`] and counts
//! the pairs that lie closer than `overlap_distance` to each other. The tree is cleared between
//! rounds and reused.

use crate::{Error, Point, Quadtree, Rectangle, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// World size, points are generated in `[0, width) × [0, height)`
    pub width: f64,
    pub height: f64,
    /// Points per round
    pub points: usize,
    pub rounds: usize,
    /// Bucket capacity of the tree nodes
    pub capacity: usize,
    /// Half extent of the square searched around every point
    pub search_half_extent: f64,
    pub overlap_distance: f64,
    /// Seed of the point generator, random if missing
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 200.0,
            points: 20_000,
            rounds: 5,
            capacity: 4,
            search_half_extent: 10.0,
            overlap_distance: 3.0,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// The region the generated points are drawn from
    pub fn world(&self) -> Rectangle {
        Rectangle::new(
            self.width / 2.0,
            self.height / 2.0,
            self.width / 2.0,
            self.height / 2.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub round: usize,
    pub inserted: usize,
    /// Points the tree refused, see [`crate::Error::PointOutsideBoundary`]
    pub rejected: usize,
    pub overlaps: u64,
}

/// Uniformly distributed points in `[0, width) × [0, height)`
///
/// Scales a `[0, 1)` sample instead of sampling a range, so an empty world yields points on
/// its edge rather than a panic.
pub fn random_points(rng: &mut impl Rng, n: usize, width: f64, height: f64) -> Vec<Point> {
    (0..n)
        .map(|_| Point::new(rng.gen::<f64>() * width, rng.gen::<f64>() * height))
        .collect()
}

/// Count the ordered pairs `(p, q)` of stored points where `q` is closer to `p` than
/// `overlap_distance`, looking for neighbours of each `p` in a square of half extent
/// `search_half_extent`.
///
/// Each `p` finds itself once, that match is not counted. Exact duplicates of `p` are.
pub fn count_overlaps(
    tree: &Quadtree,
    points: &[Point],
    search_half_extent: f64,
    overlap_distance: f64,
) -> u64 {
    points
        .par_iter()
        .map_init(Vec::new, |found, p| {
            found.clear();
            let range = Rectangle::from_center(*p, search_half_extent, search_half_extent);
            tree.query_into(&range, found);
            let close = found
                .iter()
                .filter(|other| p.distance_to(other) < overlap_distance)
                .count() as u64;
            close.saturating_sub(1)
        })
        .sum()
}

#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    tree: Quadtree,
    rng: SmallRng,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let world = config.world();
        if !(config.width.is_finite() && config.height.is_finite())
            || config.width <= 0.0
            || config.height <= 0.0
        {
            return Err(Error::InvalidExtents(world));
        }
        let tree = Quadtree::new(config.world(), config.capacity)?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Ok(Self { config, tree, rng })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The tree of the current round. Empty between rounds.
    pub fn tree(&self) -> &Quadtree {
        &self.tree
    }

    /// Generate and index a round's points without counting or clearing.
    /// Returns the points that made it into the tree and the number of rejected ones.
    pub fn populate(&mut self) -> (Vec<Point>, usize) {
        let candidates = random_points(
            &mut self.rng,
            self.config.points,
            self.config.width,
            self.config.height,
        );
        self.insert_all(candidates)
    }

    /// Insert `candidates` into the current round's tree, skipping the ones outside the world.
    /// Returns the inserted points and the number of rejected ones.
    pub fn insert_all(&mut self, candidates: Vec<Point>) -> (Vec<Point>, usize) {
        let mut rejected = 0;
        let mut inserted = Vec::with_capacity(candidates.len());
        for p in candidates {
            if !self.tree.contains(&p) {
                debug!(point = %p, "point is on the world's edge, skipping");
                rejected += 1;
                continue;
            }
            match self.tree.insert(p) {
                Ok(()) => inserted.push(p),
                Err(err) => {
                    warn!(%err, "failed to insert point");
                    rejected += 1;
                }
            }
        }
        (inserted, rejected)
    }

    /// Run a single round and leave the tree cleared
    pub fn run_round(&mut self, round: usize) -> RoundReport {
        self.run_round_with(round, |_| {})
    }

    /// Run a single round, calling `inspect` on the populated tree before it is cleared
    pub fn run_round_with<F>(&mut self, round: usize, inspect: F) -> RoundReport
    where
        F: FnOnce(&Quadtree),
    {
        let (points, rejected) = self.populate();
        let overlaps = count_overlaps(
            &self.tree,
            &points,
            self.config.search_half_extent,
            self.config.overlap_distance,
        );
        debug!(depth = self.tree.depth(), "round populated");
        inspect(&self.tree);
        self.tree.clear();

        let report = RoundReport {
            round,
            inserted: points.len(),
            rejected,
            overlaps,
        };
        info!(
            round,
            rejected, "Round {}: There are {} overlapping points", round, overlaps
        );
        report
    }

    /// Run every configured round
    pub fn run(&mut self) -> Vec<RoundReport> {
        (0..self.config.rounds).map(|i| self.run_round(i)).collect()
    }
}
