//! Integer grid model: positions, world bounds and the axis-priority step.

use rand::Rng;
use serde::Serialize;

/// A cell on the grid. Equality is component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance, used only for nearest-driver matching.
    pub fn euclidean_distance(&self, other: &GridPos) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// One unit move toward `target` with strict axis priority: the x
    /// coordinate is corrected first, the y coordinate only once x matches.
    /// Exactly one coordinate changes by exactly 1; returns `self` unchanged
    /// when already at the target.
    pub fn step_toward(&self, target: GridPos) -> GridPos {
        if self.x < target.x {
            GridPos::new(self.x + 1, self.y)
        } else if self.x > target.x {
            GridPos::new(self.x - 1, self.y)
        } else if self.y < target.y {
            GridPos::new(self.x, self.y + 1)
        } else if self.y > target.y {
            GridPos::new(self.x, self.y - 1)
        } else {
            *self
        }
    }
}

/// World dimensions. Valid positions satisfy `0 <= x < width`, `0 <= y < height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridBounds {
    pub width: i32,
    pub height: i32,
}

impl GridBounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn cell_count(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Uniform-random position inside the bounds.
    pub fn random_pos<R: Rng>(&self, rng: &mut R) -> GridPos {
        GridPos::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    /// Uniform-random position distinct from `exclude`. Resamples until the
    /// positions differ; requires at least two cells.
    pub fn random_pos_excluding<R: Rng>(&self, rng: &mut R, exclude: GridPos) -> GridPos {
        debug_assert!(self.cell_count() >= 2, "need at least two cells");
        loop {
            let pos = self.random_pos(rng);
            if pos != exclude {
                return pos;
            }
        }
    }
}
