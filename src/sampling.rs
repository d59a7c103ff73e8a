//! Poisson-disk point sampling (Bridson's algorithm).
//!
//! An external collaborator, not used by [`crate::triangulation`] — a
//! convenient way for a caller to generate the kind of well-spread point
//! set the Delaunay builder is exercised against in the end-to-end tests.
//! Samples are accelerated by a background grid of cell size `r/√2`, sized
//! so that at most one accepted point can ever occupy a cell.

use rand::Rng;
use std::f64::consts::PI;

/// Sample points at least `radius` apart within `[0, length) x [0, width)`,
/// trying up to `k_resample` candidates around each active point before
/// retiring it. Returns every accepted point, in acceptance order.
pub fn sample<R: Rng>(
  rng: &mut R,
  radius: f64,
  length: i64,
  width: i64,
  k_resample: u32,
) -> Vec<(i64, i64)> {
  if length <= 0 || width <= 0 || radius <= 0.0 {
    return Vec::new();
  }

  let mut grid = Grid::new(radius, length, width);

  let first = random_point(rng, length, width);
  grid.insert(first);
  let mut active = vec![first];
  let mut result = vec![first];

  while let Some(idx) = if active.is_empty() {
    None
  } else {
    Some(rng.gen_range(0..active.len()))
  } {
    let origin = active.swap_remove(idx);
    for _ in 0..k_resample {
      let candidate = random_point_around(rng, origin, radius);
      if in_range(candidate, length, width) && !grid.has_neighbor_within(candidate, radius) {
        grid.insert(candidate);
        active.push(candidate);
        result.push(candidate);
      }
    }
  }

  result
}

fn random_point<R: Rng>(rng: &mut R, length: i64, width: i64) -> (i64, i64) {
  (rng.gen_range(0..length), rng.gen_range(0..width))
}

fn random_point_around<R: Rng>(rng: &mut R, origin: (i64, i64), r: f64) -> (i64, i64) {
  let radius = r * (1.0 + rng.gen::<f64>());
  let angle = rng.gen::<f64>() * 2.0 * PI;
  let x = origin.0 + (radius * angle.cos()) as i64;
  let y = origin.1 + (radius * angle.sin()) as i64;
  (x, y)
}

fn in_range(p: (i64, i64), length: i64, width: i64) -> bool {
  p.0 >= 0 && p.0 < length && p.1 >= 0 && p.1 < width
}

fn dist(p0: (i64, i64), p1: (i64, i64)) -> f64 {
  let dx = (p1.0 - p0.0) as f64;
  let dy = (p1.1 - p0.1) as f64;
  (dx * dx + dy * dy).sqrt()
}

struct Grid {
  cell_size: f64,
  cols: usize,
  rows: usize,
  cells: Vec<Option<(i64, i64)>>,
}

impl Grid {
  fn new(radius: f64, length: i64, width: i64) -> Grid {
    let cell_size = radius / std::f64::consts::SQRT_2;
    let cols = (length as f64 / cell_size).ceil() as usize + 1;
    let rows = (width as f64 / cell_size).ceil() as usize + 1;
    Grid {
      cell_size,
      cols,
      rows,
      cells: vec![None; cols * rows],
    }
  }

  fn cell_of(&self, p: (i64, i64)) -> (usize, usize) {
    let col = (p.0 as f64 / self.cell_size) as usize;
    let row = (p.1 as f64 / self.cell_size) as usize;
    (col.min(self.cols - 1), row.min(self.rows - 1))
  }

  fn insert(&mut self, p: (i64, i64)) {
    let (col, row) = self.cell_of(p);
    self.cells[row * self.cols + col] = Some(p);
  }

  /// Checks the 5x5 block of cells around `p`'s cell, which is always
  /// enough to catch every occupied cell within `radius` given a cell size
  /// of `radius/sqrt(2)`.
  fn has_neighbor_within(&self, p: (i64, i64), radius: f64) -> bool {
    let (col, row) = self.cell_of(p);
    let col = col as isize;
    let row = row as isize;
    for dc in -2..=2 {
      for dr in -2..=2 {
        let c = col + dc;
        let r = row + dr;
        if c < 0 || r < 0 || c as usize >= self.cols || r as usize >= self.rows {
          continue;
        }
        if let Some(occupant) = self.cells[r as usize * self.cols + c as usize] {
          if dist(p, occupant) < radius {
            return true;
          }
        }
      }
    }
    false
  }
}
