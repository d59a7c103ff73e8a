//! Quad-Edge planar subdivisions and a divide-and-conquer Delaunay
//! triangulator built on top of them.
//!
//! The core is the Guibas–Stolfi quad-edge structure ([`quadedge`]) and the
//! recursive merge builder ([`triangulation`]) that assembles a Delaunay
//! triangulation of a point set from it. [`sampling`] and [`select`] are
//! independent collaborators a caller might reach for alongside the
//! triangulator — a Poisson-disk point sampler and a quickselect — neither
//! of which the triangulator itself depends on.

pub mod point;
pub mod predicates;
pub mod quadedge;
pub mod sampling;
pub mod select;
pub mod triangulation;

pub use point::Point;
pub use predicates::{in_circle, left_of, orientation, right_of, Orientation};
pub use quadedge::{EdgeRef, Subdivision};
pub use triangulation::triangulate;

use std::fmt;

/// Everything that can go wrong building or querying a subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than two distinct points were supplied to [`triangulate`].
  InsufficientPoints,
  /// An input coordinate was `NaN` or infinite.
  InvalidCoordinate,
  /// A debug-only consistency check on the quad-edge structure failed.
  /// Indicates a bug in this crate, not bad input.
  InvariantViolation,
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::InsufficientPoints => {
        write!(f, "at least two distinct points are required to triangulate")
      }
      Error::InvalidCoordinate => write!(f, "point coordinates must be finite"),
      Error::InvariantViolation => write!(f, "quad-edge structure invariant violated"),
    }
  }
}

impl std::error::Error for Error {}
