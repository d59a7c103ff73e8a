//! L0: orientation and in-circle predicates.
//!
//! Both tests are sign-of-determinant tests over plain `f64` arithmetic. Per
//! the numeric contract, this agrees with the exact sign whenever the
//! determinant is nonzero for inputs whose coordinates fit in ~26 bits; it
//! is not a substitute for adaptive-precision arithmetic on adversarial
//! inputs, which is explicitly out of scope.

use crate::Point;

/// The sign of an orientation or in-circle determinant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
  CounterClockwise,
  Clockwise,
  Colinear,
}

impl Orientation {
  fn from_determinant(det: f64) -> Orientation {
    if det > 0.0 {
      Orientation::CounterClockwise
    } else if det < 0.0 {
      Orientation::Clockwise
    } else {
      Orientation::Colinear
    }
  }
}

/// Sign of
/// ```text
/// | x1 y1 1 |
/// | x2 y2 1 |
/// | x3 y3 1 |
/// ```
/// Positive when `p1, p2, p3` turn counterclockwise.
pub fn orientation(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
  let det = (p2.x - p1.x) * (p3.y - p1.y) - (p3.x - p1.x) * (p2.y - p1.y);
  Orientation::from_determinant(det)
}

/// Sign of the 4x4 determinant with rows `(x, y, x^2+y^2, 1)`. Positive
/// means `d` lies strictly inside the circumcircle of `p1, p2, p3`,
/// *provided* the triple is already counterclockwise (callers must arrange
/// this — see §4.1 of the design doc).
pub fn in_circle(p1: &Point, p2: &Point, p3: &Point, d: &Point) -> bool {
  // Translate so `d` is the origin; this is the classic simplification of
  // the lifted-paraboloid determinant and keeps the arithmetic small.
  let (ax, ay) = (p1.x - d.x, p1.y - d.y);
  let (bx, by) = (p2.x - d.x, p2.y - d.y);
  let (cx, cy) = (p3.x - d.x, p3.y - d.y);

  let a2 = ax * ax + ay * ay;
  let b2 = bx * bx + by * by;
  let c2 = cx * cx + cy * cy;

  let det = ax * (by * c2 - b2 * cy) - ay * (bx * c2 - b2 * cx) + a2 * (bx * cy - by * cx);
  det > 0.0
}

/// `p` is strictly to the right of the directed edge `(orig, dest)`.
pub fn right_of(p: &Point, orig: &Point, dest: &Point) -> bool {
  orientation(p, dest, orig) == Orientation::CounterClockwise
}

/// `p` is strictly to the left of the directed edge `(orig, dest)`.
pub fn left_of(p: &Point, orig: &Point, dest: &Point) -> bool {
  orientation(p, orig, dest) == Orientation::CounterClockwise
}
