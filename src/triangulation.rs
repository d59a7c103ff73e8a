//! L3 input preparation and the L2 divide-and-conquer Delaunay builder.

use crate::predicates::{in_circle, left_of, orientation, right_of, Orientation};
use crate::quadedge::{EdgeRef, Subdivision};
use crate::{Error, Point};

/// Deduplicate (by coordinate equality) and lexicographically sort `points`
/// by `(x, y)`. Rejects any non-finite coordinate.
fn prepare(points: &[(f64, f64)]) -> Result<Vec<Point>, Error> {
  let mut pts = Vec::with_capacity(points.len());
  for &(x, y) in points {
    pts.push(Point::new(x, y)?);
  }
  pts.sort();
  pts.dedup();
  Ok(pts)
}

/// Triangulate `points`, returning the subdivision they produce together
/// with `(ldo, rdo)`: the ccw-first hull edge out of the leftmost point and
/// the cw-first hull edge into the rightmost one. Fewer than two distinct
/// points after deduplication is an error; colinear input is not (the
/// result is a path with no triangular faces).
pub fn triangulate(points: &[(f64, f64)]) -> Result<(Subdivision, EdgeRef, EdgeRef), Error> {
  let prepared = prepare(points)?;
  if prepared.len() < 2 {
    return Err(Error::InsufficientPoints);
  }

  let mut sub = Subdivision::new();
  claims::debug_assert_ok!(sub.check_invariant());

  log::debug!("triangulate: {} points after dedup/sort", prepared.len());
  let (ldo, rdo) = build(&mut sub, &prepared);

  claims::debug_assert_ok!(sub.check_invariant());
  Ok((sub, ldo, rdo))
}

fn build(sub: &mut Subdivision, points: &[Point]) -> (EdgeRef, EdgeRef) {
  match points.len() {
    2 => {
      let a = sub.make_edge(points[0], points[1]);
      (a, a.sym())
    }
    3 => {
      let a = sub.make_edge(points[0], points[1]);
      let b = sub.make_edge(points[1], points[2]);
      sub.splice(a.sym(), b);

      match orientation(&points[0], &points[1], &points[2]) {
        Orientation::CounterClockwise => {
          sub.connect(b, a);
          (a, b.sym())
        }
        Orientation::Clockwise => {
          let c = sub.connect(b, a);
          (c.sym(), c)
        }
        Orientation::Colinear => (a, b.sym()),
      }
    }
    n => {
      debug_assert!(n >= 4, "base cases handle 2 and 3 points directly");
      let mid = n / 2;
      let (ldo, ldi) = build(sub, &points[..mid]);
      let (rdi, rdo) = build(sub, &points[mid..]);
      log::trace!("merging halves of {} and {} points", mid, n - mid);
      merge(sub, ldo, ldi, rdo, rdi)
    }
  }
}

fn left_of_edge(sub: &Subdivision, p: Point, e: EdgeRef) -> bool {
  left_of(&p, &e.orig(sub).unwrap(), &e.dest(sub).unwrap())
}

fn right_of_edge(sub: &Subdivision, p: Point, e: EdgeRef) -> bool {
  right_of(&p, &e.orig(sub).unwrap(), &e.dest(sub).unwrap())
}

/// `e` is still a usable merge candidate: its destination lies to the
/// right of `basel`.
fn valid(sub: &Subdivision, e: EdgeRef, basel: EdgeRef) -> bool {
  right_of_edge(sub, e.dest(sub).unwrap(), basel)
}

fn merge(
  sub: &mut Subdivision,
  mut ldo: EdgeRef,
  mut ldi: EdgeRef,
  mut rdo: EdgeRef,
  mut rdi: EdgeRef,
) -> (EdgeRef, EdgeRef) {
  loop {
    if left_of_edge(sub, rdi.orig(sub).unwrap(), ldi) {
      ldi = ldi.left_next(sub);
    } else if right_of_edge(sub, ldi.orig(sub).unwrap(), rdi) {
      rdi = rdi.right_prev(sub);
    } else {
      break;
    }
  }

  let mut basel = sub.connect(rdi.sym(), ldi);
  if ldi.orig(sub) == ldo.orig(sub) {
    ldo = basel.sym();
  }
  if rdi.orig(sub) == rdo.orig(sub) {
    rdo = basel;
  }

  loop {
    let mut lcand = basel.sym().orig_next(sub);
    if valid(sub, lcand, basel) {
      while in_circle(
        &basel.dest(sub).unwrap(),
        &basel.orig(sub).unwrap(),
        &lcand.dest(sub).unwrap(),
        &lcand.orig_next(sub).dest(sub).unwrap(),
      ) {
        let t = lcand.orig_next(sub);
        sub.disconnect(lcand);
        lcand = t;
      }
    }

    let mut rcand = basel.orig_prev(sub);
    if valid(sub, rcand, basel) {
      while in_circle(
        &basel.dest(sub).unwrap(),
        &basel.orig(sub).unwrap(),
        &rcand.dest(sub).unwrap(),
        &rcand.orig_prev(sub).dest(sub).unwrap(),
      ) {
        let t = rcand.orig_prev(sub);
        sub.disconnect(rcand);
        rcand = t;
      }
    }

    let lcand_valid = valid(sub, lcand, basel);
    let rcand_valid = valid(sub, rcand, basel);
    if !lcand_valid && !rcand_valid {
      break;
    }

    if !lcand_valid
      || (rcand_valid
        && in_circle(
          &lcand.dest(sub).unwrap(),
          &lcand.orig(sub).unwrap(),
          &rcand.orig(sub).unwrap(),
          &rcand.dest(sub).unwrap(),
        ))
    {
      basel = sub.connect(rcand, basel.sym());
    } else {
      basel = sub.connect(basel.sym(), lcand.sym());
    }
    log::trace!("merge loop advanced basel to {:?}", basel);
  }

  (ldo, rdo)
}
