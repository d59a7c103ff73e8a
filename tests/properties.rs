use std::collections::HashSet;

use proptest::prelude::*;
use quadedge::{in_circle, orientation, triangulate, EdgeRef, Orientation, Point, Subdivision};

fn pt(x: f64, y: f64) -> Point {
  Point::new(x, y).unwrap()
}

/// All edges reachable from `start` by repeated application of the
/// navigation operators — i.e. every quartet belonging to the same
/// subdivision as `start`.
fn reachable_edges(sub: &Subdivision, start: EdgeRef) -> Vec<EdgeRef> {
  let mut visited = HashSet::new();
  let mut stack = vec![start];
  let mut all = Vec::new();
  while let Some(e) = stack.pop() {
    if !visited.insert(e) {
      continue;
    }
    all.push(e);
    for next in [
      e.sym(),
      e.rot(),
      e.orig_next(sub),
      e.orig_prev(sub),
      e.left_next(sub),
      e.right_next(sub),
    ] {
      if !visited.contains(&next) {
        stack.push(next);
      }
    }
  }
  all
}

/// Every ccw-oriented triangular face reachable from `edges`, deduplicated
/// by rotating each face's vertex triple to start at its lexicographically
/// smallest point.
fn triangular_faces(sub: &Subdivision, edges: &[EdgeRef]) -> Vec<[Point; 3]> {
  let mut seen = HashSet::new();
  let mut faces = Vec::new();
  for &e in edges {
    if e.orig(sub).is_none() {
      continue;
    }
    let e1 = e.left_next(sub);
    let e2 = e1.left_next(sub);
    if e2.left_next(sub) != e {
      continue;
    }
    let mut tri = [
      e.orig(sub).unwrap(),
      e1.orig(sub).unwrap(),
      e2.orig(sub).unwrap(),
    ];
    if orientation(&tri[0], &tri[1], &tri[2]) != Orientation::CounterClockwise {
      continue;
    }
    let min_idx = (0..3).min_by_key(|&i| tri[i]).unwrap();
    tri.rotate_left(min_idx);
    if seen.insert(tri) {
      faces.push(tri);
    }
  }
  faces
}

fn convex_hull_size(points: &[Point]) -> usize {
  let mut sorted = points.to_vec();
  sorted.sort();
  sorted.dedup();
  if sorted.len() < 3 {
    return sorted.len();
  }
  let half = |pts: &[Point]| -> Vec<Point> {
    let mut hull: Vec<Point> = Vec::new();
    for &p in pts {
      while hull.len() >= 2
        && orientation(&hull[hull.len() - 2], &hull[hull.len() - 1], &p)
          != Orientation::CounterClockwise
      {
        hull.pop();
      }
      hull.push(p);
    }
    hull
  };
  let lower = half(&sorted);
  let mut reversed = sorted.clone();
  reversed.reverse();
  let upper = half(&reversed);
  lower.len() + upper.len() - 2
}

fn edge_set(sub: &Subdivision) -> HashSet<(Point, Point)> {
  sub
    .edges()
    .map(|(a, b)| if a < b { (a, b) } else { (b, a) })
    .collect()
}

/// Bounded, integer-valued point strategy: keeps triangulations free of
/// near-degenerate floating point inputs while still exercising plenty of
/// colinear and near-cocircular configurations.
fn points_strategy(max_len: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
  prop::collection::vec((-20i32..20, -20i32..20), 2..max_len)
    .prop_map(|pts| pts.into_iter().map(|(x, y)| (x as f64, y as f64)).collect())
}

proptest! {
  // P1: the rot cycle has period exactly 4, and sym != identity.
  #[test]
  fn p1_quartet_period_four(points in points_strategy(16)) {
    if let Ok((sub, ldo, _)) = triangulate(&points) {
      for e in reachable_edges(&sub, ldo) {
        prop_assert_eq!(e.rot().rot().rot().rot(), e);
        prop_assert_ne!(e.rot().rot(), e);
      }
    }
  }

  // P2: orig_next rings close after at most as many steps as there are
  // edges reachable from the ring's edge.
  #[test]
  fn p2_orig_next_rings_close(points in points_strategy(16)) {
    if let Ok((sub, ldo, _)) = triangulate(&points) {
      let all = reachable_edges(&sub, ldo);
      for &e in &all {
        let mut cur = e.orig_next(&sub);
        let mut steps = 1;
        while cur != e {
          cur = cur.orig_next(&sub);
          steps += 1;
          prop_assert!(steps <= all.len() + 1);
        }
      }
    }
  }

  // P4: every triangular face is ccw (enforced by construction in
  // `triangular_faces`) and empty of every other input point.
  #[test]
  fn p4_empty_circumcircle(points in points_strategy(14)) {
    if let Ok((sub, ldo, _)) = triangulate(&points) {
      let reachable = reachable_edges(&sub, ldo);
      let faces = triangular_faces(&sub, &reachable);
      let mut distinct: Vec<Point> = points.iter().map(|&(x, y)| pt(x, y)).collect();
      distinct.sort();
      distinct.dedup();
      for face in &faces {
        for &v in &distinct {
          if face.contains(&v) {
            continue;
          }
          prop_assert!(!in_circle(&face[0], &face[1], &face[2], &v));
        }
      }
    }
  }

  // P5: Euler's formula for a planar triangulation of n points with h on
  // the convex hull.
  #[test]
  fn p5_edge_and_face_counts(points in points_strategy(16)) {
    if let Ok((sub, ..)) = triangulate(&points) {
      let mut distinct: Vec<Point> = points.iter().map(|&(x, y)| pt(x, y)).collect();
      distinct.sort();
      distinct.dedup();
      let n = distinct.len();
      if n >= 3 {
        let h = convex_hull_size(&distinct);
        prop_assert_eq!(sub.edge_count(), 3 * n - 3 - h);
      }
    }
  }

  // P6: the set of undirected edges does not depend on input order.
  #[test]
  fn p6_permutation_invariant(
    points in points_strategy(14),
    seed in any::<u64>(),
  ) {
    let mut shuffled = points.clone();
    // deterministic pseudo-shuffle so the test stays reproducible without
    // pulling in a shuffling dependency.
    let len = shuffled.len();
    for i in 0..len {
      let j = ((seed.wrapping_add(i as u64)).wrapping_mul(2654435761)) as usize % len;
      shuffled.swap(i, j);
    }

    let a = triangulate(&points);
    let b = triangulate(&shuffled);
    match (a, b) {
      (Ok((sub_a, ..)), Ok((sub_b, ..))) => {
        prop_assert_eq!(edge_set(&sub_a), edge_set(&sub_b));
      }
      (Err(e_a), Err(e_b)) => prop_assert_eq!(e_a, e_b),
      _ => prop_assert!(false, "permutation changed success/failure"),
    }
  }

  // P7: re-running on the same input produces the same edge set.
  #[test]
  fn p7_idempotent(points in points_strategy(14)) {
    let a = triangulate(&points);
    let b = triangulate(&points);
    match (a, b) {
      (Ok((sub_a, ..)), Ok((sub_b, ..))) => {
        prop_assert_eq!(edge_set(&sub_a), edge_set(&sub_b));
      }
      (Err(e_a), Err(e_b)) => prop_assert_eq!(e_a, e_b),
      _ => prop_assert!(false, "re-running changed success/failure"),
    }
  }
}

// P3: splice is an involution. Exercised directly against the quad-edge
// primitives rather than through triangulate, since splice is exposed as a
// public primitive in its own right.
#[test]
fn p3_splice_is_an_involution() {
  let mut sub = Subdivision::new();
  let a = sub.make_edge(pt(0.0, 0.0), pt(1.0, 0.0));
  let b = sub.make_edge(pt(0.0, 0.0), pt(0.0, 1.0));
  let before = a.orig_next(&sub);
  sub.splice(a, b);
  sub.splice(a, b);
  assert_eq!(a.orig_next(&sub), before);
}
