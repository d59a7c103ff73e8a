//! Triangulates a handful of random points and prints the resulting edges.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use quadedge::triangulate;

fn main() {
  env_logger::init();

  let mut rng = SmallRng::seed_from_u64(0xdeadbeef);
  let points: Vec<(f64, f64)> = (0..30)
    .map(|_| (rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
    .collect();

  let (sub, ldo, rdo) = triangulate(&points).expect("enough points to triangulate");
  println!(
    "triangulated {} points into {} edges",
    points.len(),
    sub.edge_count()
  );
  println!("ldo: {:?}, rdo: {:?}", ldo, rdo);

  for (a, b) in sub.edges() {
    println!("({:.2}, {:.2}) -- ({:.2}, {:.2})", a.x, a.y, b.x, b.y);
  }
}
