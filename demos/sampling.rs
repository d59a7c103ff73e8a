//! Generates a Poisson-disk point set and triangulates it.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use quadedge::{sampling, triangulate};

fn main() {
  env_logger::init();

  let mut rng = SmallRng::seed_from_u64(0x1234);
  let sampled = sampling::sample(&mut rng, 15.0, 300, 300, 30);
  println!("sampled {} points", sampled.len());

  let points: Vec<(f64, f64)> = sampled.iter().map(|&(x, y)| (x as f64, y as f64)).collect();
  let (sub, ..) = triangulate(&points).expect("sampled points triangulate");
  println!("triangulated into {} edges", sub.edge_count());
}
