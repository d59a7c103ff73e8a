//! L1: the Quad-Edge planar-subdivision structure (Guibas–Stolfi).
//!
//! Quartets live in a single arena owned by a [`Subdivision`]; `rot` and
//! `next` are indices rather than pointers, which sidesteps the cyclic
//! references inherent in the edge algebra (see the design notes). An
//! [`EdgeRef`] is a `Copy` handle into that arena and carries no lifetime of
//! its own — its validity is bounded by the `Subdivision` it was produced
//! from, exactly like an index into a `Vec` would be.

use crate::{Error, Point};

/// A directed reference to one of the four records in a quad-edge quartet.
///
/// `rot` cycles through `{0, 1, 2, 3}`; records `0` and `2` are primal
/// (origin/destination of the same undirected edge), `1` and `3` are the
/// two directions of its dual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRef {
  quartet: usize,
  rot: u8,
}

impl EdgeRef {
  /// Same edge, opposite direction.
  pub fn sym(self) -> EdgeRef {
    EdgeRef {
      quartet: self.quartet,
      rot: (self.rot + 2) % 4,
    }
  }

  /// The dual edge crossing this one, same direction.
  pub fn rot(self) -> EdgeRef {
    EdgeRef {
      quartet: self.quartet,
      rot: (self.rot + 1) % 4,
    }
  }

  /// The dual edge crossing this one, opposite direction.
  pub fn rot_inv(self) -> EdgeRef {
    EdgeRef {
      quartet: self.quartet,
      rot: (self.rot + 3) % 4,
    }
  }

  pub fn orig(self, sub: &Subdivision) -> Option<Point> {
    sub.record(self).orig
  }

  pub fn dest(self, sub: &Subdivision) -> Option<Point> {
    self.sym().orig(sub)
  }

  /// Next edge counterclockwise around `orig(self)`.
  pub fn orig_next(self, sub: &Subdivision) -> EdgeRef {
    sub.record(self).next
  }

  /// Previous edge counterclockwise around `orig(self)`.
  pub fn orig_prev(self, sub: &Subdivision) -> EdgeRef {
    self.rot().orig_next(sub).rot()
  }

  /// Next edge counterclockwise around `dest(self)`.
  pub fn dest_next(self, sub: &Subdivision) -> EdgeRef {
    self.sym().orig_next(sub).sym()
  }

  /// Previous edge counterclockwise around `dest(self)`.
  pub fn dest_prev(self, sub: &Subdivision) -> EdgeRef {
    self.rot_inv().orig_next(sub).rot_inv()
  }

  /// Next edge counterclockwise around the left face.
  pub fn left_next(self, sub: &Subdivision) -> EdgeRef {
    self.rot_inv().orig_next(sub).rot()
  }

  /// Previous edge counterclockwise around the left face.
  pub fn left_prev(self, sub: &Subdivision) -> EdgeRef {
    self.orig_next(sub).sym()
  }

  /// Next edge counterclockwise around the right face.
  pub fn right_next(self, sub: &Subdivision) -> EdgeRef {
    self.rot().orig_next(sub).rot_inv()
  }

  /// Previous edge counterclockwise around the right face.
  pub fn right_prev(self, sub: &Subdivision) -> EdgeRef {
    self.sym().orig_next(sub)
  }

  pub fn data(self, sub: &Subdivision) -> Option<u32> {
    sub.record(self).data
  }

  pub fn set_data(self, sub: &mut Subdivision, data: Option<u32>) {
    sub.record_mut(self).data = data;
  }
}

#[derive(Debug, Clone, Copy)]
struct Record {
  orig: Option<Point>,
  next: EdgeRef,
  data: Option<u32>,
}

#[derive(Debug, Clone)]
struct Quartet {
  records: [Record; 4],
  live: bool,
}

/// An arena of quad-edge quartets: one undirected edge, plus its dual, per
/// quartet. Quartets are created by [`Subdivision::make_edge`] and freed by
/// [`Subdivision::disconnect`]; freed slots are recycled by later
/// `make_edge` calls.
///
/// Deliberately `!Send` and `!Sync`: a subdivision under construction is
/// not safe to touch from more than one flow of control (§5), and that
/// contract is worth expressing as a type-level fact rather than only in
/// prose.
#[derive(Debug, Default)]
pub struct Subdivision {
  quartets: Vec<Quartet>,
  free: Vec<usize>,
  _not_send_or_sync: std::marker::PhantomData<std::cell::Cell<()>>,
}

impl Subdivision {
  pub fn new() -> Subdivision {
    Subdivision::default()
  }

  fn record(&self, e: EdgeRef) -> &Record {
    &self.quartets[e.quartet].records[e.rot as usize]
  }

  fn record_mut(&mut self, e: EdgeRef) -> &mut Record {
    &mut self.quartets[e.quartet].records[e.rot as usize]
  }

  fn alloc_quartet(&mut self) -> usize {
    match self.free.pop() {
      Some(idx) => idx,
      None => {
        self.quartets.push(Quartet {
          records: [Record {
            orig: None,
            next: EdgeRef { quartet: 0, rot: 0 },
            data: None,
          }; 4],
          live: false,
        });
        self.quartets.len() - 1
      }
    }
  }

  /// Allocate a fresh quartet representing a new edge from `a` to `b`,
  /// disconnected from any existing subdivision.
  pub fn make_edge(&mut self, a: Point, b: Point) -> EdgeRef {
    let idx = self.alloc_quartet();
    let q0 = EdgeRef { quartet: idx, rot: 0 };
    let q1 = EdgeRef { quartet: idx, rot: 1 };
    let q2 = EdgeRef { quartet: idx, rot: 2 };
    let q3 = EdgeRef { quartet: idx, rot: 3 };
    self.quartets[idx] = Quartet {
      records: [
        Record { orig: Some(a), next: q0, data: None },
        Record { orig: None, next: q3, data: None },
        Record { orig: Some(b), next: q2, data: None },
        Record { orig: None, next: q1, data: None },
      ],
      live: true,
    };
    log::trace!("make_edge -> {:?}", q0);
    q0
  }

  fn set_next(&mut self, e: EdgeRef, next: EdgeRef) {
    self.record_mut(e).next = next;
  }

  fn set_orig(&mut self, e: EdgeRef, p: Point) {
    self.record_mut(e).orig = Some(p);
  }

  /// The only primitive that mutates connectivity. An involution on the
  /// pair `(a, b)`: calling it twice with the same arguments restores the
  /// original topology.
  pub fn splice(&mut self, a: EdgeRef, b: EdgeRef) {
    let alpha = a.orig_next(self).rot();
    let beta = b.orig_next(self).rot();

    let a_next = a.orig_next(self);
    let b_next = b.orig_next(self);
    let alpha_next = alpha.orig_next(self);
    let beta_next = beta.orig_next(self);

    self.set_next(a, b_next);
    self.set_next(b, a_next);
    self.set_next(alpha, beta_next);
    self.set_next(beta, alpha_next);

    log::trace!("splice({:?}, {:?})", a, b);
  }

  /// A new edge from `dest(a)` to `orig(b)`, such that `a`, `b`, and the
  /// result bound a common left face.
  pub fn connect(&mut self, a: EdgeRef, b: EdgeRef) -> EdgeRef {
    let e = self.make_edge(
      a.dest(self).expect("connect: `a` is not a primal edge"),
      b.orig(self).expect("connect: `b` is not a primal edge"),
    );
    self.splice(e, a.left_next(self));
    self.splice(e.sym(), b);
    log::trace!("connect({:?}, {:?}) -> {:?}", a, b, e);
    e
  }

  /// Isolate `q`'s quartet; no retained handle in the subdivision reaches
  /// it afterwards, and its slot is eligible for reuse.
  pub fn disconnect(&mut self, q: EdgeRef) {
    self.splice(q, q.orig_prev(self));
    self.splice(q.sym(), q.sym().orig_prev(self));
    self.quartets[q.quartet].live = false;
    self.free.push(q.quartet);
    log::trace!("disconnect({:?})", q);
  }

  /// Flip the diagonal `q` of the convex quadrilateral whose two triangles
  /// share it.
  pub fn swap(&mut self, q: EdgeRef) {
    let a = q.orig_prev(self);
    let b = q.sym().orig_prev(self);
    self.splice(q, a);
    self.splice(q.sym(), b);
    self.splice(q, a.left_next(self));
    self.splice(q.sym(), b.left_next(self));
    let a_dest = a.dest(self).expect("swap: neighbor is not a primal edge");
    let b_dest = b.dest(self).expect("swap: neighbor is not a primal edge");
    self.set_orig(q, a_dest);
    self.set_orig(q.sym(), b_dest);
    log::trace!("swap({:?})", q);
  }

  /// Every undirected edge exactly once, as a pair of its endpoints. Since
  /// each live quartet *is* one undirected edge, this is a plain scan of
  /// the arena rather than a graph traversal.
  pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
    self.quartets.iter().filter(|q| q.live).map(|q| {
      let orig = q.records[0].orig.expect("primal record without origin");
      let dest = q.records[2].orig.expect("primal record without origin");
      (orig, dest)
    })
  }

  pub fn edge_count(&self) -> usize {
    self.quartets.iter().filter(|q| q.live).count()
  }

  /// Walk `orig_next` from every live primal edge and confirm each ring
  /// closes within a bound on the number of live edges (I2). Only run in
  /// debug builds; the merge loop assumes a valid structure at every step
  /// and this exists to catch a broken invariant early during development.
  #[cfg(debug_assertions)]
  pub fn check_invariant(&self) -> Result<(), Error> {
    let bound = self.quartets.iter().filter(|q| q.live).count() * 4 + 4;
    for (idx, quartet) in self.quartets.iter().enumerate() {
      if !quartet.live {
        continue;
      }
      let start = EdgeRef { quartet: idx, rot: 0 };
      let mut cur = start.orig_next(self);
      let mut steps = 0;
      while cur != start {
        steps += 1;
        if steps > bound {
          return Err(Error::InvariantViolation);
        }
        cur = cur.orig_next(self);
      }
    }
    Ok(())
  }

  #[cfg(not(debug_assertions))]
  pub fn check_invariant(&self) -> Result<(), Error> {
    Ok(())
  }
}
