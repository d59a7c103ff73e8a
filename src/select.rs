//! Quickselect: find the k-th smallest element under a caller-supplied
//! comparator. An external collaborator, not used by [`crate::triangulation`]
//! — useful to a caller that wants to split input by median before handing
//! halves to [`crate::triangulate`] itself, or for any other order-statistic.

use std::cmp::Ordering;

/// Reorders `items` in place and returns a reference to the element that
/// would sit at index `k` (0-based) were `items` fully sorted by `cmp`.
///
/// # Panics
/// Panics if `items` is empty or `k >= items.len()`.
pub fn nth_element<T, F>(items: &mut [T], k: usize, cmp: F) -> &T
where
  F: Fn(&T, &T) -> Ordering,
{
  assert!(k < items.len(), "nth_element: k out of bounds");
  let idx = select(items, k, &cmp);
  &items[idx]
}

/// Partitions `items[lo..=hi]` around a pivot and recurses into the side
/// containing index `k`, returning the final index of the k-th element.
fn select<T, F>(items: &mut [T], k: usize, cmp: &F) -> usize
where
  F: Fn(&T, &T) -> Ordering,
{
  let mut lo = 0;
  let mut hi = items.len() - 1;
  loop {
    if lo == hi {
      return lo;
    }
    let pivot = partition(&mut items[lo..=hi], cmp) + lo;
    match k.cmp(&pivot) {
      Ordering::Equal => return pivot,
      Ordering::Less => hi = pivot - 1,
      Ordering::Greater => lo = pivot + 1,
    }
  }
}

/// Lomuto partition using the middle element as pivot; returns the pivot's
/// final index within the slice.
fn partition<T, F>(slice: &mut [T], cmp: &F) -> usize
where
  F: Fn(&T, &T) -> Ordering,
{
  let pivot_idx = slice.len() / 2;
  slice.swap(pivot_idx, slice.len() - 1);

  let mut store = 0;
  for i in 0..slice.len() - 1 {
    if cmp(&slice[i], &slice[slice.len() - 1]) == Ordering::Less {
      slice.swap(i, store);
      store += 1;
    }
  }
  slice.swap(store, slice.len() - 1);
  store
}
