//! Shared-edge collapsing.
//!
//! Composed figures can emit the same physical stick twice (two squares sharing a wall, a
//! roof sitting on a wall). Before counting, every stick is reduced to an orientation-free
//! key built from its endpoints rounded to [`DEDUP_PRECISION`] decimals; only the first stick
//! per key survives, in its original direction.

use std::collections::HashSet;

use crate::geometry::Matchstick;

/// Decimal places kept when comparing endpoints.
pub const DEDUP_PRECISION: u32 = 3;

type GridPoint = (i64, i64);

/// Orientation-independent identity of a stick: the lower endpoint first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(GridPoint, GridPoint);

fn snap(v: f64) -> i64 {
    let scale = 10f64.powi(DEDUP_PRECISION as i32);
    (v * scale).round() as i64
}

impl EdgeKey {
    pub fn of(stick: &Matchstick) -> Self {
        let a = (snap(stick.x1), snap(stick.y1));
        let b = (snap(stick.x2), snap(stick.y2));
        if a <= b { EdgeKey(a, b) } else { EdgeKey(b, a) }
    }

    pub fn is_degenerate(&self) -> bool {
        self.0 == self.1
    }
}

/// Keeps the first occurrence of every distinct edge, preserving order and direction.
pub fn dedup_sticks(sticks: impl IntoIterator<Item = Matchstick>) -> Vec<Matchstick> {
    let mut seen = HashSet::new();
    sticks
        .into_iter()
        .filter(|s| seen.insert(EdgeKey::of(s)))
        .collect()
}

/// Removes sticks whose endpoints coincide after rounding.
pub fn drop_degenerate(sticks: impl IntoIterator<Item = Matchstick>) -> Vec<Matchstick> {
    sticks
        .into_iter()
        .filter(|s| !EdgeKey::of(s).is_degenerate())
        .collect()
}

/// Number of distinct edges, without materializing the filtered list.
pub fn distinct_edge_count(sticks: &[Matchstick]) -> usize {
    sticks.iter().map(EdgeKey::of).collect::<HashSet<_>>().len()
}
