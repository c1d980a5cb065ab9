//! Lattice addresses.
//!
//! Cells are addressed with axial hex coordinates (q, r) plus a `layer`
//! index for the stack of prisms.

use std::ops::Add;

use crate::Direction;

/// Address of one prism: axial (q, r) on the hex plane and a layer.
///
/// Ordering is field order (q, r, layer); the lattice's own storage order
/// is q, layer, r and does not rely on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    pub q: i64,
    pub r: i64,
    pub layer: i64,
}

impl HexCoord {
    pub const ORIGIN: Self = Self { q: 0, r: 0, layer: 0 };

    pub const fn new(q: i64, r: i64, layer: i64) -> Self {
        Self { q, r, layer }
    }

    /// Steps between the two cells on the hex plane, ignoring layers.
    pub fn hex_distance(&self, other: &Self) -> u64 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        dq.unsigned_abs()
            .max(dr.unsigned_abs())
            .max((dq + dr).unsigned_abs())
    }

    /// The coordinate one step away in `direction`.
    #[inline]
    pub fn neighbor(&self, direction: Direction) -> Self {
        *self + direction.offset()
    }

    /// All eight adjacent coordinates, indexed like [`Direction::ALL`].
    ///
    /// Unbounded; [`crate::Lattice::neighbors_of`] drops the ones outside
    /// the lattice.
    pub fn neighbors(&self) -> [Self; 8] {
        Direction::ALL.map(|d| self.neighbor(d))
    }
}

impl Add for HexCoord {
    type Output = Self;

    #[inline]
    fn add(self, offset: Self) -> Self {
        Self::new(self.q + offset.q, self.r + offset.r, self.layer + offset.layer)
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lateral_neighbors_stay_on_layer() {
        let c = HexCoord::new(3, -2, 1);
        for n in &c.neighbors()[..6] {
            assert_eq!(c.hex_distance(n), 1);
            assert_eq!(n.layer, 1);
        }
    }

    #[test]
    fn vertical_neighbors_stay_in_column() {
        let c = HexCoord::new(2, -1, 3);
        assert_eq!(c.neighbor(Direction::Above), HexCoord::new(2, -1, 4));
        assert_eq!(c.neighbor(Direction::Below), HexCoord::new(2, -1, 2));
        assert_eq!(c.hex_distance(&c.neighbor(Direction::Above)), 0);
    }

    #[test]
    fn eight_distinct_neighbors() {
        let mut all = HexCoord::new(1, 1, 1).neighbors().to_vec();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 8);
    }

    #[test]
    fn stepping_there_and_back() {
        let c = HexCoord::new(-4, 7, 2);
        for d in Direction::ALL {
            assert_eq!(c.neighbor(d).neighbor(d.opposite()), c, "{d}");
        }
    }

    #[test]
    fn hex_distance_uses_third_axis() {
        // (2, -1) is two steps away even though |dq| + |dr| = 3.
        assert_eq!(HexCoord::ORIGIN.hex_distance(&HexCoord::new(2, -1, 5)), 2);
        assert_eq!(HexCoord::ORIGIN.hex_distance(&HexCoord::new(2, 1, 0)), 3);
    }

    #[test]
    fn display() {
        assert_eq!(HexCoord::new(-1, 0, 2).to_string(), "(-1, 0, 2)");
    }
}
