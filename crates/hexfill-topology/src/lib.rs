//! Hexfill Lattice Topology
//!
//! A bounded hex-prism lattice: axial hexagonal coordinates on a stack of
//! layers, each cell touching up to eight others.
//!
//! # Adjacency
//!
//! Every cell has exactly 8 adjacency slots:
//! - 6 lateral neighbors (hexagonal grid, 60 degree steps)
//! - 2 vertical neighbors (layers above/below)
//!
//! Cells on the lattice boundary simply lose the slots that would fall
//! outside it.
//!
//! # Bounds
//!
//! A lattice of even radius `R` and height `H` spans
//! `q, r ∈ [-R/2, R/2]` and `layer ∈ [0, H)`. Addressing anything outside
//! those bounds is a contract violation and always returns
//! [`LatticeError::OutOfRange`].

mod direction;
mod error;
mod geometry;
mod hex;
mod lattice;

pub use direction::Direction;
pub use error::{LatticeError, Result};
pub use geometry::TileGeometry;
pub use hex::HexCoord;
pub use lattice::Lattice;

/// Total adjacency slots per cell (invariant: always 8)
pub const DIRECTION_COUNT: usize = 8;

/// Lateral slots in the hexagonal plane
pub const LATERAL_DIRECTIONS: usize = 6;

/// Vertical slots (up/down layers)
pub const VERTICAL_DIRECTIONS: usize = 2;

// Compile-time assertion of the 8-slot invariant
const _: () = assert!(LATERAL_DIRECTIONS + VERTICAL_DIRECTIONS == DIRECTION_COUNT);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_invariant() {
        assert_eq!(LATERAL_DIRECTIONS + VERTICAL_DIRECTIONS, DIRECTION_COUNT);
        assert_eq!(Direction::ALL.len(), DIRECTION_COUNT);
        assert_eq!(Direction::LATERAL.len(), LATERAL_DIRECTIONS);
    }
}
