//! Error types for hexfill-topology.

use thiserror::Error;

use crate::HexCoord;

/// Result type for lattice operations.
pub type Result<T> = std::result::Result<T, LatticeError>;

/// Contract violations when allocating or addressing a [`crate::Lattice`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatticeError {
    /// The radius must be even so the lattice is centred on the origin.
    #[error("lattice radius must be even, got {0}")]
    OddRadius(i64),

    /// The radius must not be negative.
    #[error("lattice radius must be non-negative, got {0}")]
    NegativeRadius(i64),

    /// The layer count must not be negative.
    #[error("lattice height must be non-negative, got {0}")]
    NegativeHeight(i64),

    /// The cell count does not fit in memory addressing.
    #[error("lattice of radius {radius} and height {height} is too large to allocate")]
    TooLarge { radius: i64, height: i64 },

    /// A coordinate fell outside the allocated bounds.
    #[error("coordinate {coord} out of range: {bounds}")]
    OutOfRange { coord: HexCoord, bounds: String },
}
