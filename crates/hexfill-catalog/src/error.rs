//! Error types for hexfill-catalog.

use thiserror::Error;

/// Result type for catalog construction.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog definition errors.
///
/// All of these are fatal: a catalog that fails to compile is never
/// partially usable.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A side label is neither `above`/`below` nor a signed multiple of 60.
    #[error("prototype {prototype:?}: invalid side label {label:?}")]
    InvalidSideLabel { prototype: String, label: String },

    /// A declared link names no neighbor prototype.
    #[error("prototype {prototype:?}: link on side {side:?} has no neighbor")]
    MissingNeighbor { prototype: String, side: String },

    /// A lateral link names a neighbor but not the neighbor's side.
    #[error(
        "prototype {prototype:?}: link on side {side:?} to {neighbor:?} has no neighbor side"
    )]
    MissingNeighborSide {
        prototype: String,
        side: String,
        neighbor: String,
    },

    /// A lateral link points at the neighbor's top or bottom face.
    #[error(
        "prototype {prototype:?}: lateral side {side:?} cannot mate with \
         vertical side {neighbor_side:?} of {neighbor:?}"
    )]
    VerticalSideIndex {
        prototype: String,
        side: String,
        neighbor: String,
        neighbor_side: String,
    },

    /// A vertical link names a neighbor side; stacking ignores rotation.
    #[error(
        "prototype {prototype:?}: vertical side {side:?} link to {neighbor:?} \
         must not name a neighbor side, got {neighbor_side:?}"
    )]
    VerticalLinkWithSide {
        prototype: String,
        side: String,
        neighbor: String,
        neighbor_side: String,
    },

    /// A link names a prototype that is not in the catalog.
    #[error("prototype {prototype:?}: unknown neighbor prototype {neighbor:?}")]
    UnknownNeighbor { prototype: String, neighbor: String },

    /// Lookup of a prototype that was never declared.
    #[error("unknown prototype {0:?}")]
    UnknownPrototype(String),

    /// Two prototypes share a name.
    #[error("duplicate prototype {0:?}")]
    DuplicatePrototype(String),

    /// Selection weights must be finite and positive.
    #[error("prototype {prototype:?}: weight must be finite and positive, got {weight}")]
    InvalidWeight { prototype: String, weight: f64 },

    /// A rotation that is not a multiple of 60 degrees.
    #[error("rotation must be a multiple of 60 degrees, got {0}")]
    InvalidRotation(i64),

    /// Malformed catalog JSON.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
