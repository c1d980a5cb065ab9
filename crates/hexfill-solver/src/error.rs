//! Error types for hexfill-solver.

use hexfill_catalog::CatalogError;
use hexfill_topology::{HexCoord, LatticeError};
use thiserror::Error;

use crate::SolverState;

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, SolveError>;

/// Errors raised while configuring or driving a solve.
///
/// A contradiction is not one of these: it is the terminal
/// [`SolverState::Contradicted`] state.
#[derive(Debug, Error)]
pub enum SolveError {
    /// Lattice contract violation (bad dimensions or coordinate).
    #[error("lattice error: {0}")]
    Lattice(#[from] LatticeError),

    /// Catalog definition error.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The configuration is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// `initial_tiles` names a prototype the catalog does not have.
    #[error("unknown tile {0:?} in initial candidates")]
    UnknownTile(String),

    /// Placement was requested before the lattice fully collapsed.
    #[error("solver has not collapsed (state: {0:?})")]
    NotCollapsed(SolverState),

    /// Every retry ended in a contradiction.
    #[error("no collapse after {attempts} attempt(s); last contradiction at {last:?}")]
    Exhausted {
        attempts: u32,
        last: Option<HexCoord>,
    },

    /// Malformed config JSON.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
