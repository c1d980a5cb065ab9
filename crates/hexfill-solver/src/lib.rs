//! Hexfill Solver
//!
//! Fills a hex-prism [`hexfill_topology::Lattice`] with tile variants from
//! a [`hexfill_catalog::TileCatalog`] so that every pair of neighbors is
//! compatible, then hands the result to a [`WorldSink`].
//!
//! ```
//! use hexfill_catalog::{TileCatalog, TilePrototype};
//! use hexfill_solver::{RecordingSink, Solver, SolverConfig, SolverState};
//!
//! let catalog = TileCatalog::compile(&[TilePrototype::new("grass")]).unwrap();
//! let config = SolverConfig { radius: 2, ..Default::default() };
//! let mut solver = Solver::new(&catalog, config).unwrap();
//! assert_eq!(solver.run().unwrap(), SolverState::Collapsed);
//!
//! let mut sink = RecordingSink::new();
//! assert_eq!(solver.emit(&mut sink).unwrap(), 9);
//! ```

mod cell;
mod config;
mod emit;
mod error;
mod retry;
mod sink;
mod solver;

pub use cell::{CandidateSet, CellState};
pub use config::{PropagationMode, SolverConfig};
pub use emit::{Placement, Placements};
pub use error::{Result, SolveError};
pub use retry::solve_with_retries;
pub use sink::{RecordingSink, WorldSink, WorldTransform};
pub use solver::{SolveStats, Solver, SolverState, StepOutcome};
