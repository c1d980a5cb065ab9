//! Restarting contradicted solves with fresh seeds.

use hexfill_catalog::TileCatalog;
use tracing::{info, warn};

use crate::config::SolverConfig;
use crate::error::{Result, SolveError};
use crate::solver::{Solver, SolverState};

/// Run up to `config.max_attempts` solves, seeding attempt `n` with
/// `config.seed + n`, and return the first one that collapses.
///
/// Each attempt starts from a fresh lattice; nothing carries over.
pub fn solve_with_retries<'c>(
    catalog: &'c TileCatalog,
    config: &SolverConfig,
) -> Result<Solver<'c>> {
    config.validate()?;

    let mut last = None;
    for attempt in 0..config.max_attempts {
        let seed = config.seed.wrapping_add(u64::from(attempt));
        let mut solver = Solver::new(catalog, config.clone().with_seed(seed))?;
        solver.stats.attempts = attempt + 1;

        match solver.run()? {
            SolverState::Collapsed => {
                info!(attempt = attempt + 1, seed, "solve succeeded");
                return Ok(solver);
            }
            SolverState::Contradicted { at } => {
                warn!(attempt = attempt + 1, seed, %at, "solve contradicted, retrying");
                last = Some(at);
            }
            SolverState::Uncollapsed | SolverState::Collapsing => {}
        }
    }

    Err(SolveError::Exhausted {
        attempts: config.max_attempts,
        last,
    })
}
