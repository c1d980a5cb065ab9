//! The collapse loop.
//!
//! Cells wait in a [`PriorityHeap`] keyed by how many candidates they have
//! left. Each step pops the most constrained cell, commits it to one
//! variant, and filters its neighbors. There is no backtracking: a cell
//! whose candidates run out ends the solve as
//! [`SolverState::Contradicted`], and retrying with another seed is up to
//! the caller (see [`crate::solve_with_retries`]).

use std::collections::VecDeque;

use hexfill_catalog::{TileCatalog, TileVariant, VariantId};
use hexfill_heap::PriorityHeap;
use hexfill_topology::{HexCoord, Lattice};
use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::cell::{CandidateSet, CellState};
use crate::config::{PropagationMode, SolverConfig};
use crate::emit::Placements;
use crate::error::{Result, SolveError};
use crate::sink::WorldSink;

/// Remaining candidates, then storage index so ties break the same way on
/// every run.
type Priority = (usize, usize);

/// Where a solve is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverState {
    Uncollapsed,
    Collapsing,
    /// Every cell resolved.
    Collapsed,
    /// The cell at `at` ran out of candidates.
    Contradicted { at: HexCoord },
}

impl SolverState {
    /// `Collapsed` and `Contradicted` never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SolverState::Collapsed | SolverState::Contradicted { .. })
    }
}

/// What one call to [`Solver::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Resolved { coord: HexCoord, variant: VariantId },
    /// The popped cell was already resolved.
    Skipped(HexCoord),
    Contradicted(HexCoord),
    /// Nothing left to do; carries the terminal state.
    Finished(SolverState),
}

/// Counters for one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub steps: usize,
    pub resolved: usize,
    pub skipped: usize,
    /// Candidate sets that lost at least one entry during propagation.
    pub shrinks: usize,
    /// Which attempt this was, starting at 1.
    pub attempts: u32,
}

/// One solve over one lattice.
///
/// Owns its lattice, heap and RNG; borrows the catalog, so several solvers
/// can share a compiled catalog.
#[derive(Debug)]
pub struct Solver<'c> {
    catalog: &'c TileCatalog,
    config: SolverConfig,
    lattice: Lattice<CellState>,
    heap: PriorityHeap<HexCoord, Priority>,
    rng: ChaCha8Rng,
    state: SolverState,
    pub(crate) stats: SolveStats,
}

impl<'c> Solver<'c> {
    /// Allocate the lattice and queue every cell.
    ///
    /// Cells start with the whole catalog, or only the prototypes listed in
    /// [`SolverConfig::initial_tiles`].
    pub fn new(catalog: &'c TileCatalog, config: SolverConfig) -> Result<Self> {
        config.validate()?;
        let initial = config.initial_candidates(catalog)?;
        Self::with_candidates(catalog, config, initial)
    }

    /// Like [`Solver::new`] with an explicit starting candidate set.
    pub fn with_candidates(
        catalog: &'c TileCatalog,
        config: SolverConfig,
        initial: CandidateSet,
    ) -> Result<Self> {
        config.validate()?;
        if let Some(foreign) = initial.iter().find(|id| id.index() >= catalog.len()) {
            return Err(SolveError::InvalidConfig(format!(
                "initial candidate {foreign} is not in the catalog ({} variants)",
                catalog.len()
            )));
        }
        let count = initial.len();
        let lattice = Lattice::with_geometry(
            config.radius,
            config.height,
            config.geometry,
            CellState::Superposition(initial),
        )?;

        let mut heap = PriorityHeap::with_capacity(config.order, lattice.len());
        for (index, coord) in lattice.coords().enumerate() {
            heap.insert(coord, (count, index));
        }

        debug!(
            radius = config.radius,
            height = config.height,
            cells = lattice.len(),
            candidates = count,
            seed = config.seed,
            "solver initialized"
        );

        Ok(Self {
            catalog,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            lattice,
            heap,
            state: SolverState::Uncollapsed,
            stats: SolveStats {
                attempts: 1,
                ..Default::default()
            },
        })
    }

    pub fn catalog(&self) -> &'c TileCatalog {
        self.catalog
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    pub fn lattice(&self) -> &Lattice<CellState> {
        &self.lattice
    }

    /// Cells still waiting in the heap.
    pub fn pending(&self) -> usize {
        self.heap.len()
    }

    pub fn cell(&self, coord: HexCoord) -> Result<&CellState> {
        Ok(self.lattice.get(coord)?)
    }

    /// The variant at `coord`, if resolved.
    pub fn resolved_variant(&self, coord: HexCoord) -> Result<Option<&'c TileVariant>> {
        Ok(self.cell(coord)?.resolved().map(|id| self.catalog.variant(id)))
    }

    /// Pop one cell and act on it.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if self.state.is_terminal() {
            return Ok(StepOutcome::Finished(self.state));
        }
        self.state = SolverState::Collapsing;

        let Some(coord) = self.heap.pop() else {
            return Ok(StepOutcome::Finished(self.finish()));
        };
        self.stats.steps += 1;

        let candidates: Vec<VariantId> = match self.lattice.get(coord)? {
            CellState::Resolved(_) => {
                self.stats.skipped += 1;
                return Ok(StepOutcome::Skipped(coord));
            }
            CellState::Superposition(set) => set.iter().collect(),
        };

        if candidates.is_empty() {
            warn!(%coord, "contradiction: no candidates left");
            self.conclude(SolverState::Contradicted { at: coord });
            return Ok(StepOutcome::Contradicted(coord));
        }

        let variant = self.choose(&candidates);
        self.lattice.set(coord, CellState::Resolved(variant))?;
        self.stats.resolved += 1;
        debug!(
            %coord,
            variant = %self.catalog.variant(variant),
            options = candidates.len(),
            "collapsed cell"
        );

        self.propagate(coord)?;
        Ok(StepOutcome::Resolved { coord, variant })
    }

    /// Step until the solve ends.
    pub fn run(&mut self) -> Result<SolverState> {
        self.run_until(|| false)
    }

    /// Step until the solve ends or `stop` returns true.
    ///
    /// `stop` is consulted between steps only, so a stopped solver is
    /// always consistent and `run` picks it up where it paused.
    pub fn run_until(&mut self, mut stop: impl FnMut() -> bool) -> Result<SolverState> {
        while !self.state.is_terminal() {
            if stop() {
                debug!(pending = self.heap.len(), "solve paused");
                break;
            }
            self.step()?;
        }
        Ok(self.state)
    }

    /// Resolved cells in storage order. Fails unless the solve collapsed.
    pub fn placements(&self) -> Result<Placements<'_>> {
        match self.state {
            SolverState::Collapsed => Ok(Placements::new(&self.lattice, self.catalog)),
            other => Err(SolveError::NotCollapsed(other)),
        }
    }

    /// Hand every resolved cell to `sink`. Returns the number placed.
    pub fn emit<S: WorldSink + ?Sized>(&self, sink: &mut S) -> Result<usize> {
        Ok(self.placements()?.emit_all(sink))
    }

    fn choose(&mut self, candidates: &[VariantId]) -> VariantId {
        let catalog = self.catalog;
        match WeightedIndex::new(candidates.iter().map(|&id| catalog.weight(id))) {
            Ok(dist) => candidates[dist.sample(&mut self.rng)],
            Err(_) => candidates[self.rng.gen_range(0..candidates.len())],
        }
    }

    /// Filter the neighbors of `origin` against what it can still be.
    ///
    /// Emptied sets are left in place and reported when popped.
    fn propagate(&mut self, origin: HexCoord) -> Result<()> {
        let catalog = self.catalog;
        let mut queue = VecDeque::from([origin]);

        while let Some(source) = queue.pop_front() {
            let options: Vec<VariantId> = match self.lattice.get(source)? {
                CellState::Resolved(id) => vec![*id],
                CellState::Superposition(set) => set.iter().collect(),
            };

            for (direction, neighbor) in self.lattice.neighbors_of(source)? {
                let CellState::Superposition(candidates) = self.lattice.get_mut(neighbor)? else {
                    continue;
                };
                let shrank = candidates.retain(|id| {
                    options
                        .iter()
                        .any(|&option| catalog.compatible(option, direction, id))
                });
                if !shrank {
                    continue;
                }
                let remaining = candidates.len();
                self.stats.shrinks += 1;

                let index = self.lattice.index_of(neighbor)?;
                self.heap.update_priority(&neighbor, (remaining, index));

                if remaining == 0 {
                    debug!(%neighbor, from = %source, "candidate set emptied");
                } else if self.config.propagation == PropagationMode::Cascade {
                    queue.push_back(neighbor);
                }
            }
        }
        Ok(())
    }

    /// Heap is empty: collapsed unless some cell never resolved.
    fn finish(&mut self) -> SolverState {
        let state = match self.lattice.iter().find(|(_, cell)| !cell.is_resolved()) {
            Some((at, _)) => SolverState::Contradicted { at },
            None => SolverState::Collapsed,
        };
        self.conclude(state);
        state
    }

    fn conclude(&mut self, state: SolverState) {
        self.state = state;
        let SolveStats {
            steps,
            resolved,
            skipped,
            shrinks,
            attempts,
        } = self.stats;
        match state {
            SolverState::Collapsed => info!(
                cells = self.lattice.len(),
                steps, resolved, skipped, shrinks, attempts,
                "lattice collapsed"
            ),
            SolverState::Contradicted { at } => info!(
                %at,
                steps, resolved, skipped, shrinks, attempts,
                "lattice contradicted"
            ),
            SolverState::Uncollapsed | SolverState::Collapsing => {}
        }
    }
}
