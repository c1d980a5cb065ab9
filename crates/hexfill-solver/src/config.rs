//! Solver configuration.

use std::path::Path;

use hexfill_catalog::TileCatalog;
use hexfill_heap::HeapOrder;
use hexfill_topology::{LatticeError, TileGeometry};
use serde::{Deserialize, Serialize};

use crate::cell::CandidateSet;
use crate::error::{Result, SolveError};

/// How far a collapse reaches into the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropagationMode {
    /// Filter only the direct neighbors of the resolved cell.
    #[default]
    Adjacent,
    /// Keep filtering outward, breadth-first, while sets keep shrinking.
    Cascade,
}

/// Everything a [`crate::Solver`] needs besides the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Lattice radius; must be even.
    pub radius: i64,

    /// Number of layers.
    pub height: i64,

    /// RNG seed for variant selection.
    pub seed: u64,

    /// Heap direction over `(remaining candidates, storage index)`.
    pub order: HeapOrder,

    pub propagation: PropagationMode,

    /// Fresh solves [`crate::solve_with_retries`] may run.
    pub max_attempts: u32,

    pub geometry: TileGeometry,

    /// Restrict every cell's initial candidates to these prototypes.
    /// `None` means the whole catalog.
    pub initial_tiles: Option<Vec<String>>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            radius: 4,
            height: 1,
            seed: 42,
            order: HeapOrder::Min,
            propagation: PropagationMode::Adjacent,
            max_attempts: 1,
            geometry: TileGeometry::default(),
            initial_tiles: None,
        }
    }
}

impl SolverConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Defaults overridden by `HEXFILL_RADIUS`, `HEXFILL_HEIGHT`,
    /// `HEXFILL_SEED` and `HEXFILL_MAX_ATTEMPTS` when set.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key/value source.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
            value.trim().parse().map_err(|_| {
                SolveError::InvalidConfig(format!("{key}={value:?} is not a valid number"))
            })
        }

        if let Some(v) = lookup("HEXFILL_RADIUS") {
            self.radius = parse("HEXFILL_RADIUS", &v)?;
        }
        if let Some(v) = lookup("HEXFILL_HEIGHT") {
            self.height = parse("HEXFILL_HEIGHT", &v)?;
        }
        if let Some(v) = lookup("HEXFILL_SEED") {
            self.seed = parse("HEXFILL_SEED", &v)?;
        }
        if let Some(v) = lookup("HEXFILL_MAX_ATTEMPTS") {
            self.max_attempts = parse("HEXFILL_MAX_ATTEMPTS", &v)?;
        }
        Ok(self)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check dimensions and retry count before any allocation.
    pub fn validate(&self) -> Result<()> {
        if self.radius < 0 {
            return Err(LatticeError::NegativeRadius(self.radius).into());
        }
        if self.radius % 2 != 0 {
            return Err(LatticeError::OddRadius(self.radius).into());
        }
        if self.height < 0 {
            return Err(LatticeError::NegativeHeight(self.height).into());
        }
        if self.max_attempts == 0 {
            return Err(SolveError::InvalidConfig(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// The candidate set every cell starts from.
    pub fn initial_candidates(&self, catalog: &TileCatalog) -> Result<CandidateSet> {
        let Some(names) = &self.initial_tiles else {
            return Ok(CandidateSet::full(catalog));
        };
        let mut ids = Vec::new();
        for name in names {
            let variants = catalog
                .variants_of(name)
                .ok_or_else(|| SolveError::UnknownTile(name.clone()))?;
            ids.extend(variants);
        }
        Ok(ids.into_iter().collect())
    }
}
