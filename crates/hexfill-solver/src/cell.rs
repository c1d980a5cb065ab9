//! Per-cell solve state.

use std::collections::BTreeSet;

use hexfill_catalog::{TileCatalog, VariantId};

/// Variants still possible for an unresolved cell.
///
/// Every cell owns its own set; propagation filters in place and never
/// shares storage between cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet(BTreeSet<VariantId>);

impl CandidateSet {
    /// Every variant in `catalog`.
    pub fn full(catalog: &TileCatalog) -> Self {
        catalog.ids().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// An empty set on an unresolved cell is a contradiction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: VariantId) -> bool {
        self.0.contains(&id)
    }

    /// Ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = VariantId> + '_ {
        self.0.iter().copied()
    }

    /// Keep only the ids `keep` accepts. Returns true if anything was removed.
    pub fn retain(&mut self, mut keep: impl FnMut(VariantId) -> bool) -> bool {
        let before = self.0.len();
        self.0.retain(|&id| keep(id));
        self.0.len() < before
    }
}

impl FromIterator<VariantId> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = VariantId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// State of one lattice cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellState {
    Superposition(CandidateSet),
    /// Terminal. Nothing moves a cell out of this state.
    Resolved(VariantId),
}

impl CellState {
    pub fn is_resolved(&self) -> bool {
        matches!(self, CellState::Resolved(_))
    }

    pub fn resolved(&self) -> Option<VariantId> {
        match self {
            CellState::Resolved(id) => Some(*id),
            CellState::Superposition(_) => None,
        }
    }

    pub fn candidates(&self) -> Option<&CandidateSet> {
        match self {
            CellState::Superposition(set) => Some(set),
            CellState::Resolved(_) => None,
        }
    }

    /// Unresolved with nothing left to choose from.
    pub fn is_contradiction(&self) -> bool {
        matches!(self, CellState::Superposition(set) if set.is_empty())
    }

    /// How many variants the cell could still become.
    pub fn remaining(&self) -> usize {
        match self {
            CellState::Superposition(set) => set.len(),
            CellState::Resolved(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexfill_catalog::TilePrototype;

    #[test]
    fn full_set_covers_catalog() {
        let catalog =
            TileCatalog::compile(&[TilePrototype::new("a"), TilePrototype::new("b")]).unwrap();
        let set = CandidateSet::full(&catalog);
        assert_eq!(set.len(), 12);
        assert!(set.iter().eq(catalog.ids()));
    }

    #[test]
    fn retain_reports_shrink() {
        let mut set: CandidateSet = (0..4).map(VariantId).collect();
        assert!(!set.retain(|_| true));
        assert!(set.retain(|id| id.0 % 2 == 0));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![VariantId(0), VariantId(2)]);
        assert!(set.retain(|_| false));
        assert!(set.is_empty());
    }

    #[test]
    fn contradiction_is_an_empty_superposition() {
        let empty = CellState::Superposition(CandidateSet::default());
        assert!(empty.is_contradiction());
        assert_eq!(empty.remaining(), 0);
        assert!(empty.resolved().is_none());

        let resolved = CellState::Resolved(VariantId(3));
        assert!(!resolved.is_contradiction());
        assert!(resolved.is_resolved());
        assert_eq!(resolved.resolved(), Some(VariantId(3)));
        assert!(resolved.candidates().is_none());
    }
}
