//! Paced emission of a collapsed lattice.

use hexfill_catalog::{TileCatalog, TileVariant};
use hexfill_topology::{HexCoord, Lattice};

use crate::cell::CellState;
use crate::sink::{WorldSink, WorldTransform};

/// One resolved cell ready to hand to a [`WorldSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<'a> {
    pub coord: HexCoord,
    pub variant: &'a TileVariant,
    pub transform: WorldTransform,
}

/// Cursor over the resolved cells of a collapsed lattice in storage order
/// (q, then layer, then r).
///
/// [`Placements::emit_batch`] lets a host place a bounded number of tiles
/// per frame and pick up where it left off.
#[derive(Debug, Clone)]
pub struct Placements<'a> {
    lattice: &'a Lattice<CellState>,
    catalog: &'a TileCatalog,
    cursor: usize,
}

impl<'a> Placements<'a> {
    pub(crate) fn new(lattice: &'a Lattice<CellState>, catalog: &'a TileCatalog) -> Self {
        Self {
            lattice,
            catalog,
            cursor: 0,
        }
    }

    /// Cells not yet emitted.
    pub fn remaining(&self) -> usize {
        self.lattice.len().saturating_sub(self.cursor)
    }

    pub fn is_done(&self) -> bool {
        self.remaining() == 0
    }

    /// Place at most `budget` cells. Returns how many were placed.
    pub fn emit_batch<S: WorldSink + ?Sized>(&mut self, sink: &mut S, budget: usize) -> usize {
        let mut placed = 0;
        while placed < budget {
            let Some(p) = self.next() else { break };
            sink.place(p.variant, p.transform);
            placed += 1;
        }
        placed
    }

    /// Place everything that is left.
    pub fn emit_all<S: WorldSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        self.emit_batch(sink, usize::MAX)
    }
}

impl<'a> Iterator for Placements<'a> {
    type Item = Placement<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (lattice, catalog) = (self.lattice, self.catalog);
        while let Some(coord) = lattice.coord_at(self.cursor) {
            self.cursor += 1;
            // Only collapsed lattices are handed out, so every cell resolves.
            let Ok(CellState::Resolved(id)) = lattice.get(coord) else {
                continue;
            };
            let variant = catalog.variant(*id);
            let translation = lattice.geometry().world_position(coord);
            let degrees = f32::from(variant.rotation().degrees());
            return Some(Placement {
                coord,
                variant,
                transform: WorldTransform::new(translation, degrees),
            });
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}
