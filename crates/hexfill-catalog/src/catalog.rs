//! The compiled tile catalog.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use hexfill_topology::{Direction, DIRECTION_COUNT};
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::links::{DirectionSlots, LinkTable};
use crate::prototype::{CatalogDefinition, TilePrototype};
use crate::variant::{TileVariant, VariantId, ROTATION_COUNT};

/// Every rotational variant of a set of prototypes with its compiled
/// adjacency.
///
/// Built once, read-only afterwards. Owned by the caller and passed to
/// solvers by reference, so independent solves can share one catalog.
#[derive(Debug, Clone)]
pub struct TileCatalog {
    links: LinkTable,
    weights: Vec<f64>,
    variants: Vec<TileVariant>,
    registry: HashMap<TileVariant, VariantId>,
    adjacency: Vec<DirectionSlots>,
    /// `adjacency` resolved to sorted ids for fast membership checks.
    compatible: Vec<[Vec<VariantId>; DIRECTION_COUNT]>,
}

impl TileCatalog {
    /// Compile a catalog from authored prototypes.
    ///
    /// Variants are numbered prototype by prototype, six rotations each, in
    /// declaration order.
    pub fn compile(prototypes: &[TilePrototype]) -> Result<Self> {
        let links = LinkTable::build(prototypes)?;

        let mut weights = Vec::with_capacity(prototypes.len());
        let mut variants = Vec::with_capacity(prototypes.len() * ROTATION_COUNT);
        let mut registry = HashMap::new();
        for (p, name) in prototypes.iter().zip(links.names()) {
            if !(p.weight.is_finite() && p.weight > 0.0) {
                return Err(CatalogError::InvalidWeight {
                    prototype: p.name.clone(),
                    weight: p.weight,
                });
            }
            weights.push(p.weight);
            for variant in TileVariant::all_rotations(Arc::clone(name)) {
                let id = VariantId(variants.len() as u32);
                registry.insert(variant.clone(), id);
                variants.push(variant);
            }
        }

        let mut adjacency = Vec::with_capacity(variants.len());
        let mut compatible = Vec::with_capacity(variants.len());
        for variant in &variants {
            let slots = links.compile_adjacencies(variant.base(), variant.rotation())?;
            let ids: [Vec<VariantId>; DIRECTION_COUNT] = Direction::ALL.map(|d| {
                let mut ids: Vec<VariantId> = slots
                    .get(d)
                    .iter()
                    .filter_map(|v| registry.get(v).copied())
                    .collect();
                ids.sort_unstable();
                ids
            });
            debug!(
                variant = %variant,
                constrained = ids.iter().filter(|s| !s.is_empty()).count(),
                "compiled adjacency"
            );
            adjacency.push(slots);
            compatible.push(ids);
        }

        info!(
            prototypes = prototypes.len(),
            variants = variants.len(),
            links = links.links().len(),
            "tile catalog compiled"
        );

        Ok(Self {
            links,
            weights,
            variants,
            registry,
            adjacency,
            compatible,
        })
    }

    pub fn from_definition(definition: &CatalogDefinition) -> Result<Self> {
        Self::compile(&definition.prototypes)
    }

    /// Parse and compile a JSON [`CatalogDefinition`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let definition: CatalogDefinition = serde_json::from_str(json)?;
        Self::from_definition(&definition)
    }

    /// Read, parse and compile a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// All variants, indexed by [`VariantId`].
    pub fn variants(&self) -> &[TileVariant] {
        &self.variants
    }

    /// All variant ids in order.
    pub fn ids(&self) -> impl Iterator<Item = VariantId> + '_ {
        (0..self.variants.len() as u32).map(VariantId)
    }

    /// Variant behind `id`.
    ///
    /// Panics if `id` was not issued by this catalog.
    pub fn variant(&self, id: VariantId) -> &TileVariant {
        &self.variants[id.index()]
    }

    /// Registry lookup by identity.
    pub fn id_of(&self, variant: &TileVariant) -> Option<VariantId> {
        self.registry.get(variant).copied()
    }

    /// Prototype names in declaration order.
    pub fn prototype_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.links.names().iter().map(|n| n.as_ref())
    }

    /// The six variant ids of `prototype`.
    pub fn variants_of(&self, prototype: &str) -> Option<[VariantId; ROTATION_COUNT]> {
        let index = self.links.names().iter().position(|n| n.as_ref() == prototype)?;
        let first = (index * ROTATION_COUNT) as u32;
        Some(std::array::from_fn(|i| VariantId(first + i as u32)))
    }

    /// Selection weight of `id` (its prototype's declared frequency).
    pub fn weight(&self, id: VariantId) -> f64 {
        self.weights[id.index() / ROTATION_COUNT]
    }

    /// Compiled adjacency of `id`.
    pub fn adjacency(&self, id: VariantId) -> &DirectionSlots {
        &self.adjacency[id.index()]
    }

    /// Compiled adjacency by variant identity.
    pub fn adjacency_of(&self, variant: &TileVariant) -> Option<&DirectionSlots> {
        self.id_of(variant).map(|id| self.adjacency(id))
    }

    /// The full adjacency table, variant by variant.
    pub fn adjacency_table(&self) -> impl Iterator<Item = (&TileVariant, &DirectionSlots)> + '_ {
        self.variants.iter().zip(self.adjacency.iter())
    }

    /// The validated link table the catalog was compiled from.
    pub fn links(&self) -> &LinkTable {
        &self.links
    }

    /// Whether `from` lets `to` sit next to it in `direction`.
    ///
    /// An empty slot allows anything.
    pub fn allows(&self, from: VariantId, direction: Direction, to: VariantId) -> bool {
        let slot = &self.compatible[from.index()][direction.index()];
        slot.is_empty() || slot.binary_search(&to).is_ok()
    }

    /// Whether `a` and `b` may be neighbors with `b` in `direction` of `a`,
    /// checked from both sides.
    pub fn compatible(&self, a: VariantId, direction: Direction, b: VariantId) -> bool {
        self.allows(a, direction, b) && self.allows(b, direction.opposite(), a)
    }
}
