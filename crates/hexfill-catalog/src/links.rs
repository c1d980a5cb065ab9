//! Flat neighbor-link table and per-rotation adjacency compilation.
//!
//! Prototypes never hold references to each other. Every declared link is
//! flattened into a `(prototype, side) -> (neighbor, neighbor side)` row and
//! neighbors are resolved by name when a rotation is compiled.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use hexfill_topology::{Direction, DIRECTION_COUNT};

use crate::error::{CatalogError, Result};
use crate::prototype::{SideSlot, TilePrototype};
use crate::variant::{Rotation, TileVariant};

/// Which face of the prototype a link attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Our lateral `side` mates with the neighbor's lateral `neighbor_side`,
    /// both in degrees within `[0, 360)`.
    Lateral { side: u16, neighbor_side: u16 },
    Above,
    Below,
}

/// One validated link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub prototype: Arc<str>,
    pub neighbor: Arc<str>,
    pub kind: LinkKind,
}

/// Every link of every prototype, validated and name-resolved.
#[derive(Debug, Clone, Default)]
pub struct LinkTable {
    names: Vec<Arc<str>>,
    links: Vec<Link>,
}

impl LinkTable {
    /// Validate all side labels and neighbor references and flatten them.
    ///
    /// Fails on the first definition error; no partial table is returned.
    pub fn build(prototypes: &[TilePrototype]) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut names = Vec::with_capacity(prototypes.len());
        for p in prototypes {
            if !seen.insert(p.name.as_str()) {
                return Err(CatalogError::DuplicatePrototype(p.name.clone()));
            }
            names.push(Arc::<str>::from(p.name.as_str()));
        }

        let mut links = Vec::new();
        for (p, name) in prototypes.iter().zip(&names) {
            for (label, declared) in &p.sides {
                let side = label.parse(&p.name)?;
                for link in declared {
                    let neighbor_name = link.neighbor.as_deref().ok_or_else(|| {
                        CatalogError::MissingNeighbor {
                            prototype: p.name.clone(),
                            side: label.to_string(),
                        }
                    })?;
                    let neighbor = names
                        .iter()
                        .find(|n| n.as_ref() == neighbor_name)
                        .cloned()
                        .ok_or_else(|| CatalogError::UnknownNeighbor {
                            prototype: p.name.clone(),
                            neighbor: neighbor_name.to_owned(),
                        })?;

                    let kind = match side {
                        SideSlot::Above | SideSlot::Below => {
                            if let Some(raw) = &link.side {
                                return Err(CatalogError::VerticalLinkWithSide {
                                    prototype: p.name.clone(),
                                    side: label.to_string(),
                                    neighbor: neighbor_name.to_owned(),
                                    neighbor_side: raw.to_string(),
                                });
                            }
                            if side == SideSlot::Above {
                                LinkKind::Above
                            } else {
                                LinkKind::Below
                            }
                        }
                        SideSlot::Lateral(side) => {
                            let raw = link.side.as_ref().ok_or_else(|| {
                                CatalogError::MissingNeighborSide {
                                    prototype: p.name.clone(),
                                    side: label.to_string(),
                                    neighbor: neighbor_name.to_owned(),
                                }
                            })?;
                            match raw.parse(&p.name)? {
                                SideSlot::Lateral(neighbor_side) => LinkKind::Lateral {
                                    side,
                                    neighbor_side,
                                },
                                SideSlot::Above | SideSlot::Below => {
                                    return Err(CatalogError::VerticalSideIndex {
                                        prototype: p.name.clone(),
                                        side: label.to_string(),
                                        neighbor: neighbor_name.to_owned(),
                                        neighbor_side: raw.to_string(),
                                    })
                                }
                            }
                        }
                    };

                    links.push(Link {
                        prototype: Arc::clone(name),
                        neighbor,
                        kind,
                    });
                }
            }
        }

        Ok(Self { names, links })
    }

    /// Prototype names in declaration order.
    pub fn names(&self) -> &[Arc<str>] {
        &self.names
    }

    /// All rows.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Rows declared by `prototype`.
    pub fn links_from<'a>(&'a self, prototype: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links
            .iter()
            .filter(move |l| l.prototype.as_ref() == prototype)
    }

    /// Compatible neighbor variants of `prototype` turned by `rotation`.
    ///
    /// A lateral side at angle `s` ends up facing `(s + rotation) mod 360`.
    /// For a link naming the neighbor's side `n`, the neighbor has to be
    /// turned by `(rotated - n + 540) mod 360` so that its side `n` faces
    /// back at us. Vertical links accept the neighbor in every rotation.
    pub fn compile_adjacencies(
        &self,
        prototype: &str,
        rotation: Rotation,
    ) -> Result<DirectionSlots> {
        if !self.names.iter().any(|n| n.as_ref() == prototype) {
            return Err(CatalogError::UnknownPrototype(prototype.to_owned()));
        }

        let mut slots = DirectionSlots::default();
        for link in self.links_from(prototype) {
            match link.kind {
                LinkKind::Lateral {
                    side,
                    neighbor_side,
                } => {
                    let rotated = (i64::from(side) + i64::from(rotation.degrees())).rem_euclid(360);
                    let orientation = (rotated - i64::from(neighbor_side) + 540).rem_euclid(360);
                    // Both values are multiples of 60 by construction.
                    let direction = Direction::from_degrees(rotated)
                        .ok_or(CatalogError::InvalidRotation(rotated))?;
                    let neighbor_rotation = Rotation::from_degrees(orientation)?;
                    slots.insert(
                        direction,
                        TileVariant::new(Arc::clone(&link.neighbor), neighbor_rotation),
                    );
                }
                LinkKind::Above => {
                    for v in TileVariant::all_rotations(Arc::clone(&link.neighbor)) {
                        slots.insert(Direction::Above, v);
                    }
                }
                LinkKind::Below => {
                    for v in TileVariant::all_rotations(Arc::clone(&link.neighbor)) {
                        slots.insert(Direction::Below, v);
                    }
                }
            }
        }
        Ok(slots)
    }
}

/// Compatible neighbor variants for each of the 8 adjacency slots.
///
/// Always total: every slot is present, possibly empty. An empty slot
/// places no constraint on that side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionSlots([BTreeSet<TileVariant>; DIRECTION_COUNT]);

impl DirectionSlots {
    fn insert(&mut self, direction: Direction, variant: TileVariant) {
        self.0[direction.index()].insert(variant);
    }

    /// Variants allowed in `direction`.
    pub fn get(&self, direction: Direction) -> &BTreeSet<TileVariant> {
        &self.0[direction.index()]
    }

    /// Compatibility tags allowed in `direction`, in variant order.
    pub fn tags(&self, direction: Direction) -> Vec<String> {
        self.get(direction).iter().map(TileVariant::tag).collect()
    }

    /// Every slot in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &BTreeSet<TileVariant>)> + '_ {
        Direction::ALL.into_iter().zip(self.0.iter())
    }

    /// Number of slots (always 8).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no slot constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        self.0.iter().all(BTreeSet::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prototype::SideLink;
    use proptest::prelude::*;

    fn pair() -> Vec<TilePrototype> {
        vec![
            TilePrototype::new("A").lateral(0, "B", 180),
            TilePrototype::new("B").lateral(180, "A", 0),
        ]
    }

    #[test]
    fn worked_example_tag_b0() {
        let table = LinkTable::build(&pair()).unwrap();
        let slots = table.compile_adjacencies("A", Rotation::R0).unwrap();
        assert_eq!(slots.tags(Direction::Deg0), vec!["B0".to_string()]);
        for d in &Direction::ALL[1..] {
            assert!(slots.get(*d).is_empty(), "{d}");
        }
    }

    #[test]
    fn rotation_moves_side_and_turns_neighbor() {
        let table = LinkTable::build(&pair()).unwrap();
        let slots = table.compile_adjacencies("A", Rotation::R60).unwrap();
        // Side 0 now faces 60; B must turn 60 so its 180 side faces 240.
        assert_eq!(slots.tags(Direction::Deg60), vec!["B60".to_string()]);
        assert!(slots.get(Direction::Deg0).is_empty());
    }

    #[test]
    fn mating_sides_face_each_other() {
        // Whatever the rotation, the neighbor's named side ends up pointing
        // back at the slot it sits in.
        let protos = vec![
            TilePrototype::new("A").lateral(120, "B", 300).lateral(240, "B", 60),
            TilePrototype::new("B"),
        ];
        let table = LinkTable::build(&protos).unwrap();
        for rotation in Rotation::ALL {
            let slots = table.compile_adjacencies("A", rotation).unwrap();
            for link in table.links_from("A") {
                let LinkKind::Lateral { side, neighbor_side } = link.kind else { continue };
                let facing = rotation.rotate(Direction::from_degrees(side as i64).unwrap());
                let neighbor_side = Direction::from_degrees(neighbor_side as i64).unwrap();
                let mates =
                    |v: &TileVariant| v.rotation().rotate(neighbor_side) == facing.opposite();
                assert!(slots.get(facing).iter().any(mates));
            }
        }
    }

    #[test]
    fn vertical_links_accept_every_rotation() {
        let protos = vec![
            TilePrototype::new("floor").above("wall"),
            TilePrototype::new("wall").below("floor"),
        ];
        let table = LinkTable::build(&protos).unwrap();
        for rotation in Rotation::ALL {
            let slots = table.compile_adjacencies("floor", rotation).unwrap();
            assert_eq!(
                slots.tags(Direction::Above),
                vec!["wall0", "wall60", "wall120", "wall180", "wall240", "wall300"]
            );
            assert!(slots.get(Direction::Below).is_empty());
        }
        let wall = table.compile_adjacencies("wall", Rotation::R180).unwrap();
        assert_eq!(wall.get(Direction::Below).len(), 6);
    }

    #[test]
    fn every_variant_has_eight_slots() {
        let table = LinkTable::build(&pair()).unwrap();
        for name in ["A", "B"] {
            for rotation in Rotation::ALL {
                let slots = table.compile_adjacencies(name, rotation).unwrap();
                assert_eq!(slots.len(), 8);
                assert_eq!(slots.iter().count(), 8);
            }
        }
    }

    #[test]
    fn unconstrained_prototype_compiles_empty() {
        let table = LinkTable::build(&[TilePrototype::new("plain")]).unwrap();
        let slots = table.compile_adjacencies("plain", Rotation::R120).unwrap();
        assert!(slots.is_unconstrained());
    }

    #[test]
    fn definition_errors() {
        let bad_label = [TilePrototype::new("A").lateral(45, "A", 0)];
        assert!(matches!(
            LinkTable::build(&bad_label),
            Err(CatalogError::InvalidSideLabel { .. })
        ));

        let bad_neighbor_label = [TilePrototype::new("A").lateral(0, "A", "east")];
        assert!(matches!(
            LinkTable::build(&bad_neighbor_label),
            Err(CatalogError::InvalidSideLabel { .. })
        ));

        let no_neighbor = [TilePrototype::new("A").link(0, SideLink::default())];
        assert!(matches!(
            LinkTable::build(&no_neighbor),
            Err(CatalogError::MissingNeighbor { .. })
        ));

        let no_side = [TilePrototype::new("A").link(60, SideLink::vertical("A"))];
        assert!(matches!(
            LinkTable::build(&no_side),
            Err(CatalogError::MissingNeighborSide { .. })
        ));

        let vertical_side = [TilePrototype::new("A").lateral(0, "A", "above")];
        assert!(matches!(
            LinkTable::build(&vertical_side),
            Err(CatalogError::VerticalSideIndex { .. })
        ));

        let sided_vertical = [TilePrototype::new("A").link("above", SideLink::lateral("A", 0))];
        assert!(matches!(
            LinkTable::build(&sided_vertical),
            Err(CatalogError::VerticalLinkWithSide { ref neighbor_side, .. })
                if neighbor_side == "0"
        ));

        let unknown = [TilePrototype::new("A").above("ghost")];
        assert!(matches!(
            LinkTable::build(&unknown),
            Err(CatalogError::UnknownNeighbor { .. })
        ));

        let dup = [TilePrototype::new("A"), TilePrototype::new("A")];
        assert!(matches!(
            LinkTable::build(&dup),
            Err(CatalogError::DuplicatePrototype(_))
        ));
    }

    #[test]
    fn unknown_prototype_lookup() {
        let table = LinkTable::build(&pair()).unwrap();
        assert!(matches!(
            table.compile_adjacencies("C", Rotation::R0),
            Err(CatalogError::UnknownPrototype(_))
        ));
    }

    proptest! {
        #[test]
        fn full_turn_is_identity(
            step in 0i64..6,
            turns in -3i64..3,
            side in 0i64..6,
            nside in 0i64..6,
        ) {
            let protos = vec![
                TilePrototype::new("A").lateral(side * 60, "B", nside * 60).above("B"),
                TilePrototype::new("B"),
            ];
            let table = LinkTable::build(&protos).unwrap();
            let base = Rotation::from_degrees(step * 60).unwrap();
            let wrapped = Rotation::from_degrees(step * 60 + turns * 360).unwrap();
            prop_assert_eq!(
                table.compile_adjacencies("A", base).unwrap(),
                table.compile_adjacencies("A", wrapped).unwrap()
            );
        }
    }
}
