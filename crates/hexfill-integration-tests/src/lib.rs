//! Fixture catalogs and checks shared by the end-to-end tests.

use hexfill_catalog::{TileCatalog, TilePrototype};
use hexfill_solver::Solver;
use hexfill_topology::HexCoord;

/// Lateral side angles, in declaration order.
pub const SIDES: [i64; 6] = [0, 60, 120, 180, 240, 300];

/// One prototype with no constraints on any side.
pub fn plain() -> Vec<TilePrototype> {
    vec![TilePrototype::new("plain")]
}

/// A rare straight road that must continue along its axis, on grass.
pub fn road_and_grass() -> Vec<TilePrototype> {
    vec![
        TilePrototype::new("road")
            .lateral(0, "road", 180)
            .lateral(180, "road", 0)
            .with_weight(0.2),
        TilePrototype::new("grass"),
    ]
}

/// Two prototypes that may only sit beside each other. Unsatisfiable on
/// any lattice containing a triangle of cells.
pub fn alternating() -> Vec<TilePrototype> {
    let mut a = TilePrototype::new("a");
    let mut b = TilePrototype::new("b");
    for side in SIDES {
        for other in SIDES {
            a = a.lateral(side, "b", other);
            b = b.lateral(side, "a", other);
        }
    }
    vec![a, b]
}

/// Ground with open air stacked over it, as a JSON catalog file would
/// describe it.
pub const TERRAIN_JSON: &str = r#"{
    "prototypes": [
        {
            "name": "grass",
            "weight": 3.0,
            "sides": { "above": [{ "neighbor": "air" }] }
        },
        {
            "name": "air",
            "sides": {
                "above": [{ "neighbor": "air" }],
                "below": [{ "neighbor": "grass" }, { "neighbor": "air" }]
            }
        }
    ]
}"#;

pub fn compile(prototypes: &[TilePrototype]) -> TileCatalog {
    hexfill_logging::init_for_tests();
    match TileCatalog::compile(prototypes) {
        Ok(catalog) => catalog,
        Err(e) => panic!("fixture catalog failed to compile: {e}"),
    }
}

/// Every pair of resolved neighbors that the catalog does not allow.
pub fn incompatible_pairs(solver: &Solver<'_>) -> Vec<(HexCoord, HexCoord)> {
    let catalog = solver.catalog();
    let lattice = solver.lattice();
    let mut bad = Vec::new();
    for (coord, cell) in lattice.iter() {
        let Some(id) = cell.resolved() else { continue };
        let Ok(neighbors) = lattice.neighbors_of(coord) else {
            continue;
        };
        for (direction, neighbor) in neighbors {
            let other = lattice.get(neighbor).ok().and_then(|c| c.resolved());
            if let Some(other) = other {
                if !catalog.compatible(id, direction, other) {
                    bad.push((coord, neighbor));
                }
            }
        }
    }
    bad
}
