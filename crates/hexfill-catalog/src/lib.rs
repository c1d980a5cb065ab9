//! Hexfill Tile Catalog
//!
//! Turns a handful of authored tile prototypes into every rotated variant
//! and compiles, for each variant, which neighbor variants may sit in each
//! of the eight adjacency slots.
//!
//! # Rotation
//!
//! A hex tile has six orientations. Rotating a tile by `r` moves its
//! lateral side `s` to face `(s + r) mod 360`. A link from our side `s` to
//! the neighbor's side `n` therefore requires the neighbor to be turned by
//!
//! ```text
//! (rotated - n + 540) mod 360
//! ```
//!
//! so that side `n` faces back across the shared edge. Vertical links
//! ignore rotation: a prototype allowed above is allowed in all six
//! orientations.
//!
//! # Example
//!
//! ```
//! use hexfill_catalog::{Rotation, TileCatalog, TilePrototype, TileVariant};
//! use hexfill_topology::Direction;
//!
//! let catalog = TileCatalog::compile(&[
//!     TilePrototype::new("A").lateral(0, "B", 180),
//!     TilePrototype::new("B"),
//! ])
//! .unwrap();
//!
//! let a0 = TileVariant::new("A", Rotation::R0);
//! let slots = catalog.adjacency_of(&a0).unwrap();
//! assert_eq!(slots.tags(Direction::Deg0), vec!["B0"]);
//! ```

mod catalog;
mod error;
mod links;
mod prototype;
mod variant;

pub use catalog::TileCatalog;
pub use error::{CatalogError, Result};
pub use links::{DirectionSlots, Link, LinkKind, LinkTable};
pub use prototype::{CatalogDefinition, SideLabel, SideLink, SideSlot, TilePrototype};
pub use variant::{Rotation, TileVariant, VariantId, ROTATION_COUNT};
