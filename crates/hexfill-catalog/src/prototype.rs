//! Authored tile prototypes.
//!
//! A prototype is the shape a catalog source (scene graph, JSON file, ...)
//! hands over: a name, an optional selection weight, and for each side the
//! neighbors it may touch. Lateral sides are keyed by angle and name the
//! neighbor's own side; `above` and `below` only name the neighbor.
//!
//! ```json
//! {
//!   "name": "road",
//!   "weight": 2.0,
//!   "sides": {
//!     "0":     [{ "neighbor": "road", "side": 180 }],
//!     "180":   [{ "neighbor": "road", "side": 0 }],
//!     "above": [{ "neighbor": "air" }]
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Where a side sits on the prism once its label is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SideSlot {
    /// A lateral face at this angle, normalized to `[0, 360)`.
    Lateral(u16),
    Above,
    Below,
}

/// Raw side label as written by the catalog author.
///
/// Valid labels are `above`, `below` (any case), or a signed integer that
/// is a multiple of 60. Parsing happens at catalog compile time so a bad
/// label surfaces as [`CatalogError::InvalidSideLabel`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawLabel", into = "String")]
pub struct SideLabel(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Int(i64),
    Text(String),
}

impl From<RawLabel> for SideLabel {
    fn from(raw: RawLabel) -> Self {
        match raw {
            RawLabel::Int(n) => Self(n.to_string()),
            RawLabel::Text(s) => Self(s),
        }
    }
}

impl From<SideLabel> for String {
    fn from(label: SideLabel) -> Self {
        label.0
    }
}

impl From<&str> for SideLabel {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for SideLabel {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i32> for SideLabel {
    fn from(n: i32) -> Self {
        Self(n.to_string())
    }
}

impl From<i64> for SideLabel {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl SideLabel {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into a [`SideSlot`]; `prototype` is only used for the error.
    pub fn parse(&self, prototype: &str) -> Result<SideSlot> {
        let text = self.0.trim();
        if text.eq_ignore_ascii_case("above") {
            return Ok(SideSlot::Above);
        }
        if text.eq_ignore_ascii_case("below") {
            return Ok(SideSlot::Below);
        }
        match text.parse::<i64>() {
            Ok(deg) if deg % 60 == 0 => Ok(SideSlot::Lateral(deg.rem_euclid(360) as u16)),
            _ => Err(CatalogError::InvalidSideLabel {
                prototype: prototype.to_owned(),
                label: self.0.clone(),
            }),
        }
    }
}

impl std::fmt::Display for SideLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One declared compatible neighbor on a side.
///
/// Both fields are optional in the input so a missing reference is reported
/// as a definition error instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SideLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<SideLabel>,
}

impl SideLink {
    /// A lateral link: mates with `side` of `neighbor`.
    pub fn lateral(neighbor: impl Into<String>, side: impl Into<SideLabel>) -> Self {
        Self {
            neighbor: Some(neighbor.into()),
            side: Some(side.into()),
        }
    }

    /// A vertical link: stacks with `neighbor` in any orientation.
    pub fn vertical(neighbor: impl Into<String>) -> Self {
        Self {
            neighbor: Some(neighbor.into()),
            side: None,
        }
    }
}

fn default_weight() -> f64 {
    1.0
}

/// A base tile as authored, before rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilePrototype {
    pub name: String,
    /// Relative selection frequency.
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub sides: BTreeMap<SideLabel, Vec<SideLink>>,
}

impl TilePrototype {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight: default_weight(),
            sides: BTreeMap::new(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Declare that `side` may touch `neighbor_side` of `neighbor`.
    pub fn lateral(
        self,
        side: impl Into<SideLabel>,
        neighbor: impl Into<String>,
        neighbor_side: impl Into<SideLabel>,
    ) -> Self {
        self.link(side, SideLink::lateral(neighbor, neighbor_side))
    }

    /// Declare that `neighbor` may sit on top of this tile.
    pub fn above(self, neighbor: impl Into<String>) -> Self {
        self.link("above", SideLink::vertical(neighbor))
    }

    /// Declare that this tile may sit on top of `neighbor`.
    pub fn below(self, neighbor: impl Into<String>) -> Self {
        self.link("below", SideLink::vertical(neighbor))
    }

    /// Attach a raw link to `side`.
    pub fn link(mut self, side: impl Into<SideLabel>, link: SideLink) -> Self {
        self.sides.entry(side.into()).or_default().push(link);
        self
    }
}

/// Top-level shape of a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    pub prototypes: Vec<TilePrototype>,
}
