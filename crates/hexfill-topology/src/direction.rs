//! The eight adjacency slots of a hex prism.
//!
//! Six lateral slots sit at 60 degree steps, measured from world +X toward
//! world +Z, followed by `Above` and `Below`. The lateral offsets are chosen
//! so they agree with [`crate::TileGeometry::world_position`]: moving one
//! step in the 0 degree slot moves along +X, the 60 degree slot moves along
//! +q, and so on counter-clockwise.

use crate::{HexCoord, DIRECTION_COUNT, LATERAL_DIRECTIONS};

/// One of the eight neighbor slots of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// 0 degrees
    Deg0,
    /// 60 degrees
    Deg60,
    /// 120 degrees
    Deg120,
    /// 180 degrees
    Deg180,
    /// 240 degrees
    Deg240,
    /// 300 degrees
    Deg300,
    /// One layer up
    Above,
    /// One layer down
    Below,
}

impl Direction {
    /// All slots in index order.
    pub const ALL: [Self; DIRECTION_COUNT] = [
        Self::Deg0,
        Self::Deg60,
        Self::Deg120,
        Self::Deg180,
        Self::Deg240,
        Self::Deg300,
        Self::Above,
        Self::Below,
    ];

    /// The six lateral slots in index order.
    pub const LATERAL: [Self; LATERAL_DIRECTIONS] = [
        Self::Deg0,
        Self::Deg60,
        Self::Deg120,
        Self::Deg180,
        Self::Deg240,
        Self::Deg300,
    ];

    /// Axial offsets for each slot, indexed like [`Direction::ALL`].
    const OFFSETS: [HexCoord; DIRECTION_COUNT] = [
        HexCoord { q: 0, r: 1, layer: 0 }, // 0
        HexCoord { q: 1, r: 0, layer: 0 }, // 60
        HexCoord { q: 1, r: -1, layer: 0 }, // 120
        HexCoord { q: 0, r: -1, layer: 0 }, // 180
        HexCoord { q: -1, r: 0, layer: 0 }, // 240
        HexCoord { q: -1, r: 1, layer: 0 }, // 300
        HexCoord { q: 0, r: 0, layer: 1 }, // above
        HexCoord { q: 0, r: 0, layer: -1 }, // below
    ];

    /// Position of this slot in [`Direction::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Slot at `index`, if `index < 8`.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < DIRECTION_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Lateral slot for an angle in degrees.
    ///
    /// Any multiple of 60 is accepted, including negative ones and values
    /// beyond a full turn. Returns `None` for anything else.
    pub const fn from_degrees(degrees: i64) -> Option<Self> {
        if degrees % 60 != 0 {
            return None;
        }
        let step = degrees.rem_euclid(360) / 60;
        Some(Self::LATERAL[step as usize])
    }

    /// Angle of a lateral slot, `None` for `Above`/`Below`.
    pub const fn degrees(self) -> Option<u16> {
        match self {
            Self::Above | Self::Below => None,
            lateral => Some(lateral as u16 * 60),
        }
    }

    /// Whether this is one of the six lateral slots.
    #[inline]
    pub const fn is_lateral(self) -> bool {
        !matches!(self, Self::Above | Self::Below)
    }

    /// The slot a neighbor uses to look back at us.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Above => Self::Below,
            Self::Below => Self::Above,
            lateral => Self::LATERAL[(lateral as usize + 3) % LATERAL_DIRECTIONS],
        }
    }

    /// Axial offset of this slot.
    #[inline]
    pub const fn offset(self) -> HexCoord {
        Self::OFFSETS[self as usize]
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.degrees() {
            Some(deg) => write!(f, "{deg}°"),
            None if *self == Self::Above => f.write_str("above"),
            None => f.write_str("below"),
        }
    }
}
