//! Rotations and rotated tile variants.

use std::sync::Arc;

use hexfill_topology::Direction;

use crate::error::{CatalogError, Result};

/// Number of rotational orientations of a hex tile.
pub const ROTATION_COUNT: usize = 6;

/// A lateral rotation in 60 degree steps, always normalized to `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rotation(u16);

impl Rotation {
    pub const R0: Self = Self(0);
    pub const R60: Self = Self(60);
    pub const R120: Self = Self(120);
    pub const R180: Self = Self(180);
    pub const R240: Self = Self(240);
    pub const R300: Self = Self(300);

    /// The six canonical rotations in ascending order.
    pub const ALL: [Self; ROTATION_COUNT] =
        [Self::R0, Self::R60, Self::R120, Self::R180, Self::R240, Self::R300];

    /// Normalize any signed multiple of 60 degrees.
    pub fn from_degrees(degrees: i64) -> Result<Self> {
        if degrees % 60 != 0 {
            return Err(CatalogError::InvalidRotation(degrees));
        }
        Ok(Self(degrees.rem_euclid(360) as u16))
    }

    #[inline]
    pub const fn degrees(self) -> u16 {
        self.0
    }

    /// Number of 60 degree steps, 0..6.
    #[inline]
    pub const fn steps(self) -> usize {
        (self.0 / 60) as usize
    }

    /// Where a lateral slot ends up after rotating by `self`.
    ///
    /// Vertical slots are unaffected.
    pub fn rotate(self, direction: Direction) -> Direction {
        match direction.degrees() {
            Some(deg) => Direction::LATERAL[(deg as usize / 60 + self.steps()) % ROTATION_COUNT],
            None => direction,
        }
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dense index of a variant within its [`crate::TileCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariantId(pub u32);

impl VariantId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A base tile in one orientation.
///
/// Identity is the `(base, rotation)` pair. The display form, e.g. `B0` or
/// `wall120`, is the compatibility tag used in adjacency tables.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileVariant {
    base: Arc<str>,
    rotation: Rotation,
}

impl TileVariant {
    pub fn new(base: impl Into<Arc<str>>, rotation: Rotation) -> Self {
        Self {
            base: base.into(),
            rotation,
        }
    }

    /// One variant per canonical rotation of `base`.
    pub fn all_rotations(base: impl Into<Arc<str>>) -> [Self; ROTATION_COUNT] {
        let base = base.into();
        Rotation::ALL.map(|rotation| Self {
            base: Arc::clone(&base),
            rotation,
        })
    }

    /// Name of the prototype this variant was built from.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Compatibility tag: base name followed by the rotation in degrees.
    pub fn tag(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for TileVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.base, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_normalize() {
        assert_eq!(Rotation::from_degrees(360).unwrap(), Rotation::R0);
        assert_eq!(Rotation::from_degrees(-60).unwrap(), Rotation::R300);
        assert_eq!(Rotation::from_degrees(780).unwrap(), Rotation::R60);
        assert!(matches!(
            Rotation::from_degrees(90),
            Err(CatalogError::InvalidRotation(90))
        ));
    }

    #[test]
    fn rotate_shifts_lateral_slots() {
        assert_eq!(Rotation::R60.rotate(Direction::Deg0), Direction::Deg60);
        assert_eq!(Rotation::R120.rotate(Direction::Deg300), Direction::Deg60);
        assert_eq!(Rotation::R300.rotate(Direction::Above), Direction::Above);
        for d in Direction::LATERAL {
            assert_eq!(Rotation::R0.rotate(d), d);
        }
    }

    #[test]
    fn all_rotations_share_base() {
        let variants = TileVariant::all_rotations("grass");
        assert_eq!(variants.len(), 6);
        for (v, r) in variants.iter().zip(Rotation::ALL) {
            assert_eq!(v.base(), "grass");
            assert_eq!(v.rotation(), r);
        }
    }

    #[test]
    fn identity_is_base_and_rotation() {
        let a = TileVariant::new("B", Rotation::R0);
        assert_eq!(a, TileVariant::new(String::from("B"), Rotation::R0));
        assert_ne!(a, TileVariant::new("B", Rotation::R60));
        assert_ne!(a, TileVariant::new("C", Rotation::R0));
    }

    #[test]
    fn tag_format() {
        assert_eq!(TileVariant::new("B", Rotation::R0).tag(), "B0");
        assert_eq!(TileVariant::new("wall", Rotation::R240).tag(), "wall240");
    }
}
