//! Handing resolved cells to the host world.

use glam::{Mat4, Quat, Vec3};
use hexfill_catalog::TileVariant;

/// Where and how to place one tile instance.
///
/// `rotation_degrees` turns the tile about +Y, measured from +X toward +Z,
/// the same way lattice directions are laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    pub translation: Vec3,
    pub rotation_degrees: f32,
}

impl WorldTransform {
    pub fn new(translation: Vec3, rotation_degrees: f32) -> Self {
        Self {
            translation,
            rotation_degrees,
        }
    }

    /// Rotation as a quaternion about +Y.
    pub fn rotation(&self) -> Quat {
        // A positive angle about +Y turns +X toward -Z, so negate.
        Quat::from_rotation_y(-self.rotation_degrees.to_radians())
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.translation)
    }
}

/// Receives one call per resolved cell once a solve has collapsed.
///
/// Implementations must not fail back into the solver; a sink that can
/// fail should record the failure itself.
pub trait WorldSink {
    fn place(&mut self, variant: &TileVariant, transform: WorldTransform);
}

impl<F> WorldSink for F
where
    F: FnMut(&TileVariant, WorldTransform),
{
    fn place(&mut self, variant: &TileVariant, transform: WorldTransform) {
        self(variant, transform)
    }
}

/// A sink that keeps every placement, in call order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub placements: Vec<(TileVariant, WorldTransform)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Tags of the placed variants, in call order.
    pub fn tags(&self) -> Vec<String> {
        self.placements.iter().map(|(v, _)| v.tag()).collect()
    }
}

impl WorldSink for RecordingSink {
    fn place(&mut self, variant: &TileVariant, transform: WorldTransform) {
        self.placements.push((variant.clone(), transform));
    }
}
