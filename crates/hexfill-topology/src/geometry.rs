//! Axial to world transform.

use glam::Vec3;

use crate::HexCoord;

/// Physical dimensions of one hex prism, used to place lattice cells in
/// world space.
///
/// `lateral_length` is the centre-to-centre spacing along world X (the
/// flat-to-flat width of the hexagon), `width` is the point-to-point width
/// along world Z, and `height` is the vertical step between layers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TileGeometry {
    pub lateral_length: f32,
    pub width: f32,
    pub height: f32,
}

impl TileGeometry {
    pub const fn new(lateral_length: f32, width: f32, height: f32) -> Self {
        Self {
            lateral_length,
            width,
            height,
        }
    }

    /// Derive the geometry from a sample tile's bounding box.
    ///
    /// X extent is the lateral length, Y extent the vertical step, Z extent
    /// the width.
    pub fn from_bounds(min: Vec3, max: Vec3) -> Self {
        let extent = (max - min).abs();
        Self {
            lateral_length: extent.x,
            width: extent.z,
            height: extent.y,
        }
    }

    /// World-space centre of the prism at `coord`.
    ///
    /// `x = (r + q/2) * L`, `y = layer * H`, `z = 3/4 * q * W`.
    pub fn world_position(&self, coord: HexCoord) -> Vec3 {
        let q = coord.q as f32;
        let r = coord.r as f32;
        Vec3::new(
            (r + 0.5 * q) * self.lateral_length,
            coord.layer as f32 * self.height,
            0.75 * q * self.width,
        )
    }
}

impl Default for TileGeometry {
    /// A regular hexagon with unit circumradius and unit layer height.
    fn default() -> Self {
        Self::new(3f32.sqrt(), 2.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn origin_maps_to_origin() {
        let g = TileGeometry::default();
        assert_eq!(g.world_position(HexCoord::ORIGIN), Vec3::ZERO);
    }

    #[test]
    fn axial_formula() {
        let g = TileGeometry::new(2.0, 4.0, 3.0);
        let p = g.world_position(HexCoord::new(2, 1, 5));
        assert!(approx(p, Vec3::new((1.0 + 1.0) * 2.0, 15.0, 0.75 * 2.0 * 4.0)));

        let p = g.world_position(HexCoord::new(-2, 0, 0));
        assert!(approx(p, Vec3::new(-2.0, 0.0, -6.0)));
    }

    #[test]
    fn regular_hex_neighbors_are_equidistant() {
        let g = TileGeometry::default();
        let origin = g.world_position(HexCoord::ORIGIN);
        for d in crate::Direction::LATERAL {
            let p = g.world_position(HexCoord::ORIGIN.neighbor(d));
            assert!(
                ((p - origin).length() - g.lateral_length).abs() < 1e-5,
                "{} neighbor at {:?}",
                d,
                p
            );
        }
    }

    #[test]
    fn lateral_slots_point_at_their_angle() {
        let g = TileGeometry::default();
        for d in crate::Direction::LATERAL {
            let p = g.world_position(HexCoord::ORIGIN.neighbor(d));
            let angle = p.z.atan2(p.x).to_degrees().rem_euclid(360.0);
            let expected = d.degrees().unwrap() as f32;
            assert!((angle - expected).abs() < 1e-3, "{} at {}", d, angle);
        }
    }

    #[test]
    fn bounds_derive_dimensions() {
        let g = TileGeometry::from_bounds(Vec3::new(-1.0, 0.0, -2.0), Vec3::new(1.0, 0.5, 2.0));
        assert_eq!(g, TileGeometry::new(2.0, 4.0, 0.5));
    }
}
