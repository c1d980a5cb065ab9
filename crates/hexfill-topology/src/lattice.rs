//! Bounded storage for a hex-prism lattice.
//!
//! The lattice covers `q, r ∈ [-radius/2, radius/2]` and `layer ∈ [0, height)`,
//! giving `(radius + 1)² × height` cells. Storage order is q, then layer,
//! then r, which is also the order [`Lattice::coords`] walks.

use glam::Vec3;

use crate::error::{LatticeError, Result};
use crate::{Direction, HexCoord, TileGeometry};

/// A fixed-size 3D array of cells addressed by [`HexCoord`].
#[derive(Debug, Clone)]
pub struct Lattice<C> {
    radius: i64,
    height: i64,
    half: i64,
    side: usize,
    geometry: TileGeometry,
    cells: Vec<C>,
}

impl<C: Clone> Lattice<C> {
    /// Allocate a lattice with every cell set to `initial`.
    ///
    /// Returns `Err(LatticeError::OddRadius)` / `NegativeRadius` /
    /// `NegativeHeight` when the dimensions break the contract.
    pub fn allocate(radius: i64, height: i64, initial: C) -> Result<Self> {
        Self::with_geometry(radius, height, TileGeometry::default(), initial)
    }

    /// Like [`Lattice::allocate`] with explicit tile dimensions.
    pub fn with_geometry(
        radius: i64,
        height: i64,
        geometry: TileGeometry,
        initial: C,
    ) -> Result<Self> {
        if radius < 0 {
            return Err(LatticeError::NegativeRadius(radius));
        }
        if radius % 2 != 0 {
            return Err(LatticeError::OddRadius(radius));
        }
        if height < 0 {
            return Err(LatticeError::NegativeHeight(height));
        }
        let too_large = || LatticeError::TooLarge { radius, height };
        let side = usize::try_from(radius)
            .ok()
            .and_then(|r| r.checked_add(1))
            .ok_or_else(too_large)?;
        let count = usize::try_from(height)
            .ok()
            .and_then(|h| side.checked_mul(side)?.checked_mul(h))
            .filter(|&n| {
                n.checked_mul(std::mem::size_of::<C>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(too_large)?;
        Ok(Self {
            radius,
            height,
            half: radius / 2,
            side,
            geometry,
            cells: vec![initial; count],
        })
    }
}

impl<C> Lattice<C> {
    /// Lattice radius (always even).
    pub fn radius(&self) -> i64 {
        self.radius
    }

    /// Number of layers.
    pub fn height(&self) -> i64 {
        self.height
    }

    /// Tile dimensions used for world placement.
    pub fn geometry(&self) -> TileGeometry {
        self.geometry
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the lattice has no cells (radius 0 is one column, so only
    /// a zero height yields an empty lattice).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `coord` lies inside the allocated bounds.
    pub fn contains(&self, coord: HexCoord) -> bool {
        (-self.half..=self.half).contains(&coord.q)
            && (-self.half..=self.half).contains(&coord.r)
            && (0..self.height).contains(&coord.layer)
    }

    /// Storage index of `coord`, also its rank in [`Lattice::coords`] order.
    pub fn index_of(&self, coord: HexCoord) -> Result<usize> {
        if !self.contains(coord) {
            return Err(LatticeError::OutOfRange {
                coord,
                bounds: format!(
                    "q, r in [{}, {}], layer in [0, {})",
                    -self.half, self.half, self.height
                ),
            });
        }
        let q = (coord.q + self.half) as usize;
        let r = (coord.r + self.half) as usize;
        let layer = coord.layer as usize;
        Ok((q * self.height as usize + layer) * self.side + r)
    }

    /// Coordinate stored at `index`.
    pub fn coord_at(&self, index: usize) -> Option<HexCoord> {
        if index >= self.cells.len() {
            return None;
        }
        let r = (index % self.side) as i64;
        let rest = index / self.side;
        let layer = (rest % self.height as usize) as i64;
        let q = (rest / self.height as usize) as i64;
        Some(HexCoord::new(q - self.half, r - self.half, layer))
    }

    /// Borrow the cell at `coord`.
    pub fn get(&self, coord: HexCoord) -> Result<&C> {
        let index = self.index_of(coord)?;
        Ok(&self.cells[index])
    }

    /// Mutably borrow the cell at `coord`.
    pub fn get_mut(&mut self, coord: HexCoord) -> Result<&mut C> {
        let index = self.index_of(coord)?;
        Ok(&mut self.cells[index])
    }

    /// Replace the cell at `coord`, returning the previous value.
    pub fn set(&mut self, coord: HexCoord, value: C) -> Result<C> {
        let index = self.index_of(coord)?;
        Ok(std::mem::replace(&mut self.cells[index], value))
    }

    /// World-space centre of the cell at `coord`.
    pub fn world_position(&self, coord: HexCoord) -> Result<Vec3> {
        self.index_of(coord)?;
        Ok(self.geometry.world_position(coord))
    }

    /// In-bounds neighbors of `coord`, paired with the slot that reaches them.
    ///
    /// Up to eight entries: six lateral plus the layers above and below.
    pub fn neighbors_of(&self, coord: HexCoord) -> Result<Vec<(Direction, HexCoord)>> {
        self.index_of(coord)?;
        Ok(Direction::ALL
            .iter()
            .map(|&d| (d, coord.neighbor(d)))
            .filter(|&(_, n)| self.contains(n))
            .collect())
    }

    /// Every coordinate in storage order (q, then layer, then r).
    pub fn coords(&self) -> impl Iterator<Item = HexCoord> + '_ {
        (-self.half..=self.half).flat_map(move |q| {
            (0..self.height).flat_map(move |layer| {
                (-self.half..=self.half).map(move |r| HexCoord::new(q, r, layer))
            })
        })
    }

    /// Every coordinate with its cell, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (HexCoord, &C)> + '_ {
        self.coords().zip(self.cells.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn allocate_sizes() {
        let lattice = Lattice::allocate(2, 3, 0u8).unwrap();
        assert_eq!(lattice.len(), 3 * 3 * 3);
        assert_eq!(lattice.radius(), 2);
        assert_eq!(lattice.height(), 3);

        let single = Lattice::allocate(0, 1, 0u8).unwrap();
        assert_eq!(single.len(), 1);

        let flat = Lattice::allocate(4, 0, 0u8).unwrap();
        assert!(flat.is_empty());
    }

    #[test]
    fn allocate_rejects_bad_radius() {
        assert_eq!(Lattice::allocate(3, 1, ()).unwrap_err(), LatticeError::OddRadius(3));
        assert_eq!(Lattice::allocate(-2, 1, ()).unwrap_err(), LatticeError::NegativeRadius(-2));
        assert_eq!(Lattice::allocate(2, -1, ()).unwrap_err(), LatticeError::NegativeHeight(-1));
    }

    #[test]
    fn allocate_rejects_unaddressable_sizes() {
        let err = Lattice::allocate(4_294_967_296, 1, ()).unwrap_err();
        assert_eq!(
            err,
            LatticeError::TooLarge {
                radius: 4_294_967_296,
                height: 1
            }
        );
        assert!(matches!(
            Lattice::allocate(1 << 20, i64::MAX, ()),
            Err(LatticeError::TooLarge { .. })
        ));
        assert!(matches!(
            Lattice::allocate(i64::MAX - 1, 1, ()),
            Err(LatticeError::TooLarge { .. })
        ));
    }

    #[test]
    fn get_set_round_trip() {
        let mut lattice = Lattice::allocate(2, 2, 0u32).unwrap();
        let c = HexCoord::new(-1, 1, 1);
        assert_eq!(lattice.set(c, 7).unwrap(), 0);
        assert_eq!(*lattice.get(c).unwrap(), 7);
        *lattice.get_mut(c).unwrap() += 1;
        assert_eq!(*lattice.get(c).unwrap(), 8);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut lattice = Lattice::allocate(2, 1, 0u32).unwrap();
        for c in [
            HexCoord::new(2, 0, 0),
            HexCoord::new(0, -2, 0),
            HexCoord::new(0, 0, 1),
            HexCoord::new(0, 0, -1),
        ] {
            assert!(matches!(lattice.get(c), Err(LatticeError::OutOfRange { .. })));
            assert!(lattice.set(c, 1).is_err());
            assert!(lattice.world_position(c).is_err());
        }
    }

    #[test]
    fn index_matches_coords_order() {
        let lattice = Lattice::allocate(4, 3, ()).unwrap();
        for (i, c) in lattice.coords().enumerate() {
            assert_eq!(lattice.index_of(c).unwrap(), i);
            assert_eq!(lattice.coord_at(i), Some(c));
        }
        assert_eq!(lattice.coords().count(), lattice.len());
        assert_eq!(lattice.coord_at(lattice.len()), None);
    }

    #[test]
    fn coords_are_lexicographic_q_layer_r() {
        let lattice = Lattice::allocate(2, 2, ()).unwrap();
        let coords: Vec<_> = lattice.coords().collect();
        let mut sorted = coords.clone();
        sorted.sort_by_key(|c| (c.q, c.layer, c.r));
        assert_eq!(coords, sorted);
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let lattice = Lattice::allocate(4, 3, ()).unwrap();
        let n = lattice.neighbors_of(HexCoord::new(0, 0, 1)).unwrap();
        assert_eq!(n.len(), 8);
    }

    #[test]
    fn edge_neighbors_are_clipped() {
        let lattice = Lattice::allocate(2, 1, ()).unwrap();
        // Corner (1, 1): only the 180 and 240 slots stay inside.
        let corner = lattice.neighbors_of(HexCoord::new(1, 1, 0)).unwrap();
        for (d, c) in &corner {
            assert!(lattice.contains(*c), "{} -> {}", d, c);
            assert!(d.is_lateral());
        }
        let dirs: Vec<_> = corner.iter().map(|(d, _)| *d).collect();
        assert_eq!(dirs, vec![Direction::Deg180, Direction::Deg240]);

        // Single layer: never above or below.
        let centre = lattice.neighbors_of(HexCoord::ORIGIN).unwrap();
        assert_eq!(centre.len(), 6);
    }

    #[test]
    fn world_position_uses_geometry() {
        let g = TileGeometry::new(2.0, 2.0, 1.5);
        let lattice = Lattice::with_geometry(2, 2, g, ()).unwrap();
        let c = HexCoord::new(1, -1, 1);
        assert_eq!(lattice.world_position(c).unwrap(), g.world_position(c));
    }

    proptest! {
        #[test]
        fn bounds_are_always_checked(
            half in 0i64..4,
            height in 0i64..4,
            q in -8i64..8,
            r in -8i64..8,
            layer in -2i64..6,
        ) {
            let lattice = Lattice::allocate(half * 2, height, 0u8).unwrap();
            let c = HexCoord::new(q, r, layer);
            let inside = q.abs() <= half && r.abs() <= half && layer >= 0 && layer < height;
            prop_assert_eq!(lattice.get(c).is_ok(), inside);
            prop_assert_eq!(lattice.contains(c), inside);
        }
    }
}
