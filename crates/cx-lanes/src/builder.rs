//! Builder that carves the intersection layout into a blank grid.

use cx_core::{MIN_GRID_DIMENSION, SimRng};

use crate::map::band;
use crate::{LaneError, LaneMap, LaneResult};

/// Constructs a [`LaneMap`] for a `width × height` grid.
///
/// # Example
///
/// ```rust
/// use cx_core::SimRng;
/// use cx_lanes::LaneMapBuilder;
///
/// let mut rng = SimRng::new(42);
/// let map = LaneMapBuilder::new(15, 15).build(&mut rng).unwrap();
/// assert!(map.is_drivable(7, 7));
/// ```
pub struct LaneMapBuilder {
    width:  u32,
    height: u32,
}

impl LaneMapBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Lay out the bands, carve the divider, and re-open the intersection box.
    ///
    /// Consumes exactly one draw from `rng` (the divider row).
    pub fn build(self, rng: &mut SimRng) -> LaneResult<LaneMap> {
        if self.width < MIN_GRID_DIMENSION || self.height < MIN_GRID_DIMENSION {
            return Err(LaneError::TooSmall {
                width:  self.width,
                height: self.height,
                min:    MIN_GRID_DIMENSION,
            });
        }

        let columns = band(self.width);
        let rows = band(self.height);
        let divider_row = rng.gen_range(rows.clone());

        let mut map = LaneMap::blank(self.width, self.height, divider_row);

        // ① Vertical road.
        for x in columns.clone() {
            for y in 0..self.height {
                map.set(x, y, true);
            }
        }

        // ② Horizontal road.
        for y in rows.clone() {
            for x in 0..self.width {
                map.set(x, y, true);
            }
        }

        // ③ Divider: close the whole row, then reopen where the vertical road
        //   crosses it.
        for x in 0..self.width {
            map.set(x, divider_row, false);
        }
        for x in columns.clone() {
            map.set(x, divider_row, true);
        }

        // ④ Intersection box.
        for x in columns {
            for y in rows.clone() {
                map.set(x, y, true);
            }
        }

        Ok(map)
    }
}
