//! The immutable drivable/blocked matrix.

use std::fmt;
use std::ops::Range;

use cx_core::Cell;

/// The 3-cell central band of a grid side: `(size-3)/2 .. (size+3)/2`.
#[inline]
pub(crate) fn band(size: u32) -> Range<u32> {
    (size - 3) / 2..(size + 3) / 2
}

/// Boolean drivability matrix for a `width × height` grid.
///
/// Stored row-major (`y * width + x`).  Do not construct directly; use
/// [`LaneMapBuilder`][crate::LaneMapBuilder].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaneMap {
    width:       u32,
    height:      u32,
    divider_row: u32,
    cells:       Vec<bool>,
}

impl LaneMap {
    pub(crate) fn blank(width: u32, height: u32, divider_row: u32) -> Self {
        Self {
            width,
            height,
            divider_row,
            cells: vec![false; width as usize * height as usize],
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, x: u32, y: u32, drivable: bool) {
        let i = self.offset(x, y);
        self.cells[i] = drivable;
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The centre cell `(width/2, height/2)`, where the signal stands.
    #[inline]
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if the signed coordinate lies inside the grid.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y)
    }

    /// `true` if `(x, y)` is inside the grid and on a road.
    #[inline]
    pub fn is_drivable(&self, x: i64, y: i64) -> bool {
        self.contains(x, y) && self.cells[self.offset(x as u32, y as u32)]
    }

    #[inline]
    pub fn is_cell_drivable(&self, cell: Cell) -> bool {
        self.is_drivable(cell.x as i64, cell.y as i64)
    }

    /// `true` if the signed coordinate is in the grid and touches an outer
    /// edge (row or column 0 or max).
    #[inline]
    pub fn on_edge(&self, x: i64, y: i64) -> bool {
        self.contains(x, y)
            && (x == 0 || y == 0 || x == self.width as i64 - 1 || y == self.height as i64 - 1)
    }

    /// Columns of the vertical road.
    pub fn vertical_band(&self) -> Range<u32> {
        band(self.width)
    }

    /// Rows of the horizontal road.
    pub fn horizontal_band(&self) -> Range<u32> {
        band(self.height)
    }

    /// The row of the horizontal band that separates the two one-way lanes.
    #[inline]
    pub fn divider_row(&self) -> u32 {
        self.divider_row
    }

    /// `true` for cells where both road bands cross.
    pub fn in_intersection_box(&self, cell: Cell) -> bool {
        self.vertical_band().contains(&cell.x) && self.horizontal_band().contains(&cell.y)
    }

    /// Every drivable cell, row by row.
    pub fn drivable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().filter(|(_, d)| **d).map(|(i, _)| {
            let w = self.width as usize;
            Cell::new((i % w) as u32, (i / w) as u32)
        })
    }

    pub fn drivable_count(&self) -> usize {
        self.cells.iter().filter(|d| **d).count()
    }
}

impl fmt::Display for LaneMap {
    /// One text line per row: `#` drivable, `.` blocked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = if self.cells[self.offset(x, y)] { '#' } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
