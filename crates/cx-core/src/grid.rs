//! Grid geometry: cells, travel directions, and the axis they belong to.
//!
//! The grid is a pure coordinate space.  `x` grows to the right and `y`
//! grows "down" (the direction vertical traffic travels).  Cells are stored
//! unsigned; arithmetic that can leave the grid goes through `i64`.

use std::fmt;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A grid coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The signed coordinate one step along `dir`.  May be outside the grid.
    #[inline]
    pub fn step(self, dir: Direction) -> (i64, i64) {
        let (dx, dy) = dir.delta();
        (self.x as i64 + dx as i64, self.y as i64 + dy as i64)
    }
}

impl From<(u32, u32)> for Cell {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Axis ──────────────────────────────────────────────────────────────────────

/// The lane group a direction belongs to.  The traffic signal grants right of
/// way per axis.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Vertical,
    Horizontal,
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// The fixed heading of a vehicle.
///
/// There is exactly one vertical heading and two horizontal ones, so a
/// uniform draw over [`Direction::ALL`] makes horizontal traffic twice as
/// likely as vertical traffic.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// `(0, 1)`
    Down,
    /// `(1, 0)`
    Right,
    /// `(-1, 0)`
    Left,
}

impl Direction {
    /// Every heading a vehicle can be created with, in draw order.
    pub const ALL: [Direction; 3] = [Direction::Down, Direction::Right, Direction::Left];

    /// Unit step `(dx, dy)`.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Down  => (0, 1),
            Direction::Right => (1, 0),
            Direction::Left  => (-1, 0),
        }
    }

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::Down                    => Axis::Vertical,
            Direction::Right | Direction::Left => Axis::Horizontal,
        }
    }

    /// Label used in CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Down  => "down",
            Direction::Right => "right",
            Direction::Left  => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
