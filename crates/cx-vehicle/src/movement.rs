//! The one-step movement rule, independent of any vehicle state.

use cx_core::{Cell, Direction};
use cx_lanes::LaneMap;

/// What happened when a vehicle tried to advance.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// Stepped one cell along its heading.
    Moved,
    /// Stepped onto an edge cell and was relocated across the grid.
    Wrapped,
    /// Next cell out of bounds or off-road; position unchanged.
    Blocked,
}

impl MoveOutcome {
    #[inline]
    pub fn changed_position(self) -> bool {
        !matches!(self, MoveOutcome::Blocked)
    }
}

/// Where a vehicle at `from` heading `dir` ends up after one step.
///
/// Returns `from` unchanged together with [`MoveOutcome::Blocked`] when the
/// step is not allowed.
pub fn resolve_move(lanes: &LaneMap, from: Cell, dir: Direction) -> (Cell, MoveOutcome) {
    let (nx, ny) = from.step(dir);
    if !lanes.is_drivable(nx, ny) {
        return (from, MoveOutcome::Blocked);
    }

    // Drivable implies in bounds, so both coordinates are non-negative.
    let next = Cell::new(nx as u32, ny as u32);
    if lanes.on_edge(nx, ny) {
        let (w, h) = (lanes.width(), lanes.height());
        let mirrored = Cell::new((next.x + w / 2) % w, (next.y + h / 2) % h);
        return (mirrored, MoveOutcome::Wrapped);
    }

    (next, MoveOutcome::Moved)
}
