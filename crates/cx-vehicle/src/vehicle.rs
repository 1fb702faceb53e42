//! A single vehicle agent.

use std::sync::Arc;

use cx_core::{Axis, Cell, Direction, VehicleId};
use cx_lanes::LaneMap;

use crate::{MoveOutcome, resolve_move};

/// Columns/rows either side of the centre counted as "near" the intersection.
const NEAR_RADIUS: u32 = 2;

/// A vehicle with a fixed heading, driving on a shared [`LaneMap`].
///
/// The heading is chosen once at construction and never changes.  Position
/// only changes through [`advance`](Self::advance), which the simulator
/// calls when the signal gives this vehicle's axis right of way.
#[derive(Clone, Debug)]
pub struct Vehicle {
    id:        VehicleId,
    cell:      Cell,
    direction: Direction,
    /// Set by the most recent `advance` if it wrapped across an edge.
    wrapped:   bool,
    lanes:     Arc<LaneMap>,
}

impl Vehicle {
    pub fn new(id: VehicleId, cell: Cell, direction: Direction, lanes: Arc<LaneMap>) -> Self {
        debug_assert!(lanes.contains(cell.x as i64, cell.y as i64), "{id} placed off-grid at {cell}");
        Self {
            id,
            cell,
            direction,
            wrapped: false,
            lanes,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> VehicleId {
        self.id
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.direction.axis()
    }

    /// `true` if the last `advance` call wrapped this vehicle across an edge.
    #[inline]
    pub fn wrapped(&self) -> bool {
        self.wrapped
    }

    pub fn lanes(&self) -> &LaneMap {
        &self.lanes
    }

    // ── Behaviour ─────────────────────────────────────────────────────────

    /// Try to move one cell along the heading.
    ///
    /// Blocked moves are silent: the position is left untouched and
    /// [`MoveOutcome::Blocked`] is returned.
    pub fn advance(&mut self) -> MoveOutcome {
        let (next, outcome) = resolve_move(&self.lanes, self.cell, self.direction);
        self.wrapped = outcome == MoveOutcome::Wrapped;
        self.cell = next;
        outcome
    }

    /// `true` when the vehicle's column is within two of the centre column or
    /// its row within two of the centre row.
    pub fn near_intersection(&self) -> bool {
        let center = self.lanes.center();
        self.cell.x.abs_diff(center.x) <= NEAR_RADIUS || self.cell.y.abs_diff(center.y) <= NEAR_RADIUS
    }
}
