//! Plain data row types written by output backends.

use cx_sim::{Entity, Phase, TickStats};

/// Signal rows carry this in the `id` column.
pub const SIGNAL_ID: i64 = -1;

/// One entity's position at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySnapshotRow {
    pub tick:      u64,
    /// `"vehicle"` or `"signal"`.
    pub kind:      &'static str,
    /// Vehicle id, or [`SIGNAL_ID`].
    pub id:        i64,
    pub x:         u32,
    pub y:         u32,
    /// Vehicle heading; empty for the signal.
    pub direction: &'static str,
    /// Signal phase; empty for vehicles.
    pub phase:     &'static str,
}

impl EntitySnapshotRow {
    pub fn from_entity(tick: u64, entity: &Entity) -> Self {
        let cell = entity.cell();
        let (id, direction, phase) = match *entity {
            Entity::Vehicle { id, direction, .. } => (id.0 as i64, direction.as_str(), ""),
            Entity::Signal { phase, .. } => (SIGNAL_ID, "", phase.as_str()),
        };
        Self {
            tick,
            kind: entity.kind().as_str(),
            id,
            x: cell.x,
            y: cell.y,
            direction,
            phase,
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:     u64,
    pub phase:    &'static str,
    pub eligible: u64,
    pub moved:    u64,
    pub wrapped:  u64,
    pub blocked:  u64,
}

impl TickSummaryRow {
    pub fn new(tick: u64, phase: Phase, stats: &TickStats) -> Self {
        Self {
            tick,
            phase:    phase.as_str(),
            eligible: stats.eligible as u64,
            moved:    stats.moved as u64,
            wrapped:  stats.wrapped as u64,
            blocked:  stats.blocked as u64,
        }
    }
}
