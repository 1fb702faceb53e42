//! Top-level simulation configuration.

use crate::{CoreError, CoreResult, Tick};

/// Smallest grid side that still leaves room for the 3-cell road bands plus
/// an off-road margin on each side.
pub const MIN_GRID_DIMENSION: u32 = 7;

/// Construction parameters for one simulation run.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and handed to the simulator builder, which calls
/// [`validate`](Self::validate) before anything is allocated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Grid width in cells.  Must be at least [`MIN_GRID_DIMENSION`].
    pub width: u32,

    /// Grid height in cells.  Must be at least [`MIN_GRID_DIMENSION`].
    pub height: u32,

    /// Number of vehicles placed at construction.  Must be positive.
    pub vehicle_count: usize,

    /// Ticks between signal phase flips.  Must be positive.
    pub signal_period: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Ticks executed by `Sim::run`.  Ignored by `run_ticks` and `step`.
    pub total_ticks: u64,

    /// Emit an entity snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    /// The classic scenario: a 15×15 grid, 10 vehicles, phase flip every 10
    /// ticks.
    fn default() -> Self {
        Self {
            width:                 15,
            height:                15,
            vehicle_count:         10,
            signal_period:         10,
            seed:                  42,
            total_ticks:           100,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// Reject configurations that cannot produce a well-formed intersection.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width < MIN_GRID_DIMENSION || self.height < MIN_GRID_DIMENSION {
            return Err(CoreError::Config(format!(
                "grid {}x{} is smaller than the minimum {m}x{m}",
                self.width,
                self.height,
                m = MIN_GRID_DIMENSION,
            )));
        }
        if self.vehicle_count == 0 {
            return Err(CoreError::Config("vehicle_count must be positive".into()));
        }
        if self.signal_period == 0 {
            return Err(CoreError::Config("signal_period must be positive".into()));
        }
        if u32::try_from(self.vehicle_count).is_err() {
            return Err(CoreError::Config(format!(
                "vehicle_count {} exceeds the VehicleId range",
                self.vehicle_count
            )));
        }
        Ok(())
    }

    /// The tick at which `Sim::run` stops (inclusive: the last processed tick).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}
