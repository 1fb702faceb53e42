//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use cx_core::{Cell, Direction, SimConfig, SimRng, SimClock, VehicleId};
use cx_lanes::{LaneMap, LaneMapBuilder};
use cx_vehicle::Vehicle;
use log::info;

use crate::{Sim, SimError, SimResult, TrafficSignal};

/// Child-stream offsets of the root `SimRng`.
const LANE_STREAM:      u64 = 0;
const PLACEMENT_STREAM: u64 = 1;

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                            |
/// |---------------------|----------------------------------------------------|
/// | `.placements(v)`    | Uniform drivable cell + uniform heading per vehicle |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .placements(vec![(Cell::new(7, 0), Direction::Down); 10])
///     .build()?;
/// sim.step();
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    placements: Option<Vec<(Cell, Direction)>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, placements: None }
    }

    /// Supply the starting cell and heading of every vehicle (must be length
    /// `vehicle_count`, cells must be inside the grid).
    ///
    /// Cells need not be drivable; a vehicle placed off-road simply stays
    /// blocked until its next cell is a road.
    pub fn placements(mut self, placements: Vec<(Cell, Direction)>) -> Self {
        self.placements = Some(placements);
        self
    }

    /// Validate inputs, lay out the lanes, place the vehicles and the signal,
    /// and return a simulator at tick 0.
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;

        let mut root = SimRng::new(config.seed);
        let mut lane_rng = root.child(LANE_STREAM);
        let mut placement_rng = root.child(PLACEMENT_STREAM);

        let lanes = Arc::new(LaneMapBuilder::new(config.width, config.height).build(&mut lane_rng)?);

        let placements = match self.placements {
            Some(p) => {
                check_placements(&p, config.vehicle_count, &lanes)?;
                p
            }
            None => random_placements(config.vehicle_count, &lanes, &mut placement_rng)?,
        };

        let vehicles: Vec<Vehicle> = placements
            .into_iter()
            .enumerate()
            .map(|(i, (cell, direction))| {
                Vehicle::new(VehicleId(i as u32), cell, direction, Arc::clone(&lanes))
            })
            .collect();

        let signal = TrafficSignal::new(lanes.center());

        info!(
            "built {}x{} intersection: {} vehicles, divider row {}, signal period {}",
            config.width,
            config.height,
            vehicles.len(),
            lanes.divider_row(),
            config.signal_period,
        );

        Ok(Sim {
            config,
            clock: SimClock::new(),
            lanes,
            signal,
            vehicles,
        })
    }
}

fn check_placements(
    placements: &[(Cell, Direction)],
    expected:   usize,
    lanes:      &LaneMap,
) -> SimResult<()> {
    if placements.len() != expected {
        return Err(SimError::PlacementCountMismatch { expected, got: placements.len() });
    }
    for (index, &(cell, _)) in placements.iter().enumerate() {
        if !lanes.contains(cell.x as i64, cell.y as i64) {
            return Err(SimError::PlacementOutOfBounds {
                index,
                cell,
                width:  lanes.width(),
                height: lanes.height(),
            });
        }
    }
    Ok(())
}

/// Independent uniform draws, with replacement: a drivable cell, then a
/// heading, per vehicle.
fn random_placements(
    count: usize,
    lanes: &LaneMap,
    rng:   &mut SimRng,
) -> SimResult<Vec<(Cell, Direction)>> {
    let drivable: Vec<Cell> = lanes.drivable_cells().collect();
    (0..count)
        .map(|_| {
            let cell = *rng.choose(&drivable).ok_or(SimError::NoDrivableCells)?;
            let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
            Ok((cell, direction))
        })
        .collect()
}
