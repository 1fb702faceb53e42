//! The `Sim` struct and its tick loop.

use std::sync::Arc;

use cx_core::{SimClock, SimConfig, Tick};
use cx_lanes::LaneMap;
use cx_vehicle::{MoveOutcome, Vehicle};
use log::{debug, trace};

use crate::{Entity, Phase, SimObserver, TrafficSignal};

// ── TickStats ─────────────────────────────────────────────────────────────────

/// Movement counts for one tick.  Skipped (ineligible) vehicles are not
/// counted anywhere.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TickStats {
    /// Vehicles whose axis had green and therefore attempted a move.
    pub eligible: usize,
    /// Eligible vehicles that stepped one cell.
    pub moved:    usize,
    /// Eligible vehicles that wrapped across an edge.
    pub wrapped:  usize,
    /// Eligible vehicles that stayed put.
    pub blocked:  usize,
}

impl TickStats {
    #[inline]
    fn record(&mut self, outcome: MoveOutcome) {
        self.eligible += 1;
        match outcome {
            MoveOutcome::Moved   => self.moved += 1,
            MoveOutcome::Wrapped => self.wrapped += 1,
            MoveOutcome::Blocked => self.blocked += 1,
        }
    }

    #[cfg(feature = "parallel")]
    fn merge(mut self, other: TickStats) -> TickStats {
        self.eligible += other.eligible;
        self.moved += other.moved;
        self.wrapped += other.wrapped;
        self.blocked += other.blocked;
        self
    }
}

/// What one call to `process_tick` did.
struct TickReport {
    tick:    Tick,
    flipped: bool,
    stats:   TickStats,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The intersection simulator.
///
/// Owns the lane map, the traffic signal, and a fixed vehicle population
/// whose order is set at construction and never changes.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Construction parameters (grid size, signal period, seed, …).
    pub config: SimConfig,

    /// Tick counter.  Starts at 0 and advances by exactly one per step.
    pub clock: SimClock,

    pub(crate) lanes:    Arc<LaneMap>,
    pub(crate) signal:   TrafficSignal,
    pub(crate) vehicles: Vec<Vehicle>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the simulation by one tick.
    pub fn step(&mut self) {
        self.process_tick();
    }

    /// Run from the current tick until `config.total_ticks` have elapsed.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let remaining = self.config.end_tick().0.saturating_sub(self.clock.current_tick.0);
        self.run_ticks(remaining, observer);
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        let interval = self.config.output_interval_ticks;
        if interval > 0 && self.clock.current_tick == Tick::ZERO && n > 0 {
            observer.on_snapshot(Tick::ZERO, &self.entities());
        }

        for _ in 0..n {
            observer.on_tick_start(self.clock.current_tick + 1);
            let report = self.process_tick();
            let phase = self.signal.phase();
            if report.flipped {
                observer.on_phase_change(report.tick, phase);
            }
            observer.on_tick_end(report.tick, phase, &report.stats);
            if report.tick.is_boundary(interval) {
                observer.on_snapshot(report.tick, &self.entities());
            }
        }
    }

    // ── Observation ───────────────────────────────────────────────────────

    #[inline]
    pub fn tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn lanes(&self) -> &LaneMap {
        &self.lanes
    }

    pub fn signal(&self) -> &TrafficSignal {
        &self.signal
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.signal.phase()
    }

    /// The vehicle population in its fixed iteration order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Every vehicle (in population order) followed by the signal.
    pub fn entities(&self) -> Vec<Entity> {
        let mut out: Vec<Entity> = self
            .vehicles
            .iter()
            .map(|v| Entity::Vehicle {
                id:        v.id(),
                cell:      v.cell(),
                direction: v.direction(),
            })
            .collect();
        out.push(Entity::Signal {
            cell:  self.signal.position(),
            phase: self.signal.phase(),
        });
        out
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self) -> TickReport {
        let now = self.clock.advance();

        let flipped = now.is_boundary(self.config.signal_period);
        if flipped {
            let phase = self.signal.toggle();
            debug!("{now}: signal flipped to {phase}");
        }

        let stats = self.move_eligible(self.signal.phase());
        trace!(
            "{now}: {} eligible, {} moved, {} wrapped, {} blocked",
            stats.eligible, stats.moved, stats.wrapped, stats.blocked
        );

        TickReport { tick: now, flipped, stats }
    }

    /// Advance every vehicle whose axis has green; skip the rest untouched.
    fn move_eligible(&mut self, phase: Phase) -> TickStats {
        #[cfg(not(feature = "parallel"))]
        {
            let mut stats = TickStats::default();
            for vehicle in self.vehicles.iter_mut().filter(|v| phase.permits(v.axis())) {
                stats.record(vehicle.advance());
            }
            stats
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.vehicles
                .par_iter_mut()
                .filter(|v| phase.permits(v.axis()))
                .map(|v| {
                    let mut stats = TickStats::default();
                    stats.record(v.advance());
                    stats
                })
                .reduce(TickStats::default, TickStats::merge)
        }
    }
}
