//! Simulation observer trait for progress reporting and data collection.

use cx_core::Tick;

use crate::{Entity, Phase, TickStats};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_ticks`][crate::Sim::run_ticks].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: phase logger
///
/// ```rust,ignore
/// struct PhaseLogger;
///
/// impl SimObserver for PhaseLogger {
///     fn on_phase_change(&mut self, tick: Tick, phase: Phase) {
///         println!("{tick}: signal now {phase}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the tick is processed.  `tick` is the tick about to run.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when the signal flips, before any vehicle moves this tick.
    fn on_phase_change(&mut self, _tick: Tick, _phase: Phase) {}

    /// Called after every vehicle has been processed.
    ///
    /// `phase` is the phase that governed this tick's moves.
    fn on_tick_end(&mut self, _tick: Tick, _phase: Phase, _stats: &TickStats) {}

    /// Called every `config.output_interval_ticks` ticks (and once for the
    /// initial placement at tick 0) with every vehicle followed by the signal.
    fn on_snapshot(&mut self, _tick: Tick, _entities: &[Entity]) {}

    /// Called once after `Sim::run` completes its final tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
