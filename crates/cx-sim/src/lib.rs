//! `cx-sim` — tick loop orchestrator for the crossing intersection simulator.
//!
//! # Tick loop
//!
//! ```text
//! step():
//!   ① Clock   — tick += 1.
//!   ② Signal  — if tick % signal_period == 0, flip the phase.
//!   ③ Move    — for each vehicle in population order:
//!                 heading axis == green axis → Vehicle::advance()
//!                 otherwise                  → skipped, no state change
//! ```
//!
//! The simulator is the only writer of the tick counter and the signal
//! phase.  Stepping cannot fail once [`SimBuilder::build`] has succeeded.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs phase ③ on Rayon's thread pool.                   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cx_core::SimConfig;
//! use cx_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver);
//! for entity in sim.entities() {
//!     println!("{:?} at {}", entity.kind(), entity.cell());
//! }
//! ```

pub mod builder;
pub mod entity;
pub mod error;
pub mod observer;
pub mod signal;
pub mod sim;


pub use builder::SimBuilder;
pub use entity::{Color, Entity, EntityKind, Portrayal, Shape};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use signal::{Phase, TrafficSignal};
pub use sim::{Sim, TickStats};
