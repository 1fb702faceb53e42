//! `cx-core` — foundational types for the `crossing` intersection simulator.
//!
//! Every other `cx-*` crate depends on this one.  It has no `cx-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `VehicleId`                                            |
//! | [`grid`]     | `Cell`, `Direction`, `Axis`                            |
//! | [`time`]     | `Tick`, `SimClock`                                     |
//! | [`config`]   | `SimConfig`, `MIN_GRID_DIMENSION`                      |
//! | [`rng`]      | `SimRng`                                               |
//! | [`error`]    | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{MIN_GRID_DIMENSION, SimConfig};
pub use error::{CoreError, CoreResult};
pub use grid::{Axis, Cell, Direction};
pub use ids::VehicleId;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
