//! `cx-lanes` — the drivable lane map of a single four-way intersection.
//!
//! # Layout
//!
//! ```text
//!   . . . . . . # # # . . . . . .
//!   . . . . . . # # # . . . . . .
//!   # # # # # # # # # # # # # # #    ← horizontal band (3 rows)
//!   . . . . . . # # # . . . . . .    ← divider row (random row of the band)
//!   # # # # # # # # # # # # # # #
//!   . . . . . . # # # . . . . . .
//!               ↑ vertical band (3 columns)
//! ```
//!
//! The divider splits the horizontal band into two one-way lanes.  The 3×3
//! intersection box where both bands cross is always drivable.
//!
//! Build a map with [`LaneMapBuilder`]; the result is immutable and is
//! shared by every vehicle behind an `Arc`.

pub mod builder;
pub mod error;
pub mod map;

#[cfg(test)]
mod tests;

pub use builder::LaneMapBuilder;
pub use error::{LaneError, LaneResult};
pub use map::LaneMap;
