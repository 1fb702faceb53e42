//! `cx-vehicle` — vehicles and the movement rule they follow.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`movement`] | `MoveOutcome`, `resolve_move` — the pure one-step rule    |
//! | [`vehicle`]  | `Vehicle` — id, position, fixed heading, wrap flag        |
//!
//! # Movement model
//!
//! A vehicle only ever moves one cell along its heading:
//!
//! 1. `next = pos + heading`.
//! 2. If `next` is outside the grid or off-road the vehicle stays put.
//! 3. If `next` is an outer-edge cell the vehicle wraps: both coordinates are
//!    shifted by half the grid (mod size), landing it on the far side of the
//!    centre.
//!
//! A vehicle on the last column heading right is therefore *blocked*, not
//! wrapped: `next` is already out of bounds.  Wrapping only fires when `next`
//! is exactly on the edge.

pub mod movement;
pub mod vehicle;


pub use movement::{MoveOutcome, resolve_move};
pub use vehicle::Vehicle;
