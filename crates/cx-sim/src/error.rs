use cx_core::{Cell, CoreError};
use cx_lanes::LaneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("lane map error: {0}")]
    Lanes(#[from] LaneError),

    #[error("{got} placements supplied for {expected} vehicles")]
    PlacementCountMismatch { expected: usize, got: usize },

    #[error("placement {index} at {cell} is outside the {width}x{height} grid")]
    PlacementOutOfBounds {
        index:  usize,
        cell:   Cell,
        width:  u32,
        height: u32,
    },

    #[error("lane map has no drivable cells to place vehicles on")]
    NoDrivableCells,
}

pub type SimResult<T> = Result<T, SimError>;
