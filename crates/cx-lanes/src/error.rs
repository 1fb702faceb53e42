use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaneError {
    #[error("grid {width}x{height} is too small for the road bands (minimum {min}x{min})")]
    TooSmall { width: u32, height: u32, min: u32 },
}

pub type LaneResult<T> = Result<T, LaneError>;
