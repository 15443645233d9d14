use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("invalid window capacity: {0} (must be at least 1)")]
    InvalidWindowCapacity(usize),
}
