mod error;
mod estimator;
mod mean;
mod window_percentile;

pub use error::EstimatorError;
pub use estimator::Estimator;
pub use mean::MeanEstimator;
pub use window_percentile::WindowPercentileEstimator;
