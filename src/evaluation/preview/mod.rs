mod profile_curve;
mod snapshot;

pub use profile_curve::{CurveFormat, ProfileCurve};
pub use snapshot::Snapshot;
