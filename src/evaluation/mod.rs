mod measurement;
mod preview;

pub use measurement::Measurement;
pub use preview::{CurveFormat, ProfileCurve, Snapshot};
