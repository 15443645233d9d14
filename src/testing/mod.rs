mod stubs;

pub use stubs::VecSampleStream;
