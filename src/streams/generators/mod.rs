mod latency;

pub use latency::LatencyGenerator;
