pub mod generators;
mod stream;

pub use stream::SampleStream;
