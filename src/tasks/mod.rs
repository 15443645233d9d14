mod stream_profiler;

pub use stream_profiler::StreamProfiler;
