use std::io::Error;

/// Pull-based interface for sources that produce scalar samples.
///
/// Implementations may represent finite recordings (e.g., a vector of
/// observed latencies) or unbounded generators. The samples carry no
/// identity or timestamp at this layer; ordering is purely arrival order.
pub trait SampleStream {
    /// Indicates whether the stream *may* produce more samples.
    ///
    /// Finite streams should return `false` once exhausted. Unbounded
    /// generators typically return `true` always.
    ///
    /// This call should be cheap and side effect free. If it returns
    /// `false`, a subsequent call to [`next_sample`] must return `None`.
    ///
    /// [`next_sample`]: SampleStream::next_sample
    fn has_more_samples(&self) -> bool;

    /// Produces the next sample, or `None` if the stream is exhausted.
    fn next_sample(&mut self) -> Option<f64>;

    /// Resets the stream to its initial state.
    ///
    /// For recordings this rewinds to the first sample; for generators it
    /// usually re-seeds the RNG and clears internal counters.
    ///
    /// Returns an error if the underlying source cannot be rewound.
    fn restart(&mut self) -> Result<(), Error>;
}
