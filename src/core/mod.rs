mod sample_window;

pub use sample_window::SampleWindow;
