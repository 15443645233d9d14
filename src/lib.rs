pub mod core;
pub mod estimators;
pub mod evaluation;
pub mod streams;
pub mod tasks;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
