//! Basic numerical concepts used throughout the crate

// Floating-point precision is configured here
/// Scalar type of all coordinate components
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f32")]
pub use std::f32 as floats;
/// Scalar type of all coordinate components
#[cfg(not(feature = "f32"))]
pub type Float = f64;
#[cfg(not(feature = "f32"))]
pub use std::f64 as floats;
