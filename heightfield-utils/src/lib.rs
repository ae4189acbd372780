//! Shared numeric building blocks for heightfield generation.
//!
//! - [`random`] - Seeded random sources with a fixed, reproducible stream
//! - [`math`] - Scalar helpers used by the noise samplers

pub mod math;
pub mod random;
