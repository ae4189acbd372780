//! Procedural heightmap generation.
//!
//! Two independent generators produce a [`NoiseField`] of elevation values:
//!
//! - [`generate_gradient_noise`] - Multi-octave gradient noise, normalized to `[0, 1]`
//! - [`generate_diamond_square`] - Diamond-Square midpoint displacement with exact extremes
//!
//! Both are pure functions of their parameters. Each call seeds its own
//! random streams and allocates its own buffer, so calls can run concurrently.

pub mod config;
pub mod diamond_square;
pub mod error;
pub mod field;
pub mod gradient;

pub use config::{DiamondSquareParams, GradientNoiseParams, HeightfieldConfig};
pub use diamond_square::{DiamondSquareField, generate_diamond_square};
pub use error::{ConfigError, GenerationError};
pub use field::NoiseField;
pub use gradient::{GradientNoise, generate_gradient_noise};
