//! Error types for heightfield generation and configuration.

use thiserror::Error;

/// An error that can occur while generating a heightfield.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// The requested grid has more cells than can be addressed.
    #[error("Grid of {width}x{height} cells is too large")]
    TooLarge {
        /// Requested width, saturated at `usize::MAX`.
        width: usize,
        /// Requested height, saturated at `usize::MAX`.
        height: usize,
    },
    /// The grid buffer could not be allocated.
    #[error("Failed to allocate a grid of {cells} cells")]
    Allocation {
        /// Number of `f32` cells requested.
        cells: usize,
    },
    /// A float parameter is NaN or infinite.
    #[error("Parameter `{name}` must be finite")]
    NonFiniteParameter {
        /// Name of the offending parameter.
        name: &'static str,
    },
}

/// An error that can occur while loading a heightfield configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration text is not valid JSON5 for the expected schema.
    #[error("Failed to parse heightfield config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The configuration parsed but holds unusable parameters.
    #[error("Invalid heightfield config: {0}")]
    Invalid(#[from] GenerationError),
}
