//! Generation parameters and configuration loading.
//!
//! Parameter structs deserialize with every field optional; missing fields
//! take their documented defaults. A [`HeightfieldConfig`] groups the
//! parameters for both generators and is read from JSON5 text.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GenerationError};

/// Parameters for [`generate_gradient_noise`](crate::generate_gradient_noise).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientNoiseParams {
    /// Number of columns in the output field.
    pub width: usize,
    /// Number of rows in the output field.
    pub height: usize,
    /// Seed for the per-octave sampling offsets.
    pub octave_seed: i32,
    /// Seed for the permutation table.
    pub table_seed: i32,
    /// Zoom factor; larger values stretch the noise over more cells.
    ///
    /// Values `<= 0` are silently replaced by [`MIN_SCALE`](crate::gradient::MIN_SCALE).
    pub scale: f32,
    /// Number of octaves summed per cell.
    pub octaves: u32,
    /// Amplitude multiplier applied after each octave.
    pub persistence: f32,
    /// Frequency multiplier applied after each octave.
    pub lacunarity: f32,
    /// Horizontal shift of the sampling window, in cells.
    pub start_x: f32,
    /// Vertical shift of the sampling window, in cells.
    pub start_y: f32,
}

impl Default for GradientNoiseParams {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            octave_seed: 1,
            table_seed: 1,
            scale: 100.0,
            octaves: 3,
            persistence: 0.5,
            lacunarity: 2.0,
            start_x: 0.0,
            start_y: 0.0,
        }
    }
}

impl GradientNoiseParams {
    /// Parameters for a `width` x `height` field with default noise settings.
    #[must_use]
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Reject parameters that cannot produce a meaningful field.
    ///
    /// A non-positive `scale` is not an error; it is clamped at generation time.
    pub fn validate(&self) -> Result<(), GenerationError> {
        require_finite("scale", self.scale)?;
        require_finite("persistence", self.persistence)?;
        require_finite("lacunarity", self.lacunarity)?;
        require_finite("start_x", self.start_x)?;
        require_finite("start_y", self.start_y)?;
        self.width
            .checked_mul(self.height)
            .ok_or(GenerationError::TooLarge {
                width: self.width,
                height: self.height,
            })?;
        Ok(())
    }
}

/// Parameters for [`generate_diamond_square`](crate::generate_diamond_square).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiamondSquareParams {
    /// Grid side is `2^degree_of_two + 1`.
    pub degree_of_two: u8,
    /// Seed for the displacement stream.
    pub seed: i32,
    /// Produce a `(2h - 1) x h` grid made of two square tiles sharing an edge.
    pub rectangular: bool,
    /// Roughness; scales the random displacement at every level.
    pub asperity: f32,
    /// Lower bound for the seeded corner values.
    pub range_min: f32,
    /// Upper bound for the seeded corner values. Swapped with `range_min`
    /// if smaller.
    pub range_max: f32,
}

impl Default for DiamondSquareParams {
    fn default() -> Self {
        Self {
            degree_of_two: 8,
            seed: 0,
            rectangular: false,
            asperity: 1.0,
            range_min: 0.3,
            range_max: 0.6,
        }
    }
}

impl DiamondSquareParams {
    /// Reject parameters that cannot produce a meaningful field.
    pub fn validate(&self) -> Result<(), GenerationError> {
        require_finite("asperity", self.asperity)?;
        require_finite("range_min", self.range_min)?;
        require_finite("range_max", self.range_max)?;
        self.dimensions().map(|_| ())
    }

    /// Seed range with its bounds in ascending order.
    #[must_use]
    pub fn ordered_range(&self) -> (f32, f32) {
        if self.range_min > self.range_max {
            (self.range_max, self.range_min)
        } else {
            (self.range_min, self.range_max)
        }
    }

    /// Grid dimensions `(width, height)`.
    pub fn dimensions(&self) -> Result<(usize, usize), GenerationError> {
        let too_large = GenerationError::TooLarge {
            width: usize::MAX,
            height: usize::MAX,
        };
        let side = 2usize
            .checked_pow(u32::from(self.degree_of_two))
            .and_then(|p| p.checked_add(1))
            .ok_or_else(|| too_large.clone())?;
        let width = if self.rectangular {
            side.checked_mul(2).map(|w| w - 1).ok_or(too_large)?
        } else {
            side
        };
        Ok((width, side))
    }
}

/// Parameters for both generators, as loaded from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightfieldConfig {
    /// Gradient noise settings, if that generator is configured.
    pub gradient: Option<GradientNoiseParams>,
    /// Diamond-Square settings, if that generator is configured.
    pub diamond_square: Option<DiamondSquareParams>,
}

impl HeightfieldConfig {
    /// Parse and validate a JSON5 configuration.
    ///
    /// ```json5
    /// {
    ///     gradient: { width: 512, height: 512, octaves: 5 },
    ///     diamond_square: { degree_of_two: 9, rectangular: true },
    /// }
    /// ```
    pub fn from_json5(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json5::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every configured generator.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if let Some(gradient) = &self.gradient {
            gradient.validate()?;
        }
        if let Some(diamond_square) = &self.diamond_square {
            diamond_square.validate()?;
        }
        Ok(())
    }
}

fn require_finite(name: &'static str, value: f32) -> Result<(), GenerationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GenerationError::NonFiniteParameter { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_defaults() {
        let params = GradientNoiseParams::default();
        assert_eq!(params.octave_seed, 1);
        assert_eq!(params.table_seed, 1);
        assert_eq!(params.octaves, 3);
        assert!((params.scale - 100.0).abs() < f32::EPSILON);
        assert!((params.persistence - 0.5).abs() < f32::EPSILON);
        assert!((params.lacunarity - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn gradient_rejects_non_finite() {
        let params = GradientNoiseParams {
            lacunarity: f32::NAN,
            ..GradientNoiseParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(GenerationError::NonFiniteParameter { name: "lacunarity" })
        );
    }

    #[test]
    fn gradient_accepts_non_positive_scale() {
        let params = GradientNoiseParams {
            scale: -3.0,
            ..GradientNoiseParams::default()
        };
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn diamond_square_dimensions() {
        let square = DiamondSquareParams {
            degree_of_two: 3,
            ..DiamondSquareParams::default()
        };
        assert_eq!(square.dimensions(), Ok((9, 9)));

        let rectangular = DiamondSquareParams {
            rectangular: true,
            ..square
        };
        assert_eq!(rectangular.dimensions(), Ok((17, 9)));

        let degenerate = DiamondSquareParams {
            degree_of_two: 0,
            ..square
        };
        assert_eq!(degenerate.dimensions(), Ok((2, 2)));
    }

    #[test]
    fn diamond_square_rejects_huge_degree() {
        let params = DiamondSquareParams {
            degree_of_two: u8::MAX,
            ..DiamondSquareParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(GenerationError::TooLarge { .. })
        ));
    }

    #[test]
    fn ordered_range_swaps_inverted_bounds() {
        let params = DiamondSquareParams {
            range_min: 0.9,
            range_max: 0.1,
            ..DiamondSquareParams::default()
        };
        assert_eq!(params.ordered_range(), (0.1, 0.9));
    }

    #[test]
    fn config_from_json5_fills_defaults() {
        let config = HeightfieldConfig::from_json5(
            r"{
                // only the fields we care about
                gradient: { width: 64, height: 32, octaves: 5 },
                diamond_square: { rectangular: true },
            }",
        )
        .expect("valid config");

        let gradient = config.gradient.expect("gradient section");
        assert_eq!(gradient.width, 64);
        assert_eq!(gradient.height, 32);
        assert_eq!(gradient.octaves, 5);
        assert_eq!(gradient.table_seed, 1);

        let diamond_square = config.diamond_square.expect("diamond_square section");
        assert!(diamond_square.rectangular);
        assert_eq!(diamond_square.degree_of_two, 8);
    }

    #[test]
    fn config_empty_document() {
        let config = HeightfieldConfig::from_json5("{}").expect("valid config");
        assert_eq!(config, HeightfieldConfig::default());
    }

    #[test]
    fn config_reports_parse_errors() {
        let result = HeightfieldConfig::from_json5("{ gradient: { width: \"wide\" } }");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn config_reports_invalid_parameters() {
        let result = HeightfieldConfig::from_json5("{ diamond_square: { degree_of_two: 200 } }");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(GenerationError::TooLarge { .. }))
        ));
    }
}
