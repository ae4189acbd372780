//! Single-sample 2D gradient noise.

use heightfield_utils::math::{dot2, floor, lerp, quintic_curve};

use super::permutation::PermutationTable;
use crate::error::GenerationError;

/// 2D gradient noise over an integer lattice.
///
/// Each lattice point gets one of four axis-aligned unit gradients through
/// [`PermutationTable::gradient`]. Samples lie in `[-1, 1]` and are `0` on
/// every lattice point.
#[derive(Debug, Clone)]
pub struct GradientNoise {
    table: PermutationTable,
}

impl GradientNoise {
    /// Create a sampler whose table is sized for a `width` x `height` field.
    pub fn new(table_seed: i32, width: usize, height: usize) -> Result<Self, GenerationError> {
        let len = width
            .checked_mul(height)
            .ok_or(GenerationError::TooLarge { width, height })?;
        Ok(Self {
            table: PermutationTable::new(table_seed, len)?,
        })
    }

    /// Sample the noise at `(fx, fy)`.
    #[must_use]
    pub fn sample(&self, fx: f32, fy: f32) -> f32 {
        let left = floor(fx);
        let top = floor(fy);
        let right = left.wrapping_add(1);
        let bottom = top.wrapping_add(1);

        let px = fx - left as f32;
        let py = fy - top as f32;

        let top_left = self.table.gradient(left, top);
        let top_right = self.table.gradient(right, top);
        let bottom_left = self.table.gradient(left, bottom);
        let bottom_right = self.table.gradient(right, bottom);

        // Corner-to-point vectors dotted with the corner gradients
        let tx1 = dot2([px, py], top_left);
        let tx2 = dot2([px - 1.0, py], top_right);
        let bx1 = dot2([px, py - 1.0], bottom_left);
        let bx2 = dot2([px - 1.0, py - 1.0], bottom_right);

        let u = quintic_curve(px);
        let v = quintic_curve(py);

        let tx = lerp(tx1, tx2, u);
        let bx = lerp(bx1, bx2, u);
        lerp(tx, bx, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_on_lattice_points() {
        let noise = GradientNoise::new(1, 32, 32).expect("allocation");
        for x in -10..10 {
            for y in -10..10 {
                let v = noise.sample(x as f32, y as f32);
                assert!(v.abs() < 1e-6, "lattice ({x}, {y}) sampled {v}");
            }
        }
    }

    #[test]
    fn test_samples_bounded() {
        let noise = GradientNoise::new(17, 64, 64).expect("allocation");
        for i in 0..2000 {
            let fx = i as f32 * 0.173 - 150.0;
            let fy = i as f32 * 0.071 + 42.5;
            let v = noise.sample(fx, fy);
            assert!((-1.0..=1.0).contains(&v), "sample {v} out of range");
        }
    }

    #[test]
    fn test_deterministic() {
        let a = GradientNoise::new(5, 16, 16).expect("allocation");
        let b = GradientNoise::new(5, 16, 16).expect("allocation");
        for i in 0..100 {
            let fx = i as f32 * 0.37;
            let fy = i as f32 * -0.91;
            assert_eq!(a.sample(fx, fy).to_bits(), b.sample(fx, fy).to_bits());
        }
    }

    #[test]
    fn test_spatial_variation() {
        let noise = GradientNoise::new(0, 32, 32).expect("allocation");
        let values: Vec<f32> = (0..50)
            .map(|i| noise.sample(i as f32 * 0.5 + 0.25, i as f32 * 0.3 + 0.4))
            .collect();

        let min = values.iter().copied().fold(f32::INFINITY, f32::min);
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert!(max - min > 0.01, "gradient noise should vary spatially");
    }
}
