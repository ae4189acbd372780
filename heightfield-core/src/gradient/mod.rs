//! Multi-octave gradient noise fields.
//!
//! - [`PermutationTable`] - Seeded bytes hashed into gradient choices
//! - [`GradientNoise`] - Single-sample 2D gradient noise
//! - [`generate_gradient_noise`] - Octave summation over a whole grid
//!
//! Every octave samples the same [`GradientNoise`] through its own random
//! offset, so octaves are decorrelated without extra tables. The running sum
//! subtracts half of the current amplitude after each octave past the first,
//! which keeps fields with many octaves centred; the result is clamped to
//! `[-1, 1]` and remapped to `[0, 1]`.

mod permutation;
mod sampler;

pub use permutation::{HASH_SPACE, PermutationTable, lattice_hash};
pub use sampler::GradientNoise;

use heightfield_utils::random::{NetRandom, Random};
use rayon::prelude::*;

use crate::config::GradientNoiseParams;
use crate::error::GenerationError;
use crate::field::NoiseField;

/// Scale used in place of a non-positive `scale` parameter.
pub const MIN_SCALE: f32 = 0.0001;

/// Octave offsets are drawn from `[-OFFSET_RANGE, OFFSET_RANGE)` cells.
const OFFSET_RANGE: i32 = 100_000;

/// Generate a `width` x `height` field of multi-octave gradient noise.
///
/// Output values lie in `[0, 1]`. Identical parameters always produce a
/// bit-identical field.
///
/// A `scale <= 0` is silently replaced by [`MIN_SCALE`] rather than
/// rejected, which zooms far out instead of failing.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(width = params.width, height = params.height, octaves = params.octaves)
)]
pub fn generate_gradient_noise(params: &GradientNoiseParams) -> Result<NoiseField, GenerationError> {
    params.validate()?;

    let noise = GradientNoise::new(params.table_seed, params.width, params.height)?;
    let octaves = OctaveSampler::new(&noise, params);
    let mut field = NoiseField::zeroed(params.width, params.height)?;
    if field.is_empty() {
        return Ok(field);
    }

    field
        .values_mut()
        .par_chunks_mut(params.width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = octaves.value_at(x, y);
            }
        });

    Ok(field)
}

/// Per-octave sampling origins, in noise-space units.
///
/// Each component is `(randomInt(-100000, 100000) + start) / dimension`,
/// drawn x then y for every octave from a stream seeded by `octave_seed`.
#[must_use]
pub fn octave_offsets(params: &GradientNoiseParams) -> Vec<[f32; 2]> {
    let mut rng = NetRandom::from_seed(params.octave_seed);
    let width = params.width as f32;
    let height = params.height as f32;

    (0..params.octaves)
        .map(|_| {
            let x = rng.next_i32_range(-OFFSET_RANGE, OFFSET_RANGE) as f32 + params.start_x;
            let y = rng.next_i32_range(-OFFSET_RANGE, OFFSET_RANGE) as f32 + params.start_y;
            [x / width, y / height]
        })
        .collect()
}

fn effective_scale(scale: f32) -> f32 {
    if scale <= 0.0 {
        log::debug!("Gradient noise scale {scale} is not positive, using {MIN_SCALE}");
        MIN_SCALE
    } else {
        scale
    }
}

/// Everything needed to evaluate one cell; shared read-only across rows.
struct OctaveSampler<'a> {
    noise: &'a GradientNoise,
    offsets: Vec<[f32; 2]>,
    scale: f32,
    persistence: f32,
    lacunarity: f32,
    half_width: f32,
    half_height: f32,
}

impl<'a> OctaveSampler<'a> {
    fn new(noise: &'a GradientNoise, params: &GradientNoiseParams) -> Self {
        Self {
            noise,
            offsets: octave_offsets(params),
            scale: effective_scale(params.scale),
            persistence: params.persistence,
            lacunarity: params.lacunarity,
            half_width: params.width as f32 / 2.0,
            half_height: params.height as f32 / 2.0,
        }
    }

    fn value_at(&self, x: usize, y: usize) -> f32 {
        let mut amplitude = 1.0_f32;
        let mut frequency = 1.0_f32;
        let mut value = 0.0_f32;
        let mut compensation = 0.0_f32;

        for offset in &self.offsets {
            let sx = (x as f32 - self.half_width) / self.scale * frequency + offset[0] * frequency;
            let sy = (y as f32 - self.half_height) / self.scale * frequency + offset[1] * frequency;

            value += self.noise.sample(sx, sy) * amplitude;
            value -= compensation;

            amplitude *= self.persistence;
            frequency *= self.lacunarity;
            compensation = amplitude / 2.0;
        }

        // Overflowing octave parameters can turn the sum into NaN
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(-1.0, 1.0)
        };
        (value + 1.0) / 2.0
    }
}
