//! Diamond-Square midpoint displacement.
//!
//! The grid side is `h = 2^n + 1`. Corners are seeded from `[range_min,
//! range_max]`, then every sub-square of side `s` (from `h - 1` halving down
//! to `1`) gets its center from the square step and its four edge midpoints
//! from diamond steps. Displacements are drawn from `[-z, z]` with
//! `z = 2 * (s / 2) * asperity / h`, so detail shrinks with the step size.
//!
//! The last pass, `s = 1`, has no midpoint: its "center" is the top-left
//! corner itself, which is replaced by the mean of its 2x2 block, and `z` is
//! `0`. It still draws one value per square and per diamond.
//!
//! A rectangular grid is two square tiles side by side sharing the middle
//! column; see [`wrap`] for how its borders wrap.
//!
//! The random stream is consumed in a fixed order: step size descending,
//! then `x` ascending, then `y` ascending, square step before its four
//! diamonds. Changing that order changes every seed's output.

pub mod wrap;

use heightfield_utils::random::{NetRandom, Random};

use crate::config::DiamondSquareParams;
use crate::error::GenerationError;
use crate::field::NoiseField;
use wrap::{Direction, WrapLayout};

/// Result of [`generate_diamond_square`]: the heightmap and its extremes.
///
/// Values are not normalized; displacements can push them outside the seed
/// range. `min` and `max` are the exact smallest and largest cell values.
#[derive(Debug, Clone, PartialEq)]
pub struct DiamondSquareField {
    /// The generated heightmap, `width x height`.
    pub field: NoiseField,
    /// Smallest value in `field`.
    pub min: f32,
    /// Largest value in `field`.
    pub max: f32,
}

impl DiamondSquareField {
    /// Remap the heightmap to `[0, 1]` using its extremes.
    #[must_use]
    pub fn normalized(self) -> NoiseField {
        self.field.normalized(self.min, self.max)
    }
}

/// Generate a Diamond-Square heightmap.
///
/// `range_min > range_max` is corrected by swapping the bounds. Degree `0`
/// yields a `2 x 2` grid (`3 x 2` when rectangular) holding only seeded
/// values; no subdivision pass runs.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(degree = params.degree_of_two, rectangular = params.rectangular)
)]
pub fn generate_diamond_square(
    params: &DiamondSquareParams,
) -> Result<DiamondSquareField, GenerationError> {
    params.validate()?;
    let (width, height) = params.dimensions()?;

    if params.range_min > params.range_max {
        log::debug!(
            "Diamond-Square range [{}, {}] is inverted, swapping bounds",
            params.range_min,
            params.range_max
        );
    }
    let (range_min, range_max) = params.ordered_range();

    let mut rng = NetRandom::from_seed(params.seed);
    let mut subdivision = Subdivision {
        field: NoiseField::zeroed(width, height)?,
        rng: &mut rng,
        asperity: params.asperity,
        side: height,
    };

    subdivision.seed_corners(params.rectangular, range_min, range_max);
    if params.degree_of_two > 0 {
        subdivision.subdivide();
    }

    let field = subdivision.field;
    let (min, max) = field.min_max().unwrap_or_default();
    Ok(DiamondSquareField { field, min, max })
}

/// Generation context threaded through the square and diamond steps.
struct Subdivision<'a, R: Random> {
    field: NoiseField,
    rng: &'a mut R,
    asperity: f32,
    /// Side of one square tile, `2^n + 1`.
    side: usize,
}

impl<R: Random> Subdivision<'_, R> {
    /// Seed the tile corners, plus the shared top and bottom cells of the
    /// middle column for rectangular grids.
    fn seed_corners(&mut self, rectangular: bool, range_min: f32, range_max: f32) {
        let h = self.side;
        let w = self.field.width();

        let mut points = Vec::with_capacity(6);
        if rectangular {
            points.extend([(h - 1, h - 1), (h - 1, 0)]);
        }
        points.extend([(0, 0), (0, h - 1), (w - 1, h - 1), (w - 1, 0)]);

        let span = f64::from(range_max - range_min);
        for (x, y) in points {
            let value = (self.rng.next_f64() * span + f64::from(range_min)) as f32;
            self.field.set(x, y, value);
        }
    }

    fn subdivide(&mut self) {
        let h = self.side;
        let w = self.field.width();

        let mut step = h - 1;
        while step >= 1 {
            let half = step / 2;
            let z = self.displacement_bound(half);

            for x in (0..w - 1).step_by(step) {
                let layout = WrapLayout {
                    width: w,
                    height: h,
                    right_half: x >= h - step,
                };

                for y in (0..h - 1).step_by(step) {
                    self.square(x, y, step, z);
                    self.diamond(x, y + half, half, z, layout);
                    self.diamond(x + step, y + step - half, half, z, layout);
                    self.diamond(x + step - half, y + step, half, z, layout);
                    self.diamond(x + half, y, half, z, layout);
                }
            }

            log::trace!("Diamond-Square finished step {step}");
            step /= 2;
        }
    }

    /// `z = 2 * half * asperity / h`; zero on the final pass.
    fn displacement_bound(&self, half: usize) -> f32 {
        (half * 2) as f32 * self.asperity / self.side as f32
    }

    /// Uniform draw from `[-z, z)`.
    fn displacement(&mut self, z: f32) -> f32 {
        (self.rng.next_f64() * f64::from(z - (-z)) + f64::from(-z)) as f32
    }

    /// Center of the sub-square with top-left corner `(x, y)`.
    fn square(&mut self, x: usize, y: usize, step: usize, z: f32) {
        let half = step / 2;
        let a = self.field[(x, y)];
        let b = self.field[(x, y + step)];
        let c = self.field[(x + step, y)];
        let d = self.field[(x + step, y + step)];

        let value = (a + b + c + d) / 4.0 + self.displacement(z);
        self.field.set(x + half, y + half, value);
    }

    /// Diamond midpoint at `(x, y)` from its neighbors `half` cells away.
    fn diamond(&mut self, x: usize, y: usize, half: usize, z: f32, layout: WrapLayout) {
        let up = self.field[(x, layout.wrap_index(y, half, Direction::Up))];
        let left = self.field[(layout.wrap_index(x, half, Direction::Left), y)];
        let down = self.field[(x, layout.wrap_index(y, half, Direction::Down))];
        let right = self.field[(layout.wrap_index(x, half, Direction::Right), y)];

        let value = (up + left + down + right) / 4.0 + self.displacement(z);
        self.field.set(x, y, value);
    }
}
