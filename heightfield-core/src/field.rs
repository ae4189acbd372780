//! Dense scalar grid returned by the generators.

use std::ops::Index;

use crate::error::GenerationError;

/// A row-major grid of `f32` elevation values.
///
/// Cell `(x, y)` lives at `y * width + x`. Fields are produced fresh by each
/// generation call and owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl NoiseField {
    /// Allocate a zero-filled field.
    ///
    /// Fails with [`GenerationError::TooLarge`] when the cell count overflows
    /// and [`GenerationError::Allocation`] when the buffer cannot be reserved.
    pub fn zeroed(width: usize, height: usize) -> Result<Self, GenerationError> {
        let cells = width
            .checked_mul(height)
            .ok_or(GenerationError::TooLarge { width, height })?;

        let mut values = Vec::new();
        values
            .try_reserve_exact(cells)
            .map_err(|_| GenerationError::Allocation { cells })?;
        values.resize(cells, 0.0);

        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// Returns `None` if `values.len() != width * height`.
    #[must_use]
    pub fn from_values(width: usize, height: usize, values: Vec<f32>) -> Option<Self> {
        (width.checked_mul(height) == Some(values.len())).then_some(Self {
            width,
            height,
            values,
        })
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the field has no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.values[y * self.width + x])
        } else {
            None
        }
    }

    /// All values in row-major order.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Consume the field and return its row-major buffer.
    #[must_use]
    pub fn into_values(self) -> Vec<f32> {
        self.values
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f32]> {
        // `chunks_exact` panics on a zero chunk size; an empty field has no rows.
        self.values.chunks_exact(self.width.max(1))
    }

    /// Smallest and largest value, or `None` for an empty field.
    #[must_use]
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let first = *self.values.first()?;
        Some(
            self.values
                .iter()
                .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
        )
    }

    /// Linearly remap every value from `[min, max]` to `[0, 1]`.
    ///
    /// A degenerate range (`max <= min`) maps every cell to `0`.
    #[must_use]
    pub fn normalized(mut self, min: f32, max: f32) -> Self {
        let range = max - min;
        if range > 0.0 {
            for v in &mut self.values {
                *v = ((*v - min) / range).clamp(0.0, 1.0);
            }
        } else {
            self.values.fill(0.0);
        }
        self
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, value: f32) {
        self.values[y * self.width + x] = value;
    }
}

impl Index<(usize, usize)> for NoiseField {
    type Output = f32;

    /// Panics if `(x, y)` is outside the grid.
    fn index(&self, (x, y): (usize, usize)) -> &f32 {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} field",
            self.width,
            self.height
        );
        &self.values[y * self.width + x]
    }
}
