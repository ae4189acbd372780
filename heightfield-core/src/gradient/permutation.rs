//! Permutation table and lattice gradient lookup.

use heightfield_utils::random::{NetRandom, Random};

use crate::error::GenerationError;

/// Number of distinct values produced by [`lattice_hash`].
///
/// Tables are never shorter than this, so every hash indexes a filled byte.
pub const HASH_SPACE: usize = 1024;

const HASH_MASK: i64 = HASH_SPACE as i64 - 1;

/// Unit gradient vectors selected by the low two bits of a table entry.
pub(crate) const GRADIENTS: [[f32; 2]; 4] = [[1.0, 0.0], [-1.0, 0.0], [0.0, 1.0], [0.0, -1.0]];

/// Hash an integer lattice point into `[0, HASH_SPACE)`.
///
/// `(x * 1836311903) ^ (y * 2971215073 + 4807526976)` with wrapping 64-bit
/// arithmetic, masked to 10 bits. Only the low bits survive the mask, so the
/// result does not depend on how intermediate overflow is handled.
#[inline]
#[must_use]
pub fn lattice_hash(x: i32, y: i32) -> usize {
    let hx = i64::from(x).wrapping_mul(1_836_311_903);
    let hy = i64::from(y)
        .wrapping_mul(2_971_215_073)
        .wrapping_add(4_807_526_976);
    ((hx ^ hy) & HASH_MASK) as usize
}

/// Random bytes used as the hash lookup source for gradient selection.
#[derive(Debug, Clone)]
pub struct PermutationTable {
    bytes: Vec<u8>,
}

impl PermutationTable {
    /// Fill a table of `max(len, HASH_SPACE)` bytes from a seeded stream.
    ///
    /// For `len >= HASH_SPACE` the table holds exactly the first `len` bytes
    /// of the seed's stream; smaller requests are padded up so that every
    /// hash stays in bounds.
    pub fn new(seed: i32, len: usize) -> Result<Self, GenerationError> {
        let len = len.max(HASH_SPACE);
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|_| GenerationError::Allocation { cells: len })?;
        bytes.resize(len, 0);

        let mut rng = NetRandom::from_seed(seed);
        rng.fill_bytes(&mut bytes);

        Ok(Self { bytes })
    }

    /// Number of bytes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; tables hold at least [`HASH_SPACE`] bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Gradient vector for the lattice point `(x, y)`.
    #[inline]
    #[must_use]
    pub fn gradient(&self, x: i32, y: i32) -> [f32; 2] {
        let entry = self.bytes[lattice_hash(x, y)];
        GRADIENTS[usize::from(entry & 3)]
    }
}
