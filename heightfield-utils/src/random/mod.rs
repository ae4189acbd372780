//! Seeded random sources.
//!
//! Generators consume randomness through the [`Random`] trait so the exact
//! draw order stays visible at the call site. [`NetRandom`] is the only
//! implementation; its stream is what the golden fixtures were recorded with.

pub mod net_random;

pub use net_random::NetRandom;

/// A deterministic source of pseudo-random values.
///
/// Every method advances the stream. Two sources created from the same seed
/// and driven through the same sequence of calls yield identical values.
pub trait Random {
    /// Next non-negative integer in `[0, i32::MAX)`.
    fn next_i32(&mut self) -> i32;

    /// Next float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Next integer in `[min, max)`. Returns `min` when `max <= min`.
    fn next_i32_range(&mut self, min: i32, max: i32) -> i32;

    /// Fills `buf` with random bytes, one draw per byte.
    fn fill_bytes(&mut self, buf: &mut [u8]);
}
