//! Seed sources for key generation.
//!
//! Key generation draws each trajectory seed as a 53-bit unsigned integer
//! divided by `2^53`, the widest uniform grid a double can represent exactly
//! in `[0, 1)`. Production keys take those integers from the operating
//! system CSPRNG through [`OsSeedSource`].

#[cfg(not(target_arch = "wasm32"))]
use getrandom::getrandom;

use crate::error::NucleoCryptError;

/// Width of one seed draw in bits (the double-precision mantissa width).
pub const SEED_BITS: u32 = 53;

/// Mask selecting the low [`SEED_BITS`] bits of a draw.
const SEED_MASK: u64 = (1u64 << SEED_BITS) - 1;

/// `2^53` as a double.
const SEED_SCALE: f64 = (1u64 << SEED_BITS) as f64;

/// Trait for sources of uniform 53-bit seed draws.
///
/// Implementations must return values in `[0, 2^53)`. Only
/// [`OsSeedSource`] is suitable for real keys; other implementations exist
/// to make key generation reproducible in tests.
pub trait SeedSource {
    /// Returns the next draw in `[0, 2^53)`.
    fn next_seed_bits(&mut self) -> Result<u64, NucleoCryptError>;
}

/// Converts a 53-bit draw into a seed in `[0, 1)`.
///
/// Bits above [`SEED_BITS`] are discarded. The division is exact, so every
/// draw maps to a distinct double.
pub fn seed_from_bits(bits: u64) -> f64 {
    (bits & SEED_MASK) as f64 / SEED_SCALE
}

/// Seed source backed by the operating system random number generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsSeedSource;

impl OsSeedSource {
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SeedSource for OsSeedSource {
    fn next_seed_bits(&mut self) -> Result<u64, NucleoCryptError> {
        let mut buf = [0u8; 8];
        getrandom(&mut buf).map_err(|err| {
            tracing::warn!(error = %err, "os random source rejected request");
            NucleoCryptError::EntropyUnavailable
        })?;
        Ok(u64::from_le_bytes(buf) & SEED_MASK)
    }
}

#[cfg(target_arch = "wasm32")]
impl SeedSource for OsSeedSource {
    fn next_seed_bits(&mut self) -> Result<u64, NucleoCryptError> {
        Err(NucleoCryptError::EntropyUnavailable)
    }
}

impl<S: SeedSource + ?Sized> SeedSource for &mut S {
    fn next_seed_bits(&mut self) -> Result<u64, NucleoCryptError> {
        (**self).next_seed_bits()
    }
}
