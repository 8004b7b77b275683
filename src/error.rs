//! Error types for the nucleocrypt library.

use std::fmt;

/// Errors produced by the nucleocrypt library.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NucleoCryptError {
    /// A character outside `{A, T, C, G}` was found at the given char position.
    InvalidSymbol {
        /// Zero-based character index in the input sequence.
        position: usize,
        /// The offending character.
        symbol: char,
    },
    /// A trajectory seed is not a finite value in `[0, 1)`.
    InvalidSeed {
        /// Name of the key field holding the seed.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The switch growth rate is outside `(1, 4]`.
    InvalidSwitchRate(f64),
    /// The operating system random source could not produce a seed.
    EntropyUnavailable,
}

impl NucleoCryptError {
    /// Returns `true` for the errors raised by key validation.
    pub fn is_key_error(&self) -> bool {
        matches!(
            self,
            NucleoCryptError::InvalidSeed { .. } | NucleoCryptError::InvalidSwitchRate(_)
        )
    }
}

impl fmt::Display for NucleoCryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NucleoCryptError::InvalidSymbol { position, symbol } => {
                write!(
                    f,
                    "Invalid nucleotide {:?} at position {}, expected one of A, T, C, G",
                    symbol, position
                )
            }
            NucleoCryptError::InvalidSeed { field, value } => {
                write!(f, "Key seed {} = {} is outside [0, 1)", field, value)
            }
            NucleoCryptError::InvalidSwitchRate(rate) => {
                write!(f, "Switch rate {} is outside (1, 4]", rate)
            }
            NucleoCryptError::EntropyUnavailable => {
                write!(f, "Secure random source is unavailable")
            }
        }
    }
}

impl std::error::Error for NucleoCryptError {}
