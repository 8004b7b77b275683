//! Nucleotide <-> 2-bit value mapping.
//!
//! `A -> 0`, `T -> 1`, `C -> 2`, `G -> 3`. Matching is case-sensitive:
//! lowercase bases, `N` and every other character are rejected.

use crate::error::NucleoCryptError;

/// Symbols in value order.
const ALPHABET: [char; 4] = ['A', 'T', 'C', 'G'];

/// A DNA base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A,
    T,
    C,
    G,
}

impl Nucleotide {
    /// Parses a base from its uppercase letter.
    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            'A' => Some(Nucleotide::A),
            'T' => Some(Nucleotide::T),
            'C' => Some(Nucleotide::C),
            'G' => Some(Nucleotide::G),
            _ => None,
        }
    }

    /// Builds a base from the low two bits of `value`.
    pub fn from_bits(value: u8) -> Self {
        match value & 0b11 {
            0 => Nucleotide::A,
            1 => Nucleotide::T,
            2 => Nucleotide::C,
            _ => Nucleotide::G,
        }
    }

    /// Returns the 2-bit value of this base.
    pub fn bits(self) -> u8 {
        match self {
            Nucleotide::A => 0,
            Nucleotide::T => 1,
            Nucleotide::C => 2,
            Nucleotide::G => 3,
        }
    }

    /// Returns the uppercase letter of this base.
    pub fn to_char(self) -> char {
        ALPHABET[self.bits() as usize]
    }
}

/// Encodes one symbol to its 2-bit value.
///
/// `position` is only used to report where an invalid symbol was found.
///
/// # Errors
/// Returns [`NucleoCryptError::InvalidSymbol`] for any character outside
/// `{A, T, C, G}`.
pub fn encode(symbol: char, position: usize) -> Result<u8, NucleoCryptError> {
    Nucleotide::from_char(symbol)
        .map(Nucleotide::bits)
        .ok_or(NucleoCryptError::InvalidSymbol { position, symbol })
}

/// Decodes a 2-bit value back to its symbol.
///
/// Only `0..4` is meaningful; callers always pass a value built from two
/// 2-bit operands.
pub fn decode(value: u8) -> char {
    debug_assert!(value < 4, "nucleotide value out of range: {}", value);
    ALPHABET[(value & 0b11) as usize]
}

/// Checks that every character of `sequence` is a valid nucleotide.
///
/// # Errors
/// Returns [`NucleoCryptError::InvalidSymbol`] for the first offending
/// character, with its char index.
pub fn validate(sequence: &str) -> Result<(), NucleoCryptError> {
    for (position, symbol) in sequence.chars().enumerate() {
        encode(symbol, position)?;
    }
    Ok(())
}

/// Returns `true` if `sequence` contains only `A`, `T`, `C` and `G`.
pub fn is_valid_sequence(sequence: &str) -> bool {
    sequence
        .bytes()
        .all(|b| matches!(b, b'A' | b'T' | b'C' | b'G'))
}
