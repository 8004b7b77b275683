//! Chaotic keystream generation and key seeding.
//!
//! Provides the switched chaotic map set, the dual-trajectory keystream
//! built on it, and the secure seed sources used for key generation.

pub mod chaotic_map;
pub mod keystream;
pub mod seed_source;
