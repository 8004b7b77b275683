//! NucleoCrypt: chaotic keystream obfuscation for nucleotide sequences.
//!
//! NucleoCrypt substitutes every base of a DNA sequence over `{A, T, C, G}`
//! with another base by XOR-ing its 2-bit value with a keystream drawn from
//! two coupled chaotic trajectories. Ciphertext has the same length and
//! alphabet as the plaintext, and decryption is the same operation as
//! encryption under the same [`Key`].
//!
//! This is an obfuscation scheme, not a cryptographically secure cipher: it
//! makes no claim of resistance to known- or chosen-plaintext attacks.
//!
//! # Architecture
//!
//! ```text
//! ChaoticMap               (logistic 3.99 | logistic 3.95 | tent 1.999 | sine 1.0)
//!     ↑ selected per step by the switch trajectory
//! DualTrajectoryKeystream  (x0 data trajectory + x_switch logistic trajectory)
//!     ↓ one 2-bit value per base
//! NucleoCrypt              (key generation, validation, encode ^ keystream -> decode)
//! ```
//!
//! # Examples
//!
//! Encrypt under a fresh key and decrypt with the returned key:
//!
//! ```
//! use nucleocrypt::NucleoCrypt;
//!
//! let mut nc = NucleoCrypt::new();
//! let (ciphertext, key) = nc.encrypt_with_new_key("ATGCGTACGTTAGC").unwrap();
//! assert_eq!(ciphertext.len(), 14);
//!
//! let plaintext = nc.decrypt(&ciphertext, &key).unwrap();
//! assert_eq!(plaintext, "ATGCGTACGTTAGC");
//! ```
//!
//! Keys serialize as a flat mapping for transport alongside the ciphertext:
//!
//! ```
//! use nucleocrypt::Key;
//!
//! let key = Key::new(0.54321, 0.12345).unwrap();
//! let json = serde_json::to_string(&key).unwrap();
//! assert_eq!(json, r#"{"x0":0.54321,"x_switch":0.12345,"r_switch":3.99}"#);
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod key;
pub mod nucleotide_codec;
pub mod random;

mod nucleocrypt;

pub use error::NucleoCryptError;
pub use key::Key;
pub use nucleocrypt::NucleoCrypt;
pub use nucleotide_codec::Nucleotide;
