//! NucleoCrypt: chaotic keystream cipher over nucleotide sequences.
//!
//! Generates keys from a [`SeedSource`] and transforms sequences by XOR-ing
//! each base's 2-bit value with one value of a fresh
//! [`DualTrajectoryKeystream`]. Encryption and decryption are the same
//! transform.

use tracing::{debug, warn};

use crate::error::NucleoCryptError;
use crate::key::{Key, DEFAULT_SWITCH_RATE};
use crate::nucleotide_codec::{decode, encode};
use crate::random::keystream::DualTrajectoryKeystream;
use crate::random::seed_source::{seed_from_bits, OsSeedSource, SeedSource};

/// Length-preserving nucleotide cipher.
///
/// # Architecture
///
/// Every [`encrypt`](Self::encrypt) and [`decrypt`](Self::decrypt) call
/// validates the key, builds its own keystream and walks the input once.
/// No state is shared between calls, so a single engine can serve
/// concurrent callers through `&self`. Only key generation needs `&mut self`,
/// because it draws from the seed source.
pub struct NucleoCrypt<S: SeedSource = OsSeedSource> {
    source: S,
}

impl Default for NucleoCrypt<OsSeedSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl NucleoCrypt<OsSeedSource> {
    /// Creates an engine that generates keys from the operating system CSPRNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use nucleocrypt::NucleoCrypt;
    ///
    /// let mut nc = NucleoCrypt::new();
    /// let key = nc.generate_key().unwrap();
    /// let ciphertext = nc.encrypt("GATTACA", &key).unwrap();
    /// assert_eq!(nc.decrypt(&ciphertext, &key).unwrap(), "GATTACA");
    /// ```
    pub fn new() -> Self {
        Self::with_seed_source(OsSeedSource::new())
    }
}

impl<S: SeedSource> NucleoCrypt<S> {
    /// Creates an engine drawing key seeds from `source`.
    pub fn with_seed_source(source: S) -> Self {
        NucleoCrypt { source }
    }

    /// Generates a fresh key.
    ///
    /// Draws two independent 53-bit integers and scales each into `[0, 1)`.
    /// The switch rate is always [`DEFAULT_SWITCH_RATE`].
    ///
    /// # Errors
    /// Returns [`NucleoCryptError::EntropyUnavailable`] if the seed source
    /// fails.
    pub fn generate_key(&mut self) -> Result<Key, NucleoCryptError> {
        let x0_seed = seed_from_bits(self.source.next_seed_bits()?);
        let x_switch_seed = seed_from_bits(self.source.next_seed_bits()?);
        debug!("generated cipher key");
        Ok(Key {
            x0_seed,
            x_switch_seed,
            switch_rate: DEFAULT_SWITCH_RATE,
        })
    }

    /// Encrypts `plaintext` under a newly generated key.
    ///
    /// The returned key must travel with the ciphertext; nothing else can
    /// decrypt it.
    ///
    /// # Errors
    /// Returns [`NucleoCryptError::InvalidSymbol`] for a character outside
    /// `{A, T, C, G}` and [`NucleoCryptError::EntropyUnavailable`] if no key
    /// could be generated.
    pub fn encrypt_with_new_key(
        &mut self,
        plaintext: &str,
    ) -> Result<(String, Key), NucleoCryptError> {
        let key = self.generate_key()?;
        let ciphertext = self.encrypt(plaintext, &key)?;
        Ok((ciphertext, key))
    }

    /// Encrypts a nucleotide sequence.
    ///
    /// The output has the same length as the input and uses the same
    /// alphabet.
    ///
    /// # Errors
    /// Returns an invalid-key error if `key` fails [`Key::validate`], or
    /// [`NucleoCryptError::InvalidSymbol`] with the char position of the first
    /// character outside `{A, T, C, G}`. No partial output is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use nucleocrypt::{Key, NucleoCrypt};
    ///
    /// let nc = NucleoCrypt::new();
    /// let key = Key::new(0.54321, 0.12345).unwrap();
    /// assert_eq!(nc.encrypt("ATGC", &key).unwrap(), "GTGG");
    /// ```
    pub fn encrypt(&self, plaintext: &str, key: &Key) -> Result<String, NucleoCryptError> {
        debug!(len = plaintext.len(), "encrypting sequence");
        Self::transform(plaintext, key)
    }

    /// Decrypts a nucleotide sequence produced by [`encrypt`](Self::encrypt)
    /// under the same key.
    ///
    /// # Errors
    /// Same as [`encrypt`](Self::encrypt).
    ///
    /// # Examples
    ///
    /// ```
    /// use nucleocrypt::{Key, NucleoCrypt};
    ///
    /// let nc = NucleoCrypt::new();
    /// let key = Key::new(0.54321, 0.12345).unwrap();
    /// assert_eq!(nc.decrypt("GTGG", &key).unwrap(), "ATGC");
    /// ```
    pub fn decrypt(&self, ciphertext: &str, key: &Key) -> Result<String, NucleoCryptError> {
        debug!(len = ciphertext.len(), "decrypting sequence");
        Self::transform(ciphertext, key)
    }

    /// XOR-combines each base with the keystream of `key`.
    fn transform(input: &str, key: &Key) -> Result<String, NucleoCryptError> {
        if let Err(err) = key.validate() {
            warn!(error = %err, "rejected cipher key");
            return Err(err);
        }

        let mut keystream = DualTrajectoryKeystream::new(key);
        let mut output = String::with_capacity(input.len());
        for (position, symbol) in input.chars().enumerate() {
            let value = match encode(symbol, position) {
                Ok(value) => value,
                Err(err) => {
                    warn!(position, "rejected non-nucleotide symbol");
                    return Err(err);
                }
            };
            output.push(decode(value ^ keystream.next_value()));
        }
        Ok(output)
    }
}
