//! Symmetric key record shared by the encoder and the decoder.
//!
//! A [`Key`] holds the two trajectory seeds and the growth rate of the
//! switch trajectory. It has no wire format of its own; the serde shape is a
//! flat mapping with the field names `x0`, `x_switch` and `r_switch`, which
//! any transport the caller chooses (JSON, form fields, ...) can carry.

use serde::{Deserialize, Serialize};

use crate::error::NucleoCryptError;

/// Growth rate of the switch trajectory used by every generated key.
pub const DEFAULT_SWITCH_RATE: f64 = 3.99;

/// Lowest growth rate at which the logistic map is chaotic.
pub const CHAOTIC_ONSET_RATE: f64 = 3.56995;

/// Key material for one encrypt/decrypt pair.
///
/// Deserializing a key performs no validation; [`Key::validate`] runs at the
/// start of every cipher operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Key {
    /// Seed of the data trajectory, in `[0, 1)`.
    #[serde(rename = "x0")]
    pub x0_seed: f64,
    /// Seed of the switch trajectory, in `[0, 1)`.
    #[serde(rename = "x_switch")]
    pub x_switch_seed: f64,
    /// Logistic growth rate of the switch trajectory.
    #[serde(rename = "r_switch", default = "default_switch_rate")]
    pub switch_rate: f64,
}

fn default_switch_rate() -> f64 {
    DEFAULT_SWITCH_RATE
}

impl Key {
    /// Creates a validated key with the default switch rate.
    ///
    /// # Errors
    /// Returns [`NucleoCryptError::InvalidSeed`] if either seed is not a
    /// finite value in `[0, 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nucleocrypt::Key;
    ///
    /// let key = Key::new(0.54321, 0.12345).unwrap();
    /// assert_eq!(key.switch_rate, 3.99);
    ///
    /// assert!(Key::new(1.0, 0.5).is_err());
    /// ```
    pub fn new(x0_seed: f64, x_switch_seed: f64) -> Result<Self, NucleoCryptError> {
        Self::with_switch_rate(x0_seed, x_switch_seed, DEFAULT_SWITCH_RATE)
    }

    /// Creates a validated key with an explicit switch rate.
    ///
    /// # Errors
    /// Returns [`NucleoCryptError::InvalidSeed`] for a seed outside `[0, 1)`
    /// and [`NucleoCryptError::InvalidSwitchRate`] for a rate outside `(1, 4]`.
    pub fn with_switch_rate(
        x0_seed: f64,
        x_switch_seed: f64,
        switch_rate: f64,
    ) -> Result<Self, NucleoCryptError> {
        let key = Key {
            x0_seed,
            x_switch_seed,
            switch_rate,
        };
        key.validate()?;
        Ok(key)
    }

    /// Checks the key domain.
    ///
    /// Seeds must be finite and lie in `[0, 1)`. The switch rate must lie in
    /// `(1, 4]`: at or below 1 the switch trajectory collapses to a fixed
    /// point, and above 4 the logistic map leaves the unit interval.
    ///
    /// # Errors
    /// See [`Key::with_switch_rate`].
    pub fn validate(&self) -> Result<(), NucleoCryptError> {
        check_seed("x0", self.x0_seed)?;
        check_seed("x_switch", self.x_switch_seed)?;
        if !(self.switch_rate > 1.0 && self.switch_rate <= 4.0) {
            return Err(NucleoCryptError::InvalidSwitchRate(self.switch_rate));
        }
        Ok(())
    }

    /// Returns `true` if the switch rate lies in the chaotic regime of the
    /// logistic map.
    pub fn is_chaotic(&self) -> bool {
        self.switch_rate > CHAOTIC_ONSET_RATE && self.switch_rate <= 4.0
    }
}

fn check_seed(field: &'static str, value: f64) -> Result<(), NucleoCryptError> {
    // NaN fails both comparisons.
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(NucleoCryptError::InvalidSeed { field, value })
    }
}
