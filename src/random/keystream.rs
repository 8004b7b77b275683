//! Dual-trajectory chaotic keystream.
//!
//! Two trajectories evolve in lockstep. The switch trajectory always follows
//! the logistic map at the key's switch rate; its current value selects
//! which of the four [`ChaoticMap`]s advances the data trajectory. Each
//! step emits the quadrant of the updated data state as a 2-bit value.
//!
//! The keystream value at position `i` depends only on the key and `i`, so
//! decryption replays the exact trajectory used for encryption.

use super::chaotic_map::{logistic, ChaoticMap, NUM_MAPS};
use crate::key::Key;

/// Maps a state in (approximately) `[0, 1)` to a quadrant index `0..4`.
///
/// Uses a Euclidean remainder so that a state rounded marginally below 0
/// or to exactly 1.0 still lands in range.
#[inline]
fn quadrant(x: f64) -> usize {
    ((x * NUM_MAPS as f64).floor() as i64).rem_euclid(NUM_MAPS as i64) as usize
}

/// Keystream generator owning one `(x0, x_switch)` trajectory pair.
///
/// The generator is not restartable: replaying a keystream means building a
/// new instance from the same [`Key`]. It never runs dry; as an
/// [`Iterator`] it always yields `Some`.
///
/// # Examples
///
/// ```
/// use nucleocrypt::random::keystream::DualTrajectoryKeystream;
/// use nucleocrypt::Key;
///
/// let key = Key::new(0.54321, 0.12345).unwrap();
/// let values: Vec<u8> = DualTrajectoryKeystream::new(&key).take(4).collect();
/// assert_eq!(values, vec![3, 0, 0, 1]);
/// ```
pub struct DualTrajectoryKeystream {
    x0: f64,
    x_switch: f64,
    switch_rate: f64,
}

impl DualTrajectoryKeystream {
    /// Creates a keystream positioned at step 0 of the key's trajectories.
    ///
    /// The key is not validated here; [`NucleoCrypt`](crate::NucleoCrypt)
    /// validates it before constructing the keystream.
    pub fn new(key: &Key) -> Self {
        DualTrajectoryKeystream {
            x0: key.x0_seed,
            x_switch: key.x_switch_seed,
            switch_rate: key.switch_rate,
        }
    }

    /// Returns the map the next step will apply to the data trajectory.
    pub fn active_map(&self) -> ChaoticMap {
        ChaoticMap::from_index(quadrant(self.x_switch))
    }

    /// Returns the current `(x0, x_switch)` state.
    pub fn state(&self) -> (f64, f64) {
        (self.x0, self.x_switch)
    }

    /// Advances both trajectories one step and returns the next value in `0..4`.
    ///
    /// Step order:
    /// 1. Select the map from the pre-update switch state.
    /// 2. Advance the data trajectory with the selected map.
    /// 3. Advance the switch trajectory with the logistic map.
    /// 4. Emit the quadrant of the updated data state.
    pub fn next_value(&mut self) -> u8 {
        let map = self.active_map();
        self.x0 = map.apply(self.x0);
        self.x_switch = logistic(self.x_switch, self.switch_rate);
        quadrant(self.x0) as u8
    }
}

impl Iterator for DualTrajectoryKeystream {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl Drop for DualTrajectoryKeystream {
    /// Clears the trajectory state on drop.
    fn drop(&mut self) {
        self.x0 = 0.0;
        self.x_switch = 0.0;
        self.switch_rate = 0.0;
    }
}
