//! The four one-dimensional chaotic maps driving the data trajectory.
//!
//! Each map is evaluated with plain IEEE-754 double arithmetic, left to
//! right, with no fused multiply-add. The encoder and the decoder must agree
//! bit for bit on every evaluation or the trajectories diverge after a few
//! dozen steps.

use std::f64::consts::PI;

/// Number of maps in the switched set.
pub const NUM_MAPS: usize = 4;

/// Growth rate of the first logistic map.
pub const LOGISTIC_HIGH_RATE: f64 = 3.99;

/// Growth rate of the second logistic map.
pub const LOGISTIC_LOW_RATE: f64 = 3.95;

/// Slope of the tent map.
pub const TENT_SLOPE: f64 = 1.999;

/// Amplitude of the sine map.
pub const SINE_AMPLITUDE: f64 = 1.0;

/// Logistic map `r * x * (1 - x)`.
#[inline]
pub fn logistic(x: f64, r: f64) -> f64 {
    r * x * (1.0 - x)
}

/// Tent map `mu * min(x, 1 - x)`.
#[inline]
pub fn tent(x: f64, mu: f64) -> f64 {
    mu * x.min(1.0 - x)
}

/// Sine map `a * sin(pi * x)`.
#[inline]
pub fn sine(x: f64, a: f64) -> f64 {
    a * (PI * x).sin()
}

/// One of the four fixed chaotic maps, ordered by selection index.
///
/// The keystream picks a map by numeric index (`0..4`), so the declaration
/// order below is part of the cipher definition and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChaoticMap {
    /// Index 0: logistic map with `r = 3.99`.
    LogisticHigh,
    /// Index 1: logistic map with `r = 3.95`.
    LogisticLow,
    /// Index 2: tent map with `mu = 1.999`.
    Tent,
    /// Index 3: sine map with `a = 1.0`.
    Sine,
}

impl ChaoticMap {
    /// All maps in selection order.
    pub const ALL: [ChaoticMap; NUM_MAPS] = [
        ChaoticMap::LogisticHigh,
        ChaoticMap::LogisticLow,
        ChaoticMap::Tent,
        ChaoticMap::Sine,
    ];

    /// Returns the map at `index % 4`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % NUM_MAPS]
    }

    /// Returns the selection index of this map.
    pub fn index(self) -> usize {
        match self {
            ChaoticMap::LogisticHigh => 0,
            ChaoticMap::LogisticLow => 1,
            ChaoticMap::Tent => 2,
            ChaoticMap::Sine => 3,
        }
    }

    /// Evaluates the map at `x`.
    ///
    /// Inputs are expected in `[0, 1)`. The tent and sine maps may return
    /// values marginally outside that range through rounding; callers only
    /// consume the result through a floor and a modulo.
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            ChaoticMap::LogisticHigh => logistic(x, LOGISTIC_HIGH_RATE),
            ChaoticMap::LogisticLow => logistic(x, LOGISTIC_LOW_RATE),
            ChaoticMap::Tent => tent(x, TENT_SLOPE),
            ChaoticMap::Sine => sine(x, SINE_AMPLITUDE),
        }
    }
}
