//! Frozen regression vectors for the public API.
//!
//! All expected values were captured once from the reference trajectory
//! computation and are pinned here: any change in output means the
//! keystream arithmetic or step order changed, which breaks decryption of
//! every previously produced ciphertext.
//!
//! Coverage:
//! - `random::chaotic_map::ChaoticMap`
//! - `random::keystream::DualTrajectoryKeystream`
//! - `nucleotide_codec`
//! - `Key` transport shape
//! - `NucleoCrypt` (end-to-end)

use nucleocrypt::random::chaotic_map::ChaoticMap;
use nucleocrypt::random::keystream::DualTrajectoryKeystream;
use nucleocrypt::{Key, NucleoCrypt, NucleoCryptError};

const REFERENCE_X0: f64 = 0.54321;
const REFERENCE_X_SWITCH: f64 = 0.12345;

fn reference_key() -> Key {
    Key::new(REFERENCE_X0, REFERENCE_X_SWITCH).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Golden vector
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn golden_vector_atgc() {
    let nc = NucleoCrypt::new();
    let key = reference_key();
    assert_eq!(key.switch_rate, 3.99);
    assert_eq!(nc.encrypt("ATGC", &key).unwrap(), "GTGG");
    assert_eq!(nc.decrypt("GTGG", &key).unwrap(), "ATGC");
}

#[test]
fn golden_vector_homopolymer_32() {
    let nc = NucleoCrypt::new();
    let ciphertext = nc.encrypt(&"A".repeat(32), &reference_key()).unwrap();
    assert_eq!(ciphertext, "GAATGAACGACGTGCGAATGTGCGACGCGTGT");
}

#[test]
fn golden_vector_repeated_motif() {
    let nc = NucleoCrypt::new();
    let ciphertext = nc.encrypt("ATGCATGCATGCATGC", &reference_key()).unwrap();
    assert_eq!(ciphertext, "GTGGGTGAGTTTTCTT");
}

// ═══════════════════════════════════════════════════════════════════════
// Keystream snapshots
// ═══════════════════════════════════════════════════════════════════════

/// Frozen first 32 keystream values for the reference key.
#[test]
fn keystream_reference_first_32() {
    let expected: [u8; 32] = [
        3, 0, 0, 1, 3, 0, 0, 2, 3, 0, 2, 3, 1, 3, 2, 3, 0, 0, 1, 3, 1, 3, 2, 3, 0, 2, 3, 2, 3, 1,
        3, 1,
    ];
    let mut ks = DualTrajectoryKeystream::new(&reference_key());
    for (i, &exp) in expected.iter().enumerate() {
        assert_eq!(ks.next_value(), exp, "keystream[{}] mismatch", i);
    }
}

/// Frozen map selection sequence for the reference key.
#[test]
fn keystream_reference_map_schedule() {
    let expected: [usize; 32] = [
        0, 1, 3, 0, 1, 3, 2, 3, 0, 0, 1, 3, 0, 1, 3, 0, 0, 0, 2, 3, 2, 3, 1, 3, 2, 3, 2, 3, 2, 3,
        1, 3,
    ];
    let mut ks = DualTrajectoryKeystream::new(&reference_key());
    for (i, &exp) in expected.iter().enumerate() {
        assert_eq!(ks.active_map().index(), exp, "map[{}] mismatch", i);
        ks.next_value();
    }
}

/// The keystream is the ciphertext of an all-`A` plaintext.
#[test]
fn keystream_matches_all_a_ciphertext() {
    let nc = NucleoCrypt::new();
    let key = Key::new(0.1, 0.9).unwrap();
    let ciphertext = nc.encrypt(&"A".repeat(500), &key).unwrap();
    let values: Vec<u8> = DualTrajectoryKeystream::new(&key).take(500).collect();
    let expected: String = values
        .iter()
        .map(|&v| nucleocrypt::nucleotide_codec::decode(v))
        .collect();
    assert_eq!(ciphertext, expected);
}

#[test]
fn keystream_state_after_first_step() {
    let key = reference_key();
    let mut ks = DualTrajectoryKeystream::new(&key);
    assert_eq!(ks.state(), (REFERENCE_X0, REFERENCE_X_SWITCH));
    ks.next_value();
    let (x0, x_switch) = ks.state();
    assert_eq!(x0, 3.99 * REFERENCE_X0 * (1.0 - REFERENCE_X0));
    assert_eq!(x_switch, 3.99 * REFERENCE_X_SWITCH * (1.0 - REFERENCE_X_SWITCH));
}

// ═══════════════════════════════════════════════════════════════════════
// ChaoticMap
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn chaotic_map_fixed_order() {
    assert_eq!(
        ChaoticMap::ALL,
        [
            ChaoticMap::LogisticHigh,
            ChaoticMap::LogisticLow,
            ChaoticMap::Tent,
            ChaoticMap::Sine
        ]
    );
}

#[test]
fn chaotic_map_formulas() {
    let x = 0.3;
    assert_eq!(ChaoticMap::from_index(0).apply(x), 3.99 * x * (1.0 - x));
    assert_eq!(ChaoticMap::from_index(1).apply(x), 3.95 * x * (1.0 - x));
    assert_eq!(ChaoticMap::from_index(2).apply(x), 1.999 * x);
    assert_eq!(
        ChaoticMap::from_index(3).apply(x),
        (std::f64::consts::PI * x).sin()
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Key transport
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn key_serializes_as_flat_mapping() {
    let json = serde_json::to_value(reference_key()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "x0": 0.54321, "x_switch": 0.12345, "r_switch": 3.99 })
    );
}

#[test]
fn key_json_roundtrip_preserves_every_bit() {
    let mut nc = NucleoCrypt::new();
    for _ in 0..100 {
        let key = nc.generate_key().unwrap();
        let json = serde_json::to_string(&key).unwrap();
        let restored: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.x0_seed.to_bits(), key.x0_seed.to_bits());
        assert_eq!(restored.x_switch_seed.to_bits(), key.x_switch_seed.to_bits());
        assert_eq!(restored.switch_rate.to_bits(), key.switch_rate.to_bits());
    }
}

#[test]
fn key_missing_rate_defaults() {
    let key: Key = serde_json::from_str(r#"{"x0":0.5,"x_switch":0.25}"#).unwrap();
    assert_eq!(key.switch_rate, 3.99);
    assert!(key.validate().is_ok());
}

#[test]
fn key_deserialization_does_not_validate() {
    let key: Key = serde_json::from_str(r#"{"x0":1.5,"x_switch":0.25,"r_switch":3.99}"#).unwrap();
    let nc = NucleoCrypt::new();
    assert_eq!(
        nc.decrypt("ACGT", &key),
        Err(NucleoCryptError::InvalidSeed {
            field: "x0",
            value: 1.5
        })
    );
}

#[test]
fn decrypt_with_transported_key() {
    let mut nc = NucleoCrypt::new();
    let (ciphertext, key) = nc.encrypt_with_new_key("GATTACAGATTACA").unwrap();
    let wire = serde_json::to_string(&key).unwrap();

    let receiver = NucleoCrypt::new();
    let key: Key = serde_json::from_str(&wire).unwrap();
    assert_eq!(receiver.decrypt(&ciphertext, &key).unwrap(), "GATTACAGATTACA");
}

// ═══════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn error_lowercase_not_normalized() {
    let nc = NucleoCrypt::new();
    assert_eq!(
        nc.encrypt("ATGCa", &reference_key()),
        Err(NucleoCryptError::InvalidSymbol {
            position: 4,
            symbol: 'a'
        })
    );
}

#[test]
fn error_whitespace_rejected() {
    let nc = NucleoCrypt::new();
    assert_eq!(
        nc.encrypt("ATGC\n", &reference_key()),
        Err(NucleoCryptError::InvalidSymbol {
            position: 4,
            symbol: '\n'
        })
    );
}

#[test]
fn error_display_through_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(NucleoCryptError::InvalidSwitchRate(1.0));
    assert_eq!(err.to_string(), "Switch rate 1 is outside (1, 4]");
}
