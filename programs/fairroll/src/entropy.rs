//! Outcome derivation from a verified house signature.
//!
//! Ed25519 is deterministic, so for a fixed house key the signature over a
//! bet's canonical message is fixed before the bet is even placed. Fairness
//! therefore rests on message uniqueness (the player-chosen seed is part of
//! the bet PDA and of the signed message), not on unpredictability of the
//! signature bytes themselves.

use solana_keccak_hasher as keccak;

/// Rolls live in `[0, OUTCOME_RANGE)`; a bet wins when `roll < threshold`.
pub const OUTCOME_RANGE: u128 = 100;

/// Reduces 64 verified signature bytes to a roll in `[0, 100)`.
///
/// The signature is keccak-hashed and the two 16-byte halves of the digest
/// are folded together so every signature byte influences the roll.
pub fn roll_from_signature(sig: &[u8; 64]) -> u8 {
    let digest = keccak::hash(sig).to_bytes();

    let mut half = [0u8; 16];
    half.copy_from_slice(&digest[0..16]);
    let lower = u128::from_le_bytes(half);
    half.copy_from_slice(&digest[16..32]);
    let upper = u128::from_le_bytes(half);

    lower.wrapping_add(upper).wrapping_rem(OUTCOME_RANGE) as u8
}

pub fn is_win(roll: u8, threshold: u8) -> bool {
    roll < threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Fixed signature patterns pin the exact keccak fold so the outcome
    // function cannot drift silently between releases.
    #[rstest]
    #[case([0x00u8; 64], 76)]
    #[case([0xffu8; 64], 34)]
    #[case([0x42u8; 64], 83)]
    #[case([0x07u8; 64], 51)]
    fn roll_known_vectors(#[case] sig: [u8; 64], #[case] expected: u8) {
        assert_eq!(roll_from_signature(&sig), expected);
    }

    #[test]
    fn roll_of_ascending_bytes() {
        let mut sig = [0u8; 64];
        for (i, b) in sig.iter_mut().enumerate() {
            *b = i as u8;
        }
        assert_eq!(roll_from_signature(&sig), 48);
    }

    #[test]
    fn roll_is_deterministic() {
        let sig = [0xabu8; 64];
        assert_eq!(roll_from_signature(&sig), roll_from_signature(&sig));
    }

    #[test]
    fn roll_stays_in_range() {
        for i in 0..=255u8 {
            let sig = [i; 64];
            assert!((roll_from_signature(&sig) as u128) < OUTCOME_RANGE);
        }
    }

    #[test]
    fn single_byte_flip_changes_roll_somewhere() {
        // Not guaranteed for any individual flip (rolls collide mod 100),
        // but across 64 positions at least one must differ.
        let base = [0x11u8; 64];
        let base_roll = roll_from_signature(&base);
        let changed = (0..64).any(|i| {
            let mut sig = base;
            sig[i] ^= 0x01;
            roll_from_signature(&sig) != base_roll
        });
        assert!(changed);
    }

    #[rstest]
    #[case(0, 1, true)] // lowest roll beats the tightest threshold
    #[case(0, 50, true)]
    #[case(49, 50, true)]
    #[case(50, 50, false)] // roll equal to threshold loses
    #[case(99, 99, false)]
    #[case(98, 99, true)]
    fn win_boundary(#[case] roll: u8, #[case] threshold: u8, #[case] won: bool) {
        assert_eq!(is_win(roll, threshold), won);
    }
}
