use crate::crypto::cipher_traits::{KeyExpansion, RoundKeys, ROUNDS};
use crate::crypto::des_tables::PC2;
use crate::crypto::utils::{permute_bits, rotate_left};

/// Left-rotation amounts per round for the C and D key halves.
const SHIFT_SCHEDULE: [usize; ROUNDS] = [
    1, 1, 2, 2, 2, 2, 2, 2,
    1, 2, 2, 2, 2, 2, 2, 1,
];

const HALF_WIDTH: usize = 28;
const HALF_MASK: u64 = (1 << HALF_WIDTH) - 1;

/// Round-key schedule for the 56-bit effective key.
///
/// The key fragments come out of the key-derivation hash, so there is no
/// PC-1 parity-drop step: the 7 stored bytes are the key itself, split
/// directly into the 28-bit C and D halves.
pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    fn round_keys(&self, key: u64) -> RoundKeys {
        let mut c = (key >> HALF_WIDTH) & HALF_MASK;
        let mut d = key & HALF_MASK;

        let mut round_keys = [0u64; ROUNDS];
        for (round_key, &shift) in round_keys.iter_mut().zip(&SHIFT_SCHEDULE) {
            // Rotations accumulate round over round.
            c = rotate_left(c, HALF_WIDTH, shift);
            d = rotate_left(d, HALF_WIDTH, shift);

            let state = (c << HALF_WIDTH) | d;
            *round_key = permute_bits(state, 56, &PC2);
        }

        round_keys
    }
}
