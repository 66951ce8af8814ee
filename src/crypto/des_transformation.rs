use crate::crypto::cipher_traits::EncryptionTransformation;
use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::utils::permute_bits;

/// The DES round function: expansion, subkey mix, substitution,
/// round permutation.
pub struct DesTransformation;

/// Runs the eight S-boxes over a 48-bit value, most significant 6-bit
/// group first. For a group with bits `b5..b0`, the row selector is the
/// outer pair `(b5, b0)` and the column selector the middle four bits
/// `b4..b1`.
pub fn substitute(input: u64) -> u32 {
    let mut output = 0u32;
    for (i, s_box) in S_BOXES.iter().enumerate() {
        let group = (input >> (6 * (7 - i))) & 0x3F;
        let row = (((group >> 4) & 0b10) | (group & 1)) as usize;
        let column = ((group >> 1) & 0xF) as usize;
        output = (output << 4) | s_box[row][column] as u32;
    }
    output
}

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, half: u32, round_key: u64) -> u32 {
        let expanded = permute_bits(half as u64, 32, &E);
        let mixed = expanded ^ round_key;
        let substituted = substitute(mixed);
        permute_bits(substituted as u64, 32, &P) as u32
    }
}
