use crate::crypto::cipher_traits::{EncryptionTransformation, RoundKeys};
use std::sync::Arc;

/// The 16-round Feistel loop over a permuted 64-bit block.
///
/// Encrypt and decrypt run the exact same rounds; the only difference is
/// the traversal order of the round-key schedule. The schedule itself is
/// never reordered in place.
pub struct FeistelNetwork {
    num_rounds: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        num_rounds: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            num_rounds,
            transformation,
        }
    }

    pub fn encrypt_with_round_keys(&self, block: u64, round_keys: &RoundKeys) -> u64 {
        self.run(block, round_keys[..self.num_rounds].iter().copied())
    }

    pub fn decrypt_with_round_keys(&self, block: u64, round_keys: &RoundKeys) -> u64 {
        self.run(block, round_keys[..self.num_rounds].iter().rev().copied())
    }

    fn run(&self, block: u64, round_keys: impl Iterator<Item = u64>) -> u64 {
        let mut left = (block >> 32) as u32;
        let mut right = block as u32;

        for round_key in round_keys {
            let new_right = left ^ self.transformation.transform(right, round_key);
            left = right;
            right = new_right;
        }

        // The halves swap once more after the last round.
        ((right as u64) << 32) | left as u64
    }
}
