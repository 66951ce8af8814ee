use crate::crypto::cipher_traits::{
    CipherAlgorithm, EncryptionTransformation, KeyExpansion, RoundKeys, SymmetricCipher, ROUNDS,
};
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_derivation::FRAGMENT_SIZE;
use crate::crypto::utils::{fragment_to_key, permute_bits};
use std::sync::Arc;

/// One DES instance: initial permutation, 16 Feistel rounds, final
/// permutation, keyed by a 56-bit fragment.
pub struct Des {
    feistel_network: FeistelNetwork,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    round_keys: RoundKeys,
}

impl Des {
    pub fn new(
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        let feistel_network = FeistelNetwork::new(ROUNDS, transformation);

        Des {
            feistel_network,
            key_expansion,
            round_keys: [0u64; ROUNDS],
        }
    }

    /// Standard wiring with the DES key schedule and round function.
    pub fn with_key(key: u64) -> Self {
        let mut des = Des::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation));
        des.set_raw_key(key);
        des
    }

    /// Derives and stores the schedule for a 56-bit key.
    pub fn set_raw_key(&mut self, key: u64) {
        self.round_keys = self.key_expansion.round_keys(key);
    }

    pub fn encrypt_block(&self, block: u64) -> u64 {
        let permuted = permute_bits(block, 64, &IP);
        let result = self
            .feistel_network
            .encrypt_with_round_keys(permuted, &self.round_keys);
        permute_bits(result, 64, &FP)
    }

    pub fn decrypt_block(&self, block: u64) -> u64 {
        let permuted = permute_bits(block, 64, &IP);
        let result = self
            .feistel_network
            .decrypt_with_round_keys(permuted, &self.round_keys);
        permute_bits(result, 64, &FP)
    }
}

impl CipherAlgorithm for Des {
    fn encrypt_block(&self, block: u64) -> u64 {
        Des::encrypt_block(self, block)
    }
    fn decrypt_block(&self, block: u64) -> u64 {
        Des::decrypt_block(self, block)
    }
}

impl SymmetricCipher for Des {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != FRAGMENT_SIZE {
            return Err(CipherError::KeyMaterial {
                expected: FRAGMENT_SIZE,
                actual: key.len(),
            });
        }
        self.set_raw_key(fragment_to_key(key));
        Ok(())
    }
}
