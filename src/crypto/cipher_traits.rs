use crate::crypto::error::CipherError;

/// Number of Feistel rounds in the block cipher.
pub const ROUNDS: usize = 16;

/// Ordered 16-entry round-key schedule, one 48-bit subkey per round.
pub type RoundKeys = [u64; ROUNDS];

pub trait CipherAlgorithm {
    fn encrypt_block(&self, block: u64) -> u64;
    fn decrypt_block(&self, block: u64) -> u64;
}

pub trait SymmetricCipher: CipherAlgorithm {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;
}

/// Derives the full round-key schedule from a 56-bit key.
pub trait KeyExpansion {
    fn round_keys(&self, key: u64) -> RoundKeys;
}

/// The keyed round transform applied to one 32-bit half per round.
pub trait EncryptionTransformation {
    fn transform(&self, half: u32, round_key: u64) -> u32;
}
