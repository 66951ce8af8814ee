use crate::crypto::cipher_traits::CipherAlgorithm;
use crate::crypto::des::Des;
use crate::crypto::key_derivation::KeySet;
use rayon::prelude::*;

/// Fan out across blocks only once a pass is worth the threading
/// overhead (512Ki blocks = 4MiB of data).
const PARALLEL_BLOCK_THRESHOLD: usize = 512 * 1024;

/// Three-key Encrypt-Decrypt-Encrypt composition of [`Des`].
///
/// Every block is handled independently; a whole pass with one stage
/// completes over the full sequence before the next stage begins, so the
/// output is identical whether a pass runs sequentially or in parallel.
pub struct TripleDes {
    key_a: Des,
    key_b: Des,
    key_c: Des,
}

enum Pass {
    Encrypt,
    Decrypt,
}

impl TripleDes {
    pub fn new(key_set: &KeySet) -> Self {
        let [a, b, c] = key_set.keys();
        TripleDes {
            key_a: Des::with_key(a),
            key_b: Des::with_key(b),
            key_c: Des::with_key(c),
        }
    }

    /// Encrypts a block sequence in place: encrypt with A, decrypt with
    /// B, encrypt with C, pass by pass.
    pub fn encrypt_blocks(&self, blocks: &mut [u64]) {
        Self::run_pass(&self.key_a, Pass::Encrypt, blocks);
        Self::run_pass(&self.key_b, Pass::Decrypt, blocks);
        Self::run_pass(&self.key_c, Pass::Encrypt, blocks);
    }

    /// Decrypts a block sequence in place, mirroring [`encrypt_blocks`]:
    /// decrypt with C, encrypt with B, decrypt with A.
    ///
    /// [`encrypt_blocks`]: TripleDes::encrypt_blocks
    pub fn decrypt_blocks(&self, blocks: &mut [u64]) {
        Self::run_pass(&self.key_c, Pass::Decrypt, blocks);
        Self::run_pass(&self.key_b, Pass::Encrypt, blocks);
        Self::run_pass(&self.key_a, Pass::Decrypt, blocks);
    }

    fn run_pass(stage: &Des, pass: Pass, blocks: &mut [u64]) {
        let apply = |block: &mut u64| {
            *block = match pass {
                Pass::Encrypt => stage.encrypt_block(*block),
                Pass::Decrypt => stage.decrypt_block(*block),
            };
        };

        if blocks.len() >= PARALLEL_BLOCK_THRESHOLD {
            blocks.par_iter_mut().for_each(apply);
        } else {
            blocks.iter_mut().for_each(apply);
        }
    }
}

impl CipherAlgorithm for TripleDes {
    fn encrypt_block(&self, block: u64) -> u64 {
        let block = self.key_a.encrypt_block(block);
        let block = self.key_b.decrypt_block(block);
        self.key_c.encrypt_block(block)
    }

    fn decrypt_block(&self, block: u64) -> u64 {
        let block = self.key_c.decrypt_block(block);
        let block = self.key_b.encrypt_block(block);
        self.key_a.decrypt_block(block)
    }
}
