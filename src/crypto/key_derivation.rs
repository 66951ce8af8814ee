use crate::crypto::error::CipherError;
use crate::crypto::utils::fragment_to_key;
use sha2::{Digest, Sha256};

/// Bytes per stored key fragment.
pub const FRAGMENT_SIZE: usize = 7;

/// Size of a persisted key file: three consecutive fragments, no header.
pub const KEY_FILE_SIZE: usize = 3 * FRAGMENT_SIZE;

/// The three 56-bit key fragments driving the EDE construction, in their
/// (A, B, C) roles.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct KeySet {
    fragments: [[u8; FRAGMENT_SIZE]; 3],
}

impl KeySet {
    /// Derives the key set from a password.
    ///
    /// The sequence is fixed: hash the password, take 7 bytes, XOR the
    /// digest with the password bytes in place, rehash, take 7 bytes,
    /// and once more. This is deliberately the scheme of the original
    /// key files, not a generic KDF.
    pub fn derive(password: &[u8]) -> Self {
        let mut digest: [u8; 32] = Sha256::digest(password).into();
        let mut fragments = [[0u8; FRAGMENT_SIZE]; 3];
        fragments[0].copy_from_slice(&digest[..FRAGMENT_SIZE]);

        for fragment in &mut fragments[1..] {
            for (byte, &pass_byte) in digest.iter_mut().zip(password) {
                *byte ^= pass_byte;
            }
            digest = Sha256::digest(digest).into();
            fragment.copy_from_slice(&digest[..FRAGMENT_SIZE]);
        }

        KeySet { fragments }
    }

    /// Parses the 21-byte key-file layout. A short or oversized slice is
    /// rejected rather than leaving a fragment partially populated.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CipherError> {
        if bytes.len() != KEY_FILE_SIZE {
            return Err(CipherError::KeyMaterial {
                expected: KEY_FILE_SIZE,
                actual: bytes.len(),
            });
        }

        let mut fragments = [[0u8; FRAGMENT_SIZE]; 3];
        for (fragment, chunk) in fragments.iter_mut().zip(bytes.chunks_exact(FRAGMENT_SIZE)) {
            fragment.copy_from_slice(chunk);
        }
        Ok(KeySet { fragments })
    }

    /// Serializes to the 21-byte key-file layout, fragments (A, B, C).
    pub fn to_bytes(&self) -> [u8; KEY_FILE_SIZE] {
        let mut bytes = [0u8; KEY_FILE_SIZE];
        for (chunk, fragment) in bytes.chunks_exact_mut(FRAGMENT_SIZE).zip(&self.fragments) {
            chunk.copy_from_slice(fragment);
        }
        bytes
    }

    /// The three 56-bit keys in (A, B, C) order.
    pub fn keys(&self) -> [u64; 3] {
        [
            fragment_to_key(&self.fragments[0]),
            fragment_to_key(&self.fragments[1]),
            fragment_to_key(&self.fragments[2]),
        ]
    }
}
