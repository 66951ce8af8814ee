use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("key material must be {expected} bytes, got {actual}")]
    KeyMaterial { expected: usize, actual: usize },

    #[error("ciphertext length {0} is not a positive multiple of the 8-byte block size")]
    InvalidInput(usize),

    #[error("decrypted padding byte {0} is outside 1..=8")]
    InvalidPadding(u8),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
