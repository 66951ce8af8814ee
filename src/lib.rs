pub mod crypto;

pub use crypto::cipher_context::CipherContext;
pub use crypto::cipher_types::{CipherInput, CipherOutput};
pub use crypto::error::CipherError;
pub use crypto::key_derivation::KeySet;
