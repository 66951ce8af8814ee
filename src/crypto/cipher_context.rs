use crate::crypto::cipher_io::{read_all, write_all};
use crate::crypto::cipher_types::{CipherInput, CipherOutput};
use crate::crypto::error::CipherError;
use crate::crypto::key_derivation::KeySet;
use crate::crypto::padding::{apply_padding, remove_padding};
use crate::crypto::triple_des::TripleDes;
use crate::crypto::utils::{blocks_to_bytes, bytes_to_blocks, BLOCK_SIZE};
use std::sync::Arc;

/// Stream-level entry points over the EDE3 cipher: padding, block
/// conversion, and the byte/file plumbing around the block passes.
#[derive(Clone)]
pub struct CipherContext {
    cipher: Arc<TripleDes>,
}

impl CipherContext {
    pub fn new(key_set: &KeySet) -> Self {
        Self {
            cipher: Arc::new(TripleDes::new(key_set)),
        }
    }

    /// Pads and encrypts a byte buffer. The result is always a positive
    /// multiple of the block size and never shorter than the input.
    pub fn encrypt_bytes(&self, plain: &[u8]) -> Vec<u8> {
        log::debug!("encrypting {} plaintext bytes", plain.len());
        let padded = apply_padding(plain.to_vec());
        let mut blocks = bytes_to_blocks(&padded);
        self.cipher.encrypt_blocks(&mut blocks);
        blocks_to_bytes(&blocks)
    }

    /// Decrypts a byte buffer and strips the padding.
    ///
    /// The ciphertext must be a positive multiple of the block size; the
    /// recovered trailing byte must name a valid padding count.
    pub fn decrypt_bytes(&self, cipher: &[u8]) -> Result<Vec<u8>, CipherError> {
        if cipher.is_empty() || cipher.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::InvalidInput(cipher.len()));
        }

        log::debug!("decrypting {} ciphertext bytes", cipher.len());
        let mut blocks = bytes_to_blocks(cipher);
        self.cipher.decrypt_blocks(&mut blocks);
        remove_padding(blocks_to_bytes(&blocks))
    }

    pub async fn encrypt(
        &self,
        input: CipherInput,
        output: &mut CipherOutput,
    ) -> Result<(), CipherError> {
        match (input, output) {
            (CipherInput::Bytes(data), out) => {
                let encrypted = self.encrypt_bytes(&data);
                write_all(out, &encrypted).map_err(CipherError::from)
            }
            (input @ CipherInput::File(_), CipherOutput::File(output_path)) => {
                let this = self.clone();
                let output_path = output_path.clone();
                Self::run_file_task(move || {
                    let data = read_all(&input)?;
                    let encrypted = this.encrypt_bytes(&data);
                    write_all(&mut CipherOutput::File(output_path), &encrypted)?;
                    Ok(())
                })
            }
            (input @ CipherInput::File(_), CipherOutput::Buffer(buf)) => {
                let this = self.clone();
                let result = Self::run_file_task(move || {
                    let data = read_all(&input)?;
                    Ok(this.encrypt_bytes(&data))
                })?;
                **buf = result;
                Ok(())
            }
        }
    }

    pub async fn decrypt(
        &self,
        input: CipherInput,
        output: &mut CipherOutput,
    ) -> Result<(), CipherError> {
        match (input, output) {
            (CipherInput::Bytes(data), out) => {
                let decrypted = self.decrypt_bytes(&data)?;
                write_all(out, &decrypted).map_err(CipherError::from)
            }
            (input @ CipherInput::File(_), CipherOutput::File(output_path)) => {
                let this = self.clone();
                let output_path = output_path.clone();
                Self::run_file_task(move || {
                    let data = read_all(&input)?;
                    let decrypted = this.decrypt_bytes(&data)?;
                    write_all(&mut CipherOutput::File(output_path), &decrypted)?;
                    Ok(())
                })
            }
            (input @ CipherInput::File(_), CipherOutput::Buffer(buf)) => {
                let this = self.clone();
                let result = Self::run_file_task(move || {
                    let data = read_all(&input)?;
                    this.decrypt_bytes(&data)
                })?;
                **buf = result;
                Ok(())
            }
        }
    }

    // Whole files are materialized in memory; the work runs on a
    // blocking thread so the async executor is never pinned.
    fn run_file_task<F, T>(task: F) -> Result<T, CipherError>
    where
        F: FnOnce() -> Result<T, CipherError> + Send + 'static,
        T: Send + 'static,
    {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(tokio::task::spawn_blocking(task))
        })
        .map_err(|e| CipherError::Io(std::io::Error::other(e)))?
    }
}
