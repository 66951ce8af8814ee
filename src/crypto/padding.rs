use crate::crypto::error::CipherError;
use crate::crypto::utils::BLOCK_SIZE;

/// Pads `data` up to the next block boundary.
///
/// Every appended byte carries the padding count, and the count is always
/// in `1..=8`: an already-aligned (or empty) input gains a full block of
/// `0x08`, so decryption can always read the count from the final byte.
pub fn apply_padding(mut data: Vec<u8>) -> Vec<u8> {
    let padding = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    data.resize(data.len() + padding, padding as u8);
    data
}

/// Strips the padding appended by [`apply_padding`].
///
/// The trailing byte must name a count in `1..=8`; anything else means
/// the ciphertext (or the key) was wrong. The filler bytes before it are
/// not cross-checked against the count, matching the on-disk format this
/// crate inherits.
pub fn remove_padding(mut data: Vec<u8>) -> Result<Vec<u8>, CipherError> {
    let last = match data.last() {
        Some(&byte) => byte,
        None => return Err(CipherError::InvalidInput(0)),
    };

    let padding = last as usize;
    if padding == 0 || padding > BLOCK_SIZE || padding > data.len() {
        return Err(CipherError::InvalidPadding(last));
    }

    data.truncate(data.len() - padding);
    Ok(data)
}
