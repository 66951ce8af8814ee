//! Bit-level helpers shared by the key schedule and the block cipher.

/// Block size of the underlying cipher in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Applies a permutation table to the low `input_width` bits of `input`.
///
/// Table entries are 1-based source positions counted from the most
/// significant bit of the `input_width`-wide value; output bit `i` is
/// read from source position `table[i]`, with bit 0 of the result being
/// the most significant of the `table.len()`-wide output.
///
/// Out-of-range table entries are a bug in the static tables, not a
/// runtime condition.
pub fn permute_bits(input: u64, input_width: usize, table: &[usize]) -> u64 {
    let mut output = 0u64;
    for (i, &pos) in table.iter().enumerate() {
        debug_assert!(pos >= 1 && pos <= input_width, "table entry out of range");
        let bit = (input >> (input_width - pos)) & 1;
        output |= bit << (table.len() - 1 - i);
    }
    output
}

/// Rotates the low `width` bits of `value` left by `amount`.
///
/// The rotation is built from two shifts and a mask; shift amounts never
/// reach the operand width, so no target-specific wraparound behavior is
/// involved.
pub fn rotate_left(value: u64, width: usize, amount: usize) -> u64 {
    debug_assert!(width >= 1 && width < 64);
    let mask = (1u64 << width) - 1;
    let amount = amount % width;
    if amount == 0 {
        return value & mask;
    }
    ((value << amount) | ((value & mask) >> (width - amount))) & mask
}

/// Packs a byte stream into 64-bit blocks, big-endian within each block.
/// The caller guarantees the length is a multiple of [`BLOCK_SIZE`].
pub fn bytes_to_blocks(bytes: &[u8]) -> Vec<u64> {
    debug_assert_eq!(bytes.len() % BLOCK_SIZE, 0);
    bytes
        .chunks_exact(BLOCK_SIZE)
        .map(|chunk| {
            let mut word = [0u8; BLOCK_SIZE];
            word.copy_from_slice(chunk);
            u64::from_be_bytes(word)
        })
        .collect()
}

/// Unpacks 64-bit blocks back into a big-endian byte stream.
pub fn blocks_to_bytes(blocks: &[u64]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(blocks.len() * BLOCK_SIZE);
    for &block in blocks {
        bytes.extend_from_slice(&block.to_be_bytes());
    }
    bytes
}

/// Loads a 7-byte key fragment into a 56-bit key.
///
/// The first fragment byte lands in the least significant key byte,
/// matching the layout of the on-disk key file.
pub fn fragment_to_key(fragment: &[u8]) -> u64 {
    debug_assert_eq!(fragment.len(), 7);
    let mut key = 0u64;
    for (i, &byte) in fragment.iter().enumerate() {
        key |= (byte as u64) << (8 * i);
    }
    key
}
