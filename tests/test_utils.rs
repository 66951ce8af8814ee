use triple_des::crypto::des_transformation::substitute;
use triple_des::crypto::utils::{
    blocks_to_bytes, bytes_to_blocks, fragment_to_key, permute_bits, rotate_left,
};

#[test]
fn test_permute_identity() {
    let table: Vec<usize> = (1..=8).collect();
    assert_eq!(permute_bits(0b1010_0110, 8, &table), 0b1010_0110);
}

#[test]
fn test_permute_reverse() {
    let table: Vec<usize> = (1..=8).rev().collect();
    assert_eq!(permute_bits(0b1000_0010, 8, &table), 0b0100_0001);
}

#[test]
fn test_permute_select_subset() {
    // Picking the two outer bits of a 4-bit value.
    assert_eq!(permute_bits(0b1001, 4, &[1, 4]), 0b11);
    assert_eq!(permute_bits(0b0110, 4, &[1, 4]), 0b00);
}

#[test]
fn test_rotate_left_28() {
    assert_eq!(rotate_left(0x8000000, 28, 1), 0x0000001);
    assert_eq!(rotate_left(0x0000001, 28, 2), 0x0000004);
    assert_eq!(rotate_left(0xABCDEF1, 28, 0), 0xABCDEF1);
    // A full rotation is the identity.
    assert_eq!(rotate_left(0x1234567, 28, 28), 0x1234567);
}

#[test]
fn test_rotate_masks_high_bits() {
    // Bits above the stated width never leak into the result.
    assert_eq!(rotate_left(0xF000_0000_0000_0001, 28, 1), 0x0000002);
}

#[test]
fn test_block_byte_conversion_roundtrip() {
    let bytes: Vec<u8> = (0..24).collect();
    let blocks = bytes_to_blocks(&bytes);
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0], 0x0001_0203_0405_0607);
    assert_eq!(blocks_to_bytes(&blocks), bytes);
}

#[test]
fn test_fragment_little_endian() {
    let fragment = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
    assert_eq!(fragment_to_key(&fragment), 0x0007_0605_0403_0201);
}

#[test]
fn test_substitute_zero_input() {
    // Row 0, column 0 of each box, most significant group first.
    assert_eq!(substitute(0), 0xEFA7_2C4D);
}

#[test]
fn test_substitute_row_selection() {
    // Group bits b5 and b0 select the row; 0b100000 hits row 2 of S1.
    let input = 0b100000u64 << 42;
    assert_eq!(substitute(input) >> 28, 4);
    // 0b000001 hits row 1 of S1.
    let input = 0b000001u64 << 42;
    assert_eq!(substitute(input) >> 28, 0);
}
