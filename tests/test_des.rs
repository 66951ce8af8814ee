use rand::{Rng, SeedableRng};
use triple_des::crypto::cipher_traits::SymmetricCipher;
use triple_des::crypto::des::Des;

#[test]
fn test_zero_key_zero_plaintext_vector() {
    let des = Des::with_key(0);
    assert_eq!(des.encrypt_block(0), 0x8CA64DE9C1B123A7);
}

#[test]
fn test_textbook_vector() {
    // 0x00F0CCAAF556678F is the 56-bit key state of the classic
    // 0x133457799BBCDFF1 worked example.
    let des = Des::with_key(0x00F0_CCAA_F556_678F);
    let ciphertext = des.encrypt_block(0x0123_4567_89AB_CDEF);
    assert_eq!(ciphertext, 0x85E8_1354_0F0A_B405);
    assert_eq!(des.decrypt_block(ciphertext), 0x0123_4567_89AB_CDEF);
}

#[test]
fn test_block_roundtrip_random() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xDE5);

    for _ in 0..64 {
        let key = rng.random::<u64>() & 0x00FF_FFFF_FFFF_FFFF;
        let block = rng.random::<u64>();
        let des = Des::with_key(key);
        assert_eq!(des.decrypt_block(des.encrypt_block(block)), block);
    }
}

#[test]
fn test_encrypt_changes_block() {
    let des = Des::with_key(0x00F0_CCAA_F556_678F);
    let block = 0x1122_3344_5566_7788;
    assert_ne!(des.encrypt_block(block), block);
}

#[test]
fn test_set_key_rejects_wrong_length() {
    let mut des = Des::with_key(0);
    assert!(des.set_key(&[0u8; 8]).is_err());
    assert!(des.set_key(&[0u8; 6]).is_err());
    assert!(des.set_key(&[0u8; 7]).is_ok());
}

#[test]
fn test_set_key_matches_raw_key() {
    // The first fragment byte is the least significant key byte.
    let fragment = hex_literal::hex!("8F 67 56 F5 AA CC F0");
    let mut from_fragment = Des::with_key(0);
    from_fragment.set_key(&fragment).unwrap();

    let from_raw = Des::with_key(0x00F0_CCAA_F556_678F);
    let block = 0x0123_4567_89AB_CDEF;
    assert_eq!(from_fragment.encrypt_block(block), from_raw.encrypt_block(block));
}
