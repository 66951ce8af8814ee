use sha2::{Digest, Sha256};
use triple_des::crypto::error::CipherError;
use triple_des::crypto::key_derivation::{KeySet, KEY_FILE_SIZE};

#[test]
fn test_deterministic() {
    let a = KeySet::derive(b"hunter2");
    let b = KeySet::derive(b"hunter2");
    assert_eq!(a.to_bytes(), b.to_bytes());
    assert_eq!(a.keys(), b.keys());
}

#[test]
fn test_key_file_is_21_bytes() {
    assert_eq!(KEY_FILE_SIZE, 21);
    assert_eq!(KeySet::derive(b"pw").to_bytes().len(), 21);
}

#[test]
fn test_fragment_a_is_password_digest_prefix() {
    let password = b"open sesame";
    let digest = Sha256::digest(password);
    let key_set = KeySet::derive(password);
    assert_eq!(&key_set.to_bytes()[..7], &digest[..7]);
}

#[test]
fn test_fragment_b_follows_xor_rehash_step() {
    let password = b"open sesame";
    let mut digest: [u8; 32] = Sha256::digest(password).into();
    for (byte, &pass_byte) in digest.iter_mut().zip(password.iter()) {
        *byte ^= pass_byte;
    }
    let second: [u8; 32] = Sha256::digest(digest).into();

    let key_set = KeySet::derive(password);
    assert_eq!(&key_set.to_bytes()[7..14], &second[..7]);
}

#[test]
fn test_fragments_differ() {
    let bytes = KeySet::derive(b"some password").to_bytes();
    assert_ne!(&bytes[..7], &bytes[7..14]);
    assert_ne!(&bytes[7..14], &bytes[14..]);
}

#[test]
fn test_distinct_passwords_distinct_keys() {
    assert_ne!(
        KeySet::derive(b"password").to_bytes(),
        KeySet::derive(b"passworc").to_bytes()
    );
}

#[test]
fn test_password_longer_than_digest() {
    // The XOR step clamps at the digest width; derivation must not panic
    // and must stay deterministic.
    let long = [0x61u8; 100];
    assert_eq!(KeySet::derive(&long), KeySet::derive(&long));
}

#[test]
fn test_serialization_roundtrip() {
    let key_set = KeySet::derive(b"roundtrip");
    let parsed = KeySet::from_bytes(&key_set.to_bytes()).unwrap();
    assert_eq!(parsed, key_set);
}

#[test]
fn test_rejects_short_key_material() {
    let result = KeySet::from_bytes(&[0u8; 20]);
    assert!(matches!(
        result,
        Err(CipherError::KeyMaterial { expected: 21, actual: 20 })
    ));
    assert!(KeySet::from_bytes(&[0u8; 22]).is_err());
    assert!(KeySet::from_bytes(&[]).is_err());
}
