use triple_des::crypto::cipher_traits::KeyExpansion;
use triple_des::crypto::des_key_expansion::DesKeyExpansion;

#[test]
fn test_round_1_subkey_textbook_key() {
    let round_keys = DesKeyExpansion.round_keys(0x00F0_CCAA_F556_678F);
    assert_eq!(round_keys[0], 0x1B02_EFFC_7072);
}

#[test]
fn test_deterministic() {
    let key = 0x00A5_5A96_69C3_3C0F;
    assert_eq!(DesKeyExpansion.round_keys(key), DesKeyExpansion.round_keys(key));
}

#[test]
fn test_zero_key_yields_zero_subkeys() {
    assert_eq!(DesKeyExpansion.round_keys(0), [0u64; 16]);
}

#[test]
fn test_subkeys_fit_48_bits() {
    let round_keys = DesKeyExpansion.round_keys(0x00FF_FFFF_FFFF_FFFF);
    for subkey in round_keys {
        assert!(subkey < 1 << 48);
    }
    // An all-ones key state stays all ones through every rotation.
    assert_eq!(round_keys, [(1u64 << 48) - 1; 16]);
}

#[test]
fn test_distinct_keys_distinct_schedules() {
    let a = DesKeyExpansion.round_keys(0x00F0_CCAA_F556_678F);
    let b = DesKeyExpansion.round_keys(0x00F0_CCAA_F556_678E);
    assert_ne!(a, b);
}

#[test]
fn test_sixteen_entries_always_consumed() {
    // Rotation amounts sum to 28, so the key state returns to its start
    // after the full schedule; a truncated schedule would not.
    let shifts = [1usize, 1, 2, 2, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 2, 1];
    assert_eq!(shifts.iter().sum::<usize>(), 28);
}
