use passkeep_core::constant_time::{equals_bytes, equals_chars};
use passkeep_core::{
    shred, PasskeepError, Passphrase, PolicyConfig, Rejection, ScryptCost, SecretBuffer,
};

const FAST: ScryptCost = ScryptCost {
    cpu_cost: 16,
    memory_cost: 8,
    parallelism: 1,
    key_length: 32,
};

fn buffer(text: &str) -> SecretBuffer {
    SecretBuffer::from(text)
}

#[test]
fn test_register_then_login_round_trip() {
    let checks = PolicyConfig::default().min_element_checks;
    let stored = Passphrase::confirm_for_user(
        buffer("Blue-Kettle-42"),
        buffer("Blue-Kettle-42"),
        checks,
        "alice",
    )
    .expect("valid passphrase should be accepted");

    let salt = passkeep_core::generate_salt(64).expect("salt");
    let pepper = [0x5Au8; 32];
    let stored_hash = stored.hash(&salt, &pepper, &FAST).expect("hash");

    let good = Passphrase::attempt(buffer("Blue-Kettle-42"));
    assert!(good.equals_with_min_checks(&stored, checks).unwrap());
    let good_hash = good.hash(&salt, &pepper, &FAST).expect("hash");
    assert!(equals_bytes(stored_hash.as_bytes(), good_hash.as_bytes(), 64));

    let bad = Passphrase::attempt(buffer("blue-kettle-42"));
    assert!(!bad.equals_with_min_checks(&stored, checks).unwrap());
    let bad_hash = bad.hash(&salt, &pepper, &FAST).expect("hash");
    assert!(!equals_bytes(stored_hash.as_bytes(), bad_hash.as_bytes(), 64));
}

#[test]
fn test_confirm_equals_independent_attempt() {
    for text in ["aBCdef123", "你好你好你好你好你好", "Zz9Zz9Zz9Zz9"] {
        let confirmed = Passphrase::confirm(buffer(text), buffer(text), 256).unwrap();
        let attempt = Passphrase::attempt(buffer(text));
        assert!(confirmed.equals_with_min_checks(&attempt, 256).unwrap());
        assert!(confirmed.equals(&attempt).unwrap());
    }
}

#[test]
fn test_international_passphrases_compare_equal() {
    let first = Passphrase::confirm(
        buffer("你好你好你好你好你好"),
        buffer("你好你好你好你好你好"),
        256,
    )
    .unwrap();
    let second = Passphrase::confirm(
        buffer("你好你好你好你好你好"),
        buffer("你好你好你好你好你好"),
        256,
    )
    .unwrap();
    assert!(first.equals(&second).unwrap());
}

#[test]
fn test_rejections_are_user_facing() {
    let mismatch = Passphrase::confirm(buffer("aBCdef123"), buffer("123456"), 256).unwrap_err();
    assert!(matches!(mismatch, PasskeepError::ConfirmationMismatch));
    assert!(mismatch.is_user_facing());

    let simple = Passphrase::create(buffer("abcdef")).unwrap_err();
    assert!(matches!(
        simple,
        PasskeepError::InvalidPassphrase(Rejection::TooShort)
    ));
    assert!(simple.is_user_facing());
}

#[test]
fn test_closed_passphrase_rejects_everything_but_close() {
    let mut stored = Passphrase::confirm(buffer("aBCdef123"), buffer("aBCdef123"), 256).unwrap();
    let attempt = Passphrase::attempt(buffer("aBCdef123"));
    stored.close();

    assert!(matches!(
        attempt.equals(&stored),
        Err(PasskeepError::PassphraseShredded)
    ));
    assert!(matches!(
        stored.hash(&[1u8; 64], &[2u8; 32], &FAST),
        Err(PasskeepError::PassphraseShredded)
    ));
    stored.close();
}

#[test]
fn test_hash_validation_order() {
    let passphrase = Passphrase::attempt(buffer("aBCdef123"));
    assert!(matches!(
        passphrase.hash(&[0u8; 4], &[0u8; 4], &ScryptCost::new(0, 0, 0, 0)),
        Err(PasskeepError::SaltTooShort { .. })
    ));
    assert!(matches!(
        passphrase.hash(&[0u8; 9], &[0u8; 4], &ScryptCost::new(0, 0, 0, 0)),
        Err(PasskeepError::PepperTooShort { .. })
    ));
    assert!(matches!(
        passphrase.hash(&[0u8; 9], &[0u8; 32], &ScryptCost::new(0, 0, 0, 0)),
        Err(PasskeepError::InvalidParameter(_))
    ));
}

#[test]
fn test_equality_property_over_lengths_and_floors() {
    let samples = ["", "a", "ab", "abc", "abd", "abcd", "ABCD", "你好"];
    for x in samples {
        for y in samples {
            let xs: Vec<char> = x.chars().collect();
            let ys: Vec<char> = y.chars().collect();
            for k in [0, 1, 3, 64] {
                assert_eq!(equals_chars(&xs, &ys, k), x == y, "{:?} vs {:?} k={}", x, y, k);
                assert_eq!(
                    equals_bytes(x.as_bytes(), y.as_bytes(), k),
                    x == y,
                    "{:?} vs {:?} k={}",
                    x,
                    y,
                    k
                );
            }
        }
    }
}

#[test]
fn test_shredding_preserves_length() {
    let mut chars = vec!['A'; 512];
    shred(&mut chars);
    assert_eq!(chars.len(), 512);
    assert!(chars.iter().any(|&c| c != 'A'));

    let mut bytes = vec![b'A'; 512];
    shred(&mut bytes);
    assert_eq!(bytes.len(), 512);
    assert!(bytes.iter().any(|&b| b != b'A'));
}
