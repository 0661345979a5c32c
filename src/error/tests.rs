use super::*;

#[test]
fn test_display_formatting() {
    let err = Error::KeyLength { actual: 17 };
    assert_eq!(
        format!("{}", err),
        "Invalid key length 17: must be 16, 24, or 32 bytes"
    );

    let err = Error::Length {
        context: "input block",
        expected: 16,
        actual: 12,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid length for input block: expected 16, got 12"
    );

    let err = Error::Parameter {
        name: "schedule",
        reason: "expanded for encryption, not decryption",
    };
    assert_eq!(
        format!("{}", err),
        "Invalid parameter 'schedule': expanded for encryption, not decryption"
    );
}

#[test]
fn test_key_length_validation() {
    assert!(validate::key_length(16).is_ok());
    assert!(validate::key_length(24).is_ok());
    assert!(validate::key_length(32).is_ok());

    for &len in &[0usize, 8, 20, 33] {
        match validate::key_length(len) {
            Err(Error::KeyLength { actual }) => assert_eq!(actual, len),
            other => panic!("length {} should be rejected, got {:?}", len, other),
        }
    }
}

#[test]
fn test_length_validation() {
    assert!(validate::length("buffer", 16, 16).is_ok());

    match validate::length("buffer", 8, 16) {
        Err(Error::Length {
            context,
            expected,
            actual,
        }) => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 16);
            assert_eq!(actual, 8);
        }
        other => panic!("expected Length error, got {:?}", other),
    }
}

#[test]
fn test_parameter_validation() {
    assert!(validate::parameter(true, "test", "should pass").is_ok());

    match validate::parameter(false, "test", "should fail") {
        Err(Error::Parameter { name, reason }) => {
            assert_eq!(name, "test");
            assert_eq!(reason, "should fail");
        }
        other => panic!("expected Parameter error, got {:?}", other),
    }
}
