/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

extern crate core as aimarket_core;
use aimarket_core::input::*;

#[test]
fn test_port_in_range() {
    let port = port_in_range("8080").unwrap();
    assert_eq!(port, 8080);

    let port = port_in_range("65535").unwrap();
    assert_eq!(port, 65535);

    let port = port_in_range("65536").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("0").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("not-a-port").unwrap_err();
    assert_eq!(port, "`not-a-port` is not a port number");
}

#[test]
fn test_greater_than_zero() {
    let num = greater_than_zero::<u32>("1").unwrap();
    assert_eq!(num, 1);

    let num = greater_than_zero::<u64>("30").unwrap();
    assert_eq!(num, 30);

    let num = greater_than_zero::<usize>("0").unwrap_err();
    assert_eq!(num, "`0` is not larger than 0");

    let num = greater_than_zero::<i64>("-5").unwrap_err();
    assert_eq!(num, "`-5` is not larger than 0");

    let num = greater_than_zero::<i64>("five").unwrap_err();
    assert_eq!(num, "`five` is not a valid number");
}

#[test]
fn test_check_username() {
    assert!(check_username("alice").is_ok());
    assert!(check_username("alice-2").is_ok());
    assert!(check_username("a1").is_ok());

    let err = check_username("").unwrap_err();
    assert_eq!(err.to_string(), "Username cannot be empty");

    let err = check_username(&"a".repeat(33)).unwrap_err();
    assert_eq!(err.to_string(), "Username cannot exceed 32 characters");

    let err = check_username("Alice").unwrap_err();
    assert_eq!(err.to_string(), "Username must be lowercase");

    let err = check_username("alice_smith").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Username can only contain letters, numbers, and dashes"
    );

    let err = check_username("-alice").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Username can only start and end with letters or numbers"
    );

    let err = check_username("alice-").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Username can only start and end with letters or numbers"
    );
}

#[test]
fn test_check_display_name() {
    assert!(check_display_name("Alice Smith").is_ok());
    assert!(check_display_name("Dr. Alice Smith-Jones").is_ok());

    let err = check_display_name("").unwrap_err();
    assert_eq!(err.to_string(), "Name cannot be empty");

    let err = check_display_name("   ").unwrap_err();
    assert_eq!(err.to_string(), "Name cannot be empty");

    let err = check_display_name(&"a".repeat(65)).unwrap_err();
    assert_eq!(err.to_string(), "Name cannot exceed 64 characters");

    let err = check_display_name("Alice\nSmith").unwrap_err();
    assert_eq!(err.to_string(), "Name cannot contain control characters");
}

#[test]
fn test_validate_password_valid() {
    assert!(validate_password("Str0ng!Pw").is_ok());
    assert!(validate_password("C0mplex#Secret").is_ok());
}

#[test]
fn test_validate_password_length() {
    let err = validate_password("Sh0rt!").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Password must be at least 8 characters long"
    );

    let long_password = format!("Aa1!{}", "xy".repeat(63));
    let err = validate_password(&long_password).unwrap_err();
    assert_eq!(err.to_string(), "Password cannot exceed 128 characters");
}

#[test]
fn test_validate_password_character_classes() {
    let err = validate_password("n0caps!here").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Password must contain at least one uppercase letter"
    );

    let err = validate_password("N0LOWER!HERE").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Password must contain at least one lowercase letter"
    );

    let err = validate_password("NoDigits!Here").unwrap_err();
    assert_eq!(err.to_string(), "Password must contain at least one digit");

    let err = validate_password("N0SpecialHere").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Password must contain at least one special character (!@#$%^&*()_+-=[]{}|;:,.<>?)"
    );
}

#[test]
fn test_validate_password_weak_patterns() {
    let err = validate_password("MyPassword1!").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Password cannot contain the word 'password'"
    );

    let err = validate_password("Xk9!abcdQ").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Password cannot contain sequential characters (e.g., 'abcd', '1234')"
    );

    let err = validate_password("Xk9!aaaQw").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Password cannot contain repeated characters (e.g., 'aaa', '111')"
    );
}
