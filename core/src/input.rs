/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::fmt;

use super::consts::*;

/// Error type for user-supplied input that failed validation. The message is
/// safe to return to the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    message: String,
}

impl InputError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for InputError {}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn check_username(s: &str) -> Result<(), InputError> {
    if s.is_empty() {
        return Err(InputError::new("Username cannot be empty"));
    }

    if s.len() > 32 {
        return Err(InputError::new("Username cannot exceed 32 characters"));
    }

    if s != s.to_lowercase() {
        return Err(InputError::new("Username must be lowercase"));
    }

    if s.contains(|c: char| !c.is_ascii_alphanumeric() && c != '-') {
        return Err(InputError::new(
            "Username can only contain letters, numbers, and dashes",
        ));
    }

    if s.starts_with('-') || s.ends_with('-') {
        return Err(InputError::new(
            "Username can only start and end with letters or numbers",
        ));
    }

    Ok(())
}

pub fn check_display_name(s: &str) -> Result<(), InputError> {
    if s.trim().is_empty() {
        return Err(InputError::new("Name cannot be empty"));
    }

    if s.len() > 64 {
        return Err(InputError::new("Name cannot exceed 64 characters"));
    }

    if s.contains(|c: char| c.is_control()) {
        return Err(InputError::new("Name cannot contain control characters"));
    }

    Ok(())
}

pub fn load_secret(f: &str) -> String {
    let s = std::fs::read_to_string(f).unwrap_or_default();
    s.trim().replace(char::from(25), "")
}

/// Validates password strength requirements
pub fn validate_password(password: &str) -> Result<(), InputError> {
    if password.len() < 8 {
        return Err(InputError::new(
            "Password must be at least 8 characters long",
        ));
    }

    if password.len() > 128 {
        return Err(InputError::new("Password cannot exceed 128 characters"));
    }

    // Check for common patterns first
    if password.to_lowercase().contains("password") {
        return Err(InputError::new(
            "Password cannot contain the word 'password'",
        ));
    }

    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password
        .chars()
        .any(|c| "!@#$%^&*()_+-=[]{}|;:,.<>?".contains(c));

    if !has_uppercase {
        return Err(InputError::new(
            "Password must contain at least one uppercase letter",
        ));
    }

    if !has_lowercase {
        return Err(InputError::new(
            "Password must contain at least one lowercase letter",
        ));
    }

    if !has_digit {
        return Err(InputError::new("Password must contain at least one digit"));
    }

    if !has_special {
        return Err(InputError::new(
            "Password must contain at least one special character (!@#$%^&*()_+-=[]{}|;:,.<>?)",
        ));
    }

    // Check for common weak sequences (4+ characters)
    if password.chars().collect::<Vec<_>>().windows(4).any(|w| {
        w[0] as u8 + 1 == w[1] as u8 && w[1] as u8 + 1 == w[2] as u8 && w[2] as u8 + 1 == w[3] as u8
    }) {
        return Err(InputError::new(
            "Password cannot contain sequential characters (e.g., 'abcd', '1234')",
        ));
    }

    // Check for repeated characters (3+ in a row)
    if password
        .chars()
        .collect::<Vec<_>>()
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
    {
        return Err(InputError::new(
            "Password cannot contain repeated characters (e.g., 'aaa', '111')",
        ));
    }

    Ok(())
}
