// src/generators/strength.rs
use crate::models::{PasswordGenerationOptions, StrengthLabel, MIN_PASSWORD_LENGTH};

// Anything outside [A-Za-z0-9_]
fn is_non_word(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '_')
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Length in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane counts twice.
pub fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Label a password as Strong or Weak.
///
/// Upper and lowercase letters are always required. Digits and symbols are
/// only required when the matching option is enabled, so the same password
/// can be Strong under one configuration and Weak under another.
pub fn classify(password: &str, options: &PasswordGenerationOptions) -> StrengthLabel {
    if password.chars().any(is_line_terminator) {
        return StrengthLabel::Weak;
    }

    let long_enough = password_length(password) >= MIN_PASSWORD_LENGTH;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = !options.include_numbers || password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = !options.include_symbols || password.chars().any(is_non_word);

    if long_enough && has_upper && has_lower && has_digit && has_symbol {
        StrengthLabel::Strong
    } else {
        StrengthLabel::Weak
    }
}
