// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 30;
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl PasswordGenerationOptions {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        let flag = match class {
            CharacterClass::Uppercase => &mut self.include_uppercase,
            CharacterClass::Lowercase => &mut self.include_lowercase,
            CharacterClass::Numbers => &mut self.include_numbers,
            CharacterClass::Symbols => &mut self.include_symbols,
        };
        *flag = !*flag;
    }

    pub fn has_any_class(&self) -> bool {
        CharacterClass::ALL.iter().any(|class| self.is_enabled(*class))
    }
}

/// A group of characters that can be switched on or off for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Alphabet order: uppercase, lowercase, digits, symbols.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn charset(&self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => b"abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Numbers => b"0123456789",
            CharacterClass::Symbols => b"!@#$%^&*",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase letters",
            CharacterClass::Lowercase => "lowercase letters",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Symbols => "special characters",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    Strong,
    Weak,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Strong => write!(f, "Strong"),
            StrengthLabel::Weak => write!(f, "Weak"),
        }
    }
}

// Result of one generation, as reported to the user
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthLabel,
}
