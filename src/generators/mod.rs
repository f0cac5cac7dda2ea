// src/generators/mod.rs
use thiserror::Error;

pub mod password;
pub mod strength;

pub use password::PasswordGenerator;
pub use strength::classify;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no character class selected")]
    NoCharacterClassSelected,

    #[error("password length {length} is outside the allowed range {min}..={max}")]
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
