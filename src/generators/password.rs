// src/generators/password.rs
use rand::distributions::Uniform;
use rand::Rng;

use super::{strength, ConfigurationError, Result};
use crate::models::{
    CharacterClass, GeneratedPassword, PasswordGenerationOptions, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};

#[derive(Debug, Default)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a password and label it in one step.
    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<GeneratedPassword> {
        let password = generate(options)?;
        let strength = strength::classify(&password, options);
        log::debug!(
            "Generated {} character password ({})",
            password.chars().count(),
            strength
        );
        Ok(GeneratedPassword { password, strength })
    }
}

// Concatenate the enabled character sets in fixed order
pub fn build_alphabet(options: &PasswordGenerationOptions) -> Vec<u8> {
    let mut chars = Vec::new();
    for class in CharacterClass::ALL {
        if options.is_enabled(class) {
            chars.extend(class.charset());
        }
    }
    chars
}

/// Generate a password using the thread-local RNG.
pub fn generate(options: &PasswordGenerationOptions) -> Result<String> {
    generate_with(&mut rand::thread_rng(), options)
}

/// Generate `options.length` characters, each drawn uniformly and
/// independently from the alphabet built from `options`.
///
/// The length is not range checked here; any value (including zero) is
/// accepted. Fails when no character class is enabled.
pub fn generate_with<R: Rng>(
    rng: &mut R,
    options: &PasswordGenerationOptions,
) -> Result<String> {
    let chars = build_alphabet(options);
    if chars.is_empty() {
        log::warn!("Password generation requested with every character class disabled");
        return Err(ConfigurationError::NoCharacterClassSelected);
    }

    let dist = Uniform::from(0..chars.len());
    let password = (0..options.length)
        .map(|_| chars[rng.sample(dist)] as char)
        .collect();

    Ok(password)
}

impl PasswordGenerationOptions {
    /// Check the options against the bounds offered to users.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&self.length) {
            return Err(ConfigurationError::LengthOutOfRange {
                length: self.length,
                min: MIN_PASSWORD_LENGTH,
                max: MAX_PASSWORD_LENGTH,
            });
        }

        if !self.has_any_class() {
            return Err(ConfigurationError::NoCharacterClassSelected);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn options(length: usize, upper: bool, lower: bool, numbers: bool, symbols: bool) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
        }
    }

    #[test]
    fn test_alphabet_order_follows_class_order() {
        let all = build_alphabet(&PasswordGenerationOptions::default());
        assert_eq!(
            all,
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*".to_vec()
        );

        let digits_and_symbols = build_alphabet(&options(8, false, false, true, true));
        assert_eq!(digits_and_symbols, b"0123456789!@#$%^&*".to_vec());
    }

    #[test]
    fn test_every_class_combination_respects_length_and_alphabet() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for mask in 1u8..16 {
            let opts = options(0, mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, mask & 8 != 0);
            let alphabet = build_alphabet(&opts);

            for length in [0, 1, 8, 17, 30, 64] {
                let opts = PasswordGenerationOptions { length, ..opts };
                let password = generate_with(&mut rng, &opts).unwrap();

                assert_eq!(password.chars().count(), length);
                assert!(password.bytes().all(|b| alphabet.contains(&b)), "{password}");
            }
        }
    }

    #[test]
    fn test_no_class_selected_is_an_error() {
        let opts = options(12, false, false, false, false);
        assert_eq!(generate(&opts), Err(ConfigurationError::NoCharacterClassSelected));

        // zero length still needs an alphabet
        let opts = options(0, false, false, false, false);
        assert_eq!(generate(&opts), Err(ConfigurationError::NoCharacterClassSelected));
    }

    #[test]
    fn test_repeated_generation_keeps_length() {
        let opts = PasswordGenerationOptions { length: 20, ..Default::default() };
        let passwords: Vec<String> = (0..50).map(|_| generate(&opts).unwrap()).collect();

        assert!(passwords.iter().all(|p| p.len() == 20));
        // 50 draws over a 70-character alphabet at length 20 will not all collide
        assert!(passwords.iter().any(|p| p != &passwords[0]));
    }

    #[test]
    fn test_same_seed_same_password() {
        let opts = PasswordGenerationOptions::default();
        let a = generate_with(&mut ChaCha8Rng::seed_from_u64(42), &opts).unwrap();
        let b = generate_with(&mut ChaCha8Rng::seed_from_u64(42), &opts).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_class_draws_cover_the_set() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let opts = options(2000, false, false, true, false);
        let password = generate_with(&mut rng, &opts).unwrap();

        for digit in b'0'..=b'9' {
            assert!(password.as_bytes().contains(&digit), "digit {} never drawn", digit as char);
        }
    }

    #[test]
    fn test_generate_password_labels_result() {
        let generator = PasswordGenerator::new();
        let opts = options(6, true, true, false, false);
        let generated = generator.generate_password(&opts).unwrap();

        assert_eq!(generated.password.len(), 6);
        assert_eq!(generated.strength, crate::models::StrengthLabel::Weak);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(PasswordGenerationOptions::default().validate().is_ok());
        assert!(options(8, true, false, false, false).validate().is_ok());
        assert!(options(30, false, false, false, true).validate().is_ok());

        assert_eq!(
            options(7, true, true, true, true).validate(),
            Err(ConfigurationError::LengthOutOfRange { length: 7, min: 8, max: 30 })
        );
        assert!(matches!(
            options(31, true, true, true, true).validate(),
            Err(ConfigurationError::LengthOutOfRange { length: 31, .. })
        ));
        assert_eq!(
            options(12, false, false, false, false).validate(),
            Err(ConfigurationError::NoCharacterClassSelected)
        );
    }
}
