// src/core/session.rs
use crate::cli::clipboard::{ClipboardError, ClipboardSink};
use crate::generators::{ConfigurationError, PasswordGenerator};
use crate::models::{CharacterClass, GeneratedPassword, PasswordGenerationOptions, StrengthLabel};

/// Current generator state: the options and the password they last produced.
///
/// Every change to the options regenerates the password. When the options
/// cannot produce a password the session holds none until they are fixed.
#[derive(Debug)]
pub struct GeneratorSession {
    options: PasswordGenerationOptions,
    generator: PasswordGenerator,
    current: Option<GeneratedPassword>,
}

impl GeneratorSession {
    pub fn new(options: PasswordGenerationOptions) -> Self {
        let mut session = Self {
            options,
            generator: PasswordGenerator::new(),
            current: None,
        };
        // an unusable starting configuration just leaves the session empty
        let _ = session.regenerate();
        session
    }

    pub fn options(&self) -> &PasswordGenerationOptions {
        &self.options
    }

    pub fn password(&self) -> Option<&str> {
        self.current.as_ref().map(|g| g.password.as_str())
    }

    pub fn strength(&self) -> Option<StrengthLabel> {
        self.current.as_ref().map(|g| g.strength)
    }

    pub fn regenerate(&mut self) -> Result<&GeneratedPassword, ConfigurationError> {
        self.current = None;
        let generated = self.generator.generate_password(&self.options)?;
        Ok(self.current.insert(generated))
    }

    pub fn set_length(&mut self, length: usize) -> Result<&GeneratedPassword, ConfigurationError> {
        self.options.length = length;
        self.regenerate()
    }

    pub fn toggle(&mut self, class: CharacterClass) -> Result<&GeneratedPassword, ConfigurationError> {
        self.options.toggle(class);
        log::debug!(
            "Toggled {} ({})",
            class.label(),
            if self.options.is_enabled(class) { "on" } else { "off" }
        );
        self.regenerate()
    }

    /// Copy the current password. Failure leaves the session untouched.
    pub fn copy_to<C: ClipboardSink + ?Sized>(&self, clipboard: &mut C) -> Result<(), ClipboardError> {
        let password = self.password().ok_or(ClipboardError::NothingToCopy)?;
        clipboard.set_text(password).map_err(|e| {
            log::warn!("Clipboard write failed: {}", e);
            e
        })
    }
}
