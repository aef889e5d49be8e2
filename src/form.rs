use rand::Rng;
use zeroize::Zeroizing;

use crate::{
    clipboard::Clipboard,
    error::{Error, Result},
    generator::{generate_password, CharacterClass, GenerationConfig},
};

/// The state behind the password form: the requested length, the four
/// character class toggles and the last generated password.
pub struct PasswordForm {
    config: GenerationConfig,
    password: Zeroizing<String>,
}

impl Default for PasswordForm {
    fn default() -> Self {
        PasswordForm::new(GenerationConfig::default())
    }
}

impl PasswordForm {
    pub fn new(config: GenerationConfig) -> PasswordForm {
        PasswordForm {
            config,
            password: Zeroizing::new(String::new()),
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn length(&self) -> i64 {
        self.config.length
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        self.config.includes(class)
    }

    /// The last generated password, empty until the first successful generation.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Stores the number typed into the length input, without any range check.
    pub fn update_length(&mut self, raw: &str) {
        self.config.length = parse_length(raw);
    }

    /// Sets exactly one character class flag.
    pub fn toggle_inclusion(&mut self, class: CharacterClass, value: bool) {
        self.config.set_include(class, value);
    }

    /// Generates a new password with the thread local rng.
    pub fn generate(&mut self) -> Result<&str> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generates a new password and replaces the stored one. On error the
    /// stored password is left as it was.
    pub fn generate_with<R: Rng>(&mut self, rng: &mut R) -> Result<&str> {
        let password = generate_password(&self.config, rng)?;
        self.password = Zeroizing::new(password);
        Ok(self.password.as_str())
    }

    /// Writes the current password to the clipboard. The stored password is kept
    /// whether or not the write succeeds.
    pub fn copy_to_clipboard(&self, clipboard: &mut dyn Clipboard) -> Result<()> {
        copy_password(&self.password, clipboard)
    }
}

/// Writes `password` to `clipboard`, folding every failure into `ClipboardWriteFailed`.
pub fn copy_password(password: &str, clipboard: &mut dyn Clipboard) -> Result<()> {
    match clipboard.set_text(password) {
        Ok(()) => Ok(()),
        Err(Error::ClipboardWriteFailed(reason)) => Err(Error::ClipboardWriteFailed(reason)),
        Err(err) => Err(Error::ClipboardWriteFailed(err.to_string())),
    }
}

/// Parses the text of a numeric input the way a browser number field reports it:
/// blank is zero, decimals round up to the number of loop iterations they allow,
/// and anything unparsable counts as zero.
pub fn parse_length(raw: &str) -> i64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    if let Ok(n) = raw.parse::<i64>() {
        return n;
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => n.ceil() as i64,
        _ => 0,
    }
}

#[cfg(test)]
#[path = "tests/form.rs"]
mod test;
