use log::debug;
use rand::Rng;

use crate::error::{Error, Result};

pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBER_CHARS: &str = "0123456789";
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

/// The length a fresh form starts out with.
pub const DEFAULT_LENGTH: i64 = 16;
/// Lower bound advertised by the length input. Only a hint, never enforced.
pub const LENGTH_HINT_MIN: i64 = 8;
/// Upper bound advertised by the length input. Only a hint, never enforced.
pub const LENGTH_HINT_MAX: i64 = 32;

/// One of the four groups of characters a password can be drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// All classes, in the order they are concatenated into the pool.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Numbers => NUMBER_CHARS,
            CharacterClass::Symbols => SYMBOL_CHARS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase Letters",
            CharacterClass::Lowercase => "Lowercase Letters",
            CharacterClass::Numbers => "Numbers",
            CharacterClass::Symbols => "Symbols",
        }
    }

    /// Key used for this class in the settings file and as a view name prefix.
    pub fn key(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Symbols => "symbols",
        }
    }
}

/// What the user has asked for: a length and which classes to include.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: i64,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GenerationConfig {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    pub fn set_include(&mut self, class: CharacterClass, value: bool) {
        match class {
            CharacterClass::Uppercase => self.include_uppercase = value,
            CharacterClass::Lowercase => self.include_lowercase = value,
            CharacterClass::Numbers => self.include_numbers = value,
            CharacterClass::Symbols => self.include_symbols = value,
        }
    }
}

/// Concatenates the enabled classes, always in uppercase, lowercase, numbers, symbols order.
pub fn character_pool(config: &GenerationConfig) -> String {
    CharacterClass::ALL
        .iter()
        .filter(|class| config.includes(**class))
        .map(|class| class.chars())
        .collect()
}

/// Draws `config.length` characters uniformly from the character pool.
///
/// The length is not validated: zero or negative lengths give an empty string.
/// Returns `Error::NoCharacterClassSelected` if every class is disabled, and
/// `Error::Generic` if there isn't memory for a password that long.
pub fn generate_password<R: Rng>(config: &GenerationConfig, rng: &mut R) -> Result<String> {
    let pool: Vec<char> = character_pool(config).chars().collect();
    if pool.is_empty() {
        return Err(Error::NoCharacterClassSelected);
    }

    let length = usize::try_from(config.length).unwrap_or(0);
    debug!(
        "generating password of length {} from a pool of {} characters",
        length,
        pool.len()
    );

    // every pool character is ascii, one byte each
    let mut password = String::new();
    if password.try_reserve_exact(length).is_err() {
        return Err(Error::Generic("password length too large"));
    }
    password.extend((0..length).map(|_| pool[rng.gen_range(0..pool.len())]));

    Ok(password)
}

#[cfg(test)]
#[path = "tests/generator.rs"]
mod generator_tests;
