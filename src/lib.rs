/// This is the library part of pwforge, it holds the state of the password form and the
/// routine that draws random passwords from the selected character classes.
pub mod form;
/// Character classes and the password generation routine.
pub mod generator;
/// Reading and writing the form defaults from `settings.toml`.
pub mod settings;

pub mod clipboard;
pub mod error;

pub use error::{Error, Result};
