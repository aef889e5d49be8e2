use rand::{rngs::StdRng, SeedableRng};

use super::*;
use crate::generator::character_pool;

struct RecordingClipboard {
    contents: Vec<String>,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents.push(text.to_owned());
        Ok(())
    }
}

struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        Err(Error::ClipboardWriteFailed("no display".to_owned()))
    }
}

struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        Err(Error::Generic("clipboard went away"))
    }
}

#[test]
fn new_form_defaults() {
    let form = PasswordForm::default();

    assert_eq!(16, form.length());
    for class in CharacterClass::ALL.iter() {
        assert!(form.includes(*class));
    }
    assert_eq!("", form.password());
}

#[test]
fn update_length_stores_value_verbatim() {
    let mut form = PasswordForm::default();

    form.update_length("12");
    assert_eq!(12, form.length());

    form.update_length("4");
    assert_eq!(4, form.length());

    form.update_length("64");
    assert_eq!(64, form.length());

    form.update_length("-3");
    assert_eq!(-3, form.length());
}

#[test]
fn update_length_blank_is_zero() {
    let mut form = PasswordForm::default();

    form.update_length("");
    assert_eq!(0, form.length());

    form.update_length("16");
    form.update_length("   ");
    assert_eq!(0, form.length());
}

#[test]
fn update_length_not_a_number_is_zero() {
    let mut form = PasswordForm::default();

    form.update_length("twelve");

    assert_eq!(0, form.length());
}

#[test]
fn parse_length_decimals_round_up() {
    assert_eq!(13, parse_length("12.5"));
    assert_eq!(12, parse_length("12.0"));
    assert_eq!(-2, parse_length("-2.5"));
    assert_eq!(1000, parse_length("1e3"));
    assert_eq!(0, parse_length("inf"));
    assert_eq!(20, parse_length(" 20 "));
}

#[test]
fn toggle_inclusion_flips_only_that_flag() {
    for class in CharacterClass::ALL.iter() {
        let mut form = PasswordForm::default();

        form.toggle_inclusion(*class, false);

        for other in CharacterClass::ALL.iter() {
            assert_eq!(other != class, form.includes(*other), "{:?}", other);
        }

        form.toggle_inclusion(*class, true);
        assert!(form.includes(*class));
    }
}

#[test]
fn generate_twelve_characters_from_full_pool() {
    let mut form = PasswordForm::default();
    form.update_length("12");
    let pool = character_pool(form.config());

    let pass = form.generate().unwrap().to_owned();

    assert_eq!(86, pool.len());
    assert_eq!(12, pass.chars().count());
    assert!(pass.chars().all(|c| pool.contains(c)));
    assert_eq!(pass, form.password());
}

#[test]
fn generate_replaces_previous_password() {
    let mut form = PasswordForm::default();
    let mut rng = StdRng::seed_from_u64(5);

    let first = form.generate_with(&mut rng).unwrap().to_owned();
    let second = form.generate_with(&mut rng).unwrap().to_owned();

    assert_ne!(first, second);
    assert_eq!(second, form.password());
}

#[test]
fn generate_zero_length() {
    let mut form = PasswordForm::default();
    form.update_length("0");

    assert_eq!("", form.generate().unwrap());
}

#[test]
fn generate_without_classes_keeps_password() {
    let mut form = PasswordForm::default();
    let previous = form.generate().unwrap().to_owned();

    for class in CharacterClass::ALL.iter() {
        form.toggle_inclusion(*class, false);
    }
    let res = form.generate();

    assert!(matches!(res, Err(Error::NoCharacterClassSelected)));
    assert_eq!(previous, form.password());
}

#[test]
fn generate_without_classes_on_fresh_form() {
    let mut form = PasswordForm::new(GenerationConfig {
        length: 16,
        include_uppercase: false,
        include_lowercase: false,
        include_numbers: false,
        include_symbols: false,
    });

    assert!(form.generate().is_err());
    assert_eq!("", form.password());
}

#[test]
fn generate_unallocatable_length_keeps_password() {
    let mut form = PasswordForm::default();
    let previous = form.generate().unwrap().to_owned();

    form.update_length("1e30");
    let res = form.generate();

    assert!(matches!(res, Err(Error::Generic(_))));
    assert_eq!(previous, form.password());
    assert_eq!(i64::MAX, form.length());
}

#[test]
fn copy_to_clipboard_writes_current_password() {
    let mut form = PasswordForm::default();
    let pass = form.generate().unwrap().to_owned();
    let mut clipboard = RecordingClipboard { contents: vec![] };

    form.copy_to_clipboard(&mut clipboard).unwrap();
    form.copy_to_clipboard(&mut clipboard).unwrap();

    assert_eq!(vec![pass.clone(), pass], clipboard.contents);
}

#[test]
fn copy_to_clipboard_empty_password() {
    let form = PasswordForm::default();
    let mut clipboard = RecordingClipboard { contents: vec![] };

    form.copy_to_clipboard(&mut clipboard).unwrap();

    assert_eq!(vec![String::new()], clipboard.contents);
}

#[test]
fn copy_to_clipboard_failure_keeps_password() {
    let mut form = PasswordForm::default();
    let pass = form.generate().unwrap().to_owned();

    let res = form.copy_to_clipboard(&mut FailingClipboard);

    assert!(matches!(res, Err(Error::ClipboardWriteFailed(_))));
    assert_eq!(pass, form.password());
}

#[test]
fn copy_to_clipboard_other_errors_become_write_failures() {
    let form = PasswordForm::default();

    let res = form.copy_to_clipboard(&mut BrokenClipboard);

    match res {
        Err(Error::ClipboardWriteFailed(reason)) => assert_eq!("clipboard went away", reason),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn error_messages() {
    assert_eq!(
        "Please select at least one character type.",
        format!("{}", Error::NoCharacterClassSelected)
    );
    assert_eq!(
        "Failed to copy password to clipboard.",
        format!("{}", Error::ClipboardWriteFailed("x".to_owned()))
    );
}
