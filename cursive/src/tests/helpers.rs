use std::sync::{Arc, Mutex};

use cursive::views::TextView;

use pwforge::form::PasswordForm;
use pwforge::generator::CharacterClass;

use crate::helpers::{errorbox, notify, with_form, FormType};

fn notification_text(siv: &mut cursive::Cursive) -> Option<String> {
    siv.call_on_name("notification", |t: &mut TextView| {
        t.get_content().source().to_owned()
    })
}

#[test]
fn notify_adds_dialog() {
    let mut siv = cursive::default();

    notify(&mut siv, "Copied", "Password copied to clipboard!");

    assert_eq!(
        Some("Password copied to clipboard!".to_owned()),
        notification_text(&mut siv)
    );
}

#[test]
fn errorbox_shows_error_message() {
    let mut siv = cursive::default();

    errorbox(&mut siv, &pwforge::Error::NoCharacterClassSelected);

    assert_eq!(
        Some("Please select at least one character type.".to_owned()),
        notification_text(&mut siv)
    );
}

#[test]
fn with_form_mutates_shared_form() {
    let form: FormType = Arc::new(Mutex::new(PasswordForm::default()));

    with_form(&form, |f| f.toggle_inclusion(CharacterClass::Numbers, false));

    assert!(!form.lock().unwrap().includes(CharacterClass::Numbers));
}

#[test]
fn with_form_recovers_poisoned_lock() {
    let form: FormType = Arc::new(Mutex::new(PasswordForm::default()));

    let form2 = form.clone();
    let _ = std::thread::spawn(move || {
        let _guard = form2.lock().unwrap();
        panic!("poison the lock");
    })
    .join();

    assert!(form.is_poisoned());
    assert_eq!(16, with_form(&form, |f| f.length()));
}
