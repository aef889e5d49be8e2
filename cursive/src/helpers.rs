/*  Pwforge - a small random password generator
    Copyright (C) 2026 The pwforge developers

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::sync::{Arc, Mutex, PoisonError};

use cursive::event::Key;
use cursive::traits::*;
use cursive::views::{Dialog, OnEventView, TextView};
use cursive::Cursive;

use pwforge::form::PasswordForm;

pub type FormType = Arc<Mutex<PasswordForm>>;

/// Runs `f` on the shared form. A poisoned lock still holds a usable form, so it's recovered.
pub fn with_form<T>(form: &FormType, f: impl FnOnce(&mut PasswordForm) -> T) -> T {
    let mut guard = form.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Shows a modal message that has to be dismissed before the form can be used again.
pub fn notify(ui: &mut Cursive, title: &str, text: &str) {
    let d = Dialog::around(TextView::new(text).with_name("notification"))
        .dismiss_button("Ok")
        .title(title);

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);
}

pub fn errorbox(ui: &mut Cursive, err: &pwforge::Error) {
    notify(ui, "Error", &err.to_string());
}

#[cfg(test)]
#[path = "tests/helpers.rs"]
mod helpers_test;
