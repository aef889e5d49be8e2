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

use std::path::{Path, PathBuf};
use std::process;
use std::sync::{Arc, Mutex};
use std::thread;

use cursive::direction::Orientation;
use cursive::event::{Event, Key};
use cursive::traits::*;
use cursive::views::{Button, Checkbox, Dialog, DummyView, EditView, LinearLayout, TextView};
use cursive::{CbSink, Cursive};

use log::{debug, error};

use pwforge::clipboard::{Clipboard, SystemClipboard};
use pwforge::form::{copy_password, PasswordForm};
use pwforge::generator::{CharacterClass, GenerationConfig, LENGTH_HINT_MAX, LENGTH_HINT_MIN};
use pwforge::settings;

mod helpers;

use helpers::{with_form, FormType};

const PASSWORD_WIDTH: usize = LENGTH_HINT_MAX as usize + 2;

fn length_changed(form: &FormType, text: &str) {
    with_form(form, |f| f.update_length(text));
}

fn class_toggled(form: &FormType, class: CharacterClass, checked: bool) {
    with_form(form, |f| f.toggle_inclusion(class, checked));
}

fn generate(ui: &mut Cursive, form: &FormType) {
    let res = with_form(form, |f| f.generate().map(str::to_owned));

    match res {
        Ok(password) => {
            ui.call_on_name("password_output", |l: &mut TextView| {
                l.set_content(password);
            });
        }
        Err(err) => helpers::errorbox(ui, &err),
    }
}

/// Shows how a clipboard write went, runs on the ui thread once the write has finished.
fn show_copy_result(ui: &mut Cursive, res: pwforge::Result<()>) {
    match res {
        Ok(()) => helpers::notify(ui, "Copied", "Password copied to clipboard!"),
        Err(err) => helpers::errorbox(ui, &err),
    }
}

fn copy(ui: &mut Cursive, form: &FormType) {
    let password = with_form(form, |f| f.password().to_owned());
    copy_with(ui.cb_sink().clone(), password, SystemClipboard);
}

/// Writes `password` to `clipboard` on a background thread and reports the outcome
/// back through `sink`. Nothing stops a second copy from starting before the first
/// one has finished, each one reports on its own.
fn copy_with<C: Clipboard + Send + 'static>(sink: CbSink, password: String, mut clipboard: C) {
    debug!("starting clipboard write");
    thread::spawn(move || {
        let res = copy_password(&password, &mut clipboard);
        if sink
            .send(Box::new(move |s: &mut Cursive| show_copy_result(s, res)))
            .is_err()
        {
            debug!("ui closed before the clipboard write finished");
        }
    });
}

fn save_settings(ui: &mut Cursive, form: &FormType, config_file_location: &Path) {
    let config = with_form(form, |f| f.config().clone());

    match settings::save_config(&config, config_file_location) {
        Ok(()) => helpers::notify(
            ui,
            "Settings",
            &format!("Saved defaults to {}", config_file_location.display()),
        ),
        Err(err) => helpers::errorbox(ui, &err),
    }
}

fn class_checkbox(form: &FormType, class: CharacterClass, checked: bool) -> LinearLayout {
    let form = form.clone();
    let checkbox = Checkbox::new()
        .with_checked(checked)
        .on_change(move |_, checked| {
            class_toggled(&form, class, checked);
        });

    LinearLayout::horizontal()
        .child(checkbox.with_name(format!("{}_checkbox", class.key())))
        .child(TextView::new(format!(" {}", class.label())))
}

/// Builds the password generator dialog around `form`, initialised from its current state.
fn password_form_view(form: &FormType) -> Dialog {
    let config = with_form(form, |f| f.config().clone());

    let length_input = EditView::new()
        .content(config.length.to_string())
        .on_edit({
            let form = form.clone();
            move |_, text, _| length_changed(&form, text)
        })
        .with_name("length_input")
        .fixed_width(8);

    let mut classes = LinearLayout::vertical().child(TextView::new("Include:"));
    for class in CharacterClass::ALL.iter() {
        classes.add_child(class_checkbox(form, *class, config.includes(*class)));
    }

    let output = LinearLayout::horizontal()
        .child(
            TextView::new("")
                .with_name("password_output")
                .fixed_width(PASSWORD_WIDTH),
        )
        .child(Button::new("Copy to Clipboard", {
            let form = form.clone();
            move |ui: &mut Cursive| copy(ui, &form)
        }));

    Dialog::around(
        LinearLayout::new(Orientation::Vertical)
            .child(TextView::new(
                "Create a secure password with just a few clicks.",
            ))
            .child(DummyView)
            .child(TextView::new(format!(
                "Password Length ({}-{})",
                LENGTH_HINT_MIN, LENGTH_HINT_MAX
            )))
            .child(length_input)
            .child(DummyView)
            .child(classes)
            .child(DummyView)
            .child(Button::new("Generate Password", {
                let form = form.clone();
                move |ui: &mut Cursive| generate(ui, &form)
            }))
            .child(DummyView)
            .child(TextView::new("Generated Password"))
            .child(output),
    )
    .title("Password Generator")
}

fn help() {
    println!("pwforge-cursive [-h|--help]");
    println!();
    println!("A small password generator that lives in your terminal.");
    println!();
    println!("Keys:");
    println!("  ctrl-g  generate a new password");
    println!("  ctrl-y  copy the password to the clipboard");
    println!("  ctrl-s  save length and character classes as the defaults");
    println!("  esc     quit");
    println!();
    println!("Defaults are read from $XDG_CONFIG_HOME/pwforge/settings.toml");
    println!("or $HOME/.config/pwforge/settings.toml.");
}

fn read_defaults() -> pwforge::Result<(GenerationConfig, PathBuf)> {
    let home = std::env::var("HOME").ok().map(PathBuf::from);
    let xdg_config_home = std::env::var("XDG_CONFIG_HOME").ok().map(PathBuf::from);

    let (config, config_file_location) = settings::read_config(&home, &xdg_config_home)?;
    Ok((
        GenerationConfig::from_settings(&config)?,
        config_file_location,
    ))
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => (),
        2 if args[1] == "-h" || args[1] == "--help" => {
            help();
            process::exit(0);
        }
        _ => {
            eprintln!("Unknown argument, usage: pwforge-cursive [-h|--help]");
            process::exit(1);
        }
    }

    let (defaults, config_file_location) = match read_defaults() {
        Ok(t) => t,
        Err(err) => {
            error!("could not read settings: {:?}", err);
            eprintln!("Error {}", err);
            process::exit(1);
        }
    };

    let form: FormType = Arc::new(Mutex::new(PasswordForm::new(defaults)));

    let mut ui = cursive::default();

    ui.add_global_callback(Event::CtrlChar('g'), {
        let form = form.clone();
        move |ui: &mut Cursive| generate(ui, &form)
    });
    ui.add_global_callback(Event::CtrlChar('y'), {
        let form = form.clone();
        move |ui: &mut Cursive| copy(ui, &form)
    });
    ui.add_global_callback(Event::CtrlChar('s'), {
        let form = form.clone();
        move |ui: &mut Cursive| save_settings(ui, &form, &config_file_location)
    });
    ui.add_global_callback(Key::Esc, |s| s.quit());

    if let Err(err) = ui.load_toml(include_str!("../res/style.toml")) {
        debug!("could not load style: {:?}", err);
    }

    ui.add_layer(
        LinearLayout::new(Orientation::Vertical)
            .child(password_form_view(&form))
            .child(TextView::new(
                "ctrl-g: Generate | ctrl-y: Copy | ctrl-s: Save defaults | esc: Quit",
            )),
    );

    ui.run();
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod test;
