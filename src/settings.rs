use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::{
    error::{Error, Result},
    generator::{CharacterClass, GenerationConfig, DEFAULT_LENGTH},
};

/// Returns where the settings file lives: `$XDG_CONFIG_HOME/pwforge/settings.toml`
/// if `xdg_config_home` is set, otherwise `$HOME/.config/pwforge/settings.toml`.
pub fn xdg_config_file_location(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<PathBuf> {
    let config_dir = match xdg_config_home {
        Some(dir) => dir.clone(),
        None => match home {
            Some(home) => home.join(".config"),
            None => return Err(Error::Generic("no home directory set")),
        },
    };

    Ok(config_dir.join("pwforge").join("settings.toml"))
}

fn default_settings() -> Result<config::Config> {
    let mut settings = config::Config::default();
    settings.set_default("generator.length", DEFAULT_LENGTH)?;
    for class in CharacterClass::ALL.iter() {
        settings.set_default(&format!("generator.{}", class.key()), true)?;
    }
    Ok(settings)
}

/// Reads the settings, layering the file (if there is one) over the built in defaults.
/// Returns the settings together with the file location, so they can be saved back.
pub fn read_config(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<(config::Config, PathBuf)> {
    let mut settings = default_settings()?;
    let config_file_location = xdg_config_file_location(home, xdg_config_home)?;

    if config_file_location.exists() {
        debug!("reading settings from {}", config_file_location.display());
        settings.merge(config::File::from(config_file_location.as_path()))?;
    } else {
        debug!(
            "no settings file at {}, using defaults",
            config_file_location.display()
        );
    }

    Ok((settings, config_file_location))
}

impl GenerationConfig {
    /// Picks the `generator.*` keys out of already read settings.
    pub fn from_settings(settings: &config::Config) -> Result<GenerationConfig> {
        let mut config = GenerationConfig {
            length: settings.get_int("generator.length")?,
            ..GenerationConfig::default()
        };
        for class in CharacterClass::ALL.iter() {
            let value = settings.get_bool(&format!("generator.{}", class.key()))?;
            config.set_include(*class, value);
        }
        Ok(config)
    }
}

/// Writes `config` as the new defaults, creating the settings directory if needed.
pub fn save_config(config: &GenerationConfig, config_file_location: &Path) -> Result<()> {
    let mut generator = toml::value::Table::new();
    generator.insert("length".to_owned(), toml::Value::Integer(config.length));
    for class in CharacterClass::ALL.iter() {
        generator.insert(
            class.key().to_owned(),
            toml::Value::Boolean(config.includes(*class)),
        );
    }

    let mut root = toml::value::Table::new();
    root.insert("generator".to_owned(), toml::Value::Table(generator));

    let content = toml::to_string(&root)?;

    if let Some(parent) = config_file_location.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_file_location, content)?;
    info!("saved settings to {}", config_file_location.display());

    Ok(())
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod test;
