//! User-level configuration (~/.config/pride/config.toml)
//!
//! The only setting is which palette to use. Resolution order is the
//! `--palette` flag, then `PRIDE_PALETTE`, then the config file, then
//! automatic selection from `TERM`.

use crate::error::{Error, Result};
use crate::output::{Palette, PaletteChoice};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured palette
pub const PALETTE_ENV: &str = "PRIDE_PALETTE";

/// User configuration loaded from ~/.config/pride/config.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    /// Palette to use (default: auto)
    pub palette: Option<PaletteChoice>,
}

/// Get the user config directory path.
///
/// Returns `~/.config/pride/` on Unix and `%APPDATA%\pride\` on Windows.
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pride"))
}

/// Get the user config file path.
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|p| p.join("config.toml"))
}

/// Load user configuration from the default location
///
/// Returns `None` if the config file doesn't exist.
pub fn load_user_config() -> Result<Option<UserConfig>> {
    match get_config_path() {
        Some(path) => load_user_config_from(&path),
        None => Ok(None),
    }
}

/// Load user configuration from `config_path`
///
/// Returns `None` if the file doesn't exist and an error if it exists but is
/// invalid TOML.
pub fn load_user_config_from(config_path: &Path) -> Result<Option<UserConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(config_path).map_err(|e| {
        Error::Config(format!(
            "Failed to read user config at {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let config: UserConfig = toml::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse user config at {}: {}",
            config_path.display(),
            e
        ))
    })?;

    log::debug!("loaded user config from {}", config_path.display());
    Ok(Some(config))
}

/// Pick the palette choice from the flag, environment, and config file
pub fn resolve_choice(
    flag: Option<PaletteChoice>,
    env_value: Option<&str>,
    config: Option<&UserConfig>,
) -> PaletteChoice {
    if let Some(choice) = flag {
        return choice;
    }

    if let Some(value) = env_value {
        match PaletteChoice::parse(value) {
            Some(choice) => return choice,
            None => log::warn!("ignoring unknown {} value: {:?}", PALETTE_ENV, value),
        }
    }

    config.and_then(|c| c.palette).unwrap_or_default()
}

/// Build the palette for this process
///
/// Reads `PRIDE_PALETTE`, the user config file, and `TERM` once.
pub fn load_palette(flag: Option<PaletteChoice>) -> Result<Palette> {
    let env_value = std::env::var(PALETTE_ENV).ok();
    let env_choice = env_value.as_deref().and_then(PaletteChoice::parse);

    // The file is only consulted when nothing above it decided
    let config = if flag.is_some() || env_choice.is_some() {
        None
    } else {
        load_user_config()?
    };
    let choice = resolve_choice(flag, env_value.as_deref(), config.as_ref());

    let palette = match choice {
        PaletteChoice::Auto => Palette::from_env(),
        other => other.resolve(None),
    };
    log::debug!("using the {} palette ({:?})", palette.kind(), choice);
    Ok(palette)
}
