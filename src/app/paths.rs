// SPDX-License-Identifier: MPL-2.0
//! Location of the settings file.
//!
//! The settings directory is the first one found among:
//!
//! 1. an explicit path handed to [`config_dir_with_override`] (tests),
//! 2. `--config-dir`, recorded once by [`init_cli_overrides`],
//! 3. the `ICED_FOLIO_CONFIG_DIR` environment variable when non-empty,
//! 4. `IcedFolio` under the platform config directory (`dirs`).

use std::path::PathBuf;
use std::sync::OnceLock;

/// Name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_FOLIO_CONFIG_DIR";

const APP_DIR_NAME: &str = "IcedFolio";

static CLI_CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Records `--config-dir`. Only the first value is kept.
pub fn init_cli_overrides(config_dir: Option<String>) {
    let Some(dir) = config_dir else {
        return;
    };
    if CLI_CONFIG_DIR.set(PathBuf::from(dir)).is_err() {
        log::warn!("--config-dir already applied, ignoring later value");
    }
}

/// Config directory, e.g. `~/.config/IcedFolio` on Linux.
///
/// `None` only when the platform has no config directory and nothing
/// overrides it.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

pub fn config_dir_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| CLI_CONFIG_DIR.get().cloned())
        .or_else(env_config_dir)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME)))
}

/// Full path of `settings.toml` for the resolved directory.
pub fn settings_file_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(explicit).map(|dir| dir.join(SETTINGS_FILE))
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
