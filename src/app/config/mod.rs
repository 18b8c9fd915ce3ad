// SPDX-License-Identifier: MPL-2.0
//! User settings stored in `settings.toml`.
//!
//! ```toml
//! [general]
//! language = "fr"
//! theme_mode = "dark"
//!
//! [intro]
//! enabled = true
//! script = "boot-log"
//! script_file = "/home/me/intro.toml"
//!
//! [chat]
//! api_key = "..."
//! model = "gemini-2.5-flash"
//! ```
//!
//! Every field is optional. A missing file yields [`Config::default`]; an
//! unreadable one yields the default plus a warning key for the banner. See
//! [`crate::app::paths`] for where the file is looked up.
//!
//! ```no_run
//! use iced_folio::app::config;
//! use iced_folio::sequencer::IntroScript;
//!
//! let (mut settings, _warning) = config::load();
//! settings.intro.script = Some(IntroScript::PinBreach);
//! if let Err(err) = config::save(&settings) {
//!     eprintln!("{err}");
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::sequencer::{scripts, IntroScript, StageDefinition};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// All settings, one struct per TOML table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub intro: IntroConfig,

    #[serde(default)]
    pub chat: ChatConfig,
}

/// `[general]`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// BCP-47 locale such as `en-US` or `fr`. Unset means "follow the OS".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "theme_mode_ignoring_case")]
    pub theme_mode: ThemeMode,
}

/// `[intro]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntroConfig {
    #[serde(
        default = "intro_enabled_by_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<IntroScript>,

    /// TOML file of `[[stage]]` tables, played instead of `script`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_file: Option<PathBuf>,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enabled: intro_enabled_by_default(),
            script: Some(DEFAULT_INTRO_SCRIPT),
            script_file: None,
        }
    }
}

impl IntroConfig {
    /// Stages to play, plus a warning key when `script_file` could not be
    /// used and the built-in script was picked instead.
    pub fn stages(&self) -> (Arc<[StageDefinition]>, Option<String>) {
        let builtin = self.script.unwrap_or(DEFAULT_INTRO_SCRIPT);
        let Some(path) = &self.script_file else {
            return (builtin.stages(), None);
        };

        match scripts::load_script_file(path) {
            Ok(stages) => {
                log::info!("intro script: {} ({} stages)", path.display(), stages.len());
                (stages, None)
            }
            Err(err) => {
                log::warn!("{err}; playing '{builtin}' instead");
                (builtin.stages(), Some(err.warning_key().to_string()))
            }
        }
    }
}

/// `[chat]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatConfig {
    /// `false` keeps the chat on the offline reply even with a key.
    #[serde(
        default = "chat_enabled_by_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub enabled: Option<bool>,

    /// Falls back to `GEMINI_API_KEY`, then `API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            enabled: chat_enabled_by_default(),
            api_key: None,
            model: None,
            endpoint: None,
        }
    }
}

fn intro_enabled_by_default() -> Option<bool> {
    Some(DEFAULT_INTRO_ENABLED)
}

fn chat_enabled_by_default() -> Option<bool> {
    Some(DEFAULT_CHAT_ENABLED)
}

/// Accepts `Dark`, `DARK` and friends as well as the lowercase form.
fn theme_mode_ignoring_case<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(serde::de::Error::custom(format!(
            "unknown theme_mode '{other}', expected light, dark or system"
        ))),
    }
}

/// Reads `settings.toml` from the resolved config directory.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Like [`load`], reading from `base_dir` when given.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = paths::settings_file_with_override(base_dir) else {
        log::info!("no config directory on this platform; using default settings");
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            log::info!("settings: {}", path.display());
            (config, None)
        }
        Err(err) => {
            log::warn!("ignoring {}: {err}", path.display());
            (Config::default(), Some(err.warning_key().to_string()))
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes `settings.toml` into the resolved config directory.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match paths::settings_file_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Serializes `config` to `path`, creating missing parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.intro.enabled, Some(true));
        assert_eq!(config.intro.script, Some(IntroScript::Champion));
        assert_eq!(config.chat.enabled, Some(true));
        assert_eq!(config.chat.api_key, None);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");

        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            intro: IntroConfig {
                enabled: Some(false),
                script: Some(IntroScript::PhoneHack),
                script_file: None,
            },
            chat: ChatConfig {
                enabled: Some(true),
                api_key: Some("abc".to_string()),
                model: Some("gemini-2.5-pro".to_string()),
                endpoint: None,
            },
        };

        save_to_path(&config, &path).expect("save should succeed");
        let loaded = load_from_path(&path).expect("load should succeed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn script_names_are_kebab_case_in_toml() {
        let config: Config = toml::from_str(
            r#"
            [intro]
            script = "pin-breach"
            "#,
        )
        .expect("valid config");
        assert_eq!(config.intro.script, Some(IntroScript::PinBreach));
        assert_eq!(config.intro.enabled, Some(true));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"LIGHT\"\n").expect("valid");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"neon\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "not = valid = toml").expect("write file");

        let err = load_from_path(&path).expect_err("should fail");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join("dir").join("settings.toml");

        save_to_path(&Config::default(), &path).expect("save should succeed");
        assert!(path.exists());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(paths::SETTINGS_FILE), "[intro\nscript = 1").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        config.intro.script = Some(IntroScript::BootLog);

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join(paths::SETTINGS_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.intro.script, Some(IntroScript::BootLog));
    }

    #[test]
    fn intro_stages_use_builtin_without_file() {
        let intro = IntroConfig {
            script: Some(IntroScript::BootLog),
            ..IntroConfig::default()
        };
        let (stages, warning) = intro.stages();
        assert!(warning.is_none());
        assert_eq!(stages, IntroScript::BootLog.stages());
    }

    #[test]
    fn intro_stages_load_custom_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("intro.toml");
        let mut file = fs::File::create(&path).expect("create");
        writeln!(file, "[[stage]]\nname = \"custom\"\nduration_ms = 100").expect("write");

        let intro = IntroConfig {
            script_file: Some(path),
            ..IntroConfig::default()
        };
        let (stages, warning) = intro.stages();
        assert!(warning.is_none());
        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].name, "custom");
    }

    #[test]
    fn broken_script_file_falls_back_with_warning() {
        let intro = IntroConfig {
            script: Some(IntroScript::PhoneHack),
            script_file: Some(PathBuf::from("/no/such/intro.toml")),
            ..IntroConfig::default()
        };
        let (stages, warning) = intro.stages();
        assert_eq!(warning.as_deref(), Some("notification-script-load-error"));
        assert_eq!(stages, IntroScript::PhoneHack.stages());
    }
}
