// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Theme and language changes made from the navbar are written back to
//! `settings.toml` so they survive a restart.

use super::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use unic_langid::LanguageIdentifier;

/// Writes the current preferences to disk.
///
/// Skipped under `cfg(test)` so unit tests never touch the user's config.
pub fn persist_preferences(config: &Config) {
    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save(config) {
        log::warn!("failed to save config: {error}");
    }
}

/// Switches to `mode` and persists it.
pub fn apply_theme_change(config: &mut Config, theme_mode: &mut ThemeMode, mode: ThemeMode) {
    *theme_mode = mode;
    config.general.theme_mode = mode;
    persist_preferences(config);
}

/// Applies the newly selected locale and persists it.
pub fn apply_language_change(config: &mut Config, i18n: &mut I18n, locale: LanguageIdentifier) {
    i18n.set_locale(locale.clone());
    config.general.language = Some(locale.to_string());
    persist_preferences(config);
}

/// Locale following the current one in `available_locales`, wrapping around.
#[must_use]
pub fn next_locale(i18n: &I18n) -> Option<LanguageIdentifier> {
    let locales = &i18n.available_locales;
    if locales.is_empty() {
        return None;
    }
    let next = locales
        .iter()
        .position(|locale| locale == i18n.current_locale())
        .map_or(0, |index| (index + 1) % locales.len());
    locales.get(next).cloned()
}
