// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes and the persisted theme preference.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Role-based colors for one brightness, picked by style functions through
/// [`ColorScheme::for_theme`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Page background.
    pub surface_primary: Color,
    /// Cards, panels and the navbar.
    pub surface_secondary: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    /// Primary buttons and the user's chat bubbles.
    pub brand_primary: Color,
    /// Highlights and the assistant's chat bubbles.
    pub brand_accent: Color,
    pub error: Color,
    /// Scrim behind the project modal.
    pub overlay_background: Color,
}

const SCRIM: Color = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::NAVY_900
};

impl ColorScheme {
    pub const LIGHT: ColorScheme = ColorScheme {
        surface_primary: palette::WHITE,
        surface_secondary: palette::GRAY_100,
        text_primary: palette::NAVY_500,
        text_secondary: palette::GRAY_700,
        brand_primary: palette::TEAL_600,
        brand_accent: palette::PERIWINKLE_500,
        error: palette::ERROR_500,
        overlay_background: SCRIM,
    };

    pub const DARK: ColorScheme = ColorScheme {
        surface_primary: palette::NAVY_500,
        surface_secondary: palette::NAVY_700,
        text_primary: palette::WHITE,
        text_secondary: palette::GRAY_400,
        brand_primary: palette::TEAL_500,
        brand_accent: palette::MINT_500,
        error: palette::ERROR_500,
        overlay_background: SCRIM,
    };

    #[must_use]
    pub fn for_theme(theme: &Theme) -> &'static ColorScheme {
        if theme.extended_palette().is_dark {
            &Self::DARK
        } else {
            &Self::LIGHT
        }
    }
}

/// Theme preference saved in `[general] theme_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Whether to render dark. `System` asks the desktop via `dark-light`.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Unknown or failed detection renders dark
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The Iced theme to render with.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Light, then dark, then back to following the system.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    /// Fluent key of the label shown on the theme toggle.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
            ThemeMode::System => "theme-system",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_surface() {
        assert!(ColorScheme::LIGHT.surface_primary.r > 0.9);
        assert!(ColorScheme::LIGHT.text_primary.r < 0.2);
    }

    #[test]
    fn dark_scheme_uses_brand_navy_and_mint() {
        assert_eq!(ColorScheme::DARK.surface_primary, palette::NAVY_500);
        assert_eq!(ColorScheme::DARK.brand_accent, palette::MINT_500);
    }

    #[test]
    fn scheme_follows_iced_theme_brightness() {
        assert_eq!(ColorScheme::for_theme(&Theme::Dark), &ColorScheme::DARK);
        assert_eq!(ColorScheme::for_theme(&Theme::Light), &ColorScheme::LIGHT);
    }

    #[test]
    fn explicit_modes_ignore_the_host() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
    }

    #[test]
    fn next_visits_every_mode_once() {
        let mut mode = ThemeMode::System;
        let mut seen = Vec::new();
        for _ in 0..3 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(seen, [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]);
    }

    #[test]
    fn mode_serializes_lowercase() {
        let json = serde_json::to_string(&ThemeMode::Dark).expect("serializes");
        assert_eq!(json, "\"dark\"");
    }
}
