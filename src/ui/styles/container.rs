// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background for the portfolio screen.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Generic panel surface (about tabs, service cards, chat panel).
///
/// Derived from the active theme background with a slight opacity so panels
/// stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    let base = colors.surface_secondary;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            width: border::WIDTH_SM,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.text_secondary
            },
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Top navigation bar.
pub fn navbar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Full-screen backdrop behind the intro terminal.
pub fn intro_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_900)),
        text_color: Some(palette::MINT_500),
        ..Default::default()
    }
}

/// The intro terminal window.
pub fn terminal(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::MINT_500),
        border: Border {
            color: palette::TEAL_600,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dimmed layer behind the project modal.
pub fn modal_backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            ColorScheme::for_theme(theme).overlay_background,
        )),
        ..Default::default()
    }
}

/// Small pill used for tags, tech stack entries and hero chips.
pub fn chip(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.brand_primary
        })),
        text_color: Some(colors.brand_primary),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Inline warning banner (config or script load problems).
pub fn warning(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WARNING_500
        })),
        border: Border {
            color: palette::WARNING_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Chat bubble, tinted by author.
pub fn bubble(from_user: bool, is_error: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let tint = if is_error {
            colors.error
        } else if from_user {
            colors.brand_primary
        } else {
            colors.brand_accent
        };

        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..tint
            })),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_is_theme_independent() {
        assert_eq!(
            terminal(&Theme::Light).background,
            terminal(&Theme::Dark).background
        );
    }

    #[test]
    fn error_bubbles_use_error_tint() {
        let style = bubble(false, true)(&Theme::Dark);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected background color");
        };
        assert_eq!(bg.r, palette::ERROR_500.r);
    }
}
