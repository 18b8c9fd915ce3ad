// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call to action (teal fill).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::TEAL_500)),
            text_color: palette::NAVY_900,
            border: Border {
                color: palette::TEAL_600,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::MINT_500)),
            text_color: palette::NAVY_900,
            border: Border {
                color: palette::TEAL_500,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::TEAL_500
            })),
            text_color: palette::NAVY_700,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Active entry of a toggle group (navbar section, about tab).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..colors.brand_primary
        },
        _ => Color {
            a: opacity::OVERLAY_SUBTLE * 2.0,
            ..colors.brand_primary
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_primary,
        border: Border {
            color: colors.brand_primary,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Inactive entry of a toggle group, or any low-emphasis action.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.brand_primary
            })),
            text_color: colors.text_primary,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: colors.text_secondary,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Active | button::Status::Pressed => button::Style {
            background: None,
            text_color: colors.text_secondary,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Clickable project card. The whole card is the button.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (border_color, card_shadow) = match status {
        button::Status::Hovered => (colors.brand_primary, shadow::LG),
        _ => (
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.text_secondary
            },
            shadow::SM,
        ),
    };

    button::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: colors.text_primary,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: card_shadow,
        snap: true,
    }
}

/// Round button floating over content (chat launcher, modal arrows).
pub fn floating(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::TEAL_400,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::NAVY_700
        },
        _ => palette::TEAL_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        snap: true,
    }
}
