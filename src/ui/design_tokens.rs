// SPDX-License-Identifier: MPL-2.0
//! Visual constants for the portfolio.
//!
//! The look is a dark terminal: a navy backdrop, mint text, and teal for
//! anything clickable. Style functions in [`crate::ui::styles`] and the views
//! read from these modules instead of using literal values.
//!
//! ```
//! use iced_folio::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color { a: opacity::OVERLAY_STRONG, ..palette::NAVY_900 };
//! assert!(scrim.a < 1.0);
//! assert_eq!(spacing::MD, 16.0);
//! ```

use crate::app::config::defaults::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.35);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.56, 0.62);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.94, 0.96);

    /// `#1a1b3b`, page background in dark mode.
    pub const NAVY_500: Color = Color::from_rgb(0.102, 0.106, 0.231);
    pub const NAVY_700: Color = Color::from_rgb(0.082, 0.086, 0.2);
    /// Terminal window fill.
    pub const NAVY_900: Color = Color::from_rgb(0.067, 0.071, 0.165);

    pub const TEAL_400: Color = Color::from_rgb(0.4, 0.8, 0.78);
    /// `#4fb7b3`, buttons and selected states.
    pub const TEAL_500: Color = Color::from_rgb(0.31, 0.718, 0.702);
    pub const TEAL_600: Color = Color::from_rgb(0.24, 0.6, 0.59);

    /// `#a8fbd3`, terminal text and highlights.
    pub const MINT_500: Color = Color::from_rgb(0.659, 0.984, 0.827);

    /// `#637ab9`
    pub const PERIWINKLE_500: Color = Color::from_rgb(0.388, 0.478, 0.725);

    /// Offline chat replies and rejected terminal input.
    pub const ERROR_500: Color = Color::from_rgb(0.91, 0.29, 0.33);
    /// Settings and script load banner.
    pub const WARNING_500: Color = Color::from_rgb(0.96, 0.7, 0.2);
}

/// Alpha levels applied to palette colors.
pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Chip fills and hover tints.
    pub const OVERLAY_SUBTLE: f32 = 0.12;
    pub const OVERLAY_MEDIUM: f32 = 0.45;
    /// Modal scrim.
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const SURFACE: f32 = 0.94;
    pub const OPAQUE: f32 = 1.0;
}

/// Gaps and paddings, on a 4px step.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 56.0;

    pub const TERMINAL_WIDTH: f32 = 620.0;
    pub const TERMINAL_HEIGHT: f32 = 380.0;

    pub const PROJECT_CARD_WIDTH: f32 = 300.0;
    pub const PROJECT_CARD_HEIGHT: f32 = 180.0;

    /// Project detail modal.
    pub const MODAL_WIDTH: f32 = 640.0;

    pub const CHAT_PANEL_WIDTH: f32 = 340.0;
    pub const CHAT_PANEL_HEIGHT: f32 = 420.0;
}

/// Font sizes in logical pixels.
pub mod typography {
    /// Hero name and the intro logo.
    pub const DISPLAY: f32 = 64.0;
    /// Section headings.
    pub const TITLE_LG: f32 = 30.0;
    /// Card and modal titles.
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Terminal lines and chat bubbles.
    pub const BODY_SM: f32 = 13.0;
    /// Chips, years, the eyebrow above headings.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Selected cards and the focused terminal.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 14.0;
    /// Large enough to turn any chip or launcher into a pill.
    pub const FULL: f32 = 999.0;
}

/// Drop shadows. All of them fall straight down.
pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    const fn drop(depth: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: palette::BLACK,
            offset: Vector { x: 0.0, y: depth },
            blur_radius,
        }
    }

    pub const NONE: Shadow = drop(0.0, 0.0);
    pub const SM: Shadow = drop(2.0, 6.0);
    pub const MD: Shadow = drop(6.0, 12.0);
    /// Modal and chat panel.
    pub const LG: Shadow = drop(12.0, 28.0);
}

const _: () = {
    assert!(spacing::XXS < spacing::XS && spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD && spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL && spacing::XL < spacing::XXL);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_STRONG < opacity::OPAQUE);

    // Panels must fit inside the minimum window
    assert!(sizing::MODAL_WIDTH <= MIN_WINDOW_WIDTH);
    assert!(sizing::TERMINAL_WIDTH < sizing::MODAL_WIDTH);
    assert!(sizing::CHAT_PANEL_HEIGHT + sizing::NAVBAR_HEIGHT < MIN_WINDOW_HEIGHT);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(shadow::LG.blur_radius > shadow::MD.blur_radius);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_steps_are_multiples_of_four() {
        for value in [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
            spacing::XXL,
        ] {
            assert_eq!(value % 4.0, 0.0, "{value} is off the grid");
        }
    }

    #[test]
    fn terminal_text_contrasts_with_its_background() {
        let fg = palette::MINT_500;
        let bg = palette::NAVY_900;
        assert!(fg.g - bg.g > 0.5);
    }

    #[test]
    fn shadows_only_fall_downwards() {
        for shadow in [shadow::SM, shadow::MD, shadow::LG] {
            assert_eq!(shadow.offset.x, 0.0);
            assert!(shadow.offset.y > 0.0);
        }
    }
}
