// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for the portfolio screen.
//!
//! Shows the owner's mark, one button per section, and the controls that
//! replay the intro and switch theme or language.

use crate::app::screen::Section;
use crate::gallery::catalog::OWNER;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Font, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Section,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Show(Section),
    ReplayIntro,
    CycleTheme,
    CycleLanguage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ShowSection(Section),
    ReplayIntro,
    CycleTheme,
    CycleLanguage,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Show(section) => Event::ShowSection(*section),
        Message::ReplayIntro => Event::ReplayIntro,
        Message::CycleTheme => Event::CycleTheme,
        Message::CycleLanguage => Event::CycleLanguage,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(OWNER)
        .size(typography::TITLE_MD)
        .font(Font::MONOSPACE);

    let mut bar = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    for section in Section::ALL {
        let style = if section == ctx.active {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        bar = bar.push(
            button(Text::new(ctx.i18n.tr(section.label_key())).size(typography::BODY))
                .on_press(Message::Show(section))
                .padding([spacing::XXS, spacing::SM])
                .style(style),
        );
    }

    let theme_label = format!(
        "{}: {}",
        ctx.i18n.tr("nav-theme"),
        ctx.i18n.tr(ctx.theme_mode.label_key())
    );
    let language_label = ctx.i18n.current_locale().language.as_str().to_uppercase();

    bar = bar
        .push(
            button(Text::new(theme_label).size(typography::CAPTION))
                .on_press(Message::CycleTheme)
                .style(styles::button::unselected),
        )
        .push(
            button(Text::new(language_label).size(typography::CAPTION))
                .on_press(Message::CycleLanguage)
                .style(styles::button::unselected),
        )
        .push(
            button(Text::new(ctx.i18n.tr("nav-replay-intro")).size(typography::CAPTION))
                .on_press(Message::ReplayIntro)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::primary),
        );

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::XS, spacing::LG])
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_buttons_map_to_section_events() {
        for section in Section::ALL {
            assert_eq!(
                update(&Message::Show(section)),
                Event::ShowSection(section)
            );
        }
    }

    #[test]
    fn control_messages_map_to_matching_events() {
        assert_eq!(update(&Message::ReplayIntro), Event::ReplayIntro);
        assert_eq!(update(&Message::CycleTheme), Event::CycleTheme);
        assert_eq!(update(&Message::CycleLanguage), Event::CycleLanguage);
    }

    #[test]
    fn view_renders_for_every_active_section() {
        let i18n = I18n::default();
        for active in Section::ALL {
            let _element = view(ViewContext {
                i18n: &i18n,
                active,
                theme_mode: ThemeMode::Dark,
            });
        }
    }
}
