// SPDX-License-Identifier: MPL-2.0
//! Landing section: name, role chips, tagline and the topic marquee.

use crate::app::screen::Section;
use crate::gallery::catalog::{HERO_CHIPS, HERO_TAGLINE, MARQUEE, OWNER};
use crate::i18n::fluent::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{alignment::Horizontal, Element, Font, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Show(Section),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ShowSection(Section),
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Show(section) => Event::ShowSection(*section),
    }
}

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let chips = HERO_CHIPS
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, label| {
            row.push(components::chip(label))
        });

    let marquee = Text::new(MARQUEE.join("  ✦  "))
        .size(typography::BODY_SM)
        .font(Font::MONOSPACE)
        .color(palette::TEAL_500);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("hero-view-work")))
                .on_press(Message::Show(Section::Projects))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("hero-contact")))
                .on_press(Message::Show(Section::Contact))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::unselected),
        );

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .push(chips)
        .push(
            Text::new(OWNER)
                .size(typography::DISPLAY)
                .font(Font::MONOSPACE),
        )
        .push(Text::new(i18n.tr("hero-subtitle")).size(typography::TITLE_SM))
        .push(
            Text::new(HERO_TAGLINE)
                .size(typography::BODY)
                .center(),
        )
        .push(actions)
        .push(marquee)
        .into()
}
