// SPDX-License-Identifier: MPL-2.0
//! About section: bio, skill matrix and the Tech/Life highlight tabs.

use crate::gallery::catalog::{Highlight, BIO, LIFE_HIGHLIGHTS, SKILLS, TECH_HIGHLIGHTS};
use crate::i18n::fluent::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, rule, Column, Container, Row, Text},
    Element, Font, Length,
};

/// Highlight tab shown next to the skill matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Tech,
    Life,
}

impl Tab {
    fn label_key(self) -> &'static str {
        match self {
            Tab::Tech => "about-tab-tech",
            Tab::Life => "about-tab-life",
        }
    }

    fn highlights(self) -> &'static [Highlight] {
        match self {
            Tab::Tech => &TECH_HIGHLIGHTS,
            Tab::Life => &LIFE_HIGHLIGHTS,
        }
    }
}

/// Contextual data needed to render the about section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tab: Tab,
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
}

pub fn update(message: &Message, tab: &mut Tab) {
    match message {
        Message::SelectTab(selected) => *tab = *selected,
    }
}

/// Render the about section.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let bio = BIO.iter().fold(Column::new().spacing(spacing::SM), |col, paragraph| {
        col.push(Text::new(*paragraph).size(typography::BODY))
    });

    let matrix = build_section(
        ctx.i18n.tr("about-skills-title"),
        Column::new()
            .spacing(spacing::SM)
            .push(skill_group(ctx.i18n.tr("about-skills-mastered"), SKILLS.mastered))
            .push(skill_group(
                ctx.i18n.tr("about-skills-intermediate"),
                SKILLS.intermediate,
            ))
            .push(skill_group(ctx.i18n.tr("about-skills-tools"), SKILLS.tools))
            .into(),
    );

    let tabs = [Tab::Tech, Tab::Life]
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, tab| {
            let style = if tab == ctx.tab {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(Text::new(ctx.i18n.tr(tab.label_key())).size(typography::BODY_SM))
                    .on_press(Message::SelectTab(tab))
                    .style(style),
            )
        });

    let highlights = ctx
        .tab
        .highlights()
        .iter()
        .fold(Column::new().spacing(spacing::XS), |col, highlight| {
            col.push(build_highlight(highlight))
        });

    let tab_panel = build_section(
        ctx.i18n.tr("about-highlights-title"),
        Column::new()
            .spacing(spacing::SM)
            .push(tabs)
            .push(highlights)
            .into(),
    );

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(components::heading(
            ctx.i18n.tr("about-eyebrow"),
            ctx.i18n.tr("about-title"),
        ))
        .push(bio)
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(matrix)
                .push(tab_panel),
        )
        .into()
}

fn skill_group<'a>(title: String, skills: &'static [&'static str]) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(title)
                .size(typography::CAPTION)
                .font(Font::MONOSPACE),
        )
        .push(components::chip_rows(skills, 4))
        .into()
}

fn build_highlight<'a>(highlight: &Highlight) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(format!("• {}", highlight.label)).size(typography::BODY));
    if let Some(link) = highlight.link {
        row = row.push(
            Text::new(link)
                .size(typography::CAPTION)
                .font(Font::MONOSPACE),
        );
    }
    row.into()
}

/// Titled panel, same layout for both columns.
fn build_section(title: String, content: Element<'_, Message>) -> Element<'_, Message> {
    let inner = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::FillPortion(1))
        .style(styles::container::panel)
        .into()
}
