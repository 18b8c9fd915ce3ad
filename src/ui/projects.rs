// SPDX-License-Identifier: MPL-2.0
//! Project gallery grid and the detail modal.
//!
//! The open project is whatever the [`CarouselNavigator`] has selected; the
//! modal is rendered as a separate layer so the app can stack it above the
//! rest of the page.

use crate::gallery::keys::Command;
use crate::gallery::{CarouselNavigator, Project};
use crate::i18n::fluent::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, container, mouse_area, opaque, Column, Row, Space, Text};
use iced::{alignment::Vertical, Element, Font, Length};

const CARDS_PER_ROW: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Open(&'static str),
    Key(Command),
    CopyLink(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    CopyToClipboard(String),
}

pub fn update(nav: &mut CarouselNavigator<Project>, message: Message) -> Event {
    match message {
        Message::Open(id) => {
            if let Err(err) = nav.select(&id) {
                log::warn!("cannot open project: {err}");
            }
            Event::None
        }
        Message::Key(command) => {
            command.apply(nav);
            Event::None
        }
        Message::CopyLink(link) => Event::CopyToClipboard(link.to_string()),
    }
}

/// Render the project card grid.
pub fn view<'a>(i18n: &'a I18n, nav: &'a CarouselNavigator<Project>) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::MD);
    for chunk in nav.items().chunks(CARDS_PER_ROW) {
        let row = chunk
            .iter()
            .fold(Row::new().spacing(spacing::MD), |row, project| {
                row.push(card(project))
            });
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(components::heading(
            i18n.tr("projects-eyebrow"),
            i18n.tr("projects-title"),
        ))
        .push(grid)
        .into()
}

fn card(project: &Project) -> Element<'_, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(project.year).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(components::chip_rows(project.tags, CARDS_PER_ROW));

    let body = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(Text::new(project.title).size(typography::TITLE_MD))
        .push(
            Text::new(project.tech_stack)
                .size(typography::BODY_SM)
                .font(Font::MONOSPACE),
        );

    button(body)
        .on_press(Message::Open(project.id))
        .width(Length::Fixed(sizing::PROJECT_CARD_WIDTH))
        .height(Length::Fixed(sizing::PROJECT_CARD_HEIGHT))
        .padding(spacing::MD)
        .style(styles::button::card)
        .into()
}

/// Render the detail modal for the selected project, if any.
///
/// Clicking the backdrop closes it.
pub fn modal<'a>(
    i18n: &'a I18n,
    nav: &'a CarouselNavigator<Project>,
) -> Option<Element<'a, Message>> {
    let project = nav.selected()?;
    let position = nav.selected_index().map_or(0, |index| index + 1);

    let counter = Text::new(format!("{position} / {}", nav.len()))
        .size(typography::CAPTION)
        .font(Font::MONOSPACE);

    let top = Row::new()
        .align_y(Vertical::Center)
        .push(counter)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("projects-close")).size(typography::CAPTION))
                .on_press(Message::Key(Command::Close))
                .style(styles::button::unselected),
        );

    let mut details = Column::new()
        .spacing(spacing::SM)
        .push(top)
        .push(Text::new(project.title).size(typography::TITLE_LG))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(Text::new(project.year).size(typography::BODY_SM))
                .push(
                    Text::new(project.tech_stack)
                        .size(typography::BODY_SM)
                        .font(Font::MONOSPACE),
                ),
        )
        .push(components::chip_rows(project.tags, 4))
        .push(Text::new(project.description).size(typography::BODY));

    details = match project.link {
        Some(link) => details.push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(
                    Text::new(link)
                        .size(typography::BODY_SM)
                        .font(Font::MONOSPACE),
                )
                .push(
                    button(Text::new(i18n.tr("projects-copy-link")).size(typography::CAPTION))
                        .on_press(Message::CopyLink(link))
                        .style(styles::button::primary),
                ),
        ),
        None => details.push(
            Text::new(i18n.tr("projects-no-link")).size(typography::BODY_SM),
        ),
    };

    let arrows = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new("←"))
                .on_press(Message::Key(Command::Previous))
                .style(styles::button::floating),
        )
        .push(Space::new().width(Length::Fill))
        .push(Text::new(i18n.tr("projects-keys-hint")).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("→"))
                .on_press(Message::Key(Command::Next))
                .style(styles::button::floating),
        );

    let dialog = container(details.push(arrows))
        .max_width(sizing::MODAL_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::panel);

    let layer = opaque(
        mouse_area(center(opaque(dialog)).style(styles::container::modal_backdrop))
            .on_press(Message::Key(Command::Close)),
    );
    Some(layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::PROJECTS;

    fn navigator() -> CarouselNavigator<Project> {
        CarouselNavigator::new(PROJECTS.to_vec())
    }

    #[test]
    fn open_selects_the_project() {
        let mut nav = navigator();
        assert_eq!(update(&mut nav, Message::Open("3")), Event::None);
        assert_eq!(nav.selected_id(), Some("3"));
    }

    #[test]
    fn open_with_unknown_id_keeps_the_modal_closed() {
        let mut nav = navigator();
        let _ = update(&mut nav, Message::Open("missing"));
        assert!(!nav.is_open());
    }

    #[test]
    fn keys_drive_the_carousel() {
        let mut nav = navigator();
        let _ = update(&mut nav, Message::Open("6"));
        let _ = update(&mut nav, Message::Key(Command::Next));
        assert_eq!(nav.selected_id(), Some("1"));
        let _ = update(&mut nav, Message::Key(Command::Previous));
        assert_eq!(nav.selected_id(), Some("6"));
        let _ = update(&mut nav, Message::Key(Command::Close));
        assert!(!nav.is_open());
    }

    #[test]
    fn copy_link_requests_clipboard_write() {
        let mut nav = navigator();
        assert_eq!(
            update(&mut nav, Message::CopyLink("https://github.com/Vesni")),
            Event::CopyToClipboard("https://github.com/Vesni".to_string())
        );
    }

    #[test]
    fn modal_only_exists_while_a_project_is_selected() {
        let i18n = I18n::default();
        let mut nav = navigator();
        assert!(modal(&i18n, &nav).is_none());
        let _ = update(&mut nav, Message::Open("5"));
        assert!(modal(&i18n, &nav).is_some());
    }
}
