// SPDX-License-Identifier: MPL-2.0
//! Contact section: service cards, social links and the disclosure note.
//!
//! There is no browser to hand links to, so mail and social targets are
//! shown as text and copied to the clipboard on request.

use crate::gallery::catalog::{Service, ServiceAction, DISCLOSURE, EMAIL, SERVICES, SOCIALS};
use crate::i18n::fluent::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Row, Text};
use iced::{alignment::Vertical, Element, Font, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Service(ServiceAction),
    CopySocial(&'static str),
    CopyEmail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ShowProjects,
    CopyToClipboard(String),
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Service(ServiceAction::ShowProjects) => Event::ShowProjects,
        Message::Service(action) => Event::CopyToClipboard(action.target()),
        Message::CopySocial(url) => Event::CopyToClipboard((*url).to_string()),
        Message::CopyEmail => Event::CopyToClipboard(EMAIL.to_string()),
    }
}

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let services = SERVICES
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, service| {
            row.push(service_card(service))
        });

    let socials = SOCIALS
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |col, social| {
            col.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(Vertical::Center)
                    .push(
                        button(Text::new(social.name).size(typography::BODY_SM))
                            .on_press(Message::CopySocial(social.url))
                            .style(styles::button::unselected),
                    )
                    .push(
                        Text::new(social.url)
                            .size(typography::CAPTION)
                            .font(Font::MONOSPACE),
                    ),
            )
        });

    let email = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(EMAIL).size(typography::BODY_LG).font(Font::MONOSPACE))
        .push(
            button(Text::new(i18n.tr("contact-copy-email")).size(typography::CAPTION))
                .on_press(Message::CopyEmail)
                .style(styles::button::primary),
        );

    let disclosure = container(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr("contact-disclosure-title")).size(typography::BODY_SM))
            .push(Text::new(DISCLOSURE).size(typography::CAPTION)),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::warning);

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(components::heading(
            i18n.tr("contact-eyebrow"),
            i18n.tr("contact-title"),
        ))
        .push(services)
        .push(email)
        .push(Text::new(i18n.tr("contact-socials")).size(typography::TITLE_SM))
        .push(socials)
        .push(Text::new(i18n.tr("contact-copy-hint")).size(typography::CAPTION))
        .push(disclosure)
        .into()
}

fn service_card(service: &Service) -> Element<'_, Message> {
    let features = service
        .features
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |col, feature| {
            col.push(Text::new(format!("✓ {feature}")).size(typography::BODY_SM))
        });

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(service.title).size(typography::TITLE_MD))
            .push(Text::new(service.description).size(typography::BODY))
            .push(features)
            .push(
                button(Text::new(service.action_label).size(typography::BODY_SM))
                    .on_press(Message::Service(service.action))
                    .style(styles::button::primary),
            ),
    )
    .padding(spacing::MD)
    .width(Length::FillPortion(1))
    .style(styles::container::panel)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_dev_card_jumps_to_projects() {
        assert_eq!(
            update(&Message::Service(ServiceAction::ShowProjects)),
            Event::ShowProjects
        );
    }

    #[test]
    fn mail_cards_copy_a_mailto_link() {
        let event = update(&Message::Service(ServiceAction::Mail {
            subject: "Security Audit",
        }));
        assert_eq!(
            event,
            Event::CopyToClipboard(format!("mailto:{EMAIL}?subject=Security%20Audit"))
        );
    }

    #[test]
    fn socials_and_email_copy_their_target() {
        assert_eq!(
            update(&Message::CopySocial("https://github.com/Vesni")),
            Event::CopyToClipboard("https://github.com/Vesni".into())
        );
        assert_eq!(
            update(&Message::CopyEmail),
            Event::CopyToClipboard(EMAIL.into())
        );
    }
}
