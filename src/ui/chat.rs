// SPDX-License-Identifier: MPL-2.0
//! Floating chat terminal: a launcher button and the conversation panel.

use crate::chat::{ChatSession, Role};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text_input, Column, Row, Space, Text};
use iced::{alignment::Vertical, Element, Font, Length};

/// Chat widget state. The panel may be closed while a reply is pending.
#[derive(Debug, Default)]
pub struct State {
    pub session: ChatSession,
    open: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
    InputChanged(String),
    Send,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A question left the input and should go to the chat service.
    Send(String),
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Toggle => {
                self.open = !self.open;
                Event::None
            }
            Message::InputChanged(value) => {
                self.session.set_input(value);
                Event::None
            }
            Message::Send => self.session.begin_send().map_or(Event::None, Event::Send),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Render the launcher and, when open, the panel above it.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let launcher_label = if state.open {
        i18n.tr("chat-close")
    } else {
        i18n.tr("chat-open")
    };
    let launcher = button(Text::new(launcher_label).size(typography::BODY_SM))
        .on_press(Message::Toggle)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::floating);

    let mut layer = Column::new()
        .spacing(spacing::SM)
        .align_x(iced::alignment::Horizontal::Right);

    if state.open {
        layer = layer.push(panel(state, i18n));
    }

    layer.push(launcher).into()
}

fn panel<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let session = &state.session;

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(i18n.tr("chat-title"))
                .size(typography::BODY)
                .font(Font::MONOSPACE),
        )
        .push(Space::new().width(Length::Fill));

    let mut log = Column::new().spacing(spacing::XS);
    for message in session.messages() {
        let from_user = message.role == Role::User;
        let bubble = container(Text::new(message.text.as_str()).size(typography::BODY_SM))
            .padding(spacing::XS)
            .style(styles::container::bubble(from_user, message.is_error));
        let row = if from_user {
            Row::new().push(Space::new().width(Length::Fill)).push(bubble)
        } else {
            Row::new().push(bubble).push(Space::new().width(Length::Fill))
        };
        log = log.push(row);
    }
    if session.is_pending() {
        log = log.push(
            Text::new(i18n.tr("chat-thinking"))
                .size(typography::CAPTION)
                .font(Font::MONOSPACE),
        );
    }

    let mut input = text_input(&i18n.tr("chat-placeholder"), session.input())
        .size(typography::BODY_SM);
    // No on_input while pending keeps the field disabled
    if !session.is_pending() {
        input = input
            .on_input(Message::InputChanged)
            .on_submit(Message::Send);
    }
    let send = button(Text::new(i18n.tr("chat-send")).size(typography::BODY_SM))
        .on_press_maybe(session.can_send().then_some(Message::Send))
        .style(styles::button::primary);

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(scrollable(log).height(Length::Fill))
            .push(Row::new().spacing(spacing::XS).push(input).push(send)),
    )
    .width(Length::Fixed(sizing::CHAT_PANEL_WIDTH))
    .height(Length::Fixed(sizing::CHAT_PANEL_HEIGHT))
    .padding(spacing::SM)
    .style(styles::container::panel)
    .into()
}
