// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events are routed according to the current screen: Escape skips
//! the intro, and while a project is open the arrow keys and Escape drive
//! the detail carousel.

use super::{Message, Screen};
use crate::gallery::keys;
use crate::ui::{intro, projects};
use iced::keyboard::{self, key::Named};
use iced::{event, Subscription};

/// Creates the event subscription for the current screen.
pub fn create_event_subscription(screen: Screen, project_open: bool) -> Subscription<Message> {
    match (screen, project_open) {
        (Screen::Intro, _) => event::listen_with(|event, _status, _window| {
            if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(Named::Escape),
                ..
            }) = &event
            {
                return Some(Message::Intro(intro::Message::Skip));
            }
            None
        }),
        (Screen::Portfolio, true) => event::listen_with(|event, status, _window| {
            // Keys typed into the chat input stay there
            if status == event::Status::Captured {
                return None;
            }
            if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event {
                return keys::command_for(key)
                    .map(|command| Message::Projects(projects::Message::Key(command)));
            }
            None
        }),
        (Screen::Portfolio, false) => Subscription::none(),
    }
}
