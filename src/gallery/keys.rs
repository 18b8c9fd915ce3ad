// SPDX-License-Identifier: MPL-2.0
//! Keyboard bindings for the project detail view.

use super::carousel::{CarouselNavigator, Identified};
use iced::keyboard::{self, key::Named};

/// Navigation request derived from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Close,
}

/// Maps a pressed key to a gallery command.
///
/// ArrowRight steps forward, ArrowLeft steps back, Escape closes the detail
/// view. Every other key is ignored.
#[must_use]
pub fn command_for(key: &keyboard::Key) -> Option<Command> {
    match key {
        keyboard::Key::Named(Named::ArrowRight) => Some(Command::Next),
        keyboard::Key::Named(Named::ArrowLeft) => Some(Command::Previous),
        keyboard::Key::Named(Named::Escape) => Some(Command::Close),
        _ => None,
    }
}

impl Command {
    /// Runs the command against the navigator.
    pub fn apply<T: Identified>(self, nav: &mut CarouselNavigator<T>) {
        match self {
            Command::Next => {
                nav.next();
            }
            Command::Previous => {
                nav.prev();
            }
            Command::Close => nav.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::PROJECTS;

    #[test]
    fn arrows_and_escape_are_bound() {
        assert_eq!(
            command_for(&keyboard::Key::Named(Named::ArrowRight)),
            Some(Command::Next)
        );
        assert_eq!(
            command_for(&keyboard::Key::Named(Named::ArrowLeft)),
            Some(Command::Previous)
        );
        assert_eq!(
            command_for(&keyboard::Key::Named(Named::Escape)),
            Some(Command::Close)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(command_for(&keyboard::Key::Named(Named::ArrowUp)), None);
        assert_eq!(command_for(&keyboard::Key::Character("n".into())), None);
    }

    #[test]
    fn commands_drive_the_navigator() {
        let mut nav = CarouselNavigator::new(PROJECTS);
        nav.select(&"6").expect("project 6 exists");

        Command::Next.apply(&mut nav);
        assert_eq!(nav.selected_id(), Some("1"));
        Command::Previous.apply(&mut nav);
        assert_eq!(nav.selected_id(), Some("6"));
        Command::Close.apply(&mut nav);
        assert!(!nav.is_open());
    }

    #[test]
    fn commands_without_selection_change_nothing() {
        let mut nav = CarouselNavigator::new(PROJECTS);
        Command::Next.apply(&mut nav);
        Command::Previous.apply(&mut nav);
        assert!(!nav.is_open());
    }
}
