// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::chat::Reply;
use crate::sequencer::IntroScript;
use crate::ui::{about, chat, contact, hero, intro, navbar, projects};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Intro(intro::Message),
    Navbar(navbar::Message),
    Hero(hero::Message),
    Projects(projects::Message),
    About(about::Message),
    Contact(contact::Message),
    Chat(chat::Message),
    /// The chat service answered (or fell back offline).
    ChatReplied(Reply),
    /// Hide the load warning banner.
    DismissWarning,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Intro script to play instead of the configured one.
    pub intro: Option<IntroScript>,
    /// Start directly on the portfolio.
    pub skip_intro: bool,
}
