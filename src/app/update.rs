// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each component message is passed to its component, and the returned
//! `Event` is turned into app-level state changes and tasks here.

use super::config::Config;
use super::persistence;
use super::screen::{Screen, Section};
use super::Message;
use crate::chat::ChatService;
use crate::gallery::{CarouselNavigator, Project};
use crate::i18n::fluent::I18n;
use crate::sequencer::StageDefinition;
use crate::ui::about;
use crate::ui::chat::{self, Event as ChatEvent};
use crate::ui::contact::{self, Event as ContactEvent};
use crate::ui::hero::{self, Event as HeroEvent};
use crate::ui::intro::{self, Event as IntroEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::projects::{self, Event as ProjectsEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::sync::Arc;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub section: &'a mut Section,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub intro: &'a mut Option<intro::State>,
    pub intro_stages: &'a Arc<[StageDefinition]>,
    pub gallery: &'a mut CarouselNavigator<Project>,
    pub about_tab: &'a mut about::Tab,
    pub chat: &'a mut chat::State,
    pub chat_service: &'a Arc<dyn ChatService>,
}

/// Starts a fresh intro run, cancelling any run still on screen.
pub fn start_intro(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(previous) = ctx.intro.as_mut() {
        previous.cancel();
    }
    ctx.gallery.clear();

    let (state, task) = intro::State::start(Arc::clone(ctx.intro_stages));
    if state.is_finished() {
        // Empty script
        *ctx.intro = None;
        *ctx.screen = Screen::Portfolio;
        return Task::none();
    }
    *ctx.intro = Some(state);
    *ctx.screen = Screen::Intro;
    task.map(Message::Intro)
}

/// Leaves the intro for the portfolio, landing on the hero section.
fn finish_intro(ctx: &mut UpdateContext<'_>) {
    if let Some(mut state) = ctx.intro.take() {
        state.cancel();
    }
    *ctx.screen = Screen::Portfolio;
    *ctx.section = Section::Hero;
}

pub fn handle_intro_message(ctx: &mut UpdateContext<'_>, message: intro::Message) -> Task<Message> {
    let Some(state) = ctx.intro.as_mut() else {
        // Timers from a finished or skipped run can still land here
        log::debug!("intro message after teardown: {message:?}");
        return Task::none();
    };

    let (event, task) = state.update(message);
    match event {
        IntroEvent::None => task.map(Message::Intro),
        IntroEvent::Finished | IntroEvent::Skipped => {
            finish_intro(ctx);
            Task::none()
        }
    }
}

/// Switches the visible section. The project modal only lives on the
/// projects section.
pub fn show_section(ctx: &mut UpdateContext<'_>, section: Section) -> Task<Message> {
    if section != Section::Projects {
        ctx.gallery.clear();
    }
    *ctx.section = section;
    Task::none()
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: &navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::ShowSection(section) => show_section(ctx, section),
        NavbarEvent::ReplayIntro => start_intro(ctx),
        NavbarEvent::CycleTheme => {
            let next = ctx.theme_mode.next();
            persistence::apply_theme_change(ctx.config, ctx.theme_mode, next);
            Task::none()
        }
        NavbarEvent::CycleLanguage => {
            if let Some(locale) = persistence::next_locale(ctx.i18n) {
                persistence::apply_language_change(ctx.config, ctx.i18n, locale);
            }
            Task::none()
        }
    }
}

pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: &hero::Message) -> Task<Message> {
    match hero::update(message) {
        HeroEvent::ShowSection(section) => show_section(ctx, section),
    }
}

pub fn handle_projects_message(
    ctx: &mut UpdateContext<'_>,
    message: projects::Message,
) -> Task<Message> {
    match projects::update(ctx.gallery, message) {
        ProjectsEvent::None => Task::none(),
        ProjectsEvent::CopyToClipboard(text) => iced::clipboard::write(text),
    }
}

pub fn handle_about_message(ctx: &mut UpdateContext<'_>, message: &about::Message) -> Task<Message> {
    about::update(message, ctx.about_tab);
    Task::none()
}

pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: &contact::Message,
) -> Task<Message> {
    match contact::update(message) {
        ContactEvent::ShowProjects => show_section(ctx, Section::Projects),
        ContactEvent::CopyToClipboard(text) => iced::clipboard::write(text),
    }
}

pub fn handle_chat_message(ctx: &mut UpdateContext<'_>, message: chat::Message) -> Task<Message> {
    match ctx.chat.update(message) {
        ChatEvent::None => Task::none(),
        ChatEvent::Send(question) => {
            let reply = ctx.chat_service.send(&question);
            Task::perform(reply, Message::ChatReplied)
        }
    }
}
