// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the intro and the
//! portfolio.
//!
//! The `App` struct wires together the domains (intro sequencer, gallery,
//! chat, localization, settings) and translates messages into side effects
//! like config persistence, clipboard writes or chat requests.

pub mod config;
mod message;
pub mod paths;
mod persistence;
pub mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{Screen, Section};

use crate::chat::{self as chat_service, ChatService};
use crate::gallery::{CarouselNavigator, Project, PROJECTS};
use crate::i18n::fluent::I18n;
use crate::sequencer::StageDefinition;
use crate::ui::theming::ThemeMode;
use crate::ui::{about, chat, intro};
use config::{defaults, Config};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    section: Section,
    config: Config,
    theme_mode: ThemeMode,
    /// Live intro run, present only while the intro screen is up.
    intro: Option<intro::State>,
    /// Script replayed by every intro run.
    intro_stages: Arc<[StageDefinition]>,
    gallery: CarouselNavigator<Project>,
    about_tab: about::Tab,
    chat: chat::State,
    chat_service: Arc<dyn ChatService>,
    /// Fluent key of the config or script load warning, if any.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("section", &self.section)
            .field("project_open", &self.gallery.selected_id())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(defaults::WINDOW_DEFAULT_WIDTH, defaults::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            defaults::MIN_WINDOW_WIDTH,
            defaults::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an Fn boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Portfolio,
            section: Section::Hero,
            config: Config::default(),
            theme_mode: ThemeMode::System,
            intro: None,
            intro_stages: defaults::DEFAULT_INTRO_SCRIPT.stages(),
            gallery: CarouselNavigator::new(PROJECTS.to_vec()),
            about_tab: about::Tab::default(),
            chat: chat::State::default(),
            chat_service: Arc::new(chat_service::OfflineService),
            warning: None,
        }
    }
}

impl App {
    /// Loads settings, resolves the intro script and starts the intro
    /// unless it is disabled or skipped from the CLI.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let (intro_stages, script_warning) = match flags.intro {
            Some(script) => (script.stages(), None),
            None => config.intro.stages(),
        };

        let play_intro = !flags.skip_intro
            && config
                .intro
                .enabled
                .unwrap_or(defaults::DEFAULT_INTRO_ENABLED);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            intro_stages,
            chat_service: chat_service::service_from_config(&config.chat),
            warning: config_warning.or(script_warning),
            config,
            ..Self::default()
        };

        let task = if play_intro {
            app.start_intro()
        } else {
            Task::none()
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            section: &mut self.section,
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            intro: &mut self.intro,
            intro_stages: &self.intro_stages,
            gallery: &mut self.gallery,
            about_tab: &mut self.about_tab,
            chat: &mut self.chat,
            chat_service: &self.chat_service,
        }
    }

    fn start_intro(&mut self) -> Task<Message> {
        update::start_intro(&mut self.update_context())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match (self.screen, self.gallery.selected()) {
            (Screen::Intro, _) => format!("{} - {app_name}", self.i18n.tr("intro-window-title")),
            (Screen::Portfolio, Some(project)) => format!("{} - {app_name}", project.title),
            (Screen::Portfolio, None) => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.screen, self.gallery.is_open())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::DismissWarning = message {
            self.warning = None;
            return Task::none();
        }

        let mut ctx = self.update_context();
        match message {
            Message::Intro(intro_message) => update::handle_intro_message(&mut ctx, intro_message),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, &navbar_message)
            }
            Message::Hero(hero_message) => update::handle_hero_message(&mut ctx, &hero_message),
            Message::Projects(projects_message) => {
                update::handle_projects_message(&mut ctx, projects_message)
            }
            Message::About(about_message) => update::handle_about_message(&mut ctx, &about_message),
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, &contact_message)
            }
            Message::Chat(chat_message) => update::handle_chat_message(&mut ctx, chat_message),
            Message::ChatReplied(reply) => {
                if reply.fallback {
                    log::debug!("chat answered with the offline fallback");
                }
                ctx.chat.session.receive(reply);
                Task::none()
            }
            Message::DismissWarning => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            section: self.section,
            theme_mode: self.theme_mode,
            intro: self.intro.as_ref(),
            gallery: &self.gallery,
            about_tab: self.about_tab,
            chat: &self.chat,
            warning: self.warning.as_deref(),
        })
    }
}
