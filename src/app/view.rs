// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The intro screen is a single full-window layer. The portfolio screen is a
//! stack: the page itself, the floating chat, and the project modal on top
//! when one is open.

use super::screen::{Screen, Section};
use super::Message;
use crate::gallery::{CarouselNavigator, Project};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::theming::ThemeMode;
use crate::ui::{chat, contact, hero, intro, projects, styles};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, scrollable, Column, Container, Row, Space, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub section: Section,
    pub theme_mode: ThemeMode,
    pub intro: Option<&'a intro::State>,
    pub gallery: &'a CarouselNavigator<Project>,
    pub about_tab: about::Tab,
    pub chat: &'a chat::State,
    /// Fluent key of a load warning to show under the navbar.
    pub warning: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match (ctx.screen, ctx.intro) {
        (Screen::Intro, Some(state)) => intro::view(state, ctx.i18n).map(Message::Intro),
        _ => view_portfolio(&ctx),
    }
}

fn view_portfolio<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.section,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let section: Element<'a, Message> = match ctx.section {
        Section::Hero => hero::view(ctx.i18n).map(Message::Hero),
        Section::Projects => projects::view(ctx.i18n, ctx.gallery).map(Message::Projects),
        Section::About => about::view(AboutViewContext {
            i18n: ctx.i18n,
            tab: ctx.about_tab,
        })
        .map(Message::About),
        Section::Contact => contact::view(ctx.i18n).map(Message::Contact),
    };

    let mut page = Column::new().push(navbar);
    if let Some(key) = ctx.warning {
        page = page.push(warning_banner(ctx.i18n, key));
    }
    page = page.push(
        scrollable(section)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let base = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let chat_layer = container(chat::view(ctx.chat, ctx.i18n).map(Message::Chat))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom);

    let mut stack = Stack::new().push(base).push(chat_layer);
    if let Some(modal) = projects::modal(ctx.i18n, ctx.gallery) {
        stack = stack.push(modal.map(Message::Projects));
    }
    stack.into()
}

fn warning_banner<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr(key)).size(typography::BODY_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("warning-dismiss")).size(typography::CAPTION))
                .on_press(Message::DismissWarning)
                .style(styles::button::unselected),
        );

    container(container(content).padding(spacing::XS).style(styles::container::warning))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::LG])
        .into()
}
