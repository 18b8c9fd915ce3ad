// SPDX-License-Identifier: MPL-2.0
//! Intro overlay driven by the stage sequencer.
//!
//! The component owns one [`Sequencer`] run. Every [`Step`] it gets back is
//! turned into at most one sleeping [`Task`] that answers with
//! [`Message::Timer`]; expired tokens from a cancelled or replaced run are
//! rejected by the sequencer and dropped here.

use crate::gallery::catalog::OWNER;
use crate::i18n::fluent::I18n;
use crate::sequencer::{
    Sequencer, SequencerError, StageDefinition, StageEffect, Step, TimerToken,
};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, progress_bar, text_input, Column, Row, Space, Text};
use iced::{alignment::Horizontal, Element, Font, Length, Task};
use std::sync::Arc;

/// Messages handled by the intro.
#[derive(Debug, Clone)]
pub enum Message {
    Timer(TimerToken),
    InputChanged(String),
    Submit,
    Skip,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The run reached its terminal stage.
    Finished,
    /// The user asked to leave the intro early.
    Skipped,
}

/// Live intro run plus the text typed into the confirmation prompt.
#[derive(Debug)]
pub struct State {
    sequencer: Sequencer,
    input: String,
}

impl State {
    /// Starts a fresh run over `stages`.
    ///
    /// An empty script completes immediately; check [`State::is_finished`].
    pub fn start(stages: Arc<[StageDefinition]>) -> (Self, Task<Message>) {
        let mut sequencer = Sequencer::with_system_clock(stages);
        let step = sequencer.start();
        let state = Self {
            sequencer,
            input: String::new(),
        };
        let (_, task) = react(step);
        (state, task)
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::Timer(token) => match self.sequencer.fire(token) {
                Ok(step) => react(step),
                Err(SequencerError::StaleCallback) => (Event::None, Task::none()),
                Err(err) => {
                    log::warn!("intro timer rejected: {err}");
                    (Event::None, Task::none())
                }
            },
            Message::InputChanged(value) => {
                self.input = value;
                (Event::None, Task::none())
            }
            Message::Submit => {
                if !self.sequencer.awaiting_input() {
                    return (Event::None, Task::none());
                }
                let input = std::mem::take(&mut self.input);
                match self.sequencer.submit(&input) {
                    Ok(step) => react(step),
                    // The notice is already in the run log
                    Err(SequencerError::InvalidCommand { input }) => {
                        log::debug!("intro prompt rejected '{input}'");
                        (Event::None, Task::none())
                    }
                    Err(err) => {
                        log::debug!("intro submit ignored: {err}");
                        (Event::None, Task::none())
                    }
                }
            }
            Message::Skip => {
                self.sequencer.cancel();
                (Event::Skipped, Task::none())
            }
        }
    }

    /// Cancels the run. Timers still in flight become stale.
    pub fn cancel(&mut self) {
        self.sequencer.cancel();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.sequencer.is_complete()
    }

    #[must_use]
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Turns a step into the parent event and the timer task for its wakeup.
fn react(step: Step) -> (Event, Task<Message>) {
    let event = if step.is_completed() {
        Event::Finished
    } else {
        Event::None
    };
    let task = match step.wakeup {
        Some(wakeup) => {
            let token = wakeup.token;
            let after = wakeup.after;
            Task::perform(
                async move { tokio::time::sleep(after).await },
                move |()| Message::Timer(token),
            )
        }
        None => Task::none(),
    };
    (event, task)
}

/// Render the terminal window and, on the last stage, the owner's logo.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let sequencer = &state.sequencer;
    let run = sequencer.run();
    let stage = sequencer.current_stage();

    let stage_label = stage.map_or_else(String::new, |stage| stage.name.to_uppercase());
    let title_bar = Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new(format!("{} {stage_label}", i18n.tr("intro-terminal-title")))
                .size(typography::CAPTION)
                .font(Font::MONOSPACE),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("intro-skip")).size(typography::CAPTION))
                .on_press(Message::Skip)
                .style(styles::button::unselected),
        );

    let mut body = Column::new().spacing(spacing::XXS);
    for line in run.revealed_lines() {
        body = body.push(terminal_line(line.as_str()));
    }

    if matches!(stage.map(|s| &s.effect), Some(StageEffect::Typewriter { .. })) {
        body = body.push(terminal_line(format!("> {}_", run.typed())));
    }

    if matches!(stage.map(|s| &s.effect), Some(StageEffect::Progress { .. })) {
        body = body
            .push(progress_bar(0.0..=100.0, f32::from(run.progress())))
            .push(terminal_line(format!("{}%", run.progress())));
    }

    if sequencer.awaiting_input() {
        body = body.push(
            text_input(&i18n.tr("intro-prompt-placeholder"), &state.input)
                .on_input(Message::InputChanged)
                .on_submit(Message::Submit)
                .font(Font::MONOSPACE)
                .size(typography::BODY),
        );
    }

    let terminal = container(
        Column::new()
            .spacing(spacing::SM)
            .push(title_bar)
            .push(body),
    )
    .width(Length::Fixed(sizing::TERMINAL_WIDTH))
    .height(Length::Fixed(sizing::TERMINAL_HEIGHT))
    .padding(spacing::MD)
    .style(styles::container::terminal);

    let is_last_stage = !sequencer.stages().is_empty()
        && sequencer.current_stage_index() + 1 == sequencer.stages().len();

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(terminal);

    if is_last_stage {
        content = content.push(
            Text::new(OWNER)
                .size(typography::DISPLAY)
                .font(Font::MONOSPACE)
                .color(palette::MINT_500),
        );
    }

    content = content.push(
        Text::new(i18n.tr("intro-skip-hint"))
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    );

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::intro_backdrop)
        .into()
}

fn terminal_line<'a>(line: impl Into<String>) -> Element<'a, Message> {
    Text::new(line.into())
        .size(typography::BODY)
        .font(Font::MONOSPACE)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::{Delay, IntroScript};

    fn gated_script() -> Arc<[StageDefinition]> {
        Arc::from(vec![StageDefinition::confirm(
            "confirm",
            ["yes"],
            Some("Proceed? [y/N]"),
            Delay::ZERO,
        )])
    }

    #[test]
    fn empty_script_finishes_on_start() {
        let (state, _task) = State::start(Arc::from(Vec::new()));
        assert!(state.is_finished());
    }

    #[test]
    fn skip_cancels_the_run() {
        let (mut state, _task) = State::start(IntroScript::Champion.stages());
        let (event, _task) = state.update(Message::Skip);
        assert_eq!(event, Event::Skipped);
        assert!(state.sequencer().is_cancelled());
        assert!(!state.is_finished());
    }

    #[test]
    fn rejected_input_is_logged_and_clears_the_field() {
        let (mut state, _task) = State::start(gated_script());
        let _ = state.update(Message::InputChanged("nope".into()));
        let (event, _task) = state.update(Message::Submit);

        assert_eq!(event, Event::None);
        assert_eq!(state.input(), "");
        assert!(state.sequencer().awaiting_input());
        let lines = state.sequencer().run().revealed_lines();
        assert_eq!(lines.last().map(String::as_str), Some("invalid command: nope"));
    }

    #[test]
    fn accepted_input_leaves_the_prompt() {
        let (mut state, _task) = State::start(gated_script());
        let _ = state.update(Message::InputChanged(" YES ".into()));
        let _ = state.update(Message::Submit);

        assert!(!state.sequencer().awaiting_input());
        let lines = state.sequencer().run().revealed_lines();
        assert_eq!(lines.last().map(String::as_str), Some("> YES"));
    }

    #[test]
    fn submit_outside_a_prompt_is_ignored() {
        let (mut state, _task) = State::start(IntroScript::BootLog.stages());
        let _ = state.update(Message::InputChanged("yes".into()));
        let (event, _task) = state.update(Message::Submit);
        assert_eq!(event, Event::None);
        assert_eq!(state.input(), "yes");
    }

    #[test]
    fn view_renders_every_builtin_script() {
        let i18n = I18n::default();
        for script in IntroScript::ALL {
            let (state, _task) = State::start(script.stages());
            let _element = view(&state, &i18n);
        }
    }
}
