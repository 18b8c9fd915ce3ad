// SPDX-License-Identifier: MPL-2.0
//! Scripted intro sequencer.
//!
//! A [`Sequencer`] walks an ordered list of [`StageDefinition`]s exactly
//! once. It never sleeps and never spawns: every step returns a [`Step`]
//! holding the events produced and, at most, one [`Wakeup`] the host must
//! arm. When the timer expires the host hands the [`TimerToken`] back through
//! [`Sequencer::fire`]. Tokens from a cancelled, finished or superseded run
//! fail the liveness check and are rejected with
//! [`SequencerError::StaleCallback`].
//!
//! In the application the wakeups become `Task`s sleeping on tokio timers.
//! Tests drive the same object with a [`VirtualTimeline`].

pub mod clock;
pub mod completion;
pub mod jitter;
pub mod run;
pub mod scripts;
pub mod stage;
pub mod timeline;

pub use clock::{Clock, ManualClock, SystemClock};
pub use completion::Completion;
pub use jitter::{FixedJitter, Jitter, RandomJitter};
pub use run::SequencerRun;
pub use scripts::IntroScript;
pub use stage::{Delay, StageDefinition, StageEffect};
pub use timeline::VirtualTimeline;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Prefix of the log line appended when a confirmation token is rejected.
pub const INVALID_COMMAND_NOTICE: &str = "invalid command";

static NEXT_RUN_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one armed timer of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    run: u64,
    serial: u64,
}

/// A timer the host must arm: call [`Sequencer::fire`] with `token` once
/// `after` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wakeup {
    pub token: TimerToken,
    pub after: Duration,
}

/// Observable effects of a step, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    StageEntered { index: usize, name: String },
    LineAppended(String),
    Typed(char),
    ProgressChanged(u8),
    Completed,
}

/// Result of driving the sequencer once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Step {
    pub wakeup: Option<Wakeup>,
    pub events: Vec<Event>,
}

impl Step {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.events.contains(&Event::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequencerError {
    /// A timer fired for a run that was cancelled, finished, or superseded.
    #[error("timer fired for a run that is no longer live")]
    StaleCallback,

    /// The active confirmation stage did not recognize the input.
    #[error("invalid command: {input}")]
    InvalidCommand { input: String },

    /// Input was submitted while no stage was waiting for it.
    #[error("no stage is waiting for input")]
    NotAwaitingInput,
}

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Done,
    Cancelled,
}

/// Position inside the active stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// Next item of a log/typewriter reveal, or the next progress tick.
    Revealing(usize),
    /// Reveal finished; waiting out the stage duration.
    Holding,
    AwaitingInput,
}

/// One-shot stage script runner.
pub struct Sequencer<C = SystemClock, J = RandomJitter> {
    stages: Arc<[StageDefinition]>,
    clock: C,
    jitter: J,
    run: SequencerRun,
    phase: Phase,
    cursor: Cursor,
    run_id: u64,
    next_serial: u64,
    armed: Option<TimerToken>,
    completion: Completion,
}

impl Sequencer<SystemClock, RandomJitter> {
    /// Sequencer on wall-clock time with entropy-seeded jitter.
    #[must_use]
    pub fn with_system_clock(stages: impl Into<Arc<[StageDefinition]>>) -> Self {
        Self::new(stages, SystemClock::new(), RandomJitter::new())
    }
}

impl<C: Clock, J: Jitter> Sequencer<C, J> {
    #[must_use]
    pub fn new(stages: impl Into<Arc<[StageDefinition]>>, clock: C, jitter: J) -> Self {
        Self {
            stages: stages.into(),
            clock,
            jitter,
            run: SequencerRun::default(),
            phase: Phase::Idle,
            cursor: Cursor::Holding,
            run_id: NEXT_RUN_ID.fetch_add(1, Ordering::Relaxed),
            next_serial: 0,
            armed: None,
            completion: Completion::none(),
        }
    }

    /// Attaches the completion signal for this run.
    #[must_use]
    pub fn on_complete(mut self, completion: Completion) -> Self {
        self.completion = completion;
        self
    }

    /// Enters the first stage. Calling it again is a no-op.
    pub fn start(&mut self) -> Step {
        let mut step = Step::default();
        if self.phase != Phase::Idle {
            return step;
        }
        self.phase = Phase::Running;
        if self.stages.is_empty() {
            self.finish(&mut step);
        } else {
            self.enter(0, &mut step);
        }
        step
    }

    /// Delivers an expired timer.
    pub fn fire(&mut self, token: TimerToken) -> Result<Step, SequencerError> {
        if self.phase != Phase::Running || self.armed != Some(token) {
            log::debug!("dropping stale intro timer {token:?} ({:?})", self.phase);
            return Err(SequencerError::StaleCallback);
        }
        self.armed = None;

        let mut step = Step::default();
        let stages = Arc::clone(&self.stages);
        let stage = &stages[self.run.current_stage_index];

        match (self.cursor, &stage.effect) {
            (Cursor::Revealing(next), StageEffect::Log { lines, line_delay }) => {
                if let Some(line) = lines.get(next) {
                    self.run.revealed_lines.push(line.clone());
                    step.events.push(Event::LineAppended(line.clone()));
                }
                self.continue_reveal(next + 1, lines.len(), *line_delay, stage.duration, &mut step);
            }
            (Cursor::Revealing(next), StageEffect::Typewriter { text, char_delay }) => {
                if let Some(ch) = text.chars().nth(next) {
                    self.run.typed.push(ch);
                    step.events.push(Event::Typed(ch));
                }
                self.continue_reveal(
                    next + 1,
                    text.chars().count(),
                    *char_delay,
                    stage.duration,
                    &mut step,
                );
            }
            (Cursor::Revealing(ticks), StageEffect::Progress { step: range, tick }) => {
                let lo = u64::from(range[0].min(range[1]).max(1));
                let hi = u64::from(range[0].max(range[1]).max(1));
                let increment = self.jitter.pick(lo, hi).clamp(lo, hi);
                let increment = u8::try_from(increment).unwrap_or(u8::MAX);
                self.run.progress = self.run.progress.saturating_add(increment).min(100);
                step.events.push(Event::ProgressChanged(self.run.progress));
                if self.run.progress >= 100 {
                    self.cursor = Cursor::Holding;
                    let hold = stage.duration.sample(&mut self.jitter);
                    self.arm(hold, &mut step);
                } else {
                    self.cursor = Cursor::Revealing(ticks + 1);
                    let wait = tick.sample(&mut self.jitter);
                    self.arm(wait, &mut step);
                }
            }
            _ => self.advance(&mut step),
        }

        Ok(step)
    }

    /// Submits a confirmation token to an input-gated stage.
    ///
    /// Recognized tokens are echoed to the log and the stage then holds for
    /// its duration. Anything else appends an "invalid command" notice and
    /// leaves the run where it was.
    pub fn submit(&mut self, input: &str) -> Result<Step, SequencerError> {
        if self.phase != Phase::Running || self.cursor != Cursor::AwaitingInput {
            return Err(SequencerError::NotAwaitingInput);
        }

        let stages = Arc::clone(&self.stages);
        let stage = &stages[self.run.current_stage_index];
        let StageEffect::Confirm { accept, .. } = &stage.effect else {
            return Err(SequencerError::NotAwaitingInput);
        };

        let input = input.trim();
        let mut step = Step::default();
        if accept.iter().any(|token| token.eq_ignore_ascii_case(input)) {
            self.append_line(format!("> {input}"), &mut step);
            self.cursor = Cursor::Holding;
            let hold = stage.duration.sample(&mut self.jitter);
            self.arm(hold, &mut step);
            Ok(step)
        } else {
            self.append_line(format!("{INVALID_COMMAND_NOTICE}: {input}"), &mut step);
            Err(SequencerError::InvalidCommand {
                input: input.to_string(),
            })
        }
    }

    /// Tears the run down. The armed timer becomes stale and the completion
    /// is dropped without firing. Finished runs are left as they are.
    pub fn cancel(&mut self) {
        if matches!(self.phase, Phase::Idle | Phase::Running) {
            log::debug!(
                "intro run {} cancelled at stage {}",
                self.run_id,
                self.run.current_stage_index
            );
            self.phase = Phase::Cancelled;
            self.armed = None;
            self.completion.disarm();
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn run(&self) -> &SequencerRun {
        &self.run
    }

    #[must_use]
    pub fn stages(&self) -> &[StageDefinition] {
        &self.stages
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Done
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.phase == Phase::Cancelled
    }

    #[must_use]
    pub fn current_stage_index(&self) -> usize {
        self.run.current_stage_index
    }

    /// Active stage, or `None` before start and after the run ends.
    #[must_use]
    pub fn current_stage(&self) -> Option<&StageDefinition> {
        match self.phase {
            Phase::Running => self.stages.get(self.run.current_stage_index),
            _ => None,
        }
    }

    /// Token of the timer the host is expected to deliver next, if any.
    #[must_use]
    pub fn armed_timer(&self) -> Option<TimerToken> {
        self.armed
    }

    #[must_use]
    pub fn awaiting_input(&self) -> bool {
        self.phase == Phase::Running && self.cursor == Cursor::AwaitingInput
    }

    #[must_use]
    pub fn elapsed_in_stage(&self) -> Duration {
        self.clock.now().saturating_sub(self.run.entered_at)
    }

    /// Worst-case length of an uninterrupted run, or `None` when a stage
    /// waits on input.
    #[must_use]
    pub fn max_run_time(&self) -> Option<Duration> {
        self.stages
            .iter()
            .map(StageDefinition::max_duration)
            .sum::<Option<Duration>>()
    }

    fn enter(&mut self, index: usize, step: &mut Step) {
        let stages = Arc::clone(&self.stages);
        let stage = &stages[index];

        self.run.current_stage_index = index;
        self.run.entered_at = self.clock.now();
        log::debug!("intro run {} entered stage {index} '{}'", self.run_id, stage.name);
        step.events.push(Event::StageEntered {
            index,
            name: stage.name.clone(),
        });

        match &stage.effect {
            StageEffect::Hold => {
                self.cursor = Cursor::Holding;
                let hold = stage.duration.sample(&mut self.jitter);
                self.arm(hold, step);
            }
            StageEffect::Log { lines, line_delay } => {
                self.continue_reveal(0, lines.len(), *line_delay, stage.duration, step);
            }
            StageEffect::Typewriter { text, char_delay } => {
                self.run.typed.clear();
                self.continue_reveal(0, text.chars().count(), *char_delay, stage.duration, step);
            }
            StageEffect::Progress { tick, .. } => {
                self.run.progress = 0;
                self.cursor = Cursor::Revealing(0);
                let wait = tick.sample(&mut self.jitter);
                self.arm(wait, step);
            }
            StageEffect::Confirm { prompt, .. } => {
                if let Some(prompt) = prompt {
                    self.append_line(prompt.clone(), step);
                }
                self.cursor = Cursor::AwaitingInput;
            }
        }
    }

    /// Schedules reveal item `next` of `total`, or the closing hold once
    /// every item is out.
    fn continue_reveal(
        &mut self,
        next: usize,
        total: usize,
        delay: Delay,
        hold: Delay,
        step: &mut Step,
    ) {
        if next < total {
            self.cursor = Cursor::Revealing(next);
            let wait = delay.sample(&mut self.jitter);
            self.arm(wait, step);
        } else {
            self.cursor = Cursor::Holding;
            let wait = hold.sample(&mut self.jitter);
            self.arm(wait, step);
        }
    }

    fn advance(&mut self, step: &mut Step) {
        let next = self.run.current_stage_index + 1;
        if next < self.stages.len() {
            self.enter(next, step);
        } else {
            self.finish(step);
        }
    }

    fn finish(&mut self, step: &mut Step) {
        self.phase = Phase::Done;
        self.cursor = Cursor::Holding;
        self.armed = None;
        self.run.current_stage_index = self.stages.len();
        self.run.complete = true;
        log::debug!("intro run {} complete", self.run_id);
        self.completion.fire();
        step.events.push(Event::Completed);
    }

    fn arm(&mut self, after: Duration, step: &mut Step) {
        let token = TimerToken {
            run: self.run_id,
            serial: self.next_serial,
        };
        self.next_serial += 1;
        self.armed = Some(token);
        step.wakeup = Some(Wakeup { token, after });
    }

    fn append_line(&mut self, line: String, step: &mut Step) {
        step.events.push(Event::LineAppended(line.clone()));
        self.run.revealed_lines.push(line);
    }
}

impl<C, J> std::fmt::Debug for Sequencer<C, J> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequencer")
            .field("run_id", &self.run_id)
            .field("phase", &self.phase)
            .field("stage", &self.run.current_stage_index)
            .field("stages", &self.stages.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn counter() -> (Arc<AtomicUsize>, Completion) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        let completion = Completion::new(move || {
            handle.fetch_add(1, Ordering::SeqCst);
        });
        (count, completion)
    }

    fn three_holds() -> Vec<StageDefinition> {
        vec![
            StageDefinition::hold("boot", Delay::fixed_ms(500)),
            StageDefinition::hold("hack", Delay::fixed_ms(500)),
            StageDefinition::hold("reveal", Delay::fixed_ms(500)),
        ]
    }

    fn entered(events: &[Event]) -> Vec<String> {
        events
            .iter()
            .filter_map(|event| match event {
                Event::StageEntered { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn start_enters_first_stage_and_arms_its_timer() {
        let mut seq = Sequencer::new(three_holds(), ManualClock::new(), FixedJitter::Lowest);
        let step = seq.start();

        assert_eq!(seq.phase(), Phase::Running);
        assert_eq!(seq.current_stage_index(), 0);
        assert_eq!(
            step.events,
            vec![Event::StageEntered {
                index: 0,
                name: "boot".into()
            }]
        );
        assert_eq!(step.wakeup.map(|w| w.after), Some(ms(500)));
    }

    #[test]
    fn second_start_is_a_no_op() {
        let mut seq = Sequencer::new(three_holds(), ManualClock::new(), FixedJitter::Lowest);
        let _ = seq.start();
        let again = seq.start();
        assert!(again.events.is_empty());
        assert!(again.wakeup.is_none());
    }

    #[test]
    fn holds_advance_in_order_then_complete_once() {
        let (count, completion) = counter();
        let mut timeline = VirtualTimeline::new();
        let mut seq = Sequencer::new(three_holds(), timeline.clock(), FixedJitter::Lowest)
            .on_complete(completion);

        let mut events = timeline.apply(seq.start());
        events.extend(timeline.advance(&mut seq, ms(1600)));

        assert_eq!(entered(&events), ["boot", "hack", "reveal"]);
        assert_eq!(
            events.iter().filter(|e| **e == Event::Completed).count(),
            1
        );
        assert_eq!(events.last(), Some(&Event::Completed));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(seq.is_complete());
        assert_eq!(seq.current_stage_index(), 3);
        assert!(seq.run().is_complete());
    }

    #[test]
    fn nothing_completes_before_last_exit_condition() {
        let (count, completion) = counter();
        let mut timeline = VirtualTimeline::new();
        let mut seq = Sequencer::new(three_holds(), timeline.clock(), FixedJitter::Lowest)
            .on_complete(completion);

        timeline.apply(seq.start());
        timeline.advance(&mut seq, ms(1499));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(seq.current_stage_index(), 2);

        timeline.advance(&mut seq, ms(1));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cancel_mid_run_never_completes() {
        let (count, completion) = counter();
        let mut timeline = VirtualTimeline::new();
        let mut seq = Sequencer::new(three_holds(), timeline.clock(), FixedJitter::Lowest)
            .on_complete(completion);

        timeline.apply(seq.start());
        timeline.advance(&mut seq, ms(700));
        seq.cancel();
        let total = seq.max_run_time().expect("no gated stages");
        let events = timeline.advance(&mut seq, total * 2);

        assert!(events.is_empty());
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(seq.is_cancelled());
        assert_eq!(timeline.stale_deliveries(), 1);
    }

    fn mixed_script() -> Vec<StageDefinition> {
        vec![
            StageDefinition::log(
                "boot",
                ["[ OK ] kernel", "[ OK ] mounts", "[ OK ] daemon"],
                Delay::fixed_ms(60),
                Delay::fixed_ms(100),
            ),
            StageDefinition::typewriter("blank", "", Delay::fixed_ms(40), Delay::fixed_ms(50)),
            StageDefinition::progress("scan", [20, 35], Delay::fixed_ms(30), Delay::fixed_ms(80)),
            StageDefinition::hold("reveal", Delay::fixed_ms(300)),
        ]
    }

    #[test]
    fn cancel_at_any_millisecond_before_completion_never_completes() {
        let bound = Sequencer::new(mixed_script(), ManualClock::new(), FixedJitter::Lowest)
            .max_run_time()
            .expect("no gated stages");
        let bound = u64::try_from(bound.as_millis()).expect("bound fits in u64");

        let mut saw_cancelled = false;
        let mut saw_finished = false;
        for at in 0..=bound {
            let (count, completion) = counter();
            let mut timeline = VirtualTimeline::new();
            let mut seq = Sequencer::new(mixed_script(), timeline.clock(), FixedJitter::Lowest)
                .on_complete(completion);

            timeline.apply(seq.start());
            timeline.advance(&mut seq, ms(at));
            let finished = seq.is_complete();
            seq.cancel();
            timeline.advance(&mut seq, ms(60_000));

            assert_eq!(
                count.load(Ordering::SeqCst),
                usize::from(finished),
                "cancelled at {at}ms"
            );
            assert_eq!(seq.is_complete(), finished, "cancelled at {at}ms");
            saw_cancelled |= !finished;
            saw_finished |= finished;
        }
        assert!(saw_cancelled && saw_finished);
    }

    #[test]
    fn cancel_while_awaiting_input_never_completes() {
        let (count, completion) = counter();
        let mut timeline = VirtualTimeline::new();
        let mut seq = Sequencer::new(
            vec![
                StageDefinition::hold("boot", Delay::fixed_ms(100)),
                StageDefinition::confirm("gate", ["y"], Some("continue?"), Delay::fixed_ms(200)),
            ],
            timeline.clock(),
            FixedJitter::Lowest,
        )
        .on_complete(completion);

        timeline.apply(seq.start());
        timeline.advance(&mut seq, ms(150));
        assert!(seq.awaiting_input());

        seq.cancel();
        assert!(!seq.awaiting_input());
        assert!(matches!(seq.submit("y"), Err(SequencerError::NotAwaitingInput)));
        timeline.advance(&mut seq, ms(60_000));

        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(seq.is_cancelled());
        assert!(!seq.is_complete());
    }

    #[test]
    fn stale_token_after_cancel_is_rejected() {
        let mut seq = Sequencer::new(three_holds(), ManualClock::new(), FixedJitter::Lowest);
        let wakeup = seq.start().wakeup.expect("first stage arms a timer");
        seq.cancel();

        assert_eq!(seq.fire(wakeup.token), Err(SequencerError::StaleCallback));
        assert_eq!(seq.current_stage_index(), 0);
    }

    #[test]
    fn token_from_another_run_is_rejected() {
        let mut first = Sequencer::new(three_holds(), ManualClock::new(), FixedJitter::Lowest);
        let mut second = Sequencer::new(three_holds(), ManualClock::new(), FixedJitter::Lowest);
        let foreign = first.start().wakeup.expect("armed");
        let _ = second.start();

        assert_eq!(second.fire(foreign.token), Err(SequencerError::StaleCallback));
    }

    #[test]
    fn superseded_token_is_rejected() {
        let mut seq = Sequencer::new(three_holds(), ManualClock::new(), FixedJitter::Lowest);
        let first = seq.start().wakeup.expect("armed");
        let _ = seq.fire(first.token).expect("live token");

        assert_eq!(seq.fire(first.token), Err(SequencerError::StaleCallback));
    }

    #[test]
    fn fire_after_completion_is_rejected() {
        let mut seq = Sequencer::new(
            vec![StageDefinition::hold("only", Delay::fixed_ms(10))],
            ManualClock::new(),
            FixedJitter::Lowest,
        );
        let token = seq.start().wakeup.expect("armed").token;
        let step = seq.fire(token).expect("live token");
        assert!(step.is_completed());
        assert_eq!(seq.fire(token), Err(SequencerError::StaleCallback));
    }

    #[test]
    fn empty_script_completes_on_start() {
        let (count, completion) = counter();
        let mut seq = Sequencer::new(Vec::new(), ManualClock::new(), FixedJitter::Lowest)
            .on_complete(completion);

        let step = seq.start();
        assert_eq!(step.events, vec![Event::Completed]);
        assert!(step.wakeup.is_none());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn log_lines_are_appended_one_at_a_time_in_order() {
        let mut timeline = VirtualTimeline::new();
        let stages = vec![StageDefinition::log(
            "boot",
            ["one", "two", "three"],
            Delay::fixed_ms(100),
            Delay::fixed_ms(400),
        )];
        let mut seq = Sequencer::new(stages, timeline.clock(), FixedJitter::Lowest);
        timeline.apply(seq.start());

        timeline.advance(&mut seq, ms(100));
        assert_eq!(seq.run().revealed_lines(), ["one".to_string()]);
        timeline.advance(&mut seq, ms(200));
        assert_eq!(
            seq.run().revealed_lines(),
            ["one".to_string(), "two".to_string(), "three".to_string()]
        );
        assert!(!seq.is_complete());

        timeline.advance(&mut seq, ms(400));
        assert!(seq.is_complete());
    }

    #[test]
    fn randomized_line_delays_follow_the_jitter_seam() {
        let mut timeline = VirtualTimeline::new();
        let mut picks = [50_u64, 300, 20].into_iter();
        let jitter = move |lo: u64, _hi: u64| picks.next().unwrap_or(lo);
        let stages = vec![StageDefinition::log(
            "boot",
            ["a", "b"],
            Delay::between_ms(10, 500),
            Delay::between_ms(10, 500),
        )];
        let mut seq = Sequencer::new(stages, timeline.clock(), jitter);

        let first = seq.start().wakeup.expect("armed");
        assert_eq!(first.after, ms(50));
        let second = seq.fire(first.token).expect("live").wakeup.expect("armed");
        assert_eq!(second.after, ms(300));
        let hold = seq.fire(second.token).expect("live").wakeup.expect("armed");
        assert_eq!(hold.after, ms(20));
    }

    #[test]
    fn typewriter_reveals_characters() {
        let mut timeline = VirtualTimeline::new();
        let stages = vec![
            StageDefinition::typewriter("type", "héllo", Delay::fixed_ms(80), Delay::fixed_ms(400)),
            StageDefinition::hold("ball", Delay::fixed_ms(600)),
        ];
        let mut seq = Sequencer::new(stages, timeline.clock(), FixedJitter::Lowest);
        timeline.apply(seq.start());

        timeline.advance(&mut seq, ms(160));
        assert_eq!(seq.run().typed(), "hé");
        timeline.advance(&mut seq, ms(240));
        assert_eq!(seq.run().typed(), "héllo");
        assert_eq!(seq.current_stage_index(), 0);

        timeline.advance(&mut seq, ms(400));
        assert_eq!(seq.current_stage_index(), 1);
        // Typed text stays visible into the following stage.
        assert_eq!(seq.run().typed(), "héllo");
    }

    #[test]
    fn progress_accumulates_to_one_hundred() {
        let mut timeline = VirtualTimeline::new();
        let stages = vec![StageDefinition::progress(
            "scan",
            [30, 40],
            Delay::fixed_ms(50),
            Delay::fixed_ms(100),
        )];
        let mut seq = Sequencer::new(stages, timeline.clock(), FixedJitter::Lowest);
        timeline.apply(seq.start());

        let events = timeline.advance(&mut seq, ms(200));
        let values: Vec<u8> = events
            .iter()
            .filter_map(|e| match e {
                Event::ProgressChanged(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(values, vec![30, 60, 90, 100]);
        assert!(!seq.is_complete());

        timeline.advance(&mut seq, ms(100));
        assert!(seq.is_complete());
    }

    #[test]
    fn elapsed_in_stage_tracks_the_clock() {
        let mut timeline = VirtualTimeline::new();
        let mut seq = Sequencer::new(three_holds(), timeline.clock(), FixedJitter::Lowest);
        timeline.apply(seq.start());

        timeline.advance(&mut seq, ms(650));
        assert_eq!(seq.current_stage_index(), 1);
        assert_eq!(seq.elapsed_in_stage(), ms(150));
    }

    fn gated() -> Vec<StageDefinition> {
        vec![
            StageDefinition::confirm("gate", ["y", "yes"], Some("unlock? [y/N]"), Delay::fixed_ms(200)),
            StageDefinition::hold("reveal", Delay::fixed_ms(300)),
        ]
    }

    #[test]
    fn gated_stage_waits_indefinitely() {
        let mut timeline = VirtualTimeline::new();
        let mut seq = Sequencer::new(gated(), timeline.clock(), FixedJitter::Lowest);
        let step = seq.start();
        assert!(step.wakeup.is_none());
        assert!(seq.awaiting_input());
        assert_eq!(seq.run().revealed_lines(), ["unlock? [y/N]".to_string()]);

        timeline.advance(&mut seq, Duration::from_secs(3600));
        assert!(seq.awaiting_input());
        assert_eq!(seq.current_stage_index(), 0);
        assert_eq!(seq.max_run_time(), None);
    }

    #[test]
    fn unrecognized_token_appends_notice_and_keeps_state() {
        let mut seq = Sequencer::new(gated(), ManualClock::new(), FixedJitter::Lowest);
        let _ = seq.start();

        let err = seq.submit("  nope ").expect_err("should reject");
        assert_eq!(
            err,
            SequencerError::InvalidCommand {
                input: "nope".into()
            }
        );
        assert!(seq.awaiting_input());
        assert_eq!(
            seq.run().revealed_lines().last().map(String::as_str),
            Some("invalid command: nope")
        );
    }

    #[test]
    fn recognized_token_releases_the_gate() {
        let (count, completion) = counter();
        let mut timeline = VirtualTimeline::new();
        let mut seq =
            Sequencer::new(gated(), timeline.clock(), FixedJitter::Lowest).on_complete(completion);
        timeline.apply(seq.start());

        let step = seq.submit("YES").expect("accepted");
        assert_eq!(step.events, vec![Event::LineAppended("> YES".into())]);
        assert!(!seq.awaiting_input());
        timeline.apply(step);

        timeline.advance(&mut seq, ms(500));
        assert!(seq.is_complete());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn submit_outside_gate_is_refused() {
        let mut seq = Sequencer::new(three_holds(), ManualClock::new(), FixedJitter::Lowest);
        assert_eq!(seq.submit("y"), Err(SequencerError::NotAwaitingInput));
        let _ = seq.start();
        assert_eq!(seq.submit("y"), Err(SequencerError::NotAwaitingInput));
        assert!(seq.run().revealed_lines().is_empty());
    }

    #[test]
    fn cancel_after_completion_keeps_done() {
        let mut timeline = VirtualTimeline::new();
        let mut seq = Sequencer::new(three_holds(), timeline.clock(), FixedJitter::Lowest);
        timeline.apply(seq.start());
        timeline.advance(&mut seq, ms(1500));
        seq.cancel();
        assert!(seq.is_complete());
    }

    #[test]
    fn max_run_time_sums_stage_bounds() {
        let seq = Sequencer::new(three_holds(), ManualClock::new(), FixedJitter::Lowest);
        assert_eq!(seq.max_run_time(), Some(ms(1500)));
    }
}
