// SPDX-License-Identifier: MPL-2.0
//! Virtual time harness for driving a sequencer without real timers.

use super::clock::{Clock, ManualClock};
use super::jitter::Jitter;
use super::{Event, Sequencer, SequencerError, Step, TimerToken, Wakeup};
use std::collections::BTreeMap;
use std::time::Duration;

/// Stands in for the host's timer service.
///
/// Wakeups are queued by deadline. [`advance`](Self::advance) moves the shared
/// [`ManualClock`] forward one deadline at a time and delivers each due token,
/// so timers armed while advancing are honored inside the same window.
/// Cancelled runs keep their queued tokens; delivering them is counted in
/// [`stale_deliveries`](Self::stale_deliveries).
#[derive(Debug, Default)]
pub struct VirtualTimeline {
    clock: ManualClock,
    pending: BTreeMap<(Duration, u64), TimerToken>,
    seq: u64,
    stale: usize,
}

impl VirtualTimeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the timeline clock, for the sequencer under test.
    #[must_use]
    pub fn clock(&self) -> ManualClock {
        self.clock.clone()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn schedule(&mut self, wakeup: Wakeup) {
        let deadline = self.now() + wakeup.after;
        self.pending.insert((deadline, self.seq), wakeup.token);
        self.seq += 1;
    }

    /// Queues the step's wakeup, if any, and hands back its events.
    pub fn apply(&mut self, step: Step) -> Vec<Event> {
        if let Some(wakeup) = step.wakeup {
            self.schedule(wakeup);
        }
        step.events
    }

    /// Number of timers still queued.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Timers delivered after their run stopped accepting them.
    #[must_use]
    pub fn stale_deliveries(&self) -> usize {
        self.stale
    }

    /// Moves time forward by `by`, firing every timer that falls due.
    pub fn advance<C: Clock, J: Jitter>(
        &mut self,
        sequencer: &mut Sequencer<C, J>,
        by: Duration,
    ) -> Vec<Event> {
        let target = self.now() + by;
        let mut events = Vec::new();

        while let Some(entry) = self.pending.first_entry() {
            let (deadline, _) = *entry.key();
            if deadline > target {
                break;
            }
            let token = entry.remove();
            self.clock.set(deadline);
            match sequencer.fire(token) {
                Ok(step) => events.extend(self.apply(step)),
                Err(SequencerError::StaleCallback) => self.stale += 1,
                Err(err) => log::debug!("virtual timer rejected: {err}"),
            }
        }

        self.clock.set(target);
        events
    }

    /// Advances until nothing is queued or `limit` of virtual time has
    /// passed. Returns the events produced along the way.
    pub fn run_until_idle<C: Clock, J: Jitter>(
        &mut self,
        sequencer: &mut Sequencer<C, J>,
        limit: Duration,
    ) -> Vec<Event> {
        let stop = self.now() + limit;
        let mut events = Vec::new();
        while let Some((&(deadline, _), _)) = self.pending.first_key_value() {
            if deadline > stop {
                break;
            }
            let by = deadline.saturating_sub(self.now());
            events.extend(self.advance(sequencer, by));
        }
        events
    }
}
