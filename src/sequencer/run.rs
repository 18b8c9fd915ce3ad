// SPDX-License-Identifier: MPL-2.0
//! Observable state of one sequencer run.

use std::time::Duration;

/// Progress of a single run through a script.
///
/// The sequencer is the only writer. Hosts read it to render the intro:
/// revealed log lines, typed text and the progress percentage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequencerRun {
    pub(crate) current_stage_index: usize,
    pub(crate) entered_at: Duration,
    pub(crate) revealed_lines: Vec<String>,
    pub(crate) typed: String,
    pub(crate) progress: u8,
    pub(crate) complete: bool,
}

impl SequencerRun {
    /// Index of the active stage. Equals the script length once the run is
    /// complete.
    #[must_use]
    pub fn current_stage_index(&self) -> usize {
        self.current_stage_index
    }

    /// Clock reading at which the active stage was entered.
    #[must_use]
    pub fn entered_at(&self) -> Duration {
        self.entered_at
    }

    /// Log lines revealed so far, oldest first. Only ever grows.
    #[must_use]
    pub fn revealed_lines(&self) -> &[String] {
        &self.revealed_lines
    }

    /// Text revealed by the most recent typewriter stage.
    #[must_use]
    pub fn typed(&self) -> &str {
        &self.typed
    }

    /// Percentage reached by the most recent progress stage.
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
