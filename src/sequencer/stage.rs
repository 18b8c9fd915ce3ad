// SPDX-License-Identifier: MPL-2.0
//! Stage definitions for intro scripts.
//!
//! A script is an ordered slice of [`StageDefinition`]s. Definitions are plain
//! data so scripts can be declared in code or loaded from TOML:
//!
//! ```toml
//! [[stage]]
//! name = "boot"
//! duration_ms = [300, 600]
//! effect = { kind = "log", lines = ["[ OK ] mounting /portfolio"], line_delay_ms = 120 }
//! ```

use super::jitter::Jitter;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A wait length in milliseconds, either fixed or sampled from a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Delay {
    Fixed(u64),
    /// Inclusive range; bounds may be given in either order.
    Between(u64, u64),
}

impl Delay {
    pub const ZERO: Delay = Delay::Fixed(0);

    #[must_use]
    pub fn fixed_ms(ms: u64) -> Self {
        Delay::Fixed(ms)
    }

    #[must_use]
    pub fn between_ms(min: u64, max: u64) -> Self {
        Delay::Between(min.min(max), min.max(max))
    }

    fn bounds(self) -> (u64, u64) {
        match self {
            Delay::Fixed(ms) => (ms, ms),
            Delay::Between(a, b) => (a.min(b), a.max(b)),
        }
    }

    /// Resolves the delay to a concrete duration. Fixed delays never consult
    /// the jitter source.
    pub fn sample<J: Jitter + ?Sized>(self, jitter: &mut J) -> Duration {
        let (lo, hi) = self.bounds();
        let ms = if lo == hi {
            lo
        } else {
            jitter.pick(lo, hi).clamp(lo, hi)
        };
        Duration::from_millis(ms)
    }

    /// Longest duration this delay can resolve to.
    #[must_use]
    pub fn max(self) -> Duration {
        Duration::from_millis(self.bounds().1)
    }
}

impl Default for Delay {
    fn default() -> Self {
        Delay::ZERO
    }
}

/// What a stage does while it is active.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StageEffect {
    /// Waits for the stage duration and moves on.
    #[default]
    Hold,

    /// Appends `lines` to the run log one at a time, then holds.
    Log {
        lines: Vec<String>,
        #[serde(rename = "line_delay_ms", default)]
        line_delay: Delay,
    },

    /// Reveals `text` one character at a time, then holds.
    Typewriter {
        text: String,
        #[serde(rename = "char_delay_ms", default)]
        char_delay: Delay,
    },

    /// Accumulates a percentage by a random `step` every `tick` until it
    /// reaches 100, then holds.
    Progress {
        step: [u8; 2],
        #[serde(rename = "tick_ms", default)]
        tick: Delay,
    },

    /// Waits for the user to submit one of the `accept` tokens.
    Confirm {
        accept: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prompt: Option<String>,
    },
}

/// One named entry of an intro script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDefinition {
    pub name: String,

    /// Time spent in the stage, or the hold after its reveal finishes.
    #[serde(rename = "duration_ms", default)]
    pub duration: Delay,

    #[serde(default)]
    pub effect: StageEffect,
}

impl StageDefinition {
    #[must_use]
    pub fn hold(name: impl Into<String>, duration: Delay) -> Self {
        Self {
            name: name.into(),
            duration,
            effect: StageEffect::Hold,
        }
    }

    #[must_use]
    pub fn log<I, S>(name: impl Into<String>, lines: I, line_delay: Delay, hold: Delay) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            duration: hold,
            effect: StageEffect::Log {
                lines: lines.into_iter().map(Into::into).collect(),
                line_delay,
            },
        }
    }

    #[must_use]
    pub fn typewriter(
        name: impl Into<String>,
        text: impl Into<String>,
        char_delay: Delay,
        hold: Delay,
    ) -> Self {
        Self {
            name: name.into(),
            duration: hold,
            effect: StageEffect::Typewriter {
                text: text.into(),
                char_delay,
            },
        }
    }

    #[must_use]
    pub fn progress(name: impl Into<String>, step: [u8; 2], tick: Delay, hold: Delay) -> Self {
        Self {
            name: name.into(),
            duration: hold,
            effect: StageEffect::Progress { step, tick },
        }
    }

    #[must_use]
    pub fn confirm<I, S>(
        name: impl Into<String>,
        accept: I,
        prompt: Option<&str>,
        hold: Delay,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            duration: hold,
            effect: StageEffect::Confirm {
                accept: accept.into_iter().map(Into::into).collect(),
                prompt: prompt.map(str::to_string),
            },
        }
    }

    /// Lines revealed by a log stage; empty for every other effect.
    #[must_use]
    pub fn text_lines(&self) -> &[String] {
        match &self.effect {
            StageEffect::Log { lines, .. } => lines,
            _ => &[],
        }
    }

    /// Whether the stage waits on user input.
    #[must_use]
    pub fn is_gated(&self) -> bool {
        matches!(self.effect, StageEffect::Confirm { .. })
    }

    /// Worst-case time spent in this stage, or `None` for input-gated stages.
    #[must_use]
    pub fn max_duration(&self) -> Option<Duration> {
        let reveal = match &self.effect {
            StageEffect::Hold => Duration::ZERO,
            StageEffect::Log { lines, line_delay } => line_delay.max() * count(lines.len()),
            StageEffect::Typewriter { text, char_delay } => {
                char_delay.max() * count(text.chars().count())
            }
            StageEffect::Progress { step, tick } => {
                let slowest = u32::from(step[0].min(step[1]).max(1));
                tick.max() * 100u32.div_ceil(slowest)
            }
            StageEffect::Confirm { .. } => return None,
        };
        Some(reveal + self.duration.max())
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
