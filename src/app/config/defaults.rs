// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Intro**: Whether the intro plays and which script it uses
//! - **Chat**: Chat widget availability
//! - **Window**: Initial and minimum window size

use crate::sequencer::IntroScript;

// ==========================================================================
// Intro Defaults
// ==========================================================================

/// Whether the intro overlay plays on startup.
pub const DEFAULT_INTRO_ENABLED: bool = true;

/// Script played when none is configured.
pub const DEFAULT_INTRO_SCRIPT: IntroScript = IntroScript::Champion;

// ==========================================================================
// Chat Defaults
// ==========================================================================

/// Whether the chat widget tries to reach a backend.
pub const DEFAULT_CHAT_ENABLED: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

const _: () = {
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
