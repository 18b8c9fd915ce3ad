// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Each component follows the Elm-style "state down, messages up" pattern:
//! a `Message` enum, an `update` that returns an `Event` for the parent, and
//! a `view` fed by borrowed state.
//!
//! # Screens
//!
//! - [`intro`] - Scripted terminal intro driven by the stage sequencer
//! - [`hero`], [`projects`], [`about`], [`contact`] - Portfolio sections
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Section switcher with theme, language and replay controls
//! - [`chat`] - Floating chat terminal
//! - [`components`] - Chips and headings reused across sections
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod chat;
pub mod components;
pub mod contact;
pub mod design_tokens;
pub mod hero;
pub mod intro;
pub mod navbar;
pub mod projects;
pub mod styles;
pub mod theming;
