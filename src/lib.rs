// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio showcase built with the Iced GUI
//! framework.
//!
//! It opens on a scripted terminal intro, then presents a project gallery
//! with a keyboard-driven detail carousel, an about section, contact cards
//! and a small chat terminal backed by Gemini when an API key is configured.
//!
//! The intro is driven by [`sequencer::Sequencer`], a sans-IO state machine
//! that can run on the wall clock or on a [`sequencer::VirtualTimeline`].

pub mod app;
pub mod chat;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod sequencer;
pub mod ui;
