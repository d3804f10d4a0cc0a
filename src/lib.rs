// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a video playlist player built with the Iced GUI framework.
//!
//! It renders a sidebar list of catalog entries next to a player pane with
//! custom transport controls (play/pause, previous/next, mute, timeline
//! scrubbing, theater mode, fullscreen) and demonstrates internationalization
//! with Fluent, user preference management, and modular UI design.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod player;
pub mod playlist;
pub mod ui;
