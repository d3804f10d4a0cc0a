// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The player's media subscription is built by the player itself; this module
//! only listens for native window events so the app can learn its window id
//! and target fullscreen commands at it.

use super::Message;
use iced::{event, Subscription};

/// Listens for window events. Any window event is enough to capture the id.
pub fn window_events() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        iced::Event::Window(_) => Some(Message::WindowEvent(window_id)),
        _ => None,
    })
}
