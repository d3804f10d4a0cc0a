// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Player effects are resolved here: navigation effects move the playlist
//! cursor and reload the player, layout effects flip theater mode or drive
//! the window into fullscreen.

use super::{App, Message};
use crate::player;
use crate::ui::list;
use iced::{window, Task};

/// Handles player component messages and resolves the resulting effect.
pub fn handle_player_message(app: &mut App, message: player::Message) -> Task<Message> {
    match app.player.update(message) {
        player::Effect::None => Task::none(),
        player::Effect::ToggleTheaterMode => {
            app.theater_mode = !app.theater_mode;
            Task::none()
        }
        player::Effect::ToggleFullscreen => {
            let desired = !app.fullscreen;
            update_fullscreen_mode(&mut app.fullscreen, app.window_id.as_ref(), desired)
        }
        player::Effect::NextVideo => {
            if let Some(entry) = app.playlist.next() {
                app.player.load(entry, true);
            }
            Task::none()
        }
        player::Effect::PreviousVideo => {
            if let Some(entry) = app.playlist.previous() {
                app.player.load(entry, true);
            }
            Task::none()
        }
        player::Effect::PlaybackEnded => {
            // Auto-advance; at the last entry the player stays parked at the
            // end of the finished video.
            if let Some(entry) = app.playlist.next() {
                app.player.load(entry, true);
            }
            Task::none()
        }
    }
}

/// Handles sidebar list messages.
pub fn handle_list_message(app: &mut App, message: list::Message) -> Task<Message> {
    match message {
        list::Message::Select(id) => {
            if let Some(entry) = app.playlist.select(&id) {
                app.player.load(entry, true);
            }
            Task::none()
        }
    }
}

/// Updates fullscreen mode to the desired state.
///
/// Does nothing until a window id has been observed; the flag only flips
/// together with the actual window mode change.
fn update_fullscreen_mode(
    fullscreen: &mut bool,
    window_id: Option<&window::Id>,
    desired: bool,
) -> Task<Message> {
    if *fullscreen == desired {
        return Task::none();
    }

    let Some(window_id) = window_id else {
        return Task::none();
    };

    *fullscreen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(*window_id, mode)
}
