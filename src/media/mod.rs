// SPDX-License-Identifier: MPL-2.0
//! Media transport for the player.
//!
//! This module models the native media element the player wraps: a handle
//! owned by exactly one player session, exposing a command surface
//! (play/pause/seek/mute) and an event stream (time updates, metadata,
//! play/pause confirmations). The element runs as an async task inside an
//! Iced subscription; dropping the subscription releases the command
//! channel and stops the task.

mod element;

pub use element::{events, Transport, TIME_UPDATE_INTERVAL};

use tokio::sync::mpsc;

/// Description of a media source handed to the player.
///
/// `duration_secs` is the container duration recorded in the catalog; the
/// element surfaces it through [`MediaEvent::MetadataLoaded`] so the player
/// treats duration as unknown until that event arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSource {
    /// Media URL or path.
    pub url: String,
    /// Container duration in seconds.
    pub duration_secs: f64,
}

/// Commands accepted by the media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaCommand {
    /// Start or resume playback. Playing at the end restarts from zero.
    Play,
    /// Pause playback at the current position.
    Pause,
    /// Reposition playback time, clamped to `[0, duration]`.
    Seek(f64),
    /// Set the element's muted flag.
    SetMuted(bool),
}

/// Events emitted by the media element.
#[derive(Debug, Clone)]
pub enum MediaEvent {
    /// Session started; provides the command sender for this session.
    SessionStarted(CommandSender),
    /// Container metadata became available.
    MetadataLoaded {
        /// Total duration in seconds.
        duration_secs: f64,
    },
    /// Periodic playback position notification, in seconds.
    TimeUpdate(f64),
    /// Playback actually started (confirmation of a `Play` command).
    PlaybackStarted,
    /// Playback actually paused (confirmation of a `Pause` command).
    PlaybackPaused,
    /// Playback reached the end of the media.
    PlaybackEnded,
}

/// Subscription identity for one playback session.
///
/// Each loaded source gets a fresh id so Iced tears the previous event
/// stream down and builds a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaSessionId(pub u64);

/// Handle for sending commands to the media element from the UI.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<MediaCommand>,
}

impl CommandSender {
    pub(crate) fn new(tx: mpsc::UnboundedSender<MediaCommand>) -> Self {
        Self { tx }
    }

    /// Sends a command to the element.
    ///
    /// # Errors
    ///
    /// Fails when the element task has already stopped.
    pub fn send(&self, command: MediaCommand) -> Result<(), String> {
        self.tx
            .send(command)
            .map_err(|_| "Media element not running".to_string())
    }
}
