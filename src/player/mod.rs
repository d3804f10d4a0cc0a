// SPDX-License-Identifier: MPL-2.0
//! Player component: owns one media session and its derived state.
//!
//! The player wraps the media element for the currently selected video. It
//! renders the video surface plus the transport controls, forwards commands
//! to the element, and folds the element's event stream back into
//! [`PlaybackState`]. Navigation and layout intents (next/previous, theater
//! mode, fullscreen) are reported to the owning application as [`Effect`]s.

pub mod controls;
pub mod state;

pub use state::{seek_target, PlaybackState};

use crate::catalog::VideoEntry;
use crate::i18n::fluent::I18n;
use crate::media::{self, CommandSender, MediaCommand, MediaEvent, MediaSessionId, MediaSource};
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::{column, container, image, mouse_area, text};
use iced::{Alignment, Element, Length, Subscription};
use std::path::PathBuf;

/// Player component state.
pub struct State {
    /// Incremented on every load so the event subscription is recreated.
    session_id: u64,
    source: Option<MediaSource>,
    thumbnail: Option<PathBuf>,
    playback: PlaybackState,
    commands: Option<CommandSender>,
    /// Play as soon as the new session hands us its command channel.
    pending_autoplay: bool,
}

/// Messages consumed by the player.
#[derive(Debug, Clone)]
pub enum Message {
    /// A transport control was used.
    Controls(controls::Message),
    /// The media element emitted an event.
    Media(MediaEvent),
}

/// Intents the player reports to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The page should toggle its theater-mode layout.
    ToggleTheaterMode,
    /// The window should toggle fullscreen on the video surface.
    ToggleFullscreen,
    /// Navigate to the next video.
    NextVideo,
    /// Navigate to the previous video.
    PreviousVideo,
    /// Playback reached the end of the current video.
    PlaybackEnded,
}

/// Context required to render the player.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session_id: 0,
            source: None,
            thumbnail: None,
            playback: PlaybackState::default(),
            commands: None,
            pending_autoplay: false,
        }
    }

    #[must_use]
    pub fn has_media(&self) -> bool {
        self.source.is_some()
    }

    #[must_use]
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// Loads a new source, resetting all derived state and starting a fresh
    /// media session. The previous session's subscription (and with it the
    /// element task) is torn down by the session id change.
    pub fn load(&mut self, entry: &VideoEntry, autoplay: bool) {
        self.session_id += 1;
        self.source = Some(MediaSource {
            url: entry.source.clone(),
            duration_secs: entry.duration_secs,
        });
        self.thumbnail = Some(entry.thumbnail.clone());
        self.playback.reset();
        self.commands = None;
        self.pending_autoplay = autoplay;
    }

    /// Handles a player message, returning the intent for the owner.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Controls(controls::Message::TogglePlayback) => {
                if self.playback.is_playing() {
                    self.send(MediaCommand::Pause);
                } else {
                    self.send(MediaCommand::Play);
                }
                Effect::None
            }
            Message::Controls(controls::Message::SeekPreview(fraction)) => {
                self.playback.preview_seek(fraction);
                Effect::None
            }
            Message::Controls(controls::Message::SeekCommit) => {
                if let Some(target) = self.playback.commit_seek() {
                    self.send(MediaCommand::Seek(target));
                }
                Effect::None
            }
            Message::Controls(controls::Message::ToggleMute) => {
                // Element flag and local state flip in lockstep.
                let muted = self.playback.toggle_mute();
                self.send(MediaCommand::SetMuted(muted));
                Effect::None
            }
            Message::Controls(controls::Message::PreviousVideo) => Effect::PreviousVideo,
            Message::Controls(controls::Message::NextVideo) => Effect::NextVideo,
            Message::Controls(controls::Message::ToggleTheaterMode) => Effect::ToggleTheaterMode,
            Message::Controls(controls::Message::ToggleFullscreen) => Effect::ToggleFullscreen,
            Message::Media(MediaEvent::SessionStarted(sender)) => {
                self.commands = Some(sender);
                if self.pending_autoplay {
                    self.pending_autoplay = false;
                    self.send(MediaCommand::Play);
                }
                Effect::None
            }
            Message::Media(event) => {
                self.playback.apply(&event);
                if matches!(event, MediaEvent::PlaybackEnded) {
                    Effect::PlaybackEnded
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Event stream for the current session, if a source is loaded.
    pub fn subscription(&self) -> Subscription<Message> {
        match &self.source {
            Some(source) => {
                media::events(MediaSessionId(self.session_id), source.clone()).map(Message::Media)
            }
            None => Subscription::none(),
        }
    }

    /// Renders the video surface and the transport controls.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        if !self.has_media() {
            return container(text(ctx.i18n.tr("player-empty")).size(typography::BODY))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(styles::container::video_surface)
                .into();
        }

        // The surface shows the entry's thumbnail as a stand-in frame;
        // clicking it toggles playback, like clicking the video itself.
        let frame: Element<'a, Message> = match &self.thumbnail {
            Some(path) => image(image::Handle::from_path(path))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => text("").into(),
        };

        let surface = mouse_area(
            container(frame)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Alignment::Center)
                .align_y(Alignment::Center)
                .style(styles::container::video_surface),
        )
        .on_press(Message::Controls(controls::Message::TogglePlayback));

        let controls_bar = controls::view(
            controls::ViewContext {
                i18n: ctx.i18n,
                has_next: ctx.has_next,
                has_previous: ctx.has_previous,
            },
            &self.playback,
        )
        .map(Message::Controls);

        column![surface, controls_bar]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn send(&self, command: MediaCommand) {
        if let Some(commands) = &self.commands {
            // A closed channel means the session is already gone; the next
            // load replaces it.
            let _ = commands.send(command);
        }
    }
}
