// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the list and the player.
//!
//! The `App` struct wires together the playlist, the player component and
//! localization, and translates player effects into layout changes (theater
//! mode, fullscreen) or playlist navigation. Policy decisions such as the
//! minimum window size and the autoplay behavior on navigation live here so
//! user-facing behavior stays easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::player;
use crate::playlist::Playlist;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use unic_langid::LanguageIdentifier;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 700;
pub const MIN_WINDOW_HEIGHT: u32 = 450;

/// Root Iced application state bridging the playlist, the player and
/// localization.
pub struct App {
    pub i18n: I18n,
    playlist: Playlist,
    player: player::State,
    /// Theater mode widens the player by hiding the sidebar.
    theater_mode: bool,
    fullscreen: bool,
    window_id: Option<window::Id>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_index", &self.playlist.current_index())
            .field("theater_mode", &self.theater_mode)
            .field("fullscreen", &self.fullscreen)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            playlist: Playlist::new(Catalog::default()),
            player: player::State::new(),
            theater_mode: false,
            fullscreen: false,
            window_id: None,
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    ///
    /// The catalog arrives already loaded; the first entry (if any) is
    /// selected and loaded into the player, with autoplay per the config.
    /// A `--lang` override switches the locale and becomes the saved
    /// language preference for later launches.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut config = config::load().unwrap_or_default();
        let mut i18n = I18n::new(None, &config);

        if let Some(locale) = flags
            .lang
            .as_deref()
            .and_then(|lang| lang.parse::<LanguageIdentifier>().ok())
        {
            i18n.set_locale(locale.clone());
            // Persist only when the override actually applied.
            if i18n.current_locale() == &locale {
                let tag = locale.to_string();
                if config.language.as_deref() != Some(tag.as_str()) {
                    config.language = Some(tag);
                    // A read-only config dir should not block startup.
                    let _ = config::save(&config);
                }
            }
        }

        let playlist = Playlist::new(flags.catalog);
        let mut player = player::State::new();
        let autoplay = config.autoplay.unwrap_or(false);
        if let Some(entry) = playlist.current() {
            player.load(entry, autoplay);
        }

        let app = App {
            i18n,
            playlist,
            player,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.playlist.current() {
            Some(entry) => format!("{} - {app_name}", entry.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.player.subscription().map(Message::Player),
            subscription::window_events(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Player(player_message) => update::handle_player_message(self, player_message),
            Message::List(list_message) => update::handle_list_message(self, list_message),
            Message::WindowEvent(id) => {
                self.window_id = Some(id);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            playlist: &self.playlist,
            player: &self.player,
            theater_mode: self.theater_mode,
            fullscreen: self.fullscreen,
        })
    }
}
