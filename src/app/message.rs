// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::Catalog;
use crate::player;
use crate::ui::list;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Player(player::Message),
    List(list::Message),
    /// A native window event was observed; carries the window id so layout
    /// commands like fullscreen can target the right window.
    WindowEvent(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Video catalog, loaded by the launcher and passed in at construction.
    pub catalog: Catalog,
}
