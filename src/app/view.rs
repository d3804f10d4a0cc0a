// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the sidebar list next to the player. Theater mode and fullscreen
//! both hide the sidebar so the player takes the whole width.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::player;
use crate::playlist::Playlist;
use crate::ui::list;
use iced::widget::Row;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub playlist: &'a Playlist,
    pub player: &'a player::State,
    pub theater_mode: bool,
    pub fullscreen: bool,
}

/// Renders the sidebar and the player side by side.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let info = ctx.playlist.info();

    let player_view = ctx
        .player
        .view(player::ViewContext {
            i18n: ctx.i18n,
            has_next: info.has_next,
            has_previous: info.has_previous,
        })
        .map(Message::Player);

    if ctx.theater_mode || ctx.fullscreen {
        return player_view;
    }

    let sidebar = list::view(list::ViewContext {
        i18n: ctx.i18n,
        catalog: ctx.playlist.catalog(),
        selected_index: info.current_index,
    })
    .map(Message::List);

    Row::new()
        .push(sidebar)
        .push(player_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
