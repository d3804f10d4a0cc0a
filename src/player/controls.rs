// SPDX-License-Identifier: MPL-2.0
//! Transport controls UI for the player.
//!
//! Provides a toolbar with play/pause, previous/next navigation, mute,
//! timeline scrubber, time display, theater mode and fullscreen buttons.

use super::state::PlaybackState;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::{icons, styles};
use iced::widget::{button, container, row, slider, text, tooltip, Row, Space, Text};
use iced::{Element, Length};

/// Timeline slider step as a fraction of the media (0.1% precision).
const TIMELINE_STEP: f64 = 0.001;

/// Messages emitted by the transport control widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Toggle play/pause state.
    TogglePlayback,

    /// Timeline is being dragged; fraction of the timeline width in `[0, 1]`.
    /// Visual feedback only, no actual seek until release.
    SeekPreview(f64),

    /// Timeline released: perform the actual seek to the preview position.
    SeekCommit,

    /// Toggle mute state.
    ToggleMute,

    /// Navigate to the previous video.
    PreviousVideo,

    /// Navigate to the next video.
    NextVideo,

    /// Toggle theater mode (layout change owned by the page, not the player).
    ToggleTheaterMode,

    /// Toggle window fullscreen on the video surface.
    ToggleFullscreen,
}

/// View context for rendering the transport controls.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether a next video exists; the next button is disabled otherwise.
    pub has_next: bool,
    /// Whether a previous video exists; symmetric to `has_next`.
    pub has_previous: bool,
}

/// Renders the transport controls toolbar.
pub fn view<'a>(ctx: ViewContext<'a>, state: &PlaybackState) -> Element<'a, Message> {
    let icon_size = sizing::ICON_SM;
    let button_height = sizing::BUTTON_HEIGHT;

    let play_pause_svg = if state.is_playing() {
        icons::sized(icons::pause(), icon_size)
    } else {
        icons::sized(icons::play(), icon_size)
    };
    let play_pause_tooltip = if state.is_playing() {
        ctx.i18n.tr("video-pause-tooltip")
    } else {
        ctx.i18n.tr("video-play-tooltip")
    };
    let play_pause_button_content: Element<'_, Message> = button(play_pause_svg)
        .on_press(Message::TogglePlayback)
        .padding(spacing::XS)
        .width(Length::Shrink)
        .height(Length::Fixed(button_height))
        .into();
    let play_pause_button = tooltip(
        play_pause_button_content,
        Text::new(play_pause_tooltip),
        tooltip::Position::Top,
    )
    .gap(4);

    // Previous/next are non-interactive when no such video exists.
    let previous_base = button(icons::sized(icons::skip_back(), icon_size))
        .padding(spacing::XS)
        .width(Length::Shrink)
        .height(Length::Fixed(button_height));
    let previous_content: Element<'_, Message> =
        match navigation_intent(ctx.has_previous, Message::PreviousVideo) {
            Some(message) => previous_base.on_press(message).into(),
            None => previous_base.style(styles::button::disabled()).into(),
        };
    let previous_button = tooltip(
        previous_content,
        Text::new(ctx.i18n.tr("video-previous-tooltip")),
        tooltip::Position::Top,
    )
    .gap(4);

    let next_base = button(icons::sized(icons::skip_forward(), icon_size))
        .padding(spacing::XS)
        .width(Length::Shrink)
        .height(Length::Fixed(button_height));
    let next_content: Element<'_, Message> =
        match navigation_intent(ctx.has_next, Message::NextVideo) {
            Some(message) => next_base.on_press(message).into(),
            None => next_base.style(styles::button::disabled()).into(),
        };
    let next_button = tooltip(
        next_content,
        Text::new(ctx.i18n.tr("video-next-tooltip")),
        tooltip::Position::Top,
    )
    .gap(4);

    // Mute button - shows the slashed speaker and a highlight when muted.
    let mute_icon = if state.is_muted() {
        icons::sized(icons::speaker_slash(), icon_size)
    } else {
        icons::sized(icons::speaker_high(), icon_size)
    };
    let mute_tooltip = if state.is_muted() {
        ctx.i18n.tr("video-unmute-tooltip")
    } else {
        ctx.i18n.tr("video-mute-tooltip")
    };
    let mute_button = button(mute_icon)
        .on_press(Message::ToggleMute)
        .padding(spacing::XS)
        .width(Length::Shrink)
        .height(Length::Fixed(button_height));
    let mute_button_content: Element<'_, Message> = if state.is_muted() {
        mute_button.style(styles::button::selected).into()
    } else {
        mute_button.into()
    };
    let mute_button_tooltip = tooltip(
        mute_button_content,
        Text::new(mute_tooltip),
        tooltip::Position::Top,
    )
    .gap(4);

    // Timeline over the fraction of the media, so the seek target is the
    // clicked fraction times the duration. During a drag, the preview
    // position is shown instead of the playback position.
    let timeline = slider(0.0..=1.0, state.progress_fraction(), Message::SeekPreview)
        .on_release(Message::SeekCommit)
        .width(Length::FillPortion(1))
        .step(TIMELINE_STEP)
        .style(styles::slider::timeline);

    let time_display = text(format!(
        "{} / {}",
        format_time(state.display_position_secs()),
        format_time(state.duration_secs())
    ))
    .size(sizing::ICON_SM);

    let theater_button_content: Element<'_, Message> =
        button(icons::sized(icons::rectangle(), icon_size))
            .on_press(Message::ToggleTheaterMode)
            .padding(spacing::XS)
            .width(Length::Shrink)
            .height(Length::Fixed(button_height))
            .into();
    let theater_button = tooltip(
        theater_button_content,
        Text::new(ctx.i18n.tr("video-theater-tooltip")),
        tooltip::Position::Top,
    )
    .gap(4);

    let fullscreen_button_content: Element<'_, Message> =
        button(icons::sized(icons::frame_corners(), icon_size))
            .on_press(Message::ToggleFullscreen)
            .padding(spacing::XS)
            .width(Length::Shrink)
            .height(Length::Fixed(button_height))
            .into();
    let fullscreen_button = tooltip(
        fullscreen_button_content,
        Text::new(ctx.i18n.tr("video-fullscreen-tooltip")),
        tooltip::Position::Top,
    )
    .gap(4);

    let controls: Row<'a, Message> = row![
        play_pause_button,
        previous_button,
        next_button,
        mute_button_tooltip,
        timeline,
        time_display,
        Space::new().width(Length::Fixed(spacing::SM)),
        theater_button,
        fullscreen_button,
    ]
    .spacing(spacing::XS)
    .padding(spacing::XS)
    .align_y(iced::Alignment::Center);

    container(controls)
        .width(Length::Fill)
        .padding(spacing::XXS)
        .style(styles::container::controls_bar)
        .into()
}

/// Press intent for a navigation button.
///
/// `None` when no such video exists; a button without an intent gets no
/// press handler and renders with the disabled style.
fn navigation_intent(available: bool, message: Message) -> Option<Message> {
    available.then_some(message)
}

/// Formats a playback time as MM:SS, both zero-padded, floor-truncated.
///
/// Minutes do not roll over into hours: 3600 seconds formats as "60:00".
fn format_time(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let minutes = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", minutes, secs)
}
