// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Style for the playback timeline: brand-colored progress over a muted rail.
pub fn timeline(theme: &Theme, _status: slider::Status) -> slider::Style {
    let is_light = matches!(theme, Theme::Light);
    let rail_bg = if is_light {
        palette::GRAY_100
    } else {
        palette::GRAY_700
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(palette::PRIMARY_500),
                Background::Color(rail_bg),
            ),
            width: sizing::TIMELINE_TRACK,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: (sizing::TIMELINE_TRACK / 2.0).into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle {
                radius: sizing::SCRUBBER_THUMB / 2.0,
            },
            background: Background::Color(palette::PRIMARY_500),
            border_width: 1.0,
            border_color: palette::PRIMARY_600,
        },
    }
}
