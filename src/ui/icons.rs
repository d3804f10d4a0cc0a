// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock` so each asset is parsed once.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance, not the
//! action context (e.g., `rectangle` not `theater_mode`).

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Transport Icons
// =============================================================================

define_icon!(play, "play.svg", "Play icon: triangle pointing right.");
define_icon!(pause, "pause.svg", "Pause icon: two vertical bars.");
define_icon!(
    skip_back,
    "skip-back.svg",
    "Skip-back icon: triangle pointing left against a bar."
);
define_icon!(
    skip_forward,
    "skip-forward.svg",
    "Skip-forward icon: triangle pointing right against a bar."
);
define_icon!(
    speaker_high,
    "speaker-high.svg",
    "Speaker icon with sound waves."
);
define_icon!(
    speaker_slash,
    "speaker-slash.svg",
    "Speaker icon crossed by a slash."
);

// =============================================================================
// Layout Icons
// =============================================================================

define_icon!(
    rectangle,
    "rectangle.svg",
    "Wide rectangle outline, used for the theater-mode toggle."
);
define_icon!(
    frame_corners,
    "frame-corners.svg",
    "Four frame corners, used for the fullscreen toggle."
);

/// Applies a square size to an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(size).height(size)
}
