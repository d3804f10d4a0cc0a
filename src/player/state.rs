// SPDX-License-Identifier: MPL-2.0
//! Derived playback state for the player.
//!
//! A small record mirroring the media element: playing, muted, position,
//! duration, and a transient seek preview. It is mutated only by user
//! input and by media events, and reset whenever a new source is loaded.
//!
//! Playing/paused follow the element's own confirmations; the UI never
//! flips them optimistically. The muted flag is the exception: it toggles
//! in lockstep with the `SetMuted` command.

use crate::media::MediaEvent;

/// Maps a timeline fraction to a seek target in seconds.
///
/// The fraction is the horizontal position on the timeline relative to its
/// width; the target is `fraction × duration`, with the fraction clamped
/// to `[0, 1]`.
#[must_use]
pub fn seek_target(fraction: f64, duration_secs: f64) -> f64 {
    fraction.clamp(0.0, 1.0) * duration_secs.max(0.0)
}

/// Snapshot of playback state driving the transport controls.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    is_playing: bool,
    is_muted: bool,
    position_secs: f64,
    duration_secs: f64,
    seek_preview_secs: Option<f64>,
}

impl PlaybackState {
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// True while the user is dragging the timeline.
    #[must_use]
    pub fn is_seeking(&self) -> bool {
        self.seek_preview_secs.is_some()
    }

    /// Position shown by the timeline and time display: the seek preview
    /// while dragging, the playback position otherwise.
    #[must_use]
    pub fn display_position_secs(&self) -> f64 {
        self.seek_preview_secs.unwrap_or(self.position_secs)
    }

    /// Fraction of the timeline that is elapsed, in `[0, 1]`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        if self.duration_secs > 0.0 {
            (self.display_position_secs() / self.duration_secs).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Clears all state for a new media source.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Flips the muted flag and returns the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.is_muted = !self.is_muted;
        self.is_muted
    }

    /// Starts or updates a timeline drag at the given fraction.
    pub fn preview_seek(&mut self, fraction: f64) {
        self.seek_preview_secs = Some(seek_target(fraction, self.duration_secs));
    }

    /// Ends a timeline drag: the position jumps to the preview immediately
    /// and the seek target is returned for the element to apply.
    pub fn commit_seek(&mut self) -> Option<f64> {
        let target = self.seek_preview_secs.take()?;
        self.position_secs = target;
        Some(target)
    }

    /// Applies a media event to the derived state.
    pub fn apply(&mut self, event: &MediaEvent) {
        match event {
            MediaEvent::TimeUpdate(secs) => {
                // Time updates are ignored while the user is scrubbing.
                if !self.is_seeking() {
                    self.position_secs = self.clamp_position(*secs);
                }
            }
            MediaEvent::MetadataLoaded { duration_secs } => {
                self.duration_secs = duration_secs.max(0.0);
                self.position_secs = self.clamp_position(self.position_secs);
            }
            MediaEvent::PlaybackStarted => self.is_playing = true,
            MediaEvent::PlaybackPaused => self.is_playing = false,
            MediaEvent::PlaybackEnded => {
                self.is_playing = false;
                self.position_secs = self.duration_secs;
            }
            MediaEvent::SessionStarted(_) => {}
        }
    }

    fn clamp_position(&self, secs: f64) -> f64 {
        if self.duration_secs > 0.0 {
            secs.clamp(0.0, self.duration_secs)
        } else {
            // Duration still unknown: keep the raw position.
            secs.max(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(duration: f64) -> PlaybackState {
        let mut state = PlaybackState::default();
        state.apply(&MediaEvent::MetadataLoaded {
            duration_secs: duration,
        });
        state
    }

    #[test]
    fn seek_target_is_fraction_of_duration() {
        let duration = 247.0;
        for fraction in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let target = seek_target(fraction, duration);
            assert!((target - fraction * duration).abs() < 1e-9);
        }
    }

    #[test]
    fn seek_target_clamps_fraction() {
        assert_eq!(seek_target(-0.5, 100.0), 0.0);
        assert_eq!(seek_target(1.5, 100.0), 100.0);
    }

    #[test]
    fn time_updates_move_the_position() {
        let mut state = loaded(100.0);
        state.apply(&MediaEvent::TimeUpdate(12.5));
        assert_eq!(state.position_secs(), 12.5);
    }

    #[test]
    fn time_updates_are_ignored_while_seeking() {
        let mut state = loaded(100.0);
        state.apply(&MediaEvent::TimeUpdate(10.0));

        state.preview_seek(0.8);
        state.apply(&MediaEvent::TimeUpdate(11.0));
        // Displayed position stays on the preview, playback position untouched.
        assert_eq!(state.position_secs(), 10.0);
        assert_eq!(state.display_position_secs(), 80.0);

        let target = state.commit_seek();
        assert_eq!(target, Some(80.0));

        // After the drag ends, the next time update resumes normal display.
        state.apply(&MediaEvent::TimeUpdate(81.0));
        assert_eq!(state.position_secs(), 81.0);
        assert_eq!(state.display_position_secs(), 81.0);
    }

    #[test]
    fn commit_seek_updates_position_immediately() {
        let mut state = loaded(200.0);
        state.preview_seek(0.5);

        assert_eq!(state.commit_seek(), Some(100.0));
        assert_eq!(state.position_secs(), 100.0);
        assert!(!state.is_seeking());
    }

    #[test]
    fn commit_without_preview_is_a_no_op() {
        let mut state = loaded(200.0);
        assert_eq!(state.commit_seek(), None);
        assert_eq!(state.position_secs(), 0.0);
    }

    #[test]
    fn toggling_mute_twice_restores_original_state() {
        let mut state = PlaybackState::default();
        let original = state.is_muted();

        state.toggle_mute();
        assert_ne!(state.is_muted(), original);
        state.toggle_mute();
        assert_eq!(state.is_muted(), original);
    }

    #[test]
    fn playing_follows_element_confirmations() {
        let mut state = loaded(60.0);
        assert!(!state.is_playing());

        state.apply(&MediaEvent::PlaybackStarted);
        assert!(state.is_playing());

        state.apply(&MediaEvent::PlaybackPaused);
        assert!(!state.is_playing());
    }

    #[test]
    fn playback_ended_parks_position_at_duration() {
        let mut state = loaded(60.0);
        state.apply(&MediaEvent::PlaybackStarted);
        state.apply(&MediaEvent::PlaybackEnded);

        assert!(!state.is_playing());
        assert_eq!(state.position_secs(), 60.0);
    }

    #[test]
    fn position_is_clamped_once_duration_is_known() {
        let mut state = PlaybackState::default();
        // Duration unknown: raw position is kept.
        state.apply(&MediaEvent::TimeUpdate(12.0));
        assert_eq!(state.position_secs(), 12.0);

        state.apply(&MediaEvent::MetadataLoaded {
            duration_secs: 10.0,
        });
        assert_eq!(state.position_secs(), 10.0);

        state.apply(&MediaEvent::TimeUpdate(99.0));
        assert_eq!(state.position_secs(), 10.0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = loaded(60.0);
        state.apply(&MediaEvent::PlaybackStarted);
        state.apply(&MediaEvent::TimeUpdate(30.0));
        state.preview_seek(0.9);

        state.reset();
        assert_eq!(state, PlaybackState::default());
    }

    #[test]
    fn progress_fraction_guards_zero_duration() {
        let state = PlaybackState::default();
        assert_eq!(state.progress_fraction(), 0.0);

        let mut state = loaded(100.0);
        state.apply(&MediaEvent::TimeUpdate(25.0));
        assert!((state.progress_fraction() - 0.25).abs() < 1e-9);
    }
}
