// SPDX-License-Identifier: MPL-2.0
//! Media element driver: a wall-clock transport behind an Iced subscription.
//!
//! The driver stands in for a platform decoder. It owns a [`Transport`]
//! (position clock, duration, muted flag), reacts to [`MediaCommand`]s and
//! emits [`MediaEvent`]s: `MetadataLoaded` once the source is opened, then
//! `TimeUpdate` at a fixed cadence while playing, plus play/pause/ended
//! confirmations. Playback state in the UI follows these confirmations
//! rather than being flipped optimistically on user input.

use super::{CommandSender, MediaCommand, MediaEvent, MediaSessionId, MediaSource};
use iced::futures::SinkExt;
use iced::stream;
use iced::Subscription;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Cadence of `TimeUpdate` events while playing.
pub const TIME_UPDATE_INTERVAL: Duration = Duration::from_millis(250);

/// Playback clock for one media source.
///
/// Position advances in real time while playing: it is derived from a base
/// position plus the wall-clock time since playback started, clamped to
/// `[0, duration]`. All queries take an explicit `now` so the clock math
/// stays deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transport {
    duration_secs: f64,
    base_position_secs: f64,
    playing_since: Option<Instant>,
    muted: bool,
}

impl Transport {
    #[must_use]
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs: duration_secs.max(0.0),
            base_position_secs: 0.0,
            playing_since: None,
            muted: false,
        }
    }

    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing_since.is_some()
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Current playback position, clamped to `[0, duration]`.
    #[must_use]
    pub fn position(&self, now: Instant) -> f64 {
        let position = match self.playing_since {
            Some(since) => self.base_position_secs + now.duration_since(since).as_secs_f64(),
            None => self.base_position_secs,
        };
        position.clamp(0.0, self.duration_secs)
    }

    #[must_use]
    pub fn at_end(&self, now: Instant) -> bool {
        self.position(now) >= self.duration_secs
    }

    /// Starts or resumes playback. At the end of the media, playback
    /// restarts from zero.
    pub fn play(&mut self, now: Instant) {
        if self.is_playing() {
            return;
        }
        if self.at_end(now) {
            self.base_position_secs = 0.0;
        }
        self.playing_since = Some(now);
    }

    /// Pauses playback, fixing the position at its current value.
    pub fn pause(&mut self, now: Instant) {
        if self.playing_since.is_some() {
            self.base_position_secs = self.position(now);
            self.playing_since = None;
        }
    }

    /// Repositions playback time. Returns the clamped target.
    pub fn seek(&mut self, target_secs: f64, now: Instant) -> f64 {
        let clamped = target_secs.clamp(0.0, self.duration_secs);
        self.base_position_secs = clamped;
        if self.playing_since.is_some() {
            self.playing_since = Some(now);
        }
        clamped
    }
}

/// Subscription data for one playback session.
///
/// Hashes only the session id so the subscription identity stays keyed on
/// `session`, while still carrying the source to the stream builder.
struct SessionData {
    session: MediaSessionId,
    source: MediaSource,
}

impl std::hash::Hash for SessionData {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.session.hash(state);
    }
}

/// Creates the event stream for one playback session.
///
/// The returned subscription is keyed on `session`: loading a new source
/// under a fresh session id tears the previous stream down, which drops the
/// command channel and ends the driver task.
pub fn events(session: MediaSessionId, source: MediaSource) -> Subscription<MediaEvent> {
    Subscription::run_with(SessionData { session, source }, |data| {
        let source = data.source.clone();
        stream::channel(
            100,
            move |mut output: iced::futures::channel::mpsc::Sender<MediaEvent>| async move {
                let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel();

                let _ = output
                    .send(MediaEvent::SessionStarted(CommandSender::new(cmd_tx)))
                    .await;
                let _ = output
                    .send(MediaEvent::MetadataLoaded {
                        duration_secs: source.duration_secs,
                    })
                    .await;

                let mut transport = Transport::new(source.duration_secs);
                let mut ticker = tokio::time::interval(TIME_UPDATE_INTERVAL);

                loop {
                    tokio::select! {
                        command = cmd_rx.recv() => {
                            let now = Instant::now();
                            match command {
                                Some(MediaCommand::Play) => {
                                    transport.play(now);
                                    if output.send(MediaEvent::PlaybackStarted).await.is_err() {
                                        break;
                                    }
                                }
                                Some(MediaCommand::Pause) => {
                                    transport.pause(now);
                                    if output.send(MediaEvent::PlaybackPaused).await.is_err() {
                                        break;
                                    }
                                }
                                Some(MediaCommand::Seek(target)) => {
                                    let clamped = transport.seek(target, now);
                                    if output.send(MediaEvent::TimeUpdate(clamped)).await.is_err() {
                                        break;
                                    }
                                }
                                Some(MediaCommand::SetMuted(muted)) => {
                                    transport.set_muted(muted);
                                }
                                // Command sender dropped: the session is over.
                                None => break,
                            }
                        }
                        _ = ticker.tick() => {
                            if !transport.is_playing() {
                                continue;
                            }
                            let now = Instant::now();
                            let position = transport.position(now);
                            if output.send(MediaEvent::TimeUpdate(position)).await.is_err() {
                                break;
                            }
                            if transport.at_end(now) {
                                transport.pause(now);
                                if output.send(MediaEvent::PlaybackEnded).await.is_err() {
                                    break;
                                }
                            }
                        }
                    }
                }
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: f64) -> Duration {
        Duration::from_secs_f64(n)
    }

    #[test]
    fn new_transport_is_paused_at_zero() {
        let transport = Transport::new(120.0);
        let now = Instant::now();

        assert!(!transport.is_playing());
        assert!(!transport.is_muted());
        assert_eq!(transport.position(now), 0.0);
    }

    #[test]
    fn position_advances_with_the_clock_while_playing() {
        let start = Instant::now();
        let mut transport = Transport::new(120.0);
        transport.play(start);

        let later = start + secs(10.5);
        assert!((transport.position(later) - 10.5).abs() < 1e-9);
    }

    #[test]
    fn position_is_fixed_while_paused() {
        let start = Instant::now();
        let mut transport = Transport::new(120.0);
        transport.play(start);
        transport.pause(start + secs(30.0));

        let much_later = start + secs(90.0);
        assert!((transport.position(much_later) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn position_clamps_to_duration() {
        let start = Instant::now();
        let mut transport = Transport::new(60.0);
        transport.play(start);

        let past_end = start + secs(75.0);
        assert_eq!(transport.position(past_end), 60.0);
        assert!(transport.at_end(past_end));
    }

    #[test]
    fn seek_clamps_target_to_valid_range() {
        let now = Instant::now();
        let mut transport = Transport::new(100.0);

        assert_eq!(transport.seek(42.0, now), 42.0);
        assert_eq!(transport.seek(-5.0, now), 0.0);
        assert_eq!(transport.seek(250.0, now), 100.0);
    }

    #[test]
    fn seek_while_playing_rebases_the_clock() {
        let start = Instant::now();
        let mut transport = Transport::new(100.0);
        transport.play(start);

        let seek_at = start + secs(10.0);
        transport.seek(50.0, seek_at);

        let later = seek_at + secs(5.0);
        assert!((transport.position(later) - 55.0).abs() < 1e-9);
    }

    #[test]
    fn play_at_end_restarts_from_zero() {
        let start = Instant::now();
        let mut transport = Transport::new(30.0);
        transport.play(start);

        let end = start + secs(31.0);
        transport.pause(end);
        assert!(transport.at_end(end));

        transport.play(end);
        assert_eq!(transport.position(end), 0.0);
        assert!(transport.is_playing());
    }

    #[test]
    fn mute_flag_toggles_in_lockstep() {
        let mut transport = Transport::new(10.0);
        transport.set_muted(true);
        assert!(transport.is_muted());
        transport.set_muted(false);
        assert!(!transport.is_muted());
    }

    #[test]
    fn zero_duration_pins_position_at_zero() {
        let start = Instant::now();
        let mut transport = Transport::new(0.0);
        transport.play(start);

        assert_eq!(transport.position(start + secs(5.0)), 0.0);
        assert!(transport.at_end(start));
    }
}
