//! Play/pause toggle widget for the demo-video panel.
//!
//! The widget is deliberately dumb: it owns two booleans (`playing`,
//! `hovered`), forwards exactly one `play`/`pause` call per click to whatever
//! sits behind the [`Playback`] seam, and converges back to the paused look
//! when playback runs out. It never reads input devices itself; the window
//! loop feeds it clicks, hover changes, and end-of-playback notifications.
//!
//! Errors inside the playback sink are the sink's own business. The widget
//! carries no retry or recovery logic, mirroring how a native media element
//! is left to its default behaviour on failure.

use std::fmt;
use std::time::{Duration, Instant};

/// Display metadata for the panel. Purely presentational.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaSource {
    /// Where the media lives. Never fetched here; shown and handed on.
    pub url: String,
    /// Optional cover image path shown before and between plays.
    pub poster: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Seam between the toggle widget and an actual playback engine.
pub trait Playback {
    fn play(&mut self);
    fn pause(&mut self);
    /// Reports (once) that playback reached its natural end since the last
    /// poll. Polled by the frame loop rather than delivered as a callback so
    /// nothing can fire into a torn-down widget.
    fn poll_ended(&mut self) -> bool;
}

/// Playback stand-in that runs a wall-clock position against a fixed length.
///
/// There is no demuxer behind the panel yet; this sink gives the widget real
/// transport semantics (pause keeps position, play after the end restarts)
/// so the surrounding state machine is exercised end to end.
pub struct ClockPlayback {
    duration: Duration,
    position: Duration,
    started: Option<Instant>,
    ended_pending: bool,
}

impl ClockPlayback {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            position: Duration::ZERO,
            started: None,
            ended_pending: false,
        }
    }

    fn position_at(&self, now: Instant) -> Duration {
        match self.started {
            Some(started) => self.position + now.saturating_duration_since(started),
            None => self.position,
        }
    }

    /// Advances the clock; used by the frame loop between polls.
    pub fn advance(&mut self, now: Instant) {
        if let Some(started) = self.started {
            if self.position + now.saturating_duration_since(started) >= self.duration {
                self.position = Duration::ZERO;
                self.started = None;
                self.ended_pending = true;
                tracing::debug!("stub playback reached its end");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    pub fn position(&self, now: Instant) -> Duration {
        self.position_at(now).min(self.duration)
    }
}

impl Playback for ClockPlayback {
    fn play(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    fn pause(&mut self) {
        if let Some(started) = self.started.take() {
            self.position = (self.position + started.elapsed()).min(self.duration);
        }
    }

    fn poll_ended(&mut self) -> bool {
        std::mem::take(&mut self.ended_pending)
    }
}

/// Overlay styling derived from the widget state, applied by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    /// Darkening layer over the media, 0.0..=1.0.
    pub scrim: f32,
    /// Play/pause button opacity.
    pub button_opacity: f32,
    /// Button scale; hover grows it slightly.
    pub button_scale: f32,
    /// Whether the poster frame should be visible.
    pub poster_visible: bool,
}

/// The toggle state machine.
#[derive(Debug, Default)]
pub struct MediaToggle {
    playing: bool,
    hovered: bool,
}

impl MediaToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// One click: exactly one transport call, state flips.
    pub fn handle_click(&mut self, playback: &mut dyn Playback) {
        if self.playing {
            playback.pause();
            self.playing = false;
            tracing::debug!("media paused by click");
        } else {
            playback.play();
            self.playing = true;
            tracing::debug!("media playing by click");
        }
    }

    /// Hover only drives overlay styling; playback state is untouched.
    pub fn handle_hover(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Natural end of playback forces the paused look, no matter what the
    /// last user action was. Safe to call repeatedly.
    pub fn handle_ended(&mut self) {
        if self.playing {
            tracing::debug!("media ended; returning to paused state");
        }
        self.playing = false;
    }

    /// Styling for the current (`playing`, `hovered`) pair.
    pub fn overlay(&self) -> OverlayStyle {
        let scrim = if self.playing {
            if self.hovered {
                0.25
            } else {
                0.0
            }
        } else {
            0.10
        };
        let button_opacity = if self.playing {
            if self.hovered {
                1.0
            } else {
                0.0
            }
        } else {
            1.0
        };
        let button_scale = if self.hovered { 1.08 } else { 1.0 };

        OverlayStyle {
            scrim,
            button_opacity,
            button_scale,
            poster_visible: !self.playing,
        }
    }
}

impl fmt::Display for MediaToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            if self.playing { "playing" } else { "paused" },
            if self.hovered { " (hovered)" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingPlayback {
        plays: usize,
        pauses: usize,
        ended: bool,
    }

    impl Playback for RecordingPlayback {
        fn play(&mut self) {
            self.plays += 1;
        }

        fn pause(&mut self) {
            self.pauses += 1;
        }

        fn poll_ended(&mut self) -> bool {
            std::mem::take(&mut self.ended)
        }
    }

    #[test]
    fn click_toggles_and_invokes_transport_exactly_once_each_way() {
        let mut toggle = MediaToggle::new();
        let mut sink = RecordingPlayback::default();

        toggle.handle_click(&mut sink);
        assert!(toggle.is_playing());
        assert_eq!((sink.plays, sink.pauses), (1, 0));

        toggle.handle_click(&mut sink);
        assert!(!toggle.is_playing());
        assert_eq!((sink.plays, sink.pauses), (1, 1));
    }

    #[test]
    fn ended_forces_paused_regardless_of_prior_state() {
        let mut toggle = MediaToggle::new();
        let mut sink = RecordingPlayback::default();

        toggle.handle_ended();
        assert!(!toggle.is_playing());

        toggle.handle_click(&mut sink);
        assert!(toggle.is_playing());
        toggle.handle_ended();
        assert!(!toggle.is_playing());
        // Convergence is idempotent.
        toggle.handle_ended();
        assert!(!toggle.is_playing());
    }

    #[test]
    fn hover_never_mutates_playback_state() {
        let mut toggle = MediaToggle::new();
        let mut sink = RecordingPlayback::default();

        toggle.handle_hover(true);
        toggle.handle_hover(false);
        assert!(!toggle.is_playing());
        assert_eq!((sink.plays, sink.pauses), (0, 0));

        toggle.handle_click(&mut sink);
        toggle.handle_hover(true);
        assert!(toggle.is_playing());
        assert_eq!((sink.plays, sink.pauses), (1, 0));
    }

    #[test]
    fn overlay_matches_the_page_styling_table() {
        let mut toggle = MediaToggle::new();
        let mut sink = RecordingPlayback::default();

        // Paused, not hovered: poster + visible button, light scrim.
        let style = toggle.overlay();
        assert_eq!(style.scrim, 0.10);
        assert_eq!(style.button_opacity, 1.0);
        assert_eq!(style.button_scale, 1.0);
        assert!(style.poster_visible);

        // Playing, not hovered: overlay fully quiet.
        toggle.handle_click(&mut sink);
        let style = toggle.overlay();
        assert_eq!(style.scrim, 0.0);
        assert_eq!(style.button_opacity, 0.0);
        assert!(!style.poster_visible);

        // Playing, hovered: scrim and button return, button grows.
        toggle.handle_hover(true);
        let style = toggle.overlay();
        assert_eq!(style.scrim, 0.25);
        assert_eq!(style.button_opacity, 1.0);
        assert!((style.button_scale - 1.08).abs() < f32::EPSILON);
    }

    #[test]
    fn clock_playback_pauses_with_position_and_ends_once() {
        let mut clock = ClockPlayback::new(Duration::from_millis(50));
        assert!(!clock.is_running());

        clock.play();
        assert!(clock.is_running());
        clock.pause();
        assert!(!clock.is_running());
        assert!(!clock.poll_ended());

        clock.play();
        let deadline = Instant::now() + Duration::from_millis(60);
        clock.advance(deadline);
        assert!(!clock.is_running(), "clock stops at its end");
        assert!(clock.poll_ended());
        assert!(!clock.poll_ended(), "end reported once");
        assert_eq!(clock.position(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn clock_playback_end_feeds_the_toggle_back_to_paused() {
        let mut toggle = MediaToggle::new();
        let mut clock = ClockPlayback::new(Duration::from_millis(10));

        toggle.handle_click(&mut clock);
        assert!(toggle.is_playing());

        clock.advance(Instant::now() + Duration::from_millis(20));
        if clock.poll_ended() {
            toggle.handle_ended();
        }
        assert!(!toggle.is_playing());
    }
}
