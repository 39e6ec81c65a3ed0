//! Reveal gate for the landing window.
//!
//! The gate presents a full-screen cover from the first frame and removes it
//! only after start-up loading has finished, so the page is never seen half
//! initialised. The sequence is a one-way state machine:
//!
//! ```text
//!   Shown ──(load signal + hold)──▶ FadingOut ──(fade)──▶ Hidden
//! ```
//!
//! Callers drive it by reporting the load signal once via
//! [`GateSequencer::signal_loaded`] and then calling [`GateSequencer::tick`]
//! with the current instant from their frame loop. Time flows in through
//! arguments rather than being read internally, which keeps the whole
//! sequence deterministic under test.
//!
//! On entering `Hidden` the sequencer sets a [`LoadedMarker`], the
//! process-wide "loading complete" flag other parts of the app can key on.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

/// Default dwell on the cover after the load signal fires.
pub const DEFAULT_HOLD: Duration = Duration::from_millis(1000);

/// Default duration of the fade-out transition.
pub const DEFAULT_FADE: Duration = Duration::from_millis(200);

/// Phase of the reveal sequence. Transitions are one-way and run once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    /// Cover fully opaque; waiting for the load signal (plus hold).
    Shown,
    /// Cover mid-transition, opacity falling toward zero.
    FadingOut,
    /// Cover gone; terminal.
    Hidden,
}

/// Emitted by [`GateSequencer::tick`] when a transition fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    /// The hold elapsed and the fade-out began.
    FadeStarted,
    /// The fade completed; the loaded marker has been set.
    Revealed,
}

/// Shape applied to the fade-out progress curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeCurve {
    #[default]
    Linear,
    Smoothstep,
}

impl FadeCurve {
    fn sample(self, t: f32) -> f32 {
        let clamped = t.clamp(0.0, 1.0);
        match self {
            FadeCurve::Linear => clamped,
            FadeCurve::Smoothstep => clamped * clamped * (3.0 - 2.0 * clamped),
        }
    }
}

/// Timing knobs for the reveal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateTiming {
    /// Delay between the load signal and the start of the fade.
    pub hold: Duration,
    /// Length of the fade-out itself.
    pub fade: Duration,
}

impl Default for GateTiming {
    fn default() -> Self {
        Self {
            hold: DEFAULT_HOLD,
            fade: DEFAULT_FADE,
        }
    }
}

/// Process-wide "loading complete" flag, the rendered-page analog of a
/// `loaded` class on a document body.
///
/// The default handle shares one global flag; [`LoadedMarker::isolated`]
/// creates a private one so tests (and embedders running several windows)
/// do not observe each other.
#[derive(Debug, Clone)]
pub struct LoadedMarker(Arc<AtomicBool>);

impl LoadedMarker {
    /// Handle onto the shared process-wide flag.
    pub fn global() -> Self {
        static GLOBAL: OnceLock<Arc<AtomicBool>> = OnceLock::new();
        Self(GLOBAL.get_or_init(|| Arc::new(AtomicBool::new(false))).clone())
    }

    /// A fresh, private flag.
    pub fn isolated() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Sets the flag; returns whether this call was the one that set it.
    pub fn mark(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// The reveal gate state machine.
pub struct GateSequencer {
    timing: GateTiming,
    curve: FadeCurve,
    phase: GatePhase,
    loaded_at: Option<Instant>,
    fade_started_at: Option<Instant>,
    marker: LoadedMarker,
}

impl GateSequencer {
    /// Builds a gate in `Shown` wired to the global loaded marker.
    pub fn new(timing: GateTiming) -> Self {
        Self::with_marker(timing, LoadedMarker::global())
    }

    /// Builds a gate reporting completion through the supplied marker.
    pub fn with_marker(timing: GateTiming, marker: LoadedMarker) -> Self {
        Self {
            timing,
            curve: FadeCurve::default(),
            phase: GatePhase::Shown,
            loaded_at: None,
            fade_started_at: None,
            marker,
        }
    }

    /// Overrides the fade curve (linear by default).
    pub fn with_curve(mut self, curve: FadeCurve) -> Self {
        self.curve = curve;
        self
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn is_hidden(&self) -> bool {
        self.phase == GatePhase::Hidden
    }

    /// Records the load signal. Only the first call counts; the hold and fade
    /// run from `now` even if the underlying resources finished earlier.
    pub fn signal_loaded(&mut self, now: Instant) {
        if self.loaded_at.is_none() {
            tracing::debug!("load signal received; reveal armed");
            self.loaded_at = Some(now);
        }
    }

    /// Advances the sequence to `now`, returning any transitions that fired.
    ///
    /// A stalled caller that skips past both deadlines still traverses the
    /// phases in order and gets both events back-to-back; the marker is set
    /// exactly once either way.
    pub fn tick(&mut self, now: Instant) -> Vec<GateEvent> {
        let mut events = Vec::new();

        if self.phase == GatePhase::Shown {
            if let Some(loaded_at) = self.loaded_at {
                if now.saturating_duration_since(loaded_at) >= self.timing.hold {
                    self.phase = GatePhase::FadingOut;
                    self.fade_started_at = Some(loaded_at + self.timing.hold);
                    tracing::debug!(hold_ms = self.timing.hold.as_millis() as u64, "cover fade-out started");
                    events.push(GateEvent::FadeStarted);
                }
            }
        }

        if self.phase == GatePhase::FadingOut {
            let started = self
                .fade_started_at
                .expect("fade start instant recorded on transition");
            if now.saturating_duration_since(started) >= self.timing.fade {
                self.phase = GatePhase::Hidden;
                self.marker.mark();
                tracing::debug!(fade_ms = self.timing.fade.as_millis() as u64, "cover hidden; page revealed");
                events.push(GateEvent::Revealed);
            }
        }

        events
    }

    /// Cover opacity at `now`: 1.0 while shown, easing to 0.0 across the
    /// fade, 0.0 once hidden. Pure; does not advance the machine.
    pub fn cover_opacity(&self, now: Instant) -> f32 {
        match self.phase {
            GatePhase::Shown => 1.0,
            GatePhase::Hidden => 0.0,
            GatePhase::FadingOut => {
                let started = self
                    .fade_started_at
                    .expect("fade start instant recorded on transition");
                let progress = now.saturating_duration_since(started).as_secs_f32()
                    / self.timing.fade.as_secs_f32().max(f32::EPSILON);
                1.0 - self.curve.sample(progress)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(timing: GateTiming) -> GateSequencer {
        GateSequencer::with_marker(timing, LoadedMarker::isolated())
    }

    #[test]
    fn holds_shown_until_the_load_signal() {
        let t0 = Instant::now();
        let mut seq = gate(GateTiming::default());
        assert!(seq.tick(t0 + Duration::from_secs(10)).is_empty());
        assert_eq!(seq.phase(), GatePhase::Shown);
        assert_eq!(seq.cover_opacity(t0 + Duration::from_secs(10)), 1.0);
    }

    #[test]
    fn runs_the_documented_timeline() {
        let t0 = Instant::now();
        let mut seq = gate(GateTiming::default());
        seq.signal_loaded(t0);

        assert!(seq.tick(t0 + Duration::from_millis(999)).is_empty());
        assert_eq!(seq.phase(), GatePhase::Shown);

        assert_eq!(
            seq.tick(t0 + Duration::from_millis(1000)),
            vec![GateEvent::FadeStarted]
        );
        assert_eq!(seq.phase(), GatePhase::FadingOut);

        assert!(seq.tick(t0 + Duration::from_millis(1199)).is_empty());
        assert_eq!(
            seq.tick(t0 + Duration::from_millis(1200)),
            vec![GateEvent::Revealed]
        );
        assert_eq!(seq.phase(), GatePhase::Hidden);
    }

    #[test]
    fn late_signal_still_runs_full_hold_and_fade_from_signal_time() {
        // Resources finished long before the gate was asked about them; the
        // sequence must still take its full hold + fade from the signal call.
        let t0 = Instant::now();
        let mut seq = gate(GateTiming::default());
        let activation = t0 + Duration::from_secs(5);
        seq.signal_loaded(activation);

        assert!(seq.tick(activation + Duration::from_millis(500)).is_empty());
        assert_eq!(
            seq.tick(activation + Duration::from_millis(1000)),
            vec![GateEvent::FadeStarted]
        );
        assert_eq!(
            seq.tick(activation + Duration::from_millis(1200)),
            vec![GateEvent::Revealed]
        );
    }

    #[test]
    fn repeated_signals_do_not_restart_the_clock() {
        let t0 = Instant::now();
        let mut seq = gate(GateTiming::default());
        seq.signal_loaded(t0);
        seq.signal_loaded(t0 + Duration::from_millis(900));
        assert_eq!(
            seq.tick(t0 + Duration::from_millis(1000)),
            vec![GateEvent::FadeStarted]
        );
    }

    #[test]
    fn stalled_tick_traverses_both_transitions_in_order() {
        let t0 = Instant::now();
        let mut seq = gate(GateTiming::default());
        seq.signal_loaded(t0);
        assert_eq!(
            seq.tick(t0 + Duration::from_secs(30)),
            vec![GateEvent::FadeStarted, GateEvent::Revealed]
        );
        assert!(seq.is_hidden());
        // Terminal: further ticks are quiet.
        assert!(seq.tick(t0 + Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn marker_is_set_exactly_once_at_reveal() {
        let t0 = Instant::now();
        let marker = LoadedMarker::isolated();
        let mut seq = GateSequencer::with_marker(GateTiming::default(), marker.clone());
        seq.signal_loaded(t0);

        seq.tick(t0 + Duration::from_millis(1100));
        assert!(!marker.is_set());

        seq.tick(t0 + Duration::from_millis(1200));
        assert!(marker.is_set());
        assert!(!marker.mark(), "marker was already set by the sequencer");
    }

    #[test]
    fn cover_opacity_tracks_fade_progress() {
        let t0 = Instant::now();
        let timing = GateTiming {
            hold: Duration::from_millis(100),
            fade: Duration::from_millis(100),
        };
        let mut seq = gate(timing);
        seq.signal_loaded(t0);
        seq.tick(t0 + Duration::from_millis(100));

        let mid = seq.cover_opacity(t0 + Duration::from_millis(150));
        assert!((mid - 0.5).abs() < 0.05, "got {mid}");
        assert_eq!(seq.cover_opacity(t0 + Duration::from_millis(300)), 0.0);
    }

    #[test]
    fn smoothstep_curve_still_spans_one_to_zero() {
        let t0 = Instant::now();
        let timing = GateTiming {
            hold: Duration::ZERO,
            fade: Duration::from_millis(100),
        };
        let mut seq = gate(timing).with_curve(FadeCurve::Smoothstep);
        seq.signal_loaded(t0);
        seq.tick(t0);
        assert_eq!(seq.cover_opacity(t0), 1.0);
        let quarter = seq.cover_opacity(t0 + Duration::from_millis(25));
        assert!(quarter > 0.8, "smoothstep eases in slowly, got {quarter}");
        seq.tick(t0 + Duration::from_millis(100));
        assert_eq!(seq.cover_opacity(t0 + Duration::from_millis(100)), 0.0);
    }

    #[test]
    fn dropping_an_unsignalled_gate_leaves_the_marker_clear() {
        let marker = LoadedMarker::isolated();
        {
            let _seq = GateSequencer::with_marker(GateTiming::default(), marker.clone());
        }
        assert!(!marker.is_set());
    }
}
