//! Time sources for the cue engine.
//!
//! The engine never knows where time comes from; it only samples a
//! [`TimeSource`]. One implementation mirrors a media element's playhead,
//! the other synthesizes a looping clock from wall time.

use std::time::Instant;

/// Recommended polling interval for a driving loop. The media change
/// notification alone under-fires on some platforms, so callers poll at
/// this cadence as a safety net in addition to forwarding change events.
pub const POLL_INTERVAL_MS: u64 = 100;

/// A monotonic-enough source of timeline seconds.
pub trait TimeSource {
    fn now_secs(&mut self) -> f64;
}

/// Mirrors an external media element's playback position.
///
/// Positions arrive through [`MediaClock::report`] (the element's position
/// change notification); sampling between reports returns the last known
/// position. Both the event path and a periodic re-sample converge on the
/// same value, so redundant delivery is harmless.
#[derive(Debug, Default)]
pub struct MediaClock {
    position: f64,
}

impl MediaClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a playhead position in seconds. Non-finite or negative
    /// reports are dropped rather than propagated into cue lookup.
    pub fn report(&mut self, position_secs: f64) {
        if position_secs.is_finite() && position_secs >= 0.0 {
            self.position = position_secs;
        }
    }
}

impl TimeSource for MediaClock {
    fn now_secs(&mut self) -> f64 {
        self.position
    }
}

/// Looping wall clock: elapsed time since construction, modulo a configured
/// duration. Used when the timeline has no driving media.
#[derive(Debug)]
pub struct SyntheticClock {
    epoch: Instant,
    duration_secs: f64,
}

impl SyntheticClock {
    /// Durations of zero or less are clamped to one second so the modulo is
    /// always well defined.
    pub fn new(duration_secs: f64) -> Self {
        Self {
            epoch: Instant::now(),
            duration_secs: duration_secs.max(1.0),
        }
    }

    /// Clock position for an arbitrary elapsed time; the pure core of
    /// `now_secs`, kept separate so tests need no real waiting.
    pub fn position_at(&self, elapsed_secs: f64) -> f64 {
        elapsed_secs % self.duration_secs
    }
}

impl TimeSource for SyntheticClock {
    fn now_secs(&mut self) -> f64 {
        self.position_at(self.epoch.elapsed().as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_clock_holds_last_report() {
        let mut clock = MediaClock::new();
        assert_eq!(clock.now_secs(), 0.0);
        clock.report(2.5);
        assert_eq!(clock.now_secs(), 2.5);
        // Sampling twice without a new report is stable.
        assert_eq!(clock.now_secs(), 2.5);
    }

    #[test]
    fn media_clock_drops_garbage_reports() {
        let mut clock = MediaClock::new();
        clock.report(3.0);
        clock.report(f64::NAN);
        clock.report(-1.0);
        assert_eq!(clock.now_secs(), 3.0);
    }

    #[test]
    fn synthetic_clock_wraps_at_duration() {
        let clock = SyntheticClock::new(8.0);
        assert_eq!(clock.position_at(0.0), 0.0);
        assert_eq!(clock.position_at(3.0), 3.0);
        assert_eq!(clock.position_at(8.0), 0.0);
        assert!((clock.position_at(19.5) - 3.5).abs() < 1e-9);
    }

    #[test]
    fn synthetic_clock_clamps_degenerate_duration() {
        let clock = SyntheticClock::new(0.0);
        assert_eq!(clock.position_at(0.25), 0.25);
        assert_eq!(clock.position_at(1.25), 0.25);
    }
}
