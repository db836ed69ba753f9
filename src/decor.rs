//! Staged decorative animation: avatars enter in a V formation, then on an
//! exit signal move toward a shared focal point and fade out.
//!
//! The fade deliberately starts shortly before the move completes so the
//! two stages overlap visually. The deferred fade is scheduled as a
//! cancellable deadline: a phase change before it fires must drop it, never
//! fire it into the newer phase.

use crate::assets;

/// Delay between the start of the move and the start of the fade:
/// `max(MIN_FADE_DELAY_MS, move_ms - FADE_LEAD_MS)`.
const MIN_FADE_DELAY_MS: u64 = 300;
const FADE_LEAD_MS: u64 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DecorTiming {
    /// Translate-toward-focal duration.
    pub move_ms: u64,
    /// Opacity-to-zero duration.
    pub fade_ms: u64,
    /// Entrance scale/opacity duration.
    pub enter_ms: u64,
}

impl Default for DecorTiming {
    fn default() -> Self {
        Self {
            move_ms: 1600,
            fade_ms: 900,
            enter_ms: 450,
        }
    }
}

impl DecorTiming {
    /// Milliseconds after `begin_exit` at which the fade stage starts.
    pub fn fade_delay_ms(&self) -> u64 {
        self.move_ms.saturating_sub(FADE_LEAD_MS).max(MIN_FADE_DELAY_MS)
    }
}

/// One decorative element: a spawn position, an image, and an individual
/// entry delay applied identically on entrance and on the exit stages.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DecorElement {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub image: String,
    pub delay_ms: u64,
}

/// Mirrored V formation: `count` elements split evenly left/right of the
/// container center (width `span`), descending linearly by `drop` toward
/// the outside. Odd counts round down to keep the formation symmetric.
pub fn v_formation(span: f64, drop: f64, count: usize, size: f64) -> Vec<DecorElement> {
    let per_side = (count / 2).max(1);
    let center = span / 2.0;
    let dx = center / (per_side + 1) as f64;
    let dy = drop / per_side as f64;

    let mut elements = Vec::with_capacity(per_side * 2);
    for i in 1..=per_side {
        let y = drop - (i - 1) as f64 * dy;
        let delay_ms = 50 * (elements.len() as u64);
        elements.push(DecorElement {
            x: center - i as f64 * dx,
            y,
            size,
            image: assets::avatar_path(i - 1),
            delay_ms,
        });
        let delay_ms = 50 * (elements.len() as u64);
        elements.push(DecorElement {
            x: center + i as f64 * dx,
            y,
            size,
            image: assets::avatar_path(per_side + i - 1),
            delay_ms,
        });
    }
    elements
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryState {
    Pre,
    Entered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStage {
    Idle,
    Moving,
    Fading,
}

/// Per-element draw state for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorFrame {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

/// The staged state machine. Entry and exit stages are independent axes:
/// `Pre|Entered` transitions once on mount, `Idle|Moving|Fading` is driven
/// by the engine's phase signal.
pub struct DecorAnimator {
    timing: DecorTiming,
    focal: (f64, f64),
    entry: EntryState,
    stage: ExitStage,
    entered_ms: u64,
    move_started_ms: u64,
    fade_started_ms: u64,
    /// Pending deferred fade; cleared on interrupt so a stale deadline
    /// never fires into a newer phase.
    fade_deadline_ms: Option<u64>,
}

impl DecorAnimator {
    pub fn new(timing: DecorTiming, focal: (f64, f64)) -> Self {
        Self {
            timing,
            focal,
            entry: EntryState::Pre,
            stage: ExitStage::Idle,
            entered_ms: 0,
            move_started_ms: 0,
            fade_started_ms: 0,
            fade_deadline_ms: None,
        }
    }

    pub fn entry(&self) -> EntryState {
        self.entry
    }

    pub fn stage(&self) -> ExitStage {
        self.stage
    }

    /// First mount: settle elements at their spawn positions.
    pub fn enter(&mut self, now_ms: u64) {
        if self.entry == EntryState::Pre {
            self.entry = EntryState::Entered;
            self.entered_ms = now_ms;
        }
    }

    /// Exit signal: start moving toward the focal point and schedule the
    /// fade to begin `fade_delay_ms` later. A no-op unless currently idle.
    pub fn begin_exit(&mut self, now_ms: u64) {
        if self.entry != EntryState::Entered || self.stage != ExitStage::Idle {
            return;
        }
        self.stage = ExitStage::Moving;
        self.move_started_ms = now_ms;
        self.fade_deadline_ms = Some(now_ms + self.timing.fade_delay_ms());
        tracing::debug!(
            fade_at = now_ms + self.timing.fade_delay_ms(),
            "decor exit started"
        );
    }

    /// A newer phase change: cancel any pending fade and return to idle at
    /// spawn positions.
    pub fn interrupt(&mut self) {
        self.fade_deadline_ms = None;
        self.stage = ExitStage::Idle;
    }

    /// Advances the deferred schedule. Returns true when the stage changed.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        if self.stage == ExitStage::Moving
            && let Some(deadline) = self.fade_deadline_ms
            && now_ms >= deadline
        {
            // The fade starts at its scheduled time, not at the tick that
            // observed it, so late ticks stay deterministic.
            self.fade_deadline_ms = None;
            self.stage = ExitStage::Fading;
            self.fade_started_ms = deadline;
            return true;
        }
        false
    }

    /// Draw state of one element at `now_ms`. The element's delay shifts
    /// entrance, move and fade identically.
    pub fn element_frame(&self, el: &DecorElement, now_ms: u64) -> DecorFrame {
        if self.entry == EntryState::Pre {
            return DecorFrame {
                x: el.x,
                y: el.y,
                scale: 0.7,
                opacity: 0.0,
            };
        }

        let enter_t = staged_progress(now_ms, self.entered_ms, el.delay_ms, self.timing.enter_ms);
        let enter = ease_out(enter_t);

        // The move keeps running while the fade overlaps it.
        let move_t = match self.stage {
            ExitStage::Idle => 0.0,
            ExitStage::Moving | ExitStage::Fading => staged_progress(
                now_ms,
                self.move_started_ms,
                el.delay_ms,
                self.timing.move_ms,
            ),
        };
        let move_p = ease_out(move_t);

        let fade = match self.stage {
            ExitStage::Fading => {
                1.0 - staged_progress(now_ms, self.fade_started_ms, el.delay_ms, self.timing.fade_ms)
            }
            _ => 1.0,
        };

        DecorFrame {
            x: el.x + (self.focal.0 - el.x) * move_p,
            y: el.y + (self.focal.1 - el.y) * move_p,
            scale: 0.7 + 0.3 * enter,
            opacity: enter * fade,
        }
    }
}

fn staged_progress(now_ms: u64, started_ms: u64, delay_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    let begin = started_ms + delay_ms;
    if now_ms <= begin {
        return 0.0;
    }
    (((now_ms - begin) as f64) / duration_ms as f64).clamp(0.0, 1.0)
}

fn ease_out(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> DecorAnimator {
        DecorAnimator::new(DecorTiming::default(), (200.0, 0.0))
    }

    fn element(delay_ms: u64) -> DecorElement {
        DecorElement {
            x: 100.0,
            y: 50.0,
            size: 44.0,
            image: assets::avatar_path(0),
            delay_ms,
        }
    }

    #[test]
    fn fade_delay_overlaps_move_end() {
        assert_eq!(DecorTiming::default().fade_delay_ms(), 1400);

        let short = DecorTiming {
            move_ms: 400,
            ..DecorTiming::default()
        };
        assert_eq!(short.fade_delay_ms(), 300);
    }

    #[test]
    fn enter_transitions_once() {
        let mut a = animator();
        assert_eq!(a.entry(), EntryState::Pre);
        a.enter(100);
        assert_eq!(a.entry(), EntryState::Entered);
        a.enter(9_999);
        assert_eq!(a.entry(), EntryState::Entered);
    }

    #[test]
    fn pre_entry_is_invisible_at_spawn() {
        let a = animator();
        let f = a.element_frame(&element(0), 0);
        assert_eq!(f.opacity, 0.0);
        assert_eq!((f.x, f.y), (100.0, 50.0));
    }

    #[test]
    fn exit_fires_fade_at_scheduled_deadline() {
        let mut a = animator();
        a.enter(0);
        a.begin_exit(1_000);
        assert_eq!(a.stage(), ExitStage::Moving);

        // Deadline is 1_000 + max(300, 1600 - 200) = 2_400.
        assert!(!a.advance(2_399));
        assert_eq!(a.stage(), ExitStage::Moving);
        assert!(a.advance(2_400));
        assert_eq!(a.stage(), ExitStage::Fading);
    }

    #[test]
    fn interrupt_cancels_pending_fade() {
        let mut a = animator();
        a.enter(0);
        a.begin_exit(1_000);
        a.interrupt();
        assert_eq!(a.stage(), ExitStage::Idle);
        // The stale deadline must not fire after the interruption.
        assert!(!a.advance(10_000));
        assert_eq!(a.stage(), ExitStage::Idle);
    }

    #[test]
    fn begin_exit_is_a_no_op_before_entry_or_mid_exit() {
        let mut a = animator();
        a.begin_exit(0);
        assert_eq!(a.stage(), ExitStage::Idle);

        a.enter(0);
        a.begin_exit(100);
        let first_stage = a.stage();
        a.begin_exit(200); // already exiting
        assert_eq!(a.stage(), first_stage);
        assert!(a.advance(100 + DecorTiming::default().fade_delay_ms()));
    }

    #[test]
    fn move_holds_opacity_and_heads_to_focal() {
        let mut a = animator();
        a.enter(0);
        a.begin_exit(10_000);
        let f = a.element_frame(&element(0), 10_000 + 1_600);
        assert_eq!(f.opacity, 1.0);
        assert!((f.x - 200.0).abs() < 1e-9);
        assert!(f.y.abs() < 1e-9);
    }

    #[test]
    fn fade_runs_at_moved_position() {
        let mut a = animator();
        a.enter(0);
        a.begin_exit(0);
        a.advance(1_400);
        assert_eq!(a.stage(), ExitStage::Fading);

        // Halfway through the 900ms fade; move already completed by 1850.
        let f = a.element_frame(&element(0), 1_850);
        assert!((f.opacity - 0.5).abs() < 1e-9);
        assert!((f.x - 200.0).abs() < 1e-9);
    }

    #[test]
    fn element_delay_shifts_move_and_fade_identically() {
        let mut a = animator();
        a.enter(0);
        a.begin_exit(10_000);

        let eager = element(0);
        let lagged = element(150);

        // Before the lagged element's delay elapses it has not moved.
        let f = a.element_frame(&lagged, 10_100);
        assert_eq!((f.x, f.y), (100.0, 50.0));
        let f = a.element_frame(&eager, 10_100);
        assert!(f.x > 100.0);

        a.advance(10_000 + 1_400);
        // Same shift on the fade axis.
        let f_eager = a.element_frame(&eager, 10_000 + 1_400 + 450);
        let f_lagged = a.element_frame(&lagged, 10_000 + 1_400 + 450 + 150);
        assert!((f_eager.opacity - f_lagged.opacity).abs() < 1e-9);
    }

    #[test]
    fn v_formation_is_mirrored() {
        let elements = v_formation(400.0, 90.0, 6, 44.0);
        assert_eq!(elements.len(), 6);
        for pair in elements.chunks(2) {
            let (l, r) = (&pair[0], &pair[1]);
            assert!((l.x + r.x - 400.0).abs() < 1e-9, "mirrored about center");
            assert_eq!(l.y, r.y);
        }
        // Downward V: the center pair sits lowest, rings rise outward.
        assert!(elements[0].y > elements[4].y);
    }

    #[test]
    fn v_formation_odd_count_stays_symmetric() {
        let elements = v_formation(300.0, 60.0, 5, 44.0);
        assert_eq!(elements.len(), 4);
    }

    #[test]
    fn v_formation_staggers_delays() {
        let elements = v_formation(400.0, 90.0, 4, 44.0);
        let delays: Vec<u64> = elements.iter().map(|e| e.delay_ms).collect();
        assert_eq!(delays, vec![0, 50, 100, 150]);
    }
}
