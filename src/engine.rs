//! The timeline cue engine: active-cue tracking plus the content-keyed
//! subheading crossfade.
//!
//! The engine owns no visual output. Each tick it resolves the active cue
//! for the sampled time and pushes plain text plus an opacity into an
//! injected [`HeroView`]. Heading text never animates; the subheading
//! crossfades out/in whenever its *content* changes. Cue switches that keep
//! the subheading text identical must not re-trigger a fade.

use crate::timeline::{Timeline, find_cue};

/// Render seam. One implementor per host surface; the engine calls all
/// three back per tick.
pub trait HeroView {
    /// Static heading line (no fade).
    fn heading(&mut self, text: &str);
    /// Subheading line with its current fade opacity in `0..=1`.
    fn subheading(&mut self, text: &str, opacity: f64);
    /// Arbitrary decorative content keyed by cue index.
    fn decor(&mut self, cue_index: usize);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadePhase {
    Idle,
    /// Outgoing subheading fading to 0.
    Out,
    /// Incoming subheading fading to 1.
    In,
}

/// Snapshot of one engine tick.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineFrame {
    pub cue_index: usize,
    pub heading: String,
    /// Subheading of the active cue.
    pub subheading: String,
    /// Text currently on screen: the outgoing subheading during `Out`,
    /// the active one otherwise.
    pub displayed_subheading: String,
    pub subheading_opacity: f64,
    pub fade_phase: FadePhase,
}

pub struct CueEngine {
    timeline: Timeline,
    index: usize,
    fade_key: Option<String>,
    phase: FadePhase,
    phase_started_ms: u64,
    outgoing: String,
}

impl CueEngine {
    /// Cues are re-sorted ascending by start; unsorted documents are
    /// tolerated rather than rejected.
    pub fn new(mut timeline: Timeline) -> Self {
        timeline
            .cues
            .sort_by(|a, b| a.start.total_cmp(&b.start));
        Self {
            timeline,
            index: 0,
            fade_key: None,
            phase: FadePhase::Idle,
            phase_started_ms: 0,
            outgoing: String::new(),
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Advances the engine to timeline position `t_secs` at wall time
    /// `now_ms` and returns the frame to draw. An empty cue list degrades
    /// to empty copy at index 0, never an error.
    pub fn tick(&mut self, t_secs: f64, now_ms: u64) -> EngineFrame {
        let cues = &self.timeline.cues;
        let new_index = find_cue(cues, t_secs, self.index);
        if new_index != self.index {
            tracing::debug!(from = self.index, to = new_index, t = t_secs, "cue change");
        }
        self.index = new_index;

        let (heading, subheading) = cues
            .get(self.index)
            .map(|c| (c.heading.clone(), c.subheading.clone()))
            .unwrap_or_default();

        // Fade keys off subheading content; an empty subheading falls back
        // to the cue index so blank cues still transition.
        let key = if subheading.is_empty() {
            format!("#{}", self.index)
        } else {
            subheading.clone()
        };

        let first_tick = self.fade_key.is_none();
        if self.fade_key.as_deref() != Some(key.as_str()) {
            if !first_tick && self.timeline.fade_ms > 0 {
                self.outgoing = match self.phase {
                    // Interrupted mid-fade: fade out whatever is on screen.
                    FadePhase::Out => self.outgoing.clone(),
                    _ => self
                        .fade_key
                        .as_ref()
                        .filter(|k| !k.starts_with('#'))
                        .cloned()
                        .unwrap_or_default(),
                };
                self.phase = FadePhase::Out;
                self.phase_started_ms = now_ms;
            }
            self.fade_key = Some(key);
        }

        self.advance_fade(now_ms);

        let (displayed, opacity) = match self.phase {
            FadePhase::Idle => (subheading.clone(), 1.0),
            FadePhase::Out => (
                self.outgoing.clone(),
                1.0 - self.fade_progress(now_ms),
            ),
            FadePhase::In => (subheading.clone(), self.fade_progress(now_ms)),
        };

        EngineFrame {
            cue_index: self.index,
            heading,
            subheading,
            displayed_subheading: displayed,
            subheading_opacity: opacity,
            fade_phase: self.phase,
        }
    }

    /// Ticks and pushes the result into `view`.
    pub fn drive<V: HeroView>(&mut self, t_secs: f64, now_ms: u64, view: &mut V) -> EngineFrame {
        let frame = self.tick(t_secs, now_ms);
        view.heading(&frame.heading);
        view.subheading(&frame.displayed_subheading, frame.subheading_opacity);
        view.decor(frame.cue_index);
        frame
    }

    fn fade_progress(&self, now_ms: u64) -> f64 {
        let fade = self.timeline.fade_ms;
        if fade == 0 {
            return 1.0;
        }
        ((now_ms.saturating_sub(self.phase_started_ms)) as f64 / fade as f64).clamp(0.0, 1.0)
    }

    fn advance_fade(&mut self, now_ms: u64) {
        let fade = self.timeline.fade_ms;
        if self.phase == FadePhase::Idle {
            return;
        }
        if fade == 0 {
            self.phase = FadePhase::Idle;
            return;
        }
        // Out completes, then In, each over one fade duration.
        if self.phase == FadePhase::Out && now_ms >= self.phase_started_ms + fade {
            self.phase = FadePhase::In;
            self.phase_started_ms += fade;
        }
        if self.phase == FadePhase::In && now_ms >= self.phase_started_ms + fade {
            self.phase = FadePhase::Idle;
        }
    }
}
