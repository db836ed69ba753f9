//! Timeline and cue model: time-windowed heading/subheading copy plus the
//! media source that drives it.

use crate::assets::{self, normalize_public_path};
use crate::docs::TimelineFile;

pub const DEFAULT_FADE_MS: u64 = 500;

/// One time window of copy. `end == None` means the window is open-ended
/// until the next cue's start (or the end of the timeline).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cue {
    pub start: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    pub heading: String,
    pub subheading: String,
}

impl Cue {
    /// Whether `t` falls inside `[start, end)`, treating a missing end as
    /// unbounded.
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && self.end.is_none_or(|end| t < end)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Normalized public media path, e.g. `/assets/hero.mp4`.
    pub src: String,
    pub fade_ms: u64,
    /// Total seconds for clock-driven playback; absent when the media's own
    /// playhead is the time source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Sorted ascending by start. Always present, possibly empty.
    pub cues: Vec<Cue>,
}

impl Timeline {
    /// Timeline for a page without a timeline document: default media path,
    /// default fade, no cues. Consumers never special-case absence.
    pub fn empty() -> Self {
        Self {
            src: assets::HERO_VIDEO.to_string(),
            fade_ms: DEFAULT_FADE_MS,
            duration: None,
            cues: Vec::new(),
        }
    }

    /// Builds a normalized timeline from the raw document: picks the media
    /// key (`src` over `video`), normalizes the path, defaults the fade, and
    /// sorts cues ascending by start (unsorted input is tolerated).
    pub fn from_file(file: TimelineFile) -> Self {
        let src = file
            .src
            .as_deref()
            .map(normalize_public_path)
            .or_else(|| file.video.as_deref().map(normalize_public_path))
            .unwrap_or_else(|| assets::HERO_VIDEO.to_string());

        let fade_ms = file
            .fade_ms
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map_or(DEFAULT_FADE_MS, |f| f.round() as u64);

        let mut cues: Vec<Cue> = file
            .cues
            .unwrap_or_default()
            .into_iter()
            .map(|c| Cue {
                start: c.start,
                end: c.end,
                heading: c.heading,
                subheading: c.subheading,
            })
            .collect();
        cues.sort_by(|a, b| a.start.total_cmp(&b.start));

        Self {
            src,
            fade_ms,
            duration: file.duration.filter(|d| d.is_finite()),
            cues,
        }
    }

    /// Seconds one clock-mode loop covers: explicit duration when present,
    /// else the last cue's end (falling back to its start).
    pub fn loop_duration(&self) -> f64 {
        self.duration
            .or_else(|| self.cues.last().map(|c| c.end.unwrap_or(c.start)))
            .unwrap_or(0.0)
    }
}

/// Index of the cue whose window contains `t`.
///
/// Sticky-first policy: the previously active index is checked before the
/// list is rescanned, so steady-state lookups stay O(1). When no window
/// contains `t` the result clamps to the last cue. Empty lists yield 0.
/// The sticky path never changes the result, only the lookup cost.
pub fn find_cue(cues: &[Cue], t: f64, last_index: usize) -> usize {
    if let Some(c) = cues.get(last_index)
        && c.contains(t)
    {
        return last_index;
    }
    for (i, c) in cues.iter().enumerate() {
        if c.contains(t) {
            return i;
        }
    }
    cues.len().saturating_sub(1)
}
