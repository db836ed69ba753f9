//! Loading and typed models for the JSON spec documents.
//!
//! Four documents live under a `specs/` directory: `tokens.json`,
//! `copy.json` and `ui_spec.json` are required; `copy_timeline.json` is
//! optional. The on-disk formats are owned by the design side and preserved
//! verbatim, hence the camelCase field names.

use std::path::Path;

use serde_json::Value;

use crate::error::{CuelightError, CuelightResult};

pub const TOKENS_FILE: &str = "tokens.json";
pub const COPY_FILE: &str = "copy.json";
pub const UI_SPEC_FILE: &str = "ui_spec.json";
pub const TIMELINE_FILE: &str = "copy_timeline.json";

/// Reads one JSON document. Strips a UTF-8 BOM if the exporting tool left
/// one behind. Errors carry the offending path.
pub fn read_json(path: &Path) -> CuelightResult<Value> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| CuelightError::spec(format!("read '{}': {e}", path.display())))?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
    serde_json::from_str(raw)
        .map_err(|e| CuelightError::json(format!("parse '{}': {e}", path.display())))
}

// ---------- tokens.json ----------

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct Tokens {
    pub spacing: SpacingTokens,
    pub background: BackgroundTokens,
    pub typography: TypographyTokens,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpacingTokens {
    pub hero_top_gap: Option<f64>,
    pub headline_gap: Option<f64>,
    pub phone_top_gap: Option<f64>,
    pub phone_to_badge_gap: Option<f64>,
    pub bottom_pad: Option<f64>,
    pub phone_width: Option<f64>,
    pub badge_width: Option<f64>,
    pub phone_image: Option<PhoneImage>,
    pub phone_screen_inset_base: Option<InsetBase>,
    pub phone_screen_radius_base: Option<f64>,
    pub phone_aspect: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PhoneImage {
    pub w: Option<f64>,
    pub h: Option<f64>,
}

#[derive(Clone, Copy, Debug, serde::Deserialize)]
pub struct InsetBase {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundTokens {
    pub scale: Option<f64>,
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
    pub offset_y_px: Option<f64>,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct TypographyTokens {
    pub h1: FontTokens,
    pub h2: FontTokens,
}

#[derive(Clone, Copy, Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontTokens {
    pub px: Option<f64>,
    pub weight: Option<u32>,
    pub line_height: Option<f64>,
}

// ---------- ui_spec.json (after reference resolution) ----------

#[derive(Clone, Debug, serde::Deserialize)]
pub struct UiSpec {
    pub hero: HeroSpec,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct HeroSpec {
    pub background: BackgroundSpec,
    pub header: HeaderSpec,
    pub centerpiece: CenterpieceSpec,
    pub badge: BadgeSpec,
    #[serde(default)]
    pub layout: LayoutSpec,
    #[serde(default)]
    pub tuning: TuningSpec,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundSpec {
    pub overlay_opacity: Option<f64>,
    pub scale: Option<f64>,
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
    pub offset_y_px: Option<f64>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct HeaderSpec {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Copy, Debug, serde::Deserialize)]
pub struct CenterpieceSpec {
    pub width: f64,
}

#[derive(Clone, Copy, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeSpec {
    pub width: f64,
    pub ratio_to_phone: Option<f64>,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutSpec {
    pub hero_top_gap: Option<f64>,
    pub headline_gap: Option<f64>,
    pub phone_top_gap: Option<f64>,
    pub phone_to_badge_gap: Option<f64>,
    pub bottom_pad: Option<f64>,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TuningSpec {
    pub lock_phone_width: Option<bool>,
    pub phone_width_locked_px: Option<f64>,
}

// ---------- copy_timeline.json ----------

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineFile {
    /// Legacy key, e.g. `"public/assets/hero.mp4"`.
    pub video: Option<String>,
    /// Preferred key; either is normalized to a `/assets/...` path.
    pub src: Option<String>,
    pub fade_ms: Option<f64>,
    pub duration: Option<f64>,
    pub cues: Option<Vec<CueFile>>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct CueFile {
    pub start: f64,
    #[serde(default)]
    pub end: Option<f64>,
    pub heading: String,
    pub subheading: String,
}
