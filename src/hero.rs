//! Resolution entry point: JSON documents in, one flat `HeroConfig` out.
//!
//! Every numeric field follows a three-tier fallback: value from the UI
//! spec first, then the token, then a hardcoded literal. The literals are
//! part of the document contract and must not drift.

use std::path::Path;

use serde_json::Value;

use crate::core::{Insets, TypeStyle};
use crate::docs::{
    self, COPY_FILE, InsetBase, TIMELINE_FILE, TOKENS_FILE, Tokens, UI_SPEC_FILE, UiSpec,
};
use crate::error::{CuelightError, CuelightResult};
use crate::resolve::{merge_context, resolve_refs};
use crate::timeline::Timeline;

// Reference phone bezel artwork, px. Screen insets below are measured
// against this image and scaled to the configured phone width.
const PHONE_IMAGE_W: f64 = 176.0;
const PHONE_IMAGE_H: f64 = 381.0;
const SCREEN_INSET_BASE: InsetBase = InsetBase {
    top: 22.0,
    right: 12.0,
    bottom: 58.0,
    left: 12.0,
};
const SCREEN_RADIUS_BASE: f64 = 28.0;

const DEFAULT_PHONE_WIDTH: f64 = 300.0;
const DEFAULT_HERO_TOP_GAP: f64 = 96.0;
const DEFAULT_HEADLINE_GAP: f64 = 12.0;
const DEFAULT_PHONE_TOP_GAP: f64 = 64.0;
const DEFAULT_PHONE_TO_BADGE_GAP: f64 = 72.0;
const DEFAULT_BOTTOM_PAD: f64 = 56.0;

const DEFAULT_H1: TypeStyle = TypeStyle {
    px: 64.94,
    weight: 700,
    line_height: 1.05,
};
const DEFAULT_H2: TypeStyle = TypeStyle {
    px: 48.7,
    weight: 400,
    line_height: 1.15,
};

/// The flat, reference-free, default-applied configuration handed to the
/// presentation layer. Plain serializable data only; it crosses a host
/// boundary.
#[derive(Clone, Debug, serde::Serialize)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    pub scrim_opacity: f64,

    /// Vertical px reserved for the h1 + gap + h2 block so the phone mockup
    /// never collides with text.
    pub heading_block_height: i64,
    pub phone_width: i64,
    pub badge_width: i64,

    pub hero_top_gap: i64,
    pub headline_gap: i64,
    pub phone_top_gap: i64,
    pub phone_to_badge_gap: i64,
    pub bottom_pad: i64,

    pub bg_scale: f64,
    pub bg_pos_x: f64,
    pub bg_pos_y: f64,
    pub bg_offset_y: f64,

    pub h1: TypeStyle,
    pub h2: TypeStyle,

    /// Bezel image height / width.
    pub phone_aspect: f64,
    pub screen_inset: Insets,
    pub screen_radius: i64,

    /// Always present; `cues` is at least an empty array.
    pub timeline: Timeline,
}

/// Loads `tokens.json`, `copy.json` and `ui_spec.json` from `specs_dir`
/// (all required), plus the optional `copy_timeline.json`, and resolves them
/// into a [`HeroConfig`]. Reference resolution failures and malformed
/// required documents fail here, before anything renders.
#[tracing::instrument(skip_all, fields(specs = %specs_dir.display()))]
pub fn load_hero_config(specs_dir: &Path) -> CuelightResult<HeroConfig> {
    let tokens_doc = docs::read_json(&specs_dir.join(TOKENS_FILE))?;
    let copy_doc = docs::read_json(&specs_dir.join(COPY_FILE))?;
    let ui_doc = docs::read_json(&specs_dir.join(UI_SPEC_FILE))?;

    // Optional: a missing or broken timeline never fails the page.
    let timeline_doc = match docs::read_json(&specs_dir.join(TIMELINE_FILE)) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::debug!(error = %e, "no usable timeline document");
            None
        }
    };

    resolve_hero(&tokens_doc, &copy_doc, &ui_doc, timeline_doc.as_ref())
}

/// Pure document-to-config resolution; see [`load_hero_config`] for the
/// filesystem wrapper.
pub fn resolve_hero(
    tokens_doc: &Value,
    copy_doc: &Value,
    ui_doc: &Value,
    timeline_doc: Option<&Value>,
) -> CuelightResult<HeroConfig> {
    let tokens: Tokens = serde_json::from_value(tokens_doc.clone())
        .map_err(|e| CuelightError::spec(format!("tokens document: {e}")))?;

    let ctx = merge_context(tokens_doc, copy_doc);
    let resolved = resolve_refs(ui_doc, &ctx)?;
    let ui: UiSpec = serde_json::from_value(resolved)
        .map_err(|e| CuelightError::spec(format!("ui spec document: {e}")))?;
    let hero = &ui.hero;

    let timeline = match timeline_doc {
        Some(doc) => match serde_json::from_value::<docs::TimelineFile>(doc.clone()) {
            Ok(file) => Timeline::from_file(file),
            Err(e) => {
                tracing::debug!(error = %e, "malformed timeline document, using empty timeline");
                Timeline::empty()
            }
        },
        None => Timeline::empty(),
    };

    let spacing = &tokens.spacing;

    // Phone width, with an optional lock used for ratio-derived sizing.
    let lock = hero.tuning.lock_phone_width.unwrap_or(false);
    let locked_width = if lock {
        hero.tuning
            .phone_width_locked_px
            .or(spacing.phone_width)
            .unwrap_or(hero.centerpiece.width)
    } else {
        hero.centerpiece.width
    };

    let ratio = hero.badge.ratio_to_phone.unwrap_or(0.0);
    let computed_badge = if ratio > 0.0 {
        (locked_width * ratio).round()
    } else {
        hero.badge.width
    };
    let badge_width = spacing.badge_width.unwrap_or(computed_badge);

    // Screen geometry scales with the ratio of configured phone width to the
    // reference bezel width, so the content window tracks the artwork.
    let ref_w = spacing
        .phone_image
        .and_then(|p| p.w)
        .unwrap_or(PHONE_IMAGE_W);
    let ref_h = spacing
        .phone_image
        .and_then(|p| p.h)
        .unwrap_or(PHONE_IMAGE_H);
    let scale = spacing
        .phone_width
        .filter(|w| *w > 0.0)
        .unwrap_or(DEFAULT_PHONE_WIDTH)
        / ref_w;
    // Bases stay fractional; rounding happens once, after scaling.
    let base_inset = spacing
        .phone_screen_inset_base
        .unwrap_or(SCREEN_INSET_BASE);
    let base_radius = spacing.phone_screen_radius_base.unwrap_or(SCREEN_RADIUS_BASE);

    let scale_px = |v: f64| (v * scale).round() as i64;

    let h1 = font_style(&tokens.typography.h1, DEFAULT_H1);
    let h2 = font_style(&tokens.typography.h2, DEFAULT_H2);
    let headline_gap = hero
        .layout
        .headline_gap
        .or(spacing.headline_gap)
        .unwrap_or(DEFAULT_HEADLINE_GAP);

    // The reserved height comes from tokens alone; a UI-tier gap override
    // changes spacing but not the reserved block.
    let token_gap = spacing.headline_gap.unwrap_or(DEFAULT_HEADLINE_GAP);
    let heading_block_height = h1.line_px() + token_gap.ceil() as i64 + h2.line_px();

    let tier =
        |ui: Option<f64>, token: Option<f64>, literal: f64| ui.or(token).unwrap_or(literal);

    Ok(HeroConfig {
        title: hero.header.title.clone(),
        subtitle: hero.header.subtitle.clone(),
        scrim_opacity: hero.background.overlay_opacity.unwrap_or(0.0),

        heading_block_height,
        phone_width: spacing.phone_width.unwrap_or(DEFAULT_PHONE_WIDTH).round() as i64,
        badge_width: badge_width.round() as i64,

        hero_top_gap: tier(
            hero.layout.hero_top_gap,
            spacing.hero_top_gap,
            DEFAULT_HERO_TOP_GAP,
        )
        .round() as i64,
        headline_gap: headline_gap.round() as i64,
        phone_top_gap: tier(
            hero.layout.phone_top_gap,
            spacing.phone_top_gap,
            DEFAULT_PHONE_TOP_GAP,
        )
        .round() as i64,
        phone_to_badge_gap: tier(
            hero.layout.phone_to_badge_gap,
            spacing.phone_to_badge_gap,
            DEFAULT_PHONE_TO_BADGE_GAP,
        )
        .round() as i64,
        bottom_pad: tier(hero.layout.bottom_pad, spacing.bottom_pad, DEFAULT_BOTTOM_PAD).round()
            as i64,

        bg_scale: tier(hero.background.scale, tokens.background.scale, 1.0),
        bg_pos_x: tier(hero.background.pos_x, tokens.background.pos_x, 50.0),
        bg_pos_y: tier(hero.background.pos_y, tokens.background.pos_y, 50.0),
        bg_offset_y: tier(
            hero.background.offset_y_px,
            tokens.background.offset_y_px,
            0.0,
        ),

        h1,
        h2,

        phone_aspect: spacing.phone_aspect.unwrap_or(ref_h / ref_w),
        screen_inset: Insets {
            top: scale_px(base_inset.top),
            right: scale_px(base_inset.right),
            bottom: scale_px(base_inset.bottom),
            left: scale_px(base_inset.left),
        },
        screen_radius: (base_radius * scale).round() as i64,

        timeline,
    })
}

fn font_style(tokens: &docs::FontTokens, default: TypeStyle) -> TypeStyle {
    TypeStyle {
        px: tokens.px.unwrap_or(default.px),
        weight: tokens.weight.unwrap_or(default.weight),
        line_height: tokens.line_height.unwrap_or(default.line_height),
    }
}
