//! Plain-data description of the static hero page, derived from a
//! [`HeroConfig`]. This is what a markup layer consumes; it carries no
//! behavior and serializes cleanly across a host boundary.

use crate::assets;
use crate::core::Rect;
use crate::hero::HeroConfig;

#[derive(Clone, Debug, serde::Serialize)]
pub struct HeroScene {
    pub background: BackgroundLayer,
    /// Black overlay on top of the background; omitted at zero opacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrim_opacity: Option<f64>,
    pub heading_block: HeadingBlock,
    pub phone: PhoneFrame,
    pub badge: BadgeLayer,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct BackgroundLayer {
    pub image: String,
    pub scale: f64,
    /// Object position, percent of each axis.
    pub pos_x: f64,
    pub pos_y: f64,
    pub offset_y_px: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct HeadingBlock {
    /// Distance from the top of the page, px.
    pub top: i64,
    /// Reserved height; the phone mockup starts below this.
    pub height: i64,
    pub title: String,
    pub subtitle: String,
    pub headline_gap: i64,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct PhoneFrame {
    pub image: String,
    pub width: i64,
    pub height: i64,
    /// Gap between the heading block and the bezel, px.
    pub top_gap: i64,
    /// Content window carved out of the bezel, in frame-local px.
    pub screen: Rect,
    pub screen_radius: i64,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct BadgeLayer {
    pub image: String,
    pub width: i64,
    /// Gap between the phone and the badge, px.
    pub top_gap: i64,
}

/// Lays the resolved configuration out as a scene. Pure data mapping; all
/// sizing decisions already happened during resolution.
pub fn hero_scene(cfg: &HeroConfig) -> HeroScene {
    let phone_height = (cfg.phone_width as f64 * cfg.phone_aspect).round() as i64;
    HeroScene {
        background: BackgroundLayer {
            image: assets::CLOUDS.to_string(),
            scale: cfg.bg_scale,
            pos_x: cfg.bg_pos_x,
            pos_y: cfg.bg_pos_y,
            offset_y_px: cfg.bg_offset_y,
        },
        scrim_opacity: (cfg.scrim_opacity > 0.0).then_some(cfg.scrim_opacity),
        heading_block: HeadingBlock {
            top: cfg.hero_top_gap,
            height: cfg.heading_block_height,
            title: cfg.title.clone(),
            subtitle: cfg.subtitle.clone(),
            headline_gap: cfg.headline_gap,
        },
        phone: PhoneFrame {
            image: assets::PHONE.to_string(),
            width: cfg.phone_width,
            height: phone_height,
            top_gap: cfg.phone_top_gap,
            screen: Rect::inset_of(cfg.phone_width, phone_height, cfg.screen_inset),
            screen_radius: cfg.screen_radius,
        },
        badge: BadgeLayer {
            image: assets::APPSTORE_BADGE.to_string(),
            width: cfg.badge_width,
            top_gap: cfg.phone_to_badge_gap,
        },
    }
}
