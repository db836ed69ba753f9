//! Well-known static asset paths and public-path normalization.
//!
//! Paths are a convention shared with the host page; only the timeline's
//! media source is overridable at runtime.

pub const CLOUDS: &str = "/assets/clouds.png";
pub const PHONE: &str = "/assets/phone.png";
pub const APPSTORE_BADGE: &str = "/assets/appstore-badge.png";
pub const HERO_VIDEO: &str = "/assets/hero.mp4";

pub const AVATAR_COUNT: usize = 6;

/// `/assets/avatars/a1.png` .. `/assets/avatars/a6.png`.
pub fn avatar_path(index: usize) -> String {
    format!("/assets/avatars/a{}.png", (index % AVATAR_COUNT) + 1)
}

/// Normalizes a document-supplied media path to a public asset path.
///
/// A path already under `/assets/` passes through untouched. Anything else
/// has a single leading `public/` stripped and gains a leading `/`.
pub fn normalize_public_path(p: &str) -> String {
    if p.starts_with("/assets/") {
        return p.to_string();
    }
    let stripped = p.strip_prefix("public/").unwrap_or(p);
    if let Some(rest) = stripped.strip_prefix('/') {
        format!("/{rest}")
    } else {
        format!("/{stripped}")
    }
}
