//! Small foundation value types shared across the resolver and the scene.

/// Integer pixel insets measured from each edge of a containing box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Insets {
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
    pub left: i64,
}

impl Insets {
    pub fn new(top: i64, right: i64, bottom: i64, left: i64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    /// The rectangle left after carving `insets` out of a `width` x `height` box.
    /// Degenerate insets clamp to an empty rectangle rather than going negative.
    pub fn inset_of(width: i64, height: i64, insets: Insets) -> Self {
        let w = (width - insets.left - insets.right).max(0);
        let h = (height - insets.top - insets.bottom).max(0);
        Self {
            x: insets.left,
            y: insets.top,
            width: w,
            height: h,
        }
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }
}

/// One resolved text style: size in px, CSS-style weight, unitless line height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TypeStyle {
    pub px: f64,
    pub weight: u32,
    pub line_height: f64,
}

impl TypeStyle {
    /// Vertical space one line of this style occupies, rounded up to whole px.
    pub fn line_px(&self) -> i64 {
        (self.px * self.line_height).ceil() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_of_carves_rectangle() {
        let r = Rect::inset_of(100, 200, Insets::new(10, 5, 20, 5));
        assert_eq!(
            r,
            Rect {
                x: 5,
                y: 10,
                width: 90,
                height: 170
            }
        );
    }

    #[test]
    fn inset_of_clamps_to_empty() {
        let r = Rect::inset_of(10, 10, Insets::new(8, 8, 8, 8));
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 0);
    }

    #[test]
    fn line_px_rounds_up() {
        let h1 = TypeStyle {
            px: 64.94,
            weight: 700,
            line_height: 1.05,
        };
        // 64.94 * 1.05 = 68.187
        assert_eq!(h1.line_px(), 69);
    }
}
