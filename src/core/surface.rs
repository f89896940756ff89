//! Drawable-surface geometry: the mapping between CSS pixels (the space all
//! simulation and drawing happens in) and backing-store pixels.

/// Geometry of the mounted canvas. Replaced wholesale on resize, never
/// mutated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub css_width: f32,
    pub css_height: f32,
    /// Device pixel ratio after clamping; backing store = CSS size × this.
    pub pixel_ratio: f32,
}

impl Surface {
    /// Build from raw platform measurements. The ratio is clamped to
    /// `[1, ratio_cap]` so very high density screens do not blow up the
    /// backing-store cost.
    pub fn from_raw(css_width: f64, css_height: f64, raw_ratio: f64, ratio_cap: f64) -> Self {
        let ratio = raw_ratio.clamp(1.0, ratio_cap.max(1.0));
        Self {
            css_width: css_width.max(0.0) as f32,
            css_height: css_height.max(0.0) as f32,
            pixel_ratio: ratio as f32,
        }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.css_width * self.css_height
    }

    #[inline]
    pub fn backing_width(&self) -> u32 {
        ((self.css_width as f64 * self.pixel_ratio as f64).round() as u32).max(1)
    }

    #[inline]
    pub fn backing_height(&self) -> u32 {
        ((self.css_height as f64 * self.pixel_ratio as f64).round() as u32).max(1)
    }
}
