//! Palette and mount-point constants shared by the renderer.

/// Id of the canvas the engine mounts on; absence is a silent no-op.
pub const CANVAS_ID: &str = "particles-canvas";

// Site accent color (cyan), shared by particles and links
pub const ACCENT_R: u8 = 0;
pub const ACCENT_G: u8 = 217;
pub const ACCENT_B: u8 = 255;

pub const LINK_LINE_WIDTH: f64 = 0.5;

/// CSS color string for the accent at the given opacity.
#[inline]
pub fn accent_rgba(alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        ACCENT_R,
        ACCENT_G,
        ACCENT_B,
        alpha.clamp(0.0, 1.0)
    )
}
