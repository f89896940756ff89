use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::device::{self, DeviceSignals};
use crate::core::surface::Surface;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

#[inline]
pub fn find_canvas(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

#[inline]
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()
}

#[inline]
pub fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Sample the raw facts the device classifier needs. Called once at init;
/// `None` when the viewport cannot be measured (the caller then falls back
/// to the conservative profile instead of assuming desktop).
pub fn read_device_signals(window: &web::Window) -> Option<DeviceSignals> {
    let viewport_width = window.inner_width().ok().and_then(|v| v.as_f64())?;
    let navigator = window.navigator();
    let ua = navigator.user_agent().unwrap_or_default();
    Some(DeviceSignals {
        viewport_width,
        coarse_pointer: media_matches(window, "(pointer: coarse)"),
        touch_points: navigator.max_touch_points(),
        mobile_ua: device::is_mobile_ua(&ua),
        tablet_ua: device::is_tablet_ua(&ua),
    })
}

/// Read the canvas layout box and the (capped) pixel density.
pub fn measure_surface(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ratio_cap: f64,
) -> Surface {
    let rect = canvas.get_bounding_client_rect();
    Surface::from_raw(
        rect.width(),
        rect.height(),
        window.device_pixel_ratio(),
        ratio_cap,
    )
}

/// Size the backing store to CSS × ratio, pin the CSS size, and scale the
/// context so all drawing stays in CSS-pixel units. Setting the canvas
/// width resets the context transform, so this re-applies it every time.
pub fn apply_surface(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    surface: &Surface,
) {
    canvas.set_width(surface.backing_width());
    canvas.set_height(surface.backing_height());
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", surface.css_width));
    _ = style.set_property("height", &format!("{}px", surface.css_height));
    let r = surface.pixel_ratio as f64;
    _ = ctx.set_transform(r, 0.0, 0.0, r, 0.0, 0.0);
}
