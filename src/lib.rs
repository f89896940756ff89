#![cfg(target_arch = "wasm32")]
//! Ambient particle-field background for a page canvas.
//!
//! Mounts on `#particles-canvas` and renders slowly drifting points with
//! proximity-based linking. Resource budgets come from a device profile
//! computed once at startup; the loop pauses while the page is hidden and
//! tears down on pagehide. A missing canvas (or an opted-out tier) is a
//! silent no-op.

use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod render;

use crate::core::config::EngineConfig;
use crate::core::device::DeviceProfile;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-field starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let profile = dom::read_device_signals(&window)
        .map(|s| DeviceProfile::classify(&s))
        .unwrap_or_else(DeviceProfile::conservative);
    log::info!(
        "[device] tier={:?} touch={}",
        profile.tier(),
        profile.is_touch
    );

    if dom::media_matches(&window, "(prefers-reduced-motion: reduce)") {
        log::info!("[device] reduced motion preferred; particle field disabled");
        return Ok(());
    }

    let policy = crate::core::config::TierPolicy::default();
    let config = match EngineConfig::for_tier(profile.tier(), &policy) {
        Some(c) => c,
        None => {
            log::info!("[device] tier {:?} opted out by policy", profile.tier());
            return Ok(());
        }
    };

    // Missing mount point or 2D context: degrade to a no-op, not an error.
    let canvas = match dom::find_canvas(&document, constants::CANVAS_ID) {
        Some(c) => c,
        None => return Ok(()),
    };
    let ctx = match dom::context_2d(&canvas) {
        Some(c) => c,
        None => return Ok(()),
    };

    let engine = frame::Engine::shared(&window, canvas, ctx, config);
    events::start(engine);
    Ok(())
}
