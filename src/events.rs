//! Listener wiring and teardown.
//!
//! Every closure handed to the platform is retained here (nothing is
//! `forget`-leaked) and `dispose` detaches listeners symmetrically, drops
//! the callbacks and releases the pool.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::lifecycle::Effects;
use crate::dom;
use crate::frame::{self, CallbackSlot, Shared};

/// Retained listener closures; dropped as a unit on dispose.
pub struct Hooks {
    resize: Closure<dyn FnMut()>,
    visibility: Closure<dyn FnMut()>,
    pagehide: Closure<dyn FnMut()>,
}

pub type HookSlot = Rc<RefCell<Option<Hooks>>>;

/// Wire resize/visibility/pagehide, install the frame and settle callbacks
/// and start the loop.
pub fn start(engine: Shared) {
    let tick: CallbackSlot = Rc::new(RefCell::new(None));
    let settle: CallbackSlot = Rc::new(RefCell::new(None));
    let hooks: HookSlot = Rc::new(RefCell::new(None));

    // Frame tick: draw only while Running, then schedule the next frame.
    {
        let engine_t = engine.clone();
        let tick_t = tick.clone();
        let settle_t = settle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !engine_t.borrow_mut().state.frame_began() {
                return;
            }
            engine_t.borrow_mut().advance_and_draw();
            frame::apply_effects(
                &engine_t,
                &tick_t,
                &settle_t,
                Effects {
                    request_frame: true,
                    ..Effects::default()
                },
            );
        }) as Box<dyn FnMut()>));
    }

    // Resize debounce elapsed: rebuild the pool, resume if visible.
    {
        let engine_s = engine.clone();
        let tick_s = tick.clone();
        let settle_s = settle.clone();
        *settle.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let fx = engine_s.borrow_mut().state.settle_fired();
            frame::apply_effects(&engine_s, &tick_s, &settle_s, fx);
        }) as Box<dyn FnMut()>));
    }

    let resize = {
        let engine_r = engine.clone();
        let tick_r = tick.clone();
        let settle_r = settle.clone();
        Closure::wrap(Box::new(move || {
            let fx = engine_r.borrow_mut().state.resize_observed();
            frame::apply_effects(&engine_r, &tick_r, &settle_r, fx);
        }) as Box<dyn FnMut()>)
    };

    let visibility = {
        let engine_v = engine.clone();
        let tick_v = tick.clone();
        let settle_v = settle.clone();
        Closure::wrap(Box::new(move || {
            let hidden = dom::window_document()
                .map(|(_, d)| d.hidden())
                .unwrap_or(true);
            let fx = engine_v.borrow_mut().state.visibility_changed(hidden);
            frame::apply_effects(&engine_v, &tick_v, &settle_v, fx);
        }) as Box<dyn FnMut()>)
    };

    let pagehide = {
        let engine_p = engine.clone();
        let tick_p = tick.clone();
        let settle_p = settle.clone();
        let hooks_p = hooks.clone();
        Closure::wrap(Box::new(move || {
            dispose(&engine_p, &tick_p, &settle_p, &hooks_p);
        }) as Box<dyn FnMut()>)
    };

    if let Some((window, document)) = dom::window_document() {
        _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        _ = document.add_event_listener_with_callback(
            "visibilitychange",
            visibility.as_ref().unchecked_ref(),
        );
        _ = window.add_event_listener_with_callback("pagehide", pagehide.as_ref().unchecked_ref());
    }
    *hooks.borrow_mut() = Some(Hooks {
        resize,
        visibility,
        pagehide,
    });

    // A tab can already be hidden at load; report that before starting so
    // the machine begins Paused instead of scheduling a frame.
    let hidden = dom::window_document()
        .map(|(_, d)| d.hidden())
        .unwrap_or(true);
    let fx = {
        let mut e = engine.borrow_mut();
        let _ = e.state.visibility_changed(hidden);
        e.state.start()
    };
    frame::apply_effects(&engine, &tick, &settle, fx);
    log::info!("[lifecycle] loop started (hidden={hidden})");
}

/// Tear everything down: cancel pending work, detach listeners, drop the
/// retained closures and release the pool. Safe to call more than once.
pub fn dispose(engine: &Shared, tick: &CallbackSlot, settle: &CallbackSlot, hooks: &HookSlot) {
    let fx = engine.borrow_mut().state.dispose();
    frame::apply_effects(engine, tick, settle, fx);
    if let Some(h) = hooks.borrow_mut().take() {
        if let Some((window, document)) = dom::window_document() {
            _ = window
                .remove_event_listener_with_callback("resize", h.resize.as_ref().unchecked_ref());
            _ = document.remove_event_listener_with_callback(
                "visibilitychange",
                h.visibility.as_ref().unchecked_ref(),
            );
            _ = window.remove_event_listener_with_callback(
                "pagehide",
                h.pagehide.as_ref().unchecked_ref(),
            );
        }
        log::info!("[lifecycle] engine disposed");
    }
    *tick.borrow_mut() = None;
    *settle.borrow_mut() = None;
    engine.borrow_mut().particles = Vec::new();
}
