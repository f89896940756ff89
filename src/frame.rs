//! Engine state and effect execution.
//!
//! `Engine` owns one canvas, its surface geometry, the particle pool and
//! the pure loop state machine. Platform events feed the state machine
//! (see `events`); the resulting `Effects` are executed here against
//! `requestAnimationFrame` and `setTimeout`.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::config::EngineConfig;
use crate::core::field::{self, Particle};
use crate::core::lifecycle::{Effects, LoopState};
use crate::core::surface::Surface;
use crate::{dom, render};

pub struct Engine {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub config: EngineConfig,
    pub surface: Surface,
    pub particles: Vec<Particle>,
    pub state: LoopState,
}

pub type Shared = Rc<RefCell<Engine>>;
/// Slot holding a long-lived callback; cleared on dispose so the closure
/// (and the Rc cycle through it) is actually dropped.
pub type CallbackSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

impl Engine {
    /// Measure the canvas, size its backing store and build the initial
    /// pool. The loop itself is started by `events::start`.
    pub fn shared(
        window: &web::Window,
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        config: EngineConfig,
    ) -> Shared {
        let surface = dom::measure_surface(window, &canvas, config.pixel_ratio_cap);
        dom::apply_surface(&canvas, &ctx, &surface);
        let particles = field::provision(&surface, &config, &mut rand::thread_rng());
        log::info!(
            "[field] provisioned {} particles for {:.0}x{:.0} @{}x",
            particles.len(),
            surface.css_width,
            surface.css_height,
            surface.pixel_ratio
        );
        Rc::new(RefCell::new(Engine {
            canvas,
            ctx,
            config,
            surface,
            particles,
            state: LoopState::new(),
        }))
    }

    /// Re-measure the surface and swap in a fresh pool. Runs after the
    /// resize debounce settles, never mid-frame.
    pub fn reprovision(&mut self) {
        let window = match web::window() {
            Some(w) => w,
            None => return,
        };
        self.surface = dom::measure_surface(&window, &self.canvas, self.config.pixel_ratio_cap);
        dom::apply_surface(&self.canvas, &self.ctx, &self.surface);
        self.particles = field::provision(&self.surface, &self.config, &mut rand::thread_rng());
        log::info!(
            "[field] re-provisioned {} particles for {:.0}x{:.0}",
            self.particles.len(),
            self.surface.css_width,
            self.surface.css_height
        );
    }

    /// One frame: advance the whole pool, then draw it.
    pub fn advance_and_draw(&mut self) {
        for p in self.particles.iter_mut() {
            field::advance(p, &self.surface);
        }
        render::draw_frame(&self.ctx, &self.surface, &self.particles, &self.config);
    }
}

/// Execute the effects a state transition asked for.
pub fn apply_effects(engine: &Shared, tick: &CallbackSlot, settle: &CallbackSlot, fx: Effects) {
    let window = match web::window() {
        Some(w) => w,
        None => return,
    };
    if let Some(handle) = fx.cancel_frame {
        _ = window.cancel_animation_frame(handle);
    }
    if let Some(handle) = fx.cancel_settle {
        window.clear_timeout_with_handle(handle);
    }
    if fx.reprovision {
        engine.borrow_mut().reprovision();
    }
    if fx.schedule_settle {
        if let Some(cb) = settle.borrow().as_ref() {
            let ms = engine.borrow().config.resize_debounce_ms;
            if let Ok(handle) = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    ms,
                )
            {
                engine.borrow_mut().state.settle_scheduled(handle);
            }
        }
    }
    if fx.request_frame {
        if let Some(cb) = tick.borrow().as_ref() {
            if let Ok(handle) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                engine.borrow_mut().state.frame_scheduled(handle);
            }
        }
    }
}
