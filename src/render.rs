//! Canvas2D drawing: particles as filled arcs, links as thin strokes. All
//! coordinates are CSS pixels; the context transform set up by `dom` maps
//! them onto the backing store.

use web_sys as web;

use crate::constants;
use crate::core::config::EngineConfig;
use crate::core::field::Particle;
use crate::core::links;
use crate::core::surface::Surface;

/// Draw one full frame: clear, particles, then links. Link drawing is
/// skipped outright when the pool is too dense to keep frame cost bounded.
pub fn draw_frame(
    ctx: &web::CanvasRenderingContext2d,
    surface: &Surface,
    particles: &[Particle],
    config: &EngineConfig,
) {
    ctx.clear_rect(
        0.0,
        0.0,
        surface.css_width as f64,
        surface.css_height as f64,
    );
    for p in particles {
        draw_particle(ctx, p);
    }
    if particles.len() <= config.skip_links_above {
        draw_links(ctx, particles, config);
    }
}

fn draw_particle(ctx: &web::CanvasRenderingContext2d, p: &Particle) {
    ctx.begin_path();
    _ = ctx.arc(
        p.x as f64,
        p.y as f64,
        p.radius as f64,
        0.0,
        std::f64::consts::TAU,
    );
    ctx.set_fill_style_str(&constants::accent_rgba(p.opacity));
    ctx.fill();
}

fn draw_links(
    ctx: &web::CanvasRenderingContext2d,
    particles: &[Particle],
    config: &EngineConfig,
) {
    ctx.set_line_width(constants::LINK_LINE_WIDTH);
    for link in links::link_pairs(
        particles,
        config.link_threshold_px,
        config.max_links_per_particle,
    ) {
        let a = &particles[link.i];
        let b = &particles[link.j];
        ctx.begin_path();
        ctx.set_stroke_style_str(&constants::accent_rgba(config.link_base_alpha * link.alpha));
        ctx.move_to(a.x as f64, a.y as f64);
        ctx.line_to(b.x as f64, b.y as f64);
        ctx.stroke();
    }
}
