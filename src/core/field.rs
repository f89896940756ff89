//! The particle pool: plain data records plus pure provision/advance
//! functions over an explicit array.

use rand::Rng;

use super::config::EngineConfig;
use super::surface::Surface;

/// One drifting point in CSS-pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub opacity: f32,
}

/// Pool size for a surface: clamp(floor(area / budget), 0, cap).
pub fn target_count(surface: &Surface, config: &EngineConfig) -> usize {
    if config.area_per_particle <= 0.0 {
        return 0;
    }
    let raw = (surface.area() / config.area_per_particle).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(config.max_particles)
    }
}

/// Build a fresh pool for the surface. Callers replace the whole pool by
/// reference so an in-progress draw never observes a half-built one.
pub fn provision(surface: &Surface, config: &EngineConfig, rng: &mut impl Rng) -> Vec<Particle> {
    (0..target_count(surface, config))
        .map(|_| spawn(surface, config, rng))
        .collect()
}

fn spawn(surface: &Surface, config: &EngineConfig, rng: &mut impl Rng) -> Particle {
    let (r_lo, r_hi) = config.radius_range;
    let (o_lo, o_hi) = config.opacity_range;
    Particle {
        x: rng.gen_range(0.0..surface.css_width),
        y: rng.gen_range(0.0..surface.css_height),
        vx: rng.gen_range(-config.speed_limit..config.speed_limit),
        vy: rng.gen_range(-config.speed_limit..config.speed_limit),
        radius: rng.gen_range(r_lo..r_hi),
        opacity: rng.gen_range(o_lo..o_hi),
    }
}

/// Integrate one frame of linear motion with toroidal wraparound; the
/// resulting position always lies in [0, W) × [0, H).
pub fn advance(particle: &mut Particle, surface: &Surface) {
    particle.x = wrap(particle.x + particle.vx, surface.css_width);
    particle.y = wrap(particle.y + particle.vy, surface.css_height);
}

#[inline]
fn wrap(value: f32, bound: f32) -> f32 {
    if bound <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(bound);
    // rem_euclid can round up to the bound itself for tiny negative inputs
    if wrapped >= bound {
        0.0
    } else {
        wrapped
    }
}
