//! Proximity linking: which particle pairs get a connecting line this frame.
//!
//! Pure computation over the pool; links are recomputed from scratch every
//! frame and never stored.

use super::field::Particle;

/// An ephemeral edge between pool entries `i` and `j` (`i < j`). `alpha` is
/// the distance falloff in [0, 1]; the renderer scales it by the configured
/// base opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub i: usize,
    pub j: usize,
    pub alpha: f32,
}

#[inline]
pub fn distance(a: &Particle, b: &Particle) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Linear falloff: 1 at zero distance, exactly 0 at the threshold, clamped
/// below. Monotonically non-increasing in distance.
#[inline]
pub fn link_alpha(distance: f32, threshold: f32) -> f32 {
    if threshold <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / threshold).max(0.0)
}

/// Lazily yield links for every pair within `threshold`, scanning j > i in
/// pool order. Each particle i stops scanning after `max_per_particle`
/// emissions, which bounds per-particle cost; the set of pairs surviving
/// that truncation therefore depends on pool order. Untruncated, the pair
/// set is exactly `{(i, j) : distance < threshold}` regardless of order.
pub fn link_pairs(
    particles: &[Particle],
    threshold: f32,
    max_per_particle: usize,
) -> LinkIter<'_> {
    LinkIter {
        particles,
        threshold,
        max_per_particle,
        i: 0,
        j: 1,
        emitted_for_i: 0,
    }
}

pub struct LinkIter<'a> {
    particles: &'a [Particle],
    threshold: f32,
    max_per_particle: usize,
    i: usize,
    j: usize,
    emitted_for_i: usize,
}

impl Iterator for LinkIter<'_> {
    type Item = Link;

    fn next(&mut self) -> Option<Link> {
        let n = self.particles.len();
        loop {
            if self.i + 1 >= n {
                return None;
            }
            if self.emitted_for_i >= self.max_per_particle || self.j >= n {
                self.i += 1;
                self.j = self.i + 1;
                self.emitted_for_i = 0;
                continue;
            }
            let j = self.j;
            self.j += 1;
            let d = distance(&self.particles[self.i], &self.particles[j]);
            if d < self.threshold {
                self.emitted_for_i += 1;
                return Some(Link {
                    i: self.i,
                    j,
                    alpha: link_alpha(d, self.threshold),
                });
            }
        }
    }
}
