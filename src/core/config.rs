//! Engine tuning as explicit configuration.
//!
//! Earlier revisions of this effect hard-coded divergent densities, caps and
//! thresholds per device class; here every budget is a config field so the
//! per-tier policy is visible and testable.

use super::device::Tier;

/// What to do on constrained (mobile/tablet) tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstrainedPolicy {
    /// Do not run the engine at all.
    Disable,
    /// Run with a sparser field and lower cap.
    Throttle,
}

/// Per-tier policy for constrained devices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierPolicy {
    pub tablet: ConstrainedPolicy,
    pub mobile: ConstrainedPolicy,
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self {
            tablet: ConstrainedPolicy::Throttle,
            mobile: ConstrainedPolicy::Disable,
        }
    }
}

/// Resource budgets and visual tuning for one engine instance.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// CSS-pixel area budgeted per particle; count = floor(area / this).
    pub area_per_particle: f32,
    /// Hard cap on the pool size.
    pub max_particles: usize,
    /// Maximum distance (CSS px) at which two particles get linked.
    pub link_threshold_px: f32,
    /// Per-particle cap on emitted links; bounds worst-case frame cost.
    pub max_links_per_particle: usize,
    /// Opacity of a zero-length link; decays linearly to 0 at the threshold.
    pub link_base_alpha: f32,
    /// Skip link drawing entirely above this pool size.
    pub skip_links_above: usize,
    /// Upper clamp for devicePixelRatio, bounding backing-store memory.
    pub pixel_ratio_cap: f64,
    /// Resize settle window in milliseconds.
    pub resize_debounce_ms: i32,
    /// Particle radius range (CSS px), half-open.
    pub radius_range: (f32, f32),
    /// Velocity components are uniform over ±this (CSS px per frame).
    pub speed_limit: f32,
    /// Particle fill opacity range, half-open.
    pub opacity_range: (f32, f32),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::desktop()
    }
}

impl EngineConfig {
    pub fn desktop() -> Self {
        Self {
            area_per_particle: 15_000.0,
            max_particles: 100,
            link_threshold_px: 120.0,
            max_links_per_particle: 3,
            link_base_alpha: 0.1,
            skip_links_above: 120,
            pixel_ratio_cap: 2.0,
            resize_debounce_ms: 250,
            radius_range: (0.5, 2.5),
            speed_limit: 0.25,
            opacity_range: (0.2, 0.7),
        }
    }

    /// Sparser field for constrained tiers running under `Throttle`.
    pub fn throttled() -> Self {
        Self {
            area_per_particle: 30_000.0,
            max_particles: 64,
            ..Self::desktop()
        }
    }

    /// Budget for a tier under the given policy; `None` means the engine
    /// must not run at all.
    pub fn for_tier(tier: Tier, policy: &TierPolicy) -> Option<Self> {
        let constrained = match tier {
            Tier::Desktop => return Some(Self::desktop()),
            Tier::Tablet => policy.tablet,
            Tier::Mobile => policy.mobile,
        };
        match constrained {
            ConstrainedPolicy::Disable => None,
            ConstrainedPolicy::Throttle => Some(Self::throttled()),
        }
    }
}
