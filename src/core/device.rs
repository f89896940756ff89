//! Device capability classification.
//!
//! The profile is computed once at startup from raw platform facts and then
//! passed into the engine by value; nothing here reads ambient global state.

/// Raw facts sampled from the platform before the engine starts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceSignals {
    /// Viewport width in CSS pixels.
    pub viewport_width: f64,
    /// `(pointer: coarse)` media query result.
    pub coarse_pointer: bool,
    /// `navigator.maxTouchPoints`.
    pub touch_points: i32,
    /// User agent carries a phone marker.
    pub mobile_ua: bool,
    /// User agent carries a tablet marker.
    pub tablet_ua: bool,
}

/// Capability bucket driving resource budgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Desktop,
    Tablet,
    Mobile,
}

/// Immutable capability snapshot. Exactly one of the mobile/tablet/desktop
/// flags is true for any constructed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceProfile {
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    pub is_touch: bool,
}

// Viewport breakpoints (CSS px)
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

impl DeviceProfile {
    /// Classify raw signals into a profile. Precedence is mobile over tablet
    /// over desktop, which keeps the one-flag invariant even when the user
    /// agent matches both phone and tablet markers.
    pub fn classify(signals: &DeviceSignals) -> Self {
        let is_mobile = signals.mobile_ua
            || (signals.viewport_width <= MOBILE_MAX_WIDTH && signals.coarse_pointer);
        let is_tablet = !is_mobile
            && signals.tablet_ua
            && signals.viewport_width > MOBILE_MAX_WIDTH
            && signals.viewport_width <= TABLET_MAX_WIDTH;
        Self {
            is_mobile,
            is_tablet,
            is_desktop: !is_mobile && !is_tablet,
            is_touch: signals.touch_points > 0 || signals.coarse_pointer,
        }
    }

    /// Mobile-safe fallback used when the platform cannot be queried.
    pub fn conservative() -> Self {
        Self {
            is_mobile: true,
            is_tablet: false,
            is_desktop: false,
            is_touch: true,
        }
    }

    pub fn tier(&self) -> Tier {
        if self.is_mobile {
            Tier::Mobile
        } else if self.is_tablet {
            Tier::Tablet
        } else {
            Tier::Desktop
        }
    }
}

// UA markers are matched case-insensitively, like the usual /…/i patterns.

#[inline]
pub fn is_mobile_ua(ua: &str) -> bool {
    let ua = ua.to_ascii_lowercase();
    ["android", "webos", "iphone", "ipod", "blackberry", "iemobile", "opera mini"]
        .iter()
        .any(|marker| ua.contains(marker))
}

#[inline]
pub fn is_tablet_ua(ua: &str) -> bool {
    let ua = ua.to_ascii_lowercase();
    ua.contains("ipad") || ua.contains("android")
}
