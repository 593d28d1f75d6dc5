use crate::Platform;

/// Bounds for the animated native scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTiming {
    pub min_duration_ms: u64,
    pub max_duration_ms: u64,
    /// Pixels covered per millisecond before clamping.
    pub speed_px_per_ms: f64,
}

impl ScrollTiming {
    /// Animation duration for a scroll of `distance` pixels (either sign).
    pub fn duration_ms(&self, distance: f64) -> u64 {
        let raw = if self.speed_px_per_ms > 0.0 {
            (distance.abs() / self.speed_px_per_ms) as u64
        } else {
            self.max_duration_ms
        };
        raw.clamp(self.min_duration_ms, self.max_duration_ms)
    }
}

/// Per-platform timing and transition defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlatformProfile {
    pub platform: Platform,
    /// Wait before measuring, so the webview's own scroll-into-view can finish first.
    pub settle_delay_ms: u64,
    /// Wait after the scroll animation before focus and selection are restored.
    pub refocus_delay_ms: u64,
    pub scroll: ScrollTiming,
    pub show_transition: &'static str,
    pub hide_transition: &'static str,
}

const SCROLL_TIMING: ScrollTiming = ScrollTiming {
    min_duration_ms: 150,
    max_duration_ms: 600,
    speed_px_per_ms: 0.6,
};

static IOS: PlatformProfile = PlatformProfile {
    platform: Platform::Ios,
    settle_delay_ms: 350,
    refocus_delay_ms: 50,
    scroll: SCROLL_TIMING,
    show_transition: "transform 250ms cubic-bezier(0.38, 0.7, 0.125, 1)",
    hide_transition: "transform 250ms cubic-bezier(0.38, 0.7, 0.125, 1)",
};

static ANDROID: PlatformProfile = PlatformProfile {
    platform: Platform::Android,
    settle_delay_ms: 0,
    refocus_delay_ms: 50,
    scroll: SCROLL_TIMING,
    show_transition: "transform 200ms ease-out",
    hide_transition: "transform 150ms ease-in",
};

impl PlatformProfile {
    pub fn for_platform(platform: Platform) -> &'static PlatformProfile {
        match platform {
            Platform::Ios => &IOS,
            Platform::Android => &ANDROID,
        }
    }
}
