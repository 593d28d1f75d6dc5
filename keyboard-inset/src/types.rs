use core::fmt;
use core::str::FromStr;

/// Vertical extent of a node in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Returns the bounds moved down by `dy` (up when negative).
    pub fn shifted(self, dy: f64) -> Self {
        Self {
            top: self.top + dy,
            bottom: self.bottom + dy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ios") {
            Ok(Self::Ios)
        } else if s.eq_ignore_ascii_case("android") {
            Ok(Self::Android)
        } else {
            Err(UnknownPlatform)
        }
    }
}

/// Returned when a platform name is neither `ios` nor `android`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownPlatform;

impl fmt::Display for UnknownPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown platform (expected `ios` or `android`)")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownPlatform {}

/// Whether the keyboard is coming up or going away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Show,
    Hide,
}

/// How a computed offset is put on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Translate the scroll container with a CSS transform, immediately.
    Transform,
    /// Animate the scroll container's native scroll position after a settle delay.
    Scroll,
}

/// A text selection range inside an input, in UTF-16 code units as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub start: u32,
    pub end: u32,
}

impl Selection {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn caret(at: u32) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}
