use alloc::string::String;

use crate::{Direction, Platform, PlatformProfile};

/// Gap kept between a focused element and the keyboard when no margin is configured.
pub const DEFAULT_MARGIN: f64 = 16.0;

/// A partial configuration update.
///
/// Every field is optional: `None` leaves the current value alone, so successive
/// [`Config::apply`] calls override field by field.
///
/// With `feature = "serde"`, this type (de)serializes with camelCase keys
/// (`iosShowTransition`, ...), so an options object coming from the webview can be decoded
/// directly.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct KeyboardOptions {
    /// Pixels kept between the element's bottom edge and the keyboard's top edge.
    pub margin: Option<f64>,

    /// CSS transition used for every platform and direction unless something narrower is set.
    pub transition: Option<String>,
    pub show_transition: Option<String>,
    pub ios_show_transition: Option<String>,
    pub android_show_transition: Option<String>,
    pub hide_transition: Option<String>,
    pub ios_hide_transition: Option<String>,
    pub android_hide_transition: Option<String>,
}

impl KeyboardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_transition(mut self, transition: impl Into<String>) -> Self {
        self.transition = Some(transition.into());
        self
    }

    pub fn with_show_transition(mut self, transition: impl Into<String>) -> Self {
        self.show_transition = Some(transition.into());
        self
    }

    pub fn with_hide_transition(mut self, transition: impl Into<String>) -> Self {
        self.hide_transition = Some(transition.into());
        self
    }

    /// Sets the transition for one platform and direction, the narrowest override there is.
    pub fn with_platform_transition(
        mut self,
        platform: Platform,
        direction: Direction,
        transition: impl Into<String>,
    ) -> Self {
        let slot = match (platform, direction) {
            (Platform::Ios, Direction::Show) => &mut self.ios_show_transition,
            (Platform::Android, Direction::Show) => &mut self.android_show_transition,
            (Platform::Ios, Direction::Hide) => &mut self.ios_hide_transition,
            (Platform::Android, Direction::Hide) => &mut self.android_hide_transition,
        };
        *slot = Some(transition.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The resolved configuration a controller works with.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub margin: f64,
    transitions: KeyboardOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            transitions: KeyboardOptions::default(),
        }
    }
}

impl Config {
    pub fn from_options(options: &KeyboardOptions) -> Self {
        let mut config = Self::default();
        config.apply(options);
        config
    }

    /// Overrides every field that is set in `options`; the rest keep their current values.
    pub fn apply(&mut self, options: &KeyboardOptions) {
        fn take(slot: &mut Option<String>, value: &Option<String>) {
            if let Some(v) = value {
                *slot = Some(v.clone());
            }
        }

        if let Some(margin) = options.margin {
            self.margin = margin;
        }
        let t = &mut self.transitions;
        take(&mut t.transition, &options.transition);
        take(&mut t.show_transition, &options.show_transition);
        take(&mut t.ios_show_transition, &options.ios_show_transition);
        take(&mut t.android_show_transition, &options.android_show_transition);
        take(&mut t.hide_transition, &options.hide_transition);
        take(&mut t.ios_hide_transition, &options.ios_hide_transition);
        take(&mut t.android_hide_transition, &options.android_hide_transition);
    }

    /// Resolves the CSS transition for a platform and direction.
    ///
    /// Precedence: platform+direction, then direction, then the generic `transition`, then the
    /// platform default.
    pub fn transition(&self, platform: Platform, direction: Direction) -> &str {
        let t = &self.transitions;
        let (specific, directional) = match (platform, direction) {
            (Platform::Ios, Direction::Show) => (&t.ios_show_transition, &t.show_transition),
            (Platform::Android, Direction::Show) => {
                (&t.android_show_transition, &t.show_transition)
            }
            (Platform::Ios, Direction::Hide) => (&t.ios_hide_transition, &t.hide_transition),
            (Platform::Android, Direction::Hide) => {
                (&t.android_hide_transition, &t.hide_transition)
            }
        };
        if let Some(v) = specific.as_deref().or(directional.as_deref()) {
            return v;
        }
        if let Some(v) = t.transition.as_deref() {
            return v;
        }
        let profile = PlatformProfile::for_platform(platform);
        match direction {
            Direction::Show => profile.show_transition,
            Direction::Hide => profile.hide_transition,
        }
    }
}
