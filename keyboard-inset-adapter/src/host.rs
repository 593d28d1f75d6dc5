use keyboard_inset::{Dom, Selection, Strategy};

/// Host notifications a session subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListenerKind {
    KeyboardWillShow,
    KeyboardWillHide,
    KeyboardDidHide,
    /// Document-wide `focusin`.
    FocusIn,
}

impl ListenerKind {
    /// The hide notification a strategy reverses on.
    pub fn hide_for(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Transform => Self::KeyboardWillHide,
            Strategy::Scroll => Self::KeyboardDidHide,
        }
    }
}

/// The webview side: listener registration plus the mutations the engine asks for.
///
/// Reads go through the [`Dom`] supertrait.
pub trait Host: Dom {
    /// Handle returned by [`Host::add_listener`], given back to [`Host::remove_listener`].
    type Listener;

    /// `false` in a plain browser, where no keyboard events are ever delivered.
    fn is_native_platform(&self) -> bool;

    fn add_listener(&mut self, kind: ListenerKind) -> Self::Listener;

    fn remove_listener(&mut self, listener: Self::Listener);

    /// Sets `transform: translateY(offset)` with `transition`, or removes the transform property
    /// entirely when `offset` is `None`.
    fn set_transform(&mut self, node: Self::Node, offset: Option<f64>, transition: &str);

    fn set_scroll_top(&mut self, node: Self::Node, top: f64);

    fn focus(&mut self, node: Self::Node);

    fn blur(&mut self, node: Self::Node);

    fn set_selection_range(&mut self, node: Self::Node, selection: Selection);
}
