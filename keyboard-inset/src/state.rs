/// Whether the keyboard is currently up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    KeyboardVisible,
}

/// A lightweight, serializable snapshot of a controller's adjustment state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjustmentState {
    pub phase: Phase,
    pub keyboard_height: f64,
    /// Total correction currently applied to the scroll container.
    pub offset: f64,
    pub generation: u64,
}
