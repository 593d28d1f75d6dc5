//! Logging shims over `tracing::event!`. Without the `tracing` feature every call expands to
//! nothing, so call sites carry no `cfg`.

#[cfg(feature = "tracing")]
pub(crate) const LOG_TARGET: &str = "keyboard_inset";

macro_rules! klog {
    ($level:ident, $($field:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::event!(target: $crate::macros::LOG_TARGET, tracing::Level::$level, $($field)*);
    };
}

macro_rules! ktrace {
    ($($field:tt)*) => { klog!(TRACE, $($field)*) };
}

macro_rules! kdebug {
    ($($field:tt)*) => { klog!(DEBUG, $($field)*) };
}

/// Inputs the engine refuses to act on.
macro_rules! kwarn {
    ($($field:tt)*) => { klog!(WARN, $($field)*) };
}
