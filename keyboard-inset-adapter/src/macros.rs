//! Same shims as the core crate, logging under the adapter's own target.

#[cfg(feature = "tracing")]
pub(crate) const LOG_TARGET: &str = "keyboard_inset_adapter";

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
