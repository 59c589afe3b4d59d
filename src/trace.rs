//! Structured events, compiled in only with the `tracing` feature.

/// Emits a `tracing` event at the given level when the `tracing` feature is on.
///
/// Arguments are the usual `tracing` field/message syntax. With the feature off
/// the invocation expands to nothing.
macro_rules! event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)+);
    };
}

pub(crate) use event;
