#[cfg(feature = "tracing")]
macro_rules! atrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "auto_scroll_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! atrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! adebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "auto_scroll_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! adebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! awarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "auto_scroll_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! awarn {
    ($($tt:tt)*) => {};
}
