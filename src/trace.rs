//! Optional `log` integration.
//!
//! With the `log` feature enabled, `trace_event!` forwards to `log::trace!`
//! under the `growvec` target. Without it the macro expands to nothing and
//! its arguments are never evaluated.

#[cfg(feature = "log")]
macro_rules! trace_event {
    ($($arg:tt)+) => {
        ::log::trace!(target: "growvec", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace_event {
    ($($arg:tt)+) => {};
}

pub(crate) use trace_event;
