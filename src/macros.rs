/// Logs at an explicit [`Priority`].
///
/// Every leveled macro forwards here. Four shapes are accepted:
///
/// * `log!(priority, message)`: the message is recorded as-is, with no
///   interpolation; format specifiers in the text are left untouched.
/// * `log!(priority, fmt, args...)`: the format string is interpolated
///   once, before any tree sees the call.
/// * `log!(priority, err: error)`: records the error with an empty
///   message.
/// * `log!(priority, err: error, message)` and
///   `log!(priority, err: error, fmt, args...)`.
///
/// A call whose message is empty and which carries no error dispatches
/// nothing.
///
/// [`Priority`]: crate::Priority
///
/// # Examples
///
/// ```
/// use timber::Priority;
///
/// timber::log!(Priority::Info, "reticulating {} splines", 7);
/// ```
#[macro_export]
macro_rules! log {
    ($priority:expr, err: $err:expr $(,)?) => {
        $crate::private::dispatch(
            $priority,
            $crate::callsite!(),
            ::core::option::Option::Some($crate::private::as_dyn_error(&$err)),
            ::core::option::Option::None,
        )
    };
    ($priority:expr, err: $err:expr, $fmt:expr, $($arg:tt)+) => {
        $crate::private::dispatch(
            $priority,
            $crate::callsite!(),
            ::core::option::Option::Some($crate::private::as_dyn_error(&$err)),
            ::core::option::Option::Some(::core::format_args!($fmt, $($arg)+)),
        )
    };
    ($priority:expr, err: $err:expr, $msg:expr $(,)?) => {
        $crate::private::dispatch(
            $priority,
            $crate::callsite!(),
            ::core::option::Option::Some($crate::private::as_dyn_error(&$err)),
            ::core::option::Option::Some(::core::format_args!("{}", $msg)),
        )
    };
    ($priority:expr, $fmt:expr, $($arg:tt)+) => {
        $crate::private::dispatch(
            $priority,
            $crate::callsite!(),
            ::core::option::Option::None,
            ::core::option::Option::Some(::core::format_args!($fmt, $($arg)+)),
        )
    };
    ($priority:expr, $msg:expr $(,)?) => {
        $crate::private::dispatch(
            $priority,
            $crate::callsite!(),
            ::core::option::Option::None,
            ::core::option::Option::Some(::core::format_args!("{}", $msg)),
        )
    };
}

/// Logs at the trace priority.
///
/// Accepts the shapes documented on [`log!`], minus the priority:
///
/// ```
/// let pending = 3;
/// timber::trace!("queue drained, {} pending", pending);
/// ```
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::log!($crate::Priority::Trace, $($arg)+) };
}

/// Logs at the debug priority. See [`log!`] for the accepted shapes.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::log!($crate::Priority::Debug, $($arg)+) };
}

/// Logs at the info priority. See [`log!`] for the accepted shapes.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::log!($crate::Priority::Info, $($arg)+) };
}

/// Logs at the warn priority. See [`log!`] for the accepted shapes.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::log!($crate::Priority::Warn, $($arg)+) };
}

/// Logs at the error priority.
///
/// ```
/// use std::io;
///
/// let err = io::Error::new(io::ErrorKind::Other, "disk on fire");
/// timber::error!(err: err, "flush failed");
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::log!($crate::Priority::Error, $($arg)+) };
}

/// Logs at the assert priority, for failures that should never happen.
#[macro_export]
macro_rules! wtf {
    ($($arg:tt)+) => { $crate::log!($crate::Priority::Assert, $($arg)+) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! callsite {
    () => {{
        fn here() {}
        $crate::Callsite::from_fn_path(
            $crate::private::type_name_of_val(&here),
            ::core::file!(),
            ::core::line!(),
        )
    }};
}
