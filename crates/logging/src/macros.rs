//! crates/logging/src/macros.rs
//! Call-site macros over the dispatch table.
//!
//! Every macro accepts any number of [`Display`](core::fmt::Display) values,
//! optionally preceded by `to: <destination>,` where the destination is any
//! place expression implementing [`std::io::Write`]. The macro borrows the
//! destination mutably, so a binding must be declared `mut`; a `&mut W`
//! parameter is passed either as `mut out: &mut W` or as `to: *out`. Without
//! a destination the record goes to standard error. The call-site syntax does
//! not depend on whether the level is active.

/// Logs at the severity named by a marker type.
///
/// The per-level macros ([`debug_log!`](crate::debug_log),
/// [`error_log!`](crate::error_log), ...) forward here.
///
/// # Examples
///
/// ```
/// use logging::{ErrorLevel, leveled_log};
///
/// let mut out = Vec::new();
/// leveled_log!(ErrorLevel, to: out, "a cannot be greater than", 50);
///
/// if logging::ErrorLogger::is_active() {
///     assert_eq!(out, b"[Error] a cannot be greater than 50\n");
/// }
/// ```
#[macro_export]
macro_rules! leveled_log {
    ($severity:ty, to: $dest:expr $(, $value:expr)* $(,)?) => {
        $crate::Logger::<$severity>::log_to(
            &mut $dest,
            &[$(&$value as &dyn ::core::fmt::Display),*],
        )
    };
    ($severity:ty $(, $value:expr)* $(,)?) => {
        $crate::Logger::<$severity>::log(&[$(&$value as &dyn ::core::fmt::Display),*])
    };
}

/// Logs at [`SeverityLevel::Debug`](crate::SeverityLevel::Debug).
///
/// ```
/// let value = 100;
/// logging::debug_log!("a has a value of", value);
/// logging::debug_log!(to: std::io::stdout(), "a has a value of", value);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($args:tt)*) => {
        $crate::leveled_log!($crate::DebugLevel, $($args)*)
    };
}

/// Logs at [`SeverityLevel::Info`](crate::SeverityLevel::Info).
#[macro_export]
macro_rules! info_log {
    ($($args:tt)*) => {
        $crate::leveled_log!($crate::InfoLevel, $($args)*)
    };
}

/// Logs at [`SeverityLevel::Warning`](crate::SeverityLevel::Warning).
#[macro_export]
macro_rules! warning_log {
    ($($args:tt)*) => {
        $crate::leveled_log!($crate::WarningLevel, $($args)*)
    };
}

/// Logs at [`SeverityLevel::Error`](crate::SeverityLevel::Error).
///
/// ```
/// let mut out = Vec::new();
/// logging::error_log!(to: out);
///
/// if logging::SeverityLevel::Error.is_active() {
///     assert_eq!(out, b"[Error]\n");
/// }
/// ```
#[macro_export]
macro_rules! error_log {
    ($($args:tt)*) => {
        $crate::leveled_log!($crate::ErrorLevel, $($args)*)
    };
}

/// Logs at [`SeverityLevel::Critical`](crate::SeverityLevel::Critical).
///
/// Logging never terminates the process; shutting down after a critical
/// condition is up to the caller.
#[macro_export]
macro_rules! critical_log {
    ($($args:tt)*) => {
        $crate::leveled_log!($crate::CriticalLevel, $($args)*)
    };
}
