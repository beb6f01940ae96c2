//! crates/logging/src/dispatch.rs
//! Per-severity entry points, specialised at build time.
//!
//! Each marker type implements [`Severity`] twice, once for an active level
//! and once for an inert one, and `#[cfg]` keeps exactly one of the two. The
//! inert hooks are empty `#[inline(always)]` bodies, so a call on an inert
//! level leaves nothing behind once inlined. Callers see the same signatures
//! either way.

use std::fmt::Display;
use std::io::{self, Write};
use std::marker::PhantomData;

use crate::severity::SeverityLevel;

mod sealed {
    pub trait Sealed {}
}

/// Compile-time handle for one severity.
///
/// Implemented only by [`DebugLevel`], [`InfoLevel`], [`WarningLevel`],
/// [`ErrorLevel`] and [`CriticalLevel`]. Use it through [`Logger`] or the
/// logging macros.
pub trait Severity: sealed::Sealed {
    /// The severity this marker stands for.
    const LEVEL: SeverityLevel;

    /// Whether this build writes records for the severity.
    const ACTIVE: bool;

    #[doc(hidden)]
    fn emit<W>(out: &mut W, values: &[&dyn Display]) -> io::Result<()>
    where
        W: Write + ?Sized;

    #[doc(hidden)]
    fn emit_default(values: &[&dyn Display]);
}

macro_rules! severity_marker {
    ($(#[$meta:meta])* $marker:ident, $level:ident, $active:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $marker;

        impl sealed::Sealed for $marker {}

        #[cfg($active)]
        impl Severity for $marker {
            const LEVEL: SeverityLevel = SeverityLevel::$level;
            const ACTIVE: bool = true;

            #[inline]
            fn emit<W>(out: &mut W, values: &[&dyn Display]) -> io::Result<()>
            where
                W: Write + ?Sized,
            {
                logging_sink::write_record(out, Self::LEVEL.tag(), values)
            }

            #[inline]
            fn emit_default(values: &[&dyn Display]) {
                let mut out = logging_sink::default_destination();
                let _ = logging_sink::write_record(&mut out, Self::LEVEL.tag(), values);
            }
        }

        #[cfg(not($active))]
        impl Severity for $marker {
            const LEVEL: SeverityLevel = SeverityLevel::$level;
            const ACTIVE: bool = false;

            #[inline(always)]
            fn emit<W>(_out: &mut W, _values: &[&dyn Display]) -> io::Result<()>
            where
                W: Write + ?Sized,
            {
                Ok(())
            }

            #[inline(always)]
            fn emit_default(_values: &[&dyn Display]) {}
        }
    };
}

severity_marker!(
    /// Marker for [`SeverityLevel::Debug`].
    DebugLevel, Debug, logging_active_debug
);
severity_marker!(
    /// Marker for [`SeverityLevel::Info`].
    InfoLevel, Info, logging_active_info
);
severity_marker!(
    /// Marker for [`SeverityLevel::Warning`].
    WarningLevel, Warning, logging_active_warning
);
severity_marker!(
    /// Marker for [`SeverityLevel::Error`].
    ErrorLevel, Error, logging_active_error
);
severity_marker!(
    /// Marker for [`SeverityLevel::Critical`].
    CriticalLevel, Critical, logging_active_critical
);

/// Logging entry points for the severity `S`.
///
/// `Logger` is never instantiated; its associated functions are the entry
/// points. Values are passed as a slice of [`Display`] trait objects and are
/// written left to right, each preceded by a single space, after the level's
/// tag and before a trailing newline.
///
/// Whether anything is written is decided when the crate is compiled (see
/// [`ACTIVE_LEVELS`](crate::ACTIVE_LEVELS)). The caller still evaluates every
/// value expression before the call; only the write is elided.
///
/// No locking is added around explicit destinations. Two threads logging to
/// the same unsynchronised writer may interleave their bytes.
///
/// # Examples
///
/// ```
/// use logging::{ErrorLogger, SeverityLevel};
///
/// let mut out = Vec::new();
/// ErrorLogger::log_to(&mut out, &[&"bad", &5]);
///
/// if SeverityLevel::Error.is_active() {
///     assert_eq!(out, b"[Error] bad 5\n");
/// } else {
///     assert!(out.is_empty());
/// }
/// ```
pub struct Logger<S> {
    _severity: PhantomData<S>,
}

impl<S> Logger<S>
where
    S: Severity,
{
    /// The severity these entry points log at.
    pub const LEVEL: SeverityLevel = S::LEVEL;

    /// Reports whether this build writes records for the severity.
    #[must_use]
    pub const fn is_active() -> bool {
        S::ACTIVE
    }

    /// Writes a record to standard error.
    ///
    /// Failures to write to standard error are ignored.
    #[inline(always)]
    pub fn log(values: &[&dyn Display]) {
        S::emit_default(values);
    }

    /// Writes a record to `out`.
    ///
    /// Errors raised by `out` are ignored, leaving whatever bytes it accepted
    /// in place. Use [`try_log_to`](Self::try_log_to) to observe them.
    #[inline(always)]
    pub fn log_to<W>(out: &mut W, values: &[&dyn Display])
    where
        W: Write + ?Sized,
    {
        let _ = S::emit(out, values);
    }

    /// Writes a record to `out`, returning the first error `out` raised.
    ///
    /// On an inert level this returns `Ok(())` without touching `out`.
    #[inline(always)]
    pub fn try_log_to<W>(out: &mut W, values: &[&dyn Display]) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        S::emit(out, values)
    }
}

/// Entry points for [`SeverityLevel::Debug`].
pub type DebugLogger = Logger<DebugLevel>;
/// Entry points for [`SeverityLevel::Info`].
pub type InfoLogger = Logger<InfoLevel>;
/// Entry points for [`SeverityLevel::Warning`].
pub type WarningLogger = Logger<WarningLevel>;
/// Entry points for [`SeverityLevel::Error`].
pub type ErrorLogger = Logger<ErrorLevel>;
/// Entry points for [`SeverityLevel::Critical`].
pub type CriticalLogger = Logger<CriticalLevel>;

impl SeverityLevel {
    /// Writes a record at this level to standard error, through the same
    /// build-time table as [`Logger`].
    ///
    /// Useful when the level is only known at run time. Inert levels write
    /// nothing.
    pub fn log(self, values: &[&dyn Display]) {
        match self {
            Self::Debug => DebugLogger::log(values),
            Self::Info => InfoLogger::log(values),
            Self::Warning => WarningLogger::log(values),
            Self::Error => ErrorLogger::log(values),
            Self::Critical => CriticalLogger::log(values),
        }
    }

    /// Writes a record at this level to `out`. See [`log`](Self::log).
    pub fn log_to<W>(self, out: &mut W, values: &[&dyn Display])
    where
        W: Write + ?Sized,
    {
        match self {
            Self::Debug => DebugLogger::log_to(out, values),
            Self::Info => InfoLogger::log_to(out, values),
            Self::Warning => WarningLogger::log_to(out, values),
            Self::Error => ErrorLogger::log_to(out, values),
            Self::Critical => CriticalLogger::log_to(out, values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ACTIVE_LEVELS;

    fn expected(level: SeverityLevel, rendered: &str) -> Vec<u8> {
        if ACTIVE_LEVELS.contains(level) {
            format!("{}{rendered}\n", level.tag()).into_bytes()
        } else {
            Vec::new()
        }
    }

    /// Writer that rejects every write.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn markers_report_their_level() {
        assert_eq!(DebugLevel::LEVEL, SeverityLevel::Debug);
        assert_eq!(InfoLevel::LEVEL, SeverityLevel::Info);
        assert_eq!(WarningLevel::LEVEL, SeverityLevel::Warning);
        assert_eq!(ErrorLevel::LEVEL, SeverityLevel::Error);
        assert_eq!(CriticalLevel::LEVEL, SeverityLevel::Critical);
        assert_eq!(ErrorLogger::LEVEL, SeverityLevel::Error);
    }

    #[test]
    fn marker_activity_matches_active_levels() {
        assert_eq!(DebugLogger::is_active(), ACTIVE_LEVELS.contains(SeverityLevel::Debug));
        assert_eq!(InfoLogger::is_active(), ACTIVE_LEVELS.contains(SeverityLevel::Info));
        assert_eq!(WarningLogger::is_active(), ACTIVE_LEVELS.contains(SeverityLevel::Warning));
        assert_eq!(ErrorLogger::is_active(), ACTIVE_LEVELS.contains(SeverityLevel::Error));
        assert_eq!(CriticalLogger::is_active(), ACTIVE_LEVELS.contains(SeverityLevel::Critical));
    }

    #[test]
    fn log_to_writes_exact_bytes_or_nothing() {
        let mut out = Vec::new();
        DebugLogger::log_to(&mut out, &[&"a has a value of", &100]);
        assert_eq!(out, expected(SeverityLevel::Debug, " a has a value of 100"));

        let mut out = Vec::new();
        CriticalLogger::log_to(&mut out, &[&"shutting", &"down"]);
        assert_eq!(out, expected(SeverityLevel::Critical, " shutting down"));
    }

    #[test]
    fn zero_values_write_tag_and_newline() {
        let mut out = Vec::new();
        ErrorLogger::log_to(&mut out, &[]);
        assert_eq!(out, expected(SeverityLevel::Error, ""));
    }

    #[test]
    fn runtime_level_goes_through_the_same_table() {
        for level in SeverityLevel::ALL {
            let mut out = Vec::new();
            level.log_to(&mut out, &[&level.index()]);
            assert_eq!(out, expected(level, &format!(" {}", level.index())));
        }
    }

    #[test]
    fn log_to_swallows_destination_errors() {
        WarningLogger::log_to(&mut Broken, &[&"ignored"]);
    }

    #[test]
    fn try_log_to_surfaces_errors_only_when_active() {
        let result = ErrorLogger::try_log_to(&mut Broken, &[&"x"]);
        if ErrorLogger::is_active() {
            assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
        } else {
            assert!(result.is_ok());
        }
    }

    #[test]
    fn trait_object_destinations_are_accepted() {
        let mut buffer = Vec::new();
        {
            let out: &mut dyn Write = &mut buffer;
            InfoLogger::log_to(out, &[&1.5]);
        }
        assert_eq!(buffer, expected(SeverityLevel::Info, " 1.5"));
    }
}
