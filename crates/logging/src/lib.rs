#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a leveled logging facade whose set of active severities is
//! fixed when the crate is compiled. Call sites log at one of five
//! [`SeverityLevel`]s; for a level that is not active the entry point is an
//! empty inlined function, so disabled logging costs neither a branch nor a
//! call.
//!
//! # Configuration
//!
//! The active set is derived from build-time flags by [`resolve`]:
//!
//! | Flag | Cargo feature | Effect |
//! |---|---|---|
//! | `NO_LOGGING` | `no-logging` | Every level inert, overriding all other flags. |
//! | `DEBUG`, `LOG_EVERYTHING` | `debug`, `log-everything` | Baseline is all five levels. |
//! | none of the above | | Baseline is Error and Critical. |
//! | `NO_<LEVEL>_LOGGING` | `no-<level>-logging` | That level inert. |
//! | `USE_<LEVEL>_LOGGER` | `use-<level>-logger` | That level and every more urgent one join the baseline. |
//!
//! Flags come from the crate's Cargo features and from the
//! `LOGGING_DEFINES` environment variable at build time, e.g.
//! `LOGGING_DEFINES="LOG_EVERYTHING NO_INFO_LOGGING" cargo build`. The result
//! is exposed as [`BUILD_FLAGS`] and [`ACTIVE_LEVELS`].
//!
//! # Output
//!
//! An active level writes its tag, then each value preceded by one space,
//! then a newline:
//!
//! ```text
//! [Error] a cannot be greater than 50
//! ```
//!
//! Records go to standard error unless a destination is given.
//!
//! # Evaluation and concurrency
//!
//! Value expressions are always evaluated by the caller, even for an inert
//! level; only the write disappears. Writes are synchronous and happen on
//! the calling thread. The facade does not synchronise destinations: records
//! written concurrently to the same unsynchronised writer may interleave, and
//! avoiding that is the caller's responsibility. Destinations are never
//! closed or reconfigured.
//!
//! # Examples
//!
//! ```
//! use logging::{critical_log, debug_log, error_log, info_log, warning_log};
//!
//! fn something(a: i32) -> bool {
//!     let mut out = std::io::stdout();
//!     debug_log!(to: out, "a has a value of", a);
//!
//!     if a != 0 {
//!         info_log!("a is not 0");
//!     }
//!     if a > 25 {
//!         warning_log!("Oh goodness a is greater than 25!");
//!     }
//!     if a > 50 {
//!         error_log!("a cannot be greater than 50!");
//!     }
//!     if a >= 100 {
//!         critical_log!("a is greater or equal to 100, shutting down!");
//!         return false;
//!     }
//!     true
//! }
//!
//! assert!(!something(100));
//! ```

mod compiled;
mod define;
mod dispatch;
mod level_set;
mod macros;
mod resolver;
mod severity;

pub use compiled::{ACTIVE_LEVELS, BUILD_FLAGS};
pub use define::{Define, FlagError};
pub use dispatch::{
    CriticalLevel, CriticalLogger, DebugLevel, DebugLogger, ErrorLevel, ErrorLogger, InfoLevel,
    InfoLogger, Logger, Severity, WarningLevel, WarningLogger,
};
pub use level_set::{Iter as LevelSetIter, LevelSet};
pub use resolver::{BuildFlags, resolve};
pub use severity::{ParseSeverityError, SeverityLevel};
