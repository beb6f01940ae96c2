//! crates/logging/src/define.rs
//! Names of the build-time flags understood by the resolver.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::severity::SeverityLevel;

use SeverityLevel::{Critical, Debug, Error, Info, Warning};

/// One build-time flag.
///
/// Flags are spelled like preprocessor defines (`NO_LOGGING`,
/// `NO_INFO_LOGGING`, `USE_WARNING_LOGGER`, ...). Parsing also accepts the
/// Cargo feature spelling (`no-info-logging`), any ASCII case, and a leading
/// `-D`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Define {
    /// `NO_LOGGING`: every level is suppressed.
    NoLogging,
    /// `DEBUG`: verbose baseline.
    Debug,
    /// `LOG_EVERYTHING`: verbose baseline.
    LogEverything,
    /// `NO_<LEVEL>_LOGGING`: the level is suppressed.
    Suppress(SeverityLevel),
    /// `USE_<LEVEL>_LOGGER`: the level and every more urgent one join the baseline.
    Seed(SeverityLevel),
}

impl Define {
    /// Every recognised flag.
    pub const ALL: [Self; 13] = [
        Self::NoLogging,
        Self::Debug,
        Self::LogEverything,
        Self::Suppress(Debug),
        Self::Suppress(Info),
        Self::Suppress(Warning),
        Self::Suppress(Error),
        Self::Suppress(Critical),
        Self::Seed(Debug),
        Self::Seed(Info),
        Self::Seed(Warning),
        Self::Seed(Error),
        Self::Seed(Critical),
    ];

    /// Canonical define spelling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoLogging => "NO_LOGGING",
            Self::Debug => "DEBUG",
            Self::LogEverything => "LOG_EVERYTHING",
            Self::Suppress(Debug) => "NO_DEBUG_LOGGING",
            Self::Suppress(Info) => "NO_INFO_LOGGING",
            Self::Suppress(Warning) => "NO_WARNING_LOGGING",
            Self::Suppress(Error) => "NO_ERROR_LOGGING",
            Self::Suppress(Critical) => "NO_CRITICAL_LOGGING",
            Self::Seed(Debug) => "USE_DEBUG_LOGGER",
            Self::Seed(Info) => "USE_INFO_LOGGER",
            Self::Seed(Warning) => "USE_WARNING_LOGGER",
            Self::Seed(Error) => "USE_ERROR_LOGGER",
            Self::Seed(Critical) => "USE_CRITICAL_LOGGER",
        }
    }

    /// Cargo feature of the `logging` crate that sets this flag.
    #[must_use]
    pub const fn feature(self) -> &'static str {
        match self {
            Self::NoLogging => "no-logging",
            Self::Debug => "debug",
            Self::LogEverything => "log-everything",
            Self::Suppress(Debug) => "no-debug-logging",
            Self::Suppress(Info) => "no-info-logging",
            Self::Suppress(Warning) => "no-warning-logging",
            Self::Suppress(Error) => "no-error-logging",
            Self::Suppress(Critical) => "no-critical-logging",
            Self::Seed(Debug) => "use-debug-logger",
            Self::Seed(Info) => "use-info-logger",
            Self::Seed(Warning) => "use-warning-logger",
            Self::Seed(Error) => "use-error-logger",
            Self::Seed(Critical) => "use-critical-logger",
        }
    }
}

impl fmt::Display for Define {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error raised while reading build-time flags.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FlagError {
    /// The token names no known flag.
    #[error(
        "unknown logging define `{0}`; expected NO_LOGGING, DEBUG, LOG_EVERYTHING, \
         NO_<LEVEL>_LOGGING or USE_<LEVEL>_LOGGER"
    )]
    Unknown(String),
    /// The token was blank.
    #[error("empty logging define")]
    Empty,
}

impl FromStr for Define {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed.strip_prefix("-D").unwrap_or(trimmed);
        if bare.is_empty() {
            return Err(FlagError::Empty);
        }

        let normalised: String = bare
            .chars()
            .map(|c| if c == '-' { '_' } else { c.to_ascii_uppercase() })
            .collect();

        Self::ALL
            .into_iter()
            .find(|define| define.name() == normalised)
            .ok_or_else(|| FlagError::Unknown(trimmed.to_owned()))
    }
}
