//! crates/logging/src/severity.rs
//! The five fixed severities and their textual forms.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log record, ordered by increasing urgency.
///
/// The ordering drives the resolver's cascade: enabling a level at the
/// baseline enables every level that compares greater than it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SeverityLevel {
    /// Developer diagnostics.
    Debug = 0,
    /// Informational progress messages.
    Info = 1,
    /// Something unexpected that the program recovers from.
    Warning = 2,
    /// A failed operation.
    Error = 3,
    /// A failure the host program is not expected to survive.
    Critical = 4,
}

impl SeverityLevel {
    /// Number of severities.
    pub const COUNT: usize = 5;

    /// Every severity in urgency order, least urgent first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Returns the level's name, e.g. `"Warning"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Critical => "Critical",
        }
    }

    /// Returns the tag written at the start of every record, e.g. `"[Warning]"`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "[Debug]",
            Self::Info => "[Info]",
            Self::Warning => "[Warning]",
            Self::Error => "[Error]",
            Self::Critical => "[Critical]",
        }
    }

    /// Position of the level in [`ALL`](Self::ALL).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warning),
            3 => Some(Self::Error),
            4 => Some(Self::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names none of the five severities.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown severity `{0}`; expected Debug, Info, Warning, Error or Critical")]
pub struct ParseSeverityError(pub String);

impl FromStr for SeverityLevel {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| trimmed.eq_ignore_ascii_case(level.name()))
            .ok_or_else(|| ParseSeverityError(trimmed.to_owned()))
    }
}
