//! crates/logging/src/resolver.rs
//! Turns build-time flags into the set of active severities.
//!
//! The build script compiles this module too, so it must stay free of
//! anything that only exists in the library (the compiled constants, the
//! dispatch table).

use std::str::FromStr;

use crate::define::{Define, FlagError};
use crate::level_set::LevelSet;
use crate::severity::SeverityLevel;

/// Build-time inputs to [`resolve`].
///
/// All flags default to unset. The struct is plain data: setting a flag
/// records it, and only [`resolve`] applies the precedence rules.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildFlags {
    /// `NO_LOGGING`: master kill switch.
    pub no_logging: bool,
    /// `DEBUG`: verbose baseline.
    pub debug: bool,
    /// `LOG_EVERYTHING`: verbose baseline.
    pub log_everything: bool,
    /// Levels named by `USE_<LEVEL>_LOGGER`.
    pub seeded: LevelSet,
    /// Levels named by `NO_<LEVEL>_LOGGING`.
    pub suppressed: LevelSet,
}

impl BuildFlags {
    /// Flags with nothing set; resolves to the quiet Error + Critical baseline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            no_logging: false,
            debug: false,
            log_everything: false,
            seeded: LevelSet::EMPTY,
            suppressed: LevelSet::EMPTY,
        }
    }

    /// Returns a copy with `define` set.
    #[must_use]
    pub const fn with(mut self, define: Define) -> Self {
        match define {
            Define::NoLogging => self.no_logging = true,
            Define::Debug => self.debug = true,
            Define::LogEverything => self.log_everything = true,
            Define::Suppress(level) => self.suppressed = self.suppressed.with(level),
            Define::Seed(level) => self.seeded = self.seeded.with(level),
        }
        self
    }

    /// Shorthand for `with(Define::Suppress(level))`.
    #[must_use]
    pub const fn suppress(self, level: SeverityLevel) -> Self {
        self.with(Define::Suppress(level))
    }

    /// Shorthand for `with(Define::Seed(level))`.
    #[must_use]
    pub const fn seed(self, level: SeverityLevel) -> Self {
        self.with(Define::Seed(level))
    }

    /// Reports whether `define` is set.
    #[must_use]
    pub const fn is_set(&self, define: Define) -> bool {
        match define {
            Define::NoLogging => self.no_logging,
            Define::Debug => self.debug,
            Define::LogEverything => self.log_everything,
            Define::Suppress(level) => self.suppressed.contains(level),
            Define::Seed(level) => self.seeded.contains(level),
        }
    }

    /// Reports whether either verbose switch is set.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.debug || self.log_everything
    }

    /// Reports whether no flag at all is set.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        !self.no_logging
            && !self.debug
            && !self.log_everything
            && self.seeded.is_empty()
            && self.suppressed.is_empty()
    }

    /// Iterates the flags that are set, in [`Define::ALL`] order.
    pub fn defines(&self) -> impl Iterator<Item = Define> + '_ {
        Define::ALL
            .into_iter()
            .filter(move |define| self.is_set(*define))
    }

    /// Builds flags from define names.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{BuildFlags, SeverityLevel};
    ///
    /// let flags = BuildFlags::from_defines(["LOG_EVERYTHING", "NO_INFO_LOGGING"])?;
    /// assert!(flags.verbose());
    /// assert!(flags.suppressed.contains(SeverityLevel::Info));
    /// # Ok::<(), logging::FlagError>(())
    /// ```
    pub fn from_defines<I, S>(defines: I) -> Result<Self, FlagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        defines
            .into_iter()
            .try_fold(Self::new(), |flags, name| {
                Ok(flags.with(name.as_ref().parse()?))
            })
    }

    /// Parses a comma and/or whitespace separated list of define names.
    ///
    /// Blank entries are skipped, so an empty list yields the default flags.
    pub fn parse_list(list: &str) -> Result<Self, FlagError> {
        Self::from_defines(
            list.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty()),
        )
    }

    /// Resolves these flags; see [`resolve`].
    #[must_use]
    pub const fn resolve(&self) -> LevelSet {
        resolve(self)
    }
}

impl FromStr for BuildFlags {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_list(s)
    }
}

/// Computes the active severities for `flags`.
///
/// 1. `NO_LOGGING` suppresses every level, overriding all other flags.
/// 2. The baseline is Error and Critical, or all five levels when `DEBUG` or
///    `LOG_EVERYTHING` is set. Each `USE_<LEVEL>_LOGGER` seed adds its level
///    and every more urgent one.
/// 3. A level is active when it is in the baseline and not suppressed.
///
/// Suppression is per level rather than a threshold, so it can leave gaps:
///
/// ```
/// use logging::{BuildFlags, Define, LevelSet, SeverityLevel, resolve};
///
/// let flags = BuildFlags::new()
///     .with(Define::LogEverything)
///     .suppress(SeverityLevel::Info);
/// assert_eq!(resolve(&flags), LevelSet::ALL.without(SeverityLevel::Info));
/// ```
#[must_use]
pub const fn resolve(flags: &BuildFlags) -> LevelSet {
    let suppressed = if flags.no_logging {
        LevelSet::ALL
    } else {
        flags.suppressed
    };

    let mut baseline = LevelSet::at_or_above(SeverityLevel::Error);
    if flags.verbose() {
        baseline = baseline.union(LevelSet::at_or_above(SeverityLevel::Debug));
    }
    if let Some(lowest) = flags.seeded.lowest() {
        baseline = baseline.union(LevelSet::at_or_above(lowest));
    }

    baseline.difference(suppressed)
}
