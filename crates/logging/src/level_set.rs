//! crates/logging/src/level_set.rs
//! Compact set of severities.

use std::fmt;
use std::iter::FusedIterator;

use crate::severity::SeverityLevel;

const ALL_BITS: u8 = (1 << SeverityLevel::COUNT) - 1;

const fn bit(level: SeverityLevel) -> u8 {
    1 << level.index()
}

/// A set of [`SeverityLevel`]s stored as a bitmask.
///
/// Every operation is a `const fn`, so sets can be combined while evaluating
/// constants such as [`ACTIVE_LEVELS`](crate::ACTIVE_LEVELS).
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct LevelSet {
    bits: u8,
}

impl LevelSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// All five severities.
    pub const ALL: Self = Self { bits: ALL_BITS };

    /// Returns the set containing only `level`.
    #[must_use]
    pub const fn only(level: SeverityLevel) -> Self {
        Self { bits: bit(level) }
    }

    /// Returns `level` together with every more urgent level.
    #[must_use]
    pub const fn at_or_above(level: SeverityLevel) -> Self {
        Self {
            bits: ALL_BITS & !(bit(level) - 1),
        }
    }

    /// Returns a copy with `level` added.
    #[must_use]
    pub const fn with(self, level: SeverityLevel) -> Self {
        Self {
            bits: self.bits | bit(level),
        }
    }

    /// Returns a copy with `level` removed.
    #[must_use]
    pub const fn without(self, level: SeverityLevel) -> Self {
        Self {
            bits: self.bits & !bit(level),
        }
    }

    /// Levels present in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Levels present in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Levels present in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Reports whether `level` is in the set.
    #[must_use]
    pub const fn contains(self, level: SeverityLevel) -> bool {
        self.bits & bit(level) != 0
    }

    /// Reports whether every level of `other` is also in `self`.
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        other.bits & !self.bits == 0
    }

    /// Number of levels in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Reports whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Least urgent level in the set.
    #[must_use]
    pub const fn lowest(self) -> Option<SeverityLevel> {
        if self.bits == 0 {
            None
        } else {
            SeverityLevel::from_index(self.bits.trailing_zeros() as usize)
        }
    }

    /// Iterates the levels in urgency order, least urgent first.
    pub const fn iter(self) -> Iter {
        Iter {
            remaining: self.bits,
        }
    }
}

impl fmt::Debug for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for (position, level) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            f.write_str(level.name())?;
        }
        Ok(())
    }
}

impl FromIterator<SeverityLevel> for LevelSet {
    fn from_iter<I: IntoIterator<Item = SeverityLevel>>(levels: I) -> Self {
        levels.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl Extend<SeverityLevel> for LevelSet {
    fn extend<I: IntoIterator<Item = SeverityLevel>>(&mut self, levels: I) {
        for level in levels {
            *self = self.with(level);
        }
    }
}

impl IntoIterator for LevelSet {
    type Item = SeverityLevel;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the levels of a [`LevelSet`].
#[derive(Clone, Debug)]
pub struct Iter {
    remaining: u8,
}

impl Iterator for Iter {
    type Item = SeverityLevel;

    fn next(&mut self) -> Option<SeverityLevel> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.remaining.trailing_zeros() as usize;
        self.remaining &= self.remaining - 1;
        SeverityLevel::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}
