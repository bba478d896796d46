//! # Codepoint Ranges

use core::{fmt, ops::RangeInclusive};

/// An inclusive range of Unicode codepoints.
///
/// Bounds are stored as raw `u32` values so that ranges may be declared
/// in `const` context and may straddle unassigned codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodepointRange {
    low: u32,
    high: u32,
}

impl CodepointRange {
    /// Build a new inclusive range.
    ///
    /// Reversed bounds are swapped, so `new(0x3FF, 0x370)` is
    /// the same range as `new(0x370, 0x3FF)`.
    pub const fn new(
        low: u32,
        high: u32,
    ) -> Self {
        if low <= high {
            Self { low, high }
        } else {
            Self {
                low: high,
                high: low,
            }
        }
    }

    /// The lowest codepoint in the range.
    pub const fn low(&self) -> u32 {
        self.low
    }

    /// The highest codepoint in the range.
    pub const fn high(&self) -> u32 {
        self.high
    }

    /// Is the codepoint inside this range?
    #[inline]
    pub const fn contains_codepoint(
        &self,
        codepoint: u32,
    ) -> bool {
        self.low <= codepoint && codepoint <= self.high
    }

    /// Is the char inside this range?
    #[inline]
    pub const fn contains(
        &self,
        c: char,
    ) -> bool {
        self.contains_codepoint(c as u32)
    }

    /// Do the two ranges overlap or touch end to end?
    pub const fn is_mergeable_with(
        &self,
        other: &Self,
    ) -> bool {
        self.low <= other.high.saturating_add(1) && other.low <= self.high.saturating_add(1)
    }
}

impl From<RangeInclusive<char>> for CodepointRange {
    fn from(range: RangeInclusive<char>) -> Self {
        Self::new(*range.start() as u32, *range.end() as u32)
    }
}

impl From<RangeInclusive<u32>> for CodepointRange {
    fn from(range: RangeInclusive<u32>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl From<(u32, u32)> for CodepointRange {
    fn from((low, high): (u32, u32)) -> Self {
        Self::new(low, high)
    }
}

impl fmt::Display for CodepointRange {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "U+{:04X}..=U+{:04X}", self.low, self.high)
    }
}
