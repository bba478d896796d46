//! # Script Range Table

use core::cmp::Ordering;

use crate::{
    alloc::{borrow::Cow, vec::Vec},
    unicode::{CodepointRange, UnicodeBlock, unicode_blocks::DEFAULT_SCRIPT_RANGES},
};

/// Membership table for "script letter" codepoints.
///
/// Holds a sorted list of disjoint, non-touching [`CodepointRange`]s and answers
/// membership with a binary search; lookups cost `O(log r)` for `r` ranges.
/// Every constructor stores this one normalized form, so two tables are
/// equal exactly when they cover the same codepoints.
///
/// The table is immutable once built. Extension methods return a new
/// table, so a table shared behind an `Arc` is never altered mid-scan.
///
/// ## Style Hints
///
/// Instance names should prefer `scripts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRangeTable {
    ranges: Cow<'static, [CodepointRange]>,
}

impl Default for ScriptRangeTable {
    /// The table over [`DEFAULT_SCRIPT_BLOCKS`](super::DEFAULT_SCRIPT_BLOCKS).
    ///
    /// Borrows a static table; does not allocate.
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ScriptRangeTable {
    /// The default table; see [`Default`].
    pub const DEFAULT: Self = Self {
        ranges: Cow::Borrowed(&DEFAULT_SCRIPT_RANGES),
    };

    /// A table with no ranges; only ASCII letters will form words.
    pub const fn empty() -> Self {
        Self {
            ranges: Cow::Borrowed(&[]),
        }
    }

    /// Build a table from arbitrary ranges.
    ///
    /// The ranges are sorted, and overlapping or adjacent ranges are merged.
    pub fn from_ranges<I, R>(ranges: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<CodepointRange>,
    {
        let ranges: Vec<CodepointRange> = ranges.into_iter().map(Into::into).collect();
        Self {
            ranges: Cow::Owned(normalize_ranges(ranges)),
        }
    }

    /// Build a table from a list of blocks.
    pub fn from_blocks(blocks: &[UnicodeBlock]) -> Self {
        Self::from_ranges(blocks.iter().map(|block| block.range))
    }

    /// Return a new table extended with additional ranges.
    ///
    /// ## Arguments
    /// * `ranges` - the ranges to add.
    pub fn with_ranges<I, R>(
        &self,
        ranges: I,
    ) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<CodepointRange>,
    {
        let mut merged = self.ranges.to_vec();
        merged.extend(ranges.into_iter().map(Into::into));
        Self {
            ranges: Cow::Owned(normalize_ranges(merged)),
        }
    }

    /// Return a new table extended with additional blocks.
    pub fn with_blocks(
        &self,
        blocks: &[UnicodeBlock],
    ) -> Self {
        self.with_ranges(blocks.iter().map(|block| block.range))
    }

    /// Is the char a member of any configured range?
    #[inline]
    pub fn contains(
        &self,
        c: char,
    ) -> bool {
        let codepoint = c as u32;
        match (self.ranges.first(), self.ranges.last()) {
            (Some(first), Some(last)) if first.low() <= codepoint && codepoint <= last.high() => {
                self.ranges
                    .binary_search_by(|range| {
                        if range.high() < codepoint {
                            Ordering::Less
                        } else if range.low() > codepoint {
                            Ordering::Greater
                        } else {
                            Ordering::Equal
                        }
                    })
                    .is_ok()
            }
            _ => false,
        }
    }

    /// The sorted, disjoint ranges.
    pub fn ranges(&self) -> &[CodepointRange] {
        &self.ranges
    }

    /// The number of ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Sort ranges and merge any that overlap or touch.
fn normalize_ranges(mut ranges: Vec<CodepointRange>) -> Vec<CodepointRange> {
    ranges.sort_unstable();

    let mut merged: Vec<CodepointRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if last.is_mergeable_with(&range) => {
                *last = CodepointRange::new(last.low(), last.high().max(range.high()));
            }
            _ => merged.push(range),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alloc::vec, unicode::DEFAULT_SCRIPT_BLOCKS};

    #[test]
    fn test_default_table() {
        let scripts = ScriptRangeTable::default();
        assert!(scripts.len() < DEFAULT_SCRIPT_BLOCKS.len());
        assert!(matches!(scripts.ranges, Cow::Borrowed(_)));
        assert_eq!(scripts, ScriptRangeTable::from_blocks(DEFAULT_SCRIPT_BLOCKS));

        for c in ['λ', 'Ω', 'я', 'ع', 'ש', '中', 'ñ', '∞', '\u{E0041}'] {
            assert!(scripts.contains(c), "{c:?}");
        }
        for c in ['a', 'Z', '0', ' ', '-', '\u{7F}', '\u{0800}', '\u{1F600}'] {
            assert!(!scripts.contains(c), "{c:?}");
        }
    }

    #[test]
    fn test_block_edges() {
        let scripts = ScriptRangeTable::default();
        for block in DEFAULT_SCRIPT_BLOCKS {
            let low = char::from_u32(block.range.low()).unwrap();
            let high = char::from_u32(block.range.high()).unwrap();
            assert!(scripts.contains(low), "{}", block.name);
            assert!(scripts.contains(high), "{}", block.name);
        }
        // Gap between Thaana and Devanagari.
        assert!(!scripts.contains('\u{07C0}'));
        assert!(!scripts.contains('\u{08FF}'));
    }

    #[test]
    fn test_equality_is_by_coverage() {
        let default = ScriptRangeTable::default();
        let rebuilt = default.with_ranges(core::iter::empty::<CodepointRange>());
        assert!(matches!(rebuilt.ranges, Cow::Owned(_)));
        assert_eq!(rebuilt, default);

        // Re-adding covered blocks changes nothing.
        assert_eq!(default.with_blocks(&DEFAULT_SCRIPT_BLOCKS[..3]), default);
        assert_ne!(default.with_ranges([0x1F600u32..=0x1F64F]), default);
    }

    #[test]
    fn test_empty() {
        let scripts = ScriptRangeTable::empty();
        assert!(scripts.is_empty());
        assert!(!scripts.contains('λ'));
    }

    #[test]
    fn test_from_ranges_merges() {
        let scripts = ScriptRangeTable::from_ranges([
            (0x0500u32, 0x052F),
            (0x0370, 0x03FF),
            (0x0400, 0x04FF),
            (0x0380, 0x0390),
        ]);
        assert_eq!(scripts.ranges(), &[CodepointRange::new(0x0370, 0x052F)]);
        assert!(scripts.contains('ԯ'));
    }

    #[test]
    fn test_with_ranges() {
        let scripts = ScriptRangeTable::empty().with_ranges(['α'..='ω']);
        assert!(scripts.contains('β'));
        assert!(!scripts.contains('я'));

        let scripts = scripts.with_ranges(vec!['а'..='я']);
        assert_eq!(scripts.len(), 2);
        assert!(scripts.contains('ж'));

        // Extending a borrowed default produces an owned copy.
        let extended = ScriptRangeTable::default().with_ranges([0x1F600u32..=0x1F64F]);
        assert!(extended.contains('\u{1F600}'));
        assert!(!ScriptRangeTable::default().contains('\u{1F600}'));
    }

    #[test]
    fn test_from_blocks() {
        let blocks: Vec<UnicodeBlock> = DEFAULT_SCRIPT_BLOCKS
            .iter()
            .filter(|block| block.name.starts_with("Greek"))
            .copied()
            .collect();
        let scripts = ScriptRangeTable::from_blocks(&blocks);
        assert_eq!(scripts.len(), 2);
        assert!(scripts.contains('ἀ'));
        assert!(!scripts.contains('я'));

        let scripts = scripts.with_blocks(&[UnicodeBlock::new("Cyrillic", 0x0400, 0x04FF)]);
        assert!(scripts.contains('я'));
    }
}
