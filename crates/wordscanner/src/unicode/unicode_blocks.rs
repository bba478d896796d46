//! # Unicode Block Table
//!
//! Named Unicode blocks which the default [`ScriptRangeTable`](super::ScriptRangeTable)
//! treats as word material.
//!
//! The list mixes alphabetic scripts with symbol blocks (arrows, box drawing,
//! mathematical operators, ...). Runs of any of them scan as a single `WORD`
//! rather than as one `CHAR` per codepoint.
//!
//! The UTF-16 surrogate blocks (`D800..=DFFF`) are not listed;
//! no `char` can hold a surrogate codepoint.

use crate::unicode::CodepointRange;

/// A named block of Unicode codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeBlock {
    /// The block name, as published by the Unicode consortium.
    pub name: &'static str,

    /// The codepoints covered by the block.
    pub range: CodepointRange,
}

impl UnicodeBlock {
    /// Declare a block.
    pub const fn new(
        name: &'static str,
        low: u32,
        high: u32,
    ) -> Self {
        Self {
            name,
            range: CodepointRange::new(low, high),
        }
    }
}

/// The default script blocks, sorted by ascending codepoint.
pub const DEFAULT_SCRIPT_BLOCKS: &[UnicodeBlock] = &[
    UnicodeBlock::new("Latin-1 Supplement", 0x00A0, 0x00FF),
    UnicodeBlock::new("Latin Extended-A", 0x0100, 0x017F),
    UnicodeBlock::new("Latin Extended-B", 0x0180, 0x024F),
    UnicodeBlock::new("IPA Extensions", 0x0250, 0x02AF),
    UnicodeBlock::new("Spacing Modifier Letters", 0x02B0, 0x02FF),
    UnicodeBlock::new("Combining Diacritical Marks", 0x0300, 0x036F),
    UnicodeBlock::new("Greek and Coptic", 0x0370, 0x03FF),
    UnicodeBlock::new("Cyrillic", 0x0400, 0x04FF),
    UnicodeBlock::new("Cyrillic Supplementary", 0x0500, 0x052F),
    UnicodeBlock::new("Armenian", 0x0530, 0x058F),
    UnicodeBlock::new("Hebrew", 0x0590, 0x05FF),
    UnicodeBlock::new("Arabic", 0x0600, 0x06FF),
    UnicodeBlock::new("Syriac", 0x0700, 0x074F),
    UnicodeBlock::new("Thaana", 0x0780, 0x07BF),
    UnicodeBlock::new("Devanagari", 0x0900, 0x097F),
    UnicodeBlock::new("Bengali", 0x0980, 0x09FF),
    UnicodeBlock::new("Gurmukhi", 0x0A00, 0x0A7F),
    UnicodeBlock::new("Gujarati", 0x0A80, 0x0AFF),
    UnicodeBlock::new("Oriya", 0x0B00, 0x0B7F),
    UnicodeBlock::new("Tamil", 0x0B80, 0x0BFF),
    UnicodeBlock::new("Telugu", 0x0C00, 0x0C7F),
    UnicodeBlock::new("Kannada", 0x0C80, 0x0CFF),
    UnicodeBlock::new("Malayalam", 0x0D00, 0x0D7F),
    UnicodeBlock::new("Sinhala", 0x0D80, 0x0DFF),
    UnicodeBlock::new("Thai", 0x0E00, 0x0E7F),
    UnicodeBlock::new("Lao", 0x0E80, 0x0EFF),
    UnicodeBlock::new("Tibetan", 0x0F00, 0x0FFF),
    UnicodeBlock::new("Myanmar", 0x1000, 0x109F),
    UnicodeBlock::new("Georgian", 0x10A0, 0x10FF),
    UnicodeBlock::new("Hangul Jamo", 0x1100, 0x11FF),
    UnicodeBlock::new("Ethiopic", 0x1200, 0x137F),
    UnicodeBlock::new("Cherokee", 0x13A0, 0x13FF),
    UnicodeBlock::new("Unified Canadian Aboriginal Syllabics", 0x1400, 0x167F),
    UnicodeBlock::new("Ogham", 0x1680, 0x169F),
    UnicodeBlock::new("Runic", 0x16A0, 0x16FF),
    UnicodeBlock::new("Tagalog", 0x1700, 0x171F),
    UnicodeBlock::new("Hanunoo", 0x1720, 0x173F),
    UnicodeBlock::new("Buhid", 0x1740, 0x175F),
    UnicodeBlock::new("Tagbanwa", 0x1760, 0x177F),
    UnicodeBlock::new("Khmer", 0x1780, 0x17FF),
    UnicodeBlock::new("Mongolian", 0x1800, 0x18AF),
    UnicodeBlock::new("Limbu", 0x1900, 0x194F),
    UnicodeBlock::new("Tai Le", 0x1950, 0x197F),
    UnicodeBlock::new("Khmer Symbols", 0x19E0, 0x19FF),
    UnicodeBlock::new("Phonetic Extensions", 0x1D00, 0x1D7F),
    UnicodeBlock::new("Latin Extended Additional", 0x1E00, 0x1EFF),
    UnicodeBlock::new("Greek Extended", 0x1F00, 0x1FFF),
    UnicodeBlock::new("General Punctuation", 0x2000, 0x206F),
    UnicodeBlock::new("Superscripts and Subscripts", 0x2070, 0x209F),
    UnicodeBlock::new("Currency Symbols", 0x20A0, 0x20CF),
    UnicodeBlock::new("Combining Diacritical Marks for Symbols", 0x20D0, 0x20FF),
    UnicodeBlock::new("Letterlike Symbols", 0x2100, 0x214F),
    UnicodeBlock::new("Number Forms", 0x2150, 0x218F),
    UnicodeBlock::new("Arrows", 0x2190, 0x21FF),
    UnicodeBlock::new("Mathematical Operators", 0x2200, 0x22FF),
    UnicodeBlock::new("Miscellaneous Technical", 0x2300, 0x23FF),
    UnicodeBlock::new("Control Pictures", 0x2400, 0x243F),
    UnicodeBlock::new("Optical Character Recognition", 0x2440, 0x245F),
    UnicodeBlock::new("Enclosed Alphanumerics", 0x2460, 0x24FF),
    UnicodeBlock::new("Box Drawing", 0x2500, 0x257F),
    UnicodeBlock::new("Block Elements", 0x2580, 0x259F),
    UnicodeBlock::new("Geometric Shapes", 0x25A0, 0x25FF),
    UnicodeBlock::new("Miscellaneous Symbols", 0x2600, 0x26FF),
    UnicodeBlock::new("Dingbats", 0x2700, 0x27BF),
    UnicodeBlock::new("Miscellaneous Mathematical Symbols-A", 0x27C0, 0x27EF),
    UnicodeBlock::new("Supplemental Arrows-A", 0x27F0, 0x27FF),
    UnicodeBlock::new("Braille Patterns", 0x2800, 0x28FF),
    UnicodeBlock::new("Supplemental Arrows-B", 0x2900, 0x297F),
    UnicodeBlock::new("Miscellaneous Mathematical Symbols-B", 0x2980, 0x29FF),
    UnicodeBlock::new("Supplemental Mathematical Operators", 0x2A00, 0x2AFF),
    UnicodeBlock::new("Miscellaneous Symbols and Arrows", 0x2B00, 0x2BFF),
    UnicodeBlock::new("CJK Radicals Supplement", 0x2E80, 0x2EFF),
    UnicodeBlock::new("Kangxi Radicals", 0x2F00, 0x2FDF),
    UnicodeBlock::new("Ideographic Description Characters", 0x2FF0, 0x2FFF),
    UnicodeBlock::new("CJK Symbols and Punctuation", 0x3000, 0x303F),
    UnicodeBlock::new("Hiragana", 0x3040, 0x309F),
    UnicodeBlock::new("Katakana", 0x30A0, 0x30FF),
    UnicodeBlock::new("Bopomofo", 0x3100, 0x312F),
    UnicodeBlock::new("Hangul Compatibility Jamo", 0x3130, 0x318F),
    UnicodeBlock::new("Kanbun", 0x3190, 0x319F),
    UnicodeBlock::new("Bopomofo Extended", 0x31A0, 0x31BF),
    UnicodeBlock::new("Katakana Phonetic Extensions", 0x31F0, 0x31FF),
    UnicodeBlock::new("Enclosed CJK Letters and Months", 0x3200, 0x32FF),
    UnicodeBlock::new("CJK Compatibility", 0x3300, 0x33FF),
    UnicodeBlock::new("CJK Unified Ideographs Extension A", 0x3400, 0x4DBF),
    UnicodeBlock::new("Yijing Hexagram Symbols", 0x4DC0, 0x4DFF),
    UnicodeBlock::new("CJK Unified Ideographs", 0x4E00, 0x9FFF),
    UnicodeBlock::new("Yi Syllables", 0xA000, 0xA48F),
    UnicodeBlock::new("Yi Radicals", 0xA490, 0xA4CF),
    UnicodeBlock::new("Hangul Syllables", 0xAC00, 0xD7AF),
    UnicodeBlock::new("Private Use Area", 0xE000, 0xF8FF),
    UnicodeBlock::new("CJK Compatibility Ideographs", 0xF900, 0xFAFF),
    UnicodeBlock::new("Alphabetic Presentation Forms", 0xFB00, 0xFB4F),
    UnicodeBlock::new("Arabic Presentation Forms-A", 0xFB50, 0xFDFF),
    UnicodeBlock::new("Variation Selectors", 0xFE00, 0xFE0F),
    UnicodeBlock::new("Combining Half Marks", 0xFE20, 0xFE2F),
    UnicodeBlock::new("CJK Compatibility Forms", 0xFE30, 0xFE4F),
    UnicodeBlock::new("Small Form Variants", 0xFE50, 0xFE6F),
    UnicodeBlock::new("Arabic Presentation Forms-B", 0xFE70, 0xFEFF),
    UnicodeBlock::new("Halfwidth and Fullwidth Forms", 0xFF00, 0xFFEF),
    UnicodeBlock::new("Specials", 0xFFF0, 0xFFFF),
    UnicodeBlock::new("Linear B Syllabary", 0x10000, 0x1007F),
    UnicodeBlock::new("Linear B Ideograms", 0x10080, 0x100FF),
    UnicodeBlock::new("Aegean Numbers", 0x10100, 0x1013F),
    UnicodeBlock::new("Old Italic", 0x10300, 0x1032F),
    UnicodeBlock::new("Gothic", 0x10330, 0x1034F),
    UnicodeBlock::new("Ugaritic", 0x10380, 0x1039F),
    UnicodeBlock::new("Deseret", 0x10400, 0x1044F),
    UnicodeBlock::new("Shavian", 0x10450, 0x1047F),
    UnicodeBlock::new("Osmanya", 0x10480, 0x104AF),
    UnicodeBlock::new("Cypriot Syllabary", 0x10800, 0x1083F),
    UnicodeBlock::new("Byzantine Musical Symbols", 0x1D000, 0x1D0FF),
    UnicodeBlock::new("Musical Symbols", 0x1D100, 0x1D1FF),
    UnicodeBlock::new("Tai Xuan Jing Symbols", 0x1D300, 0x1D35F),
    UnicodeBlock::new("Mathematical Alphanumeric Symbols", 0x1D400, 0x1D7FF),
    UnicodeBlock::new("CJK Unified Ideographs Extension B", 0x20000, 0x2A6DF),
    UnicodeBlock::new("CJK Compatibility Ideographs Supplement", 0x2F800, 0x2FA1F),
    UnicodeBlock::new("Tags", 0xE0000, 0xE007F),
];

/// The number of ranges left once touching blocks are merged.
const fn merged_len(blocks: &[UnicodeBlock]) -> usize {
    if blocks.is_empty() {
        return 0;
    }
    let mut count = 1;
    let mut idx = 1;
    while idx < blocks.len() {
        if !blocks[idx - 1].range.is_mergeable_with(&blocks[idx].range) {
            count += 1;
        }
        idx += 1;
    }
    count
}

/// The ranges of [`DEFAULT_SCRIPT_BLOCKS`], with touching blocks merged.
///
/// This is the same normalized form `ScriptRangeTable::from_ranges` produces.
pub(crate) const DEFAULT_SCRIPT_RANGES: [CodepointRange; merged_len(DEFAULT_SCRIPT_BLOCKS)] = {
    let blocks = DEFAULT_SCRIPT_BLOCKS;
    let mut ranges = [CodepointRange::new(0, 0); merged_len(DEFAULT_SCRIPT_BLOCKS)];

    let mut out = 0;
    let mut low = blocks[0].range.low();
    let mut high = blocks[0].range.high();
    let mut idx = 1;
    while idx < blocks.len() {
        let range = blocks[idx].range;
        if range.low() <= high.saturating_add(1) {
            if range.high() > high {
                high = range.high();
            }
        } else {
            ranges[out] = CodepointRange::new(low, high);
            out += 1;
            low = range.low();
            high = range.high();
        }
        idx += 1;
    }
    ranges[out] = CodepointRange::new(low, high);
    ranges
};

/// Look up a default block by name, ignoring ASCII case.
pub fn find_block(name: &str) -> Option<&'static UnicodeBlock> {
    DEFAULT_SCRIPT_BLOCKS
        .iter()
        .find(|block| block.name.eq_ignore_ascii_case(name))
}

/// Find the default block containing the char, if any.
pub fn block_of(c: char) -> Option<&'static UnicodeBlock> {
    let idx = DEFAULT_SCRIPT_BLOCKS.partition_point(|block| block.range.high() < c as u32);
    DEFAULT_SCRIPT_BLOCKS
        .get(idx)
        .filter(|block| block.range.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_sorted_and_disjoint() {
        for pair in DEFAULT_SCRIPT_BLOCKS.windows(2) {
            assert!(
                pair[0].range.high() < pair[1].range.low(),
                "{} overlaps or precedes {}",
                pair[1].name,
                pair[0].name
            );
        }
    }

    #[test]
    fn test_no_ascii_or_surrogates() {
        for block in DEFAULT_SCRIPT_BLOCKS {
            assert!(block.range.low() > 0x7F, "{}", block.name);
            assert!(
                block.range.high() < 0xD800 || block.range.low() > 0xDFFF,
                "{}",
                block.name
            );
        }
    }

    #[test]
    fn test_ranges_merge_blocks() {
        assert!(DEFAULT_SCRIPT_RANGES.len() < DEFAULT_SCRIPT_BLOCKS.len());
        assert_eq!(
            DEFAULT_SCRIPT_RANGES.len(),
            merged_len(DEFAULT_SCRIPT_BLOCKS)
        );

        for pair in DEFAULT_SCRIPT_RANGES.windows(2) {
            assert!(!pair[0].is_mergeable_with(&pair[1]), "{} {}", pair[0], pair[1]);
            assert!(pair[0].high() < pair[1].low());
        }

        for block in DEFAULT_SCRIPT_BLOCKS {
            let covering = DEFAULT_SCRIPT_RANGES
                .iter()
                .filter(|range| {
                    range.low() <= block.range.low() && block.range.high() <= range.high()
                })
                .count();
            assert_eq!(covering, 1, "{}", block.name);
        }

        // Latin-1 Supplement through Syriac touch end to end.
        assert_eq!(DEFAULT_SCRIPT_RANGES[0], CodepointRange::new(0x00A0, 0x074F));
    }

    #[test]
    fn test_merged_len() {
        assert_eq!(merged_len(&[]), 0);
        assert_eq!(
            merged_len(&[
                UnicodeBlock::new("a", 0x100, 0x17F),
                UnicodeBlock::new("b", 0x180, 0x24F),
                UnicodeBlock::new("c", 0x300, 0x36F),
            ]),
            2
        );
    }

    #[test]
    fn test_find_block() {
        let cyrillic = find_block("cyrillic").unwrap();
        assert_eq!(cyrillic.range, CodepointRange::new(0x0400, 0x04FF));
        assert!(find_block("Klingon").is_none());
    }

    #[test]
    fn test_block_of() {
        assert_eq!(block_of('λ').unwrap().name, "Greek and Coptic");
        assert_eq!(block_of('я').unwrap().name, "Cyrillic");
        assert_eq!(block_of('ع').unwrap().name, "Arabic");
        assert_eq!(block_of('中').unwrap().name, "CJK Unified Ideographs");
        assert!(block_of('a').is_none());
        assert!(block_of('\u{0800}').is_none());
    }
}
