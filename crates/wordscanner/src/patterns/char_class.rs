//! # Character Classes

use crate::unicode::ScriptRangeTable;

/// The scanner's view of a single character.
///
/// Every rule in the [`PatternTable`](super::PatternTable) is written against
/// these classes rather than against raw chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `a-z` or `A-Z`.
    AsciiLetter,

    /// `0-9`.
    AsciiDigit,

    /// A non-ASCII-alphanumeric codepoint in the [`ScriptRangeTable`].
    ///
    /// Takes precedence over [`Whitespace`](Self::Whitespace), so a
    /// configured codepoint such as `U+00A0` is word material.
    ScriptLetter,

    /// Whitespace which is not a script letter.
    Whitespace,

    /// A hyphen or apostrophe; may join the letters of a word.
    Joiner,

    /// Anything else: punctuation, symbols, control characters.
    Other,
}

impl CharClass {
    /// Classify a char against the given script table.
    #[inline]
    pub fn of(
        c: char,
        scripts: &ScriptRangeTable,
    ) -> Self {
        if c.is_ascii_alphabetic() {
            Self::AsciiLetter
        } else if c.is_ascii_digit() {
            Self::AsciiDigit
        } else if scripts.contains(c) {
            Self::ScriptLetter
        } else if c.is_whitespace() {
            Self::Whitespace
        } else if c == '-' || c == '\'' {
            Self::Joiner
        } else {
            Self::Other
        }
    }

    /// Is this an ASCII or script letter?
    #[inline]
    pub fn is_letter(self) -> bool {
        matches!(self, Self::AsciiLetter | Self::ScriptLetter)
    }

    /// Can this class appear inside a word without a joiner?
    #[inline]
    pub fn is_word_material(self) -> bool {
        matches!(
            self,
            Self::AsciiLetter | Self::AsciiDigit | Self::ScriptLetter
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_classes() {
        let scripts = ScriptRangeTable::default();
        assert_eq!(CharClass::of('a', &scripts), CharClass::AsciiLetter);
        assert_eq!(CharClass::of('Q', &scripts), CharClass::AsciiLetter);
        assert_eq!(CharClass::of('7', &scripts), CharClass::AsciiDigit);
        assert_eq!(CharClass::of(' ', &scripts), CharClass::Whitespace);
        assert_eq!(CharClass::of('\t', &scripts), CharClass::Whitespace);
        assert_eq!(CharClass::of('\r', &scripts), CharClass::Whitespace);
        assert_eq!(CharClass::of('-', &scripts), CharClass::Joiner);
        assert_eq!(CharClass::of('\'', &scripts), CharClass::Joiner);
        assert_eq!(CharClass::of('+', &scripts), CharClass::Other);
        assert_eq!(CharClass::of('\0', &scripts), CharClass::Other);
    }

    #[test]
    fn test_script_classes() {
        let scripts = ScriptRangeTable::default();
        assert_eq!(CharClass::of('λ', &scripts), CharClass::ScriptLetter);
        assert_eq!(CharClass::of('ж', &scripts), CharClass::ScriptLetter);

        // Configured blocks win over whitespace.
        assert_eq!(CharClass::of('\u{00A0}', &scripts), CharClass::ScriptLetter);
        assert_eq!(CharClass::of('\u{3000}', &scripts), CharClass::ScriptLetter);

        // Unconfigured whitespace stays whitespace.
        assert_eq!(CharClass::of('\u{0085}', &scripts), CharClass::Whitespace);

        let empty = ScriptRangeTable::empty();
        assert_eq!(CharClass::of('λ', &empty), CharClass::Other);
        assert_eq!(CharClass::of('\u{00A0}', &empty), CharClass::Whitespace);
    }

    #[test]
    fn test_predicates() {
        assert!(CharClass::AsciiLetter.is_letter());
        assert!(CharClass::ScriptLetter.is_letter());
        assert!(!CharClass::AsciiDigit.is_letter());

        assert!(CharClass::AsciiDigit.is_word_material());
        assert!(!CharClass::Joiner.is_word_material());
        assert!(!CharClass::Whitespace.is_word_material());
    }
}
