//! # Pattern Table

use crate::{patterns::PatternRule, tokens::TokenKind, unicode::ScriptRangeTable};

/// The result of classifying the text at a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// The kind of the winning rule.
    pub kind: TokenKind,

    /// The byte length of the matched prefix; always `> 0`.
    pub len: usize,
}

impl Classification {
    /// The matched prefix of `text`.
    ///
    /// Returns `None` if `text` is too short or `len` does not fall on a
    /// char boundary, i.e. `text` is not the text which was classified.
    pub fn lexeme<'a>(
        &self,
        text: &'a str,
    ) -> Option<&'a str> {
        text.get(..self.len)
    }
}

/// The ordered rule list; order is precedence.
///
/// The order is fixed: `WORD`, `WHITESPACE`, `CHAR`, `NUMBER`.
/// `CHAR` accepts every non-digit char and `NUMBER` accepts every digit,
/// so for any non-empty text some rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternTable {
    rules: [PatternRule; 4],
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PatternTable {
    /// The fixed rule table.
    pub const DEFAULT: Self = Self {
        rules: [
            PatternRule::Word,
            PatternRule::Whitespace,
            PatternRule::Char,
            PatternRule::Number,
        ],
    };

    /// The rules, in precedence order.
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Classify the start of `text`.
    ///
    /// Tries each rule in order, anchored at the start of `text`;
    /// the first rule which matches a non-empty prefix wins.
    ///
    /// ## Returns
    /// * `Some(Classification)` - the winning rule's kind and match length.
    /// * `None` - `text` is empty.
    #[inline]
    pub fn classify(
        &self,
        text: &str,
        scripts: &ScriptRangeTable,
    ) -> Option<Classification> {
        self.rules.iter().find_map(|rule| {
            rule.match_len(text, scripts).map(|len| Classification {
                kind: rule.kind(),
                len,
            })
        })
    }
}
