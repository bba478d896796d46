//! # Pattern Rules

use crate::{patterns::CharClass, tokens::TokenKind, unicode::ScriptRangeTable};

/// A single classification rule.
///
/// Each rule matches a prefix anchored at the start of the text it is given;
/// it never searches forward. Matches are greedy, except for
/// [`Char`](Self::Char), which is always exactly one char.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternRule {
    /// A run of letters and digits, with optional infix hyphens or apostrophes.
    ///
    /// The run:
    /// * starts with an ASCII letter, ASCII digit or script letter;
    /// * continues through ASCII letters, ASCII digits and script letters;
    /// * continues through a `-` or `'` only when a letter follows it.
    ///
    /// It is a match when it holds at least one letter, and either
    /// spans two or more chars or is made up entirely of script letters.
    /// A lone ASCII letter is therefore not a `WORD`, while a lone
    /// script letter is.
    Word,

    /// A run of one or more whitespace chars.
    Whitespace,

    /// Any single char which is not an ASCII digit.
    Char,

    /// A run of one or more ASCII digits.
    Number,
}

impl PatternRule {
    /// The [`TokenKind`] this rule emits.
    pub const fn kind(self) -> TokenKind {
        match self {
            Self::Word => TokenKind::Word,
            Self::Whitespace => TokenKind::Whitespace,
            Self::Char => TokenKind::Char,
            Self::Number => TokenKind::Number,
        }
    }

    /// Match this rule against the start of `text`.
    ///
    /// ## Returns
    /// * `Some(len)` - the byte length of the matched prefix; always `> 0`.
    /// * `None` - the rule does not match at the start of `text`.
    pub fn match_len(
        self,
        text: &str,
        scripts: &ScriptRangeTable,
    ) -> Option<usize> {
        match self {
            Self::Word => match_word(text, scripts),
            Self::Whitespace => match_run(text, |c| {
                CharClass::of(c, scripts) == CharClass::Whitespace
            }),
            Self::Char => text
                .chars()
                .next()
                .filter(|c| !c.is_ascii_digit())
                .map(char::len_utf8),
            Self::Number => {
                let len = text.bytes().take_while(u8::is_ascii_digit).count();
                (len > 0).then_some(len)
            }
        }
    }
}

/// Greedy run of chars satisfying `pred`.
fn match_run<P>(
    text: &str,
    mut pred: P,
) -> Option<usize>
where
    P: FnMut(char) -> bool,
{
    let len: usize = text
        .chars()
        .take_while(|&c| pred(c))
        .map(char::len_utf8)
        .sum();
    (len > 0).then_some(len)
}

fn match_word(
    text: &str,
    scripts: &ScriptRangeTable,
) -> Option<usize> {
    let mut chars = text.char_indices();

    let mut end = 0;
    let mut count = 0;
    let mut has_letter = false;
    let mut all_script = true;

    while let Some((idx, c)) = chars.next() {
        let class = CharClass::of(c, scripts);
        if class.is_word_material() {
            has_letter |= class.is_letter();
            all_script &= class == CharClass::ScriptLetter;
        } else if class == CharClass::Joiner && count > 0 {
            let joins = chars
                .clone()
                .next()
                .is_some_and(|(_, next)| CharClass::of(next, scripts).is_letter());
            if !joins {
                break;
            }
            all_script = false;
        } else {
            break;
        }

        end = idx + c.len_utf8();
        count += 1;
    }

    (has_letter && (count >= 2 || all_script)).then_some(end)
}
