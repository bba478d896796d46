//! # Token Kinds

/// The category of a [`Token`](super::Token).
///
/// The external names are the literal strings `"WORD"`, `"WHITESPACE"`,
/// `"CHAR"` and `"NUMBER"`; [`Display`](core::fmt::Display),
/// [`FromStr`](core::str::FromStr) and [`as_str`](Self::as_str) all use them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TokenKind {
    /// A run of letters and digits.
    Word,

    /// A run of whitespace.
    Whitespace,

    /// A single non-digit char not claimed by another rule.
    Char,

    /// A run of ASCII digits.
    Number,
}

impl TokenKind {
    /// The stable external name of this kind.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
