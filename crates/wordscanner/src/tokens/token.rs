//! # Tokens

use core::fmt;

use crate::{
    alloc::{borrow::Cow, string::String},
    tokens::TokenKind,
};

/// A classified slice of input text.
///
/// Freshly scanned tokens borrow their lexeme from the input;
/// a lexeme replaced through [`set_lexeme`](Self::set_lexeme) is owned.
/// No check ties the lexeme back to the kind after a replacement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    kind: TokenKind,
    lexeme: Cow<'a, str>,
}

impl<'a> Token<'a> {
    /// Build a new token.
    pub fn new<S>(
        kind: TokenKind,
        lexeme: S,
    ) -> Self
    where
        S: Into<Cow<'a, str>>,
    {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// The token kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token text.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Overwrite the token text.
    ///
    /// The kind is left as-is.
    pub fn set_lexeme<S>(
        &mut self,
        lexeme: S,
    ) where
        S: Into<Cow<'a, str>>,
    {
        self.lexeme = lexeme.into();
    }

    /// Does the lexeme still borrow from the scanned input?
    pub fn is_borrowed(&self) -> bool {
        matches!(self.lexeme, Cow::Borrowed(_))
    }

    /// The external `(kind name, lexeme)` pair.
    pub fn as_pair(&self) -> (&'static str, &str) {
        (self.kind.as_str(), &self.lexeme)
    }

    /// Detach the token from the input it was scanned from.
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            lexeme: Cow::Owned(self.lexeme.into_owned()),
        }
    }

    /// Split the token into its kind and lexeme.
    pub fn into_parts(self) -> (TokenKind, Cow<'a, str>) {
        (self.kind, self.lexeme)
    }
}

impl fmt::Display for Token<'_> {
    /// Formats as the kind name followed by the quoted lexeme: `WORD"test"`.
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}{:?}", self.kind, self.lexeme)
    }
}

impl From<(TokenKind, String)> for Token<'static> {
    fn from((kind, lexeme): (TokenKind, String)) -> Self {
        Self::new(kind, lexeme)
    }
}

impl<'a> From<(TokenKind, &'a str)> for Token<'a> {
    fn from((kind, lexeme): (TokenKind, &'a str)) -> Self {
        Self::new(kind, lexeme)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Token<'_> {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&(self.kind, self.lexeme()), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Token<'static> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let pair: (TokenKind, String) = serde::Deserialize::deserialize(deserializer)?;
        Ok(pair.into())
    }
}
