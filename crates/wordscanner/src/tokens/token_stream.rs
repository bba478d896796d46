//! # Token Stream

use core::{
    ops::{Index, IndexMut},
    slice,
};

use strum::IntoEnumIterator;

use crate::{
    alloc::{borrow::Cow, string::String, vec, vec::Vec},
    errors::{WSResult, WordscannerError},
    tokens::{Token, TokenKind},
};

/// Expected number of input bytes per token, used to pre-size streams.
///
/// Mostly-ASCII prose averages a little over two tokens per word
/// (the word and its trailing whitespace).
pub const EXPECTED_BYTES_PER_TOKEN: f32 = 3.2;

/// The ordered tokens of one scan.
///
/// Insertion order is document order. The caller owns the stream;
/// lexemes may be rewritten in place, and [`join`](Self::join)
/// concatenates whatever the lexemes currently hold.
///
/// ## Style Hints
///
/// Instance names should prefer `stream`, or `tokens` when there is no ambiguity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenStream<'a> {
    /// Build an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an empty stream sized for `text_len` bytes of input.
    pub fn for_text_len(text_len: usize) -> Self {
        let capacity = text_len as f32 / EXPECTED_BYTES_PER_TOKEN;
        Self {
            tokens: Vec::with_capacity(capacity as usize),
        }
    }

    /// Append a token.
    pub(crate) fn push(
        &mut self,
        token: Token<'a>,
    ) {
        self.tokens.push(token);
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the stream empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens, in order.
    pub fn as_slice(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> slice::Iter<'_, Token<'a>> {
        self.tokens.iter()
    }

    /// Iterate mutably over the tokens.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Token<'a>> {
        self.tokens.iter_mut()
    }

    /// Get a token by position.
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&Token<'a>> {
        self.tokens.get(index)
    }

    /// Get a mutable token by position.
    pub fn get_mut(
        &mut self,
        index: usize,
    ) -> Option<&mut Token<'a>> {
        self.tokens.get_mut(index)
    }

    /// Overwrite the lexeme of the token at `index`.
    ///
    /// The kind is not re-validated.
    ///
    /// ## Errors
    /// [`WordscannerError::TokenOutOfRange`] if `index >= self.len()`.
    pub fn set_lexeme<S>(
        &mut self,
        index: usize,
        lexeme: S,
    ) -> WSResult<()>
    where
        S: Into<Cow<'a, str>>,
    {
        let len = self.tokens.len();
        match self.tokens.get_mut(index) {
            Some(token) => {
                token.set_lexeme(lexeme);
                Ok(())
            }
            None => Err(WordscannerError::TokenOutOfRange { index, len }),
        }
    }

    /// The total byte length of all lexemes.
    pub fn text_len(&self) -> usize {
        self.tokens.iter().map(|t| t.lexeme().len()).sum()
    }

    /// Concatenate every lexeme, in order.
    ///
    /// For an unmodified stream this reproduces the scanned input exactly.
    pub fn join(&self) -> String {
        let mut joined = String::with_capacity(self.text_len());
        for token in &self.tokens {
            joined.push_str(token.lexeme());
        }
        joined
    }

    /// Write every lexeme, in order, to `writer`.
    #[cfg(feature = "std")]
    pub fn write_to<W>(
        &self,
        writer: &mut W,
    ) -> std::io::Result<()>
    where
        W: std::io::Write + ?Sized,
    {
        for token in &self.tokens {
            writer.write_all(token.lexeme().as_bytes())?;
        }
        Ok(())
    }

    /// Count the tokens of each kind, in [`TokenKind`] order.
    pub fn kind_counts(&self) -> Vec<(TokenKind, usize)> {
        let mut counts: Vec<(TokenKind, usize)> = TokenKind::iter().map(|k| (k, 0)).collect();
        for token in &self.tokens {
            if let Some(entry) = counts.iter_mut().find(|(k, _)| *k == token.kind()) {
                entry.1 += 1;
            }
        }
        counts
    }

    /// Detach the stream from the input it was scanned from.
    pub fn into_owned(self) -> TokenStream<'static> {
        TokenStream {
            tokens: self.tokens.into_iter().map(Token::into_owned).collect(),
        }
    }

    /// Unwrap the stream into its tokens.
    pub fn into_tokens(self) -> Vec<Token<'a>> {
        self.tokens
    }
}

impl<'a> Index<usize> for TokenStream<'a> {
    type Output = Token<'a>;

    fn index(
        &self,
        index: usize,
    ) -> &Self::Output {
        &self.tokens[index]
    }
}

impl IndexMut<usize> for TokenStream<'_> {
    fn index_mut(
        &mut self,
        index: usize,
    ) -> &mut Self::Output {
        &mut self.tokens[index]
    }
}

impl<'a> FromIterator<Token<'a>> for TokenStream<'a> {
    fn from_iter<I: IntoIterator<Item = Token<'a>>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for TokenStream<'a> {
    type Item = Token<'a>;
    type IntoIter = vec::IntoIter<Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s TokenStream<'a> {
    type Item = &'s Token<'a>;
    type IntoIter = slice::Iter<'s, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl<'s, 'a> IntoIterator for &'s mut TokenStream<'a> {
    type Item = &'s mut Token<'a>;
    type IntoIter = slice::IterMut<'s, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter_mut()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenStream<'_> {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.tokens)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TokenStream<'static> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tokens: Vec<Token<'static>> = serde::Deserialize::deserialize(deserializer)?;
        Ok(Self { tokens })
    }
}
