//! # Scanner

use core::any::Any;

use crate::{
    alloc::sync::Arc,
    errors::WSResult,
    patterns::{Classification, PatternTable},
    tokenizer::TextInput,
    tokens::{Token, TokenStream},
    unicode::ScriptRangeTable,
};

/// Drives the [`PatternTable`] across a whole input.
///
/// A `Tokenizer` holds only immutable configuration: a shared
/// [`ScriptRangeTable`] and the fixed [`PatternTable`]. It is `Send + Sync`
/// and may be shared across threads; each call returns a fresh
/// [`TokenStream`] owned by the caller.
///
/// ## Style Hints
///
/// Instance names should prefer `tokenizer`.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    scripts: Arc<ScriptRangeTable>,
    patterns: PatternTable,
}

impl Tokenizer {
    /// Build a new tokenizer over the given script table.
    ///
    /// See [`TokenizerOptions`](super::TokenizerOptions) for a builder.
    pub fn new(scripts: Arc<ScriptRangeTable>) -> Self {
        Self {
            scripts,
            patterns: PatternTable::DEFAULT,
        }
    }

    /// The shared script table.
    pub fn scripts(&self) -> &Arc<ScriptRangeTable> {
        &self.scripts
    }

    /// The rule table.
    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    /// Classify the start of `text`.
    ///
    /// Returns `None` only for empty text.
    pub fn classify(
        &self,
        text: &str,
    ) -> Option<Classification> {
        self.patterns.classify(text, &self.scripts)
    }

    /// Scan a string or byte buffer.
    ///
    /// ## Arguments
    /// * `input` - anything convertible to a [`TextInput`].
    ///
    /// ## Errors
    /// [`WordscannerError::TypeError`](crate::WordscannerError::TypeError)
    /// if a byte buffer is not UTF-8 text; no partial stream is produced.
    pub fn parse<'a, I>(
        &self,
        input: I,
    ) -> WSResult<TokenStream<'a>>
    where
        I: Into<TextInput<'a>>,
    {
        let text = input.into().as_text()?;
        Ok(self.tokenize(text))
    }

    /// Scan a dynamically typed value.
    ///
    /// See [`TextInput::from_any`] for the accepted shapes.
    ///
    /// ## Errors
    /// [`WordscannerError::TypeError`](crate::WordscannerError::TypeError)
    /// for any other shape, or for bytes which are not UTF-8 text.
    pub fn parse_any<'a>(
        &self,
        value: &'a dyn Any,
    ) -> WSResult<TokenStream<'a>> {
        self.parse(TextInput::from_any(value)?)
    }

    /// Scan text.
    ///
    /// Every lexeme in the returned stream borrows from `text`,
    /// and joining the stream reproduces `text` exactly.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text), fields(len = text.len())))]
    pub fn tokenize<'a>(
        &self,
        text: &'a str,
    ) -> TokenStream<'a> {
        let mut stream = TokenStream::for_text_len(text.len());

        let mut rest = text;
        while !rest.is_empty() {
            let Some(found) = self.classify(rest) else {
                // CHAR takes every non-digit and NUMBER every digit.
                unreachable!(
                    "no pattern rule matched at byte {}",
                    text.len() - rest.len()
                );
            };

            let (lexeme, tail) = rest.split_at(found.len);
            stream.push(Token::new(found.kind, lexeme));
            rest = tail;
        }

        log::trace!(
            "scanned {} bytes into {} tokens",
            text.len(),
            stream.len()
        );
        stream
    }

    /// Read a file and scan its contents.
    ///
    /// Reading is delegated to [`read_bytes`](crate::io::read_bytes);
    /// the returned stream owns its lexemes.
    ///
    /// ## Errors
    /// * [`WordscannerError::Read`](crate::WordscannerError::Read) if the file cannot be read.
    /// * [`WordscannerError::TypeError`](crate::WordscannerError::TypeError) if it is not UTF-8 text.
    #[cfg(feature = "std")]
    pub fn read_file<P>(
        &self,
        path: P,
    ) -> WSResult<TokenStream<'static>>
    where
        P: AsRef<std::path::Path>,
    {
        let path = path.as_ref();
        let bytes = crate::io::read_bytes(path)?;
        let stream = self.parse(&bytes)?.into_owned();
        log::debug!("scanned {:?} into {} tokens", path, stream.len());
        Ok(stream)
    }
}
