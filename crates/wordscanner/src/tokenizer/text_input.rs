//! # Text Input

use core::any::Any;

use crate::{
    alloc::{boxed::Box, format, string::String, vec::Vec},
    errors::{WSResult, WordscannerError},
};

/// The two input shapes a [`Tokenizer`](super::Tokenizer) accepts.
///
/// Both are normalized to `&str` before scanning; see [`as_text`](Self::as_text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInput<'a> {
    /// A string.
    Str(&'a str),

    /// A raw byte buffer; must hold UTF-8 text.
    Bytes(&'a [u8]),
}

impl<'a> TextInput<'a> {
    /// Normalize the input to text.
    ///
    /// ## Errors
    /// [`WordscannerError::TypeError`] if a byte buffer is not valid UTF-8.
    pub fn as_text(&self) -> WSResult<&'a str> {
        match *self {
            Self::Str(text) => Ok(text),
            Self::Bytes(bytes) => core::str::from_utf8(bytes).map_err(|err| {
                WordscannerError::type_error(format!(
                    "byte buffer is not UTF-8 text (invalid at byte {})",
                    err.valid_up_to()
                ))
            }),
        }
    }

    /// Accept a dynamically typed value.
    ///
    /// Accepted shapes: `String`, `&'static str`, `Box<str>`,
    /// `Vec<u8>`, `&'static [u8]` and `Box<[u8]>`.
    ///
    /// ## Errors
    /// [`WordscannerError::TypeError`] for every other shape.
    pub fn from_any(value: &'a dyn Any) -> WSResult<Self> {
        if let Some(text) = value.downcast_ref::<String>() {
            Ok(Self::Str(text))
        } else if let Some(text) = value.downcast_ref::<&'static str>() {
            Ok(Self::Str(text))
        } else if let Some(text) = value.downcast_ref::<Box<str>>() {
            Ok(Self::Str(text))
        } else if let Some(bytes) = value.downcast_ref::<Vec<u8>>() {
            Ok(Self::Bytes(bytes))
        } else if let Some(bytes) = value.downcast_ref::<&'static [u8]>() {
            Ok(Self::Bytes(bytes))
        } else if let Some(bytes) = value.downcast_ref::<Box<[u8]>>() {
            Ok(Self::Bytes(bytes))
        } else {
            Err(WordscannerError::type_error(
                "only strings and byte buffers can be scanned",
            ))
        }
    }

    /// The input length in bytes.
    pub fn len(&self) -> usize {
        match self {
            Self::Str(text) => text.len(),
            Self::Bytes(bytes) => bytes.len(),
        }
    }

    /// Is the input empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a str> for TextInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Str(text)
    }
}

impl<'a> From<&'a String> for TextInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Str(text)
    }
}

impl<'a> From<&'a [u8]> for TextInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for TextInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for TextInput<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes)
    }
}
