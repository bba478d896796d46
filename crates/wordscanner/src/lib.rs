//! # `wordscanner` Lossless Text Scanner
//!
//! `wordscanner` splits text into an ordered stream of typed tokens:
//! `WORD`, `WHITESPACE`, `CHAR` and `NUMBER`.
//!
//! The scan is lossless: joining the lexemes of a [`TokenStream`] in order
//! reproduces the input exactly. Callers may rewrite individual lexemes
//! in place and join the stream back into text.
//!
//! See:
//! * [`tokenizer`] for the [`Tokenizer`] entry points.
//! * [`tokens`] for [`Token`], [`TokenKind`] and [`TokenStream`].
//! * [`patterns`] for the fixed-priority rule table and the character classifier.
//! * [`unicode`] for the script range table which extends `WORD` beyond ASCII.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust
//! use wordscanner::{TokenKind, Tokenizer};
//!
//! let tokenizer = Tokenizer::default();
//!
//! let mut stream = tokenizer.parse("test test test")?;
//! assert_eq!(stream[0].kind(), TokenKind::Word);
//!
//! stream.set_lexeme(2, "test2")?;
//! assert_eq!(stream.join(), "test test2 test");
//! # Ok::<(), wordscanner::WordscannerError>(())
//! ```
#![warn(missing_docs, unused)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod errors;
pub mod patterns;
pub mod tokenizer;
pub mod tokens;
pub mod unicode;

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        pub mod io;
    }
}

#[cfg(feature = "rayon")]
pub mod concurrency;

#[doc(inline)]
pub use errors::{WSResult, WordscannerError};
#[doc(inline)]
pub use tokenizer::{TextInput, Tokenizer, TokenizerOptions};
#[doc(inline)]
pub use tokens::{Token, TokenKind, TokenStream};
#[doc(inline)]
pub use unicode::{CodepointRange, ScriptRangeTable};
