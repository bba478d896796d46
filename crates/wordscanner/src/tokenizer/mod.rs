//! # Tokenizer
//!
//! * [`Tokenizer`] - scans text into a [`TokenStream`](crate::TokenStream).
//! * [`TokenizerOptions`] - builds a shared [`Tokenizer`] with a custom script table.
//! * [`TextInput`] - the accepted input shapes: strings and UTF-8 byte buffers.
//!
//! The scan loop classifies the remaining text against the rule table,
//! emits one token, and advances past it until the input is exhausted.
//!
//! ```rust
//! use wordscanner::{TokenizerOptions, WordscannerError};
//!
//! let tokenizer = TokenizerOptions::default()
//!     .with_extra_ranges([0x1F600u32..=0x1F64F])
//!     .build();
//!
//! let stream = tokenizer.parse(b"smile \xF0\x9F\x98\x80")?;
//! assert_eq!(stream.len(), 3);
//!
//! let err = tokenizer.parse(b"\xFF").unwrap_err();
//! assert!(matches!(err, WordscannerError::TypeError { .. }));
//! # Ok::<(), WordscannerError>(())
//! ```

mod scanner;
mod text_input;
mod tokenizer_options;

#[doc(inline)]
pub use scanner::*;
#[doc(inline)]
pub use text_input::*;
#[doc(inline)]
pub use tokenizer_options::*;
