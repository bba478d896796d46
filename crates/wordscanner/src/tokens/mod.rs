//! # Tokens and Token Streams
//!
//! * [`TokenKind`] - `WORD`, `WHITESPACE`, `CHAR` or `NUMBER`.
//! * [`Token`] - a `(kind, lexeme)` pair.
//! * [`TokenStream`] - the ordered tokens of one scan; supports in-place
//!   lexeme replacement and [`join`](TokenStream::join).

mod token;
mod token_kind;
mod token_stream;

#[doc(inline)]
pub use token::*;
#[doc(inline)]
pub use token_kind::*;
#[doc(inline)]
pub use token_stream::*;
