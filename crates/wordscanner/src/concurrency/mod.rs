//! # Concurrency Utilities
//!
//! A [`Tokenizer`](crate::Tokenizer) is immutable and `Send + Sync`;
//! any number of threads may scan through one shared instance.
//! [`ParallelRayonTokenizer`] adds ``rayon`` batch scanning on top.

mod rayon_tokenizer;

#[doc(inline)]
pub use rayon_tokenizer::*;
