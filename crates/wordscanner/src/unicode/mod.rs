//! # Unicode Script Ranges
//!
//! This module answers one question for the `WORD` rule:
//! "is this codepoint a member of a configured non-ASCII letter block?"
//!
//! * [`CodepointRange`] - an inclusive codepoint interval.
//! * [`UnicodeBlock`] / [`DEFAULT_SCRIPT_BLOCKS`] - the named default blocks.
//! * [`ScriptRangeTable`] - the immutable, binary-searched membership table.
//!
//! Callers extend script coverage by building a new table:
//!
//! ```rust
//! use wordscanner::unicode::ScriptRangeTable;
//!
//! let scripts = ScriptRangeTable::default().with_ranges(['\u{1F600}'..='\u{1F64F}']);
//! assert!(scripts.contains('\u{1F642}'));
//! ```

mod codepoint_range;
mod script_range_table;
mod unicode_blocks;

#[doc(inline)]
pub use codepoint_range::*;
#[doc(inline)]
pub use script_range_table::*;
#[doc(inline)]
pub use unicode_blocks::{DEFAULT_SCRIPT_BLOCKS, UnicodeBlock, block_of, find_block};
