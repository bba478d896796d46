//! # Pattern Rules and Classification
//!
//! [`PatternTable`] holds the fixed-priority rule list used to classify
//! the text at a cursor:
//!
//! | Priority | Rule                       | Kind         |
//! |----------|----------------------------|--------------|
//! | 1        | [`PatternRule::Word`]       | `WORD`       |
//! | 2        | [`PatternRule::Whitespace`] | `WHITESPACE` |
//! | 3        | [`PatternRule::Char`]       | `CHAR`       |
//! | 4        | [`PatternRule::Number`]     | `NUMBER`     |
//!
//! Rules are direct scanners over [`CharClass`]es; no regex engine is involved.

mod char_class;
mod pattern_rule;
mod pattern_table;

#[doc(inline)]
pub use char_class::*;
#[doc(inline)]
pub use pattern_rule::*;
#[doc(inline)]
pub use pattern_table::*;
