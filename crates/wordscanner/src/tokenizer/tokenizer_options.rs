//! # Tokenizer Options

use crate::{
    Tokenizer,
    alloc::sync::Arc,
    unicode::{CodepointRange, ScriptRangeTable},
};

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenizerOptions {
    /// The script range table; shared, never mutated.
    ///
    /// Defaults to [`ScriptRangeTable::default`].
    pub scripts: Arc<ScriptRangeTable>,
}

impl TokenizerOptions {
    /// Gets the configured script table.
    pub fn scripts(&self) -> &Arc<ScriptRangeTable> {
        &self.scripts
    }

    /// Sets the script table.
    pub fn set_scripts<S>(
        &mut self,
        scripts: S,
    ) where
        S: Into<Arc<ScriptRangeTable>>,
    {
        self.scripts = scripts.into();
    }

    /// Sets the script table.
    pub fn with_scripts<S>(
        mut self,
        scripts: S,
    ) -> Self
    where
        S: Into<Arc<ScriptRangeTable>>,
    {
        self.set_scripts(scripts);
        self
    }

    /// Extends the configured script table with extra ranges.
    ///
    /// Builds a new table; tokenizers already sharing the old table are unaffected.
    pub fn with_extra_ranges<I, R>(
        self,
        ranges: I,
    ) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<CodepointRange>,
    {
        let scripts = self.scripts.with_ranges(ranges);
        self.with_scripts(scripts)
    }

    /// Build a [`Tokenizer`].
    pub fn build(&self) -> Arc<Tokenizer> {
        Tokenizer::new(self.scripts.clone()).into()
    }
}
