use std::sync::Arc;

use wordscanner::{CodepointRange, ScriptRangeTable, Tokenizer, TokenizerOptions};

/// Parse a `LOW-HIGH` pair of hex codepoints, e.g. `1F600-1F64F` or `U+0400-U+04FF`.
pub fn parse_hex_range(arg: &str) -> Result<CodepointRange, String> {
    fn parse_codepoint(s: &str) -> Result<u32, String> {
        let digits = s
            .trim()
            .trim_start_matches("U+")
            .trim_start_matches("u+")
            .trim_start_matches("0x");
        let codepoint =
            u32::from_str_radix(digits, 16).map_err(|e| format!("invalid codepoint {s:?}: {e}"))?;
        if codepoint > char::MAX as u32 {
            return Err(format!("codepoint {s:?} is beyond U+10FFFF"));
        }
        Ok(codepoint)
    }

    let (low, high) = arg
        .split_once('-')
        .ok_or_else(|| format!("expected LOW-HIGH, got {arg:?}"))?;
    Ok(CodepointRange::new(
        parse_codepoint(low)?,
        parse_codepoint(high)?,
    ))
}

/// Script table argument group.
#[derive(clap::Args, Debug, Default)]
pub struct ScriptArgs {
    /// Extra script range to scan as WORD letters, as hex `LOW-HIGH`; may repeat.
    #[arg(long = "extra-range", value_name = "LOW-HIGH", value_parser = parse_hex_range)]
    pub extra_ranges: Vec<CodepointRange>,

    /// Start from an empty script table instead of the default blocks.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_default_blocks: bool,
}

impl ScriptArgs {
    /// Build the script table.
    pub fn scripts(&self) -> ScriptRangeTable {
        let base = if self.no_default_blocks {
            ScriptRangeTable::empty()
        } else {
            ScriptRangeTable::default()
        };
        base.with_ranges(self.extra_ranges.iter().copied())
    }

    /// Build a shared tokenizer.
    pub fn build_tokenizer(&self) -> Arc<Tokenizer> {
        let scripts = self.scripts();
        log::debug!("script table holds {} ranges", scripts.len());
        TokenizerOptions::default().with_scripts(scripts).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_range() {
        assert_eq!(
            parse_hex_range("1F600-1F64F").unwrap(),
            CodepointRange::new(0x1F600, 0x1F64F)
        );
        assert_eq!(
            parse_hex_range("U+04FF-U+0400").unwrap(),
            CodepointRange::new(0x0400, 0x04FF)
        );
        assert!(parse_hex_range("1F600").is_err());
        assert!(parse_hex_range("zz-10").is_err());
        assert!(parse_hex_range("0-110000").is_err());
    }

    #[test]
    fn test_scripts() {
        let args = ScriptArgs::default();
        assert_eq!(args.scripts(), ScriptRangeTable::default());

        let args = ScriptArgs {
            extra_ranges: vec![CodepointRange::new(0x1F600, 0x1F64F)],
            no_default_blocks: true,
        };
        let scripts = args.scripts();
        assert!(scripts.contains('\u{1F642}'));
        assert!(!scripts.contains('λ'));

        let tokenizer = args.build_tokenizer();
        assert_eq!(tokenizer.tokenize("λ").len(), 1);
        assert_eq!(tokenizer.scripts().as_ref(), &scripts);
    }
}
