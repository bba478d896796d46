use std::io::Write;

use wordscanner::unicode::{DEFAULT_SCRIPT_BLOCKS, UnicodeBlock, block_of, find_block};

use crate::input_output::OutputArgs;

/// Args for the blocks command.
#[derive(clap::Args, Debug)]
pub struct BlocksArgs {
    /// Only show the block containing this character.
    #[arg(long, value_name = "CHAR", conflicts_with = "name")]
    contains: Option<char>,

    /// Only show the block with this name (case-insensitive).
    #[arg(long)]
    name: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

impl BlocksArgs {
    /// Run the blocks command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let blocks = self.select()?;

        let mut writer = self.output.open_writer()?;
        for block in blocks {
            writeln!(writer, "{}\t{}", block.range, block.name)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn select(&self) -> Result<Vec<&'static UnicodeBlock>, String> {
        if let Some(c) = self.contains {
            let block = block_of(c)
                .ok_or_else(|| format!("{c:?} (U+{:04X}) is not in a default script block", c as u32))?;
            Ok(vec![block])
        } else if let Some(name) = &self.name {
            let block = find_block(name).ok_or_else(|| format!("no default script block named {name:?}"))?;
            Ok(vec![block])
        } else {
            Ok(DEFAULT_SCRIPT_BLOCKS.iter().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(
        contains: Option<char>,
        name: Option<&str>,
    ) -> BlocksArgs {
        BlocksArgs {
            contains,
            name: name.map(str::to_string),
            output: OutputArgs { output: None },
        }
    }

    #[test]
    fn test_select() {
        assert_eq!(args(None, None).select().unwrap().len(), DEFAULT_SCRIPT_BLOCKS.len());

        let found = args(Some('ж'), None).select().unwrap();
        assert_eq!(found[0].name, "Cyrillic");

        let found = args(None, Some("greek and coptic")).select().unwrap();
        assert!(found[0].range.contains('λ'));

        assert!(args(Some('a'), None).select().is_err());
        assert!(args(None, Some("Klingon")).select().is_err());
    }
}
