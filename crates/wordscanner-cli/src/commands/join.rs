use std::io::{BufRead, Write};

use wordscanner::{Token, TokenStream};

use crate::input_output::{InputArgs, OutputArgs};

/// Parse an `INDEX=TEXT` lexeme replacement.
pub fn parse_edit(arg: &str) -> Result<(usize, String), String> {
    let (index, text) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=TEXT, got {arg:?}"))?;
    let index = index
        .trim()
        .parse()
        .map_err(|e| format!("invalid token index {index:?}: {e}"))?;
    Ok((index, text.to_string()))
}

/// Args for the join command.
///
/// Reads the `--format json` output of `scan`, one token per line.
#[derive(clap::Args, Debug)]
pub struct JoinArgs {
    /// Replace the lexeme of token INDEX before joining; may repeat.
    #[arg(long = "set", value_name = "INDEX=TEXT", value_parser = parse_edit)]
    edits: Vec<(usize, String)>,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl JoinArgs {
    /// Run the join command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let reader = self.input.open_reader()?;
        let mut stream = read_token_lines(reader)?;
        log::info!("read {} tokens from {}", stream.len(), self.input.describe());

        for (index, text) in &self.edits {
            stream.set_lexeme(*index, text.clone())?;
        }

        let mut writer = self.output.open_writer()?;
        stream.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Read one JSON token pair per line; blank lines are skipped.
pub fn read_token_lines(
    reader: Box<dyn BufRead>
) -> Result<TokenStream<'static>, Box<dyn std::error::Error>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let token: Token<'static> = serde_json::from_str(&line)?;
        tokens.push(token);
    }
    Ok(tokens.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use wordscanner::Tokenizer;

    use super::*;
    use crate::commands::TokenFormat;

    #[test]
    fn test_parse_edit() {
        assert_eq!(parse_edit("2=test2").unwrap(), (2, "test2".to_string()));
        assert_eq!(parse_edit("0=a=b").unwrap(), (0, "a=b".to_string()));
        assert_eq!(parse_edit("1=").unwrap(), (1, String::new()));
        assert!(parse_edit("test2").is_err());
        assert!(parse_edit("x=1").is_err());
    }

    #[test]
    fn test_scan_then_join() {
        let stream = Tokenizer::default().tokenize("test test test");

        let mut buf: Vec<u8> = Vec::new();
        TokenFormat::Json.write_stream(&mut buf, &stream).unwrap();

        let mut back = read_token_lines(Box::new(Cursor::new(buf))).unwrap();
        assert_eq!(back, stream);

        back.set_lexeme(2, "test2").unwrap();
        assert_eq!(back.join(), "test test2 test");
    }
}
