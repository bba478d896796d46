use std::io::Write;

use wordscanner::{Token, TokenStream};

use crate::commands::{blocks::BlocksArgs, join::JoinArgs, scan::ScanArgs, verify::VerifyArgs};

pub mod blocks;
pub mod join;
pub mod scan;
pub mod verify;

/// Subcommands for wordscanner.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Scan text into tokens.
    Scan(ScanArgs),

    /// Join a scanned token stream back into text.
    Join(JoinArgs),

    /// Check that scanning then joining reproduces each input.
    Verify(VerifyArgs),

    /// List the default script blocks.
    Blocks(BlocksArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Scan(cmd) => cmd.run(),
            Commands::Join(cmd) => cmd.run(),
            Commands::Verify(cmd) => cmd.run(),
            Commands::Blocks(cmd) => cmd.run(),
        }
    }
}

/// Token output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TokenFormat {
    /// One token per line: `WORD"test"`.
    #[default]
    Text,

    /// One JSON `["WORD","test"]` pair per line.
    Json,
}

impl TokenFormat {
    /// Write one token as a line.
    pub fn write_token(
        self,
        writer: &mut dyn Write,
        token: &Token<'_>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            TokenFormat::Text => writeln!(writer, "{token}")?,
            TokenFormat::Json => writeln!(writer, "{}", serde_json::to_string(token)?)?,
        }
        Ok(())
    }

    /// Write every token in the stream, one per line.
    pub fn write_stream(
        self,
        writer: &mut dyn Write,
        stream: &TokenStream<'_>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        for token in stream {
            self.write_token(writer, token)?;
        }
        Ok(())
    }
}

/// Log the per-kind token counts of a stream.
pub fn log_kind_counts(
    label: &str,
    stream: &TokenStream<'_>,
) {
    let counts = stream
        .kind_counts()
        .into_iter()
        .map(|(kind, count)| format!("{kind}={count}"))
        .collect::<Vec<_>>()
        .join(" ");
    log::info!("{label}: {} tokens ({counts})", stream.len());
}
