use std::{io::Write, path::PathBuf};

use rayon::prelude::*;

use crate::{
    commands::log_kind_counts,
    input_output::{InputArgs, OutputArgs, expand_paths},
    scripts::ScriptArgs,
};

/// Args for the verify command.
#[derive(clap::Args, Debug)]
pub struct VerifyArgs {
    /// Input files or directories; when absent, `--input` (or stdin) is checked.
    files: Vec<PathBuf>,

    #[command(flatten)]
    scripts: ScriptArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

/// The outcome of checking one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    /// The input label.
    pub label: String,

    /// The number of tokens scanned.
    pub tokens: usize,

    /// Did the joined stream reproduce the input?
    pub round_trip: bool,
}

impl VerifyArgs {
    /// Run the verify command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.scripts.build_tokenizer();

        let reports: Vec<VerifyReport> = if self.files.is_empty() {
            let bytes = self.input.read_bytes()?;
            vec![verify_bytes(&tokenizer, self.input.describe(), &bytes)?]
        } else {
            let paths = expand_paths(&self.files)?;
            let results: Vec<Result<VerifyReport, wordscanner::WordscannerError>> = paths
                .par_iter()
                .map(|path| {
                    let bytes = wordscanner::io::read_bytes(path)?;
                    verify_bytes(&tokenizer, path.to_string_lossy().into_owned(), &bytes)
                })
                .collect();
            results.into_iter().collect::<Result<_, _>>()?
        };

        let mut writer = self.output.open_writer()?;
        let mut failures = 0;
        for report in &reports {
            let status = if report.round_trip { "ok" } else { "MISMATCH" };
            writeln!(writer, "{status}\t{}\t{} tokens", report.label, report.tokens)?;
            if !report.round_trip {
                failures += 1;
            }
        }
        writer.flush()?;

        if failures > 0 {
            return Err(format!("{failures} of {} inputs failed the round trip", reports.len()).into());
        }
        Ok(())
    }
}

/// Scan `bytes` and check that joining reproduces them.
pub fn verify_bytes(
    tokenizer: &wordscanner::Tokenizer,
    label: String,
    bytes: &[u8],
) -> wordscanner::WSResult<VerifyReport> {
    let stream = tokenizer.parse(bytes)?;
    log_kind_counts(&label, &stream);

    let round_trip = stream.join().as_bytes() == bytes;
    if !round_trip {
        log::error!("{label}: joined tokens differ from the input");
    }

    Ok(VerifyReport {
        label,
        tokens: stream.len(),
        round_trip,
    })
}

#[cfg(test)]
mod tests {
    use wordscanner::{Tokenizer, WordscannerError};

    use super::*;

    #[test]
    fn test_verify_bytes() {
        let tokenizer = Tokenizer::default();

        let report = verify_bytes(
            &tokenizer,
            "mixed".to_string(),
            "ZoMg testΩ≈∂œ™£¢˜Ωπππ¬˜£™¡¢∞•ªº test< > & ; ?".as_bytes(),
        )
        .unwrap();
        assert!(report.round_trip);
        assert!(report.tokens > 0);

        let report = verify_bytes(&tokenizer, "empty".to_string(), b"").unwrap();
        assert_eq!(
            report,
            VerifyReport {
                label: "empty".to_string(),
                tokens: 0,
                round_trip: true,
            }
        );
    }

    #[test]
    fn test_verify_rejects_binary() {
        let err = verify_bytes(&Tokenizer::default(), "blob".to_string(), &[0xFF, 0xFE]).unwrap_err();
        assert!(matches!(err, WordscannerError::TypeError { .. }));
    }
}
