use std::{io::Write, path::PathBuf};

use wordscanner::concurrency::ParallelRayonTokenizer;

use crate::{
    commands::{TokenFormat, log_kind_counts},
    input_output::{InputArgs, OutputArgs, expand_paths},
    scripts::ScriptArgs,
};

/// Args for the scan command.
#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    /// Input files or directories; when absent, `--input` (or stdin) is scanned.
    files: Vec<PathBuf>,

    /// Token output format.
    #[arg(long, value_enum, default_value_t = TokenFormat::Text)]
    format: TokenFormat,

    #[command(flatten)]
    scripts: ScriptArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl ScanArgs {
    /// Run the scan command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.scripts.build_tokenizer();
        let mut writer = self.output.open_writer()?;

        if self.files.is_empty() {
            let bytes = self.input.read_bytes()?;
            let stream = tokenizer.parse(&bytes)?;
            log_kind_counts(&self.input.describe(), &stream);
            self.format.write_stream(&mut writer, &stream)?;
        } else {
            let paths = expand_paths(&self.files)?;
            let streams = ParallelRayonTokenizer::new(tokenizer).read_files(&paths)?;
            for (path, stream) in paths.iter().zip(&streams) {
                log_kind_counts(&path.to_string_lossy(), stream);
                self.format.write_stream(&mut writer, stream)?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}
