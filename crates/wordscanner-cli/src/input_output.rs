use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Read},
    path::PathBuf,
};

use wordscanner::io::list_files;

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }

    /// Read the whole input.
    pub fn read_bytes(&self) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let mut buf = Vec::new();
        self.open_reader()?.read_to_end(&mut buf)?;
        log::debug!("read {} bytes from {}", buf.len(), self.describe());
        Ok(buf)
    }

    /// A label for the input, for log and error messages.
    pub fn describe(&self) -> String {
        squash_standard_io(&self.input).unwrap_or_else(|| "<stdin>".to_string())
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn std::io::Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Expand input paths; directories contribute their regular files, in path order.
pub fn expand_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(list_files(path)?);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn test_squash_standard_io() {
        assert_eq!(squash_standard_io(&None), None);
        assert_eq!(squash_standard_io(&Some("-".to_string())), None);
        assert_eq!(
            squash_standard_io(&Some("a.txt".to_string())),
            Some("a.txt".to_string())
        );
    }

    #[test]
    fn test_read_bytes() {
        let dir = TempDir::new("wordscanner_cli").unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "test-1").unwrap();

        let input = InputArgs {
            input: Some(path.to_string_lossy().into_owned()),
        };
        assert_eq!(input.read_bytes().unwrap(), b"test-1");
        assert_eq!(input.describe(), path.to_string_lossy());
    }

    #[test]
    fn test_expand_paths() {
        let dir = TempDir::new("wordscanner_cli").unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        let single = PathBuf::from("single.txt");

        let files = expand_paths(&[single.clone(), dir.path().to_path_buf()]).unwrap();
        assert_eq!(
            files,
            vec![single, dir.path().join("a.txt"), dir.path().join("b.txt")]
        );
    }
}
