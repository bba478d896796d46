//! # Parallel Tokenizer

use std::{path::PathBuf, sync::Arc};

use rayon::prelude::*;

use crate::{Tokenizer, errors::WSResult, tokenizer::TextInput, tokens::TokenStream};

/// Batch-Level Parallel Tokenizer Wrapper.
///
/// Scans each batch element on the ``rayon`` pool; results keep batch order.
#[derive(Debug, Clone)]
pub struct ParallelRayonTokenizer {
    /// Inner tokenizer.
    pub inner: Arc<Tokenizer>,
}

impl ParallelRayonTokenizer {
    /// Create a new parallel tokenizer.
    ///
    /// ## Arguments
    /// * `inner` - The tokenizer to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonTokenizer` instance.
    pub fn new<T>(inner: T) -> Self
    where
        T: Into<Arc<Tokenizer>>,
    {
        Self {
            inner: inner.into(),
        }
    }

    /// Scan a batch of strings.
    pub fn tokenize_batch<'a>(
        &self,
        batch: &[&'a str],
    ) -> Vec<TokenStream<'a>> {
        batch
            .par_iter()
            .map(|&text| self.inner.tokenize(text))
            .collect()
    }

    /// Scan a batch of byte buffers.
    ///
    /// ## Errors
    /// The first [`WordscannerError::TypeError`](crate::WordscannerError::TypeError)
    /// in batch order, if any buffer is not UTF-8 text.
    pub fn parse_batch<'a>(
        &self,
        batch: &[&'a [u8]],
    ) -> WSResult<Vec<TokenStream<'a>>> {
        let results: Vec<WSResult<TokenStream<'a>>> = batch
            .par_iter()
            .map(|&bytes| self.inner.parse(TextInput::Bytes(bytes)))
            .collect();

        results.into_iter().collect()
    }

    /// Read and scan a batch of files.
    ///
    /// ## Errors
    /// The first read or type error, in batch order.
    pub fn read_files(
        &self,
        paths: &[PathBuf],
    ) -> WSResult<Vec<TokenStream<'static>>> {
        let results: Vec<WSResult<TokenStream<'static>>> = paths
            .par_iter()
            .map(|path| self.inner.read_file(path))
            .collect();

        results.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;
    use crate::{TokenizerOptions, WordscannerError};

    const SAMPLES: &[&str] = &[
        "test-1 test + 1",
        "ελληνικά γλώσσα",
        "русский язык",
        "",
        "عربي ,عربى\n",
    ];

    #[test]
    fn test_tokenize_batch() {
        let tokenizer = TokenizerOptions::default().build();
        let parallel = ParallelRayonTokenizer::new(tokenizer.clone());

        let streams = parallel.tokenize_batch(SAMPLES);
        assert_eq!(streams.len(), SAMPLES.len());
        for (text, stream) in SAMPLES.iter().zip(&streams) {
            assert_eq!(stream, &tokenizer.tokenize(text));
            assert_eq!(&stream.join(), text);
        }
    }

    #[test]
    fn test_parse_batch() {
        let parallel = ParallelRayonTokenizer::new(Tokenizer::default());

        let batch: Vec<&[u8]> = SAMPLES.iter().map(|s| s.as_bytes()).collect();
        let streams = parallel.parse_batch(&batch).unwrap();
        assert_eq!(streams[1].join(), SAMPLES[1]);

        let bad: Vec<&[u8]> = vec![b"ok".as_slice(), b"\xFF".as_slice(), b"fine".as_slice()];
        let err = parallel.parse_batch(&bad).unwrap_err();
        assert!(matches!(err, WordscannerError::TypeError { .. }));
    }

    #[test]
    fn test_read_files() {
        let dir = TempDir::new("wordscanner_rayon").unwrap();
        let paths: Vec<PathBuf> = SAMPLES
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let path = dir.path().join(format!("{idx}.txt"));
                std::fs::write(&path, text).unwrap();
                path
            })
            .collect();

        let parallel = ParallelRayonTokenizer::new(Tokenizer::default());
        let streams = parallel.read_files(&paths).unwrap();
        let joined: Vec<String> = streams.iter().map(TokenStream::join).collect();
        assert_eq!(joined, SAMPLES);

        let missing = vec![dir.path().join("missing.txt")];
        assert!(matches!(
            parallel.read_files(&missing).unwrap_err(),
            WordscannerError::Read { .. }
        ));
    }
}
