//! # File Reading
//!
//! The file collaborator behind [`Tokenizer::read_file`](crate::Tokenizer::read_file).
//!
//! Reading is kept apart from scanning: these functions only fetch bytes,
//! and the tokenizer decides whether those bytes are text.

use std::path::{Path, PathBuf};

use crate::{
    Tokenizer,
    errors::{WSResult, WordscannerError},
    tokens::TokenStream,
};

/// Read the full contents of a file.
///
/// ## Arguments
/// * `path` - the file to read.
///
/// ## Errors
/// [`WordscannerError::Read`] carrying the path and the underlying I/O error.
pub fn read_bytes<P>(path: P) -> WSResult<Vec<u8>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| WordscannerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {:?}", bytes.len(), path);
    Ok(bytes)
}

/// List the regular files directly inside `dir`, sorted by path.
///
/// ## Errors
/// [`WordscannerError::Read`] if the directory or one of its entries cannot be read.
pub fn list_files<P>(dir: P) -> WSResult<Vec<PathBuf>>
where
    P: AsRef<Path>,
{
    let dir = dir.as_ref();
    let read_err = |source: std::io::Error| WordscannerError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if entry.file_type().map_err(read_err)?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Read and scan every regular file directly inside `dir`.
///
/// Files are visited in path order; the first failure stops the walk.
///
/// ## Errors
/// * [`WordscannerError::Read`] if any file cannot be read.
/// * [`WordscannerError::TypeError`] if any file is not UTF-8 text.
pub fn read_dir(
    tokenizer: &Tokenizer,
    dir: impl AsRef<Path>,
) -> WSResult<Vec<(PathBuf, TokenStream<'static>)>> {
    list_files(dir)?
        .into_iter()
        .map(|path| {
            let stream = tokenizer.read_file(&path)?;
            Ok((path, stream))
        })
        .collect()
}
