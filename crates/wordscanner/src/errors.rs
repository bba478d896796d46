//! # Error Types

use crate::alloc::string::String;

/// Errors from wordscanner operations.
#[derive(Debug, thiserror::Error)]
pub enum WordscannerError {
    /// The input is not text-shaped.
    ///
    /// Raised for inputs which are neither a string nor a byte buffer,
    /// and for byte buffers which are not valid UTF-8.
    #[error("type error: {reason}")]
    TypeError {
        /// Why the input was rejected.
        reason: String,
    },

    /// The file collaborator could not read the requested path.
    #[cfg(feature = "std")]
    #[error("failed to read {path:?}: {source}")]
    Read {
        /// The path which was requested.
        path: std::path::PathBuf,

        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A token index fell outside the stream.
    #[error("token index {index} out of range for stream of {len} tokens")]
    TokenOutOfRange {
        /// The requested index.
        index: usize,

        /// The stream length.
        len: usize,
    },
}

impl WordscannerError {
    /// Build a [`WordscannerError::TypeError`].
    pub fn type_error<S: Into<String>>(reason: S) -> Self {
        Self::TypeError {
            reason: reason.into(),
        }
    }
}

/// Result type for wordscanner operations.
pub type WSResult<T> = core::result::Result<T, WordscannerError>;
