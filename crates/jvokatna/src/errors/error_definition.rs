//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Lexicon (rafsi table) related errors.
///
/// The lexicon is loaded once at startup; all of these are fatal to the
/// caller because nothing can be resolved without the table.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LexiconError {
  /// The lexicon file could not be read.
  #[error("failed to read lexicon file: path={path:?}, error={source}")]
  FileRead {
    /// Path that was being read
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// The lexicon file was read but contained no rows.
  #[error("lexicon file contains no rows: path={path:?}")]
  Empty {
    /// Path of the empty file
    path: PathBuf,
  },
}

/// Unified error type.
///
/// APIs exposed outside this crate return this error;
/// use `JvokatnaResult<T>` = `Result<T, JvokatnaError>`.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum JvokatnaError {
  /// Lexicon related error
  #[error(transparent)]
  Lexicon(#[from] LexiconError),
}

/// Standard Result alias for the jvokatna crate
pub type JvokatnaResult<T> = Result<T, JvokatnaError>;
