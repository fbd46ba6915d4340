//! CLI error definitions

use std::io;
use std::path::PathBuf;

use thiserror::Error;

// Error types of the jvokatna crate
use jvokatna::errors::JvokatnaError;

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
  /// Invalid configuration
  Config,
  /// The rafsi lexicon could not be loaded
  Lexicon,
  /// The input word list could not be read
  InputRead,
  /// The output report could not be written
  OutputWrite,
}

impl CliErrorKind {
  /// Returns the error code string
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Config => "config_error",
      Self::Lexicon => "lexicon_error",
      Self::InputRead => "input_read_error",
      Self::OutputWrite => "output_write_error",
    }
  }

  /// Returns the process exit code for this category.
  ///
  /// Configuration mistakes exit with 2 (usage error); failures against the
  /// resource files exit with 1.
  #[must_use]
  pub fn exit_code(&self) -> i32 {
    match self {
      Self::Config => 2,
      Self::Lexicon | Self::InputRead | Self::OutputWrite => 1,
    }
  }
}

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
  /// Invalid configuration
  #[error("invalid configuration: {0}")]
  Config(String),

  /// Lexicon load failure, forwarded from the jvokatna crate
  #[error("failed to load rafsi lexicon: {0}")]
  Lexicon(#[from] JvokatnaError),

  /// Input word list read failure
  #[error("failed to read word list: path={path:?}, error={source}")]
  InputRead {
    /// Path that was being read
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: io::Error,
  },

  /// Output report write failure
  #[error("failed to write report: path={path:?}, error={source}")]
  OutputWrite {
    /// Path that was being written
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: io::Error,
  },
}

impl CliError {
  /// Returns the error category
  #[must_use]
  pub fn kind(&self) -> CliErrorKind {
    match self {
      Self::Config(_) => CliErrorKind::Config,
      Self::Lexicon(_) => CliErrorKind::Lexicon,
      Self::InputRead { .. } => CliErrorKind::InputRead,
      Self::OutputWrite { .. } => CliErrorKind::OutputWrite,
    }
  }

  /// Returns the error code string
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Returns the process exit code
  #[must_use]
  pub fn exit_code(&self) -> i32 {
    self.kind().exit_code()
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }

  /// Creates an input read error
  #[must_use]
  pub fn input_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::InputRead {
      path: path.into(),
      source,
    }
  }

  /// Creates an output write error
  #[must_use]
  pub fn output_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::OutputWrite {
      path: path.into(),
      source,
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CliError>;
