//! Config loading from program arguments and environment variables

use std::path::PathBuf;
use std::str::FromStr;

use super::constants::{
  DEFAULT_FORMAT, DEFAULT_INPUT_PATH, DEFAULT_LEXICON_PATH, DEFAULT_OUTPUT_PATH,
};
use crate::errors::CliError;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  /// Plain text lines: `<word> = <space-joined roots>`
  Text,
  /// JSON Lines: one serialized expansion object per line
  Json,
}

impl FromStr for OutputFormat {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "text" => Ok(Self::Text),
      "json" => Ok(Self::Json),
      _ => Err(format!("Unknown format: {s}. Valid values: text, json")),
    }
  }
}

/// CLI configuration: the three resource paths plus the report format.
#[derive(Debug, Clone)]
pub struct Config {
  /// Path of the rafsi lexicon.
  pub lexicon_path: PathBuf,
  /// Path of the input word list.
  pub input_path: PathBuf,
  /// Path of the output report.
  pub output_path: PathBuf,
  /// Report format.
  pub format: OutputFormat,
}

impl Config {
  /// Loads configuration from environment variables, with positional
  /// program arguments `[lexicon] [input] [output]` taking precedence.
  ///
  /// Environment variables: `JVOKATNA_LEXICON`, `JVOKATNA_INPUT`,
  /// `JVOKATNA_OUTPUT`, `JVOKATNA_FORMAT`.
  ///
  /// # Errors
  /// Returns an error if `JVOKATNA_FORMAT` holds an unknown format name.
  pub fn load<I>(mut args: I) -> crate::errors::Result<Self>
  where
    I: Iterator<Item = String>,
  {
    let path = |arg: Option<String>, var: &str, default: &str| {
      PathBuf::from(
        arg.or_else(|| std::env::var(var).ok()).unwrap_or_else(|| default.to_string()),
      )
    };

    let lexicon_path = path(args.next(), "JVOKATNA_LEXICON", DEFAULT_LEXICON_PATH);
    let input_path = path(args.next(), "JVOKATNA_INPUT", DEFAULT_INPUT_PATH);
    let output_path = path(args.next(), "JVOKATNA_OUTPUT", DEFAULT_OUTPUT_PATH);

    let format_str =
      std::env::var("JVOKATNA_FORMAT").unwrap_or_else(|_| DEFAULT_FORMAT.to_string());
    let format = OutputFormat::from_str(&format_str).map_err(CliError::config)?;

    Ok(Self {
      lexicon_path,
      input_path,
      output_path,
      format,
    })
  }

  /// Loads configuration from the process arguments (skipping the program
  /// name) and the environment.
  ///
  /// # Errors
  /// See [`Config::load`].
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::load(std::env::args().skip(1))
  }
}
