//! Input word list reading and tokenization.
//!
//! The word list is free text: words are separated by any run of commas,
//! semicolons or whitespace (newlines included). Empty tokens are skipped
//! and produce no output line.

use std::path::Path;

use tracing::info;

use crate::errors::CliError;

/// Splits free text into word tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
  text
    .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
    .filter(|token| !token.is_empty())
    .collect()
}

/// Reads and tokenizes the word list file.
///
/// # Errors
/// Returns `CliError::InputRead` when the file cannot be read.
pub fn read_words(path: &Path) -> crate::errors::Result<Vec<String>> {
  let text =
    std::fs::read_to_string(path).map_err(|e| CliError::input_read(path, e))?;

  let words: Vec<String> = tokenize(&text).into_iter().map(str::to_string).collect();
  info!(path = %path.display(), words = words.len(), "word list read");
  Ok(words)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;
  use tempfile::NamedTempFile;

  #[test]
  fn tokenize_splits_on_all_separators() {
    assert_eq!(
      tokenize("gerzda,xagmau;soirsai zdanydji\npa'urzda"),
      vec!["gerzda", "xagmau", "soirsai", "zdanydji", "pa'urzda"]
    );
  }

  #[test]
  fn tokenize_collapses_separator_runs() {
    assert_eq!(tokenize("gerzda,, ;\r\n\t xagmau"), vec!["gerzda", "xagmau"]);
  }

  #[test]
  fn tokenize_skips_empty_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \n\t ,;, ").is_empty());
  }

  #[test]
  fn read_words_loads_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"gerzda xagmau\nsoirsai\n").unwrap();

    let words = read_words(file.path()).unwrap();
    assert_eq!(words, vec!["gerzda", "xagmau", "soirsai"]);
  }

  #[test]
  fn read_words_fails_on_missing_file() {
    let err = read_words(Path::new("no-such-words.txt")).unwrap_err();
    assert_eq!(err.code(), "input_read_error");
  }
}
