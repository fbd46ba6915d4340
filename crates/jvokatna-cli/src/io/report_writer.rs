//! Output report writing.
//!
//! One line per input word, UTF-8, file fully rewritten each run. The plain
//! text format is `<word> = <space-joined roots>` with `∅` standing in when
//! no root was resolved; the JSON format writes one serialized expansion
//! object per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use jvokatna::models::Expansion;

use crate::config::{EMPTY_SET_SYMBOL, OutputFormat};
use crate::errors::CliError;

/// Formats one plain text report line.
pub fn format_text_line(expansion: &Expansion) -> String {
  if expansion.is_empty() {
    format!("{} = {}", expansion.word, EMPTY_SET_SYMBOL)
  } else {
    let roots: Vec<String> = expansion.roots.iter().map(ToString::to_string).collect();
    format!("{} = {}", expansion.word, roots.join(" "))
  }
}

/// Writes the report file, replacing any previous content.
///
/// # Errors
/// Returns `CliError::OutputWrite` when the file cannot be created or
/// written.
pub fn write_report(
  path: &Path,
  expansions: &[Expansion],
  format: OutputFormat,
) -> crate::errors::Result<()> {
  let write_err = |e: std::io::Error| CliError::output_write(path, e);

  // File::create truncates, so a rerun never leaves stale lines behind.
  let file = File::create(path).map_err(write_err)?;
  let mut writer = BufWriter::new(file);

  for expansion in expansions {
    let line = match format {
      OutputFormat::Text => format_text_line(expansion),
      OutputFormat::Json => serde_json::to_string(expansion)
        .map_err(|e| CliError::output_write(path, std::io::Error::other(e)))?,
    };
    writeln!(writer, "{line}").map_err(write_err)?;
  }

  writer.flush().map_err(write_err)?;
  info!(path = %path.display(), lines = expansions.len(), "report written");
  Ok(())
}
