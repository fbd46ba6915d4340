//! Rafsi Lexicon Module
//!
//! Loads the semicolon-delimited rafsi table and answers lookups against it.
//! One row per gismu: `gismu;ccv;cvc;cvv`. Trailing fields may be missing or
//! empty, and a missing column never matches. The table is loaded once and
//! read-only afterwards; lookups always return the first matching row.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::errors::error_definition::LexiconError;
use crate::models::RafsiKind;

/// One row of the rafsi table: a gismu plus its short rafsi forms by column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconRow {
  /// Column 0: the five-letter gismu itself.
  pub gismu: String,

  /// Column 1: CCV form, if the gismu has one.
  pub ccv: Option<String>,

  /// Column 2: CVC form, if the gismu has one.
  pub cvc: Option<String>,

  /// Column 3: CVV (or CV'V) form, if the gismu has one.
  pub cvv: Option<String>,
}

impl LexiconRow {
  /// Returns the short-rafsi column for `kind`, or `None` when the kind has
  /// no column (gismu, four-letter and unmatched spans are not column data).
  fn short_form(&self, kind: RafsiKind) -> Option<&str> {
    match kind {
      RafsiKind::Ccv => self.ccv.as_deref(),
      RafsiKind::Cvc => self.cvc.as_deref(),
      RafsiKind::Cvv => self.cvv.as_deref(),
      RafsiKind::Gismu | RafsiKind::FourLetter | RafsiKind::Unmatched => None,
    }
  }
}

/// The rafsi table, held in row order for the lifetime of the program.
///
/// Row order matters: duplicate forms across rows are not checked, and every
/// lookup returns the first row that matches.
#[derive(Debug, Clone)]
pub struct RafsiLexicon {
  /// Table rows in file order.
  rows: Vec<LexiconRow>,
}

impl RafsiLexicon {
  /// Loads the lexicon from a semicolon-delimited file.
  ///
  /// # Errors
  /// - `LexiconError::FileRead` when the file cannot be read
  /// - `LexiconError::Empty` when the file holds no rows
  pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| LexiconError::FileRead {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    let lexicon = Self::parse(&text);
    if lexicon.is_empty() {
      return Err(LexiconError::Empty {
        path: PathBuf::from(path),
      });
    }

    info!(path = %path.display(), rows = lexicon.len(), "rafsi lexicon loaded");
    Ok(lexicon)
  }

  /// Parses lexicon text. Blank lines are skipped; no further validation is
  /// performed (the table format is trusted, per the loader contract).
  pub fn parse(text: &str) -> Self {
    let rows = text
      .lines()
      .filter(|line| !line.trim().is_empty())
      .map(parse_row)
      .collect();
    Self { rows }
  }

  /// Builds a lexicon directly from rows (mainly for tests).
  pub fn from_rows(rows: Vec<LexiconRow>) -> Self {
    Self { rows }
  }

  /// Number of rows in the table.
  pub fn len(&self) -> usize {
    self.rows.len()
  }

  /// Returns true when the table has no rows.
  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  /// Read-only view of the rows, in file order.
  pub fn rows(&self) -> &[LexiconRow] {
    &self.rows
  }

  /// Looks up a short rafsi (CCV / CVC / CVV) in the column that belongs to
  /// its shape. Returns the gismu of the first row whose column matches.
  pub fn lookup_short(&self, kind: RafsiKind, rafsi: &str) -> Option<&str> {
    self
      .rows
      .iter()
      .find(|row| row.short_form(kind) == Some(rafsi))
      .map(|row| row.gismu.as_str())
  }

  /// Looks up a four-letter rafsi: the first row whose gismu starts with the
  /// given four letters wins.
  pub fn lookup_four_letter(&self, rafsi: &str) -> Option<&str> {
    self
      .rows
      .iter()
      .find(|row| row.gismu.starts_with(rafsi))
      .map(|row| row.gismu.as_str())
  }
}

/// Splits one line into a row. Empty fields become `None` columns.
fn parse_row(line: &str) -> LexiconRow {
  let mut fields = line.split(';');

  let gismu = fields.next().unwrap_or_default().to_string();
  let column = |value: Option<&str>| value.filter(|s| !s.is_empty()).map(str::to_string);

  let ccv = column(fields.next());
  let cvc = column(fields.next());
  let cvv = column(fields.next());

  LexiconRow {
    gismu,
    ccv,
    cvc,
    cvv,
  }
}
