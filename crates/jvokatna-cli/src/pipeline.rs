// crates/jvokatna-cli/src/pipeline.rs

//! The expansion pipeline: load lexicon -> read words -> expand -> write.
//!
//! Words are expanded in input order and the report carries one line per
//! word in that same order. A missing lexicon or word list aborts the run
//! before anything is written.

use tracing::info;

use jvokatna::JvokatnaService;
use jvokatna::models::Expansion;

use crate::config::Config;
use crate::io::{read_words, write_report};

/// Runs the whole pipeline for one configuration.
///
/// # Errors
/// - lexicon missing, unreadable or empty
/// - word list unreadable
/// - report not writable
pub fn run(config: &Config) -> crate::errors::Result<()> {
  let service = JvokatnaService::init(&config.lexicon_path)?;
  info!(
    lexicon = %config.lexicon_path.display(),
    rows = service.lexicon().len(),
    "service initialized"
  );

  let words = read_words(&config.input_path)?;

  let expansions: Vec<Expansion> = words.iter().map(|word| service.expand(word)).collect();

  write_report(&config.output_path, &expansions, config.format)?;
  info!(words = expansions.len(), "expansion finished");
  Ok(())
}
