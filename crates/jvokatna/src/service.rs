// crates/jvokatna/src/service.rs

//! JvokatnaService: the integrated facade of the jvokatna crate.
//!
//! - lexicon management (RafsiLexicon)
//! - segmentation (segmenter)
//! - resolution (resolver)
//!
//! Callers such as the CLI adapter only need to know this struct.
//!
//! The lexicon is held behind an `Arc` and never mutated after load, so a
//! service (or a clone of its lexicon handle) can be shared across worker
//! threads without locking; each word is processed independently.

use std::sync::Arc;

use crate::errors::error_definition::JvokatnaResult;
use crate::lexicon::RafsiLexicon;
use crate::models::{Expansion, Rafsi};
use crate::resolver;
use crate::segmenter;

/// Facade over the lujvo decomposition pipeline.
#[derive(Debug, Clone)]
pub struct JvokatnaService {
  /// The loaded rafsi table, shared read-only.
  lexicon: Arc<RafsiLexicon>,
}

impl JvokatnaService {
  /// Initialization: loads the rafsi lexicon from a file.
  ///
  /// # Errors
  /// - lexicon file missing or unreadable
  /// - lexicon file contains no rows
  pub fn init<P: AsRef<std::path::Path>>(lexicon_path: P) -> JvokatnaResult<Self> {
    let lexicon = RafsiLexicon::from_path(lexicon_path)?;
    Ok(Self::from_lexicon(lexicon))
  }

  /// Builds a service around an already loaded lexicon.
  pub fn from_lexicon(lexicon: RafsiLexicon) -> Self {
    Self {
      lexicon: Arc::new(lexicon),
    }
  }

  /// Splits a word into rafsi spans without resolving them.
  pub fn segment<'w>(&self, word: &'w str) -> Vec<Rafsi<'w>> {
    segmenter::segment(word)
  }

  /// Decomposes a word and resolves every rafsi to its root word.
  pub fn expand(&self, word: &str) -> Expansion {
    let rafsi = segmenter::segment(word);
    let roots = resolver::resolve(&rafsi, &self.lexicon);
    Expansion::new(word, roots)
  }

  // ===== Accessors =====

  /// Returns the loaded lexicon.
  pub fn lexicon(&self) -> &RafsiLexicon {
    &self.lexicon
  }

  /// Returns a shared handle to the lexicon for parallel callers.
  pub fn lexicon_handle(&self) -> Arc<RafsiLexicon> {
    Arc::clone(&self.lexicon)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{RafsiKind, RootWord};
  use std::io::Write;
  use tempfile::NamedTempFile;

  // ─── Test Helpers ─────────────────────────────────────────────────────────

  fn create_service() -> JvokatnaService {
    JvokatnaService::from_lexicon(RafsiLexicon::parse(
      "\
gerku;;ger;
zdani;zda;;
xamgu;;xag;xau
zmadu;zma;;mau
sonci;;;soi
sanmi;;;sai
",
    ))
  }

  fn known(gismu: &str) -> RootWord {
    RootWord::Known(gismu.to_string())
  }

  // ─── Initialization Tests ─────────────────────────────────────────────────

  #[test]
  fn init_loads_lexicon_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"gerku;;ger;\n").unwrap();

    let service = JvokatnaService::init(file.path()).unwrap();
    assert_eq!(service.lexicon().len(), 1);
  }

  #[test]
  fn init_fails_on_missing_file() {
    assert!(JvokatnaService::init("no-such-file.csv").is_err());
  }

  // ─── Expansion Tests ──────────────────────────────────────────────────────

  #[test]
  fn expand_resolves_a_lujvo() {
    let service = create_service();
    let expansion = service.expand("gerzda");
    assert_eq!(expansion.word, "gerzda");
    assert_eq!(expansion.roots, vec![known("gerku"), known("zdani")]);
  }

  #[test]
  fn expand_bare_gismu_round_trips() {
    let service = create_service();
    let expansion = service.expand("patfu");
    assert_eq!(expansion.roots, vec![known("patfu")]);
  }

  #[test]
  fn expand_short_word_yields_no_roots() {
    let service = create_service();
    assert!(service.expand("kla").is_empty());
  }

  #[test]
  fn expand_keeps_unknown_rafsi() {
    let service = create_service();
    let expansion = service.expand("selzda");
    assert_eq!(
      expansion.roots,
      vec![RootWord::Unknown("sel".to_string()), known("zdani")]
    );
  }

  #[test]
  fn expand_is_idempotent() {
    let service = create_service();
    assert_eq!(service.expand("soirsai"), service.expand("soirsai"));
  }

  // ─── Segment Accessor Tests ───────────────────────────────────────────────

  #[test]
  fn segment_borrows_from_the_input() {
    let service = create_service();
    let word = String::from("xagmau");
    let rafsi = service.segment(&word);
    assert_eq!(rafsi.len(), 2);
    assert_eq!(rafsi[0].kind, RafsiKind::Cvc);
    assert_eq!(rafsi[0].text, "xag");
  }

  // ─── Sharing Tests ────────────────────────────────────────────────────────

  #[test]
  fn lexicon_handle_shares_the_table() {
    let service = create_service();
    let handle = service.lexicon_handle();
    assert_eq!(handle.len(), service.lexicon().len());
  }

  #[test]
  fn expansions_agree_across_threads() {
    let service = create_service();
    let expected = service.expand("soirsai");

    let workers: Vec<_> = (0..4)
      .map(|_| {
        let service = service.clone();
        std::thread::spawn(move || service.expand("soirsai"))
      })
      .collect();

    for worker in workers {
      assert_eq!(worker.join().unwrap(), expected);
    }
  }
}
