//! Greedy left-to-right lujvo segmenter.
//!
//! Repeatedly classifies the front of the remaining word against the rafsi
//! shapes, in fixed priority order: CVV (diphthong or glottal spelling),
//! four-letter, whole gismu, CCV, CVC. The first shape that matches wins and
//! its letters are consumed; there is no backtracking. A whole gismu ends
//! the scan, and a remainder no shape matches becomes one trailing
//! [`RafsiKind::Unmatched`] span.
//!
//! Hyphen letters are consumed without being recorded: `r` before a
//! consonant (or `n` before `r`) after a CVV rafsi, and the `y` that fills
//! the dropped-vowel slot of a four-letter rafsi or follows a CVC rafsi.

use tracing::debug;

use crate::models::{Rafsi, RafsiKind};
use crate::shapes;

/// Minimum word length for lujvo decomposition. Shorter words are not lujvo.
pub const MIN_LUJVO_LEN: usize = 6;

/// Length of every gismu.
pub const GISMU_LEN: usize = 5;

/// Splits a word into rafsi spans.
///
/// Returns an empty vector for words too short to be a lujvo, with one
/// exception: a word that is exactly a five-letter gismu decomposes to a
/// single terminal [`RafsiKind::Gismu`] span, so a bare root word expands to
/// itself.
///
/// The concatenation of the returned spans (plus any silently consumed
/// hyphen letters) is always a prefix of `word`, and the scan consumes at
/// least one letter per emitted span, so it terminates within
/// `word.len()` iterations.
pub fn segment(word: &str) -> Vec<Rafsi<'_>> {
  if word.len() < MIN_LUJVO_LEN {
    if shapes::matches_gismu(word.as_bytes()) {
      debug!(word, "bare gismu, no decomposition needed");
      return vec![Rafsi::new(RafsiKind::Gismu, word)];
    }
    debug!(word, len = word.len(), "word too short to be a lujvo");
    return Vec::new();
  }

  let mut rafsi = Vec::new();
  let mut rest = word;

  while !rest.is_empty() {
    let s = rest.as_bytes();
    let mut consumed = 0usize;

    if shapes::matches_cvv_diphthong(s) {
      consumed = 3;
    } else if shapes::matches_cvv_glottal(s) {
      consumed = 4;
    }

    if consumed != 0 {
      rafsi.push(Rafsi::new(RafsiKind::Cvv, &rest[..consumed]));
      // An "r" hyphen before a consonant (or "n" before "r") glues a CVV
      // rafsi to the next one; it is consumed but recorded nowhere.
      if s.len() > consumed + 1 {
        let (hyphen, after) = (s[consumed], s[consumed + 1]);
        if (hyphen == b'r' && shapes::is_consonant(after)) || (hyphen == b'n' && after == b'r') {
          consumed += 1;
        }
      }
    } else if shapes::matches_four_letter(s) {
      rafsi.push(Rafsi::new(RafsiKind::FourLetter, &rest[..4]));
      // Four letters plus the "y" hyphen slot. At the end of the word there
      // is no slot, so only the four letters are consumed.
      consumed = if s.len() == 4 { 4 } else { 5 };
    } else if shapes::matches_gismu(s) {
      rafsi.push(Rafsi::new(RafsiKind::Gismu, rest));
      // A gismu is always word-final: stop scanning.
      break;
    } else if shapes::matches_ccv(s) {
      rafsi.push(Rafsi::new(RafsiKind::Ccv, &rest[..3]));
      consumed = 3;
    } else if shapes::matches_cvc(s) {
      rafsi.push(Rafsi::new(RafsiKind::Cvc, &rest[..3]));
      // A "y" hyphen directly after a CVC rafsi belongs to the word, not to
      // the rafsi.
      consumed = if s.len() > 3 && s[3] == shapes::HYPHEN_Y { 4 } else { 3 };
    }

    if consumed == 0 {
      rafsi.push(Rafsi::new(RafsiKind::Unmatched, rest));
      break;
    }

    // The predicates only ever match letters that exist, so consumption can
    // never overrun the remainder; a failure here is a programming defect.
    debug_assert!(consumed <= rest.len(), "matcher consumed past end of word");
    rest = &rest[consumed..];
  }

  for r in &rafsi {
    debug!(kind = ?r.kind, text = r.text, "rafsi");
  }
  debug!(word, count = rafsi.len(), "segmentation finished");

  rafsi
}
