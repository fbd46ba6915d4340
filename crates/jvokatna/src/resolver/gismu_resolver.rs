//! Maps segmented rafsi back to their gismu.
//!
//! Each rafsi is resolved against the lexicon by its shape: short rafsi
//! through their shape's column, four-letter rafsi by gismu prefix, and a
//! whole gismu stands for itself without a lookup. A rafsi no row carries
//! becomes an explicit [`RootWord::Unknown`] so nothing is silently dropped.
//! Unmatched spans contribute no root at all.

use tracing::debug;

use crate::lexicon::RafsiLexicon;
use crate::models::{Rafsi, RafsiKind, RootWord};

/// Resolves a rafsi sequence to root words, in order.
///
/// The lexicon is only read, so resolving the same sequence twice yields
/// identical results. The output has one entry per rafsi, minus the
/// unmatched spans.
pub fn resolve(rafsi: &[Rafsi<'_>], lexicon: &RafsiLexicon) -> Vec<RootWord> {
  let mut roots = Vec::with_capacity(rafsi.len());

  for r in rafsi {
    let gismu = match r.kind {
      // A gismu already is a root word; no lookup.
      RafsiKind::Gismu => Some(r.text),
      RafsiKind::FourLetter => lexicon.lookup_four_letter(r.text),
      RafsiKind::Ccv | RafsiKind::Cvc | RafsiKind::Cvv => lexicon.lookup_short(r.kind, r.text),
      // An unmatched span has no lexicon column and no root.
      RafsiKind::Unmatched => continue,
    };

    match gismu {
      Some(gismu) => roots.push(RootWord::Known(gismu.to_string())),
      None => {
        debug!(kind = ?r.kind, text = r.text, "no lexicon row for rafsi");
        roots.push(RootWord::Unknown(r.text.to_string()));
      }
    }
  }

  roots
}
