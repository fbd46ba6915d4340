//! Data Model Definition

use std::fmt;

use serde::Serialize;

/// Shape class of one affix cut out of a lujvo.
///
/// The order of variants mirrors the matching priority of the segmenter,
/// except `Cvv` which covers both spellings of the CVV shape (diphthong and
/// glottal stop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RafsiKind {
  /// A whole five-letter gismu. Terminal: nothing follows it in a lujvo.
  Gismu,

  /// Four-letter rafsi: a gismu with its final vowel dropped.
  FourLetter,

  /// Short rafsi of shape CCV.
  Ccv,

  /// Short rafsi of shape CVC.
  Cvc,

  /// Short rafsi of shape CVV or CV'V.
  Cvv,

  /// A trailing span no shape matched.
  Unmatched,
}

/// One affix cut out of the input word.
///
/// `text` borrows straight from the word being segmented, so a `Rafsi` is a
/// cheap tagged span. Hyphen letters absorbed while scanning (`r`, `n`, `y`)
/// are consumed from the word but are never part of `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rafsi<'a> {
  /// Shape class this span matched.
  pub kind: RafsiKind,

  /// The matched letters, exactly as written in the word.
  pub text: &'a str,
}

impl<'a> Rafsi<'a> {
  /// Constructor for Rafsi
  pub fn new(kind: RafsiKind, text: &'a str) -> Self {
    Self { kind, text }
  }
}

/// Result of resolving one rafsi against the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RootWord {
  /// Resolved to a gismu.
  Known(String),

  /// No lexicon row carries this rafsi; the original text is kept so the
  /// report never drops information.
  Unknown(String),
}

impl RootWord {
  /// Returns true for a resolved gismu.
  pub fn is_known(&self) -> bool {
    matches!(self, RootWord::Known(_))
  }
}

/// Text form of a root word as it appears in a report line.
///
/// An unresolved rafsi is rendered in angle brackets, e.g. `<sel>`.
impl fmt::Display for RootWord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RootWord::Known(gismu) => write!(f, "{gismu}"),
      RootWord::Unknown(rafsi) => write!(f, "<{rafsi}>"),
    }
  }
}

/// Full expansion of one input word: the word plus its resolved roots,
/// in rafsi order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expansion {
  /// The input word as written.
  pub word: String,

  /// Resolved root words in left-to-right rafsi order. Empty when the word
  /// could not be decomposed at all.
  pub roots: Vec<RootWord>,
}

impl Expansion {
  /// Constructor for Expansion
  pub fn new(word: impl Into<String>, roots: Vec<RootWord>) -> Self {
    Self {
      word: word.into(),
      roots,
    }
  }

  /// Returns true when no root was resolved for this word.
  pub fn is_empty(&self) -> bool {
    self.roots.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn root_word_display() {
    assert_eq!(RootWord::Known("gerku".to_string()).to_string(), "gerku");
    assert_eq!(RootWord::Unknown("sel".to_string()).to_string(), "<sel>");
  }

  #[test]
  fn root_word_is_known() {
    assert!(RootWord::Known("gerku".to_string()).is_known());
    assert!(!RootWord::Unknown("sel".to_string()).is_known());
  }

  #[test]
  fn rafsi_is_a_borrowed_span() {
    let word = String::from("gerzda");
    let rafsi = Rafsi::new(RafsiKind::Cvc, &word[..3]);
    assert_eq!(rafsi.text, "ger");
    assert_eq!(rafsi.kind, RafsiKind::Cvc);
  }

  #[test]
  fn expansion_is_empty() {
    assert!(Expansion::new("kla", vec![]).is_empty());
    assert!(!Expansion::new("gerzda", vec![RootWord::Known("gerku".to_string())]).is_empty());
  }

  #[test]
  fn expansion_serializes_to_json() {
    let expansion = Expansion::new(
      "gerzda",
      vec![
        RootWord::Known("gerku".to_string()),
        RootWord::Unknown("zda".to_string()),
      ],
    );

    let value = serde_json::to_value(&expansion).unwrap();
    assert_eq!(
      value,
      json!({
        "word": "gerzda",
        "roots": [{"known": "gerku"}, {"unknown": "zda"}],
      })
    );
  }

  #[test]
  fn rafsi_kind_serializes_kebab_case() {
    let value = serde_json::to_value(RafsiKind::FourLetter).unwrap();
    assert_eq!(value, json!("four-letter"));
  }
}
