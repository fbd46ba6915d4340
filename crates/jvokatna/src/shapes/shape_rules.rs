//! Phonotactic shape predicates.
//!
//! Each predicate tests whether the leading bytes of a word match one fixed
//! rafsi shape. The predicates are stateless, look only at the bytes the
//! shape itself needs, and never claim more bytes than the slice holds.
//!
//! Lojban is written in plain ASCII, so all matching is byte-level.

/// The seventeen Lojban consonants.
pub const CONSONANTS: &[u8] = b"bcdfgjklmnprstvxz";

/// The five Lojban vowels.
pub const VOWELS: &[u8] = b"aeiou";

/// The four diphthongs that may close a CVV rafsi.
pub const DIPHTHONGS: [[u8; 2]; 4] = [*b"ai", *b"au", *b"ei", *b"oi"];

/// The glottal stop, written as an apostrophe.
pub const GLOTTAL_STOP: u8 = b'\'';

/// The hyphen letter "y" that glues certain rafsi to the rest of the word.
pub const HYPHEN_Y: u8 = b'y';

/// Returns true if `b` is a Lojban consonant.
pub fn is_consonant(b: u8) -> bool {
  CONSONANTS.contains(&b)
}

/// Returns true if `b` is a Lojban vowel.
pub fn is_vowel(b: u8) -> bool {
  VOWELS.contains(&b)
}

/// Returns true if `pair` is one of the four diphthongs.
fn is_diphthong(pair: [u8; 2]) -> bool {
  DIPHTHONGS.contains(&pair)
}

/// CVV rafsi written with a diphthong, e.g. `sai`. Matches three letters.
pub fn matches_cvv_diphthong(s: &[u8]) -> bool {
  s.len() >= 3 && is_consonant(s[0]) && is_diphthong([s[1], s[2]])
}

/// CVV rafsi written with a glottal stop, e.g. `pa'u`. Matches four letters.
pub fn matches_cvv_glottal(s: &[u8]) -> bool {
  s.len() >= 4 && is_consonant(s[0]) && is_vowel(s[1]) && s[2] == GLOTTAL_STOP && is_vowel(s[3])
}

/// Four-letter rafsi: a gismu with its final vowel dropped, e.g. `zdan`.
///
/// The first four letters follow the gismu consonant/vowel skeleton
/// (CCVC or CVCC) and the match must sit at the end of the word or be
/// followed by the `y` hyphen that fills the dropped-vowel slot.
pub fn matches_four_letter(s: &[u8]) -> bool {
  s.len() >= 4
    && is_consonant(s[0])
    && ((is_consonant(s[1]) && is_vowel(s[2])) || (is_vowel(s[1]) && is_consonant(s[2])))
    && is_consonant(s[3])
    && (s.len() == 4 || s[4] == HYPHEN_Y)
}

/// Whole five-letter gismu, e.g. `zdani`. Matches only an exact remainder:
/// a gismu always ends the word it appears in.
pub fn matches_gismu(s: &[u8]) -> bool {
  s.len() == 5
    && is_consonant(s[0])
    && ((is_consonant(s[1]) && is_vowel(s[2])) || (is_vowel(s[1]) && is_consonant(s[2])))
    && is_consonant(s[3])
    && is_vowel(s[4])
}

/// Short CCV rafsi, e.g. `zda`. Matches three letters.
pub fn matches_ccv(s: &[u8]) -> bool {
  s.len() >= 3 && is_consonant(s[0]) && is_consonant(s[1]) && is_vowel(s[2])
}

/// Short CVC rafsi, e.g. `ger`. Matches three letters.
pub fn matches_cvc(s: &[u8]) -> bool {
  s.len() >= 3 && is_consonant(s[0]) && is_vowel(s[1]) && is_consonant(s[2])
}

#[cfg(test)]
mod tests {
  use super::*;

  // ─── Alphabet Tests ──────────────────────────────────────────────────────

  #[test]
  fn alphabet_sizes() {
    assert_eq!(CONSONANTS.len(), 17);
    assert_eq!(VOWELS.len(), 5);
    assert_eq!(DIPHTHONGS.len(), 4);
  }

  #[test]
  fn consonant_membership() {
    assert!(is_consonant(b'b'));
    assert!(is_consonant(b'z'));
    // "h", "q", "w" are not Lojban consonants
    assert!(!is_consonant(b'h'));
    assert!(!is_consonant(b'q'));
    assert!(!is_consonant(b'w'));
    // vowels and the hyphen letter are not consonants
    assert!(!is_consonant(b'a'));
    assert!(!is_consonant(b'y'));
  }

  #[test]
  fn vowel_membership() {
    for v in b"aeiou" {
      assert!(is_vowel(*v));
    }
    assert!(!is_vowel(b'y'));
    assert!(!is_vowel(b'\''));
  }

  // ─── CVV Shape Tests ─────────────────────────────────────────────────────

  #[test]
  fn cvv_diphthong_matches() {
    assert!(matches_cvv_diphthong(b"sai"));
    assert!(matches_cvv_diphthong(b"mau"));
    assert!(matches_cvv_diphthong(b"soirsai")); // only the prefix is tested
  }

  #[test]
  fn cvv_diphthong_rejects() {
    assert!(!matches_cvv_diphthong(b"sa")); // too short
    assert!(!matches_cvv_diphthong(b"aai")); // vowel onset
    assert!(!matches_cvv_diphthong(b"sae")); // "ae" is not a diphthong
  }

  #[test]
  fn cvv_glottal_matches() {
    assert!(matches_cvv_glottal(b"pa'u"));
    assert!(matches_cvv_glottal(b"gu'e"));
    assert!(matches_cvv_glottal(b"pa'urzda"));
  }

  #[test]
  fn cvv_glottal_rejects() {
    assert!(!matches_cvv_glottal(b"pa'")); // too short
    assert!(!matches_cvv_glottal(b"paku")); // no glottal stop
    assert!(!matches_cvv_glottal(b"p'au")); // stop in the wrong slot
  }

  // ─── Four-Letter / Gismu Shape Tests ─────────────────────────────────────

  #[test]
  fn four_letter_matches_at_end_of_word() {
    assert!(matches_four_letter(b"zdan")); // CCVC
    assert!(matches_four_letter(b"bang")); // CVCC
  }

  #[test]
  fn four_letter_matches_before_hyphen() {
    assert!(matches_four_letter(b"zdanydji"));
    assert!(matches_four_letter(b"bangygu'e"));
  }

  #[test]
  fn four_letter_rejects_without_hyphen() {
    // a fifth letter other than "y" means this is not a four-letter rafsi
    assert!(!matches_four_letter(b"zdani"));
    assert!(!matches_four_letter(b"banga"));
  }

  #[test]
  fn four_letter_rejects_bad_skeleton() {
    assert!(!matches_four_letter(b"zda")); // too short
    assert!(!matches_four_letter(b"aany")); // vowel onset
    assert!(!matches_four_letter(b"zaan")); // VV core
  }

  #[test]
  fn gismu_matches_exact_five() {
    assert!(matches_gismu(b"zdani")); // CCVCV
    assert!(matches_gismu(b"gerku")); // CVCCV
    assert!(matches_gismu(b"patfu"));
  }

  #[test]
  fn gismu_rejects_wrong_length() {
    assert!(!matches_gismu(b"zdan"));
    assert!(!matches_gismu(b"zdanii"));
    // a gismu prefix of a longer word is not a terminal match
    assert!(!matches_gismu(b"zdanizda"));
  }

  #[test]
  fn gismu_rejects_bad_skeleton() {
    assert!(!matches_gismu(b"azdni")); // vowel onset
    assert!(!matches_gismu(b"zdain")); // consonant must sit in slot 3
    assert!(!matches_gismu(b"zdanz")); // final letter must be a vowel
  }

  // ─── CCV / CVC Shape Tests ───────────────────────────────────────────────

  #[test]
  fn ccv_matches() {
    assert!(matches_ccv(b"zda"));
    assert!(matches_ccv(b"dji"));
    assert!(matches_ccv(b"zdazda"));
  }

  #[test]
  fn ccv_rejects() {
    assert!(!matches_ccv(b"zd"));
    assert!(!matches_ccv(b"zad"));
    assert!(!matches_ccv(b"ada"));
  }

  #[test]
  fn cvc_matches() {
    assert!(matches_cvc(b"ger"));
    assert!(matches_cvc(b"xag"));
    assert!(matches_cvc(b"gerzda"));
  }

  #[test]
  fn cvc_rejects() {
    assert!(!matches_cvc(b"ge"));
    assert!(!matches_cvc(b"gre"));
    assert!(!matches_cvc(b"gey")); // "y" is not a consonant
  }
}
