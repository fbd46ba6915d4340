//! shapes module
pub mod shape_rules;

/// Re-export
pub use shape_rules::{
  CONSONANTS, DIPHTHONGS, GLOTTAL_STOP, HYPHEN_Y, VOWELS, is_consonant, is_vowel, matches_ccv,
  matches_cvc, matches_cvv_diphthong, matches_cvv_glottal, matches_four_letter, matches_gismu,
};
