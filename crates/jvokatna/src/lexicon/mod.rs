//! lexicon module
pub mod rafsi_lexicon;

/// Re-export
pub use rafsi_lexicon::{LexiconRow, RafsiLexicon};
