//! jvokatna lujvo decomposition library
//!
//! Splits Lojban compound words (lujvo) into their constituent affixes
//! (rafsi) and resolves each affix to its five-letter root word (gismu).

/// Errors module - defines JvokatnaError, JvokatnaResult and friends
pub mod errors;

/// Lexicon module - loads and queries the rafsi table
pub mod lexicon;

/// Data model module - defines Rafsi, RafsiKind, RootWord, Expansion
pub mod models;

/// Resolver module - maps segmented rafsi back to gismu
pub mod resolver;

/// Segmenter module - greedy left-to-right lujvo scanner
pub mod segmenter;

/// Service module - JvokatnaService, the top-level facade
pub mod service;

/// Shapes module - the phonotactic shape predicates
pub mod shapes;

/// Re-exports
pub use errors::{JvokatnaError, JvokatnaResult};
pub use lexicon::RafsiLexicon;
pub use models::{Expansion, Rafsi, RafsiKind, RootWord};
pub use service::JvokatnaService;
