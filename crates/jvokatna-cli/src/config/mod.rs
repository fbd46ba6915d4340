//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_FORMAT, DEFAULT_INPUT_PATH, DEFAULT_LEXICON_PATH, DEFAULT_OUTPUT_PATH, EMPTY_SET_SYMBOL,
};
pub use env::{Config, OutputFormat};
