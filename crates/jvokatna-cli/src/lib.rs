//! jvokatna-cli crate
//!
//! Command line front end that expands a word list of lujvo into their
//! gismu using the jvokatna library.
//!
//! ## Resources
//! - rafsi lexicon: semicolon-delimited rows `gismu;ccv;cvc;cvv`
//! - input word list: free text, tokens split on commas, semicolons and
//!   whitespace
//! - output report: one line per word, rewritten on every run
//!
//! ## Usage Example
//! ```bash
//! jvokatna-cli rafsi_list.csv expand_lujvo_in.txt expand_lujvo_out.txt
//! ```
//! Paths may also come from `JVOKATNA_LEXICON`, `JVOKATNA_INPUT` and
//! `JVOKATNA_OUTPUT`; `JVOKATNA_FORMAT` switches between the plain text
//! report and JSON Lines.

pub mod config;
pub mod errors;
pub mod io;
pub mod pipeline;

pub use config::{Config, OutputFormat};
pub use errors::{CliError, CliErrorKind};
pub use pipeline::run;
