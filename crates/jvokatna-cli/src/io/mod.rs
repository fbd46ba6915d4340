//! io module
pub mod report_writer;
pub mod word_list;

/// Re-export
pub use report_writer::{format_text_line, write_report};
pub use word_list::{read_words, tokenize};
