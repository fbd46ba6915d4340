//! CLI configuration constants

/// Default path of the rafsi lexicon.
///
/// Semicolon-delimited rows of the form `gismu;ccv;cvc;cvv`, with missing
/// trailing columns permitted.
pub const DEFAULT_LEXICON_PATH: &str = "rafsi_list.csv";

/// Default path of the input word list.
pub const DEFAULT_INPUT_PATH: &str = "expand_lujvo_in.txt";

/// Default path of the output report.
///
/// The file is fully rewritten on every run; nothing is appended.
pub const DEFAULT_OUTPUT_PATH: &str = "expand_lujvo_out.txt";

/// Default report format name.
pub const DEFAULT_FORMAT: &str = "text";

/// Symbol written on the right-hand side of a report line when a word
/// resolved to no roots at all.
pub const EMPTY_SET_SYMBOL: &str = "∅";
