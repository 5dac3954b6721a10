//! Lexical vocabulary of the proof language as seen by the style checks.
//!
//! Every check matches these markers by plain substring or prefix tests;
//! nothing here is a tokenizer.

/// Opens a block comment (and, on a line of its own, the copyright header).
pub const BLOCK_COMMENT_OPEN: &str = "/-";

/// Closes a block comment.
pub const BLOCK_COMMENT_CLOSE: &str = "-/";

/// Opens the module docstring.
pub const MODULE_DOC_OPEN: &str = "/-!";

/// Starts a line comment.
pub const LINE_COMMENT: &str = "--";

pub const IMPORT_KEYWORD: &str = "import";

pub const QUOTE: &str = "\"";

pub const ESCAPED_QUOTE: &str = "\\\"";

/// Glyph that must not appear in source outside strings and comments.
pub const FORBIDDEN_CHAR: char = 'ᾰ';

/// Line prefixes that declare notation precedence.
pub const RESERVED_NOTATION_PREFIXES: [&str; 2] = ["reserve", "precedence"];

pub const SET_OPTION_DIRECTIVE: &str = "set_option";

/// Option prefixes that must not be committed: pretty printer, profiler, trace.
pub const FORBIDDEN_OPTION_PREFIXES: [&str; 3] = ["pp", "pr", "tr"];

/// Words that must all occur inside the copyright header.
pub const HEADER_REQUIRED_WORDS: [&str; 3] = ["Copyright", "Apache", "Author"];

/// Lines containing this marker are exempt from the length limit.
pub const URL_MARKER: &str = "http";

/// Splits a line into whitespace-delimited words.
pub fn words(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// First whitespace-delimited word of a line, if any.
#[must_use]
pub fn first_word(line: &str) -> Option<&str> {
    words(line).next()
}
