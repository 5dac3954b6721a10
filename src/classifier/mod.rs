//! Line filters that hide block comments and string literals from the checks.
//!
//! Both filters are heuristics over whole lines: a marker anywhere on a line
//! counts, and nesting is not tracked. Checks are calibrated against exactly
//! this behaviour, so it must not be tightened into a real lexer.

mod comment;
mod string;

pub use comment::CommentSkip;
pub use string::StringSkip;

use crate::source::SourceFile;

/// Drop blank lines and lines inside block comments.
pub fn skip_comments<'a, I>(lines: I) -> CommentSkip<I>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    CommentSkip::new(lines)
}

/// Drop lines that open, close, or sit inside a string literal.
pub fn skip_strings<'a, I>(lines: I) -> StringSkip<I>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    StringSkip::new(lines)
}

/// Lines of `file` outside comments and string literals.
pub fn code_lines(file: &SourceFile) -> impl Iterator<Item = (usize, &str)> {
    skip_strings(skip_comments(file.numbered_lines()))
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
