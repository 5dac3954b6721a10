use crate::syntax::{BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN, ESCAPED_QUOTE, QUOTE};

/// Iterator adapter that skips string literals.
///
/// A line with an odd number of unescaped quotes toggles the in-string state.
/// Any line containing a quote is dropped, as is every quote-free line while
/// inside a string. Comment markers are tracked separately so quotes inside a
/// block comment do not toggle anything; lines seen while in a comment are
/// passed through untouched.
pub struct StringSkip<I> {
    lines: I,
    in_string: bool,
    in_comment: bool,
}

impl<I> StringSkip<I> {
    #[must_use]
    pub const fn new(lines: I) -> Self {
        Self {
            lines,
            in_string: false,
            in_comment: false,
        }
    }
}

/// Quote count minus escaped-quote count; `\\"` is counted as escaped too.
fn unescaped_quotes(line: &str) -> (usize, usize) {
    let quotes = line.matches(QUOTE).count();
    let escaped = line.matches(ESCAPED_QUOTE).count();
    (quotes, quotes.saturating_sub(escaped))
}

impl<'a, I> Iterator for StringSkip<I>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        for (line_nr, line) in self.lines.by_ref() {
            // comment markers inside a string literal are text
            if !self.in_string {
                if line.contains(BLOCK_COMMENT_OPEN) {
                    self.in_comment = true;
                }
                if line.contains(BLOCK_COMMENT_CLOSE) {
                    self.in_comment = false;
                }
            }
            if !self.in_comment {
                let (quotes, unescaped) = unescaped_quotes(line);
                if unescaped % 2 == 1 {
                    self.in_string = !self.in_string;
                }
                if quotes > 0 || self.in_string {
                    continue;
                }
            }
            return Some((line_nr, line));
        }
        None
    }
}
