use crate::syntax::{BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN};

/// Iterator adapter that skips blank lines and block comments.
///
/// The line carrying the close marker is always dropped, including any code
/// that follows the marker on that line.
pub struct CommentSkip<I> {
    lines: I,
    in_comment: bool,
}

impl<I> CommentSkip<I> {
    #[must_use]
    pub const fn new(lines: I) -> Self {
        Self {
            lines,
            in_comment: false,
        }
    }
}

impl<'a, I> Iterator for CommentSkip<I>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        for (line_nr, line) in self.lines.by_ref() {
            if line.contains(BLOCK_COMMENT_OPEN) {
                self.in_comment = true;
            }
            if line.contains(BLOCK_COMMENT_CLOSE) {
                self.in_comment = false;
                continue;
            }
            if line.is_empty() || self.in_comment {
                continue;
            }
            return Some((line_nr, line));
        }
        None
    }
}
