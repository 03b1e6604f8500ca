//! Splitting a bracketed list into its top-level arguments.

use tracing::debug;

use crate::cursor::TextCursor;
use crate::document::DocumentView;
use crate::error::ScanResult;
use crate::position::{Position, Range};

use super::{Enclosure, PairMatcher};

const SEPARATOR: char = ',';

impl PairMatcher<'_> {
    /// Returns the comma-separated arguments of the bracket pair enclosing
    /// `pos`, each trimmed of surrounding whitespace and line comments.
    ///
    /// Commas inside nested pairs and quoted spans do not split. Empty
    /// arguments, such as the one after a trailing comma, are omitted.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`](crate::ScanError::NotFound) when no bracket
    /// pair encloses `pos`; [`ScanError::Malformed`](crate::ScanError::Malformed)
    /// when the enclosing pair is mismatched.
    pub fn argument_ranges<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Vec<Range>> {
        let pair = self.enclosing(doc, pos, Enclosure::Brackets)?;
        let interior = pair.interior();
        let mut ranges = Vec::new();
        let mut start = interior.start;

        loop {
            let comma = self
                .find_char(doc, start, SEPARATOR)
                .ok()
                .filter(|&found| found < interior.end);
            let end = comma.unwrap_or(interior.end);
            if let Some(range) = self.trim(doc, Range::new(start, end)) {
                ranges.push(range);
            }
            match comma {
                Some(separator) => start = separator.shifted(SEPARATOR.len_utf8()),
                None => break,
            }
        }

        debug!(count = ranges.len(), open = %pair.open, "split arguments");
        Ok(ranges)
    }

    /// Shrinks `range` past leading and trailing whitespace, line breaks
    /// and line comments included. Returns `None` when nothing else remains.
    fn trim<D: DocumentView + ?Sized>(&self, doc: &D, range: Range) -> Option<Range> {
        let mut front = TextCursor::new(doc, range.start)?;
        loop {
            while front.position() < range.end && front.peek().is_some_and(char::is_whitespace) {
                front.advance();
            }
            let at = front.position();
            if at >= range.end || self.comment_column(front.text()) != Some(at.column) {
                break;
            }
            let line_end = Position::new(at.line, front.text().len());
            front.seek(line_end);
        }

        let mut back = TextCursor::new(doc, range.end)?;
        loop {
            while back.position() > front.position()
                && back.peek_back().is_some_and(char::is_whitespace)
            {
                back.retreat();
            }
            let at = back.position();
            let comment = self
                .comment_column(back.text())
                .map(|column| Position::new(at.line, column))
                .filter(|&start| start < at && start >= front.position());
            match comment {
                Some(start) => {
                    back.seek(start);
                }
                None => break,
            }
        }
        (front.position() < back.position()).then(|| Range::new(front.position(), back.position()))
    }
}
