//! Structure-aware character search and tab-out.

use crate::classify::{Token, is_escaped, line_comment_column};
use crate::cursor::{LINE_BREAK, TextCursor};
use crate::document::{DocumentView, char_at, resolve};
use crate::error::{ScanError, ScanResult};
use crate::position::Position;

use super::PairMatcher;

impl PairMatcher<'_> {
    /// Finds the next `target` at or after `pos`, stepping over bracketed
    /// and quoted spans whole.
    ///
    /// Searching for `,` from inside an argument list therefore lands on the
    /// next top-level comma. Line comments and tracked block comments are
    /// skipped. A delimiter that cannot be matched is stepped over like any
    /// other character.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] when the document end is reached first.
    pub fn find_char<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
        target: char,
    ) -> ScanResult<Position> {
        let mut cursor = TextCursor::new(doc, pos).ok_or(ScanError::NotFound)?;
        let mut line = None;
        let mut cut = usize::MAX;
        while let Some(ch) = cursor.peek() {
            let at = cursor.position();
            if line != Some(at.line) {
                line = Some(at.line);
                cut = self.comment_from(cursor.text(), at.column).unwrap_or(usize::MAX);
            }
            if ch != LINE_BREAK && at.column >= cut {
                let line_end = Position::new(at.line, cursor.text().len());
                if cursor.seek(line_end) {
                    continue;
                }
            }
            if ch != LINE_BREAK {
                if let Some(width) = self.block_comment_opening(cursor.text(), at.column) {
                    let after = self
                        .block_comment_closing(doc, at.shifted(width))
                        .ok_or(ScanError::NotFound)?;
                    if cursor.seek(after) {
                        continue;
                    }
                }
            }
            if ch == target {
                return Ok(at);
            }
            if ch != LINE_BREAK && self.opens_span(cursor.text(), at.column, ch) {
                if let Ok(close) = self.match_right(doc, at) {
                    let width = self.profile.partner(ch).map_or(ch.len_utf8(), char::len_utf8);
                    if cursor.seek(close.shifted(width)) {
                        continue;
                    }
                }
            }
            if !cursor.advance() {
                break;
            }
        }
        Err(ScanError::NotFound)
    }

    /// Returns the position just past the delimiter that closes the
    /// structure around `pos`.
    ///
    /// A closer or quote directly at `pos` is stepped over; otherwise the
    /// cursor leaves the enclosing pair.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] when nothing encloses `pos`.
    pub fn tab_out<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Position> {
        let (text, at) = resolve(doc, pos).ok_or(ScanError::NotFound)?;
        if let Some(ch) = char_at(&text, at.column) {
            if self.profile.is_closer(ch) || self.profile.is_quote(ch) {
                return Ok(at.shifted(ch.len_utf8()));
            }
        }
        self.enclosing_pair(doc, at).map(|range| range.end)
    }

    fn opens_span(&self, text: &str, column: usize, ch: char) -> bool {
        (self.profile.is_opener(ch) || self.profile.is_quote(ch)) && !is_escaped(text, column)
    }

    /// Column where a line comment begins on `text`, if any.
    pub(crate) fn comment_column(&self, text: &str) -> Option<usize> {
        line_comment_column(&self.profile.line_tokens(text), text)
    }

    /// Like [`Self::comment_column`], reading `text` only from `column` on.
    fn comment_from(&self, text: &str, column: usize) -> Option<usize> {
        let tokens: Vec<Token> = self
            .profile
            .line_tokens(text)
            .into_iter()
            .filter(|token| token.column >= column)
            .collect();
        line_comment_column(&tokens, text)
    }

    /// Width of the block-comment opener at `column`, when block comments
    /// are tracked and one starts there.
    fn block_comment_opening(&self, text: &str, column: usize) -> Option<usize> {
        if !self.options.block_comments {
            return None;
        }
        let (open, _) = self.profile.block_comment()?;
        text.get(column..)?.starts_with(open).then_some(open.len())
    }

    /// Position just past the first block-comment closer at or after `from`.
    fn block_comment_closing<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        from: Position,
    ) -> Option<Position> {
        let (_, close) = self.profile.block_comment()?;
        (from.line..doc.line_count()).find_map(|index| {
            let text = doc.line(index)?;
            let offset = if index == from.line { from.column } else { 0 };
            let found = text.get(offset..)?.find(close)?;
            Some(Position::new(index, offset + found + close.len()))
        })
    }
}
