//! Character-level walking across line breaks.

use std::borrow::Cow;

use crate::document::{DocumentView, char_at, char_before, resolve, snap_column};
use crate::position::Position;

/// Stand-in character reported at a line break.
pub(crate) const LINE_BREAK: char = '\n';

/// A position that steps one character at a time through a document.
///
/// The break between two lines reads as a single [`LINE_BREAK`]; document
/// edges read as `None`.
pub(crate) struct TextCursor<'d, D: DocumentView + ?Sized> {
    doc: &'d D,
    line: usize,
    column: usize,
    text: Cow<'d, str>,
}

impl<'d, D: DocumentView + ?Sized> TextCursor<'d, D> {
    /// Places a cursor at `pos`, snapped onto its line.
    pub(crate) fn new(doc: &'d D, pos: Position) -> Option<Self> {
        let (text, at) = resolve(doc, pos)?;
        Some(Self {
            doc,
            line: at.line,
            column: at.column,
            text,
        })
    }

    pub(crate) const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Returns the current line's text.
    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Returns the character after the cursor.
    pub(crate) fn peek(&self) -> Option<char> {
        char_at(&self.text, self.column)
            .or_else(|| (self.line + 1 < self.doc.line_count()).then_some(LINE_BREAK))
    }

    /// Returns the character before the cursor.
    pub(crate) fn peek_back(&self) -> Option<char> {
        char_before(&self.text, self.column)
            .map(|(_, ch)| ch)
            .or_else(|| (self.line > 0).then_some(LINE_BREAK))
    }

    /// Steps over the character after the cursor. Returns `false` at the
    /// document end.
    pub(crate) fn advance(&mut self) -> bool {
        if let Some(ch) = char_at(&self.text, self.column) {
            self.column += ch.len_utf8();
            return true;
        }
        self.load(self.line + 1, |_| 0)
    }

    /// Steps back over the character before the cursor. Returns `false` at
    /// the document start.
    pub(crate) fn retreat(&mut self) -> bool {
        if let Some((column, _)) = char_before(&self.text, self.column) {
            self.column = column;
            return true;
        }
        match self.line.checked_sub(1) {
            Some(line) => self.load(line, str::len),
            None => false,
        }
    }

    /// Advances while `pred` holds for the next character. Returns how many
    /// characters were consumed.
    pub(crate) fn advance_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(&mut pred) && self.advance() {
            count += 1;
        }
        count
    }

    /// Retreats while `pred` holds for the previous character. Returns how
    /// many characters were consumed.
    pub(crate) fn retreat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while self.peek_back().is_some_and(&mut pred) && self.retreat() {
            count += 1;
        }
        count
    }

    /// Moves to `pos`. Returns `false`, leaving the cursor in place, when
    /// the line does not exist.
    pub(crate) fn seek(&mut self, pos: Position) -> bool {
        if pos.line == self.line {
            self.column = snap_column(&self.text, pos.column);
            return true;
        }
        self.load(pos.line, |text| snap_column(text, pos.column))
    }

    fn load(&mut self, line: usize, column: impl FnOnce(&str) -> usize) -> bool {
        let Some(text) = self.doc.line(line) else {
            return false;
        };
        self.column = column(&text);
        self.line = line;
        self.text = text;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextDocument;

    #[test]
    fn walks_across_line_breaks() {
        let doc = TextDocument::new("ab\nc");
        let mut cursor = TextCursor::new(&doc, Position::new(0, 1))
            .unwrap_or_else(|| panic!("cursor should resolve"));
        let mut seen = Vec::new();
        while let Some(ch) = cursor.peek() {
            seen.push(ch);
            assert!(cursor.advance());
        }
        assert_eq!(seen, ['b', '\n', 'c']);
        assert_eq!(cursor.position(), Position::new(1, 1));
        assert!(!cursor.advance());
    }

    #[test]
    fn retreats_to_previous_line_end() {
        let doc = TextDocument::new("ab\nc");
        let mut cursor = TextCursor::new(&doc, Position::new(1, 0))
            .unwrap_or_else(|| panic!("cursor should resolve"));
        assert_eq!(cursor.peek_back(), Some(LINE_BREAK));
        assert!(cursor.retreat());
        assert_eq!(cursor.position(), Position::new(0, 2));
        assert_eq!(cursor.retreat_while(|ch| ch.is_alphabetic()), 2);
        assert_eq!(cursor.peek_back(), None);
        assert!(!cursor.retreat());
    }

    #[test]
    fn multibyte_characters_step_whole() {
        let doc = TextDocument::new("héllo");
        let mut cursor = TextCursor::new(&doc, Position::new(0, 1))
            .unwrap_or_else(|| panic!("cursor should resolve"));
        assert_eq!(cursor.peek(), Some('é'));
        assert!(cursor.advance());
        assert_eq!(cursor.position(), Position::new(0, 3));
    }
}
