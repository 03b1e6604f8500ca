//! camelCase, PascalCase, and snake_case segments.

use crate::document::DocumentView;
use crate::error::{ScanError, ScanResult};
use crate::position::Position;

use super::BoundaryScanner;

/// Role of a character inside a word for subword splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Upper,
    Lower,
    Separator,
}

impl BoundaryScanner<'_> {
    fn part(&self, ch: char) -> Part {
        if ch == '_' || !self.is_word(ch) {
            Part::Separator
        } else if ch.is_uppercase() {
            Part::Upper
        } else {
            Part::Lower
        }
    }

    /// Returns the start of the nearest subword left of `pos`.
    ///
    /// `parseHTTPResponse` splits as `parse|HTTP|Response`; underscores
    /// separate subwords like whitespace does.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] when no subword lies between `pos` and the
    /// document start.
    pub fn subword_boundary_left<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Position> {
        let mut cursor = Self::cursor(doc, pos)?;
        cursor.retreat_while(|ch| self.part(ch) == Part::Separator);
        if cursor.peek_back().is_none() {
            return Err(ScanError::NotFound);
        }
        let here = cursor.position();
        let column = subword_start(cursor.text(), here.column, |ch| self.part(ch));
        Ok(Position::new(here.line, column))
    }

    /// Returns the start of the next subword right of `pos`, skipping the
    /// rest of the subword `pos` is in.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] when no further subword starts before the
    /// document end.
    pub fn subword_boundary_right<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Position> {
        let mut cursor = Self::cursor(doc, pos)?;
        let here = cursor.position();
        let end = subword_end(cursor.text(), here.column, |ch| self.part(ch));
        cursor.seek(Position::new(here.line, end));
        cursor.advance_while(|ch| self.part(ch) == Part::Separator);
        if cursor.peek().is_none() {
            return Err(ScanError::NotFound);
        }
        Ok(cursor.position())
    }
}

/// Returns the column where the subword starting at `column` ends. A
/// separator at `column` yields `column` itself.
fn subword_end(text: &str, column: usize, part: impl Fn(char) -> Part) -> usize {
    let Some(rest) = text.get(column..) else {
        return column;
    };
    let mut chars = rest.char_indices().peekable();
    let Some((_, first)) = chars.next() else {
        return column;
    };
    let first_part = part(first);
    if first_part == Part::Separator {
        return column;
    }
    let mut end = column + first.len_utf8();

    let acronym = first_part == Part::Upper
        && chars.peek().is_some_and(|&(_, ch)| part(ch) == Part::Upper);
    if acronym {
        // Stop before the capital that starts the next capitalised word.
        while let Some((offset, ch)) = chars.next() {
            if part(ch) != Part::Upper {
                break;
            }
            if chars.peek().is_some_and(|&(_, next)| part(next) == Part::Lower) {
                break;
            }
            end = column + offset + ch.len_utf8();
        }
    } else {
        for (offset, ch) in chars {
            if part(ch) != Part::Lower {
                break;
            }
            end = column + offset + ch.len_utf8();
        }
    }
    end
}

/// Returns the column where the subword ending at `column` starts.
fn subword_start(text: &str, column: usize, part: impl Fn(char) -> Part) -> usize {
    let Some(before) = text.get(..column) else {
        return column;
    };
    let mut chars = before.char_indices().rev().peekable();
    let Some((last_at, last)) = chars.next() else {
        return column;
    };
    let mut start = last_at;
    match part(last) {
        Part::Separator => return column,
        Part::Upper => {
            while let Some(&(at, ch)) = chars.peek() {
                if part(ch) != Part::Upper {
                    break;
                }
                start = at;
                chars.next();
            }
        }
        Part::Lower => {
            while let Some(&(at, ch)) = chars.peek() {
                match part(ch) {
                    Part::Lower => {
                        start = at;
                        chars.next();
                    }
                    Part::Upper => {
                        start = at;
                        break;
                    }
                    Part::Separator => break,
                }
            }
        }
    }
    start
}
