//! Targets for smart deletion.
//!
//! These queries only compute where a deletion would stop; the host applies
//! the edit between `pos` and the returned position.

use crate::document::{DocumentView, char_at, char_before, resolve};
use crate::error::{ScanError, ScanResult};
use crate::position::Position;

use super::BoundaryScanner;

const fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t')
}

impl BoundaryScanner<'_> {
    /// Returns where a smart backspace from `pos` stops.
    ///
    /// Looking back at whitespace, the run of blanks goes, together with the
    /// word before it when `pos` sits at the start of a word. A closer or
    /// quote takes its whole pair. A word character takes the word, and any
    /// other character takes the run of plain punctuation. At column 0 the
    /// target is the end of the previous line, joining the two.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] at the document start, when an opener sits
    /// before `pos`, or when a pair cannot be matched.
    pub fn smart_delete_left<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Position> {
        let (text, at) = resolve(doc, pos).ok_or(ScanError::NotFound)?;
        let Some((_, ch)) = char_before(&text, at.column) else {
            let line = at.line.checked_sub(1).ok_or(ScanError::NotFound)?;
            let len = doc.line(line).map_or(0, |prev| prev.len());
            return Ok(Position::new(line, len));
        };

        let profile = self.profile();
        let before = text.get(..at.column).unwrap_or_default();
        let column = if is_blank(ch) {
            let after_blanks = before.trim_end_matches(is_blank);
            let at_word = char_at(&text, at.column).is_some_and(|next| !is_blank(next));
            if at_word {
                after_blanks.trim_end_matches(|c| self.is_word(c)).len()
            } else {
                after_blanks.len()
            }
        } else if profile.is_closer(ch) || profile.is_quote(ch) {
            return self.matcher.match_left(doc, at);
        } else if self.is_word(ch) {
            before.trim_end_matches(|c| self.is_word(c)).len()
        } else {
            before
                .trim_end_matches(|c| !self.is_word(c) && !profile.is_delimiter(c))
                .len()
        };
        if column == at.column {
            return Err(ScanError::NotFound);
        }
        Ok(Position::new(at.line, column))
    }

    /// Returns where a smart forward delete from `pos` stops.
    ///
    /// Whitespace deletes its run of blanks. An opener or quote takes its
    /// whole pair. At the start of a word the word and the blanks after it
    /// go; inside a word, only the rest of it. Other characters take the run
    /// of plain punctuation. At the line end the target is the start of the
    /// next line, joining the two.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] at the document end, when a closer sits at
    /// `pos`, or when a pair cannot be matched.
    pub fn smart_delete_right<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Position> {
        let (text, at) = resolve(doc, pos).ok_or(ScanError::NotFound)?;
        let Some(ch) = char_at(&text, at.column) else {
            let line = at.line + 1;
            if line >= doc.line_count() {
                return Err(ScanError::NotFound);
            }
            return Ok(Position::new(line, 0));
        };

        let profile = self.profile();
        let after = text.get(at.column..).unwrap_or_default();
        let consumed = if is_blank(ch) {
            after.len() - after.trim_start_matches(is_blank).len()
        } else if profile.is_opener(ch) || profile.is_quote(ch) {
            let partner = self.matcher.match_right(doc, at)?;
            let width = profile.partner(ch).map_or(ch.len_utf8(), char::len_utf8);
            return Ok(partner.shifted(width));
        } else if self.is_word(ch) {
            let past_word = after.trim_start_matches(|c| self.is_word(c));
            let word_start =
                char_before(&text, at.column).is_none_or(|(_, prev)| !self.is_word(prev));
            let remaining = if word_start {
                past_word.trim_start_matches(is_blank)
            } else {
                past_word
            };
            after.len() - remaining.len()
        } else {
            after.len()
                - after
                    .trim_start_matches(|c| !self.is_word(c) && !profile.is_delimiter(c))
                    .len()
        };
        if consumed == 0 {
            return Err(ScanError::NotFound);
        }
        Ok(at.shifted(consumed))
    }
}
