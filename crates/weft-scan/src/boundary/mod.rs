//! Word, expression, and subword boundaries.
//!
//! Boundaries are found by walking a cursor character by character. A line
//! break counts as one non-word character, so word movement flows across
//! lines. Expression movement treats bracketed and quoted spans as single
//! units by delegating to [`PairMatcher`].

mod delete;
mod subword;

use tracing::trace;

use crate::cursor::{LINE_BREAK, TextCursor};
use crate::document::DocumentView;
use crate::error::{ScanError, ScanResult};
use crate::language::LanguageProfile;
use crate::matcher::{PairMatcher, ScanOptions};
use crate::position::Position;

/// Detects movement boundaries for one language.
///
/// Every query returns [`ScanError::NotFound`] when it would have to move
/// past the start or end of the document.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryScanner<'p> {
    matcher: PairMatcher<'p>,
}

impl<'p> BoundaryScanner<'p> {
    /// Creates a scanner with default [`ScanOptions`].
    #[must_use]
    pub fn new(profile: &'p LanguageProfile) -> Self {
        Self {
            matcher: PairMatcher::new(profile),
        }
    }

    /// Replaces the options used for delimiter matching.
    #[must_use]
    pub const fn with_options(mut self, options: ScanOptions) -> Self {
        self.matcher = self.matcher.with_options(options);
        self
    }

    /// Returns the matcher used for expression movement.
    #[must_use]
    pub const fn matcher(&self) -> &PairMatcher<'p> {
        &self.matcher
    }

    const fn profile(&self) -> &'p LanguageProfile {
        self.matcher.profile()
    }

    fn is_word(&self, ch: char) -> bool {
        self.profile().is_word(ch)
    }

    fn cursor<'d, D: DocumentView + ?Sized>(
        doc: &'d D,
        pos: Position,
    ) -> ScanResult<TextCursor<'d, D>> {
        TextCursor::new(doc, pos).ok_or(ScanError::NotFound)
    }

    /// Returns the start of the nearest word run left of `pos`.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] when no word lies between `pos` and the
    /// document start.
    pub fn word_boundary_left<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Position> {
        let mut cursor = Self::cursor(doc, pos)?;
        cursor.retreat_while(|ch| !self.is_word(ch));
        if cursor.peek_back().is_none() {
            trace!(%pos, "word boundary left reached document start");
            return Err(ScanError::NotFound);
        }
        cursor.retreat_while(|ch| self.is_word(ch));
        Ok(cursor.position())
    }

    /// Returns the start of the next word run right of `pos`, skipping the
    /// rest of any word `pos` is in.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] when no further word starts before the
    /// document end.
    pub fn word_boundary_right<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Position> {
        let mut cursor = Self::cursor(doc, pos)?;
        cursor.advance_while(|ch| self.is_word(ch));
        cursor.advance_while(|ch| !self.is_word(ch));
        if cursor.peek().is_none() {
            trace!(%pos, "word boundary right reached document end");
            return Err(ScanError::NotFound);
        }
        Ok(cursor.position())
    }

    /// Returns the end of the previous word run, skipping the rest of any
    /// word `pos` is in.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] when no word ends between the document start
    /// and `pos`.
    pub fn word_edge_left<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Position> {
        let mut cursor = Self::cursor(doc, pos)?;
        cursor.retreat_while(|ch| self.is_word(ch));
        cursor.retreat_while(|ch| !self.is_word(ch));
        if cursor.peek_back().is_none() {
            return Err(ScanError::NotFound);
        }
        Ok(cursor.position())
    }

    /// Returns the end of the word run at or after `pos`.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] when no word follows `pos`.
    pub fn word_edge_right<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Position> {
        let mut cursor = Self::cursor(doc, pos)?;
        cursor.advance_while(|ch| !self.is_word(ch));
        if cursor.peek().is_none() {
            return Err(ScanError::NotFound);
        }
        cursor.advance_while(|ch| self.is_word(ch));
        Ok(cursor.position())
    }

    /// Moves left over one expression: a word run, a run of plain
    /// punctuation and whitespace, or a whole bracketed or quoted span.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] when an opener sits immediately left of
    /// `pos` or the document start is reached;
    /// [`ScanError::Malformed`] from the underlying match.
    pub fn expression_boundary_left<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Position> {
        let mut cursor = Self::cursor(doc, pos)?;
        let profile = self.profile();
        let ch = cursor.peek_back().ok_or(ScanError::NotFound)?;
        if ch != LINE_BREAK && (profile.is_closer(ch) || profile.is_quote(ch)) {
            return self.matcher.match_left(doc, cursor.position());
        }
        if profile.is_opener(ch) {
            return Err(ScanError::NotFound);
        }
        if self.is_word(ch) {
            cursor.retreat_while(|c| self.is_word(c));
        } else {
            cursor.retreat_while(|c| !self.is_word(c) && !profile.is_delimiter(c));
            if cursor.peek_back().is_none() {
                return Err(ScanError::NotFound);
            }
        }
        Ok(cursor.position())
    }

    /// Moves right over one expression: a word run, a run of plain
    /// punctuation and whitespace, or a whole bracketed or quoted span.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] when a closer sits at `pos` or the document
    /// end is reached; [`ScanError::Malformed`] from the underlying match.
    pub fn expression_boundary_right<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Position> {
        let mut cursor = Self::cursor(doc, pos)?;
        let profile = self.profile();
        let ch = cursor.peek().ok_or(ScanError::NotFound)?;
        if ch != LINE_BREAK && (profile.is_opener(ch) || profile.is_quote(ch)) {
            let partner = self.matcher.match_right(doc, cursor.position())?;
            let width = profile.partner(ch).map_or(ch.len_utf8(), char::len_utf8);
            return Ok(partner.shifted(width));
        }
        if profile.is_closer(ch) {
            return Err(ScanError::NotFound);
        }
        if self.is_word(ch) {
            cursor.advance_while(|c| self.is_word(c));
        } else {
            cursor.advance_while(|c| !self.is_word(c) && !profile.is_delimiter(c));
            if cursor.peek().is_none() {
                return Err(ScanError::NotFound);
            }
        }
        Ok(cursor.position())
    }
}
