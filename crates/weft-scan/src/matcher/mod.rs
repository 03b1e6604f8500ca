//! Bracket and quote matching.
//!
//! [`PairMatcher`] locates the partner of a delimiter or the smallest pair
//! enclosing a position. Scans visit only delimiter tokens, one regex pass
//! per line, and honour quotes, escapes, and comments as configured by the
//! [`LanguageProfile`] and [`ScanOptions`].

mod arguments;
mod navigate;
mod scan;
mod state;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{is_escaped, open_quote_at};
use crate::document::{DocumentView, char_at, char_before, resolve};
use crate::error::{ScanError, ScanResult};
use crate::language::LanguageProfile;
use crate::position::{Position, Range};

use scan::{Hit, scan};
use state::{Direction, Target};

/// Tunables shared by every scan a matcher runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Track `/* ... */` style comments across lines.
    pub block_comments: bool,
    /// Give up after visiting this many lines.
    pub max_lines: Option<usize>,
}

impl ScanOptions {
    /// Enables or disables block-comment tracking.
    #[must_use]
    pub const fn with_block_comments(mut self, enabled: bool) -> Self {
        self.block_comments = enabled;
        self
    }

    /// Sets the line budget; `None` scans to the document edge.
    #[must_use]
    pub const fn with_max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            block_comments: true,
            max_lines: None,
        }
    }
}

/// Which delimiters an enclosing query considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Enclosure {
    Any,
    Brackets,
    Quotes,
}

/// An opening and closing delimiter located in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pair {
    open: Position,
    open_len: usize,
    close: Position,
    close_len: usize,
}

impl Pair {
    const fn interior(&self) -> Range {
        Range {
            start: self.open.shifted(self.open_len),
            end: self.close,
        }
    }

    const fn outer(&self) -> Range {
        Range {
            start: self.open,
            end: self.close.shifted(self.close_len),
        }
    }
}

/// Finds partners and enclosing pairs of brackets and quotes.
///
/// # Examples
///
/// ```
/// use weft_scan::{LanguageProfile, PairMatcher, Position};
///
/// let profile = LanguageProfile::for_language("rust");
/// let matcher = PairMatcher::new(&profile);
/// let doc = ["foo(bar(baz), [1,2,3])"];
/// assert_eq!(
///     matcher.match_right(&doc[..], Position::new(0, 3)),
///     Ok(Position::new(0, 21)),
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PairMatcher<'p> {
    profile: &'p LanguageProfile,
    options: ScanOptions,
}

impl<'p> PairMatcher<'p> {
    /// Creates a matcher with default [`ScanOptions`].
    #[must_use]
    pub fn new(profile: &'p LanguageProfile) -> Self {
        Self {
            profile,
            options: ScanOptions::default(),
        }
    }

    /// Replaces the scan options.
    #[must_use]
    pub const fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the profile the matcher classifies with.
    #[must_use]
    pub const fn profile(&self) -> &'p LanguageProfile {
        self.profile
    }

    /// Returns the scan options.
    #[must_use]
    pub const fn options(&self) -> ScanOptions {
        self.options
    }

    /// Finds the partner of the closer or quote immediately left of `pos`.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] when there is no closer or unescaped quote
    /// left of `pos` or the scan reaches the document start;
    /// [`ScanError::Malformed`] when the partner found is of another kind.
    pub fn match_left<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Position> {
        let (text, at) = resolve(doc, pos).ok_or(ScanError::NotFound)?;
        let (column, ch) = char_before(&text, at.column).ok_or(ScanError::NotFound)?;
        if !(self.profile.is_closer(ch) || self.profile.is_quote(ch)) || is_escaped(&text, column)
        {
            return Err(ScanError::NotFound);
        }
        debug!(%at, delimiter = %ch, "matching left");
        let hit = self.run(doc, at, Direction::Backward, Target::Partner)?;
        self.check_kind(ch, Position::new(at.line, column), hit)
    }

    /// Finds the partner of the opener or quote at `pos`.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] when there is no opener or unescaped quote at
    /// `pos` or the scan reaches the document end;
    /// [`ScanError::Malformed`] when the partner found is of another kind.
    pub fn match_right<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Position> {
        let (text, at) = resolve(doc, pos).ok_or(ScanError::NotFound)?;
        let ch = char_at(&text, at.column).ok_or(ScanError::NotFound)?;
        let opens = self.profile.is_opener(ch) || self.profile.is_quote(ch);
        if !opens || is_escaped(&text, at.column) {
            return Err(ScanError::NotFound);
        }
        debug!(%at, delimiter = %ch, "matching right");
        let hit = self.run(doc, at, Direction::Forward, Target::Partner)?;
        self.check_kind(ch, at, hit)
    }

    /// Returns the interior of the smallest bracket pair or quoted span
    /// containing `pos`, delimiters excluded.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] when nothing encloses `pos`;
    /// [`ScanError::Malformed`] when the enclosing opener is closed by a
    /// delimiter of another kind.
    pub fn enclosing_range<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Range> {
        self.enclosing(doc, pos, Enclosure::Any)
            .map(|pair| pair.interior())
    }

    /// Returns the smallest bracket pair or quoted span containing `pos`,
    /// delimiters included.
    ///
    /// # Errors
    ///
    /// As [`Self::enclosing_range`].
    pub fn enclosing_pair<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Range> {
        self.enclosing(doc, pos, Enclosure::Any).map(|pair| pair.outer())
    }

    /// Returns the interior of the smallest bracket pair containing `pos`,
    /// looking through any quoted span `pos` sits in.
    ///
    /// # Errors
    ///
    /// As [`Self::enclosing_range`].
    pub fn enclosing_brackets<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Range> {
        self.enclosing(doc, pos, Enclosure::Brackets)
            .map(|pair| pair.interior())
    }

    /// Returns the interior of the quoted span containing `pos`.
    ///
    /// Quote parity is judged from the start of `pos`'s line.
    ///
    /// # Errors
    ///
    /// [`ScanError::NotFound`] when `pos` is not inside a quote.
    pub fn enclosing_quotes<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
    ) -> ScanResult<Range> {
        self.enclosing(doc, pos, Enclosure::Quotes)
            .map(|pair| pair.interior())
    }

    fn run<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        start: Position,
        direction: Direction,
        target: Target,
    ) -> ScanResult<Hit> {
        scan(self.profile, self.options, doc, start, direction, target)
    }

    fn check_kind(&self, origin: char, at: Position, hit: Hit) -> ScanResult<Position> {
        if self.profile.partner(origin) == Some(hit.token.ch) {
            Ok(hit.position)
        } else {
            debug!(open = %at, close = %hit.position, "mismatched delimiters");
            Err(ScanError::malformed(at, hit.position))
        }
    }

    fn enclosing<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        pos: Position,
        kind: Enclosure,
    ) -> ScanResult<Pair> {
        let (text, at) = resolve(doc, pos).ok_or(ScanError::NotFound)?;
        let tokens = self.profile.line_tokens(&text);
        let open_quote = open_quote_at(&tokens, &text, at.column);
        debug!(%at, ?kind, in_quote = open_quote.is_some(), "finding enclosing pair");

        if kind != Enclosure::Brackets {
            if let Some((column, quote)) = open_quote {
                return self.pair_from(doc, Position::new(at.line, column), quote, at);
            }
            if kind == Enclosure::Quotes {
                return Err(ScanError::NotFound);
            }
        }

        let start = open_quote.map_or(at, |(column, _)| Position::new(at.line, column));
        let hit = self.run(doc, start, Direction::Backward, Target::Enclosing)?;
        self.pair_from(doc, hit.position, hit.token.ch, at)
    }

    /// Matches the opener at `open` forward and checks the pair spans `pos`.
    fn pair_from<D: DocumentView + ?Sized>(
        &self,
        doc: &D,
        open: Position,
        open_ch: char,
        pos: Position,
    ) -> ScanResult<Pair> {
        let close = self.match_right(doc, open)?;
        if close < pos {
            return Err(ScanError::NotFound);
        }
        let close_len = self
            .profile
            .partner(open_ch)
            .map_or(open_ch.len_utf8(), char::len_utf8);
        Ok(Pair {
            open,
            open_len: open_ch.len_utf8(),
            close,
            close_len,
        })
    }
}

#[cfg(test)]
mod tests;
