//! Per-language delimiter tables.
//!
//! A [`LanguageProfile`] answers the character-class questions every scanner
//! asks: which characters form words, which open and close nested
//! structures, which toggle string literals, and which tokens start
//! comments. Profiles are immutable once built; [`ProfileRegistry`] hands
//! out shared copies keyed by language identifier.

mod builder;
mod builtin;
mod registry;

use std::ops::RangeInclusive;

use crate::classify::{CharClass, DelimiterPattern, Token};

pub use builder::LanguageProfileBuilder;
pub use builtin::{BUILTIN_LANGUAGES, PLAIN_TEXT, language_for_extension, language_for_path};
pub use registry::ProfileRegistry;

/// Delimiter and word-character table for one language.
///
/// `openers[i]` and `closers[i]` always form a pair.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    id: String,
    word_ranges: Vec<RangeInclusive<char>>,
    openers: Vec<char>,
    closers: Vec<char>,
    quotes: Vec<char>,
    line_comment: Option<String>,
    block_comment: Option<(String, String)>,
    pattern: DelimiterPattern,
}

impl LanguageProfile {
    /// Returns the built-in profile for `id`, or the plain-text profile for
    /// an unknown identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft_scan::{CharClass, LanguageProfile};
    ///
    /// let python = LanguageProfile::for_language("python");
    /// assert_eq!(python.classify_token("#"), CharClass::LineCommentStart);
    /// assert!(python.is_quote('\''));
    /// ```
    #[must_use]
    pub fn for_language(id: &str) -> Self {
        builtin::builtin(id)
    }

    /// Returns the profile used when no language is known.
    #[must_use]
    pub fn plain() -> Self {
        builtin::builtin(PLAIN_TEXT)
    }

    /// Starts building a custom profile.
    #[must_use]
    pub fn builder(id: impl Into<String>) -> LanguageProfileBuilder {
        LanguageProfileBuilder::new(id)
    }

    /// Returns the language identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the configured word-character intervals.
    #[must_use]
    pub fn word_ranges(&self) -> &[RangeInclusive<char>] {
        &self.word_ranges
    }

    /// Returns the openers, index-aligned with [`Self::closers`].
    #[must_use]
    pub fn openers(&self) -> &[char] {
        &self.openers
    }

    /// Returns the closers, index-aligned with [`Self::openers`].
    #[must_use]
    pub fn closers(&self) -> &[char] {
        &self.closers
    }

    /// Returns the quote characters.
    #[must_use]
    pub fn quotes(&self) -> &[char] {
        &self.quotes
    }

    /// Returns the line-comment token, if the language has one.
    #[must_use]
    pub fn line_comment(&self) -> Option<&str> {
        self.line_comment.as_deref()
    }

    /// Returns the block-comment `(start, end)` tokens, if any.
    #[must_use]
    pub fn block_comment(&self) -> Option<(&str, &str)> {
        self.block_comment
            .as_ref()
            .map(|(start, end)| (start.as_str(), end.as_str()))
    }

    /// Returns the compiled pattern matching every delimiter token.
    #[must_use]
    pub const fn delimiter_pattern(&self) -> &DelimiterPattern {
        &self.pattern
    }

    /// Returns whether `ch` falls in a word range.
    #[must_use]
    pub fn is_word(&self, ch: char) -> bool {
        self.word_ranges.iter().any(|range| range.contains(&ch))
    }

    /// Returns whether `ch` opens a nested structure.
    #[must_use]
    pub fn is_opener(&self, ch: char) -> bool {
        self.openers.contains(&ch)
    }

    /// Returns whether `ch` closes a nested structure.
    #[must_use]
    pub fn is_closer(&self, ch: char) -> bool {
        self.closers.contains(&ch)
    }

    /// Returns whether `ch` toggles string-literal mode.
    #[must_use]
    pub fn is_quote(&self, ch: char) -> bool {
        self.quotes.contains(&ch)
    }

    /// Returns whether `ch` is an opener, closer, or quote.
    #[must_use]
    pub fn is_delimiter(&self, ch: char) -> bool {
        self.is_opener(ch) || self.is_closer(ch) || self.is_quote(ch)
    }

    /// Classifies a single character.
    ///
    /// Comment tokens are only recognised by [`Self::classify_token`]; a
    /// lone `#` is [`CharClass::Other`] here even in Python.
    #[must_use]
    pub fn classify_char(&self, ch: char) -> CharClass {
        if self.is_opener(ch) {
            CharClass::Opener
        } else if self.is_closer(ch) {
            CharClass::Closer
        } else if self.is_quote(ch) {
            CharClass::Quote
        } else if self.is_word(ch) {
            CharClass::Word
        } else {
            CharClass::Other
        }
    }

    /// Classifies a token as produced by the delimiter pattern.
    #[must_use]
    pub fn classify_token(&self, token: &str) -> CharClass {
        if self.line_comment.as_deref() == Some(token) {
            return CharClass::LineCommentStart;
        }
        if let Some((start, end)) = self.block_comment() {
            if token == start {
                return CharClass::BlockCommentStart;
            }
            if token == end {
                return CharClass::BlockCommentEnd;
            }
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.classify_char(ch),
            _ => CharClass::Other,
        }
    }

    /// Returns the other half of a delimiter: the closer for an opener, the
    /// opener for a closer, and the quote itself for a quote.
    #[must_use]
    pub fn partner(&self, ch: char) -> Option<char> {
        if let Some(index) = self.openers.iter().position(|&c| c == ch) {
            return self.closers.get(index).copied();
        }
        if let Some(index) = self.closers.iter().position(|&c| c == ch) {
            return self.openers.get(index).copied();
        }
        self.is_quote(ch).then_some(ch)
    }

    /// Extracts the delimiter tokens of one line in document order.
    pub(crate) fn line_tokens(&self, text: &str) -> Vec<Token> {
        self.pattern
            .find_iter(text)
            .filter_map(|(column, token)| {
                let ch = token.chars().next()?;
                Some(Token {
                    column,
                    len: token.len(),
                    class: self.classify_token(token),
                    ch,
                })
            })
            .collect()
    }
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self::plain()
    }
}
