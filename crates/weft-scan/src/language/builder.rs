//! Validated construction of custom language profiles.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use crate::classify::DelimiterPattern;
use crate::error::ProfileError;

use super::LanguageProfile;

/// Builder for [`LanguageProfile`].
///
/// ```
/// use weft_scan::LanguageProfile;
///
/// let lisp = LanguageProfile::builder("lisp")
///     .ascii_words()
///     .word_range('-'..='-')
///     .pair('(', ')')
///     .quote('"')
///     .line_comment(";")
///     .build()?;
/// assert!(lisp.is_word('-'));
/// # Ok::<(), weft_scan::ProfileError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LanguageProfileBuilder {
    id: String,
    word_ranges: Vec<RangeInclusive<char>>,
    openers: Vec<char>,
    closers: Vec<char>,
    quotes: Vec<char>,
    line_comment: Option<String>,
    block_comment: Option<(String, String)>,
}

impl LanguageProfileBuilder {
    /// Starts an empty profile: no word characters, delimiters, or comments.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Adds the ASCII identifier ranges `a-z`, `A-Z`, `0-9`, and `_`.
    #[must_use]
    pub fn ascii_words(self) -> Self {
        self.word_range('a'..='z')
            .word_range('A'..='Z')
            .word_range('0'..='9')
            .word_range('_'..='_')
    }

    /// Adds a word-character interval.
    #[must_use]
    pub fn word_range(mut self, range: RangeInclusive<char>) -> Self {
        self.word_ranges.push(range);
        self
    }

    /// Adds an opener/closer pair.
    #[must_use]
    pub fn pair(mut self, open: char, close: char) -> Self {
        self.openers.push(open);
        self.closers.push(close);
        self
    }

    /// Replaces the openers. They must stay index-aligned with the closers.
    #[must_use]
    pub fn openers(mut self, openers: impl IntoIterator<Item = char>) -> Self {
        self.openers = openers.into_iter().collect();
        self
    }

    /// Replaces the closers. They must stay index-aligned with the openers.
    #[must_use]
    pub fn closers(mut self, closers: impl IntoIterator<Item = char>) -> Self {
        self.closers = closers.into_iter().collect();
        self
    }

    /// Adds a quote character.
    #[must_use]
    pub fn quote(mut self, quote: char) -> Self {
        self.quotes.push(quote);
        self
    }

    /// Sets the line-comment token.
    #[must_use]
    pub fn line_comment(mut self, token: impl Into<String>) -> Self {
        self.line_comment = Some(token.into());
        self
    }

    /// Sets the block-comment start and end tokens.
    #[must_use]
    pub fn block_comment(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.block_comment = Some((start.into(), end.into()));
        self
    }

    /// Validates the tables and compiles the delimiter pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] when openers and closers are unbalanced, a
    /// character is used for two delimiter roles, a delimiter is also a word
    /// character, a comment token is empty, or the pattern fails to compile.
    pub fn build(self) -> Result<LanguageProfile, ProfileError> {
        self.validate()?;
        let pattern = self.compile_pattern()?;
        Ok(LanguageProfile {
            id: self.id,
            word_ranges: self.word_ranges,
            openers: self.openers,
            closers: self.closers,
            quotes: self.quotes,
            line_comment: self.line_comment,
            block_comment: self.block_comment,
            pattern,
        })
    }

    fn validate(&self) -> Result<(), ProfileError> {
        if self.openers.len() != self.closers.len() {
            return Err(ProfileError::UnbalancedPairs {
                id: self.id.clone(),
                openers: self.openers.len(),
                closers: self.closers.len(),
            });
        }

        let mut seen = HashSet::new();
        for &ch in self.openers.iter().chain(&self.closers).chain(&self.quotes) {
            if !seen.insert(ch) {
                return Err(ProfileError::DuplicateDelimiter {
                    id: self.id.clone(),
                    ch,
                });
            }
        }

        let comment_tokens = self.comment_tokens();
        if comment_tokens.iter().any(|token| token.is_empty()) {
            return Err(ProfileError::EmptyCommentToken {
                id: self.id.clone(),
            });
        }

        let token_chars = comment_tokens.iter().flat_map(|token| token.chars());
        if let Some(ch) = seen
            .into_iter()
            .chain(token_chars)
            .find(|ch| self.word_ranges.iter().any(|range| range.contains(ch)))
        {
            return Err(ProfileError::DelimiterIsWord {
                id: self.id.clone(),
                ch,
            });
        }
        Ok(())
    }

    fn comment_tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.line_comment.iter().map(String::as_str).collect();
        if let Some((start, end)) = &self.block_comment {
            tokens.push(start);
            tokens.push(end);
        }
        tokens
    }

    fn compile_pattern(&self) -> Result<DelimiterPattern, ProfileError> {
        let mut singles = [0_u8; 4];
        let mut tokens: Vec<String> = self
            .openers
            .iter()
            .chain(&self.closers)
            .chain(&self.quotes)
            .map(|ch| ch.encode_utf8(&mut singles).to_owned())
            .collect();
        tokens.extend(self.comment_tokens().into_iter().map(str::to_owned));
        DelimiterPattern::compile(tokens.iter().map(String::as_str))
            .map_err(|err| ProfileError::pattern(self.id.clone(), err.to_string()))
    }
}
