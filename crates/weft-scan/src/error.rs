//! Error types for scanning and profile construction.
//!
//! Scans never panic: running off the document or meeting contradictory
//! nesting is reported as a [`ScanError`] value the caller is expected to
//! check. Profile construction reports invalid tables as [`ProfileError`].

use thiserror::Error;

use crate::position::Position;

/// Negative outcomes of a structural scan.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The scan reached a document edge (or its line budget) without
    /// satisfying its target.
    #[error("no structural match found")]
    NotFound,

    /// The scan found a partner whose kind does not pair with the starting
    /// delimiter, such as `(` closed by `]`.
    #[error("mismatched delimiters at {open} and {close}")]
    Malformed {
        /// Position of the opening side.
        open: Position,
        /// Position of the closing side.
        close: Position,
    },
}

impl ScanError {
    /// Creates a malformed-nesting error with the endpoints in document order.
    #[must_use]
    pub fn malformed(a: Position, b: Position) -> Self {
        let (open, close) = if a <= b { (a, b) } else { (b, a) };
        Self::Malformed { open, close }
    }

    /// Returns whether this error is the plain [`ScanError::NotFound`] outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Result alias used by every scanning query.
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors raised while building a [`crate::LanguageProfile`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    /// Openers and closers must be index-aligned pairs.
    #[error("profile '{id}' has {openers} openers but {closers} closers")]
    UnbalancedPairs {
        /// Identifier of the profile being built.
        id: String,
        /// Number of openers supplied.
        openers: usize,
        /// Number of closers supplied.
        closers: usize,
    },

    /// A delimiter character falls inside a configured word range.
    #[error("delimiter '{ch}' in profile '{id}' is also a word character")]
    DelimiterIsWord {
        /// Identifier of the profile being built.
        id: String,
        /// The offending character.
        ch: char,
    },

    /// The same character was given two delimiter roles.
    #[error("character '{ch}' is used for more than one delimiter role in profile '{id}'")]
    DuplicateDelimiter {
        /// Identifier of the profile being built.
        id: String,
        /// The offending character.
        ch: char,
    },

    /// A comment token was configured as an empty string.
    #[error("profile '{id}' has an empty comment token")]
    EmptyCommentToken {
        /// Identifier of the profile being built.
        id: String,
    },

    /// The delimiter pattern failed to compile.
    #[error("failed to compile delimiter pattern for '{id}': {message}")]
    Pattern {
        /// Identifier of the profile being built.
        id: String,
        /// Description of the failure.
        message: String,
    },
}

impl ProfileError {
    /// Creates a pattern compilation error.
    #[must_use]
    pub fn pattern(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            id: id.into(),
            message: message.into(),
        }
    }
}
