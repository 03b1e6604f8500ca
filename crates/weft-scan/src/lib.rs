//! Language-aware structural scanning for editor commands.
//!
//! This crate answers the questions structural editing commands ask about a
//! plain-text document:
//!
//! - **Pair matching** via [`PairMatcher`]: the partner of a bracket or quote,
//!   and the smallest pair enclosing a position (powers "jump to match",
//!   "select inside brackets", "select inside quotes")
//! - **Boundary detection** via [`BoundaryScanner`]: word, expression, and
//!   subword edges (powers structural cursor movement and smart delete)
//! - **Line queries** such as [`next_paragraph`], [`smart_home`], and
//!   [`indentation_block`]
//!
//! Every query is a pure function of a [`DocumentView`], a [`Position`], and a
//! [`LanguageProfile`]. Nothing is mutated; failure to find a target is a
//! [`ScanError`] value rather than a panic.
//!
//! # Supported Languages
//!
//! Built-in profiles cover C-family languages (`//` and `/* */` comments),
//! hash-comment languages (Python, YAML, shell), and Markdown. Unknown
//! language identifiers fall back to a plain-text profile. Custom profiles
//! are assembled with [`LanguageProfileBuilder`] and shared through a
//! [`ProfileRegistry`].
//!
//! # Coordinates
//!
//! Lines and columns are zero-based. Columns are byte offsets into the line's
//! UTF-8 text. Columns past the end of a line clamp to its length.
//!
//! # Example: Matching a Bracket
//!
//! ```
//! use weft_scan::{LanguageProfile, PairMatcher, Position, TextDocument};
//!
//! let doc = TextDocument::new("foo(bar(baz), [1,2,3])");
//! let profile = LanguageProfile::for_language("typescript");
//! let matcher = PairMatcher::new(&profile);
//!
//! let close = matcher.match_right(&doc, Position::new(0, 3))?;
//! assert_eq!(close, Position::new(0, 21));
//!
//! let inside = matcher.enclosing_range(&doc, Position::new(0, 9))?;
//! assert_eq!((inside.start.column, inside.end.column), (8, 11));
//! # Ok::<(), weft_scan::ScanError>(())
//! ```
//!
//! # Example: Word Movement
//!
//! ```
//! use weft_scan::{BoundaryScanner, LanguageProfile, Position};
//!
//! let profile = LanguageProfile::for_language("rust");
//! let scanner = BoundaryScanner::new(&profile);
//! let doc = ["let parseHTTPResponse = 1;"];
//!
//! let next = scanner.subword_boundary_right(&doc[..], Position::new(0, 4))?;
//! assert_eq!(next.column, 9);
//! # Ok::<(), weft_scan::ScanError>(())
//! ```

mod boundary;
mod classify;
mod cursor;
mod document;
mod error;
mod language;
mod lines;
mod matcher;
mod position;

pub use boundary::BoundaryScanner;
pub use classify::{CharClass, DelimiterPattern};
pub use document::{DocumentView, TextDocument};
pub use error::{ProfileError, ScanError, ScanResult};
pub use language::{
    BUILTIN_LANGUAGES, LanguageProfile, LanguageProfileBuilder, PLAIN_TEXT, ProfileRegistry,
    language_for_extension, language_for_path,
};
pub use lines::{
    indentation_block, next_paragraph, previous_paragraph, smart_home, whitespace_around,
};
pub use matcher::{PairMatcher, ScanOptions};
pub use position::{Position, Range};

#[cfg(test)]
mod tests;
