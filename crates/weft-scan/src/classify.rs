//! Delimiter classification.
//!
//! A [`DelimiterPattern`] finds every opener, closer, quote, and comment
//! token of a line in one left-to-right pass. Scanners then work on the
//! resulting [`Token`] list instead of walking ordinary text.

use regex::Regex;

/// Semantic class of a character or short token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Part of an identifier-like run.
    Word,
    /// Begins a nested structure, such as `(`.
    Opener,
    /// Ends a nested structure, such as `)`.
    Closer,
    /// Toggles string-literal mode.
    Quote,
    /// Starts a comment running to the end of the line.
    LineCommentStart,
    /// Starts a block comment.
    BlockCommentStart,
    /// Ends a block comment.
    BlockCommentEnd,
    /// Anything else.
    Other,
}

impl CharClass {
    /// Returns whether the class is a bracket or quote delimiter.
    #[must_use]
    pub const fn is_delimiter(self) -> bool {
        matches!(self, Self::Opener | Self::Closer | Self::Quote)
    }
}

/// A single compiled pattern matching any delimiter token of a language.
#[derive(Debug, Clone)]
pub struct DelimiterPattern {
    regex: Option<Regex>,
}

impl DelimiterPattern {
    /// A pattern that matches nothing.
    pub(crate) const fn empty() -> Self {
        Self { regex: None }
    }

    /// Compiles a pattern from literal tokens.
    ///
    /// Tokens are tried longest first so `//` wins over a shorter prefix.
    pub(crate) fn compile<'a>(
        tokens: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, regex::Error> {
        let mut literals: Vec<&str> = tokens.into_iter().filter(|t| !t.is_empty()).collect();
        literals.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        literals.dedup();
        // An empty alternation would match everywhere.
        if literals.is_empty() {
            return Ok(Self::empty());
        }
        let alternation = literals
            .iter()
            .map(|literal| regex::escape(literal))
            .collect::<Vec<_>>()
            .join("|");
        Ok(Self {
            regex: Some(Regex::new(&alternation)?),
        })
    }

    /// Returns the pattern source, empty when the language has no
    /// delimiters at all.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_ref().map_or("", Regex::as_str)
    }

    /// Yields `(column, token)` for every match in `text`, in document order.
    pub fn find_iter<'t>(&self, text: &'t str) -> impl Iterator<Item = (usize, &'t str)> {
        self.regex
            .iter()
            .flat_map(move |regex| regex.find_iter(text))
            .map(|m| (m.start(), m.as_str()))
    }
}

/// A delimiter occurrence on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) column: usize,
    pub(crate) len: usize,
    pub(crate) class: CharClass,
    /// First character of the token; identifies the quote or bracket kind.
    pub(crate) ch: char,
}

/// Returns whether the character at `column` is escaped, that is preceded by
/// an odd run of backslashes on the same line.
pub(crate) fn is_escaped(text: &str, column: usize) -> bool {
    text.as_bytes()
        .get(..column)
        .map(|before| before.iter().rev().take_while(|&&b| b == b'\\').count())
        .is_some_and(|run| run & 1 == 1)
}

/// Finds where a line comment begins, judged from the start of the line.
///
/// Quote state is tracked locally, so a `//` inside `"http://"` does not
/// count. Block comments opened and closed on this line hide their
/// contents too.
pub(crate) fn line_comment_column(tokens: &[Token], text: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut in_block = false;
    for token in tokens {
        if in_block {
            in_block = token.class != CharClass::BlockCommentEnd;
            continue;
        }
        if let Some(open) = quote {
            if token.class == CharClass::Quote
                && token.ch == open
                && !is_escaped(text, token.column)
            {
                quote = None;
            }
            continue;
        }
        match token.class {
            CharClass::Quote if !is_escaped(text, token.column) => quote = Some(token.ch),
            CharClass::BlockCommentStart => in_block = true,
            CharClass::LineCommentStart => return Some(token.column),
            _ => {}
        }
    }
    None
}

/// Returns the quote still open at `column`, judged from the start of the
/// line, as `(quote_column, quote_char)`.
pub(crate) fn open_quote_at(tokens: &[Token], text: &str, column: usize) -> Option<(usize, char)> {
    let mut open: Option<(usize, char)> = None;
    let mut in_block = false;
    for token in tokens.iter().take_while(|t| t.column < column) {
        if in_block {
            in_block = token.class != CharClass::BlockCommentEnd;
            continue;
        }
        match open {
            Some((_, q)) => {
                if token.class == CharClass::Quote
                    && token.ch == q
                    && !is_escaped(text, token.column)
                {
                    open = None;
                }
            }
            None => match token.class {
                CharClass::Quote if !is_escaped(text, token.column) => {
                    open = Some((token.column, token.ch));
                }
                CharClass::BlockCommentStart => in_block = true,
                CharClass::LineCommentStart => return None,
                _ => {}
            },
        }
    }
    open
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"a\"b"#, 2, true)]
    #[case(r#"a\\"b"#, 3, false)]
    #[case(r#"a\\\"b"#, 4, true)]
    #[case(r#""x""#, 0, false)]
    fn escaping_counts_backslash_runs(
        #[case] text: &str,
        #[case] column: usize,
        #[case] escaped: bool,
    ) {
        assert_eq!(is_escaped(text, column), escaped);
    }

    #[test]
    fn pattern_prefers_longest_token() {
        let pattern = DelimiterPattern::compile(["/", "//", "("])
            .unwrap_or_else(|err| panic!("compile: {err}"));
        let found: Vec<_> = pattern.find_iter("a // (").collect();
        assert_eq!(found, vec![(2, "//"), (5, "(")]);
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        let pattern = DelimiterPattern::compile(std::iter::empty::<&str>())
            .unwrap_or_else(|err| panic!("compile: {err}"));
        assert_eq!(pattern.find_iter("anything (at) all").count(), 0);
        assert_eq!(pattern.as_str(), "");
    }
}
