//! CLI argument definitions for the `weft` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Structural queries the CLI can answer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum Query {
    /// Partner of the closer or quote left of the cursor.
    MatchLeft,
    /// Partner of the opener or quote at the cursor.
    MatchRight,
    /// Interior of the smallest enclosing pair.
    EnclosingRange,
    /// Smallest enclosing pair, delimiters included.
    EnclosingPair,
    /// Interior of the smallest enclosing bracket pair.
    EnclosingBrackets,
    /// Interior of the enclosing quoted span.
    EnclosingQuotes,
    /// Next occurrence of `--char`, skipping nested spans.
    FindChar,
    /// Position just past the enclosing closer.
    TabOut,
    /// Top-level arguments of the enclosing bracket pair.
    ArgumentRanges,
    /// Start of the previous word.
    WordBoundaryLeft,
    /// Start of the next word.
    WordBoundaryRight,
    /// End of the previous word.
    WordEdgeLeft,
    /// End of the next word.
    WordEdgeRight,
    /// Start of the previous expression.
    ExpressionBoundaryLeft,
    /// End of the next expression.
    ExpressionBoundaryRight,
    /// Previous subword boundary.
    SubwordBoundaryLeft,
    /// Next subword boundary.
    SubwordBoundaryRight,
    /// Where a smart backward delete stops.
    SmartDeleteLeft,
    /// Where a smart forward delete stops.
    SmartDeleteRight,
    /// Start of the previous paragraph.
    PreviousParagraph,
    /// Start of the next paragraph.
    NextParagraph,
    /// First non-blank column, or column zero.
    SmartHome,
    /// Lines sharing the cursor line's indentation.
    IndentationBlock,
    /// Whitespace run around the cursor.
    WhitespaceAround,
}

/// Command-line interface for the Weft structural scanner.
#[derive(Parser, Debug)]
#[command(name = "weft", version)]
pub(crate) struct Cli {
    /// The query to run.
    #[arg(value_enum, value_name = "QUERY")]
    pub(crate) query: Query,
    /// File to scan.
    #[arg(value_name = "FILE")]
    pub(crate) file: PathBuf,
    /// Zero-based cursor line.
    #[arg(long, default_value_t = 0)]
    pub(crate) line: usize,
    /// Zero-based cursor column, in bytes.
    #[arg(long, default_value_t = 0)]
    pub(crate) column: usize,
    /// Language identifier; detected from the file extension when omitted.
    #[arg(long)]
    pub(crate) language: Option<String>,
    /// Character searched for by `find-char`.
    #[arg(long = "char", value_name = "CHAR")]
    pub(crate) target: Option<char>,
    /// Treat `/* ... */` comment tokens as ordinary text for this query.
    #[arg(long)]
    pub(crate) no_block_comments: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("match-right", Query::MatchRight)]
    #[case("expression-boundary-left", Query::ExpressionBoundaryLeft)]
    #[case("whitespace-around", Query::WhitespaceAround)]
    fn queries_use_kebab_case(#[case] name: &str, #[case] expected: Query) {
        let cli = Cli::try_parse_from(["weft", name, "file.rs"])
            .unwrap_or_else(|err| panic!("parse: {err}"));
        assert_eq!(cli.query, expected);
    }

    #[test]
    fn cursor_and_language_flags_parse() {
        let cli = Cli::try_parse_from([
            "weft",
            "find-char",
            "src/lib.rs",
            "--line",
            "4",
            "--column",
            "2",
            "--language",
            "python",
            "--char",
            ",",
        ])
        .unwrap_or_else(|err| panic!("parse: {err}"));
        assert_eq!((cli.line, cli.column), (4, 2));
        assert_eq!(cli.language.as_deref(), Some("python"));
        assert_eq!(cli.target, Some(','));
        assert!(!cli.no_block_comments);
    }

    #[test]
    fn block_comment_switch_parses_before_the_query() {
        let cli = Cli::try_parse_from(["weft", "--no-block-comments", "match-right", "a.c"])
            .unwrap_or_else(|err| panic!("parse: {err}"));
        assert!(cli.no_block_comments);
        assert_eq!(cli.query, Query::MatchRight);
    }

    #[test]
    fn unknown_queries_are_rejected() {
        assert!(Cli::try_parse_from(["weft", "jump", "file.rs"]).is_err());
    }
}
