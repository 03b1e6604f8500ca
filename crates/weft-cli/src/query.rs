//! Dispatch of a parsed query onto the scanning library.

use serde::Serialize;
use tracing::debug;
use weft_scan::{
    BoundaryScanner, DocumentView, PairMatcher, Position, Range, ScanError, ScanResult,
    indentation_block, next_paragraph, previous_paragraph, smart_home, whitespace_around,
};

use crate::AppError;
use crate::cli::Query;

/// Outcome of one query as printed on stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum QueryResult {
    Position(Position),
    Range(Range),
    Ranges(Vec<Range>),
    NotFound,
    Malformed { open: Position, close: Position },
}

impl From<ScanError> for QueryResult {
    fn from(error: ScanError) -> Self {
        match error {
            ScanError::NotFound => Self::NotFound,
            ScanError::Malformed { open, close } => Self::Malformed { open, close },
        }
    }
}

fn settle<T>(result: ScanResult<T>, wrap: impl FnOnce(T) -> QueryResult) -> QueryResult {
    result.map_or_else(QueryResult::from, wrap)
}

/// Runs `query` at `pos`. `target` is the character `find-char` looks for.
pub(crate) fn execute<D: DocumentView + ?Sized>(
    query: Query,
    scanner: &BoundaryScanner<'_>,
    doc: &D,
    pos: Position,
    target: Option<char>,
) -> Result<QueryResult, AppError> {
    debug!(?query, %pos, "running query");
    let matcher: &PairMatcher<'_> = scanner.matcher();
    let result = match query {
        Query::MatchLeft => settle(matcher.match_left(doc, pos), QueryResult::Position),
        Query::MatchRight => settle(matcher.match_right(doc, pos), QueryResult::Position),
        Query::EnclosingRange => settle(matcher.enclosing_range(doc, pos), QueryResult::Range),
        Query::EnclosingPair => settle(matcher.enclosing_pair(doc, pos), QueryResult::Range),
        Query::EnclosingBrackets => {
            settle(matcher.enclosing_brackets(doc, pos), QueryResult::Range)
        }
        Query::EnclosingQuotes => settle(matcher.enclosing_quotes(doc, pos), QueryResult::Range),
        Query::FindChar => {
            let ch = target.ok_or(AppError::MissingChar)?;
            settle(matcher.find_char(doc, pos, ch), QueryResult::Position)
        }
        Query::TabOut => settle(matcher.tab_out(doc, pos), QueryResult::Position),
        Query::ArgumentRanges => settle(matcher.argument_ranges(doc, pos), QueryResult::Ranges),
        Query::WordBoundaryLeft => {
            settle(scanner.word_boundary_left(doc, pos), QueryResult::Position)
        }
        Query::WordBoundaryRight => {
            settle(scanner.word_boundary_right(doc, pos), QueryResult::Position)
        }
        Query::WordEdgeLeft => settle(scanner.word_edge_left(doc, pos), QueryResult::Position),
        Query::WordEdgeRight => settle(scanner.word_edge_right(doc, pos), QueryResult::Position),
        Query::ExpressionBoundaryLeft => settle(
            scanner.expression_boundary_left(doc, pos),
            QueryResult::Position,
        ),
        Query::ExpressionBoundaryRight => settle(
            scanner.expression_boundary_right(doc, pos),
            QueryResult::Position,
        ),
        Query::SubwordBoundaryLeft => settle(
            scanner.subword_boundary_left(doc, pos),
            QueryResult::Position,
        ),
        Query::SubwordBoundaryRight => settle(
            scanner.subword_boundary_right(doc, pos),
            QueryResult::Position,
        ),
        Query::SmartDeleteLeft => {
            settle(scanner.smart_delete_left(doc, pos), QueryResult::Position)
        }
        Query::SmartDeleteRight => {
            settle(scanner.smart_delete_right(doc, pos), QueryResult::Position)
        }
        Query::PreviousParagraph => QueryResult::Position(previous_paragraph(doc, pos)),
        Query::NextParagraph => QueryResult::Position(next_paragraph(doc, pos)),
        Query::SmartHome => settle(smart_home(doc, pos), QueryResult::Position),
        Query::IndentationBlock => settle(indentation_block(doc, pos), QueryResult::Range),
        Query::WhitespaceAround => settle(whitespace_around(doc, pos), QueryResult::Range),
    };
    Ok(result)
}
