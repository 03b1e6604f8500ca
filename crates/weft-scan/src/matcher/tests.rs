//! Unit tests for pair matching.

use rstest::{fixture, rstest};

use super::*;
use crate::document::TextDocument;

const SCENARIO: &str = "foo(bar(baz), [1,2,3])";

#[fixture]
fn typescript() -> LanguageProfile {
    LanguageProfile::for_language("typescript")
}

#[rstest]
#[case(3, 21)]
#[case(7, 11)]
#[case(14, 20)]
fn match_right_finds_closer(
    typescript: LanguageProfile,
    #[case] open: usize,
    #[case] close: usize,
) {
    let matcher = PairMatcher::new(&typescript);
    let doc = [SCENARIO];
    assert_eq!(
        matcher.match_right(&doc[..], Position::new(0, open)),
        Ok(Position::new(0, close))
    );
}

#[rstest]
#[case(22, 3)]
#[case(12, 7)]
#[case(21, 14)]
fn match_left_finds_opener(
    typescript: LanguageProfile,
    #[case] after_close: usize,
    #[case] open: usize,
) {
    let matcher = PairMatcher::new(&typescript);
    let doc = [SCENARIO];
    assert_eq!(
        matcher.match_left(&doc[..], Position::new(0, after_close)),
        Ok(Position::new(0, open))
    );
}

#[rstest]
#[case(0)]
#[case(4)]
#[case(11)]
fn match_right_rejects_non_openers(typescript: LanguageProfile, #[case] column: usize) {
    let matcher = PairMatcher::new(&typescript);
    let doc = [SCENARIO];
    assert_eq!(
        matcher.match_right(&doc[..], Position::new(0, column)),
        Err(ScanError::NotFound)
    );
}

#[rstest]
fn match_left_at_document_start_is_not_found(typescript: LanguageProfile) {
    let matcher = PairMatcher::new(&typescript);
    let doc = [")"];
    assert_eq!(
        matcher.match_left(&doc[..], Position::new(0, 0)),
        Err(ScanError::NotFound)
    );
}

#[rstest]
fn escaped_quote_is_skipped(typescript: LanguageProfile) {
    let matcher = PairMatcher::new(&typescript);
    let doc = [r#"x = "a\"b";"#];
    assert_eq!(
        matcher.match_right(&doc[..], Position::new(0, 4)),
        Ok(Position::new(0, 9))
    );
    assert_eq!(
        matcher.match_left(&doc[..], Position::new(0, 10)),
        Ok(Position::new(0, 4))
    );
}

#[rstest]
fn commented_opener_is_not_structure(typescript: LanguageProfile) {
    let matcher = PairMatcher::new(&typescript);
    let doc = ["x = (1); // (unmatched"];
    assert_eq!(
        matcher.match_left(&doc[..], Position::new(0, 7)),
        Ok(Position::new(0, 4))
    );
    assert_eq!(
        matcher.enclosing_range(&doc[..], Position::new(0, 8)),
        Err(ScanError::NotFound)
    );
}

#[rstest]
fn mismatched_kinds_are_malformed(typescript: LanguageProfile) {
    let matcher = PairMatcher::new(&typescript);
    let doc = ["(a]"];
    assert_eq!(
        matcher.match_right(&doc[..], Position::new(0, 0)),
        Err(ScanError::Malformed {
            open: Position::new(0, 0),
            close: Position::new(0, 2),
        })
    );
}

#[rstest]
fn unterminated_pair_is_not_found(typescript: LanguageProfile) {
    let matcher = PairMatcher::new(&typescript);
    let doc = TextDocument::new("f(a,\n  b");
    assert_eq!(
        matcher.match_right(&doc, Position::new(0, 1)),
        Err(ScanError::NotFound)
    );
}

#[rstest]
#[case(9, (8, 11))]
#[case(5, (4, 21))]
#[case(16, (15, 20))]
fn enclosing_range_finds_innermost_pair(
    typescript: LanguageProfile,
    #[case] column: usize,
    #[case] expected: (usize, usize),
) {
    let matcher = PairMatcher::new(&typescript);
    let doc = [SCENARIO];
    let range = matcher
        .enclosing_range(&doc[..], Position::new(0, column))
        .unwrap_or_else(|err| panic!("enclosing pair: {err}"));
    assert_eq!((range.start.column, range.end.column), expected);
}

#[rstest]
fn enclosing_range_steps_outward(typescript: LanguageProfile) {
    let matcher = PairMatcher::new(&typescript);
    let doc = ["([{}])"];
    let inner = matcher
        .enclosing_range(&doc[..], Position::new(0, 3))
        .unwrap_or_else(|err| panic!("innermost: {err}"));
    assert_eq!(inner, Range::new(Position::new(0, 3), Position::new(0, 3)));
    let outer = matcher
        .enclosing_range(&doc[..], Position::new(0, 2))
        .unwrap_or_else(|err| panic!("next pair out: {err}"));
    assert_eq!(outer, Range::new(Position::new(0, 2), Position::new(0, 4)));
}

#[rstest]
fn enclosing_prefers_quotes_then_brackets(typescript: LanguageProfile) {
    let matcher = PairMatcher::new(&typescript);
    let doc = [r#"call("a (b) c", d)"#];
    let pos = Position::new(0, 7);
    assert_eq!(
        matcher.enclosing_range(&doc[..], pos),
        Ok(Range::new(Position::new(0, 6), Position::new(0, 13)))
    );
    assert_eq!(
        matcher.enclosing_pair(&doc[..], pos),
        Ok(Range::new(Position::new(0, 5), Position::new(0, 14)))
    );
    assert_eq!(
        matcher.enclosing_brackets(&doc[..], pos),
        Ok(Range::new(Position::new(0, 5), Position::new(0, 17)))
    );
    assert_eq!(
        matcher.enclosing_quotes(&doc[..], Position::new(0, 16)),
        Err(ScanError::NotFound)
    );
}

#[rstest]
fn block_comments_hide_delimiters_across_lines(typescript: LanguageProfile) {
    let doc = TextDocument::new("f(a /* )\n  ) */, b)");
    let on = PairMatcher::new(&typescript);
    assert_eq!(
        on.match_right(&doc, Position::new(0, 1)),
        Ok(Position::new(1, 9))
    );
    let off = on.with_options(ScanOptions::default().with_block_comments(false));
    assert_eq!(
        off.match_right(&doc, Position::new(0, 1)),
        Ok(Position::new(0, 7))
    );
}

#[rstest]
fn line_budget_bounds_scans(typescript: LanguageProfile) {
    let doc = TextDocument::new("(\n\n\n\n)");
    let matcher = PairMatcher::new(&typescript)
        .with_options(ScanOptions::default().with_max_lines(Some(3)));
    assert_eq!(
        matcher.match_right(&doc, Position::new(0, 0)),
        Err(ScanError::NotFound)
    );
}

#[rstest]
fn columns_past_line_end_clamp(typescript: LanguageProfile) {
    let matcher = PairMatcher::new(&typescript);
    let doc = ["(x)"];
    assert_eq!(
        matcher.match_left(&doc[..], Position::new(0, 99)),
        Ok(Position::new(0, 0))
    );
}
