//! Behaviour-driven development (BDD) step definitions for weft-scan scenarios.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::{
    BoundaryScanner, LanguageProfile, PLAIN_TEXT, PairMatcher, Position, ScanError, ScanResult,
    TextDocument,
};

// =============================================================================
// Test World
// =============================================================================

/// State shared across BDD steps.
struct TestWorld {
    /// Profile for the current language.
    profile: LanguageProfile,
    /// Document under test.
    document: TextDocument,
    /// Outcome of the last query, rendered for comparison.
    outcome: Option<ScanResult<String>>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self {
            profile: LanguageProfile::for_language(PLAIN_TEXT),
            document: TextDocument::default(),
            outcome: None,
        }
    }
}

impl TestWorld {
    fn record(&mut self, outcome: ScanResult<String>) {
        self.outcome = Some(outcome);
    }

    fn outcome(&self) -> &ScanResult<String> {
        self.outcome
            .as_ref()
            .unwrap_or_else(|| panic!("a query step should have run"))
    }
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

// =============================================================================
// Given Steps
// =============================================================================

/// Strips surrounding double quotes from a string if present.
fn strip_quotes(s: &str) -> &str {
    s.trim_matches('"')
}

#[given("language {language}")]
fn given_language(world: &RefCell<TestWorld>, language: String) {
    world.borrow_mut().profile = LanguageProfile::for_language(strip_quotes(&language));
}

#[given("the document {text}")]
fn given_document(world: &RefCell<TestWorld>, text: String) {
    let source = strip_quotes(&text).replace("\\n", "\n");
    world.borrow_mut().document = TextDocument::new(&source);
}

// =============================================================================
// When Steps
// =============================================================================

#[when("matching right from line {line} column {column}")]
fn when_match_right(world: &RefCell<TestWorld>, line: usize, column: usize) {
    let mut w = world.borrow_mut();
    let matcher = PairMatcher::new(&w.profile);
    let outcome = matcher
        .match_right(&w.document, Position::new(line, column))
        .map(|pos| pos.to_string());
    w.record(outcome);
}

#[when("matching left from line {line} column {column}")]
fn when_match_left(world: &RefCell<TestWorld>, line: usize, column: usize) {
    let mut w = world.borrow_mut();
    let matcher = PairMatcher::new(&w.profile);
    let outcome = matcher
        .match_left(&w.document, Position::new(line, column))
        .map(|pos| pos.to_string());
    w.record(outcome);
}

#[when("selecting the enclosing range at line {line} column {column}")]
fn when_enclosing_range(world: &RefCell<TestWorld>, line: usize, column: usize) {
    let mut w = world.borrow_mut();
    let matcher = PairMatcher::new(&w.profile);
    let outcome = matcher
        .enclosing_range(&w.document, Position::new(line, column))
        .map(|range| range.to_string());
    w.record(outcome);
}

#[when("moving one subword right from line {line} column {column}")]
fn when_subword_right(world: &RefCell<TestWorld>, line: usize, column: usize) {
    let mut w = world.borrow_mut();
    let scanner = BoundaryScanner::new(&w.profile);
    let outcome = scanner
        .subword_boundary_right(&w.document, Position::new(line, column))
        .map(|pos| pos.to_string());
    w.record(outcome);
}

#[when("moving one expression right from line {line} column {column}")]
fn when_expression_right(world: &RefCell<TestWorld>, line: usize, column: usize) {
    let mut w = world.borrow_mut();
    let scanner = BoundaryScanner::new(&w.profile);
    let outcome = scanner
        .expression_boundary_right(&w.document, Position::new(line, column))
        .map(|pos| pos.to_string());
    w.record(outcome);
}

#[when("smart deleting left from line {line} column {column}")]
fn when_smart_delete_left(world: &RefCell<TestWorld>, line: usize, column: usize) {
    let mut w = world.borrow_mut();
    let scanner = BoundaryScanner::new(&w.profile);
    let outcome = scanner
        .smart_delete_left(&w.document, Position::new(line, column))
        .map(|pos| pos.to_string());
    w.record(outcome);
}

// =============================================================================
// Then Steps
// =============================================================================

#[then("the result is {expected}")]
fn then_result_is(world: &RefCell<TestWorld>, expected: String) {
    let w = world.borrow();
    assert_eq!(
        w.outcome().as_deref(),
        Ok(strip_quotes(&expected)),
        "unexpected query outcome"
    );
}

#[then("the scan reports not found")]
fn then_not_found(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    assert_eq!(w.outcome(), &Err(ScanError::NotFound));
}

#[then("the scan reports malformed delimiters")]
fn then_malformed(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    assert!(
        matches!(w.outcome(), Err(ScanError::Malformed { .. })),
        "Expected malformed delimiters, got: {:?}",
        w.outcome()
    );
}

// =============================================================================
// Scenario Bindings
// =============================================================================

#[scenario(
    path = "tests/features/weft_scan.feature",
    name = "Matching an opening bracket finds its partner"
)]
fn match_opening_bracket(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/weft_scan.feature",
    name = "Matching a closing bracket finds its opener"
)]
fn match_closing_bracket(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/weft_scan.feature",
    name = "Selecting inside the enclosing brackets"
)]
fn select_enclosing_brackets(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/weft_scan.feature",
    name = "Brackets inside strings are ignored"
)]
fn brackets_in_strings(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/weft_scan.feature",
    name = "Brackets inside line comments are ignored"
)]
fn brackets_in_line_comments(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/weft_scan.feature",
    name = "Pairs may span several lines"
)]
fn multiline_pairs(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/weft_scan.feature",
    name = "Mismatched delimiters are reported"
)]
fn mismatched_delimiters(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/weft_scan.feature",
    name = "Unknown languages fall back to plain text"
)]
fn unknown_language_fallback(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/weft_scan.feature",
    name = "Hash comments hide brackets in Python"
)]
fn python_hash_comments(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/weft_scan.feature",
    name = "Subword movement splits acronyms"
)]
fn subword_acronyms(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/weft_scan.feature",
    name = "Expression movement skips a whole call"
)]
fn expression_skips_call(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/weft_scan.feature",
    name = "Smart delete inside a blank run removes only the blanks"
)]
fn smart_delete_blank_run(world: RefCell<TestWorld>) {
    let _ = world;
}
