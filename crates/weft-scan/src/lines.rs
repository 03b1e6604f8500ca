//! Line-oriented queries: paragraphs, indentation, and horizontal
//! whitespace.
//!
//! None of these consult a language profile.

use crate::document::{DocumentView, resolve};
use crate::error::{ScanError, ScanResult};
use crate::position::{Position, Range};

fn is_blank_line<D: DocumentView + ?Sized>(doc: &D, index: usize) -> bool {
    doc.line(index).is_none_or(|text| text.trim().is_empty())
}

fn indentation(text: &str) -> usize {
    text.len() - text.trim_start_matches([' ', '\t']).len()
}

fn clamp_line<D: DocumentView + ?Sized>(doc: &D, line: usize) -> usize {
    line.min(doc.line_count().saturating_sub(1))
}

/// Returns the start of the paragraph before the one at `pos`.
///
/// Paragraphs are separated by blank lines. From the first paragraph the
/// result is line 0.
#[must_use]
pub fn previous_paragraph<D: DocumentView + ?Sized>(doc: &D, pos: Position) -> Position {
    let mut line = clamp_line(doc, pos.line);
    if line > 0 {
        line -= 1;
        while line > 0 && is_blank_line(doc, line) {
            line -= 1;
        }
        while line > 0 {
            line -= 1;
            if is_blank_line(doc, line) {
                line += 1;
                break;
            }
        }
    }
    Position::new(line, 0)
}

/// Returns the start of the paragraph after the one at `pos`.
///
/// Paragraphs are separated by blank lines. From the last paragraph the
/// result is the start of the last line.
#[must_use]
pub fn next_paragraph<D: DocumentView + ?Sized>(doc: &D, pos: Position) -> Position {
    let last = doc.line_count().saturating_sub(1);
    let mut line = clamp_line(doc, pos.line);
    let mut in_gap = is_blank_line(doc, line);
    while line < last {
        line += 1;
        let blank = is_blank_line(doc, line);
        if in_gap && !blank {
            break;
        }
        in_gap |= blank;
    }
    Position::new(line, 0)
}

/// Returns the first non-blank column of `pos`'s line, or column 0 when
/// `pos` is already there.
///
/// # Errors
///
/// [`ScanError::NotFound`] when the line does not exist.
pub fn smart_home<D: DocumentView + ?Sized>(doc: &D, pos: Position) -> ScanResult<Position> {
    let (text, at) = resolve(doc, pos).ok_or(ScanError::NotFound)?;
    let indent = indentation(&text);
    let column = if at.column == indent { 0 } else { indent };
    Ok(Position::new(at.line, column))
}

/// Returns the whole-line range of the block around `pos` whose lines are
/// indented at least as deeply as `pos`'s line.
///
/// Blank lines inside the block belong to it; blank lines at its edges do
/// not. A blank line forms a block of its own.
///
/// # Errors
///
/// [`ScanError::NotFound`] when the line does not exist.
pub fn indentation_block<D: DocumentView + ?Sized>(doc: &D, pos: Position) -> ScanResult<Range> {
    let (text, at) = resolve(doc, pos).ok_or(ScanError::NotFound)?;
    let line_range = |first: usize, last: usize| {
        let end = doc.line(last).map_or(0, |text| text.len());
        Range::new(Position::new(first, 0), Position::new(last, end))
    };
    if text.trim().is_empty() {
        return Ok(line_range(at.line, at.line));
    }
    let depth = indentation(&text);
    let belongs = |index: usize| {
        doc.line(index)
            .map(|text| text.trim().is_empty() || indentation(&text) >= depth)
    };

    let mut first = at.line;
    let mut probe = at.line;
    while let Some(above) = probe.checked_sub(1) {
        if belongs(above) != Some(true) {
            break;
        }
        probe = above;
        if !is_blank_line(doc, above) {
            first = above;
        }
    }

    let mut last = at.line;
    let mut probe = at.line + 1;
    while belongs(probe) == Some(true) {
        if !is_blank_line(doc, probe) {
            last = probe;
        }
        probe += 1;
    }

    Ok(line_range(first, last))
}

/// Returns the run of spaces and tabs around `pos` on its line.
///
/// The range is empty when `pos` touches no horizontal whitespace.
///
/// # Errors
///
/// [`ScanError::NotFound`] when the line does not exist.
pub fn whitespace_around<D: DocumentView + ?Sized>(doc: &D, pos: Position) -> ScanResult<Range> {
    let (text, at) = resolve(doc, pos).ok_or(ScanError::NotFound)?;
    let (before, after) = text.split_at(at.column);
    let start = before.trim_end_matches([' ', '\t']).len();
    let end = at.column + (after.len() - after.trim_start_matches([' ', '\t']).len());
    Ok(Range::new(
        Position::new(at.line, start),
        Position::new(at.line, end),
    ))
}
