//! Read-only document access.
//!
//! The host editor owns the text. Scanners borrow it through
//! [`DocumentView`] for the duration of one query and never mutate it.

use std::borrow::Cow;

use crate::position::Position;

/// Line-addressed, read-only view over a document.
///
/// Line text excludes the line terminator.
pub trait DocumentView {
    /// Returns the number of lines in the document.
    fn line_count(&self) -> usize;

    /// Returns the text of line `index`, or `None` when out of range.
    fn line(&self, index: usize) -> Option<Cow<'_, str>>;
}

impl<T: DocumentView + ?Sized> DocumentView for &T {
    fn line_count(&self) -> usize {
        (**self).line_count()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        (**self).line(index)
    }
}

impl DocumentView for [String] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.get(index).map(|text| Cow::Borrowed(text.as_str()))
    }
}

impl DocumentView for [&str] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.get(index).map(|text| Cow::Borrowed(*text))
    }
}

impl DocumentView for Vec<String> {
    fn line_count(&self) -> usize {
        self.as_slice().line_count()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.as_slice().line(index)
    }
}

impl DocumentView for Vec<&str> {
    fn line_count(&self) -> usize {
        self.as_slice().line_count()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.as_slice().line(index)
    }
}

/// An owned document split into lines.
///
/// Both `\n` and `\r\n` terminate a line. A trailing terminator yields a
/// final empty line, matching how editors present such files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    lines: Vec<String>,
}

impl TextDocument {
    /// Splits `text` into lines.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_owned())
            .collect();
        Self { lines }
    }

    /// Returns the lines of the document.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl DocumentView for TextDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.lines.line(index)
    }
}

/// Snaps `column` onto `text`: past-the-end clamps to the line length and a
/// column inside a multi-byte character floors to that character's start.
pub(crate) fn snap_column(text: &str, column: usize) -> usize {
    let mut snapped = column.min(text.len());
    while !text.is_char_boundary(snapped) {
        snapped = snapped.saturating_sub(1);
    }
    snapped
}

/// Loads the line under `pos` and snaps the position onto it.
///
/// Returns `None` when the line does not exist.
pub(crate) fn resolve<D: DocumentView + ?Sized>(
    doc: &D,
    pos: Position,
) -> Option<(Cow<'_, str>, Position)> {
    let text = doc.line(pos.line)?;
    let column = snap_column(&text, pos.column);
    Some((text, Position::new(pos.line, column)))
}

/// Returns the character starting at `column`.
pub(crate) fn char_at(text: &str, column: usize) -> Option<char> {
    text.get(column..)?.chars().next()
}

/// Returns the character ending at `column` together with its start column.
pub(crate) fn char_before(text: &str, column: usize) -> Option<(usize, char)> {
    text.get(..column)?.char_indices().next_back()
}
