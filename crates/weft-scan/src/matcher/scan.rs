//! Line-by-line driver feeding delimiter tokens to [`ScanState`].

use tracing::trace;

use crate::classify::{Token, line_comment_column};
use crate::document::DocumentView;
use crate::error::{ScanError, ScanResult};
use crate::language::LanguageProfile;
use crate::position::Position;

use super::ScanOptions;
use super::state::{Direction, ScanState, Step, Target};

/// A delimiter token that satisfied a scan, with its document position.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Hit {
    pub(crate) position: Position,
    pub(crate) token: Token,
}

/// Walks `doc` from `start` in `direction` until the state machine reaches
/// `target`.
///
/// On the first line a forward scan sees tokens at or after `start`, a
/// backward scan only tokens strictly before it. When `start` lies inside a
/// line comment the scan never leaves that comment.
pub(crate) fn scan<D: DocumentView + ?Sized>(
    profile: &LanguageProfile,
    options: ScanOptions,
    doc: &D,
    start: Position,
    direction: Direction,
    target: Target,
) -> ScanResult<Hit> {
    let mut state = ScanState::new(direction, target, options.block_comments);
    let budget = options.max_lines.unwrap_or(usize::MAX);

    let lines: Box<dyn Iterator<Item = usize>> = match direction {
        Direction::Forward => Box::new(start.line..doc.line_count()),
        Direction::Backward => Box::new((0..=start.line).rev()),
    };

    for index in lines.take(budget) {
        let Some(text) = doc.line(index) else {
            break;
        };
        let tokens = profile.line_tokens(&text);
        let first = index == start.line;
        let comment = line_comment_column(&tokens, &text);
        // A scan starting inside a line comment stays within that comment.
        let confined = comment.filter(|&column| first && start.column > column);
        let cut = if confined.is_some() {
            usize::MAX
        } else {
            comment.unwrap_or(usize::MAX)
        };

        let visible = |token: &&Token| {
            token.column < cut
                && confined.is_none_or(|column| token.column > column)
                && (!first
                    || match direction {
                        Direction::Forward => token.column >= start.column,
                        Direction::Backward => token.column < start.column,
                    })
        };

        let mut ordered: Vec<&Token> = tokens.iter().filter(visible).collect();
        if direction == Direction::Backward {
            ordered.reverse();
        }
        for token in ordered {
            if state.step(token, &text) == Step::Found {
                return Ok(Hit {
                    position: Position::new(index, token.column),
                    token: *token,
                });
            }
        }
        if confined.is_some() {
            break;
        }
    }

    trace!(?direction, %start, "scan exhausted");
    Err(ScanError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextDocument;

    fn forward_partner(language: &str, text: &str, start: Position) -> ScanResult<Position> {
        let profile = LanguageProfile::for_language(language);
        let doc = TextDocument::new(text);
        scan(
            &profile,
            ScanOptions::default(),
            &doc,
            start,
            Direction::Forward,
            Target::Partner,
        )
        .map(|hit| hit.position)
    }

    #[test]
    fn crosses_lines_forward() {
        let found = forward_partner("rust", "fn f() {\n    g();\n}", Position::new(0, 7));
        assert_eq!(found, Ok(Position::new(2, 0)));
    }

    #[test]
    fn commented_closer_is_skipped() {
        let found = forward_partner("c", "f(a, // )\n  b)", Position::new(0, 1));
        assert_eq!(found, Ok(Position::new(1, 3)));
    }

    #[test]
    fn comment_token_inside_string_does_not_cut() {
        let found = forward_partner("c", r#"f("http://x")"#, Position::new(0, 1));
        assert_eq!(found, Ok(Position::new(0, 12)));
    }

    #[test]
    fn block_comment_spanning_lines_hides_delimiters() {
        let found = forward_partner("c", "x = (a /* )\n ) */\n);", Position::new(0, 4));
        assert_eq!(found, Ok(Position::new(2, 0)));
    }

    #[test]
    fn hash_comment_applies_only_to_its_languages() {
        let text = "(a # )\n)";
        assert_eq!(
            forward_partner("python", text, Position::new(0, 0)),
            Ok(Position::new(1, 0))
        );
        assert_eq!(
            forward_partner("c", text, Position::new(0, 0)),
            Ok(Position::new(0, 5))
        );
    }

    #[test]
    fn scan_starting_inside_a_line_comment_stays_there() {
        let text = "f(a, // don't\n  'c')";
        assert_eq!(
            forward_partner("javascript", text, Position::new(0, 11)),
            Err(ScanError::NotFound)
        );
        assert_eq!(
            forward_partner("javascript", "// (a) b", Position::new(0, 3)),
            Ok(Position::new(0, 5))
        );
    }

    #[test]
    fn backward_scan_inside_a_comment_ignores_the_code_before_it() {
        let profile = LanguageProfile::for_language("c");
        let doc = TextDocument::new("(x // y)");
        let found = scan(
            &profile,
            ScanOptions::default(),
            &doc,
            Position::new(0, 8),
            Direction::Backward,
            Target::Partner,
        );
        assert!(matches!(found, Err(ScanError::NotFound)));
    }

    #[test]
    fn line_budget_limits_the_scan() {
        let profile = LanguageProfile::plain();
        let doc = TextDocument::new("(\n\n\n)");
        let options = ScanOptions::default().with_max_lines(Some(2));
        let result = scan(
            &profile,
            options,
            &doc,
            Position::new(0, 0),
            Direction::Forward,
            Target::Partner,
        );
        assert!(matches!(result, Err(ScanError::NotFound)));
    }
}
