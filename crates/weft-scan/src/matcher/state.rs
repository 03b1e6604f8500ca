//! The per-scan nesting state machine.

use crate::classify::{CharClass, Token, is_escaped};

/// Direction a scan walks the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// Depth at which a scan stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    /// The partner of the delimiter the scan starts on.
    Partner,
    /// The first delimiter left unmatched, i.e. the enclosing opener.
    Enclosing,
}

impl Target {
    const fn depth(self) -> isize {
        match self {
            Self::Partner => 0,
            Self::Enclosing => -1,
        }
    }
}

/// Outcome of feeding one token to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Continue,
    Found,
}

/// Nesting state of one scan. Lives only for the duration of that scan.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScanState {
    depth: isize,
    quote: Option<char>,
    in_block_comment: bool,
    direction: Direction,
    target: Target,
    block_comments: bool,
}

impl ScanState {
    pub(crate) const fn new(direction: Direction, target: Target, block_comments: bool) -> Self {
        Self {
            depth: 0,
            quote: None,
            in_block_comment: false,
            direction,
            target,
            block_comments,
        }
    }

    #[cfg(test)]
    pub(crate) const fn depth(&self) -> isize {
        self.depth
    }

    /// Feeds one token in scan order. `text` is the token's line, used for
    /// escape detection.
    pub(crate) fn step(&mut self, token: &Token, text: &str) -> Step {
        if self.in_block_comment {
            if token.class == self.leaving_block() {
                self.in_block_comment = false;
            }
            return Step::Continue;
        }

        if let Some(open) = self.quote {
            if token.class == CharClass::Quote
                && token.ch == open
                && !is_escaped(text, token.column)
            {
                self.quote = None;
                return self.descend();
            }
            return Step::Continue;
        }

        match token.class {
            CharClass::Quote if !is_escaped(text, token.column) => {
                self.quote = Some(token.ch);
                self.depth += 1;
                Step::Continue
            }
            CharClass::Opener => match self.direction {
                Direction::Forward => self.ascend(),
                Direction::Backward => self.descend(),
            },
            CharClass::Closer => match self.direction {
                Direction::Forward => self.descend(),
                Direction::Backward => self.ascend(),
            },
            class if self.block_comments && class == self.entering_block() => {
                self.in_block_comment = true;
                Step::Continue
            }
            _ => Step::Continue,
        }
    }

    const fn ascend(&mut self) -> Step {
        self.depth += 1;
        Step::Continue
    }

    fn descend(&mut self) -> Step {
        self.depth -= 1;
        if self.depth == self.target.depth() {
            Step::Found
        } else {
            Step::Continue
        }
    }

    const fn entering_block(&self) -> CharClass {
        match self.direction {
            Direction::Forward => CharClass::BlockCommentStart,
            Direction::Backward => CharClass::BlockCommentEnd,
        }
    }

    const fn leaving_block(&self) -> CharClass {
        match self.direction {
            Direction::Forward => CharClass::BlockCommentEnd,
            Direction::Backward => CharClass::BlockCommentStart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LanguageProfile;

    fn run(text: &str, direction: Direction, target: Target) -> Vec<Step> {
        let profile = LanguageProfile::for_language("c");
        let mut tokens = profile.line_tokens(text);
        if direction == Direction::Backward {
            tokens.reverse();
        }
        let mut state = ScanState::new(direction, target, true);
        tokens.iter().map(|token| state.step(token, text)).collect()
    }

    #[test]
    fn forward_partner_found_on_return_to_zero() {
        let steps = run("(a[b]c)", Direction::Forward, Target::Partner);
        assert_eq!(
            steps,
            [Step::Continue, Step::Continue, Step::Continue, Step::Found]
        );
    }

    #[test]
    fn backward_enclosing_stops_on_unmatched_opener() {
        let steps = run("x(a, [b]", Direction::Backward, Target::Enclosing);
        assert_eq!(steps.last(), Some(&Step::Found));
        assert_eq!(steps.iter().filter(|s| **s == Step::Found).count(), 1);
    }

    #[test]
    fn quoted_brackets_do_not_count() {
        let steps = run(r#"("(" ")")"#, Direction::Forward, Target::Partner);
        assert_eq!(steps.iter().position(|s| *s == Step::Found), Some(7));
    }

    #[test]
    fn escaped_quote_keeps_quote_open() {
        let text = r#""a\"b""#;
        let profile = LanguageProfile::for_language("c");
        let tokens = profile.line_tokens(text);
        let mut state = ScanState::new(Direction::Forward, Target::Partner, true);
        let steps: Vec<_> = tokens.iter().map(|t| state.step(t, text)).collect();
        assert_eq!(steps, [Step::Continue, Step::Continue, Step::Found]);
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn block_comment_hides_delimiters_when_enabled() {
        let text = "( /* ) */ )";
        let profile = LanguageProfile::for_language("c");
        let tokens = profile.line_tokens(text);

        let mut on = ScanState::new(Direction::Forward, Target::Partner, true);
        let found_on = tokens
            .iter()
            .position(|t| on.step(t, text) == Step::Found)
            .and_then(|i| tokens.get(i))
            .map(|t| t.column);
        assert_eq!(found_on, Some(10));

        let mut off = ScanState::new(Direction::Forward, Target::Partner, false);
        let found_off = tokens
            .iter()
            .position(|t| off.step(t, text) == Step::Found)
            .and_then(|i| tokens.get(i))
            .map(|t| t.column);
        assert_eq!(found_off, Some(5));
    }
}
