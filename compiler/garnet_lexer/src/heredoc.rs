//! Heredoc openers and bodies.
//!
//! A heredoc is scanned in three steps:
//!
//! 1. `<<ID` yields `HeredocBegin` and pushes a [`Mode::HeredocFirstLine`]
//!    frame. Statements continue on the opener's line.
//! 2. The newline ending that line yields `NewLine` and swaps the frame for
//!    [`Mode::HeredocBody`].
//! 3. The body is decoded line by line until a line holding only the
//!    terminator. It yields `HeredocEnd` (or `HeredocPart` before each
//!    interpolation) and pops. The terminator line's newline is left for the
//!    parent frame.
//!
//! Two heredocs opened on one line read their bodies in stack order, so the
//! second body comes first. Squiggly bodies (`<<~`) are not dedented.

use garnet_lexer_core::char_class::{is_decimal, is_ident_continue, is_ident_start, is_whitespace};
use garnet_lexer_core::{ScanErrorKind, Span, TokenKind};

use crate::context::{Heredoc, Mode};
use crate::escape::Stop;
use crate::{Scanner, Token};

impl Scanner {
    /// Try to read a heredoc opener after `<<`.
    ///
    /// Returns `None` without consuming anything if no identifier follows.
    /// A quoted identifier without its closing quote on the same line, or an
    /// empty one, yields `Illegal`.
    pub(crate) fn heredoc_begin(&mut self, start: u32) -> Option<Token> {
        let mut indent = false;
        if matches!(self.cursor.current(), b'-' | b'~') {
            let next = self.cursor.peek_byte(1);
            if !(is_ident_start(next) || is_decimal(next) || next == b'\'' || next == b'"') {
                return None;
            }
            indent = true;
            self.cursor.advance();
        }

        let (term, raw) = match self.cursor.current() {
            quote @ (b'\'' | b'"') => {
                self.cursor.advance();
                let term_start = self.cursor.pos();
                self.cursor.eat_while(|b| b != quote && b != b'\n');
                let term = Span::new(term_start, self.cursor.pos());
                if self.cursor.is_eof() || self.cursor.current() != quote || term.is_empty() {
                    self.fail_at(start, ScanErrorKind::InvalidHeredocIdentifier);
                    let opener = Span::new(start, self.cursor.pos());
                    return Some(Token::with_literal(start, TokenKind::Illegal, opener));
                }
                self.cursor.advance();
                (term, quote == b'\'')
            }
            b if is_ident_continue(b) => {
                let term_start = self.cursor.pos();
                self.cursor.eat_while(is_ident_continue);
                (Span::new(term_start, self.cursor.pos()), false)
            }
            _ => return None,
        };

        self.contexts
            .push(Mode::HeredocFirstLine(Heredoc { term, indent, raw }));
        Some(Token::with_literal(
            start,
            TokenKind::HeredocBegin,
            Span::new(start, self.cursor.pos()),
        ))
    }

    /// Statements on the opener's line; its newline starts the body.
    pub(crate) fn heredoc_first_line(&mut self, heredoc: Heredoc) -> Token {
        if self.cursor.current() != b'\n' {
            return self.statements();
        }
        let pos = self.cursor.pos();
        self.cursor.advance();
        self.contexts.swap(Mode::HeredocBody(heredoc));
        Token::new(pos, TokenKind::NewLine)
    }

    /// Body text up to the terminator line or the next interpolation.
    pub(crate) fn heredoc_body(&mut self, heredoc: Heredoc) -> Token {
        if !heredoc.raw {
            if let Some(token) = self.interpolation_start() {
                return token;
            }
        }

        let begin = self.cursor.pos();
        let mut skip = 0;
        loop {
            let line = self.cursor.pos();
            if self.cursor.is_line_start(line) {
                if let Some(end) = self.terminator_end(heredoc) {
                    let literal = Span::new(begin, line - skip);
                    self.cursor.advance_to(end);
                    self.contexts.pop();
                    return Token::with_literal(begin, TokenKind::HeredocEnd, literal);
                }
            }
            if self.cursor.is_eof() {
                self.fail_at(begin, ScanErrorKind::UnterminatedHeredoc);
                let literal = Span::new(begin, line - skip);
                return Token::with_literal(begin, TokenKind::Illegal, literal);
            }

            if heredoc.raw {
                self.cursor.eat_until_newline_or_eof();
                self.cursor.advance();
                continue;
            }
            let (stop, elided) = self.decode_escapes(b'\n', skip);
            skip = elided;
            match stop {
                Stop::Interpolation => {
                    let literal = Span::new(begin, self.cursor.pos() - skip);
                    return Token::with_literal(begin, TokenKind::HeredocPart, literal);
                }
                Stop::Terminator => self.cursor.compact(skip, b'\n'),
                Stop::EndOfInput => {}
            }
        }
    }

    /// End offset of the terminator if the cursor's line is the terminator
    /// line: optional indentation, the identifier, then a line end.
    fn terminator_end(&self, heredoc: Heredoc) -> Option<u32> {
        let rest = self.cursor.rest();
        let indent = if heredoc.indent {
            rest.iter().take_while(|&&b| is_whitespace(b)).count()
        } else {
            0
        };
        let term = self.cursor.slice(heredoc.term);
        let after = rest.get(indent..)?.strip_prefix(term)?;
        if !matches!(after, [] | [b'\n', ..] | [b'\r', b'\n', ..]) {
            return None;
        }
        let consumed = u32::try_from(indent + term.len()).ok()?;
        Some(self.cursor.pos() + consumed)
    }
}
