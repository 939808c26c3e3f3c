//! Quoted literals, percent literals and interpolation.
//!
//! A double-quoted literal that contains an interpolation is returned in
//! pieces: `StringPart` up to the introducer, the interpolated tokens, and a
//! final `String` for the text after the last interpolation. Between pieces a
//! [`Mode::Quoted`] frame remembers the closing delimiter.

use garnet_lexer_core::char_class::is_ident_start;
use garnet_lexer_core::{ScanErrorKind, Span, TokenKind};

use crate::context::Mode;
use crate::dispatch::closing_delimiter;
use crate::escape::Stop;
use crate::{Scanner, Token};

impl Scanner {
    // ─── Openers ────────────────────────────────────────────────────────

    pub(crate) fn double_quote(&mut self, start: u32) -> Token {
        self.double_quoted(start, b'"', false)
    }

    pub(crate) fn single_quote(&mut self, start: u32) -> Token {
        self.single_quoted(start, b'\'')
    }

    /// `%Q(..)`, `%q(..)` or `%(..)`, with the `%` consumed.
    ///
    /// Returns `None` without consuming anything when no delimiter follows.
    /// Paired delimiters do not nest: `%(a(b)c)` ends at the first `)`.
    pub(crate) fn percent_literal(&mut self, start: u32) -> Option<Token> {
        let (raw, open) = match self.cursor.current() {
            letter @ (b'Q' | b'q') => {
                let open = self.cursor.peek_byte(1);
                if !open.is_ascii_punctuation() {
                    return None;
                }
                self.cursor.advance();
                (letter == b'q', open)
            }
            open if open.is_ascii_punctuation() => (false, open),
            _ => return None,
        };
        self.cursor.advance();
        let close = closing_delimiter(open);
        let token = if raw {
            self.single_quoted(start, close)
        } else {
            self.double_quoted(start, close, false)
        };
        Some(token)
    }

    // ─── Bodies ─────────────────────────────────────────────────────────

    /// Verbatim text up to `close`. Only `\\` and a backslash before the
    /// closing delimiter are unescaped.
    fn single_quoted(&mut self, pos: u32, close: u8) -> Token {
        let begin = self.cursor.pos();
        let mut skip = 0;
        loop {
            if self.cursor.is_eof() {
                self.fail_at(pos, ScanErrorKind::UnterminatedString);
                let literal = Span::new(begin, self.cursor.pos() - skip);
                return Token::with_literal(pos, TokenKind::Illegal, literal);
            }
            let byte = self.cursor.current();
            if byte == close {
                let literal = Span::new(begin, self.cursor.pos() - skip);
                self.cursor.advance();
                return Token::with_literal(pos, TokenKind::String, literal);
            }
            if byte == b'\\' {
                let next = self.cursor.peek_byte(1);
                if next == b'\\' || next == close {
                    self.cursor.advance();
                    skip += 1;
                }
            }
            let byte = self.cursor.current();
            self.cursor.compact(skip, byte);
        }
    }

    /// One decoded segment of a double-quoted literal.
    ///
    /// `continuing` is set when the segment follows an interpolation, in
    /// which case the [`Mode::Quoted`] frame is already on the stack.
    fn double_quoted(&mut self, pos: u32, close: u8, continuing: bool) -> Token {
        let begin = self.cursor.pos();
        let (stop, skip) = self.decode_escapes(close, 0);
        let literal = Span::new(begin, self.cursor.pos() - skip);
        match stop {
            Stop::Interpolation => {
                if !continuing {
                    self.contexts.push(Mode::Quoted { close });
                }
                Token::with_literal(pos, TokenKind::StringPart, literal)
            }
            Stop::Terminator => {
                self.cursor.advance();
                if continuing {
                    self.contexts.pop();
                }
                Token::with_literal(pos, TokenKind::String, literal)
            }
            Stop::EndOfInput => {
                self.fail_at(pos, ScanErrorKind::UnterminatedString);
                Token::with_literal(pos, TokenKind::Illegal, literal)
            }
        }
    }

    /// Resume a double-quoted literal after an interpolation.
    pub(crate) fn quoted_continue(&mut self, close: u8) -> Token {
        if let Some(token) = self.interpolation_start() {
            return token;
        }
        let pos = self.cursor.pos();
        self.double_quoted(pos, close, true)
    }

    // ─── Interpolation ──────────────────────────────────────────────────

    /// The cursor is on `#{`, `#@name`, `#@@name` or `#$name`.
    pub(crate) fn at_interpolation(&self) -> bool {
        if self.cursor.current() != b'#' {
            return false;
        }
        match self.cursor.peek_byte(1) {
            b'{' => true,
            b'$' => is_ident_start(self.cursor.peek_byte(2)),
            b'@' if self.cursor.peek_byte(2) == b'@' => is_ident_start(self.cursor.peek_byte(3)),
            b'@' => is_ident_start(self.cursor.peek_byte(2)),
            _ => false,
        }
    }

    /// Consume an interpolation introducer.
    ///
    /// `#{` pushes an interpolation frame and yields `InsertBegin`. The
    /// variable forms yield the variable token directly, positioned at the
    /// `#` with the literal excluding it.
    pub(crate) fn interpolation_start(&mut self) -> Option<Token> {
        if !self.at_interpolation() {
            return None;
        }
        let hash = self.cursor.pos();
        self.cursor.advance();
        let sigil_start = self.cursor.pos();
        let sigil = self.cursor.current();
        self.cursor.advance();
        let mut token = match sigil {
            b'{' => {
                self.contexts.push(Mode::Interpolation { braces: 0 });
                return Some(Token::new(hash, TokenKind::InsertBegin));
            }
            b'@' => self.at_sign(sigil_start),
            _ => self.dollar(sigil_start),
        };
        token.pos = hash;
        Some(token)
    }

    /// Statements inside `#{...}` up to the `}` that closes it.
    pub(crate) fn interpolation(&mut self, braces: u32) -> Token {
        if braces == 0 && self.cursor.current() == b'}' {
            let start = self.cursor.pos();
            self.cursor.advance();
            self.contexts.pop();
            return Token::new(start, TokenKind::InsertEnd);
        }
        let token = self.statements();
        self.contexts.count_brace(token.kind);
        token
    }
}

#[cfg(test)]
mod tests;
