//! Numeric literal scanning.
//!
//! Literals are classified, not evaluated: the token literal is the source
//! text, sign and base prefix included. Underscores are accepted anywhere
//! after the first digit.

use garnet_lexer_core::char_class::{is_decimal, is_hexadecimal, is_octal};
use garnet_lexer_core::{Span, TokenKind};

use crate::{Scanner, Token};

impl Scanner {
    /// Leading `0`: base prefix, legacy octal, fraction, or plain zero.
    pub(crate) fn zero(&mut self, start: u32) -> Token {
        let kind = match self.cursor.current() {
            b'd' | b'D' => {
                self.cursor.advance();
                self.digits(is_decimal);
                TokenKind::DecimalInteger
            }
            b'b' | b'B' => {
                self.cursor.advance();
                self.digits(|b| b == b'0' || b == b'1');
                TokenKind::BinaryInteger
            }
            b'o' | b'O' | b'_' => {
                self.cursor.advance();
                self.digits(is_octal);
                TokenKind::OctalInteger
            }
            b'x' | b'X' => {
                self.cursor.advance();
                self.digits(is_hexadecimal);
                TokenKind::HexadecimalInteger
            }
            b if is_octal(b) => {
                self.digits(is_octal);
                TokenKind::OctalInteger
            }
            b'.' if is_decimal(self.cursor.peek_byte(1)) => {
                self.cursor.advance();
                return self.fraction(start);
            }
            _ => {
                if self.exponent() {
                    TokenKind::Float
                } else {
                    TokenKind::DecimalInteger
                }
            }
        };
        self.number(start, kind)
    }

    /// Leading `1`-`9`: integer, float with fraction, or float with exponent.
    pub(crate) fn nonzero(&mut self, start: u32) -> Token {
        self.digits(is_decimal);
        if self.cursor.current() == b'.' && is_decimal(self.cursor.peek_byte(1)) {
            self.cursor.advance();
            return self.fraction(start);
        }
        let kind = if self.exponent() {
            TokenKind::Float
        } else {
            TokenKind::DecimalInteger
        };
        self.number(start, kind)
    }

    /// A number preceded by a `+`/`-` sign (already consumed). The current
    /// byte is the first digit.
    pub(crate) fn signed_number(&mut self, start: u32) -> Token {
        let first = self.cursor.current();
        self.cursor.advance();
        if first == b'0' {
            self.zero(start)
        } else {
            self.nonzero(start)
        }
    }

    /// Digits after the decimal point (point consumed).
    fn fraction(&mut self, start: u32) -> Token {
        self.digits(is_decimal);
        self.exponent();
        self.number(start, TokenKind::Float)
    }

    /// Consume `e`/`E`, an optional sign and digits. Nothing is consumed
    /// unless a digit follows.
    fn exponent(&mut self) -> bool {
        if !matches!(self.cursor.current(), b'e' | b'E') {
            return false;
        }
        let digit_at = if matches!(self.cursor.peek_byte(1), b'+' | b'-') {
            2
        } else {
            1
        };
        if !is_decimal(self.cursor.peek_byte(digit_at)) {
            return false;
        }
        self.cursor.advance_n(digit_at);
        self.digits(is_decimal);
        true
    }

    #[inline]
    fn digits(&mut self, digit: impl Fn(u8) -> bool) {
        self.cursor.eat_while(|b| digit(b) || b == b'_');
    }

    #[inline]
    fn number(&self, start: u32, kind: TokenKind) -> Token {
        Token::with_literal(start, kind, Span::new(start, self.cursor.pos()))
    }
}

#[cfg(test)]
mod tests;
