//! Identifier, keyword and variable scanning.

use garnet_lexer_core::char_class::{is_ident_continue, is_ident_start};
use garnet_lexer_core::{ScanErrorKind, Span, TokenKind};

use crate::{keywords, Scanner, Token};

impl Scanner {
    /// Lowercase-led run: keyword, local variable, or method name.
    ///
    /// A trailing `?` or `!` not followed by `=` makes a method name. A
    /// trailing `=` is taken only in method-definition position, so `a=1`
    /// still scans as an assignment.
    pub(crate) fn lowercase(&mut self, start: u32) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let mut kind = TokenKind::LocalVarIdent;
        match self.cursor.current() {
            b'?' | b'!' if self.cursor.peek_byte(1) != b'=' => {
                self.cursor.advance();
                kind = TokenKind::LocalMethodIdent;
            }
            b'=' if self.contexts.top().def_name
                && !matches!(self.cursor.peek_byte(1), b'=' | b'~' | b'>') =>
            {
                self.cursor.advance();
                kind = TokenKind::LocalMethodIdent;
            }
            _ => {}
        }
        self.identifier(start, kind)
    }

    /// Uppercase-led run: `BEGIN`, `END`, or a constant.
    pub(crate) fn uppercase(&mut self, start: u32) -> Token {
        self.cursor.eat_while(is_ident_continue);
        self.identifier(start, TokenKind::ConstIdent)
    }

    fn identifier(&mut self, start: u32, kind: TokenKind) -> Token {
        if let Some(keyword) = keywords::lookup(self.cursor.slice_from(start)) {
            return Token::new(start, keyword);
        }
        Token::with_literal(start, kind, Span::new(start, self.cursor.pos()))
    }

    /// `_`: the `__END__` marker, or a lowercase-style identifier.
    ///
    /// `__END__` alone on a line ends the program text; nothing after it is
    /// scanned.
    pub(crate) fn underscore(&mut self, start: u32) -> Token {
        if self.cursor.is_line_start(start) {
            if let Some(after) = self.cursor.rest().strip_prefix(b"_END__") {
                if matches!(after, [] | [b'\n', ..] | [b'\r', b'\n', ..]) {
                    self.cursor.terminate_at(start);
                    return self.end_of_input();
                }
            }
        }
        self.lowercase(start)
    }

    /// `@name` or `@@name` (leading `@` consumed).
    pub(crate) fn at_sign(&mut self, start: u32) -> Token {
        let (kind, sigil) = if self.cursor.current() == b'@' {
            self.cursor.advance();
            (TokenKind::ClassVarIdent, "@@")
        } else {
            (TokenKind::InstanceVarIdent, "@")
        };
        self.variable(start, kind, sigil)
    }

    /// `$name` (`$` consumed).
    pub(crate) fn dollar(&mut self, start: u32) -> Token {
        self.variable(start, TokenKind::GlobalVarIdent, "$")
    }

    fn variable(&mut self, start: u32, kind: TokenKind, sigil: &'static str) -> Token {
        if !is_ident_start(self.cursor.current()) {
            self.fail_at(start, ScanErrorKind::InvalidVariableName { sigil });
            return Token::with_literal(
                start,
                TokenKind::Illegal,
                Span::new(start, self.cursor.pos()),
            );
        }
        self.cursor.eat_while(is_ident_continue);
        Token::with_literal(start, kind, Span::new(start, self.cursor.pos()))
    }
}
