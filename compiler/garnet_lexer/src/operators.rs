//! Operator, delimiter and layout scanners.
//!
//! Every routine is entered with the leading byte already consumed and
//! resolves the longest operator from at most two follow-up bytes.

use garnet_lexer_core::char_class::{is_decimal, is_whitespace};
use garnet_lexer_core::{ScanErrorKind, TokenKind};

use crate::{Scanner, Token};

/// Single-byte tokens with no follow-up.
macro_rules! single_byte {
    ($($name:ident => $kind:ident,)*) => {
        impl Scanner {
            $(
                #[inline]
                pub(crate) fn $name(&mut self, start: u32) -> Token {
                    Token::new(start, TokenKind::$kind)
                }
            )*
        }
    };
}

single_byte! {
    left_paren => LParen,
    right_paren => RParen,
    right_bracket => RBracket,
    left_brace => LBrace,
    right_brace => RBrace,
    comma => Comma,
    question => Question,
    tilde => Invert,
}

impl Scanner {
    // ─── Layout ─────────────────────────────────────────────────────────

    pub(crate) fn whitespace(&mut self, start: u32) -> Token {
        self.reset_nospace();
        self.cursor.eat_while(is_whitespace);
        Token::new(start, TokenKind::Continue)
    }

    /// `\n` and `;`.
    pub(crate) fn newline(&mut self, start: u32) -> Token {
        self.reset_nospace();
        Token::new(start, TokenKind::NewLine)
    }

    /// `\` must end the line; it joins the next line to this one.
    pub(crate) fn backslash(&mut self, start: u32) -> Token {
        match self.cursor.current() {
            b'\n' => self.cursor.advance(),
            b'\r' if self.cursor.peek_byte(1) == b'\n' => self.cursor.advance_n(2),
            _ => {
                self.fail_at(start, ScanErrorKind::StrayBackslash);
                return Token::new(start, TokenKind::Illegal);
            }
        }
        self.reset_nospace();
        Token::new(start, TokenKind::Continue)
    }

    // ─── Operators ──────────────────────────────────────────────────────

    pub(crate) fn bang(&mut self, start: u32) -> Token {
        let kind = match self.cursor.current() {
            b'=' => TokenKind::NotEqual,
            b'~' => TokenKind::NotMatch,
            _ => return Token::new(start, TokenKind::Not),
        };
        self.cursor.advance();
        Token::new(start, kind)
    }

    pub(crate) fn ampersand(&mut self, start: u32) -> Token {
        self.doubled(
            start,
            b'&',
            [
                TokenKind::Amp,
                TokenKind::AssignAnd,
                TokenKind::AndOperator,
                TokenKind::AssignAndOperator,
            ],
        )
    }

    pub(crate) fn pipe(&mut self, start: u32) -> Token {
        self.doubled(
            start,
            b'|',
            [
                TokenKind::Or,
                TokenKind::AssignOr,
                TokenKind::OrOperator,
                TokenKind::AssignOrOperator,
            ],
        )
    }

    pub(crate) fn star(&mut self, start: u32) -> Token {
        self.doubled(
            start,
            b'*',
            [
                TokenKind::Mul,
                TokenKind::AssignMul,
                TokenKind::Pow,
                TokenKind::AssignPow,
            ],
        )
    }

    /// `x`, `x=`, `xx`, `xx=` for a leading byte `x` already consumed.
    ///
    /// `kinds` lists the four results in that order.
    fn doubled(&mut self, start: u32, byte: u8, kinds: [TokenKind; 4]) -> Token {
        let [single, single_assign, double, double_assign] = kinds;
        let kind = if self.cursor.current() == byte {
            self.cursor.advance();
            if self.cursor.current() == b'=' {
                self.cursor.advance();
                double_assign
            } else {
                double
            }
        } else if self.cursor.current() == b'=' {
            self.cursor.advance();
            single_assign
        } else {
            single
        };
        Token::new(start, kind)
    }

    pub(crate) fn plus(&mut self, start: u32) -> Token {
        self.sign(start, TokenKind::Plus, TokenKind::UnaryPlus, TokenKind::AssignPlus)
    }

    pub(crate) fn minus(&mut self, start: u32) -> Token {
        self.sign(start, TokenKind::Minus, TokenKind::UnaryMinus, TokenKind::AssignMinus)
    }

    /// `+`/`-` and their `@` and `=` forms, or a signed number when the
    /// sign does not abut the previous token.
    fn sign(&mut self, start: u32, op: TokenKind, unary: TokenKind, assign: TokenKind) -> Token {
        let kind = match self.cursor.current() {
            b'@' => unary,
            b'=' => assign,
            b if is_decimal(b) && !self.nospace() => return self.signed_number(start),
            _ => return Token::new(start, op),
        };
        self.cursor.advance();
        Token::new(start, kind)
    }

    pub(crate) fn dot(&mut self, start: u32) -> Token {
        if self.cursor.current() != b'.' {
            return Token::new(start, TokenKind::Dot);
        }
        self.cursor.advance();
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            return Token::new(start, TokenKind::Dot3);
        }
        Token::new(start, TokenKind::Dot2)
    }

    pub(crate) fn slash(&mut self, start: u32) -> Token {
        self.with_assign(start, TokenKind::Div, TokenKind::AssignDiv)
    }

    pub(crate) fn caret(&mut self, start: u32) -> Token {
        self.with_assign(start, TokenKind::Xor, TokenKind::AssignXor)
    }

    /// `x` or `x=`.
    fn with_assign(&mut self, start: u32, op: TokenKind, assign: TokenKind) -> Token {
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            return Token::new(start, assign);
        }
        Token::new(start, op)
    }

    pub(crate) fn colon(&mut self, start: u32) -> Token {
        if self.cursor.current() == b':' {
            self.cursor.advance();
            return Token::new(start, TokenKind::Colon2);
        }
        Token::new(start, TokenKind::Colon)
    }

    /// `<`, `<=`, `<=>`, `<<`, `<<=`, or a heredoc opener.
    pub(crate) fn less(&mut self, start: u32) -> Token {
        match self.cursor.current() {
            b'=' => {
                self.cursor.advance();
                if self.cursor.current() == b'>' {
                    self.cursor.advance();
                    return Token::new(start, TokenKind::Compare);
                }
                Token::new(start, TokenKind::LtEq)
            }
            b'<' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    self.cursor.advance();
                    return Token::new(start, TokenKind::AssignLShift);
                }
                if !self.nospace() {
                    if let Some(token) = self.heredoc_begin(start) {
                        return token;
                    }
                }
                Token::new(start, TokenKind::LShift)
            }
            _ => Token::new(start, TokenKind::Lt),
        }
    }

    /// `=`, `==`, `===`, `=>`, `=~`, or a `=begin` block comment.
    pub(crate) fn equal(&mut self, start: u32) -> Token {
        let kind = match self.cursor.current() {
            b'=' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    TokenKind::Eql
                } else {
                    return Token::new(start, TokenKind::Eq);
                }
            }
            b'>' => TokenKind::Arrow,
            b'~' => TokenKind::Match,
            b'b' if self.at_block_comment(start) => return self.block_comment(start),
            _ => return Token::new(start, TokenKind::Assign),
        };
        self.cursor.advance();
        Token::new(start, kind)
    }

    pub(crate) fn greater(&mut self, start: u32) -> Token {
        let kind = match self.cursor.current() {
            b'=' => TokenKind::GtEq,
            b'>' => {
                self.cursor.advance();
                return self.with_assign(start, TokenKind::RShift, TokenKind::AssignRShift);
            }
            _ => return Token::new(start, TokenKind::Gt),
        };
        self.cursor.advance();
        Token::new(start, kind)
    }

    /// `[`, `[]`, `[]=`.
    pub(crate) fn left_bracket(&mut self, start: u32) -> Token {
        if self.cursor.current() != b']' {
            return Token::new(start, TokenKind::LBracket);
        }
        self.cursor.advance();
        self.with_assign(start, TokenKind::ElementRef, TokenKind::ElementSet)
    }

    /// `%`, `%=`, or a percent literal.
    pub(crate) fn percent(&mut self, start: u32) -> Token {
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            return Token::new(start, TokenKind::AssignMod);
        }
        if self.operand_expected() {
            if let Some(token) = self.percent_literal(start) {
                return token;
            }
        }
        Token::new(start, TokenKind::Mod)
    }

    /// Whether the cursor sits where an operand may start rather than a
    /// binary operator.
    ///
    /// That is the case after any token that cannot end a value, and after
    /// a bare name separated by whitespace (`puts %(a)` passes an argument).
    fn operand_expected(&self) -> bool {
        let frame = self.contexts.top();
        if !frame.prev.ends_value() {
            return true;
        }
        frame.prev == TokenKind::LocalVarIdent && !frame.nospace
    }
}
