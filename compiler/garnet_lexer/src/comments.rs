//! Line comments and `=begin`/`=end` block comments.

use garnet_lexer_core::char_class::is_whitespace;
use garnet_lexer_core::{ScanErrorKind, TokenKind};

use crate::{Scanner, Token};

/// `after` (the bytes following a sentinel word) ends the word: end of
/// input, a newline, or whitespace.
fn ends_word(after: &[u8]) -> bool {
    match after.first() {
        None | Some(b'\n') => true,
        Some(&b) => is_whitespace(b),
    }
}

impl Scanner {
    /// `#` to the end of the line. The newline is left for the next token.
    pub(crate) fn line_comment(&mut self, start: u32) -> Token {
        self.cursor.eat_until_newline_or_eof();
        Token::new(start, TokenKind::Continue)
    }

    /// `=begin` at the start of a line, followed by whitespace, a newline
    /// or end of input. The cursor is on the `b`.
    pub(crate) fn at_block_comment(&self, start: u32) -> bool {
        self.cursor.is_line_start(start)
            && self
                .cursor
                .rest()
                .strip_prefix(b"begin")
                .is_some_and(ends_word)
    }

    /// Skip a block comment up to and including its `=end` line.
    ///
    /// The rest of the `=end` line and its newline are skipped too.
    pub(crate) fn block_comment(&mut self, start: u32) -> Token {
        loop {
            self.cursor.eat_until_newline_or_eof();
            if self.cursor.is_eof() {
                self.fail_at(start, ScanErrorKind::UnterminatedComment);
                return Token::new(start, TokenKind::Illegal);
            }
            self.cursor.advance();
            let closes = self
                .cursor
                .rest()
                .strip_prefix(b"=end")
                .is_some_and(ends_word);
            if closes {
                self.cursor.eat_until_newline_or_eof();
                self.cursor.advance();
                return Token::new(start, TokenKind::Continue);
            }
        }
    }
}

#[cfg(test)]
mod tests;
