//! Statement-level dispatch.
//!
//! [`Scanner::statements`] looks the leading byte up in a static 128-entry
//! table, advances past it and calls the routine found there. Routines take
//! the token start offset and see the byte *after* the leading byte as the
//! cursor's current byte. Bytes without an entry (control bytes, DEL and
//! everything `>= 0x80`) are reported as unexpected.
//!
//! A second table maps percent-literal opening delimiters to their closing
//! counterparts.

use garnet_lexer_core::{ScanErrorKind, Span, TokenKind};

use crate::{Scanner, Token};

type ScanFn = fn(&mut Scanner, u32) -> Token;

static STATEMENT_TABLE: [Option<ScanFn>; 128] = {
    let mut table: [Option<ScanFn>; 128] = [None; 128];

    // Whitespace (newline excluded)
    table[0x09] = Some(Scanner::whitespace as ScanFn);
    table[0x0B] = Some(Scanner::whitespace as ScanFn);
    table[0x0C] = Some(Scanner::whitespace as ScanFn);
    table[0x0D] = Some(Scanner::whitespace as ScanFn);
    table[b' ' as usize] = Some(Scanner::whitespace as ScanFn);

    // Statement terminators
    table[b'\n' as usize] = Some(Scanner::newline as ScanFn);
    table[b';' as usize] = Some(Scanner::newline as ScanFn);

    // Operators and delimiters
    table[b'!' as usize] = Some(Scanner::bang as ScanFn);
    table[b'"' as usize] = Some(Scanner::double_quote as ScanFn);
    table[b'#' as usize] = Some(Scanner::line_comment as ScanFn);
    table[b'$' as usize] = Some(Scanner::dollar as ScanFn);
    table[b'%' as usize] = Some(Scanner::percent as ScanFn);
    table[b'&' as usize] = Some(Scanner::ampersand as ScanFn);
    table[b'\'' as usize] = Some(Scanner::single_quote as ScanFn);
    table[b'(' as usize] = Some(Scanner::left_paren as ScanFn);
    table[b')' as usize] = Some(Scanner::right_paren as ScanFn);
    table[b'*' as usize] = Some(Scanner::star as ScanFn);
    table[b'+' as usize] = Some(Scanner::plus as ScanFn);
    table[b',' as usize] = Some(Scanner::comma as ScanFn);
    table[b'-' as usize] = Some(Scanner::minus as ScanFn);
    table[b'.' as usize] = Some(Scanner::dot as ScanFn);
    table[b'/' as usize] = Some(Scanner::slash as ScanFn);
    table[b':' as usize] = Some(Scanner::colon as ScanFn);
    table[b'<' as usize] = Some(Scanner::less as ScanFn);
    table[b'=' as usize] = Some(Scanner::equal as ScanFn);
    table[b'>' as usize] = Some(Scanner::greater as ScanFn);
    table[b'?' as usize] = Some(Scanner::question as ScanFn);
    table[b'@' as usize] = Some(Scanner::at_sign as ScanFn);
    table[b'[' as usize] = Some(Scanner::left_bracket as ScanFn);
    table[b'\\' as usize] = Some(Scanner::backslash as ScanFn);
    table[b']' as usize] = Some(Scanner::right_bracket as ScanFn);
    table[b'^' as usize] = Some(Scanner::caret as ScanFn);
    table[b'_' as usize] = Some(Scanner::underscore as ScanFn);
    table[b'{' as usize] = Some(Scanner::left_brace as ScanFn);
    table[b'|' as usize] = Some(Scanner::pipe as ScanFn);
    table[b'}' as usize] = Some(Scanner::right_brace as ScanFn);
    table[b'~' as usize] = Some(Scanner::tilde as ScanFn);

    // Numbers
    table[b'0' as usize] = Some(Scanner::zero as ScanFn);
    let mut b = b'1';
    while b <= b'9' {
        table[b as usize] = Some(Scanner::nonzero as ScanFn);
        b += 1;
    }

    // Identifiers
    let mut b = b'A';
    while b <= b'Z' {
        table[b as usize] = Some(Scanner::uppercase as ScanFn);
        b += 1;
    }
    let mut b = b'a';
    while b <= b'z' {
        table[b as usize] = Some(Scanner::lowercase as ScanFn);
        b += 1;
    }

    table
};

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..128, always fits in u8"
)]
static CLOSING_DELIMITER: [u8; 128] = {
    let mut table = [0u8; 128];
    let mut i = 0usize;
    while i < 128 {
        table[i] = i as u8;
        i += 1;
    }
    table[b'(' as usize] = b')';
    table[b'[' as usize] = b']';
    table[b'{' as usize] = b'}';
    table[b'<' as usize] = b'>';
    table
};

/// Closing delimiter of a percent literal opened with `open`.
///
/// Bracket pairs close with their counterpart; any other delimiter closes
/// with itself.
#[inline]
pub(crate) fn closing_delimiter(open: u8) -> u8 {
    CLOSING_DELIMITER
        .get(usize::from(open))
        .copied()
        .unwrap_or(open)
}

impl Scanner {
    /// Scan one token in statement mode.
    pub(crate) fn statements(&mut self) -> Token {
        let start = self.cursor.pos();
        let byte = self.cursor.current();
        self.cursor.advance();
        match STATEMENT_TABLE.get(usize::from(byte)).copied().flatten() {
            Some(scan) => scan(self, start),
            None => self.unexpected_byte(start, byte),
        }
    }

    #[cold]
    fn unexpected_byte(&mut self, start: u32, byte: u8) -> Token {
        self.fail_at(start, ScanErrorKind::UnexpectedByte { byte });
        Token::with_literal(start, TokenKind::Illegal, Span::new(start, self.cursor.pos()))
    }
}
