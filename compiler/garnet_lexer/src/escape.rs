//! In-place escape decoding for double-quoted literals and heredoc bodies.
//!
//! The decoder walks forward from the cursor, writing each decoded byte
//! `skip` positions behind the read offset, where `skip` is the number of
//! source bytes elided so far. A decoded escape is never longer than its
//! source text, so the write offset never overtakes the read offset.
//!
//! | Escape         | Value                                   |
//! |----------------|-----------------------------------------|
//! | `\n \t \r \f \v \a \e \b \s` | named control byte        |
//! | `\` + newline  | elided entirely                         |
//! | `\0`-`\777`    | 1-3 octal digits, wrapping to a byte    |
//! | `\xH`, `\xHH`  | 1-2 hex digits                          |
//! | `\C-x`, `\cx`  | `x & 0x9F` (`?` gives `0x7F`)           |
//! | `\` + other    | the byte itself                         |

use garnet_lexer_core::char_class::{hex_value, is_octal};
use garnet_lexer_core::ScanErrorKind;

use crate::Scanner;

/// Why the decoder stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Stop {
    /// At the terminator byte (not consumed).
    Terminator,
    /// At the `#` of an interpolation introducer (not consumed).
    Interpolation,
    EndOfInput,
}

/// Value of a single-letter named escape.
#[inline]
pub(crate) fn named_escape(byte: u8) -> Option<u8> {
    match byte {
        b'n' => Some(0x0A),
        b't' => Some(0x09),
        b'r' => Some(0x0D),
        b'f' => Some(0x0C),
        b'v' => Some(0x0B),
        b'a' => Some(0x07),
        b'e' => Some(0x1B),
        b'b' => Some(0x08),
        b's' => Some(0x20),
        _ => None,
    }
}

/// Control character for `\cx` / `\C-x`.
#[inline]
pub(crate) fn control(byte: u8) -> u8 {
    if byte == b'?' {
        return 0x7F;
    }
    named_escape(byte).unwrap_or(byte) & 0x9F
}

impl Scanner {
    /// Decode until `close`, an interpolation introducer, or end of input.
    ///
    /// `skip` is the number of bytes already elided from the literal being
    /// decoded. Returns why decoding stopped and the updated count; the
    /// decoded text ends at `cursor.pos() - skip`.
    pub(crate) fn decode_escapes(&mut self, close: u8, mut skip: u32) -> (Stop, u32) {
        loop {
            if self.cursor.is_eof() {
                return (Stop::EndOfInput, skip);
            }
            let byte = self.cursor.current();
            if byte == close {
                return (Stop::Terminator, skip);
            }
            match byte {
                b'#' if self.at_interpolation() => return (Stop::Interpolation, skip),
                b'\\' => skip = self.decode_escape(skip),
                _ => self.cursor.compact(skip, byte),
            }
        }
    }

    /// Decode one escape sequence starting at the backslash.
    fn decode_escape(&mut self, mut skip: u32) -> u32 {
        let backslash = self.cursor.pos();
        self.cursor.advance();
        skip += 1;
        if self.cursor.is_eof() {
            return skip;
        }

        let byte = self.cursor.current();
        if let Some(value) = named_escape(byte) {
            self.cursor.compact(skip, value);
            return skip;
        }
        let value = match byte {
            b'\n' => {
                self.cursor.advance();
                self.reset_nospace();
                return skip + 1;
            }
            b'0'..=b'7' => {
                let mut value = 0u8;
                let mut digits = 0;
                while digits < 3 && is_octal(self.cursor.peek_byte(digits)) {
                    let digit = self.cursor.peek_byte(digits) - b'0';
                    value = value.wrapping_mul(8).wrapping_add(digit);
                    digits += 1;
                }
                self.cursor.advance_n(digits - 1);
                skip += digits - 1;
                value
            }
            b'x' => {
                self.cursor.advance();
                skip += 1;
                let mut value = 0u8;
                let mut digits = 0;
                while digits < 2 {
                    let Some(digit) = hex_value(self.cursor.peek_byte(digits)) else {
                        break;
                    };
                    value = value * 16 + digit;
                    digits += 1;
                }
                if digits == 0 {
                    self.fail_at(backslash, ScanErrorKind::InvalidHexEscape);
                    return skip;
                }
                self.cursor.advance_n(digits - 1);
                skip += digits - 1;
                value
            }
            b'C' => {
                self.cursor.advance();
                skip += 1;
                if self.cursor.current() != b'-' {
                    self.fail_at(backslash, ScanErrorKind::InvalidEscape);
                    return skip;
                }
                self.cursor.advance();
                skip += 1;
                if self.cursor.is_eof() {
                    return skip;
                }
                control(self.cursor.current())
            }
            b'c' => {
                self.cursor.advance();
                skip += 1;
                if self.cursor.is_eof() {
                    return skip;
                }
                control(self.cursor.current())
            }
            other => other,
        };
        self.cursor.compact(skip, value);
        skip
    }
}
