//! Byte classification.
//!
//! Every predicate is a single indexed read into a 256-entry class table.
//! The sentinel byte (`0x00`) belongs to no class, so `eat_while` loops driven
//! by these predicates stop at end of input without a separate bounds check.

const LOWER: u8 = 1 << 0;
const UPPER: u8 = 1 << 1;
const DECIMAL: u8 = 1 << 2;
const OCTAL: u8 = 1 << 3;
const HEX: u8 = 1 << 4;
const WHITESPACE: u8 = 1 << 5;
const UNDERSCORE: u8 = 1 << 6;

const IDENT_START: u8 = LOWER | UPPER | UNDERSCORE;
const IDENT_CONTINUE: u8 = IDENT_START | DECIMAL;

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static CLASS_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0u16;
    while i < 256 {
        let b = i as u8;
        let mut class = 0;
        if b.is_ascii_lowercase() {
            class |= LOWER;
        }
        if b.is_ascii_uppercase() {
            class |= UPPER;
        }
        if b.is_ascii_digit() {
            class |= DECIMAL;
        }
        if matches!(b, b'0'..=b'7') {
            class |= OCTAL;
        }
        if b.is_ascii_hexdigit() {
            class |= HEX;
        }
        // Newline is a token of its own, not whitespace.
        if matches!(b, b' ' | b'\t' | 0x0B | 0x0C | b'\r') {
            class |= WHITESPACE;
        }
        if b == b'_' {
            class |= UNDERSCORE;
        }
        table[i as usize] = class;
        i += 1;
    }
    table
};

#[inline]
fn has(b: u8, class: u8) -> bool {
    CLASS_TABLE[b as usize] & class != 0
}

/// `[a-zA-Z]`
#[inline]
pub fn is_letter(b: u8) -> bool {
    has(b, LOWER | UPPER)
}

/// `[A-Z]`
#[inline]
pub fn is_uppercase(b: u8) -> bool {
    has(b, UPPER)
}

/// `[a-z]`
#[inline]
pub fn is_lowercase(b: u8) -> bool {
    has(b, LOWER)
}

/// `[0-9]`
#[inline]
pub fn is_decimal(b: u8) -> bool {
    has(b, DECIMAL)
}

/// `[1-9]`
#[inline]
pub fn is_nonzero_decimal(b: u8) -> bool {
    b != b'0' && has(b, DECIMAL)
}

/// `[0-7]`
#[inline]
pub fn is_octal(b: u8) -> bool {
    has(b, OCTAL)
}

/// `[0-9a-fA-F]`
#[inline]
pub fn is_hexadecimal(b: u8) -> bool {
    has(b, HEX)
}

/// Horizontal whitespace: space, tab, vertical tab, form feed, carriage return.
///
/// `\n` is excluded; it terminates statements and is scanned as a token.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    has(b, WHITESPACE)
}

/// First byte of an identifier: `[a-zA-Z_]`.
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    has(b, IDENT_START)
}

/// Subsequent identifier bytes: `[a-zA-Z0-9_]`.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    has(b, IDENT_CONTINUE)
}

/// Value of a hexadecimal digit, `None` for any other byte.
#[inline]
pub fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
