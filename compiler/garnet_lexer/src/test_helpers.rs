//! Shared helpers for the scanner unit tests.

use crate::{ScanError, Scanner, TokenKind};

/// A token as `(pos, kind, literal)`, literal decoded lossily to text.
pub(crate) type Triple = (u32, TokenKind, Option<String>);

/// Every token up to and including the first `EndOfInput`.
pub(crate) fn scan_all(source: &str) -> Vec<Triple> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let (pos, kind, literal) = scanner.scan();
        tokens.push((
            pos,
            kind,
            literal.map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
        ));
        if kind == TokenKind::EndOfInput {
            return tokens;
        }
    }
}

/// Token kinds, end of input excluded.
pub(crate) fn kinds(source: &str) -> Vec<TokenKind> {
    Scanner::new(source)
        .tokens()
        .map(|token| token.kind)
        .collect()
}

/// The first token.
pub(crate) fn first(source: &str) -> Triple {
    let mut scanner = Scanner::new(source);
    let (pos, kind, literal) = scanner.scan();
    (
        pos,
        kind,
        literal.map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
    )
}

/// Decoded literal bytes of the first token.
pub(crate) fn first_bytes(source: &str) -> Option<Vec<u8>> {
    let mut scanner = Scanner::new(source);
    let (_, _, literal) = scanner.scan();
    literal.map(<[u8]>::to_vec)
}

/// The error recorded after draining the whole input.
pub(crate) fn error_of(source: &str) -> Option<ScanError> {
    let mut scanner = Scanner::new(source);
    for _ in scanner.tokens() {}
    scanner.error().cloned()
}

/// Shorthand for an expected triple with a literal.
pub(crate) fn lit(pos: u32, kind: TokenKind, text: &str) -> Triple {
    (pos, kind, Some(text.to_owned()))
}

/// Shorthand for an expected triple without a literal.
pub(crate) fn bare(pos: u32, kind: TokenKind) -> Triple {
    (pos, kind, None)
}
