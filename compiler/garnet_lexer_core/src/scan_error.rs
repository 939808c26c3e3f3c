//! The positioned error recorded by the cursor.
//!
//! Only the first malformation of a scanner's lifetime is kept. Scanning goes
//! on after it; the offending token is reported as `Illegal`.

use thiserror::Error;

/// A lexical error at a byte offset.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error("{kind} at pos={pos}")]
pub struct ScanError {
    /// Byte offset where the malformation was detected.
    pub pos: u32,
    pub kind: ScanErrorKind,
}

/// What went wrong.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum ScanErrorKind {
    /// `=begin` without a matching `=end` line.
    #[error("multi-line comment must be closed")]
    UnterminatedComment,
    /// End of input inside a quoted or percent literal.
    #[error("unterminated string meets end of file")]
    UnterminatedString,
    /// End of input before the heredoc terminator line.
    #[error("can't find heredoc terminator anywhere before end of file")]
    UnterminatedHeredoc,
    /// End of input while an interpolation or heredoc opener line is open.
    #[error("unexpected end of input inside {depth} nested lexical contexts")]
    UnclosedContext { depth: u32 },
    /// `\C` not followed by `-`.
    #[error("invalid escape")]
    InvalidEscape,
    /// `\x` not followed by a hexadecimal digit.
    #[error("invalid hex escape")]
    InvalidHexEscape,
    /// A backslash outside a literal that does not end the line.
    #[error("escape character must be at end of line")]
    StrayBackslash,
    /// Quoted heredoc identifier without its closing quote.
    #[error("invalid heredoc identifier")]
    InvalidHeredocIdentifier,
    /// `$`, `@` or `@@` not followed by an identifier start.
    #[error("`{sigil}` without identifiers is not allowed as a variable name")]
    InvalidVariableName { sigil: &'static str },
    /// A byte that cannot start any token.
    #[error("invalid character {byte:#04x}")]
    UnexpectedByte { byte: u8 },
}

impl ScanError {
    #[cold]
    pub fn new(pos: u32, kind: ScanErrorKind) -> Self {
        ScanError { pos, kind }
    }
}
