//! Low-level building blocks for the Garnet lexer.
//!
//! This crate owns everything the scanner state machine stands on but that
//! carries no lexical-mode knowledge of its own:
//!
//! - [`char_class`]: pure byte predicates (letters, digit families, whitespace,
//!   identifier start/continue).
//! - [`SourceBuffer`]: the owned, mutable source bytes.
//! - [`Cursor`]: offset + current byte + end-of-input state + sticky error.
//!   Escape decoding rewrites bytes behind the read position through it.
//! - [`TokenKind`]: the closed token kind enumeration.
//! - [`ScanError`]: the positioned error recorded by the cursor.
//!
//! Classification is ASCII-only. Bytes `>= 0x80` are never identifier bytes.

pub mod char_class;
mod cursor;
mod scan_error;
mod source_buffer;
mod span;
mod tag;

pub use cursor::Cursor;
pub use scan_error::{ScanError, ScanErrorKind};
pub use source_buffer::SourceBuffer;
pub use span::Span;
pub use tag::TokenKind;
