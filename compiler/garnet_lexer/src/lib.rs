//! Scanner for the Garnet language.
//!
//! The lexical grammar is not regular: string interpolation re-enters
//! statement scanning inside a literal, heredoc bodies are delimited by a
//! line that appears *after* the opener line has finished, and the meaning
//! of `+1`, `<<ID` or `%(..)` depends on whether the previous token abuts the
//! current one. The scanner models this with a stack of lexical contexts,
//! each carrying its own *no-space* flag.
//!
//! # Architecture
//!
//! ```text
//! SourceBuffer -> Cursor -> Scanner::scan()
//!                              |
//!                              +-- top context mode
//!                                    Statements        -> dispatch table
//!                                    Quoted            -> string continuation
//!                                    Interpolation     -> statements until `}`
//!                                    HeredocFirstLine  -> statements until `\n`
//!                                    HeredocBody       -> line-by-line body
//! ```
//!
//! Escape sequences are decoded in place: literal views returned by the
//! scanner bound the *decoded* bytes inside the scanner-owned buffer.
//!
//! # Errors
//!
//! Malformed input never aborts a scan. The offending token is reported as
//! [`TokenKind::Illegal`] and the first malformation is kept as a sticky
//! [`ScanError`], available through [`Scanner::error`].
//!
//! # Tracing
//!
//! Tokens, context pushes and pops are traced at `trace` level; recorded
//! errors at `debug` level. Call [`init_tracing`] and set
//! `RUST_LOG=garnet_lexer=trace` to see them.

mod comments;
mod context;
mod dispatch;
mod escape;
mod heredoc;
mod ident;
mod keywords;
mod number;
mod operators;
mod string;
#[cfg(test)]
mod test_helpers;
mod token;

use std::iter::FusedIterator;
use std::sync::Once;

use garnet_lexer_core::Cursor;
use tracing::{debug, trace};

use crate::context::{ContextStack, Mode};

pub use garnet_lexer_core::{ScanError, ScanErrorKind, SourceBuffer, Span, TokenKind};
pub use token::{Token, TokenList};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=garnet_lexer=debug` or `RUST_LOG=garnet_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Context-stack scanner over one exclusively owned source buffer.
///
/// A scanner advances monotonically and is not reusable. After the end of
/// input has been reached every further call reports [`TokenKind::EndOfInput`]
/// at the same position.
pub struct Scanner {
    cursor: Cursor,
    contexts: ContextStack,
}

impl Scanner {
    /// Create a scanner over `source`.
    ///
    /// Borrowed text is copied into an owned buffer; an owned `Vec<u8>` or
    /// `String` is taken over without a copy.
    pub fn new(source: impl Into<SourceBuffer>) -> Self {
        Scanner {
            cursor: source.into().into_cursor(),
            contexts: ContextStack::new(),
        }
    }

    /// Produce the next `(position, kind, literal)` triple.
    ///
    /// The literal view is valid until the next call.
    pub fn scan(&mut self) -> (u32, TokenKind, Option<&[u8]>) {
        let token = self.next_token();
        (token.pos, token.kind, self.literal(&token))
    }

    /// Produce the next token.
    ///
    /// [`TokenKind::Continue`] is never returned.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.cursor.is_eof() {
                return self.end_of_input();
            }
            let depth = self.contexts.depth();
            let token = match self.contexts.top().mode {
                Mode::Statements => self.statements(),
                Mode::Quoted { close } => self.quoted_continue(close),
                Mode::Interpolation { braces } => self.interpolation(braces),
                Mode::HeredocFirstLine(heredoc) => self.heredoc_first_line(heredoc),
                Mode::HeredocBody(heredoc) => self.heredoc_body(heredoc),
            };
            if token.kind == TokenKind::Continue {
                continue;
            }
            self.contexts.record(depth, token.kind);
            trace!(
                pos = token.pos,
                kind = ?token.kind,
                depth = self.contexts.depth(),
                "token"
            );
            return token;
        }
    }

    /// Decoded literal bytes of a token produced by this scanner.
    ///
    /// Escape decoding only rewrites bytes at or after the start of the
    /// literal being scanned, so views of earlier tokens stay intact.
    pub fn literal(&self, token: &Token) -> Option<&[u8]> {
        token.literal.map(|span| self.cursor.slice(span))
    }

    /// The first recorded malformation, if any.
    pub fn error(&self) -> Option<&ScanError> {
        self.cursor.error()
    }

    /// Iterate over the remaining tokens.
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens { scanner: self }
    }

    /// Number of lexical contexts on the stack, the base frame included.
    pub fn depth(&self) -> usize {
        self.contexts.depth()
    }

    /// Give back the decoded buffer and the recorded error.
    pub fn into_parts(self) -> (Vec<u8>, Option<ScanError>) {
        self.cursor.into_parts()
    }

    // ─── Shared helpers ─────────────────────────────────────────────────

    fn end_of_input(&mut self) -> Token {
        let depth = self.contexts.depth();
        if depth > 1 {
            let kind = match self.contexts.top().mode {
                Mode::Quoted { .. } => ScanErrorKind::UnterminatedString,
                Mode::HeredocBody(_) => ScanErrorKind::UnterminatedHeredoc,
                _ => ScanErrorKind::UnclosedContext {
                    depth: u32::try_from(depth - 1).unwrap_or(u32::MAX),
                },
            };
            self.fail_at(self.cursor.pos(), kind);
        }
        Token::new(self.cursor.pos(), TokenKind::EndOfInput)
    }

    /// Record `kind` at `pos` unless an error is already recorded.
    pub(crate) fn fail_at(&mut self, pos: u32, kind: ScanErrorKind) {
        if self.cursor.fail_at(pos, kind) {
            debug!(pos, %kind, "scan error");
        }
    }

    /// Clear the no-space flag of the active context.
    #[inline]
    pub(crate) fn reset_nospace(&mut self) {
        self.contexts.top_mut().nospace = false;
    }

    /// Whether the previous token of the active context abuts the cursor.
    #[inline]
    pub(crate) fn nospace(&self) -> bool {
        self.contexts.top().nospace
    }
}

/// Tokens of a [`Scanner`] up to, not including, [`TokenKind::EndOfInput`].
///
/// Created by [`Scanner::tokens`]. The scanner stays usable afterwards, so
/// literals and the recorded error can still be read from it.
pub struct Tokens<'a> {
    scanner: &'a mut Scanner,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.scanner.next_token();
        if token.kind == TokenKind::EndOfInput {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// Lex `source` into a [`TokenList`].
///
/// The list ends with exactly one [`TokenKind::EndOfInput`] token.
pub fn lex(source: &str) -> TokenList {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::with_capacity(source.len() / 3 + 1);
    loop {
        let token = scanner.next_token();
        tokens.push(token);
        if token.kind == TokenKind::EndOfInput {
            break;
        }
    }
    let (source, error) = scanner.into_parts();
    TokenList::new(tokens, source, error)
}
