//! Token values and the collected token list.

use std::ops::Index;

use garnet_lexer_core::{ScanError, Span, TokenKind};

/// A classified token.
///
/// `literal` is a view into the scanner-owned buffer. Resolve it with
/// [`Scanner::literal`](crate::Scanner::literal) or [`TokenList::literal`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Byte offset where the token starts.
    pub pos: u32,
    pub kind: TokenKind,
    pub literal: Option<Span>,
}

impl Token {
    #[inline]
    pub const fn new(pos: u32, kind: TokenKind) -> Self {
        Token {
            pos,
            kind,
            literal: None,
        }
    }

    #[inline]
    pub const fn with_literal(pos: u32, kind: TokenKind, literal: Span) -> Self {
        Token {
            pos,
            kind,
            literal: Some(literal),
        }
    }
}

/// Every token of one source, with the decoded buffer their literals
/// point into.
///
/// The last token is always [`TokenKind::EndOfInput`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
    source: Vec<u8>,
    error: Option<ScanError>,
}

impl TokenList {
    pub(crate) fn new(tokens: Vec<Token>, source: Vec<u8>, error: Option<ScanError>) -> Self {
        TokenList {
            tokens,
            source,
            error,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Token kinds in order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|token| token.kind)
    }

    /// Decoded literal bytes of `token`.
    pub fn literal(&self, token: &Token) -> Option<&[u8]> {
        token
            .literal
            .and_then(|span| self.source.get(span.range()))
    }

    /// The first malformation recorded while scanning.
    pub fn error(&self) -> Option<&ScanError> {
        self.error.as_ref()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
