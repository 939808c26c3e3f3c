//! Reserved word lookup.
//!
//! Length-bucketed: the identifier's length selects a small match arm, so
//! most identifiers are rejected after one comparison. Keywords range from
//! 2 to 12 bytes. The lookup runs on the full identifier text, suffix
//! included, which is how `defined?` is found.

use garnet_lexer_core::TokenKind;

/// Look up a reserved word by its exact text.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &[u8]) -> Option<TokenKind> {
    let kind = match text.len() {
        2 => match text {
            b"do" => TokenKind::KeywordDo,
            b"if" => TokenKind::KeywordIf,
            b"in" => TokenKind::KeywordIn,
            b"or" => TokenKind::KeywordOr,
            _ => return None,
        },
        3 => match text {
            b"END" => TokenKind::KeywordEndBlock,
            b"and" => TokenKind::KeywordAnd,
            b"def" => TokenKind::KeywordDef,
            b"end" => TokenKind::KeywordEnd,
            b"for" => TokenKind::KeywordFor,
            b"nil" => TokenKind::KeywordNil,
            b"not" => TokenKind::KeywordNot,
            _ => return None,
        },
        4 => match text {
            b"case" => TokenKind::KeywordCase,
            b"else" => TokenKind::KeywordElse,
            b"next" => TokenKind::KeywordNext,
            b"redo" => TokenKind::KeywordRedo,
            b"self" => TokenKind::KeywordSelf,
            b"then" => TokenKind::KeywordThen,
            b"true" => TokenKind::KeywordTrue,
            b"when" => TokenKind::KeywordWhen,
            _ => return None,
        },
        5 => match text {
            b"BEGIN" => TokenKind::KeywordBeginBlock,
            b"alias" => TokenKind::KeywordAlias,
            b"begin" => TokenKind::KeywordBegin,
            b"break" => TokenKind::KeywordBreak,
            b"class" => TokenKind::KeywordClass,
            b"elsif" => TokenKind::KeywordElsif,
            b"false" => TokenKind::KeywordFalse,
            b"retry" => TokenKind::KeywordRetry,
            b"super" => TokenKind::KeywordSuper,
            b"undef" => TokenKind::KeywordUndef,
            b"until" => TokenKind::KeywordUntil,
            b"while" => TokenKind::KeywordWhile,
            b"yield" => TokenKind::KeywordYield,
            _ => return None,
        },
        6 => match text {
            b"ensure" => TokenKind::KeywordEnsure,
            b"module" => TokenKind::KeywordModule,
            b"rescue" => TokenKind::KeywordRescue,
            b"return" => TokenKind::KeywordReturn,
            b"unless" => TokenKind::KeywordUnless,
            _ => return None,
        },
        8 => match text {
            b"__FILE__" => TokenKind::KeywordFile,
            b"__LINE__" => TokenKind::KeywordLine,
            b"defined?" => TokenKind::KeywordDefined,
            _ => return None,
        },
        12 if text == b"__ENCODING__" => TokenKind::KeywordEncoding,
        _ => return None,
    };
    Some(kind)
}
