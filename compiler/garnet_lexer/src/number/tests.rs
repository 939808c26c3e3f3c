use crate::test_helpers::{first, kinds, lit};
use garnet_lexer_core::TokenKind;
use pretty_assertions::assert_eq;

fn number(source: &str) -> (TokenKind, String) {
    let (pos, kind, literal) = first(source);
    assert_eq!(pos, 0);
    (kind, literal.unwrap_or_default())
}

// === Integers ===

#[test]
fn decimal_integers() {
    for source in ["0", "7", "42", "1_000_000", "0d19", "0D9"] {
        assert_eq!(
            number(source),
            (TokenKind::DecimalInteger, source.to_owned()),
            "{source}"
        );
    }
}

#[test]
fn prefixed_bases() {
    let cases = [
        ("0b1010", TokenKind::BinaryInteger),
        ("0B1_1", TokenKind::BinaryInteger),
        ("0o17", TokenKind::OctalInteger),
        ("0O7", TokenKind::OctalInteger),
        ("0_17", TokenKind::OctalInteger),
        ("017", TokenKind::OctalInteger),
        ("0x1F", TokenKind::HexadecimalInteger),
        ("0XdeadBEEF", TokenKind::HexadecimalInteger),
    ];
    for (source, kind) in cases {
        assert_eq!(number(source), (kind, source.to_owned()), "{source}");
    }
}

#[test]
fn digits_outside_the_base_end_the_literal() {
    assert_eq!(
        kinds("0b12"),
        vec![TokenKind::BinaryInteger, TokenKind::DecimalInteger]
    );
    assert_eq!(number("018"), (TokenKind::OctalInteger, "01".to_owned()));
}

// === Floats ===

#[test]
fn floats() {
    for source in ["1.5", "0.25", "1.5e10", "2e3", "2E-3", "6.02e+23", "0e1", "1_0.0_1"] {
        assert_eq!(
            number(source),
            (TokenKind::Float, source.to_owned()),
            "{source}"
        );
    }
}

#[test]
fn dot_without_digit_is_a_method_call() {
    assert_eq!(
        kinds("1.abs"),
        vec![
            TokenKind::DecimalInteger,
            TokenKind::Dot,
            TokenKind::LocalVarIdent,
        ]
    );
    assert_eq!(
        kinds("1..2"),
        vec![
            TokenKind::DecimalInteger,
            TokenKind::Dot2,
            TokenKind::DecimalInteger,
        ]
    );
}

#[test]
fn exponent_needs_a_digit() {
    assert_eq!(
        kinds("1e"),
        vec![TokenKind::DecimalInteger, TokenKind::LocalVarIdent]
    );
    assert_eq!(
        kinds("1e+"),
        vec![TokenKind::DecimalInteger, TokenKind::LocalVarIdent, TokenKind::Plus]
    );
}

// === Signs ===

#[test]
fn signed_literals_keep_their_sign() {
    assert_eq!(first("-0x10"), lit(0, TokenKind::HexadecimalInteger, "-0x10"));
    assert_eq!(first("+1.5"), lit(0, TokenKind::Float, "+1.5"));
    assert_eq!(first("-0"), lit(0, TokenKind::DecimalInteger, "-0"));
}
