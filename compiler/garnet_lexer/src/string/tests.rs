use crate::test_helpers::{bare, error_of, first, kinds, lit, scan_all};
use crate::Scanner;
use garnet_lexer_core::{ScanError, ScanErrorKind, TokenKind};
use pretty_assertions::assert_eq;

// === Single-quoted ===

#[test]
fn single_quoted_is_verbatim() {
    assert_eq!(first(r"'a\nb #{c}'"), lit(0, TokenKind::String, r"a\nb #{c}"));
}

#[test]
fn single_quoted_unescapes_backslash_and_quote() {
    assert_eq!(first(r"'\\'"), lit(0, TokenKind::String, r"\"));
    assert_eq!(first(r"'it\'s'"), lit(0, TokenKind::String, "it's"));
}

#[test]
fn single_quoted_spans_lines() {
    assert_eq!(first("'a\nb'"), lit(0, TokenKind::String, "a\nb"));
}

#[test]
fn unterminated_single_quoted() {
    assert_eq!(
        scan_all("'abc"),
        vec![
            lit(0, TokenKind::Illegal, "abc"),
            bare(4, TokenKind::EndOfInput),
        ]
    );
    assert_eq!(
        error_of("'abc"),
        Some(ScanError::new(0, ScanErrorKind::UnterminatedString))
    );
}

// === Double-quoted ===

#[test]
fn double_quoted_decodes_escapes() {
    assert_eq!(first(r##""a\tb\"c""##), lit(0, TokenKind::String, "a\tb\"c"));
}

#[test]
fn empty_strings() {
    assert_eq!(
        scan_all(r##""" ''"##),
        vec![
            lit(0, TokenKind::String, ""),
            lit(3, TokenKind::String, ""),
            bare(5, TokenKind::EndOfInput),
        ]
    );
}

#[test]
fn hash_without_introducer_is_text() {
    assert_eq!(first(r##""# #x #""##), lit(0, TokenKind::String, "# #x #"));
    assert_eq!(first(r##""#@ #$1""##), lit(0, TokenKind::String, "#@ #$1"));
}

#[test]
fn escaped_hash_is_not_an_introducer() {
    assert_eq!(first(r##""\#{a}""##), lit(0, TokenKind::String, "#{a}"));
}

#[test]
fn unterminated_double_quoted() {
    assert_eq!(
        scan_all(r##""ab\n"##),
        vec![
            lit(0, TokenKind::Illegal, "ab\n"),
            bare(5, TokenKind::EndOfInput),
        ]
    );
}

// === Interpolation ===

#[test]
fn variable_interpolation_yields_the_variable() {
    assert_eq!(
        scan_all(r##""a#@b c""##),
        vec![
            lit(0, TokenKind::StringPart, "a"),
            lit(2, TokenKind::InstanceVarIdent, "@b"),
            lit(5, TokenKind::String, " c"),
            bare(8, TokenKind::EndOfInput),
        ]
    );
}

#[test]
fn consecutive_variable_interpolations() {
    assert_eq!(
        scan_all(r##""#$g#@@c""##),
        vec![
            lit(0, TokenKind::StringPart, ""),
            lit(1, TokenKind::GlobalVarIdent, "$g"),
            lit(4, TokenKind::ClassVarIdent, "@@c"),
            lit(8, TokenKind::String, ""),
            bare(9, TokenKind::EndOfInput),
        ]
    );
}

#[test]
fn braces_inside_interpolation_are_tracked() {
    assert_eq!(
        scan_all(r##""#{{}}""##),
        vec![
            lit(0, TokenKind::StringPart, ""),
            bare(1, TokenKind::InsertBegin),
            bare(3, TokenKind::LBrace),
            bare(4, TokenKind::RBrace),
            bare(5, TokenKind::InsertEnd),
            lit(6, TokenKind::String, ""),
            bare(7, TokenKind::EndOfInput),
        ]
    );
}

#[test]
fn statements_inside_interpolation() {
    assert_eq!(
        kinds(r##""x#{a + 1}y""##),
        vec![
            TokenKind::StringPart,
            TokenKind::InsertBegin,
            TokenKind::LocalVarIdent,
            TokenKind::Plus,
            TokenKind::DecimalInteger,
            TokenKind::InsertEnd,
            TokenKind::String,
        ]
    );
}

#[test]
fn interpolation_frame_has_fresh_adjacency() {
    assert_eq!(
        scan_all(r##"a"#{-1}""##),
        vec![
            lit(0, TokenKind::LocalVarIdent, "a"),
            lit(1, TokenKind::StringPart, ""),
            bare(2, TokenKind::InsertBegin),
            lit(4, TokenKind::DecimalInteger, "-1"),
            bare(6, TokenKind::InsertEnd),
            lit(7, TokenKind::String, ""),
            bare(8, TokenKind::EndOfInput),
        ]
    );
}

#[test]
fn string_after_interpolation_marks_parent_adjacent() {
    assert_eq!(
        kinds(r##""#{a}"-1"##),
        vec![
            TokenKind::StringPart,
            TokenKind::InsertBegin,
            TokenKind::LocalVarIdent,
            TokenKind::InsertEnd,
            TokenKind::String,
            TokenKind::Minus,
            TokenKind::DecimalInteger,
        ]
    );
}

#[test]
fn earlier_literals_survive_later_decoding() {
    let mut scanner = Scanner::new(r##""a\tb#{"\n"}c\td""##);
    let part = scanner.next_token();
    let rest: Vec<_> = scanner.tokens().collect();
    assert_eq!(scanner.literal(&part), Some(&b"a\tb"[..]));
    assert_eq!(scanner.literal(&rest[1]), Some(&b"\n"[..]));
    assert_eq!(scanner.literal(&rest[3]), Some(&b"c\td"[..]));
}

// === Percent literals ===

#[test]
fn percent_literal_forms() {
    let cases = [
        ("%(a b)", "a b"),
        ("%Q[x\\ty]", "x\ty"),
        ("%{}", ""),
        ("%<a>", "a"),
        ("%|a|", "a"),
        ("%q(a\\tb)", "a\\tb"),
        ("%q!a\\!b!", "a!b"),
    ];
    for (source, text) in cases {
        assert_eq!(first(source), lit(0, TokenKind::String, text), "{source:?}");
    }
}

#[test]
fn percent_q_with_interpolation() {
    assert_eq!(
        scan_all("%Q(#{a})"),
        vec![
            lit(0, TokenKind::StringPart, ""),
            bare(3, TokenKind::InsertBegin),
            lit(5, TokenKind::LocalVarIdent, "a"),
            bare(6, TokenKind::InsertEnd),
            lit(7, TokenKind::String, ""),
            bare(8, TokenKind::EndOfInput),
        ]
    );
}

#[test]
fn paired_delimiters_do_not_nest() {
    assert_eq!(
        kinds("%(a(b)c)"),
        vec![
            TokenKind::String,
            TokenKind::LocalVarIdent,
            TokenKind::RParen,
        ]
    );
}

#[test]
fn percent_letter_without_delimiter_is_modulo() {
    assert_eq!(
        kinds("%Qa"),
        vec![TokenKind::Mod, TokenKind::ConstIdent]
    );
    assert_eq!(
        kinds("%w(a)"),
        vec![
            TokenKind::Mod,
            TokenKind::LocalVarIdent,
            TokenKind::LParen,
            TokenKind::LocalVarIdent,
            TokenKind::RParen,
        ]
    );
}

#[test]
fn percent_literal_where_an_operand_starts() {
    assert_eq!(
        kinds("x=%(a)"),
        vec![TokenKind::LocalVarIdent, TokenKind::Assign, TokenKind::String]
    );
    assert_eq!(
        kinds("foo(%q(a))"),
        vec![
            TokenKind::LocalVarIdent,
            TokenKind::LParen,
            TokenKind::String,
            TokenKind::RParen,
        ]
    );
    assert_eq!(
        kinds("[%(a),%Q{b}]"),
        vec![
            TokenKind::LBracket,
            TokenKind::String,
            TokenKind::Comma,
            TokenKind::String,
            TokenKind::RBracket,
        ]
    );
    assert_eq!(
        kinds("1+%(a)"),
        vec![TokenKind::DecimalInteger, TokenKind::Plus, TokenKind::String]
    );
}

#[test]
fn percent_literal_as_a_command_argument() {
    assert_eq!(
        scan_all("puts %(a b)"),
        vec![
            lit(0, TokenKind::LocalVarIdent, "puts"),
            lit(5, TokenKind::String, "a b"),
            bare(11, TokenKind::EndOfInput),
        ]
    );
}

#[test]
fn percent_after_a_value_is_modulo() {
    assert_eq!(
        kinds("(a)%(b)"),
        vec![
            TokenKind::LParen,
            TokenKind::LocalVarIdent,
            TokenKind::RParen,
            TokenKind::Mod,
            TokenKind::LParen,
            TokenKind::LocalVarIdent,
            TokenKind::RParen,
        ]
    );
    assert_eq!(
        kinds("10 %(3)"),
        vec![
            TokenKind::DecimalInteger,
            TokenKind::Mod,
            TokenKind::LParen,
            TokenKind::DecimalInteger,
            TokenKind::RParen,
        ]
    );
}

#[test]
fn unterminated_percent_literal() {
    assert_eq!(
        error_of("%q(abc"),
        Some(ScanError::new(0, ScanErrorKind::UnterminatedString))
    );
}
