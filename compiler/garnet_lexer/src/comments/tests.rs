use super::*;
use crate::test_helpers::{bare, error_of, kinds, lit, scan_all};
use garnet_lexer_core::ScanError;
use pretty_assertions::assert_eq;

// === Line comments ===

#[test]
fn line_comment_keeps_the_newline() {
    assert_eq!(
        scan_all("a # note\nb"),
        vec![
            lit(0, TokenKind::LocalVarIdent, "a"),
            bare(8, TokenKind::NewLine),
            lit(9, TokenKind::LocalVarIdent, "b"),
            bare(10, TokenKind::EndOfInput),
        ]
    );
}

#[test]
fn line_comment_at_end_of_input() {
    assert_eq!(scan_all("# only"), vec![bare(6, TokenKind::EndOfInput)]);
}

// === Block comments ===

#[test]
fn block_comment_is_skipped() {
    assert_eq!(
        scan_all("a\n=begin\nignored\n=end\nb"),
        vec![
            lit(0, TokenKind::LocalVarIdent, "a"),
            bare(1, TokenKind::NewLine),
            lit(22, TokenKind::LocalVarIdent, "b"),
            bare(23, TokenKind::EndOfInput),
        ]
    );
}

#[test]
fn block_comment_markers_may_carry_trailing_text() {
    assert_eq!(
        kinds("=begin doc\nx\n=end trailing words\ny"),
        vec![TokenKind::LocalVarIdent]
    );
}

#[test]
fn block_comment_closed_at_end_of_input() {
    assert_eq!(scan_all("=begin\n=end"), vec![bare(11, TokenKind::EndOfInput)]);
}

#[test]
fn end_marker_must_start_its_line() {
    assert_eq!(
        error_of("=begin\n =end\n"),
        Some(ScanError::new(0, ScanErrorKind::UnterminatedComment))
    );
}

#[test]
fn sentinel_words_must_end() {
    assert_eq!(
        kinds("=beginning"),
        vec![TokenKind::Assign, TokenKind::LocalVarIdent]
    );
    assert_eq!(
        error_of("=begin\n=ending\n"),
        Some(ScanError::new(0, ScanErrorKind::UnterminatedComment))
    );
}

#[test]
fn unterminated_block_comment() {
    assert_eq!(
        scan_all("x\n=begin\nnever closed"),
        vec![
            lit(0, TokenKind::LocalVarIdent, "x"),
            bare(1, TokenKind::NewLine),
            bare(2, TokenKind::Illegal),
            bare(21, TokenKind::EndOfInput),
        ]
    );
}

#[test]
fn block_comment_hides_string_syntax() {
    assert_eq!(
        kinds("a\n=begin\n\"#{x}\"\n=end\n"),
        vec![TokenKind::LocalVarIdent, TokenKind::NewLine]
    );
}
