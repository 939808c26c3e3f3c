use super::*;

#[test]
fn from_str_copies_bytes() {
    let text = String::from("puts 1");
    let buf = SourceBuffer::from(text.as_str());
    assert_eq!(buf.as_bytes(), b"puts 1");
    assert_eq!(buf.len(), 6);
    assert!(!buf.is_empty());
}

#[test]
fn from_vec_takes_ownership() {
    let bytes = b"x = 1".to_vec();
    let ptr = bytes.as_ptr();
    let buf = SourceBuffer::from(bytes);
    assert_eq!(buf.as_bytes().as_ptr(), ptr);
    assert_eq!(buf.into_bytes(), b"x = 1");
}

#[test]
fn from_string_reuses_allocation() {
    let text = String::from("abc");
    let ptr = text.as_ptr();
    let buf = SourceBuffer::from(text);
    assert_eq!(buf.as_bytes().as_ptr(), ptr);
}

#[test]
fn empty_source() {
    let buf = SourceBuffer::from("");
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    let cursor = buf.into_cursor();
    assert!(cursor.is_eof());
}

#[test]
fn into_cursor_starts_at_first_byte() {
    let cursor = SourceBuffer::from("hi").into_cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'h');
}
