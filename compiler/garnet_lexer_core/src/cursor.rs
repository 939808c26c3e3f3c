//! Byte cursor over an owned, mutable source buffer.
//!
//! The cursor tracks the read offset and the byte under it. When the offset
//! reaches the end of the source, the cursor enters the end-of-input state:
//! [`current()`](Cursor::current) reads as the sentinel `0x00` and
//! [`advance()`](Cursor::advance) becomes a no-op, so it is safe to call
//! repeatedly past the end.
//!
//! # In-place compaction
//!
//! Literal scanners decode escapes by writing each decoded byte `skip`
//! positions *behind* the read offset ([`compact()`](Cursor::compact)), where
//! `skip` counts the source bytes elided so far. The write offset never
//! overtakes the read offset because a decoded escape is never longer than
//! its source text. Bytes between the end of a decoded literal and the read
//! offset are stale and must not be read again.
//!
//! # Sticky error
//!
//! The cursor also owns the scanner's error slot. The first recorded
//! malformation wins; later ones are dropped. A malformation can still be
//! recorded after the end of input was reached (a construct truncated at EOF).

use crate::{ScanError, ScanErrorKind, Span};

/// Read/write cursor over the source bytes.
#[derive(Clone, Debug)]
pub struct Cursor {
    buf: Vec<u8>,
    /// Length of the scannable content.
    len: u32,
    /// Current read offset.
    pos: u32,
    /// Byte at `pos`, or `0x00` at end of input.
    current: u8,
    at_end: bool,
    error: Option<ScanError>,
}

impl Cursor {
    pub(crate) fn new(buf: Vec<u8>) -> Self {
        let len = u32::try_from(buf.len()).unwrap_or(u32::MAX);
        let mut cursor = Cursor {
            buf,
            len,
            pos: 0,
            current: 0,
            at_end: false,
            error: None,
        };
        cursor.refresh();
        cursor
    }

    fn refresh(&mut self) {
        if self.pos >= self.len {
            self.pos = self.len;
            self.at_end = true;
            self.current = 0;
        } else {
            self.current = self.buf[self.pos as usize];
        }
    }

    /// Byte at the read offset; `0x00` at end of input.
    ///
    /// Interior null bytes also read as `0x00`; use
    /// [`is_eof()`](Self::is_eof) to tell them apart.
    #[inline]
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Current read offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the scannable content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.len
    }

    /// Returns `true` once the end of input has been reached (or forced).
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.at_end
    }

    /// Move one byte forward. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.at_end {
            return;
        }
        self.pos += 1;
        self.refresh();
    }

    /// Move `n` bytes forward, stopping at end of input.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        if self.at_end {
            return;
        }
        self.pos = self.pos.saturating_add(n);
        self.refresh();
    }

    /// Jump forward to `pos`.
    pub fn advance_to(&mut self, pos: u32) {
        debug_assert!(pos >= self.pos, "cursor never moves backwards");
        if self.at_end {
            return;
        }
        self.pos = pos;
        self.refresh();
    }

    /// The next `n` bytes starting at the current byte, or `None` if fewer
    /// than `n` remain.
    pub fn peek(&self, n: usize) -> Option<&[u8]> {
        if self.at_end {
            return None;
        }
        let start = self.pos as usize;
        let end = start.checked_add(n)?;
        if end > self.len as usize {
            return None;
        }
        Some(&self.buf[start..end])
    }

    /// Byte `k` positions ahead of the current one; `0x00` past the end.
    #[inline]
    pub fn peek_byte(&self, k: u32) -> u8 {
        if self.at_end {
            return 0;
        }
        let at = self.pos.saturating_add(k);
        if at >= self.len {
            0
        } else {
            self.buf[at as usize]
        }
    }

    /// Unread source bytes from the current position.
    pub fn rest(&self) -> &[u8] {
        if self.at_end {
            return &[];
        }
        &self.buf[self.pos as usize..self.len as usize]
    }

    /// Returns `true` if the unread bytes begin with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Returns `true` if `at` is the first byte of a line.
    ///
    /// Looks at the byte before `at`, which is never rewritten by compaction
    /// while `at` has not been read yet.
    pub fn is_line_start(&self, at: u32) -> bool {
        at == 0 || self.buf.get(at as usize - 1) == Some(&b'\n')
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must be `false`, otherwise the loop would spin at end of input.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.at_end && pred(self.current) {
            self.pos += 1;
            self.refresh();
        }
    }

    /// Advance to the next `\n` (not consumed) or to the end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < rest().len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.rest()) {
            Some(offset) => {
                self.pos += offset as u32;
                self.refresh();
            }
            None => self.advance_to(self.len),
        }
    }

    /// Write `byte` `skip` positions behind the read offset, then advance.
    ///
    /// This is the single write primitive used by the escape decoder and the
    /// quoted-literal scanners.
    #[inline]
    pub fn compact(&mut self, skip: u32, byte: u8) {
        debug_assert!(skip <= self.pos, "write offset underflows the buffer");
        if !self.at_end {
            self.buf[(self.pos - skip) as usize] = byte;
        }
        self.advance();
    }

    /// Bytes covered by `span`.
    #[inline]
    pub fn slice(&self, span: Span) -> &[u8] {
        &self.buf[span.range()]
    }

    /// Bytes from `start` up to the read offset.
    pub fn slice_from(&self, start: u32) -> &[u8] {
        &self.buf[start as usize..self.pos as usize]
    }

    /// Force the end-of-input state at `pos`.
    ///
    /// Used for the `__END__` marker: nothing after it is lexed, and every
    /// later end-of-input token reports `pos`.
    pub fn terminate_at(&mut self, pos: u32) {
        self.pos = pos.min(self.len);
        self.at_end = true;
        self.current = 0;
    }

    /// Record `kind` at the current offset unless an error is already recorded.
    pub fn fail(&mut self, kind: ScanErrorKind) -> bool {
        self.fail_at(self.pos, kind)
    }

    /// Record `kind` at `pos` unless an error is already recorded.
    ///
    /// Returns `true` if this call recorded the error.
    pub fn fail_at(&mut self, pos: u32, kind: ScanErrorKind) -> bool {
        if self.error.is_some() {
            return false;
        }
        self.error = Some(ScanError::new(pos, kind));
        true
    }

    /// The first recorded error, if any.
    #[inline]
    pub fn error(&self) -> Option<&ScanError> {
        self.error.as_ref()
    }

    /// Give back the (partially rewritten) buffer and the recorded error.
    pub fn into_parts(self) -> (Vec<u8>, Option<ScanError>) {
        (self.buf, self.error)
    }
}
