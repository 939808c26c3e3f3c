//! Owned, mutable source buffer.
//!
//! Escape decoding compacts literals in place, so the scanner must own its
//! bytes exclusively. Borrowed text is copied on the way in; an owned
//! `Vec<u8>` is taken over without a copy.
//!
//! # File Size
//!
//! Offsets are `u32`. Sources larger than `u32::MAX` bytes (~4 GiB) are
//! accepted but the scanned length saturates at `u32::MAX`; bytes past that
//! point are never read.

use crate::Cursor;

/// Source bytes exclusively owned by one scanner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
}

impl SourceBuffer {
    /// Take ownership of `bytes` without copying.
    pub fn new(bytes: Vec<u8>) -> Self {
        SourceBuffer { bytes }
    }

    /// Returns the source bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the scannable content in bytes.
    pub fn len(&self) -> u32 {
        u32::try_from(self.bytes.len()).unwrap_or(u32::MAX)
    }

    /// Returns `true` if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Hand the bytes to a [`Cursor`] positioned at offset 0.
    pub fn into_cursor(self) -> Cursor {
        Cursor::new(self.bytes)
    }

    /// Give the bytes back.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<Vec<u8>> for SourceBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        SourceBuffer::new(bytes)
    }
}

impl From<&[u8]> for SourceBuffer {
    fn from(bytes: &[u8]) -> Self {
        SourceBuffer::new(bytes.to_vec())
    }
}

impl From<String> for SourceBuffer {
    fn from(text: String) -> Self {
        SourceBuffer::new(text.into_bytes())
    }
}

impl From<&str> for SourceBuffer {
    fn from(text: &str) -> Self {
        SourceBuffer::new(text.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests;
