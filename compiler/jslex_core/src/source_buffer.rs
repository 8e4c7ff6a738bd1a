//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees `0x00` bytes after the source content, allowing the
//! scanner to detect the end of input without explicit bounds checking. The
//! total buffer size is rounded up to the next 64-byte boundary, with at
//! least [`MIN_PADDING`] zero bytes after the content so that `peek()`,
//! `peek2()`, `peek3()` and UTF-8 decoding stay in bounds at any position.
//!
//! Unlike a compiler front end, the tokenizer accepts arbitrary bytes: NUL
//! bytes are ordinary content inside literals and comments, and malformed
//! UTF-8 is reported by the scanner as single-byte error tokens.
//!
//! # Incremental Input
//!
//! A buffer can grow ([`extend`](SourceBuffer::extend)) and shed its consumed
//! prefix ([`discard_prefix`](SourceBuffer::discard_prefix)). The streaming
//! front end uses both to keep only the current token window in memory.

use std::fmt;

use crate::Cursor;

/// Allocation granularity of the padded buffer.
const CACHE_LINE: usize = 64;

/// Minimum number of zero bytes kept after the content.
///
/// Covers the sentinel plus the widest look-ahead (`peek3()`, or a 4-byte
/// UTF-8 decode starting on the last content byte).
const MIN_PADDING: usize = 8;

/// Largest source the buffer accepts.
///
/// Positions are `u32`; the headroom keeps `len + padding` representable.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize - CACHE_LINE;

/// The source does not fit in the 32-bit offset space of the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceTooLarge {
    /// Length that was requested, in bytes.
    pub len: usize,
}

impl fmt::Display for SourceTooLarge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "source of {} bytes exceeds the {MAX_SOURCE_LEN} byte limit",
            self.len
        )
    }
}

impl std::error::Error for SourceTooLarge {}

/// Sentinel-terminated source buffer for zero-bounds-check scanning.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// Every byte at or after `source_len` is `0x00`.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    /// Content length, also the index of the sentinel.
    source_len: u32,
}

// Vec plus length.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 32);

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer holding a copy of `source`.
    pub fn new(source: &[u8]) -> Result<Self, SourceTooLarge> {
        let source_len = checked_len(source.len())?;
        let mut buf = vec![0u8; padded_len(source.len())];
        buf[..source.len()].copy_from_slice(source);
        Ok(Self { buf, source_len })
    }

    /// Create an empty buffer, ready to be grown with [`extend`](Self::extend).
    pub fn empty() -> Self {
        Self {
            buf: vec![0u8; padded_len(0)],
            source_len: 0,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    #[cfg(test)]
    fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Append `bytes` to the content, keeping the sentinel invariant.
    ///
    /// On error the buffer is left unchanged.
    pub fn extend(&mut self, bytes: &[u8]) -> Result<(), SourceTooLarge> {
        let old_len = self.source_len as usize;
        let new_len = old_len + bytes.len();
        let source_len = checked_len(new_len)?;
        let needed = padded_len(new_len);
        if needed > self.buf.len() {
            self.buf.resize(needed, 0);
        }
        // Bytes past `old_len` are padding and therefore already zero.
        self.buf[old_len..new_len].copy_from_slice(bytes);
        self.source_len = source_len;
        Ok(())
    }

    /// Drop the first `n` content bytes, shifting the rest to offset 0.
    ///
    /// `n` is clamped to the content length. Positions held by cursors or
    /// scan states must be rebased by the same amount.
    pub fn discard_prefix(&mut self, n: u32) {
        let n = n.min(self.source_len);
        if n == 0 {
            return;
        }
        // The tail keeps its zero padding, so the sentinel invariant holds.
        self.buf.drain(..n as usize);
        self.source_len -= n;
        let needed = padded_len(self.source_len as usize);
        if self.buf.len() > needed + CACHE_LINE {
            self.buf.truncate(needed);
        }
    }
}

/// Validate a content length against [`MAX_SOURCE_LEN`].
fn checked_len(len: usize) -> Result<u32, SourceTooLarge> {
    if len > MAX_SOURCE_LEN {
        return Err(SourceTooLarge { len });
    }
    u32::try_from(len).map_err(|_| SourceTooLarge { len })
}

/// Buffer size for `len` content bytes: content + padding, rounded up to
/// the next cache line.
fn padded_len(len: usize) -> usize {
    (len + MIN_PADDING + CACHE_LINE - 1) & !(CACHE_LINE - 1)
}
