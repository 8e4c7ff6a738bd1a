//! Low-level raw scanner for ECMAScript-style source text.
//!
//! This crate is the bottom layer of the `jslex` tokenizer. It turns bytes
//! into `(RawTag, len)` pairs and nothing else: no token values, no escape
//! decoding, no diagnostics. The `jslex` crate maps raw tags onto the public
//! `TokenKind` set and adds the streaming front end.
//!
//! # Pipeline
//!
//! ```text
//! bytes → SourceBuffer → Cursor → RawScanner → RawToken { tag, len }
//! ```
//!
//! - [`SourceBuffer`] owns a sentinel-terminated, cache-line padded copy of
//!   the input so scan loops terminate on `0x00` without bounds checks.
//! - [`Cursor`] is a `Copy` byte cursor over that buffer.
//! - [`RawScanner`] is the state machine. Its state (position, template
//!   interpolation stack, line-start flag) can be suspended into a
//!   [`ScanState`] and resumed over a grown buffer.
//!
//! Malformed input never stops the scanner: it is reported through the
//! error range of [`RawTag`] and scanning resumes on the next byte.

mod char_class;
mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use char_class::{is_id_continue, is_id_start, is_line_terminator, is_whitespace};
pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner, ScanState, LOOKAHEAD};
pub use source_buffer::{SourceBuffer, SourceTooLarge, MAX_SOURCE_LEN};
pub use tag::{RawTag, RawToken};
