#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use std::io::{self, Read};

use jslex_core::{RawTag, SourceBuffer};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::lexer::Lexer;
use crate::token::TokenKind;

/// Reader handing out at most `step` bytes per call.
struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(out.len()).min(self.data.len());
        out[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Reader that is interrupted before every successful read.
struct Interrupting<'a> {
    data: &'a [u8],
    interrupt_next: bool,
}

impl Read for Interrupting<'_> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        self.interrupt_next = !self.interrupt_next;
        if !self.interrupt_next {
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        self.data.read(out)
    }
}

/// Reader that yields some bytes, then fails.
struct Failing<'a> {
    data: &'a [u8],
}

impl Read for Failing<'_> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer went away"));
        }
        self.data.read(out)
    }
}

/// Reader counting its `read` calls.
struct Counting<'a> {
    data: &'a [u8],
    reads: usize,
}

impl Read for Counting<'_> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        self.data.read(out)
    }
}

type Owned = (TokenKind, Vec<u8>, usize);

fn collect_stream<R: Read>(mut lexer: StreamLexer<R>) -> Vec<Owned> {
    let mut out = Vec::new();
    loop {
        let token = lexer.next_token().unwrap();
        if token.is_eof() {
            break;
        }
        out.push((token.kind, token.text.to_vec(), token.offset));
    }
    out
}

fn collect_memory(source: &[u8]) -> Vec<Owned> {
    let buf = SourceBuffer::new(source).unwrap();
    Lexer::new(&buf)
        .map(|t| (t.kind, t.text.to_vec(), t.offset))
        .collect()
}

fn trickle(source: &[u8], step: usize) -> Vec<Owned> {
    collect_stream(StreamLexer::new(Trickle { data: source, step }))
}

// === Equivalence with the in-memory lexer ===

#[test]
fn byte_at_a_time_matches_memory() {
    let sources: [&[u8]; 8] = [
        b"var i=5;",
        b"`outer${{x: 10}}bar${ raw`nested${2}endnest` }end`",
        b"x\n-->comment\r\n<!--y\n",
        b">>>=>>>>= a?.5:b ?. c",
        "'str\u{2028}ing' \u{2029}\u{a0}Ø a〉".as_bytes(),
        b"'str\\x41\\u{10FFFF}' '\\u{41' \\u0061b \\u{}",
        b"50e+-0 0xg 010xF .5e-3",
        b"/*a\nb*/ /*c",
    ];
    for source in sources {
        assert_eq!(
            trickle(source, 1),
            collect_memory(source),
            "{:?}",
            String::from_utf8_lossy(source)
        );
    }
}

#[test]
fn chunked_reader_spanning_many_refills() {
    let source = "let s = 'text';\n".repeat(2_000);
    assert_eq!(
        trickle(source.as_bytes(), 4096),
        collect_memory(source.as_bytes())
    );
}

#[test]
fn token_longer_than_a_chunk() {
    let mut source = String::from("a /*");
    source.push_str(&"x".repeat(3 * CHUNK_SIZE));
    source.push_str("*/ b");
    let tokens = trickle(source.as_bytes(), CHUNK_SIZE);
    assert_eq!(tokens, collect_memory(source.as_bytes()));
    assert_eq!(tokens[2].1.len(), 3 * CHUNK_SIZE + 4);
}

#[test]
fn interrupted_reads_are_retried() {
    let source = b"a + b";
    let lexer = StreamLexer::new(Interrupting {
        data: source,
        interrupt_next: false,
    });
    assert_eq!(collect_stream(lexer), collect_memory(source));
}

// === Offsets & termination ===

#[test]
fn offset_walk() {
    let mut lexer = StreamLexer::new(Trickle {
        data: b"var i=5;",
        step: 1,
    });
    assert_eq!(lexer.offset(), 0);
    for expected in [3, 4, 5, 6, 7, 8] {
        lexer.next_token().unwrap();
        assert_eq!(lexer.offset(), expected);
    }
}

#[test]
fn end_of_input_is_idempotent() {
    let mut lexer = StreamLexer::new(&b"x"[..]);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token().unwrap();
        assert!(token.is_eof());
        assert_eq!(token.offset, 1);
        assert!(token.text.is_empty());
    }
}

#[test]
fn empty_stream() {
    let mut lexer = StreamLexer::new(io::empty());
    assert!(lexer.next_token().unwrap().is_eof());
}

// === Failures ===

#[test]
fn read_failure_is_sticky() {
    let mut lexer = StreamLexer::new(Failing { data: b"ab" });
    let err = lexer.next_token().unwrap_err();
    assert_eq!(
        err,
        LexError::Io {
            kind: io::ErrorKind::ConnectionReset,
            message: "peer went away".to_owned(),
        }
    );
    // `ab` may continue in unread input, so it is never returned.
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap_err(), err);
    }
}

#[test]
fn tokens_before_a_failure_are_returned() {
    let mut lexer = StreamLexer::new(Failing { data: b"a b cdefgh" });
    let mut texts = Vec::new();
    let err = loop {
        match lexer.next_token() {
            Ok(token) => texts.push(token.text.to_vec()),
            Err(err) => break err,
        }
    };
    // The trailing identifier touches the end of the window and is held back.
    assert_eq!(texts, [&b"a"[..], b" ", b"b", b" "]);
    assert!(matches!(err, LexError::Io { .. }));
}

// === Window management ===

#[test]
fn window_only_holds_the_current_token() {
    let source = "a = b + c;\n".repeat(10_000);
    let mut lexer = StreamLexer::new(source.as_bytes());
    let mut tokens = 0usize;
    loop {
        let token = lexer.next_token().unwrap();
        if token.is_eof() {
            break;
        }
        tokens += 1;
        assert!(lexer.buffer.len() as usize <= 2 * CHUNK_SIZE);
    }
    assert_eq!(tokens, 10_000 * 11);
    assert_eq!(lexer.offset(), source.len());
}

#[test]
fn growing_token_doubles_the_window() {
    let mut source = vec![b'`'];
    source.resize(4 * 1024 * 1024, b'$');
    let mut lexer = StreamLexer::new(Counting {
        data: &source,
        reads: 0,
    });
    let token = lexer.next_token().unwrap();
    assert_eq!(token.raw_tag(), RawTag::UnterminatedTemplate);
    assert_eq!(token.len(), source.len());
    assert!(lexer.next_token().unwrap().is_eof());
    // Each rescan follows one read that doubles the window, plus the final
    // empty read: about log2(4 MiB / 8 KiB) + 2.
    let reads = lexer.reader.reads;
    assert!(reads <= 16, "{reads} reads for a {} byte token", source.len());
}

#[test]
fn growing_token_over_short_reads() {
    let mut source = vec![b'`'];
    source.resize(256 * 1024, b'$');
    let mut lexer = StreamLexer::new(Trickle {
        data: &source,
        step: 1024,
    });
    let token = lexer.next_token().unwrap();
    assert_eq!(token.raw_tag(), RawTag::UnterminatedTemplate);
    assert_eq!(token.len(), source.len());
    assert!(lexer.next_token().unwrap().is_eof());
}

// === Properties ===

proptest! {
    #[test]
    fn streaming_matches_memory(
        source in proptest::collection::vec(
            prop_oneof![
                Just(b'a'),
                Just(b'0'),
                Just(b'.'),
                Just(b' '),
                Just(b'\n'),
                Just(b'\r'),
                Just(b'\''),
                Just(b'`'),
                Just(b'$'),
                Just(b'{'),
                Just(b'}'),
                Just(b'\\'),
                Just(b'u'),
                Just(b'/'),
                Just(b'*'),
                Just(b'-'),
                Just(b'>'),
                Just(b'<'),
                Just(b'!'),
                Just(b'?'),
                Just(b'\0'),
                Just(0xE2),
                Just(0x80),
                Just(0xA8),
            ],
            0..96,
        ),
        step in 1usize..8,
    ) {
        prop_assert_eq!(trickle(&source, step), collect_memory(&source));
    }

    #[test]
    fn streaming_matches_memory_on_random_bytes(
        source in proptest::collection::vec(any::<u8>(), 0..128),
        step in 1usize..5,
    ) {
        prop_assert_eq!(trickle(&source, step), collect_memory(&source));
    }
}
