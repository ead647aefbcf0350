// src/lexer/scanner.rs
// Stream-driven DFA tokenizer: maximal munch with backtracking to the last accepting state.

use std::{
    fs::File,
    io::{self, Read, Seek},
    path::Path,
};

use crate::lexer::{
    cursor::{Cursor, Position},
    error::LexError,
    stream::Stream,
    tables::{
        classify::classify_input,
        dfa::{self, Dfa, S},
        tokens::{Lexed, Token, TokenKind},
    },
};

/// One consumed byte of the token in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    state: S,         // state before consuming `byte`
    byte: Option<u8>, // None = end-of-input sentinel
    at: Position,     // cursor before consuming `byte`
}

/// Append-only log of the token in flight. Backtracking pops from the top but
/// never below `floor`, which is raised each time a byte is consumed from an
/// accepting state (a longer match from there always wins).
#[derive(Debug, Default)]
struct ScanLog {
    entries: Vec<Entry>,
    floor: usize,
}

impl ScanLog {
    fn reset(&mut self) {
        self.entries.clear();
        self.floor = 0;
    }

    fn commit(&mut self) {
        self.floor = self.entries.len();
    }

    fn push(&mut self, e: Entry) {
        self.entries.push(e);
    }

    fn pop(&mut self) -> Option<Entry> {
        if self.entries.len() > self.floor {
            self.entries.pop()
        } else {
            None
        }
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn start(&self) -> Option<Position> {
        self.entries.first().map(|e| e.at)
    }

    fn lexeme(&self) -> String {
        let bytes: Vec<u8> = self.entries.iter().filter_map(|e| e.byte).collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

/// Tokenizer bound to one input source.
///
/// The automaton is shared (see [`dfa::global`]); the stream, cursor and scan
/// log belong to this instance alone.
pub struct Tokenizer<R> {
    dfa: &'static Dfa,
    stream: Stream<R>,
    cursor: Cursor,
    log: ScanLog,
    finished: bool,
}

impl Tokenizer<File> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LexError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LexError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("opened {}", path.display());
        Ok(Self::new(file))
    }
}

impl<R: Read + Seek> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            dfa: dfa::global(),
            stream: Stream::new(reader),
            cursor: Cursor::new(),
            log: ScanLog::default(),
            finished: false,
        }
    }

    /// Position of the next unread byte.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// True once `End` has been returned or a scan failed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Releases the underlying source.
    pub fn close(self) -> R {
        self.stream.into_inner()
    }

    /// Scans one token. After `End` (or any error) every later call
    /// returns `End`.
    pub fn next_token(&mut self) -> Result<Lexed, LexError> {
        if self.finished {
            return Ok(Lexed::End);
        }
        let res = self.scan();
        if !matches!(res, Ok(Lexed::Token(_))) {
            self.finished = true;
        }
        res
    }

    fn scan(&mut self) -> Result<Lexed, LexError> {
        self.log.reset();
        let mut state = self.dfa.start;

        while state != S::Dead {
            let at = self.cursor.position();
            let b = self.stream.next_byte()?;
            if b.is_none() && self.log.is_empty() {
                log::debug!("end of input at ({}, {})", at.row, at.column);
                return Ok(Lexed::End);
            }
            self.cursor.advance(b);

            let next = self.dfa.step(state, classify_input(b));
            if state == S::Start && next == S::Start {
                // separator; never part of a lexeme
                continue;
            }
            if state.is_accepting() {
                self.log.commit();
            }
            self.log.push(Entry { state, byte: b, at });
            state = next;
        }

        let attempted = self.log.lexeme();
        match self.backtrack(state)? {
            Some(kind) => {
                let start = self.log.start().unwrap_or(self.cursor.position());
                let token = Token::new(kind, &self.log.lexeme(), start.row, start.column);
                log::debug!("{token}");
                Ok(Lexed::Token(token))
            }
            None => {
                let at = self.cursor.position();
                log::warn!(
                    "no token matches {attempted:?} at ({}, {})",
                    at.row,
                    at.column
                );
                Err(LexError::Malformed {
                    row: at.row,
                    column: at.column,
                    lexeme: attempted,
                })
            }
        }
    }

    /// Pops the log until an accepting state is on top, un-reading one byte
    /// per step. `None` if the log runs out first.
    fn backtrack(&mut self, mut state: S) -> Result<Option<TokenKind>, LexError> {
        loop {
            if let Some(kind) = self.dfa.token_of(state) {
                return Ok(Some(kind));
            }
            let Some(entry) = self.log.pop() else {
                return Ok(None);
            };
            self.stream.unread(entry.byte)?;
            self.cursor.rewind_to(entry.at);
            debug_assert_eq!(self.stream.offset(), self.cursor.offset());
            log::trace!(
                "backtrack {:?} -> {:?} at ({}, {})",
                state,
                entry.state,
                entry.at.row,
                entry.at.column
            );
            state = entry.state;
        }
    }
}

impl<R: Read + Seek> Iterator for Tokenizer<R> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Lexed::Token(t)) => Some(Ok(t)),
            Ok(Lexed::End) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Tokenizes an in-memory buffer.
pub fn tokenize(src: &[u8]) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(io::Cursor::new(src)).collect()
}
