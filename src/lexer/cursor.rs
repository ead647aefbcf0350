// src/lexer/cursor.rs
// Human-readable position of the next byte to be read, kept in lockstep with the stream offset.

const NEWLINE: u8 = b'\n';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub offset: u64,
    pub row: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            offset: 0,
            row: 1,
            column: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pos: Position,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Position {
        self.pos
    }
    pub fn row(&self) -> usize {
        self.pos.row
    }
    pub fn column(&self) -> usize {
        self.pos.column
    }
    pub fn offset(&self) -> u64 {
        self.pos.offset
    }

    /// Moves past one consumed byte. The end-of-input sentinel (`None`)
    /// occupies no position.
    pub fn advance(&mut self, b: Option<u8>) {
        let Some(b) = b else { return };
        self.pos.offset += 1;
        if b == NEWLINE {
            self.pos.row += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }
    }

    /// Restores a position previously returned by [`Cursor::position`].
    pub fn rewind_to(&mut self, pos: Position) {
        debug_assert!(pos.offset <= self.pos.offset, "rewind moves forward");
        self.pos = pos;
    }
}
