// src/lexer/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// No accepting state is reachable from the scan's start position.
    #[error("error@{row},{column}: no token matches {lexeme:?}")]
    Malformed {
        row: usize,
        column: usize,
        lexeme: String,
    },
}

impl LexError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, LexError::Malformed { .. })
    }
}
