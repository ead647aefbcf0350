// src/lexer/mod.rs
pub mod cursor;
pub mod error;
pub mod reference;
pub mod scanner;
pub mod stream;
pub mod tables;

pub use error::LexError;
pub use scanner::{Tokenizer, tokenize};
pub use tables::{Lexed, Token, TokenKind};
