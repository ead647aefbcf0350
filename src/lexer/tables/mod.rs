// src/lexer/tables/mod.rs
pub mod classify;
pub mod dfa;
pub mod io;
pub mod tokens;

pub use classify::{Category, classify, classify_input};
pub use dfa::{Dfa, S, global};
pub use io::{save_tables_json, tables_to_json_value};
pub use tokens::{Descriptor, Lexed, Token, TokenKind};
