// src/lexer/tables/tokens.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Token kinds for the fixed grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    NumZero, // exactly "0"
    Num,
    IdentI, // a lone "i" / "I"
    If,
    Ident,
}

/// How an accepting state renders its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Descriptor {
    /// Literal text; only the position is filled in.
    Fixed(&'static str),
    /// `prefix(<matched lexeme>)`.
    Lexeme(&'static str),
}

impl TokenKind {
    pub fn descriptor(self) -> Descriptor {
        match self {
            TokenKind::NumZero => Descriptor::Fixed("NUM(0)"),
            TokenKind::Num => Descriptor::Lexeme("NUM"),
            TokenKind::IdentI => Descriptor::Fixed("ID(i)"),
            TokenKind::If => Descriptor::Fixed("IF"),
            TokenKind::Ident => Descriptor::Lexeme("ID"),
        }
    }

    /// Whether the token record carries the matched text.
    pub fn carries_text(self) -> bool {
        !matches!(self, TokenKind::If)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub row: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: &str, row: usize, column: usize) -> Self {
        Self {
            kind,
            text: kind.carries_text().then(|| lexeme.to_string()),
            row,
            column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.descriptor() {
            Descriptor::Fixed(s) => write!(f, "{s}")?,
            Descriptor::Lexeme(prefix) => {
                write!(f, "{prefix}({})", self.text.as_deref().unwrap_or_default())?
            }
        }
        write!(f, " ({}, {})", self.row, self.column)
    }
}

/// Result of one scan: a token, or the end-of-stream terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexed {
    Token(Token),
    End,
}

impl Lexed {
    pub fn into_token(self) -> Option<Token> {
        match self {
            Lexed::Token(t) => Some(t),
            Lexed::End => None,
        }
    }
}

impl fmt::Display for Lexed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lexed::Token(t) => fmt::Display::fmt(t, f),
            Lexed::End => f.write_str("EOF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_templates() {
        assert_eq!(Token::new(TokenKind::NumZero, "0", 1, 6).to_string(), "NUM(0) (1, 6)");
        assert_eq!(Token::new(TokenKind::If, "if", 1, 1).to_string(), "IF (1, 1)");
        assert_eq!(Token::new(TokenKind::IdentI, "I", 3, 2).to_string(), "ID(i) (3, 2)");
    }

    #[test]
    fn renders_lexeme_templates() {
        assert_eq!(Token::new(TokenKind::Num, "42", 1, 8).to_string(), "NUM(42) (1, 8)");
        assert_eq!(Token::new(TokenKind::Ident, "x_1", 2, 4).to_string(), "ID(x_1) (2, 4)");
        assert_eq!(Lexed::End.to_string(), "EOF");
    }

    #[test]
    fn keyword_carries_no_text() {
        assert_eq!(Token::new(TokenKind::If, "If", 1, 1).text, None);
        assert_eq!(
            Token::new(TokenKind::IdentI, "i", 1, 1).text.as_deref(),
            Some("i")
        );
    }

    #[test]
    fn json_shape() {
        let t = Token::new(TokenKind::Ident, "x", 1, 4);
        assert_eq!(
            serde_json::to_string(&t).unwrap(),
            r#"{"kind":"Ident","text":"x","row":1,"column":4}"#
        );
        let kw = Token::new(TokenKind::If, "if", 1, 1);
        assert_eq!(
            serde_json::to_string(&kw).unwrap(),
            r#"{"kind":"If","row":1,"column":1}"#
        );
        let back: Token = serde_json::from_str(r#"{"kind":"If","row":1,"column":1}"#).unwrap();
        assert_eq!(back, kw);
    }
}
