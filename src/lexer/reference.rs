// src/lexer/reference.rs
// Simple slice lexer with no tables, used as a correctness oracle for the stream-driven DFA.

use crate::lexer::tables::tokens::{Token, TokenKind};

#[inline]
fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn word_kind(word: &[u8]) -> TokenKind {
    if word.eq_ignore_ascii_case(b"if") {
        TokenKind::If
    } else if word.eq_ignore_ascii_case(b"i") {
        TokenKind::IdentI
    } else {
        TokenKind::Ident
    }
}

/// Longest-match lexer over a whole buffer. Every byte that cannot start a
/// token is a separator, so this never fails.
pub fn lex_bytes(src: &[u8]) -> Vec<Token> {
    let mut out = Vec::new();
    let (mut i, mut row, mut col) = (0usize, 1usize, 1usize);

    while i < src.len() {
        let b = src[i];
        let len = match b {
            b'0' => 1,
            b'1'..=b'9' => src[i..].iter().take_while(|c| c.is_ascii_digit()).count(),
            _ if is_word(b) => src[i..].iter().take_while(|&&c| is_word(c)).count(),
            _ => {
                if b == b'\n' {
                    row += 1;
                    col = 1;
                } else {
                    col += 1;
                }
                i += 1;
                continue;
            }
        };

        let lexeme = &src[i..i + len];
        let kind = match b {
            b'0' => TokenKind::NumZero,
            b'1'..=b'9' => TokenKind::Num,
            _ => word_kind(lexeme),
        };
        out.push(Token::new(
            kind,
            &String::from_utf8_lossy(lexeme),
            row,
            col,
        ));
        i += len;
        col += len;
    }

    out
}
