//! End-to-end tokenizer behaviour on small inputs, plus the maximal-munch
//! and position-ordering properties on generated input.

use std::{fs, io};

use iflex::{
    dev::generator::gen_valid_source,
    lexer::{
        Lexed, Token, TokenKind, Tokenizer,
        tables::{classify, dfa},
        tokenize,
    },
};
use rand::{SeedableRng, rngs::StdRng};

fn render(src: &str) -> Vec<String> {
    let mut tk = Tokenizer::new(io::Cursor::new(src.as_bytes().to_vec()));
    let mut out = Vec::new();
    loop {
        let lexed = tk.next_token().expect("tokenize failed");
        out.push(lexed.to_string());
        if lexed == Lexed::End {
            return out;
        }
    }
}

#[test]
fn keyword_then_identifier_zero_numeral() {
    assert_eq!(
        render("if x 0 42\n"),
        ["IF (1, 1)", "ID(x) (1, 4)", "NUM(0) (1, 6)", "NUM(42) (1, 8)", "EOF"]
    );
}

#[test]
fn longer_identifier_beats_keyword() {
    assert_eq!(render("if3"), ["ID(if3) (1, 1)", "EOF"]);
    assert_eq!(render("iffy"), ["ID(iffy) (1, 1)", "EOF"]);
    assert_eq!(render("if_"), ["ID(if_) (1, 1)", "EOF"]);
}

#[test]
fn keyword_alone() {
    assert_eq!(render("if"), ["IF (1, 1)", "EOF"]);
    assert_eq!(render("if "), ["IF (1, 1)", "EOF"]);
    assert_eq!(render("IF\n"), ["IF (1, 1)", "EOF"]);
}

#[test]
fn lone_i_is_an_identifier() {
    assert_eq!(render("i"), ["ID(i) (1, 1)", "EOF"]);
    assert_eq!(render("I i"), ["ID(i) (1, 1)", "ID(i) (1, 3)", "EOF"]);
    assert_eq!(render("ii"), ["ID(ii) (1, 1)", "EOF"]);
}

#[test]
fn zero_rules() {
    assert_eq!(render("0 "), ["NUM(0) (1, 1)", "EOF"]);
    assert_eq!(render("0"), ["NUM(0) (1, 1)", "EOF"]);
    assert_eq!(render("07"), ["NUM(0) (1, 1)", "NUM(7) (1, 2)", "EOF"]);
    assert_eq!(render("00"), ["NUM(0) (1, 1)", "NUM(0) (1, 2)", "EOF"]);
    assert_eq!(render("100"), ["NUM(100) (1, 1)", "EOF"]);
}

#[test]
fn digits_then_letters_split() {
    assert_eq!(render("12ab"), ["NUM(12) (1, 1)", "ID(ab) (1, 3)", "EOF"]);
    assert_eq!(render("0if"), ["NUM(0) (1, 1)", "IF (1, 2)", "EOF"]);
}

#[test]
fn positions_across_lines() {
    assert_eq!(
        render("a\nbc\r\n  if 9"),
        ["ID(a) (1, 1)", "ID(bc) (2, 1)", "IF (3, 3)", "NUM(9) (3, 6)", "EOF"]
    );
}

#[test]
fn opens_files() {
    let path = std::env::temp_dir().join(format!("iflex_scenarios_{}.src", std::process::id()));
    fs::write(&path, "if x\n0 42\n").unwrap();
    let toks: Vec<String> = Tokenizer::open(&path)
        .unwrap()
        .map(|t| t.unwrap().to_string())
        .collect();
    let _ = fs::remove_file(&path);
    assert_eq!(toks, ["IF (1, 1)", "ID(x) (1, 4)", "NUM(0) (2, 1)", "NUM(42) (2, 3)"]);
}

#[test]
fn close_hands_back_the_source() {
    let mut tk = Tokenizer::new(io::Cursor::new(b"ab cd".to_vec()));
    tk.next_token().unwrap();
    let mut src = tk.close();
    // the stream was left right after "ab" (buffered reads may sit further ahead)
    assert!(src.position() >= 2);
    src.set_position(0);
    assert_eq!(src.into_inner(), b"ab cd".to_vec());
}

fn line_starts(src: &[u8]) -> Vec<usize> {
    std::iter::once(0)
        .chain(src.iter().enumerate().filter(|(_, b)| **b == b'\n').map(|(i, _)| i + 1))
        .collect()
}

fn offset_of(starts: &[usize], t: &Token) -> usize {
    starts[t.row - 1] + t.column - 1
}

fn lexeme_len(t: &Token) -> usize {
    match t.kind {
        TokenKind::If => 2,
        _ => t.text.as_ref().map_or(0, String::len),
    }
}

#[test]
fn tokens_are_maximal() {
    let dfa = dfa::global();
    for seed in 0..32 {
        let src = gen_valid_source(&mut StdRng::seed_from_u64(seed), 300);
        let bytes = src.as_bytes();
        let starts = line_starts(bytes);
        for t in tokenize(bytes).unwrap() {
            let off = offset_of(&starts, &t);
            let len = lexeme_len(&t);
            let Some(extended) = bytes.get(off..off + len + 1) else {
                continue;
            };
            let end = extended
                .iter()
                .fold(dfa.start, |s, &b| dfa.step(s, classify::classify(b)));
            assert!(
                !end.is_accepting(),
                "{t} could have been extended to {:?}",
                String::from_utf8_lossy(extended)
            );
        }
    }
}

#[test]
fn tokens_are_in_reading_order_and_match_source() {
    for seed in 0..32 {
        let src = gen_valid_source(&mut StdRng::seed_from_u64(seed), 300);
        let bytes = src.as_bytes();
        let starts = line_starts(bytes);
        let toks = tokenize(bytes).unwrap();
        let mut prev_end = 0usize;
        for t in &toks {
            let off = offset_of(&starts, t);
            assert!(off >= prev_end, "{t} starts before the previous token ended");
            let len = lexeme_len(t);
            if let Some(text) = &t.text {
                assert_eq!(&bytes[off..off + len], text.as_bytes());
            } else {
                assert!(bytes[off..off + 2].eq_ignore_ascii_case(b"if"));
            }
            prev_end = off + len;
        }
    }
}
