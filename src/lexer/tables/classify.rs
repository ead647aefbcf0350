// src/lexer/tables/classify.rs
// Byte -> input category. Categories are the column index of the transition table.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Letter,
    LetterI, // 'i' / 'I'
    LetterF, // 'f' / 'F'
    Zero,
    Digit, // '1'..='9'
    Other,
    EndOfInput,
}

pub const N_CATEGORIES: usize = 7;

pub const ALL_CATEGORIES: [Category; N_CATEGORIES] = [
    Category::Letter,
    Category::LetterI,
    Category::LetterF,
    Category::Zero,
    Category::Digit,
    Category::Other,
    Category::EndOfInput,
];

impl Category {
    #[inline]
    pub fn idx(self) -> usize {
        self as usize
    }

    /// The generic category consulted when this one has no transition.
    ///
    /// `i`/`f` only matter while recognising the keyword; everywhere else they
    /// behave like any other letter. Likewise `0` is just a digit once a
    /// numeral (or identifier) is underway.
    #[inline]
    pub fn fallback(self) -> Option<Category> {
        match self {
            Category::LetterI | Category::LetterF => Some(Category::Letter),
            Category::Zero => Some(Category::Digit),
            _ => None,
        }
    }
}

/// Classifies one byte. Every byte maps to something; anything that is not an
/// ASCII letter, underscore or digit is `Other`.
#[inline]
pub fn classify(b: u8) -> Category {
    match b {
        b'i' | b'I' => Category::LetterI,
        b'f' | b'F' => Category::LetterF,
        b'a'..=b'z' | b'A'..=b'Z' | b'_' => Category::Letter,
        b'0' => Category::Zero,
        b'1'..=b'9' => Category::Digit,
        _ => Category::Other,
    }
}

/// `None` is the end-of-input sentinel.
#[inline]
pub fn classify_input(b: Option<u8>) -> Category {
    b.map_or(Category::EndOfInput, classify)
}
