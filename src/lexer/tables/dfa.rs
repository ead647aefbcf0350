// src/lexer/tables/dfa.rs
use std::sync::OnceLock;

use serde::Serialize;

use super::{
    classify::{Category, N_CATEGORIES},
    tokens::TokenKind,
};

// DFA states (small hand-built DFA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum S {
    Start,   // S0
    Zero,    // S1: exactly one '0'
    Num,     // S2
    PrefixI, // S3: a lone 'i'
    KwIf,    // S4
    Ident,   // S5
    Dead,
}
impl S {
    #[inline]
    pub fn idx(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_accepting(self) -> bool {
        token_of_state(self).is_some()
    }
}

pub const N_STATES: usize = 7;
pub const START: S = S::Start;

pub const ALL_STATES: [S; N_STATES] = [
    S::Start,
    S::Zero,
    S::Num,
    S::PrefixI,
    S::KwIf,
    S::Ident,
    S::Dead,
];

/// Accepting-state table (None => non-accepting).
pub(crate) fn token_of_state(s: S) -> Option<TokenKind> {
    use S::*;
    match s {
        Zero => Some(TokenKind::NumZero),
        Num => Some(TokenKind::Num),
        PrefixI => Some(TokenKind::IdentI),
        KwIf => Some(TokenKind::If),
        Ident => Some(TokenKind::Ident),
        Start | Dead => None,
    }
}

/// Fully materialized transition table. Missing entries are `Dead`.
#[derive(Debug)]
pub struct Dfa {
    pub next: [[S; N_CATEGORIES]; N_STATES], // [state][category] -> next
    pub start: S,
}

impl Dfa {
    pub fn new() -> Self {
        let mut next = [[S::Dead; N_CATEGORIES]; N_STATES];

        fn set(next: &mut [[S; N_CATEGORIES]; N_STATES], from: S, cats: &[Category], to: S) {
            for &c in cats {
                next[from.idx()][c.idx()] = to;
            }
        }

        // Start: separators loop, everything else opens a token.
        set(&mut next, S::Start, &[Category::Other], S::Start);
        set(&mut next, S::Start, &[Category::Zero], S::Zero);
        set(&mut next, S::Start, &[Category::Digit], S::Num);
        set(&mut next, S::Start, &[Category::LetterI], S::PrefixI);
        set(&mut next, S::Start, &[Category::Letter], S::Ident);

        // Zero is terminal: "0" is a complete numeral on its own.

        // Num
        set(&mut next, S::Num, &[Category::Digit], S::Num);

        // PrefixI: "if" or back to a plain identifier.
        set(&mut next, S::PrefixI, &[Category::LetterF], S::KwIf);
        set(&mut next, S::PrefixI, &[Category::Letter, Category::Digit], S::Ident);

        // KwIf: any extension demotes to identifier ("iffy", "if3").
        set(&mut next, S::KwIf, &[Category::Letter, Category::Digit], S::Ident);

        // Ident
        set(&mut next, S::Ident, &[Category::Letter, Category::Digit], S::Ident);

        Self { next, start: START }
    }

    /// Next state for `(state, category)`. The specific category is consulted
    /// first; its generic fallback only when the specific entry is `Dead`.
    #[inline]
    pub fn step(&self, state: S, category: Category) -> S {
        let row = &self.next[state.idx()];
        match row[category.idx()] {
            S::Dead => category
                .fallback()
                .map_or(S::Dead, |generic| row[generic.idx()]),
            to => to,
        }
    }

    pub fn token_of(&self, state: S) -> Option<TokenKind> {
        token_of_state(state)
    }
}

impl Default for Dfa {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the process-wide automaton (built on first use, read-only after).
pub fn global() -> &'static Dfa {
    static DFA: OnceLock<Dfa> = OnceLock::new();
    DFA.get_or_init(Dfa::new)
}
