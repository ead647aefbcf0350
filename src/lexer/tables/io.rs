// src/lexer/tables/io.rs
use std::{
    io::{BufWriter, Write},
    path::Path,
    time::Instant,
};

use serde::Serialize;

use super::{
    classify::{ALL_CATEGORIES, Category, N_CATEGORIES},
    dfa::{ALL_STATES, Dfa, N_STATES, S},
    tokens::{Descriptor, TokenKind},
};

// -------------------- JSON serialization --------------------

#[derive(Serialize)]
struct AcceptingDisk {
    state: S,
    kind: TokenKind,
    descriptor: Descriptor,
}

#[derive(Serialize)]
struct TablesDisk {
    states: [S; N_STATES],
    categories: [Category; N_CATEGORIES],
    start: S,
    next: [[S; N_CATEGORIES]; N_STATES],
    fallback: Vec<(Category, Category)>,
    accepting: Vec<AcceptingDisk>,
}

impl From<&Dfa> for TablesDisk {
    fn from(dfa: &Dfa) -> Self {
        let fallback = ALL_CATEGORIES
            .iter()
            .filter_map(|&c| c.fallback().map(|g| (c, g)))
            .collect();
        let accepting = ALL_STATES
            .iter()
            .filter_map(|&state| {
                dfa.token_of(state).map(|kind| AcceptingDisk {
                    state,
                    kind,
                    descriptor: kind.descriptor(),
                })
            })
            .collect();
        Self {
            states: ALL_STATES,
            categories: ALL_CATEGORIES,
            start: dfa.start,
            next: dfa.next,
            fallback,
            accepting,
        }
    }
}

pub fn tables_to_json_value(dfa: &Dfa) -> serde_json::Value {
    // Plain enums and arrays only; serializing into a Value cannot fail.
    serde_json::to_value(TablesDisk::from(dfa)).unwrap_or(serde_json::Value::Null)
}

pub fn save_tables_json(path: &Path, dfa: &Dfa) -> std::io::Result<()> {
    let instant = Instant::now();
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &TablesDisk::from(dfa))?;
    w.write_all(b"\n")?;
    let flush = w.flush();
    log::debug!(
        "saved tables to {} in {} ms",
        path.display(),
        instant.elapsed().as_millis()
    );
    flush
}
