// src/bin/gen_tables.rs
// Write the fixed automaton (states, categories, transitions, accepting table) to JSON.
// Usage:
//   cargo run --bin gen_tables                # writes tables/iflex_tables.json
//   cargo run --bin gen_tables -- /path/out.json

use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use iflex::lexer::tables::{
    classify::N_CATEGORIES,
    dfa::{self, ALL_STATES, N_STATES, S},
    save_tables_json,
};

fn main() -> Result<()> {
    let out = env::args()
        .nth(1)
        .unwrap_or_else(|| "tables/iflex_tables.json".to_string());
    let out_path = Path::new(&out);

    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let dfa = dfa::global();

    let live_edges = dfa
        .next
        .iter()
        .flatten()
        .filter(|&&s| s != S::Dead)
        .count();
    let accepting = ALL_STATES.iter().filter(|s| s.is_accepting()).count();
    println!(
        "[gen_tables] {N_STATES} states x {N_CATEGORIES} categories, {live_edges} live edges, {accepting} accepting states"
    );

    save_tables_json(out_path, dfa)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    println!("[gen_tables] wrote {}", out_path.display());
    Ok(())
}
