// src/bin/fuzz_lex.rs
// Generate random-but-valid inputs, run the stream DFA tokenizer and the reference lexer, compare.
// Extras:
//   - FUZZ_SAVE=1 and FUZZ_DIR=... save generated fuzz cases
//   - FUZZ_INPUT=path         replay a saved case
//   - FUZZ_EX_DIR=<dir>       directory of handcrafted .src files (default: "lexer_tests")
//
// Sidecar golden files: <case>.tokens.json with {"tokens":[{"kind":"Ident","text":"x","row":1,"column":1}, ...]}
// For handcrafted cases, if a golden exists, the tokenizer must match it too.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::{Instant, SystemTime, UNIX_EPOCH},
};

use anyhow::{Context, Result, bail};
use iflex::{
    dev::generator::gen_valid_source,
    lexer::{Token, reference::lex_bytes, tokenize},
};
use rand::{SeedableRng, rngs::StdRng};

#[derive(serde::Deserialize)]
struct Golden {
    tokens: Vec<Token>,
}

#[derive(serde::Serialize)]
struct CaseMeta<'a> {
    unix_ts: u64,
    seed: u64,
    iter: usize,
    actual_bytes: usize,
    note: &'a str,
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<()> {
    if let Ok(path) = std::env::var("FUZZ_INPUT") {
        eprintln!("[replay] reading {path}");
        let src = fs::read(&path).with_context(|| format!("failed to read {path}"))?;
        if !run_once(&src, None) {
            bail!("replay mismatch");
        }
        eprintln!("[replay] ok ✅");
        return Ok(());
    }

    let examples = collect_examples();
    if !examples.is_empty() {
        eprintln!("[ex] running {} handcrafted example(s)…", examples.len());
        let mut failed = 0usize;
        for (j, p) in examples.iter().enumerate() {
            eprintln!("[ex {j}] {}", p.display());
            let src = fs::read(p).with_context(|| format!("failed to read {}", p.display()))?;
            let mut ok = run_once(&src, None);
            match load_golden_for(p) {
                Some(g) => ok &= check_against_golden(&p.display().to_string(), &src, &g),
                None => eprintln!("[golden] no sidecar found for {}", p.display()),
            }
            if !ok {
                failed += 1;
            }
        }
        if failed > 0 {
            bail!("{failed} handcrafted example(s) failed");
        }
    }

    let save_cases = std::env::var("FUZZ_SAVE").ok().as_deref() == Some("1");
    let out_dir = std::env::var("FUZZ_DIR").unwrap_or_else(|_| "fuzz-cases".to_string());
    let len: usize = env_or("FUZZ_LEN", 4096);
    let iters: usize = env_or("FUZZ_ITERS", 200);
    let seed: u64 = env_or("FUZZ_SEED", 0xC0FFEE);

    eprintln!("[fuzz] len={len} iters={iters} seed={seed}");
    if save_cases {
        fs::create_dir_all(&out_dir).with_context(|| format!("failed to create {out_dir}"))?;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let t0 = Instant::now();
    for i in 0..iters {
        let s = gen_valid_source(&mut rng, len);
        if save_cases {
            let path = save_case(&out_dir, seed, i, &s)?;
            eprintln!("[save] wrote {}", path.display());
        }
        if !run_once(s.as_bytes(), Some((seed, i))) {
            let path = save_case(&out_dir, seed, i, &s)?;
            bail!("iter {i} mismatched; case saved to {}", path.display());
        }
    }
    eprintln!(
        "[fuzz] all iterations matched ✅ ({} ms)",
        t0.elapsed().as_millis()
    );
    Ok(())
}

fn run_once(src: &[u8], tag: Option<(u64, usize)>) -> bool {
    let dfa = match tokenize(src) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("[dfa] {e}");
            return false;
        }
    };
    let reference = lex_bytes(src);
    let ok = compare_streams(src, &dfa, &reference);
    if !ok {
        if let Some((seed, i)) = tag {
            eprintln!("[fuzz] mismatch at seed={seed} iter={i}");
        }
    }
    ok
}

fn compare_streams(src: &[u8], dfa: &[Token], reference: &[Token]) -> bool {
    let i = first_divergence_idx(dfa, reference);
    if i == dfa.len() && i == reference.len() {
        return true;
    }
    eprintln!(
        "[diff] dfa={} reference={} tokens, first divergence at index {i}",
        dfa.len(),
        reference.len()
    );
    dump_near(src, dfa, reference, i);
    false
}

fn first_divergence_idx(a: &[Token], b: &[Token]) -> usize {
    a.iter()
        .zip(b.iter())
        .position(|(x, y)| x != y)
        .unwrap_or(a.len().min(b.len()))
}

fn dump_near(src: &[u8], dfa: &[Token], reference: &[Token], from: usize) {
    let lo = from.saturating_sub(1);
    let hi = (from + 3).max(lo);
    eprintln!("--- context tokens [{lo}..{hi}) ---");
    for i in lo..hi {
        let d = dfa.get(i).map(Token::to_string);
        let r = reference.get(i).map(Token::to_string);
        if d.is_none() && r.is_none() {
            break;
        }
        let mark = if d == r { "✅" } else { "❌" };
        eprintln!("{mark} #{i:06} DFA={d:?}  REF={r:?}");
    }
    if let Some(t) = dfa.get(from).or_else(|| reference.get(from)) {
        dump_line(src, t.row);
    }
}

fn dump_line(src: &[u8], row: usize) {
    if let Some(line) = src.split(|&b| b == b'\n').nth(row.saturating_sub(1)) {
        eprintln!("    line {row}: {:?}", String::from_utf8_lossy(line));
    }
}

// ---------- goldens ----------

fn load_golden_for(base: &Path) -> Option<Golden> {
    let p = base.with_extension("tokens.json");
    let s = fs::read_to_string(&p).ok()?;
    match serde_json::from_str::<Golden>(&s) {
        Ok(g) => Some(g),
        Err(e) => {
            eprintln!("[golden] failed to parse {}: {e}", p.display());
            None
        }
    }
}

fn check_against_golden(label: &str, src: &[u8], golden: &Golden) -> bool {
    match tokenize(src) {
        Ok(got) => {
            let i = first_divergence_idx(&got, &golden.tokens);
            if i == got.len() && i == golden.tokens.len() {
                return true;
            }
            eprintln!(
                "[golden:{label}] got={} expected={} tokens, first divergence at index {i}",
                got.len(),
                golden.tokens.len()
            );
            dump_near(src, &got, &golden.tokens, i);
            false
        }
        Err(e) => {
            eprintln!("[golden:{label}] {e}");
            false
        }
    }
}

fn collect_examples() -> Vec<PathBuf> {
    let dir = std::env::var("FUZZ_EX_DIR").unwrap_or_else(|_| "lexer_tests".into());
    let Ok(rd) = fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut out: Vec<PathBuf> = rd
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("src"))
        .collect();
    out.sort();
    out
}

fn save_case(dir: &str, seed: u64, iter: usize, src: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {dir}"))?;
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let base = format!("case_s{seed}_i{iter}_n{}.src", src.len());
    let path = Path::new(dir).join(base);
    fs::write(&path, src.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;

    let meta = CaseMeta {
        unix_ts: ts,
        seed,
        iter,
        actual_bytes: src.len(),
        note: "Replay with: FUZZ_INPUT=<this file> cargo run --bin fuzz_lex",
    };
    let meta_path = path.with_extension("meta.json");
    let mut f = fs::File::create(&meta_path)
        .with_context(|| format!("failed to write {}", meta_path.display()))?;
    writeln!(f, "{}", serde_json::to_string_pretty(&meta)?)?;

    Ok(path)
}
