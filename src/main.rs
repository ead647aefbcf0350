// src/main.rs
// Print every token of a file, one per line, then EOF.
// Usage:
//   cargo run -- path/to/input.txt
//   cargo run -- -                      # read stdin
//   IFLEX_FORMAT=json cargo run -- input.txt

use std::{
    env,
    io::{self, BufWriter, Read, Seek, Write},
};

use anyhow::{Context, Result};
use iflex::{
    config::{Config, MalformedPolicy, OutputFormat},
    lexer::{LexError, Lexed, Token, Tokenizer},
};

fn main() -> Result<()> {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: iflex <path | ->");
        std::process::exit(2);
    };
    let cfg = Config::from_env();
    log::debug!("config: {cfg:?}");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if path == "-" {
        // stdin cannot seek; buffer it
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        run(Tokenizer::new(io::Cursor::new(buf)), &cfg, &mut out)
    } else {
        let tokenizer = Tokenizer::open(&path)?;
        run(tokenizer, &cfg, &mut out)
    }
}

fn run<R: Read + Seek, W: Write>(mut tokenizer: Tokenizer<R>, cfg: &Config, out: &mut W) -> Result<()> {
    loop {
        match tokenizer.next_token() {
            Ok(Lexed::Token(t)) => write_token(out, cfg.format, &t)?,
            Ok(Lexed::End) => break,
            Err(e @ LexError::Malformed { .. }) if cfg.on_malformed == MalformedPolicy::Eof => {
                log::warn!("{e}");
                break;
            }
            Err(e) => {
                out.flush()?;
                return Err(e).context("tokenizing failed");
            }
        }
    }
    write_end(out, cfg.format)?;
    out.flush()?;
    Ok(())
}

fn write_token<W: Write>(out: &mut W, format: OutputFormat, t: &Token) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{t}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, t)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_end<W: Write>(out: &mut W, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", Lexed::End)?,
        OutputFormat::Json => writeln!(out, "\"EOF\"")?,
    }
    Ok(())
}
