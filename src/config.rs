// src/config.rs
// Driver configuration, read from the environment:
//   IFLEX_FORMAT=text|json         output format (default: text)
//   IFLEX_ON_MALFORMED=abort|eof   what the driver does on unlexable input (default: abort)

use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown format: {s}. Supported: text, json")),
        }
    }
}

/// Driver policy for malformed input. The tokenizer itself always stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Report the error and exit non-zero.
    #[default]
    Abort,
    /// Print `EOF` and exit cleanly.
    Eof,
}

impl FromStr for MalformedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abort" | "error" => Ok(MalformedPolicy::Abort),
            "eof" => Ok(MalformedPolicy::Eof),
            _ => Err(format!("unknown malformed-input policy: {s}. Supported: abort, eof")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub on_malformed: MalformedPolicy,
}

fn parse_or_default<T: FromStr<Err = String> + Default>(name: &str, value: Option<String>) -> T {
    match value {
        None => T::default(),
        Some(v) => v.parse().unwrap_or_else(|e| {
            log::warn!("{name}: {e}; using default");
            T::default()
        }),
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            format: parse_or_default("IFLEX_FORMAT", lookup("IFLEX_FORMAT")),
            on_malformed: parse_or_default("IFLEX_ON_MALFORMED", lookup("IFLEX_ON_MALFORMED")),
        }
    }
}
