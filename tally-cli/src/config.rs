use std::env;
use std::fmt;

use anyhow::{Context, anyhow};
use clap::ValueEnum;
use tally_time::Strategy;

/// How results are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[value(alias = "plain")]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Settings read from the environment (and `.env`), before flags apply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub output: OutputFormat,
    pub strategy: Strategy,
    pub verbose: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults while
    /// malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let output = match lookup("TALLY_OUTPUT") {
            Some(raw) => OutputFormat::from_str(raw.trim(), true)
                .map_err(|_| {
                    anyhow!("unknown output format `{raw}` (expected `text` or `json`)")
                })
                .context("invalid TALLY_OUTPUT")?,
            None => OutputFormat::default(),
        };

        let strategy = match lookup("TALLY_STRATEGY") {
            Some(raw) => raw
                .parse::<Strategy>()
                .context("invalid TALLY_STRATEGY")?,
            None => Strategy::default(),
        };

        Ok(Self {
            output,
            strategy,
            verbose: env_bool(&lookup, "TALLY_VERBOSE", false),
        })
    }
}

fn env_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    match lookup(key) {
        Some(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => default,
    }
}
