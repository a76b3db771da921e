use clap::{Args, Parser, Subcommand, ValueEnum};
use tally_time::Strategy;

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "Parse long durations and redact personal details")]
pub struct Cli {
    /// Output format. Overrides TALLY_OUTPUT.
    #[arg(long, global = true, ignore_case = true)]
    pub output: Option<OutputFormat>,

    /// Log parse details to stderr. Overrides TALLY_VERBOSE.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse durations such as `1d12h` or `-2w`.
    Duration(DurationArgs),
    /// Rewrite coarse units to hours without parsing.
    Convert(ConvertArgs),
    /// Mask words, phrases, emails or phone numbers.
    Redact(RedactArgs),
}

#[derive(Debug, Args)]
pub struct DurationArgs {
    /// `numeric` or `text`. Overrides TALLY_STRATEGY.
    #[arg(long)]
    pub strategy: Option<Strategy>,

    /// Reject empty input instead of treating it as zero.
    #[arg(long)]
    pub strict: bool,

    /// Extra unit as LABEL=DURATION, e.g. `fortnight=2w`. Numeric strategy only.
    #[arg(long = "unit", value_name = "LABEL=DURATION")]
    pub units: Vec<String>,

    #[arg(required = true, allow_hyphen_values = true)]
    pub inputs: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Unit as LABEL=HOURS, e.g. `fortnight=336`. Defaults to `d=24` and `w=168`.
    #[arg(long = "unit", value_name = "LABEL=HOURS")]
    pub units: Vec<String>,

    #[arg(required = true, allow_hyphen_values = true)]
    pub inputs: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RedactArgs {
    #[arg(ignore_case = true)]
    pub kind: RedactKind,

    #[arg(required = true, allow_hyphen_values = true)]
    pub inputs: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RedactKind {
    /// Keep the first character.
    Word,
    /// Keep the first character of each word.
    #[value(alias = "words")]
    Phrase,
    /// Mask the local part only.
    Email,
    /// Mask the last four digits.
    Phone,
}

impl RedactKind {
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Word => tally_redact::redact_word(input),
            Self::Phrase => tally_redact::redact_phrase(input),
            Self::Email => tally_redact::redact_email(input),
            Self::Phone => tally_redact::redact_phone(input),
        }
    }
}
