mod cli;
mod config;
mod report;
mod units;

use std::process::ExitCode;

use anyhow::bail;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tally_time::{
    Duration, ParseError, Strategy, UnitTable, convert_long_duration, parse_duration_with_units,
    parse_duration_with_units_strict, parse_long_duration,
};

use cli::{Cli, Command, ConvertArgs, DurationArgs, RedactArgs};
use config::{Config, OutputFormat};
use report::Report;

fn main() -> anyhow::Result<ExitCode> {
    // Load the .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let verbose = cli.verbose || config.verbose;

    let max_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter_fn(move |metadata| {
            *metadata.level() <= max_level && metadata.target().starts_with("tally")
        }));

    tracing_subscriber::registry().with(fmt_layer).init();

    let output = cli.output.unwrap_or(config.output);
    debug!(%output, strategy = %config.strategy, "configuration loaded");

    let reports_failed = match &cli.command {
        Command::Duration(args) => run_duration(args, &config, output)?,
        Command::Convert(args) => run_convert(args, output)?,
        Command::Redact(args) => run_redact(args, output)?,
    };

    Ok(if reports_failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// How each `duration` input is parsed.
struct DurationPlan {
    strategy: Strategy,
    strict: bool,
    units: UnitTable,
}

impl DurationPlan {
    fn new(args: &DurationArgs, config: &Config) -> anyhow::Result<Self> {
        let requested = args.strategy.unwrap_or(config.strategy);
        let strategy = if args.units.is_empty() {
            requested
        } else {
            if args.strategy == Some(Strategy::TextSubstitution) {
                bail!("--unit requires the numeric strategy");
            }
            if requested != Strategy::Numeric {
                warn!(%requested, "custom units given; using the numeric strategy");
            }
            Strategy::Numeric
        };

        let units = units::unit_table(&args.units)?;
        info!(%strategy, strict = args.strict, units = units.len(), "parsing durations");

        Ok(Self {
            strategy,
            strict: args.strict,
            units,
        })
    }

    fn parse(&self, input: &str) -> Result<Duration, ParseError> {
        match (self.strategy, self.strict) {
            (Strategy::Numeric, false) => parse_duration_with_units(input, &self.units),
            (Strategy::Numeric, true) => parse_duration_with_units_strict(input, &self.units),
            (Strategy::TextSubstitution, true) if input.is_empty() => {
                Err(ParseError::InvalidDuration {
                    input: String::new(),
                })
            }
            (Strategy::TextSubstitution, _) => parse_long_duration(input),
        }
    }
}

fn run_duration(
    args: &DurationArgs,
    config: &Config,
    output: OutputFormat,
) -> anyhow::Result<bool> {
    let plan = DurationPlan::new(args, config)?;
    let reports = args
        .inputs
        .iter()
        .map(|input| Report::duration(input, plan.parse(input)));
    emit(reports, output)
}

fn run_convert(args: &ConvertArgs, output: OutputFormat) -> anyhow::Result<bool> {
    let multipliers = units::hour_multipliers(&args.units)?;
    let reports = args
        .inputs
        .iter()
        .map(|input| Report::converted(input, convert_long_duration(input, &multipliers)));
    emit(reports, output)
}

fn run_redact(args: &RedactArgs, output: OutputFormat) -> anyhow::Result<bool> {
    let reports = args.inputs.iter().map(|input| Report::Redacted {
        input,
        redacted: args.kind.apply(input),
    });
    emit(reports, output)
}

/// Print every report; true when any of them is an error.
fn emit<'a>(
    reports: impl Iterator<Item = Report<'a>>,
    output: OutputFormat,
) -> anyhow::Result<bool> {
    let mut failed = false;
    for report in reports {
        failed |= report.is_error();
        println!("{}", report.render(output)?);
    }
    Ok(failed)
}
