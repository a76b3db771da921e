use serde::Serialize;
use tally_time::{Duration, ParseError, format::format_compact};

use crate::config::OutputFormat;

/// Outcome for one input, in the shape written as JSON.
#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report<'a> {
    Duration {
        input: &'a str,
        nanos: i64,
        display: String,
        compact: String,
    },
    Converted {
        input: &'a str,
        converted: String,
    },
    Redacted {
        input: &'a str,
        redacted: String,
    },
    Error {
        input: &'a str,
        kind: &'static str,
        message: String,
    },
}

impl<'a> Report<'a> {
    pub fn duration(input: &'a str, result: Result<Duration, ParseError>) -> Self {
        match result {
            Ok(duration) => Self::Duration {
                input,
                nanos: duration.as_nanos(),
                display: duration.to_string(),
                compact: format_compact(duration),
            },
            Err(err) => Self::error(input, &err),
        }
    }

    pub fn converted(input: &'a str, result: Result<String, ParseError>) -> Self {
        match result {
            Ok(converted) => Self::Converted { input, converted },
            Err(err) => Self::error(input, &err),
        }
    }

    fn error(input: &'a str, err: &ParseError) -> Self {
        Self::Error {
            input,
            kind: err.kind().as_str(),
            message: err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// One line for `text` output; JSON serialization failures are surfaced.
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        if format == OutputFormat::Json {
            return Ok(serde_json::to_string(self)?);
        }

        Ok(match self {
            Self::Duration {
                input,
                display,
                compact,
                ..
            } => format!("{input:?} = {display} ({compact})"),
            Self::Converted { input, converted } => format!("{input:?} -> {converted:?}"),
            Self::Redacted { redacted, .. } => redacted.clone(),
            Self::Error { input, message, .. } => format!("{input:?}: {message}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use tally_time::{Duration, ParseError, parse_long_duration};

    use super::Report;
    use crate::config::OutputFormat;

    #[test]
    fn renders_durations_as_text() {
        let report = Report::duration("1d1h", parse_long_duration("1d1h"));
        assert!(!report.is_error());
        assert_eq!(
            report.render(OutputFormat::Text).ok().as_deref(),
            Some(r#""1d1h" = 25h0m0s (1d1h)"#)
        );
    }

    #[test]
    fn renders_errors_as_json() {
        let report = Report::duration(
            "1d2",
            Err(ParseError::MissingUnit {
                input: "1d2".to_owned(),
            }),
        );
        assert!(report.is_error());
        assert_eq!(
            report.render(OutputFormat::Json).ok().as_deref(),
            Some(
                r#"{"status":"error","input":"1d2","kind":"missing_unit","message":"missing unit in duration \"1d2\""}"#
            )
        );
    }

    #[test]
    fn renders_duration_json_fields() {
        let report = Report::duration("-90s", Ok(Duration::from_nanos(-90_000_000_000)));
        assert_eq!(
            report.render(OutputFormat::Json).ok().as_deref(),
            Some(
                r#"{"status":"duration","input":"-90s","nanos":-90000000000,"display":"-1m30s","compact":"-1m30s"}"#
            )
        );
    }

    #[test]
    fn renders_conversions_and_redactions() {
        let converted = Report::converted("--1d", Ok("--24h".to_owned()));
        assert_eq!(
            converted.render(OutputFormat::Text).ok().as_deref(),
            Some(r#""--1d" -> "--24h""#)
        );

        let redacted = Report::Redacted {
            input: "Bob",
            redacted: "B**".to_owned(),
        };
        assert_eq!(redacted.render(OutputFormat::Text).ok().as_deref(), Some("B**"));
    }
}
