use tracing::{debug, warn};

use crate::duration::Duration;
use crate::error::ParseError;
use crate::parse::parse_duration;
use crate::units::{HourMultipliers, LONG_HOUR_MULTIPLIERS};

/// Rewrite every `<number><label>` term whose label is in `multipliers`
/// into the equivalent `<hours>h` term, leaving the rest of the string as is.
///
/// A single leading `+` or `-` is set aside and put back afterwards; any
/// further sign characters stay where they are, so `--1d` becomes `--24h`.
/// Terms are located in the original string but replaced at their first
/// occurrence in the sign-stripped copy.
pub fn convert_long_duration(
    input: &str,
    multipliers: &HourMultipliers,
) -> Result<String, ParseError> {
    if input.is_empty() || multipliers.is_empty() {
        return Ok(input.to_owned());
    }

    let (sign, body) = match input.as_bytes()[0] {
        b'+' | b'-' => input.split_at(1),
        _ => ("", input),
    };
    let mut converted = body.to_owned();

    let pattern = multipliers.pattern().map_err(|err| {
        warn!(%err, "unit labels do not form a valid pattern");
        ParseError::invalid(input)
    })?;

    for captures in pattern.captures_iter(input) {
        // Labels can smuggle extra groups into the pattern, so look the
        // first two up by index.
        let (Some(term), Some(number), Some(unit)) =
            (captures.get(0), captures.get(1), captures.get(2))
        else {
            continue;
        };
        let (term, number, unit) = (term.as_str(), number.as_str(), unit.as_str());
        let Some(hours_per_unit) = multipliers.get(unit) else {
            continue;
        };

        let value = number
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ParseError::invalid(input))?;
        let hours = format!("{}h", value * hours_per_unit);
        debug!(term, %hours, "rewrote coarse unit");
        converted = converted.replacen(term, &hours, 1);
    }

    Ok(format!("{sign}{converted}"))
}

/// Parse a duration that may use `d` (24h) and `w` (168h) on top of the
/// standard units, by rewriting them to hours first.
///
/// An empty string parses as zero. Errors from the standard grammar name
/// the rewritten string, e.g. `1d2` fails as `missing unit in duration "24h2"`.
pub fn parse_long_duration(input: &str) -> Result<Duration, ParseError> {
    if input.is_empty() {
        return Ok(Duration::ZERO);
    }

    let converted = convert_long_duration(input, &LONG_HOUR_MULTIPLIERS)?;
    parse_duration(&converted)
}

#[cfg(test)]
mod tests {
    use super::{convert_long_duration, parse_long_duration};
    use crate::duration::Duration;
    use crate::error::ParseError;
    use crate::parse::parse_duration;
    use crate::units::HourMultipliers;

    fn convert(input: &str) -> Result<String, ParseError> {
        convert_long_duration(input, &HourMultipliers::long())
    }

    fn convert_with(input: &str, labels: &[(&str, f64)]) -> Result<String, ParseError> {
        let multipliers: HourMultipliers = labels.iter().copied().collect();
        convert_long_duration(input, &multipliers)
    }

    #[test]
    fn rewrites_days_and_weeks_to_hours() {
        assert_eq!(convert("1h").as_deref(), Ok("1h"));
        assert_eq!(convert("1d1h").as_deref(), Ok("24h1h"));
        assert_eq!(convert("1d1d").as_deref(), Ok("24h24h"));
        assert_eq!(convert("2w3d5h2m").as_deref(), Ok("336h72h5h2m"));
        assert_eq!(convert("1.5d").as_deref(), Ok("36h"));
        assert_eq!(convert(".5w").as_deref(), Ok("84h"));
        assert_eq!(convert("5").as_deref(), Ok("5"));
        assert_eq!(convert("").as_deref(), Ok(""));
    }

    #[test]
    fn keeps_extra_sign_characters() {
        assert_eq!(convert("-1d").as_deref(), Ok("-24h"));
        assert_eq!(convert("--1d").as_deref(), Ok("--24h"));
        assert_eq!(convert("-+-1d").as_deref(), Ok("-+-24h"));
        assert_eq!(convert("+-1d").as_deref(), Ok("+-24h"));
        assert_eq!(convert("-+1d").as_deref(), Ok("-+24h"));
    }

    #[test]
    fn rejects_unparsable_numbers() {
        assert_eq!(convert("..5d"), Err(ParseError::invalid("..5d")));
        assert_eq!(convert("1d1.2.3w"), Err(ParseError::invalid("1d1.2.3w")));
    }

    #[test]
    fn unit_labels_form_a_character_class() {
        assert_eq!(
            convert_with("1fortnight", &[("fortnight", 336.0), ("w", 168.0)]).as_deref(),
            Ok("336h")
        );
        // Runs of class characters must equal a whole label to be rewritten.
        assert_eq!(convert_with("1f", &[("f|g", 1.0)]).as_deref(), Ok("1f"));
        assert_eq!(convert_with("1g", &[("f|g", 1.0)]).as_deref(), Ok("1g"));
        assert_eq!(convert_with("1f|g", &[("f|g", 1.0)]).as_deref(), Ok("1h"));
        assert_eq!(convert_with("1f", &[(".*", 3.0)]).as_deref(), Ok("1f"));
        assert_eq!(convert_with("1d", &[("dd", 2.0), ("d", 24.0)]).as_deref(), Ok("24h"));
        assert_eq!(convert_with("1dd", &[("dd", 2.0), ("d", 24.0)]).as_deref(), Ok("2h"));
    }

    #[test]
    fn bad_label_sets_are_invalid() {
        assert_eq!(convert_with("1d", &[]).as_deref(), Ok("1d"));
        assert_eq!(
            convert_with("1x", &[("z-a", 1.0)]),
            Err(ParseError::invalid("1x"))
        );
    }

    #[test]
    fn bracket_labels_are_literal() {
        assert_eq!(convert_with("1[", &[("[", 1.0)]).as_deref(), Ok("1h"));
        assert_eq!(
            convert_with("2[3d", &[("[", 2.0), ("d", 24.0)]).as_deref(),
            Ok("4h72h")
        );
    }

    #[test]
    fn parses_long_durations() {
        assert_eq!(parse_long_duration(""), Ok(Duration::ZERO));
        assert_eq!(parse_long_duration("0"), Ok(Duration::ZERO));
        assert_eq!(parse_long_duration("-0"), Ok(Duration::ZERO));
        assert_eq!(parse_long_duration("1h"), Ok(Duration::HOUR));
        assert_eq!(parse_long_duration("1d"), Ok(Duration::DAY));
        assert_eq!(parse_long_duration("1w"), Ok(Duration::WEEK));
        assert_eq!(parse_long_duration("1d1w1h"), parse_duration("193h"));
        assert_eq!(parse_long_duration("1d2m"), parse_duration("24h2m"));
        assert_eq!(parse_long_duration("-1d"), parse_duration("-24h"));
        assert_eq!(parse_long_duration(".5h"), parse_duration("30m"));
    }

    #[test]
    fn grammar_errors_name_the_rewritten_string() {
        assert_eq!(
            parse_long_duration("1d2"),
            Err(ParseError::missing_unit("24h2"))
        );
        assert_eq!(
            parse_long_duration("1plug"),
            Err(ParseError::unknown_unit("plug", "1plug"))
        );
        assert_eq!(parse_long_duration("--2m"), Err(ParseError::invalid("--2m")));
        assert_eq!(parse_long_duration("..2m"), Err(ParseError::invalid("..2m")));
        assert_eq!(parse_long_duration("..2,"), Err(ParseError::invalid("..2,")));
        assert_eq!(parse_long_duration("..2d"), Err(ParseError::invalid("..2d")));
        assert_eq!(parse_long_duration("+-2h"), Err(ParseError::invalid("+-2h")));
        assert_eq!(parse_long_duration("5"), Err(ParseError::missing_unit("5")));
    }
}
