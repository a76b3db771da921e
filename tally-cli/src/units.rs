use anyhow::{Context, bail};
use tally_time::{HourMultipliers, UnitTable, units::LONG_UNITS};

/// Split a `LABEL=VALUE` flag.
fn split_spec(raw: &str) -> anyhow::Result<(&str, &str)> {
    let Some((label, value)) = raw.split_once('=') else {
        bail!("unit `{raw}` must look like LABEL=VALUE");
    };

    if label.is_empty() {
        bail!("unit `{raw}` has an empty label");
    }

    Ok((label, value.trim()))
}

/// Long units extended (or overridden) by `LABEL=DURATION` specs, where the
/// duration itself uses the long units, e.g. `fortnight=2w`.
pub fn unit_table(specs: &[String]) -> anyhow::Result<UnitTable> {
    let mut table = LONG_UNITS.clone();
    for raw in specs {
        let (label, value) = split_spec(raw)?;
        let scale = tally_time::parse_duration_with_units_strict(value, &LONG_UNITS)
            .with_context(|| format!("unit `{label}` has an invalid duration"))?;
        if scale.is_negative() {
            bail!("unit `{label}` must not be negative");
        }
        table.insert(label, scale.unsigned_abs().as_nanos() as u64);
    }
    Ok(table)
}

/// Hour multipliers from `LABEL=HOURS` specs, or the day/week defaults when
/// none are given.
pub fn hour_multipliers(specs: &[String]) -> anyhow::Result<HourMultipliers> {
    if specs.is_empty() {
        return Ok(HourMultipliers::long());
    }

    let mut multipliers = HourMultipliers::new();
    for raw in specs {
        let (label, value) = split_spec(raw)?;
        let hours = value
            .parse::<f64>()
            .with_context(|| format!("unit `{label}` has an invalid hour count"))?;
        multipliers.insert(label, hours);
    }
    Ok(multipliers)
}
