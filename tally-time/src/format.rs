use crate::duration::Duration;

const SECONDS_PER_WEEK: u64 = 604_800;
const SECONDS_PER_DAY: u64 = 86_400;

/// Format whole seconds using the coarse units (e.g. 59s, 1m1s, 1h5s, 1d1h, 2w3d).
///
/// Weeks and days show at most two components; below a day hours, minutes
/// and seconds are all kept. Sub-second remainders are dropped. The output
/// has no separators, so it parses back with [`crate::parse_long_duration`].
pub fn format_compact(duration: Duration) -> String {
    let sign = if duration.is_negative() { "-" } else { "" };
    let total_seconds = duration.unsigned_abs().as_secs();

    let weeks = total_seconds / SECONDS_PER_WEEK;
    let days = (total_seconds % SECONDS_PER_WEEK) / SECONDS_PER_DAY;
    let hours = (total_seconds % SECONDS_PER_DAY) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    if weeks > 0 {
        return if days > 0 {
            format!("{sign}{weeks}w{days}d")
        } else {
            format!("{sign}{weeks}w")
        };
    }

    if days > 0 {
        return if hours > 0 {
            format!("{sign}{days}d{hours}h")
        } else {
            format!("{sign}{days}d")
        };
    }

    if hours > 0 {
        let mut parts = vec![format!("{hours}h")];
        if minutes > 0 {
            parts.push(format!("{minutes}m"));
        }
        if seconds > 0 {
            parts.push(format!("{seconds}s"));
        }
        return format!("{sign}{}", parts.concat());
    }

    if minutes > 0 {
        return if seconds > 0 {
            format!("{sign}{minutes}m{seconds}s")
        } else {
            format!("{sign}{minutes}m")
        };
    }

    if seconds == 0 {
        return "0s".to_owned();
    }

    format!("{sign}{seconds}s")
}
