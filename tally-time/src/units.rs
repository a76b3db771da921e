use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::duration::Duration;

/// Units understood by the standard grammar.
pub static BASE_UNITS: LazyLock<UnitTable> = LazyLock::new(UnitTable::base);

/// Standard units plus day and week.
pub static LONG_UNITS: LazyLock<UnitTable> = LazyLock::new(UnitTable::long);

/// Hour multipliers used by [`crate::parse_long_duration`].
pub static LONG_HOUR_MULTIPLIERS: LazyLock<HourMultipliers> =
    LazyLock::new(HourMultipliers::long);

/// Unit label to nanoseconds-per-unit, for the numeric strategy.
///
/// Lookup is by exact label. An empty label can be stored but never
/// matches, because the scanner does not produce empty labels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitTable {
    scales: BTreeMap<String, u64>,
}

impl UnitTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// `ns`, `us`, `µs` (U+00B5), `μs` (U+03BC), `ms`, `s`, `m`, `h`.
    pub fn base() -> Self {
        [
            ("ns", Duration::NANOSECOND),
            ("us", Duration::MICROSECOND),
            ("\u{b5}s", Duration::MICROSECOND),
            ("\u{3bc}s", Duration::MICROSECOND),
            ("ms", Duration::MILLISECOND),
            ("s", Duration::SECOND),
            ("m", Duration::MINUTE),
            ("h", Duration::HOUR),
        ]
        .into_iter()
        .collect()
    }

    /// [`UnitTable::base`] plus `d` (24h) and `w` (168h).
    pub fn long() -> Self {
        Self::base()
            .with_unit("d", Duration::DAY.scale())
            .with_unit("w", Duration::WEEK.scale())
    }

    pub fn with_unit(mut self, label: impl Into<String>, nanos: u64) -> Self {
        self.insert(label, nanos);
        self
    }

    /// Returns the previous scale when the label was already present.
    pub fn insert(&mut self, label: impl Into<String>, nanos: u64) -> Option<u64> {
        self.scales.insert(label.into(), nanos)
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.scales.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for UnitTable {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self {
            scales: iter
                .into_iter()
                .map(|(label, nanos)| (label.into(), nanos))
                .collect(),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Duration)> for UnitTable {
    fn from_iter<I: IntoIterator<Item = (K, Duration)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(label, unit)| (label, unit.scale()))
            .collect()
    }
}

/// Unit label to hours-per-unit, for the text-substitution strategy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HourMultipliers {
    hours: BTreeMap<String, f64>,
}

impl HourMultipliers {
    pub fn new() -> Self {
        Self::default()
    }

    /// `d` = 24 and `w` = 168.
    pub fn long() -> Self {
        [("d", 24.0), ("w", 168.0)].into_iter().collect()
    }

    pub fn with_unit(mut self, label: impl Into<String>, hours: f64) -> Self {
        self.insert(label, hours);
        self
    }

    pub fn insert(&mut self, label: impl Into<String>, hours: f64) -> Option<f64> {
        self.hours.insert(label.into(), hours)
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.hours.get(label).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// `([0-9.]+)([<labels>]+)` with the labels joined by `|` inside one
    /// character class.
    ///
    /// Labels are otherwise not escaped. A label such as `.*` or `f|g`
    /// contributes its characters to the class, so the unit capture is any
    /// run of those characters, and it is only rewritten when the run equals
    /// a label. `[` is escaped so that it stays a literal member instead of
    /// opening a nested class. Ranges such as `z-a` still fail to compile.
    pub fn pattern(&self) -> Result<Regex, regex::Error> {
        let labels: Vec<String> = self
            .hours
            .keys()
            .map(|label| label.replace('[', r"\["))
            .collect();
        Regex::new(&format!("([0-9.]+)([{}]+)", labels.join("|")))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for HourMultipliers {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            hours: iter
                .into_iter()
                .map(|(label, hours)| (label.into(), hours))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BASE_UNITS, HourMultipliers, LONG_UNITS, UnitTable};
    use crate::duration::Duration;

    #[test]
    fn base_table_has_both_micro_signs() {
        assert_eq!(BASE_UNITS.get("\u{b5}s"), Some(1_000));
        assert_eq!(BASE_UNITS.get("\u{3bc}s"), Some(1_000));
        assert_eq!(BASE_UNITS.get("us"), Some(1_000));
        assert_eq!(BASE_UNITS.get("d"), None);
        assert_eq!(BASE_UNITS.len(), 8);
    }

    #[test]
    fn long_table_adds_day_and_week() {
        assert_eq!(LONG_UNITS.get("d"), Some(86_400_000_000_000));
        assert_eq!(LONG_UNITS.get("w"), Some(604_800_000_000_000));
        assert_eq!(LONG_UNITS.get("h"), Some(3_600_000_000_000));
        assert_eq!(LONG_UNITS.len(), 10);
    }

    #[test]
    fn lookup_is_exact() {
        let table = UnitTable::new().with_unit("fortnight", 14 * Duration::DAY.scale());
        assert!(table.get("fortnight").is_some());
        assert!(table.get("fort").is_none());
        assert!(table.get("fortnights").is_none());
    }

    #[test]
    fn insert_replaces_existing_scale() {
        let mut table: UnitTable = [("x", Duration::SECOND)].into_iter().collect();
        assert_eq!(table.insert("x", 5), Some(1_000_000_000));
        assert_eq!(table.get("x"), Some(5));
    }

    #[test]
    fn pattern_joins_labels_into_one_class() {
        let pattern = HourMultipliers::long().pattern().map(|re| re.as_str().to_owned());
        assert_eq!(pattern.as_deref().ok(), Some("([0-9.]+)([d|w]+)"));

        let metachars: HourMultipliers = [(".*", 3.0)].into_iter().collect();
        assert!(metachars.pattern().is_ok_and(|re| re.is_match("1.*")));

        let bracket: HourMultipliers = [("[", 1.0), ("d", 24.0)].into_iter().collect();
        let pattern = bracket.pattern().map(|re| re.as_str().to_owned());
        assert_eq!(pattern.as_deref().ok(), Some(r"([0-9.]+)([\[|d]+)"));
    }
}
