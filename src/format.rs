use time::OffsetDateTime;

use crate::{parse_date_time, ParseError};

pub trait FormatTime {
    fn as_fuzzy_time(&self) -> String;
}

impl FormatTime for std::time::Duration {
    fn as_fuzzy_time(&self) -> String {
        let secs = i64::try_from(self.as_secs()).unwrap_or(i64::MAX);
        decompose(secs).to_string()
    }
}

impl FormatTime for time::Duration {
    fn as_fuzzy_time(&self) -> String {
        decompose(self.whole_seconds()).to_string()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimeUnit {
    pub name: &'static str,
    pub seconds: i64,
    pub plural: &'static str,
    pub singular: &'static str,
}

impl TimeUnit {
    const fn new(
        name: &'static str,
        seconds: i64,
        plural: &'static str,
        singular: &'static str,
    ) -> Self {
        Self {
            name,
            seconds,
            plural,
            singular,
        }
    }

    const fn suffix(&self, value: i64) -> &'static str {
        if value == 1 {
            self.singular
        } else {
            self.plural
        }
    }
}

/// Largest first. A year is 365.242 days and a month is a twelfth of that.
pub static UNITS: [TimeUnit; 9] = [
    TimeUnit::new("millenni", 31_556_736_000, "a", "um"),
    TimeUnit::new("centur", 3_155_673_600, "ies", "y"),
    TimeUnit::new("decade", 315_567_360, "", ""),
    TimeUnit::new("year", 31_556_736, "", ""),
    TimeUnit::new("month", 2_629_728, "", ""),
    TimeUnit::new("day", 86_400, "", ""),
    TimeUnit::new("hour", 3_600, "", ""),
    TimeUnit::new("minute", 60, "", ""),
    TimeUnit::new("second", 1, "", ""),
];

/// An interval split over [`UNITS`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breakdown {
    parts: Vec<(&'static TimeUnit, i64)>,
    remainder: i64,
}

impl Breakdown {
    /// Units with a non-zero count, largest first
    pub fn parts(&self) -> impl Iterator<Item = (&'static TimeUnit, i64)> + '_ {
        self.parts.iter().copied()
    }

    /// Seconds left over. Non-zero only for negative intervals.
    pub const fn remainder(&self) -> i64 {
        self.remainder
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The interval this was built from
    pub fn total(&self) -> i64 {
        self.parts
            .iter()
            .map(|(unit, value)| unit.seconds * value)
            .sum::<i64>()
            + self.remainder
    }
}

impl std::fmt::Display for Breakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.parts.is_empty() {
            return f.write_str("now");
        }

        for (i, (unit, value)) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value} {}{}", unit.name, unit.suffix(*value))?;
        }
        Ok(())
    }
}

/// Splits `interval` seconds into whole units, largest first.
///
/// Zero and negative intervals produce an empty breakdown, which renders as `now`.
pub fn decompose(interval: i64) -> Breakdown {
    let mut parts = vec![];
    let mut remaining = interval;

    for unit in &UNITS {
        if remaining <= 0 {
            break;
        }
        let value = remaining / unit.seconds;
        if value > 0 {
            remaining -= value * unit.seconds;
            parts.push((unit, value));
        }
    }

    Breakdown {
        parts,
        remainder: remaining,
    }
}

/// How long ago `input` was, e.g. `5 year 2 month 3 day`
pub fn fuzzy_time(input: &str) -> Result<String, ParseError> {
    fuzzy_time_at(input, OffsetDateTime::now_utc())
}

/// Same as [`fuzzy_time`], measured against `now` instead of the clock
pub fn fuzzy_time_at(input: &str, now: OffsetDateTime) -> Result<String, ParseError> {
    parse_date_time(input).map(|ts| ts.fuzzy_since(now))
}

/// Same as [`fuzzy_time`] for inputs that are known to be valid.
///
/// # Panics
/// If `input` is not a supported timestamp
pub fn fuzzy_time_or_abort(input: &str) -> String {
    match fuzzy_time(input) {
        Ok(out) => out,
        Err(err) => panic!("{err}: {input:?}"),
    }
}
