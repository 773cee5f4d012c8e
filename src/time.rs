use time::{format_description::well_known::Rfc3339, OffsetDateTime, PrimitiveDateTime};

use crate::rules::{self, FormatRule};

/// The input did not look like, or did not parse as, any supported timestamp
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unable to parse timestamp")]
pub struct ParseError {
    input: String,
}

impl ParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The string that was rejected
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A point in time without an offset, read as UTC.
///
/// Only [`parse_date_time`] (or `FromStr`/`Deserialize`, which call it) produces one:
///
/// ```compile_fail
/// let ts: dateutils::ParsedTimestamp = time::macros::datetime!(2018-12-31 0:00).into();
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedTimestamp(PrimitiveDateTime);

impl ParsedTimestamp {
    pub const fn as_datetime(&self) -> PrimitiveDateTime {
        self.0
    }

    pub fn assume_utc(&self) -> OffsetDateTime {
        self.0.assume_utc()
    }

    pub fn unix_timestamp(&self) -> i64 {
        self.assume_utc().unix_timestamp()
    }

    /// Time passed between this timestamp and `now`, negative if this is in the future
    pub fn elapsed_since(&self, now: OffsetDateTime) -> time::Duration {
        now - self.assume_utc()
    }

    /// The fuzzy phrase for the time passed between this timestamp and `now`
    pub fn fuzzy_since(&self, now: OffsetDateTime) -> String {
        crate::format::decompose(self.elapsed_since(now).whole_seconds()).to_string()
    }
}

impl std::fmt::Display for ParsedTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dt = self.0;
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} +0000 UTC",
            dt.year(),
            u8::from(dt.month()),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second()
        )
    }
}

impl std::str::FromStr for ParsedTimestamp {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date_time(s)
    }
}

impl serde::Serialize for ParsedTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::Error as _;
        let s = self.assume_utc().format(&Rfc3339).map_err(S::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

impl<'de> serde::Deserialize<'de> for ParsedTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;
        let s = <std::borrow::Cow<'_, str>>::deserialize(deserializer)?;
        parse_date_time(&s).map_err(D::Error::custom)
    }
}

/// Recognizes the format of `input` and parses it.
///
/// Both an unrecognized shape and a recognized shape holding an impossible
/// date (`30-02-2019`, `2019-01-01 24:00`) produce a [`ParseError`]. Dates
/// are never normalized.
pub fn parse_date_time(input: &str) -> Result<ParsedTimestamp, ParseError> {
    recognize(input).map(|(ts, _)| ts)
}

/// Same as [`parse_date_time`], also returning the rule that recognized `input`
pub fn recognize(input: &str) -> Result<(ParsedTimestamp, &'static FormatRule), ParseError> {
    let Some(rule) = rules::find(input) else {
        log::debug!("no format recognizes {input:?}");
        return Err(ParseError::new(input));
    };
    log::trace!("{input:?} recognized as '{rule}'");

    match rule.layout().parse(input) {
        Ok(dt) => Ok((ParsedTimestamp(dt), rule)),
        Err(err) => {
            log::debug!("{input:?} looked like '{rule}' but did not parse: {err}");
            Err(ParseError::new(input))
        }
    }
}
