use time::OffsetDateTime;

use crate::{parse_date_time, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} is not a unix timestamp: {value:?}")]
    InvalidUnixTime {
        key: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("{key} is out of range: {value:?}")]
    OutOfRange { key: &'static str, value: String },

    #[error("{key} is not a supported timestamp: {value:?}")]
    InvalidTimestamp {
        key: &'static str,
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("{key} must be true or false: {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

/// Settings for the command line, read from the environment
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Reference instant for fuzzy output, the wall clock when unset
    pub now: Option<OffsetDateTime>,
    /// Print JSON instead of plain text
    pub json: bool,
}

impl Config {
    pub const NOW: &'static str = "DATEUTILS_NOW";
    pub const JSON: &'static str = "DATEUTILS_JSON";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key-value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        fn non_empty(value: Option<String>) -> Option<String> {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        }

        let now = non_empty(lookup(Self::NOW))
            .map(|value| parse_now(Self::NOW, value))
            .transpose()?;

        let json = non_empty(lookup(Self::JSON))
            .map(|value| parse_bool(Self::JSON, value))
            .transpose()?
            .unwrap_or_default();

        Ok(Self { now, json })
    }

    pub fn now(&self) -> OffsetDateTime {
        self.now.unwrap_or_else(OffsetDateTime::now_utc)
    }
}

// `@<seconds>` is a unix timestamp, anything else goes through the format rules
fn parse_now(key: &'static str, value: String) -> Result<OffsetDateTime, ConfigError> {
    if let Some(secs) = value.strip_prefix('@') {
        let secs = match secs.parse::<i64>() {
            Ok(secs) => secs,
            Err(source) => return Err(ConfigError::InvalidUnixTime { key, value, source }),
        };
        return OffsetDateTime::from_unix_timestamp(secs)
            .map_err(|_| ConfigError::OutOfRange { key, value });
    }

    match parse_date_time(&value) {
        Ok(ts) => Ok(ts.assume_utc()),
        Err(source) => Err(ConfigError::InvalidTimestamp { key, value, source }),
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match &*value.to_ascii_lowercase() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { key, value }),
    }
}
