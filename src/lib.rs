mod config;
mod format;
mod time;

pub mod rules;

pub use config::{Config, ConfigError};
pub use format::{
    decompose, fuzzy_time, fuzzy_time_at, fuzzy_time_or_abort, Breakdown, FormatTime, TimeUnit,
    UNITS,
};
pub use self::time::{parse_date_time, recognize, ParseError, ParsedTimestamp};
