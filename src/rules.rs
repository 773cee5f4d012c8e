use std::sync::LazyLock;

use regex::Regex;
use time::{
    format_description::BorrowedFormatItem, macros::format_description, Date, PrimitiveDateTime,
};

type Description = &'static [BorrowedFormatItem<'static>];

/// How a recognized string is turned into a datetime
#[derive(Copy, Clone, Debug)]
pub enum Layout {
    /// Only a calendar date, the time of day is midnight
    Date(Description),
    /// A calendar date followed by a time of day
    DateTime(Description),
}

impl Layout {
    pub fn parse(&self, input: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
        match *self {
            Self::Date(desc) => Date::parse(input, desc).map(Date::midnight),
            Self::DateTime(desc) => PrimitiveDateTime::parse(input, desc),
        }
    }
}

/// A pattern that recognizes the shape of a string and the layout used to parse it
#[derive(Debug)]
pub struct FormatRule {
    name: &'static str,
    pattern: Regex,
    layout: Layout,
}

impl FormatRule {
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub const fn layout(&self) -> Layout {
        self.layout
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }
}

impl std::fmt::Display for FormatRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

// Shapes differ by separator, digit count or time of day, so at most one of these matches any input.
// Order is the evaluation order.
const RULES: &[(&str, &str, Layout)] = &[
    (
        "compact date",
        r"^[0-9]{8}$",
        Layout::Date(format_description!("[year][month][day]")),
    ),
    (
        "day-month-year",
        r"^[0-9]{1,2}-[0-9]{1,2}-[0-9]{4}$",
        Layout::Date(format_description!(
            "[day]-[month]-[year]"
        )),
    ),
    (
        "year-month-day",
        r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$",
        Layout::Date(format_description!(
            "[year]-[month]-[day]"
        )),
    ),
    (
        "month/day/year",
        r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}$",
        Layout::Date(format_description!(
            "[month]/[day]/[year]"
        )),
    ),
    (
        "year/month/day",
        r"^[0-9]{4}/[0-9]{1,2}/[0-9]{1,2}$",
        Layout::Date(format_description!(
            "[year]/[month]/[day]"
        )),
    ),
    (
        "day short-month year",
        r"(?i)^[0-9]{1,2} [a-z]{3} [0-9]{4}$",
        Layout::Date(format_description!(
            "[day] [month repr:short case_sensitive:false] [year]"
        )),
    ),
    (
        "day month year",
        r"(?i)^[0-9]{1,2} [a-z]{4,} [0-9]{4}$",
        Layout::Date(format_description!(
            "[day] [month repr:long case_sensitive:false] [year]"
        )),
    ),
    (
        "compact date and minutes",
        r"^[0-9]{12}$",
        Layout::DateTime(format_description!("[year][month][day][hour][minute]")),
    ),
    (
        "compact date, hhmm",
        r"^[0-9]{8} [0-9]{4}$",
        Layout::DateTime(format_description!("[year][month][day] [hour][minute]")),
    ),
    (
        "day-month-year hh:mm",
        r"^[0-9]{1,2}-[0-9]{1,2}-[0-9]{4} [0-9]{1,2}:[0-9]{2}$",
        Layout::DateTime(format_description!(
            "[day]-[month]-[year] [hour padding:none]:[minute]"
        )),
    ),
    (
        "year-month-day hh:mm",
        r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2} [0-9]{1,2}:[0-9]{2}$",
        Layout::DateTime(format_description!(
            "[year]-[month]-[day] [hour padding:none]:[minute]"
        )),
    ),
    (
        "month/day/year hh:mm",
        r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4} [0-9]{1,2}:[0-9]{2}$",
        Layout::DateTime(format_description!(
            "[month]/[day]/[year] [hour padding:none]:[minute]"
        )),
    ),
    (
        "year/month/day hh:mm",
        r"^[0-9]{4}/[0-9]{1,2}/[0-9]{1,2} [0-9]{1,2}:[0-9]{2}$",
        Layout::DateTime(format_description!(
            "[year]/[month]/[day] [hour padding:none]:[minute]"
        )),
    ),
    (
        "day short-month year hh:mm",
        r"(?i)^[0-9]{1,2} [a-z]{3} [0-9]{4} [0-9]{1,2}:[0-9]{2}$",
        Layout::DateTime(format_description!(
            "[day] [month repr:short case_sensitive:false] [year] [hour padding:none]:[minute]"
        )),
    ),
    (
        "day month year hh:mm",
        r"(?i)^[0-9]{1,2} [a-z]{4,} [0-9]{4} [0-9]{1,2}:[0-9]{2}$",
        Layout::DateTime(format_description!(
            "[day] [month repr:long case_sensitive:false] [year] [hour padding:none]:[minute]"
        )),
    ),
    (
        "compact date and seconds",
        r"^[0-9]{14}$",
        Layout::DateTime(format_description!(
            "[year][month][day][hour][minute][second]"
        )),
    ),
    (
        "compact date, hhmmss",
        r"^[0-9]{8} [0-9]{6}$",
        Layout::DateTime(format_description!(
            "[year][month][day] [hour][minute][second]"
        )),
    ),
    (
        "day-month-year hh:mm:ss",
        r"^[0-9]{1,2}-[0-9]{1,2}-[0-9]{4} [0-9]{1,2}:[0-9]{2}:[0-9]{2}$",
        Layout::DateTime(format_description!(
            "[day]-[month]-[year] [hour padding:none]:[minute]:[second]"
        )),
    ),
    (
        "year-month-day hh:mm:ss",
        r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2} [0-9]{1,2}:[0-9]{2}:[0-9]{2}$",
        Layout::DateTime(format_description!(
            "[year]-[month]-[day] [hour padding:none]:[minute]:[second]"
        )),
    ),
    (
        "month/day/year hh:mm:ss",
        r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4} [0-9]{1,2}:[0-9]{2}:[0-9]{2}$",
        Layout::DateTime(format_description!(
            "[month]/[day]/[year] [hour padding:none]:[minute]:[second]"
        )),
    ),
    (
        "year/month/day hh:mm:ss",
        r"^[0-9]{4}/[0-9]{1,2}/[0-9]{1,2} [0-9]{1,2}:[0-9]{2}:[0-9]{2}$",
        Layout::DateTime(format_description!(
            "[year]/[month]/[day] [hour padding:none]:[minute]:[second]"
        )),
    ),
    (
        "day short-month year hh:mm:ss",
        r"(?i)^[0-9]{1,2} [a-z]{3} [0-9]{4} [0-9]{1,2}:[0-9]{2}:[0-9]{2}$",
        Layout::DateTime(format_description!(
            "[day] [month repr:short case_sensitive:false] [year] [hour padding:none]:[minute]:[second]"
        )),
    ),
    (
        "day month year hh:mm:ss",
        r"(?i)^[0-9]{1,2} [a-z]{4,} [0-9]{4} [0-9]{1,2}:[0-9]{2}:[0-9]{2}$",
        Layout::DateTime(format_description!(
            "[day] [month repr:long case_sensitive:false] [year] [hour padding:none]:[minute]:[second]"
        )),
    ),
];

static TABLE: LazyLock<Vec<FormatRule>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|&(name, pattern, layout)| FormatRule {
            name,
            pattern: Regex::new(pattern).expect("valid rule pattern"),
            layout,
        })
        .collect()
});

/// Every known rule, in evaluation order
pub fn all() -> &'static [FormatRule] {
    &TABLE
}

/// Finds the rule that recognizes `input`, if any
pub fn find(input: &str) -> Option<&'static FormatRule> {
    all().iter().find(|rule| rule.is_match(input))
}
