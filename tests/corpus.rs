use dateutils::{fuzzy_time, fuzzy_time_at, parse_date_time, ParsedTimestamp};
use time::{macros::datetime, Duration, OffsetDateTime};

const CORPUS: &[(&str, &str)] = &[
    ("20181231", "2018-12-31 00:00:00 +0000 UTC"),
    ("31-12-2018", "2018-12-31 00:00:00 +0000 UTC"),
    ("2018-12-31", "2018-12-31 00:00:00 +0000 UTC"),
    ("12/31/2018", "2018-12-31 00:00:00 +0000 UTC"),
    ("2018/12/31", "2018-12-31 00:00:00 +0000 UTC"),
    ("24 Dec 2019", "2019-12-24 00:00:00 +0000 UTC"),
    ("02 December 2018", "2018-12-02 00:00:00 +0000 UTC"),
    ("201812311939", "2018-12-31 19:39:00 +0000 UTC"),
    ("20181231 1959", "2018-12-31 19:59:00 +0000 UTC"),
    ("31-12-2018 15:04", "2018-12-31 15:04:00 +0000 UTC"),
    ("2006-01-02 15:04", "2006-01-02 15:04:00 +0000 UTC"),
    ("12/31/2018 15:04", "2018-12-31 15:04:00 +0000 UTC"),
    ("2018/12/31 15:04", "2018-12-31 15:04:00 +0000 UTC"),
    ("31 Dec 2018 15:04", "2018-12-31 15:04:00 +0000 UTC"),
    ("31 December 2018 15:04", "2018-12-31 15:04:00 +0000 UTC"),
    ("20181231150405", "2018-12-31 15:04:05 +0000 UTC"),
    ("20181231 150405", "2018-12-31 15:04:05 +0000 UTC"),
    ("31-12-2018 15:04:05", "2018-12-31 15:04:05 +0000 UTC"),
    ("2018-12-31 15:04:05", "2018-12-31 15:04:05 +0000 UTC"),
    ("12/31/2018 15:04:05", "2018-12-31 15:04:05 +0000 UTC"),
    ("2018/12/31 15:04:05", "2018-12-31 15:04:05 +0000 UTC"),
    ("31 Dec 2018 15:04:05", "2018-12-31 15:04:05 +0000 UTC"),
    ("02 December 2018 15:04:05", "2018-12-02 15:04:05 +0000 UTC"),
];

#[test]
fn parses_every_supported_format() {
    for &(input, expected) in CORPUS {
        let ts = parse_date_time(input).unwrap_or_else(|err| panic!("{input}: {err}"));
        assert_eq!(ts.to_string(), expected, "{input}");
    }
}

#[test]
fn corpus_agrees_with_from_str() {
    for &(input, _) in CORPUS {
        let a = input.parse::<ParsedTimestamp>().unwrap();
        let b = parse_date_time(input).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn garbage_is_an_error() {
    assert!(parse_date_time("mehe?").is_err());
    assert!(parse_date_time("").is_err());
}

#[test]
fn fuzzy_now() {
    let now = datetime!(2018-12-31 15:04:05.5 UTC);
    assert_eq!(fuzzy_time_at("20181231150405", now).unwrap(), "now");
}

#[test]
fn fuzzy_one_year() {
    let now = datetime!(2018-12-31 0:00 UTC) + Duration::seconds(31_556_736);
    let out = fuzzy_time_at("2018-12-31", now).unwrap();
    assert_eq!(out, "1 year");
}

#[test]
fn fuzzy_two_centuries() {
    let now = datetime!(1800-01-01 0:00 UTC) + Duration::seconds(2 * 3_155_673_600);
    let out = fuzzy_time_at("1800-01-01", now).unwrap();
    assert_eq!(out, "2 centuries");
}

#[test]
fn fuzzy_past_is_not_now() {
    let out = fuzzy_time("2019-06-26 12:00").unwrap();
    assert_ne!(out, "now");
    assert!(out.contains("year"), "{out}");
}

#[test]
fn fuzzy_future_is_now() {
    let next_year = OffsetDateTime::now_utc().year() + 1;
    let out = fuzzy_time(&format!("{next_year}-01-01")).unwrap();
    assert_eq!(out, "now");
}
