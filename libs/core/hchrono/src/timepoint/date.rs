use std::{fmt::Display, str::FromStr, sync::OnceLock};

use chrono::{Datelike, Days, NaiveDate, Weekday};
use schemars::schema::SchemaObject;

use super::{MonthDay, YearMonth};

// -----------------------------------------------------------------------------
// ParseDateError
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseDateError {
    #[error("'{0}' is not a calendar date. Expected format is YYYY-MM-DD")]
    Format(String),
    #[error("'{0}' does not exist in the calendar")]
    NonExistent(String),
}

// -----------------------------------------------------------------------------
// Date
// -----------------------------------------------------------------------------
/// Calendar date without time-of-day and timezone.
///
/// Thin immutable wrapper around [`chrono::NaiveDate`].
/// All arithmetic returns a new value and comparisons are date-only,
/// so a date never drifts by a day because of an offset or a time part.
///
/// ```
/// use hchrono::timepoint::{Date, Weekday};
///
/// let d: Date = "2024-02-28".parse().unwrap();
/// assert_eq!(d.add_days(1), Date::from_ymd_opt(2024, 2, 29));
/// assert_eq!(d.weekday(), Weekday::Wed);
/// assert_eq!(d.to_string(), "2024-02-28");
///
/// // timestamps are not calendar dates
/// assert!("2024-02-28T00:00:00Z".parse::<Date>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

//
// conversion
//
impl From<NaiveDate> for Date {
    #[inline]
    fn from(inner: NaiveDate) -> Self {
        Date(inner)
    }
}

impl From<Date> for NaiveDate {
    #[inline]
    fn from(date: Date) -> NaiveDate {
        date.0
    }
}

//
// ser/de
//
impl Display for Date {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static YMD: OnceLock<regex::Regex> = OnceLock::new();
        let ymd = YMD.get_or_init(|| {
            regex::Regex::new(r"^(?P<y>\d{4})-(?P<m>\d{2})-(?P<d>\d{2})$").unwrap()
        });

        let caps = ymd
            .captures(s)
            .ok_or_else(|| ParseDateError::Format(s.to_owned()))?;
        let num = |name: &str| {
            caps[name]
                .parse::<u32>()
                .map_err(|_| ParseDateError::Format(s.to_owned()))
        };
        let (y, m, d) = (num("y")? as i32, num("m")?, num("d")?);
        Date::from_ymd_opt(y, m, d).ok_or_else(|| ParseDateError::NonExistent(s.to_owned()))
    }
}

impl serde::Serialize for Date {
    #[inline]
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl schemars::JsonSchema for Date {
    fn schema_name() -> String {
        "Date".to_string()
    }
    fn schema_id() -> std::borrow::Cow<'static, str> {
        "hchrono::timepoint::Date".into()
    }

    fn json_schema(_: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        let mut sch = SchemaObject {
            instance_type: Some(schemars::schema::InstanceType::String.into()),
            format: Some("date".to_string()),
            ..Default::default()
        };
        sch.metadata().description =
            Some("Calendar date without time and timezone (YYYY-MM-DD)".to_string());
        sch.string().pattern = Some(r"^\d{4}-\d{2}-\d{2}$".to_string());
        sch.into()
    }
}

//
// ctor
//
impl Date {
    pub const MIN: Date = Date(NaiveDate::MIN);
    pub const MAX: Date = Date(NaiveDate::MAX);

    /// Create a date from year, month and day.
    ///
    /// Returns [None] if the combination does not exist, e.g. Feb 29 of a non-leap year.
    #[inline]
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Date)
    }

    /// Today in the local timezone of the machine.
    ///
    /// Only entry points should call this. Computations take `today` as an argument.
    #[inline]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }
}

//
// methods
//
impl Date {
    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Year-independent part of the date.
    #[inline]
    pub fn month_day(&self) -> MonthDay {
        MonthDay::of(*self)
    }

    #[inline]
    pub fn year_month(&self) -> YearMonth {
        YearMonth::of(*self)
    }

    /// Shift the date by `days` calendar days. Negative values go backward.
    ///
    /// Returns [None] when the result leaves the supported range.
    #[inline]
    pub fn add_days(&self, days: i64) -> Option<Self> {
        let n = Days::new(days.unsigned_abs());
        if days < 0 {
            self.0.checked_sub_days(n).map(Date)
        } else {
            self.0.checked_add_days(n).map(Date)
        }
    }

    /// Signed number of days from `other` to `self`.
    #[inline]
    pub fn days_since(&self, other: Date) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }

    /// Iterator over the consecutive days starting from this date (inclusive).
    #[inline]
    pub fn iter_days(&self) -> impl Iterator<Item = Date> {
        self.0.iter_days().map(Date)
    }

    /// Format with a [`chrono::format::strftime`] pattern.
    #[inline]
    pub fn format<'a>(&self, fmt: &'a str) -> impl Display + 'a {
        self.0.format(fmt)
    }
}
