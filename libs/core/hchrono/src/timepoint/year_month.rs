use std::{fmt::Display, str::FromStr};

use anyhow::{bail, Context};

use super::{days_in_month, Date};

// -----------------------------------------------------------------------------
// YearMonth
// -----------------------------------------------------------------------------
/// A month of a specific year, e.g. `2024-02`.
///
/// Month numbers out of `1..=12` are carried into the year by [`YearMonth::normalized`],
/// so "next month" of December is January of the next year.
///
/// ```
/// use hchrono::timepoint::YearMonth;
///
/// let ym = YearMonth::normalized(2024, 13).unwrap();
/// assert_eq!(ym, YearMonth::new(2025, 1).unwrap());
/// assert_eq!(ym.pred(), YearMonth::new(2024, 12));
/// assert_eq!(ym.to_string(), "2025-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

//
// ser/de
//
impl Display for YearMonth {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((y, m)) = s.split_once('-') else {
            bail!("invalid year-month string: {s}. Expected format is YYYY-MM");
        };
        let digits = |p: &str, n: usize| p.len() == n && p.bytes().all(|b| b.is_ascii_digit());
        if !digits(y, 4) || !digits(m, 2) {
            bail!("invalid year-month string: {s}. Expected format is YYYY-MM");
        }
        let year = y
            .parse::<u16>()
            .with_context(|| format!("parse year part '{y}' of '{s}'"))?;
        let month = m
            .parse::<u8>()
            .with_context(|| format!("parse month part '{m}' of '{s}'"))?;
        YearMonth::new(year as i32, month as u32)
            .with_context(|| format!("month of '{s}' must be in 1..=12"))
    }
}

impl serde::Serialize for YearMonth {
    #[inline]
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for YearMonth {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

//
// ctor
//
impl YearMonth {
    /// Create a new [`YearMonth`]. `month` must be in `1..=12`.
    #[inline]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12)
            .contains(&month)
            .then_some(YearMonth { year, month })
    }

    /// Create a new [`YearMonth`] carrying the overflow of `month` into the year.
    ///
    /// Month `13` of year `Y` is January of `Y+1` and month `0` is December of `Y-1`.
    /// Returns [None] only if the year overflows.
    #[inline]
    pub fn normalized(year: i32, month: i64) -> Option<Self> {
        let total = (year as i64).checked_mul(12)?.checked_add(month - 1)?;
        let year = i32::try_from(total.div_euclid(12)).ok()?;
        let month = (total.rem_euclid(12) + 1) as u32;
        Some(YearMonth { year, month })
    }

    #[inline]
    pub fn of(date: Date) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }
}

//
// methods
//
impl YearMonth {
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Shift by `months` months. Negative values go backward.
    #[inline]
    pub fn add_months(&self, months: i64) -> Option<Self> {
        YearMonth::normalized(self.year, (self.month as i64).checked_add(months)?)
    }

    /// The next month.
    #[inline]
    pub fn succ(&self) -> Option<Self> {
        self.add_months(1)
    }

    /// The previous month.
    #[inline]
    pub fn pred(&self) -> Option<Self> {
        self.add_months(-1)
    }

    /// The first day of the month.
    ///
    /// Returns [None] if the month is out of the supported range of [`Date`].
    #[inline]
    pub fn first_day(&self) -> Option<Date> {
        Date::from_ymd_opt(self.year, self.month, 1)
    }

    /// Number of days in the month, 28 to 31.
    #[inline]
    pub fn num_days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}
