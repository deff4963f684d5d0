use std::fmt::Display;

use super::{days_in_month, Date};

// -----------------------------------------------------------------------------
// MonthDay
// -----------------------------------------------------------------------------
/// Month and day of a date without its year.
///
/// Ordered lexicographically by `(month, day)`, which is the order of the
/// dates inside any single year.
/// `--02-29` is a valid value though it only exists in leap years,
/// see [`MonthDay::in_year`].
///
/// ```
/// use hchrono::timepoint::{Date, MonthDay};
///
/// let leap = MonthDay::new(2, 29).unwrap();
/// assert_eq!(leap.in_year(2024), Date::from_ymd_opt(2024, 2, 29));
/// assert_eq!(leap.in_year(2025), None);
/// assert!(MonthDay::new(2, 28).unwrap() < leap);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl Display for MonthDay {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}

//
// ctor
//
impl MonthDay {
    /// Create a new [`MonthDay`].
    ///
    /// Returns [None] if the day does not exist in the month of a leap year.
    #[inline]
    pub fn new(month: u32, day: u32) -> Option<Self> {
        // 2000 is leap, so Feb 29 passes
        (1..=days_in_month(2000, month))
            .contains(&day)
            .then_some(MonthDay { month, day })
    }

    #[inline]
    pub fn of(date: Date) -> Self {
        MonthDay {
            month: date.month(),
            day: date.day(),
        }
    }
}

//
// methods
//
impl MonthDay {
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Place this month-day in the given year.
    ///
    /// Returns [None] for `--02-29` in a non-leap year.
    #[inline]
    pub fn in_year(&self, year: i32) -> Option<Date> {
        Date::from_ymd_opt(year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, 1, true)]
    #[case(2, 29, true)]
    #[case(2, 30, false)]
    #[case(4, 31, false)]
    #[case(12, 31, true)]
    #[case(0, 1, false)]
    #[case(13, 1, false)]
    #[case(1, 0, false)]
    fn test_new(#[case] month: u32, #[case] day: u32, #[case] ok: bool) {
        assert_eq!(MonthDay::new(month, day).is_some(), ok);
    }

    #[test]
    fn test_ord() {
        let md = |m, d| MonthDay::new(m, d).unwrap();

        assert!(md(1, 31) < md(2, 1));
        assert!(md(2, 28) < md(2, 29));
        assert!(md(2, 29) < md(3, 1));
        assert!(md(12, 30) > md(1, 2));
    }

    #[test]
    fn test_of() {
        let d = Date::from_ymd_opt(2024, 12, 30).unwrap();

        assert_eq!(MonthDay::of(d), MonthDay::new(12, 30).unwrap());
        assert_eq!(d.month_day().to_string(), "--12-30");
    }

    #[rstest]
    #[case(2024, true)]
    #[case(2025, false)]
    #[case(1900, false)]
    #[case(2000, true)]
    fn test_in_year_leap_day(#[case] year: i32, #[case] exists: bool) {
        let leap = MonthDay::new(2, 29).unwrap();

        assert_eq!(leap.in_year(year).is_some(), exists);
    }
}
