mod date;
mod month_day;
mod year_month;

pub use chrono::Weekday;
pub use date::{Date, ParseDateError};
pub use month_day::MonthDay;
pub use year_month::YearMonth;

/// Check if the given year is a leap year in the proleptic Gregorian calendar.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month.
///
/// Returns `0` when `month` is not in `1..=12`.
#[inline]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(2023, false)]
    #[case(2024, true)]
    #[case(1900, false)]
    #[case(2000, true)]
    #[case(2100, false)]
    #[case(-4, true)]
    fn test_is_leap_year(#[case] year: i32, #[case] expected: bool) {
        assert_eq!(is_leap_year(year), expected);
    }

    #[rstest]
    #[case(2024, 1, 31)]
    #[case(2024, 2, 29)]
    #[case(2023, 2, 28)]
    #[case(2023, 4, 30)]
    #[case(2023, 12, 31)]
    #[case(2023, 0, 0)]
    #[case(2023, 13, 0)]
    fn test_days_in_month(#[case] year: i32, #[case] month: u32, #[case] expected: u32) {
        assert_eq!(days_in_month(year, month), expected);
    }
}
