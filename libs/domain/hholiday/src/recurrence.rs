use hchrono::timepoint::{Date, MonthDay};

use crate::HolidaySpan;

// -----------------------------------------------------------------------------
// Recurrence
// -----------------------------------------------------------------------------
/// Month/day pattern of a holiday projected onto every year.
///
/// # Projection
/// The year of the literal dates is dropped and the pattern is read against
/// the year of the date being tested. Comparison is done on [`MonthDay`]s,
/// which orders days exactly as the dates of a single year are ordered.
///
/// # Variants
/// - [`Recurrence::Day`]: single-day holiday, matches the same month and day.
/// - [`Recurrence::Window`]: `start <= end`, matches days between them.
/// - [`Recurrence::Wrapping`]: `end < start`, the range crosses new year
///   (e.g. Dec 30 to Jan 2). The window is anchored at `start` and rolls over
///   twelve months, so it matches from `start` to the end of the year and
///   from the beginning of the year to `end`.
///
/// # Leap day
/// `--02-29` has no occurrence in a non-leap year. A window touching Feb 29
/// keeps all its other days in non-leap years.
///
/// ```
/// use hchrono::timepoint::Date;
/// use hholiday::{HolidaySpan, Recurrence};
///
/// let ymd = |y, m, d| Date::from_ymd_opt(y, m, d).unwrap();
///
/// let festival = HolidaySpan::new(ymd(2024, 12, 30), ymd(2025, 1, 2)).unwrap();
/// let rec = festival.recurrence();
/// assert!(matches!(rec, Recurrence::Wrapping { .. }));
/// assert!(rec.matches(ymd(2026, 12, 31)));
/// assert!(rec.matches(ymd(2026, 1, 2)));
/// assert!(!rec.matches(ymd(2026, 1, 3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recurrence {
    Day(MonthDay),
    Window { start: MonthDay, end: MonthDay },
    Wrapping { start: MonthDay, end: MonthDay },
}

impl Recurrence {
    pub fn of(span: &HolidaySpan) -> Self {
        let start = span.start().month_day();
        if span.is_single_day() {
            return Recurrence::Day(start);
        }
        let end = span.end().month_day();
        if start <= end {
            Recurrence::Window { start, end }
        } else {
            Recurrence::Wrapping { start, end }
        }
    }

    /// Check if the projected pattern covers `date`.
    #[inline]
    pub fn matches(&self, date: Date) -> bool {
        let md = date.month_day();
        match *self {
            Recurrence::Day(day) => md == day,
            Recurrence::Window { start, end } => start <= md && md <= end,
            Recurrence::Wrapping { start, end } => start <= md || md <= end,
        }
    }
}
