use hchrono::timepoint::Date;
use smallvec::SmallVec;

use crate::{Holiday, HolidayError, HolidaySpan, Recurrence};

/// Holidays occurring on a date, in the order of the input list.
pub type Occurrences<'a> = SmallVec<[&'a Holiday; 4]>;

// -----------------------------------------------------------------------------
// Resolution
// -----------------------------------------------------------------------------
/// Result of [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Matching holidays, input order preserved
    pub matches: Occurrences<'a>,
    /// Holidays left out because their dates are unusable
    pub rejected: Vec<HolidayError>,
}

/// Find the holidays occurring on `date`.
///
/// A holiday occurs on `date` when either
/// - its literal range `[start_date, end_date]` contains `date`, or
/// - it is recurring and its month/day pattern covers `date` in the year of `date`
///   (see [`Recurrence`]).
///
/// Holidays with malformed or reversed dates never match and are returned in
/// [`Resolution::rejected`]. This function has no side effects, logging those is up to the caller.
///
/// ```
/// use hchrono::timepoint::Date;
/// use hholiday::{resolve, Holiday, HolidayType};
///
/// let ymd = |y, m, d| Date::from_ymd_opt(y, m, d).unwrap();
/// let holidays = vec![
///     Holiday::new("1", "New Year's Day", HolidayType::Public, ymd(2024, 1, 1), ymd(2024, 1, 1))
///         .with_recurring(true),
/// ];
///
/// assert_eq!(resolve(ymd(2025, 1, 1), &holidays).matches.len(), 1);
/// assert!(resolve(ymd(2025, 1, 2), &holidays).matches.is_empty());
/// ```
pub fn resolve(date: Date, holidays: &[Holiday]) -> Resolution<'_> {
    let set = HolidaySet::compile(holidays);
    Resolution {
        matches: set.occurrences_on(date),
        rejected: set.rejected,
    }
}

// -----------------------------------------------------------------------------
// HolidaySet
// -----------------------------------------------------------------------------
#[derive(Debug, Clone)]
struct Entry<'a> {
    holiday: &'a Holiday,
    span: HolidaySpan,
    recurrence: Option<Recurrence>,
}

impl Entry<'_> {
    #[inline]
    fn occurs_on(&self, date: Date) -> bool {
        self.span.contains(date) || self.recurrence.is_some_and(|r| r.matches(date))
    }
}

/// Parsed snapshot of a holiday list, queried per date.
///
/// Dates of the holidays are parsed once here, so querying all 42 cells of a
/// calendar grid does not parse them 42 times.
/// The snapshot borrows the list and never outlives it.
#[derive(Debug, Clone)]
pub struct HolidaySet<'a> {
    entries: Vec<Entry<'a>>,
    rejected: Vec<HolidayError>,
}

impl<'a> HolidaySet<'a> {
    pub fn compile<It>(holidays: It) -> Self
    where
        It: IntoIterator<Item = &'a Holiday>,
    {
        let mut entries = Vec::new();
        let mut rejected = Vec::new();
        for holiday in holidays {
            match holiday.span() {
                Ok(span) => entries.push(Entry {
                    holiday,
                    span,
                    recurrence: holiday.recurring.then(|| span.recurrence()),
                }),
                Err(e) => rejected.push(e),
            }
        }
        HolidaySet { entries, rejected }
    }

    /// Holidays occurring on `date`, in the order given to [`HolidaySet::compile`].
    pub fn occurrences_on(&self, date: Date) -> Occurrences<'a> {
        self.entries
            .iter()
            .filter(|e| e.occurs_on(date))
            .map(|e| e.holiday)
            .collect()
    }

    /// Holidays which could not be compiled.
    #[inline]
    pub fn rejected(&self) -> &[HolidayError] {
        &self.rejected
    }

    /// Number of usable holidays.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use hchrono::timepoint::ParseDateError;
    use rstest::rstest;

    use super::*;
    use crate::{DateField, HolidayType};

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    fn holiday(id: &str, start: &str, end: &str, recurring: bool) -> Holiday {
        Holiday {
            id: id.to_owned(),
            name: format!("Holiday {id}"),
            description: None,
            start_date: start.to_owned(),
            end_date: end.to_owned(),
            kind: HolidayType::Public,
            recurring,
        }
    }

    fn ids(res: &Resolution) -> Vec<String> {
        res.matches.iter().map(|h| h.id.clone()).collect()
    }

    #[rstest_reuse::template]
    #[rstest]
    #[case(ymd(2023, 7, 4))]
    #[case(ymd(2024, 7, 4))]
    #[case(ymd(2027, 7, 4))]
    #[case(ymd(1999, 7, 4))]
    fn year_template(#[case] date: Date) {}

    #[rstest]
    #[case(ymd(2024, 7, 4), true)]
    #[case(ymd(2024, 7, 3), false)]
    #[case(ymd(2024, 7, 5), false)]
    #[case(ymd(2025, 7, 4), false)]
    #[case(ymd(2023, 7, 4), false)]
    fn test_fixed_single_day(#[case] date: Date, #[case] expected: bool) {
        let holidays = vec![holiday("h", "2024-07-04", "2024-07-04", false)];

        let res = resolve(date, &holidays);

        assert_eq!(!res.matches.is_empty(), expected);
        assert!(res.rejected.is_empty());
    }

    #[rstest]
    #[case(ymd(2024, 4, 9), false)]
    #[case(ymd(2024, 4, 10), true)]
    #[case(ymd(2024, 4, 11), true)]
    #[case(ymd(2024, 4, 12), true)]
    #[case(ymd(2024, 4, 13), false)]
    #[case(ymd(2025, 4, 11), false)]
    #[case(ymd(2021, 4, 10), false)]
    fn test_fixed_multi_day(#[case] date: Date, #[case] expected: bool) {
        let holidays = vec![holiday("h", "2024-04-10", "2024-04-12", false)];

        let res = resolve(date, &holidays);

        assert_eq!(!res.matches.is_empty(), expected);
    }

    #[rstest_reuse::apply(year_template)]
    fn test_recurring_single_day(date: Date) {
        let holidays = vec![holiday("h", "2024-07-04", "2024-07-04", true)];

        let on = resolve(date, &holidays);
        let next = resolve(date.add_days(1).unwrap(), &holidays);
        let prev = resolve(date.add_days(-1).unwrap(), &holidays);

        assert_eq!(ids(&on), vec!["h"]);
        assert!(next.matches.is_empty());
        assert!(prev.matches.is_empty());
    }

    #[rstest_reuse::apply(year_template)]
    fn test_recurring_multi_day(date: Date) {
        let holidays = vec![holiday("h", "2024-07-02", "2024-07-06", true)];
        let year = date.year();

        let inside = ymd(year, 7, 2)
            .iter_days()
            .take_while(|d| *d <= ymd(year, 7, 6))
            .collect::<Vec<_>>();

        assert_eq!(inside.len(), 5);
        assert!(inside
            .iter()
            .all(|d| ids(&resolve(*d, &holidays)) == vec!["h"]));
        assert!(resolve(ymd(year, 7, 1), &holidays).matches.is_empty());
        assert!(resolve(ymd(year, 7, 7), &holidays).matches.is_empty());
    }

    #[test]
    fn test_new_years_day_scenario() {
        let holidays = vec![Holiday::new(
            "ny",
            "New Year's Day",
            HolidayType::Public,
            ymd(2024, 1, 1),
            ymd(2024, 1, 1),
        )
        .with_recurring(true)];

        let hit = resolve("2025-01-01".parse().unwrap(), &holidays);
        let miss = resolve("2025-01-02".parse().unwrap(), &holidays);

        assert_eq!(
            hit.matches.iter().map(|h| h.name.as_str()).collect::<Vec<_>>(),
            vec!["New Year's Day"]
        );
        assert!(miss.matches.is_empty());
    }

    #[rstest]
    #[case(ymd(2026, 12, 29), false)]
    #[case(ymd(2026, 12, 30), true)]
    #[case(ymd(2026, 12, 31), true)]
    #[case(ymd(2026, 1, 1), true)]
    #[case(ymd(2026, 1, 2), true)]
    #[case(ymd(2026, 1, 3), false)]
    #[case(ymd(2024, 12, 30), true)] // literal
    #[case(ymd(2025, 1, 2), true)] // literal
    #[case(ymd(2023, 1, 1), true)]
    fn test_festival_wraps_new_year(#[case] date: Date, #[case] expected: bool) {
        let holidays = vec![holiday("festival", "2024-12-30", "2025-01-02", true)];

        let res = resolve(date, &holidays);

        assert_eq!(!res.matches.is_empty(), expected);
    }

    #[test]
    fn test_festival_fixed_does_not_wrap() {
        let holidays = vec![holiday("festival", "2024-12-30", "2025-01-02", false)];

        assert!(resolve(ymd(2026, 12, 31), &holidays).matches.is_empty());
        assert!(resolve(ymd(2026, 1, 1), &holidays).matches.is_empty());
        assert_eq!(resolve(ymd(2025, 1, 1), &holidays).matches.len(), 1);
    }

    #[rstest]
    #[case(ymd(2024, 2, 29), true)]
    #[case(ymd(2028, 2, 29), true)]
    #[case(ymd(2025, 2, 28), false)]
    #[case(ymd(2025, 3, 1), false)]
    #[case(ymd(2100, 2, 28), false)]
    fn test_leap_day_recurring(#[case] date: Date, #[case] expected: bool) {
        let holidays = vec![holiday("leap", "2024-02-29", "2024-02-29", true)];

        let res = resolve(date, &holidays);

        assert_eq!(!res.matches.is_empty(), expected);
        assert!(res.rejected.is_empty());
    }

    #[test]
    fn test_order_is_input_order() {
        let holidays = vec![
            holiday("c", "2024-03-01", "2024-03-31", false),
            holiday("a", "2020-03-15", "2020-03-15", true),
            holiday("x", "2024-04-01", "2024-04-01", false),
            holiday("b", "2024-03-10", "2024-03-20", false),
        ];

        let res = resolve(ymd(2024, 3, 15), &holidays);

        assert_eq!(ids(&res), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_malformed_and_reversed_are_rejected() {
        let holidays = vec![
            holiday("bad", "2024-02-30", "2024-03-01", true),
            holiday("ok", "2024-03-01", "2024-03-01", false),
            holiday("rev", "2024-03-05", "2024-02-25", false),
            holiday("ts", "2024-03-01", "2024-03-01T09:00:00+09:00", false),
        ];

        let res = resolve(ymd(2024, 3, 1), &holidays);

        assert_eq!(ids(&res), vec!["ok"]);
        assert_eq!(
            res.rejected,
            vec![
                HolidayError::MalformedHolidayDate {
                    id: "bad".to_owned(),
                    field: DateField::Start,
                    source: ParseDateError::NonExistent("2024-02-30".to_owned()),
                },
                HolidayError::InvalidHolidayRange {
                    id: "rev".to_owned(),
                    start: ymd(2024, 3, 5),
                    end: ymd(2024, 2, 25),
                },
                HolidayError::MalformedHolidayDate {
                    id: "ts".to_owned(),
                    field: DateField::End,
                    source: ParseDateError::Format("2024-03-01T09:00:00+09:00".to_owned()),
                },
            ]
        );
    }

    #[test]
    fn test_reversed_never_matches() {
        let holidays = vec![holiday("rev", "2024-03-05", "2024-02-25", true)];
        let set = HolidaySet::compile(&holidays);

        assert!(set.is_empty());
        assert!(ymd(2024, 1, 1)
            .iter_days()
            .take(366)
            .all(|d| set.occurrences_on(d).is_empty()));
    }

    #[test]
    fn test_idempotent() {
        let holidays = vec![
            holiday("a", "2024-12-30", "2025-01-02", true),
            holiday("b", "2025-01-01", "2025-01-01", false),
            holiday("bad", "x", "y", false),
        ];

        assert_eq!(
            resolve(ymd(2025, 1, 1), &holidays),
            resolve(ymd(2025, 1, 1), &holidays)
        );
    }

    #[test]
    fn test_set_matches_resolve() {
        let holidays = vec![
            holiday("a", "2024-12-30", "2025-01-02", true),
            holiday("b", "2024-02-29", "2024-03-02", true),
            holiday("c", "2025-06-01", "2025-06-30", false),
        ];
        let set = HolidaySet::compile(&holidays);

        assert_eq!(set.len(), 3);
        for d in ymd(2025, 1, 1).iter_days().take(365) {
            assert_eq!(set.occurrences_on(d), resolve(d, &holidays).matches);
        }
    }

    #[test]
    fn test_compile_filtered_iter() {
        let holidays = vec![
            holiday("a", "2024-01-01", "2024-01-01", true),
            holiday("b", "2024-01-01", "2024-01-01", true),
        ];

        let set = HolidaySet::compile(holidays.iter().filter(|h| h.id == "b"));

        assert_eq!(
            set.occurrences_on(ymd(2030, 1, 1)).as_slice(),
            &[&holidays[1]]
        );
    }
}
