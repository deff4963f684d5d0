use crate::timepoint::{Date, YearMonth};

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
pub const GRID_LEN: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

// -----------------------------------------------------------------------------
// GridError
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum GridError {
    #[error("Month {month} of year {year} can not be normalized to a valid month")]
    InvalidMonth { year: i32, month: i64 },
    #[error("The calendar grid of {0} is out of the supported range of dates")]
    OutOfRange(YearMonth),
}

// -----------------------------------------------------------------------------
// CalendarDay
// -----------------------------------------------------------------------------
/// A cell of [`MonthGrid`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: Date,
    /// The date belongs to the displayed month
    pub is_current_month: bool,
    pub is_today: bool,
}

// -----------------------------------------------------------------------------
// MonthGrid
// -----------------------------------------------------------------------------
/// Six full weeks, Sunday first, covering a month.
///
/// # Overview
/// The grid always has [`GRID_LEN`] cells whatever the length of the month is
/// and whichever weekday it starts on.
/// The first cell is the latest Sunday on or before the first day of the month
/// and the cells are consecutive days.
/// Leading and trailing cells are real dates of the adjacent months
/// with `is_current_month == false`.
///
/// ```
/// use hchrono::grid::MonthGrid;
/// use hchrono::timepoint::{Date, YearMonth, Weekday};
///
/// let today = Date::from_ymd_opt(2024, 2, 14).unwrap();
/// let grid = MonthGrid::build(YearMonth::new(2024, 2).unwrap(), today).unwrap();
///
/// assert_eq!(grid.iter().count(), 42);
/// assert_eq!(grid.first().date, Date::from_ymd_opt(2024, 1, 28).unwrap());
/// assert_eq!(grid.first().date.weekday(), Weekday::Sun);
/// assert_eq!(grid.current_month_days().count(), 29);
/// assert_eq!(grid.today().map(|d| d.date), Some(today));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct MonthGrid {
    month: YearMonth,
    days: Vec<CalendarDay>,
}

//
// construction
//
impl MonthGrid {
    /// Build the grid of the given month.
    ///
    /// `today` only sets [`CalendarDay::is_today`]; it does not have to be in the month.
    ///
    /// # Errors
    /// * [`GridError::OutOfRange`]: when some cell can not be represented as [`Date`]
    pub fn build(month: YearMonth, today: Date) -> Result<Self, GridError> {
        let out_of_range = || GridError::OutOfRange(month);

        let first = month.first_day().ok_or_else(out_of_range)?;
        let days_back = first.weekday().num_days_from_sunday() as i64;
        let start = first.add_days(-days_back).ok_or_else(out_of_range)?;

        let days = (0..GRID_LEN as i64)
            .map(|i| {
                start.add_days(i).map(|date| CalendarDay {
                    date,
                    is_current_month: month.contains(date),
                    is_today: date == today,
                })
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(out_of_range)?;
        Ok(MonthGrid { month, days })
    }
}

/// Build the grid of `month` of `year`.
///
/// `month` out of `1..=12` is carried into the year, e.g. month 13 of 2024 is January of 2025.
/// This makes "next month" a plain increment.
///
/// ```
/// use hchrono::grid::build_month_grid;
/// use hchrono::timepoint::{Date, YearMonth};
///
/// let today = Date::from_ymd_opt(2024, 12, 31).unwrap();
/// let grid = build_month_grid(2024, 13, today).unwrap();
/// assert_eq!(grid.year_month(), YearMonth::new(2025, 1).unwrap());
/// ```
pub fn build_month_grid(year: i32, month: i32, today: Date) -> Result<MonthGrid, GridError> {
    let month = month as i64;
    let ym = YearMonth::normalized(year, month).ok_or(GridError::InvalidMonth { year, month })?;
    MonthGrid::build(ym, today)
}

//
// methods
//
impl MonthGrid {
    /// The displayed month.
    #[inline]
    pub fn year_month(&self) -> YearMonth {
        self.month
    }

    #[inline]
    pub fn as_slice(&self) -> &[CalendarDay] {
        &self.days
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDay> {
        self.days.iter()
    }

    /// Rows of the grid. Each row is a week from Sunday to Saturday.
    #[inline]
    pub fn weeks(&self) -> impl ExactSizeIterator<Item = &[CalendarDay]> + '_ {
        self.days.chunks_exact(DAYS_PER_WEEK)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&CalendarDay> {
        self.days.get(index)
    }

    #[inline]
    pub fn first(&self) -> &CalendarDay {
        &self.days[0]
    }

    #[inline]
    pub fn last(&self) -> &CalendarDay {
        &self.days[GRID_LEN - 1]
    }

    /// Index of the cell showing `date`, if the grid shows it.
    #[inline]
    pub fn position_of(&self, date: Date) -> Option<usize> {
        let offset = date.days_since(self.first().date);
        usize::try_from(offset).ok().filter(|i| *i < GRID_LEN)
    }

    /// Cells of the displayed month only.
    #[inline]
    pub fn current_month_days(&self) -> impl Iterator<Item = &CalendarDay> + '_ {
        self.days.iter().filter(|d| d.is_current_month)
    }

    #[inline]
    pub fn today(&self) -> Option<&CalendarDay> {
        self.days.iter().find(|d| d.is_today)
    }
}

impl<'a> IntoIterator for &'a MonthGrid {
    type Item = &'a CalendarDay;
    type IntoIter = std::slice::Iter<'a, CalendarDay>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
