use hchrono::{
    grid::{CalendarDay, GridError, MonthGrid},
    timepoint::{Date, YearMonth},
};

use crate::{Holiday, HolidayError, HolidaySet, Occurrences};

// -----------------------------------------------------------------------------
// PreviewConfig
// -----------------------------------------------------------------------------
/// Display options of a month view.
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
#[serde(default)]
pub struct PreviewConfig {
    /// Holidays listed in a cell before collapsing the rest into "+N more"
    pub max_per_cell: usize,
}

impl Default for PreviewConfig {
    #[inline]
    fn default() -> Self {
        PreviewConfig { max_per_cell: 3 }
    }
}

// -----------------------------------------------------------------------------
// Preview
// -----------------------------------------------------------------------------
/// Truncated list of the holidays of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview<'s, 'a> {
    pub shown: &'s [&'a Holiday],
    /// Number of holidays not in `shown`
    pub more: usize,
}

// -----------------------------------------------------------------------------
// DayCell
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell<'s, 'a> {
    pub day: &'s CalendarDay,
    pub holidays: &'s [&'a Holiday],
}

impl<'s, 'a> DayCell<'s, 'a> {
    /// First `limit` holidays of the cell and the count of the others.
    #[inline]
    pub fn preview(&self, limit: usize) -> Preview<'s, 'a> {
        let n = limit.min(self.holidays.len());
        Preview {
            shown: &self.holidays[..n],
            more: self.holidays.len() - n,
        }
    }
}

// -----------------------------------------------------------------------------
// HolidayMonth
// -----------------------------------------------------------------------------
/// A calendar month with the holidays of every cell.
///
/// Composes [`MonthGrid`] and [`HolidaySet`]: the holiday list is compiled once
/// and every cell of the grid is resolved against it.
/// Holidays which can not be resolved are logged here and kept in
/// [`HolidayMonth::rejected`]; they never abort the month.
///
/// ```
/// use hchrono::timepoint::{Date, YearMonth};
/// use hholiday::{month::HolidayMonth, Holiday, HolidayType};
///
/// let ymd = |y, m, d| Date::from_ymd_opt(y, m, d).unwrap();
/// let holidays = vec![
///     Holiday::new("1", "Festival", HolidayType::Cultural, ymd(2024, 12, 30), ymd(2025, 1, 2))
///         .with_recurring(true),
/// ];
///
/// let dec = YearMonth::new(2026, 12).unwrap();
/// let view = HolidayMonth::build(dec, ymd(2026, 12, 1), &holidays).unwrap();
///
/// assert_eq!(view.holidays_on(ymd(2026, 12, 31)).len(), 1);
/// // trailing cells of January are resolved too
/// assert_eq!(view.holidays_on(ymd(2027, 1, 2)).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct HolidayMonth<'a> {
    grid: MonthGrid,
    cells: Vec<Occurrences<'a>>,
    rejected: Vec<HolidayError>,
}

impl<'a> HolidayMonth<'a> {
    pub fn build(
        month: YearMonth,
        today: Date,
        holidays: &'a [Holiday],
    ) -> Result<Self, GridError> {
        let grid = MonthGrid::build(month, today)?;
        let set = HolidaySet::compile(holidays);
        for e in set.rejected() {
            log::warn!("Holiday is left out of the calendar: {e}");
        }

        let cells: Vec<_> = grid.iter().map(|d| set.occurrences_on(d.date)).collect();
        log::debug!(
            "Resolved {} holidays for {month}: {} hits in {} cells, {} rejected",
            set.len(),
            cells.iter().map(|c| c.len()).sum::<usize>(),
            cells.len(),
            set.rejected().len(),
        );
        Ok(HolidayMonth {
            grid,
            cells,
            rejected: set.rejected().to_vec(),
        })
    }

    #[inline]
    pub fn year_month(&self) -> YearMonth {
        self.grid.year_month()
    }

    #[inline]
    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    #[inline]
    pub fn rejected(&self) -> &[HolidayError] {
        &self.rejected
    }

    #[inline]
    pub fn cell(&self, index: usize) -> Option<DayCell<'_, 'a>> {
        let day = self.grid.get(index)?;
        Some(DayCell {
            day,
            holidays: &self.cells[index],
        })
    }

    pub fn cells(&self) -> impl Iterator<Item = DayCell<'_, 'a>> + '_ {
        self.grid
            .iter()
            .zip(self.cells.iter())
            .map(|(day, holidays)| DayCell {
                day,
                holidays: holidays.as_slice(),
            })
    }

    /// Holidays of `date`. Empty if the grid does not show `date`.
    #[inline]
    pub fn holidays_on(&self, date: Date) -> &[&'a Holiday] {
        match self.grid.position_of(date) {
            Some(i) => self.cells[i].as_slice(),
            None => &[],
        }
    }
}
