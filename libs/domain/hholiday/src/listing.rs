use hchrono::timepoint::Date;
use itertools::Itertools;

use crate::{Holiday, HolidayType};

/// Number of holidays in the "upcoming" panel.
pub const UPCOMING_LIMIT: usize = 3;

// -----------------------------------------------------------------------------
// HolidayFilter
// -----------------------------------------------------------------------------
/// Criteria of the holiday list.
///
/// All criteria are optional and combined with AND.
/// - `search`: case-insensitive substring of the name or the description. Blank means no criterion.
/// - `kind`: exact [`HolidayType`]
/// - `year`: year of `start_date`
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
)]
#[serde(default)]
pub struct HolidayFilter {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<HolidayType>,
    pub year: Option<i32>,
}

impl HolidayFilter {
    #[inline]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[inline]
    pub fn with_kind(mut self, kind: HolidayType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[inline]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn matches(&self, holiday: &Holiday) -> bool {
        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        if let Some(term) = search {
            let hit = |s: &str| s.to_lowercase().contains(&term);
            if !hit(&holiday.name) && !holiday.description.as_deref().is_some_and(hit) {
                return false;
            }
        }
        if self.kind.is_some_and(|k| k != holiday.kind) {
            return false;
        }
        if let Some(year) = self.year {
            return start_date(holiday).is_some_and(|d| d.year() == year);
        }
        true
    }

    /// Matching holidays sorted by start date.
    ///
    /// Sorting is stable and holidays with an unparsable start date come last.
    pub fn apply<'a>(&self, holidays: &'a [Holiday]) -> Vec<&'a Holiday> {
        holidays
            .iter()
            .filter(|h| self.matches(h))
            .sorted_by_key(|h| sort_key(h))
            .collect()
    }
}

#[inline]
fn start_date(holiday: &Holiday) -> Option<Date> {
    holiday.start_date.parse().ok()
}

#[inline]
fn sort_key(holiday: &Holiday) -> (bool, Option<Date>) {
    let start = start_date(holiday);
    (start.is_none(), start)
}

// -----------------------------------------------------------------------------
// functions
// -----------------------------------------------------------------------------
/// Holidays starting on or after `today`, sorted by start date, at most `limit`.
pub fn upcoming(holidays: &[Holiday], today: Date, limit: usize) -> Vec<&Holiday> {
    holidays
        .iter()
        .filter(|h| start_date(h).is_some_and(|d| today <= d))
        .sorted_by_key(|h| start_date(h))
        .take(limit)
        .collect()
}

/// Distinct years of the start dates, ascending.
pub fn available_years(holidays: &[Holiday]) -> Vec<i32> {
    holidays
        .iter()
        .filter_map(start_date)
        .map(|d| d.year())
        .sorted()
        .dedup()
        .collect()
}

// -----------------------------------------------------------------------------
// HolidayStats
// -----------------------------------------------------------------------------
/// Summary figures of the holiday page.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
)]
pub struct HolidayStats {
    /// Holidays starting in the year of `today`
    pub total: usize,
    /// Size of the upcoming panel
    pub upcoming: usize,
    pub public: usize,
    pub school: usize,
}

impl HolidayStats {
    pub fn of(holidays: &[Holiday], today: Date) -> Self {
        let this_year = holidays
            .iter()
            .filter(|h| start_date(h).is_some_and(|d| d.year() == today.year()))
            .collect::<Vec<_>>();
        let count = |kind: HolidayType| this_year.iter().filter(|h| h.kind == kind).count();

        HolidayStats {
            total: this_year.len(),
            upcoming: upcoming(holidays, today, UPCOMING_LIMIT).len(),
            public: count(HolidayType::Public),
            school: count(HolidayType::School),
        }
    }
}
