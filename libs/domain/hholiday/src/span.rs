use std::fmt::Display;

use hchrono::timepoint::Date;

use crate::Recurrence;

const SHORT_DATE: &str = "%b %-d, %Y";

// -----------------------------------------------------------------------------
// HolidaySpan
// -----------------------------------------------------------------------------
/// Closed range of dates `[start, end]` of a holiday. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HolidaySpan {
    start: Date,
    end: Date,
}

impl Display for HolidaySpan {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

//
// ctor
//
impl HolidaySpan {
    /// Returns [None] if `end < start`.
    #[inline]
    pub fn new(start: Date, end: Date) -> Option<Self> {
        (start <= end).then_some(HolidaySpan { start, end })
    }

    #[inline]
    pub fn single(date: Date) -> Self {
        HolidaySpan {
            start: date,
            end: date,
        }
    }
}

//
// methods
//
impl HolidaySpan {
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Date {
        self.end
    }

    #[inline]
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Literal membership, `start <= date <= end`.
    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the span, both ends included.
    #[inline]
    pub fn num_days(&self) -> i64 {
        self.end.days_since(self.start) + 1
    }

    /// Year-independent pattern of this span.
    #[inline]
    pub fn recurrence(&self) -> Recurrence {
        Recurrence::of(self)
    }

    /// Human readable range such as `Jan 1, 2024` or `Dec 30, 2024 - Jan 2, 2025`.
    pub fn format_range(&self) -> String {
        if self.is_single_day() {
            self.start.format(SHORT_DATE).to_string()
        } else {
            format!(
                "{} - {}",
                self.start.format(SHORT_DATE),
                self.end.format(SHORT_DATE)
            )
        }
    }
}
