use hchrono::timepoint::{Date, ParseDateError};

// -----------------------------------------------------------------------------
// DateField
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum DateField {
    #[strum(serialize = "start_date")]
    Start,
    #[strum(serialize = "end_date")]
    End,
}

// -----------------------------------------------------------------------------
// HolidayError
// -----------------------------------------------------------------------------
/// A holiday record which can not take part in resolution.
///
/// None of these is fatal. The record is left out and the rest of the list is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum HolidayError {
    #[error("Holiday '{id}' has a malformed {field}: {source}")]
    MalformedHolidayDate {
        id: String,
        field: DateField,
        #[source]
        source: ParseDateError,
    },
    #[error("Holiday '{id}' ends before it starts: start_date={start}, end_date={end}")]
    InvalidHolidayRange { id: String, start: Date, end: Date },
    #[error("Holiday '{id}' has an empty name")]
    EmptyName { id: String },
}

impl HolidayError {
    /// Id of the offending holiday.
    #[inline]
    pub fn holiday_id(&self) -> &str {
        match self {
            HolidayError::MalformedHolidayDate { id, .. }
            | HolidayError::InvalidHolidayRange { id, .. }
            | HolidayError::EmptyName { id } => id,
        }
    }
}
