use hchrono::timepoint::Date;

use crate::{DateField, HolidayError, HolidaySet, HolidaySpan};

// -----------------------------------------------------------------------------
// HolidayType
// -----------------------------------------------------------------------------
/// Category of a holiday. Only used for display.
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
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HolidayType {
    Public,
    School,
    Religious,
    Cultural,
}

impl HolidayType {
    /// Human readable label.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            HolidayType::Public => "Public Holiday",
            HolidayType::School => "School Holiday",
            HolidayType::Religious => "Religious Holiday",
            HolidayType::Cultural => "Cultural Event",
        }
    }

    /// Color name used to paint the holiday.
    #[inline]
    pub fn color(&self) -> &'static str {
        match self {
            HolidayType::Public => "blue",
            HolidayType::School => "green",
            HolidayType::Religious => "purple",
            HolidayType::Cultural => "orange",
        }
    }
}

// -----------------------------------------------------------------------------
// Holiday
// -----------------------------------------------------------------------------
/// A named observance as delivered by the holiday API.
///
/// Dates are kept as received (`YYYY-MM-DD` strings).
/// They are parsed as calendar dates by [`Holiday::span`], never as timestamps,
/// and a record with malformed dates is reported instead of failing the whole list.
///
/// ```
/// use hholiday::Holiday;
///
/// let json = r#"{
///     "id": "h1",
///     "name": "New Year's Day",
///     "start_date": "2024-01-01",
///     "end_date": "2024-01-01",
///     "type": "public",
///     "recurring": true
/// }"#;
/// let holiday: Holiday = serde_json::from_str(json).unwrap();
/// assert!(holiday.span().unwrap().is_single_day());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, schemars::JsonSchema,
)]
pub struct Holiday {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`, on or after `start_date`
    pub end_date: String,
    #[serde(rename = "type")]
    pub kind: HolidayType,
    /// Month/day pattern repeats every year
    #[serde(default)]
    pub recurring: bool,
}

//
// ctor
//
impl Holiday {
    /// Create a holiday on `[start, end]`. Not recurring, without description.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: HolidayType,
        start: Date,
        end: Date,
    ) -> Self {
        Holiday {
            id: id.into(),
            name: name.into(),
            description: None,
            start_date: start.to_string(),
            end_date: end.to_string(),
            kind,
            recurring: false,
        }
    }

    #[inline]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[inline]
    pub fn with_recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }
}

//
// methods
//
impl Holiday {
    /// Parse the literal dates of the holiday.
    ///
    /// # Errors
    /// * [`HolidayError::MalformedHolidayDate`]: either date is not a `YYYY-MM-DD` calendar date
    /// * [`HolidayError::InvalidHolidayRange`]: `end_date` is before `start_date`
    pub fn span(&self) -> Result<HolidaySpan, HolidayError> {
        let parse = |field: DateField, value: &str| {
            value
                .parse::<Date>()
                .map_err(|source| HolidayError::MalformedHolidayDate {
                    id: self.id.clone(),
                    field,
                    source,
                })
        };
        let start = parse(DateField::Start, &self.start_date)?;
        let end = parse(DateField::End, &self.end_date)?;
        HolidaySpan::new(start, end).ok_or_else(|| HolidayError::InvalidHolidayRange {
            id: self.id.clone(),
            start,
            end,
        })
    }

    /// Check the record as the holiday API does before storing it.
    ///
    /// On top of [`Holiday::span`], the name must not be blank.
    pub fn validate(&self) -> Result<HolidaySpan, HolidayError> {
        if self.name.trim().is_empty() {
            return Err(HolidayError::EmptyName {
                id: self.id.clone(),
            });
        }
        self.span()
    }

    /// Check if the holiday occurs on `date`, literally or by recurrence.
    ///
    /// Same rule as [`crate::resolve`] applied to this holiday alone.
    pub fn occurs_on(&self, date: Date) -> Result<bool, HolidayError> {
        let set = HolidaySet::compile(std::iter::once(self));
        if let Some(e) = set.rejected().first() {
            return Err(e.clone());
        }
        Ok(!set.occurrences_on(date).is_empty())
    }
}
