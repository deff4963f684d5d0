use crate::{Holiday, HolidayType};

// -----------------------------------------------------------------------------
// HolidaySrc
// StoredHolidaySrc
// -----------------------------------------------------------------------------
/// Source of the holidays of an institution.
pub trait HolidaySrc {
    fn list_holidays(&self, institution_id: &str) -> anyhow::Result<Vec<Holiday>>;
}

/// Source returning raw storage rows.
///
/// Every such source is a [`HolidaySrc`], rows are converted by [`From<StoredHoliday>`].
pub trait StoredHolidaySrc {
    fn list_stored_holidays(&self, institution_id: &str) -> anyhow::Result<Vec<StoredHoliday>>;
}

impl<S: StoredHolidaySrc> HolidaySrc for S {
    fn list_holidays(&self, institution_id: &str) -> anyhow::Result<Vec<Holiday>> {
        let rows = self.list_stored_holidays(institution_id)?;
        Ok(rows.into_iter().map(Holiday::from).collect())
    }
}

// -----------------------------------------------------------------------------
// StoredHolidayType
// -----------------------------------------------------------------------------
/// Holiday category as kept in storage. Religious and cultural share `custom`.
///
/// Any other stored value reads as [`StoredHolidayType::Unknown`] and is shown as public.
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
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StoredHolidayType {
    Public,
    School,
    Custom,
    #[serde(other)]
    Unknown,
}

impl From<StoredHolidayType> for HolidayType {
    #[inline]
    fn from(t: StoredHolidayType) -> Self {
        match t {
            StoredHolidayType::Public | StoredHolidayType::Unknown => HolidayType::Public,
            StoredHolidayType::School => HolidayType::School,
            StoredHolidayType::Custom => HolidayType::Cultural,
        }
    }
}

impl From<HolidayType> for StoredHolidayType {
    #[inline]
    fn from(t: HolidayType) -> Self {
        match t {
            HolidayType::Public => StoredHolidayType::Public,
            HolidayType::School => StoredHolidayType::School,
            HolidayType::Religious | HolidayType::Cultural => StoredHolidayType::Custom,
        }
    }
}

// -----------------------------------------------------------------------------
// StoredHoliday
// -----------------------------------------------------------------------------
/// A row of the holiday table.
///
/// Single-day holidays have no `end_date` and the type is coarser than [`HolidayType`].
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, schemars::JsonSchema,
)]
pub struct StoredHoliday {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub holiday_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub holiday_type: StoredHolidayType,
    #[serde(default)]
    pub is_recurring: Option<bool>,
    #[serde(default)]
    pub recurrence_pattern: Option<String>,
}

impl From<StoredHoliday> for Holiday {
    fn from(row: StoredHoliday) -> Self {
        let end_date = row.end_date.unwrap_or_else(|| row.holiday_date.clone());
        Holiday {
            id: row.id,
            name: row.name,
            description: row.description,
            start_date: row.holiday_date,
            end_date,
            kind: row.holiday_type.into(),
            recurring: row.is_recurring.unwrap_or(false),
        }
    }
}

impl StoredHoliday {
    /// Row to store for `holiday`.
    ///
    /// Name and description are trimmed, a blank description is dropped and
    /// the end date is only kept when it differs from the start date.
    pub fn from_holiday(holiday: &Holiday) -> Self {
        let description = holiday
            .description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        let end_date = (holiday.end_date != holiday.start_date).then(|| holiday.end_date.clone());
        StoredHoliday {
            id: holiday.id.clone(),
            name: holiday.name.trim().to_owned(),
            description,
            holiday_date: holiday.start_date.clone(),
            end_date,
            holiday_type: holiday.kind.into(),
            is_recurring: Some(holiday.recurring),
            recurrence_pattern: holiday.recurring.then(|| "yearly".to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use hchrono::timepoint::Date;
    use maplit::hashmap;
    use rstest::rstest;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    mockall::mock! {
        Src {}

        impl StoredHolidaySrc for Src {
            fn list_stored_holidays(&self, institution_id: &str) -> anyhow::Result<Vec<StoredHoliday>>;
        }
    }

    fn row(id: &str, start: &str, end: Option<&str>, t: StoredHolidayType) -> StoredHoliday {
        StoredHoliday {
            id: id.to_owned(),
            name: format!("Holiday {id}"),
            description: None,
            holiday_date: start.to_owned(),
            end_date: end.map(str::to_owned),
            holiday_type: t,
            is_recurring: None,
            recurrence_pattern: None,
        }
    }

    fn get_rows(institution_id: &str) -> anyhow::Result<Vec<StoredHoliday>> {
        let data = hashmap! {
            "inst-a" => vec![
                row("1", "2024-01-01", None, StoredHolidayType::Public),
                row("2", "2024-12-23", Some("2025-01-03"), StoredHolidayType::School),
            ],
            "inst-b" => vec![
                row("3", "2024-10-31", None, StoredHolidayType::Custom),
            ],
        };
        data.get(institution_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("institution not found"))
    }

    #[rstest]
    #[case("inst-a", Ok(vec![
        Holiday::new("1", "Holiday 1", HolidayType::Public, ymd(2024, 1, 1), ymd(2024, 1, 1)),
        Holiday::new("2", "Holiday 2", HolidayType::School, ymd(2024, 12, 23), ymd(2025, 1, 3)),
    ]))]
    #[case("inst-b", Ok(vec![
        Holiday::new("3", "Holiday 3", HolidayType::Cultural, ymd(2024, 10, 31), ymd(2024, 10, 31)),
    ]))]
    #[case("inst-x", Err("institution not found".to_owned()))]
    fn test_list_holidays(#[case] inst: &str, #[case] expected: Result<Vec<Holiday>, String>) {
        let mut mock = MockSrc::new();
        mock.expect_list_stored_holidays()
            .times(1)
            .returning(get_rows);

        let res = mock.list_holidays(inst);

        assert_eq!(res.map_err(|e| e.to_string()), expected);
        mock.checkpoint();
    }

    #[rstest]
    #[case(StoredHolidayType::Unknown, HolidayType::Public)]
    #[case(StoredHolidayType::Public, HolidayType::Public)]
    #[case(StoredHolidayType::School, HolidayType::School)]
    #[case(StoredHolidayType::Custom, HolidayType::Cultural)]
    fn test_type_from_stored(#[case] stored: StoredHolidayType, #[case] expected: HolidayType) {
        assert_eq!(HolidayType::from(stored), expected);
    }

    #[rstest]
    #[case(HolidayType::Public, StoredHolidayType::Public)]
    #[case(HolidayType::School, StoredHolidayType::School)]
    #[case(HolidayType::Religious, StoredHolidayType::Custom)]
    #[case(HolidayType::Cultural, StoredHolidayType::Custom)]
    fn test_type_to_stored(#[case] t: HolidayType, #[case] expected: StoredHolidayType) {
        assert_eq!(StoredHolidayType::from(t), expected);
    }

    #[test]
    fn test_from_row_recurring() {
        let mut r = row("1", "2024-01-01", None, StoredHolidayType::Public);
        r.is_recurring = Some(true);

        let holiday = Holiday::from(r);

        assert!(holiday.recurring);
        assert_eq!(holiday.end_date, "2024-01-01");
    }

    #[test]
    fn test_from_holiday() {
        let holiday = Holiday::new(
            "9",
            "  Festival ",
            HolidayType::Religious,
            ymd(2024, 12, 30),
            ymd(2025, 1, 2),
        )
        .with_description("   ")
        .with_recurring(true);

        let row = StoredHoliday::from_holiday(&holiday);

        assert_eq!(
            row,
            StoredHoliday {
                id: "9".to_owned(),
                name: "Festival".to_owned(),
                description: None,
                holiday_date: "2024-12-30".to_owned(),
                end_date: Some("2025-01-02".to_owned()),
                holiday_type: StoredHolidayType::Custom,
                is_recurring: Some(true),
                recurrence_pattern: Some("yearly".to_owned()),
            }
        );
    }

    #[test]
    fn test_from_holiday_single_day() {
        let holiday = Holiday::new(
            "1",
            "Sports Day",
            HolidayType::School,
            ymd(2024, 5, 10),
            ymd(2024, 5, 10),
        )
        .with_description(" Field events ");

        let row = StoredHoliday::from_holiday(&holiday);

        assert_eq!(row.end_date, None);
        assert_eq!(row.description.as_deref(), Some("Field events"));
        assert_eq!(row.recurrence_pattern, None);
        assert_eq!(Holiday::from(row).end_date, "2024-05-10");
    }

    #[test]
    fn test_deserialize_row() {
        let json = serde_json::json!({
            "id": "1",
            "name": "Founding Day",
            "holiday_date": "2024-03-01",
            "end_date": null,
            "holiday_type": "custom",
            "is_recurring": true,
            "is_paid": true
        });

        let row: StoredHoliday = serde_json::from_value(json).unwrap();

        assert_eq!(row.holiday_type, StoredHolidayType::Custom);
        assert_eq!(row.end_date, None);
        assert_eq!(row.is_recurring, Some(true));
    }

    #[rstest]
    #[case("national")]
    #[case("")]
    fn test_deserialize_row_unknown_type(#[case] holiday_type: &str) {
        let json = serde_json::json!({
            "id": "7",
            "name": "Independence Day",
            "holiday_date": "2024-07-04",
            "holiday_type": holiday_type,
        });

        let row: StoredHoliday = serde_json::from_value(json).unwrap();
        let holiday = Holiday::from(row);

        assert_eq!(holiday.kind, HolidayType::Public);
        assert_eq!(holiday.end_date, "2024-07-04");
        assert!(!holiday.recurring);
    }
}
