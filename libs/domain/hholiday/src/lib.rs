#[cfg(test)]
use rstest_reuse;

pub mod listing;
pub mod month;
pub mod store;

mod error;
mod holiday;
mod recurrence;
mod resolve;
mod span;

pub use error::{DateField, HolidayError};
pub use holiday::{Holiday, HolidayType};
pub use recurrence::Recurrence;
pub use resolve::{resolve, HolidaySet, Occurrences, Resolution};
pub use span::HolidaySpan;
