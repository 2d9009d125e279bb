use chrono::{Local, NaiveDate};
use getset::{CopyGetters, Getters};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TrackerError;

/// Textual date format accepted by [`Record::dated`], e.g. `"01.03.2024"`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A single dated entry. Immutable once constructed.
///
/// Amounts may be negative to model refunds or corrections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct Record {
    #[getset(get_copy = "pub")]
    amount: Decimal,
    #[getset(get = "pub")]
    comment: String,
    #[getset(get_copy = "pub")]
    date: NaiveDate,
}

impl Record {
    /// Creates a record dated with the current local date.
    pub fn new(amount: Decimal, comment: impl Into<String>) -> Record {
        Record::on(amount, comment, Local::now().date_naive())
    }

    pub fn on(amount: Decimal, comment: impl Into<String>, date: NaiveDate) -> Record {
        Record {
            amount,
            comment: comment.into(),
            date,
        }
    }

    /// Creates a record from date text in [`DATE_FORMAT`].
    pub fn dated(
        amount: Decimal,
        comment: impl Into<String>,
        date: &str,
    ) -> Result<Record, TrackerError> {
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)?;
        Ok(Record::on(amount, comment, date))
    }
}
