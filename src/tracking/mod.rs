use enum_dispatch::enum_dispatch;
use rust_decimal::Decimal;
use thiserror::Error;

pub mod ledger;
pub mod record;
pub mod trackers;

use record::Record;
use trackers::{CalorieTracker, CashTracker, Tracker};

#[derive(Debug, PartialEq, Error)]
pub enum TrackerError {
    #[error("invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Aggregation surface shared by every tracker variant.
#[enum_dispatch]
pub trait BudgetLedger {
    fn add(&mut self, record: Record);

    fn limit(&self) -> Decimal;
    fn today_total(&self) -> Decimal;
    fn week_total(&self) -> Decimal;
}
