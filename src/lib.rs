//! In-memory daily budget tracking.
//!
//! A [`tracking::Ledger`] stores dated records and answers per-day and
//! trailing-week sums. Two views sit on top of it: a calorie tracker and a
//! cash tracker with fixed-rate currency conversion. Both render
//! human-readable status messages for the current day.

pub mod tracking;

pub use tracking::ledger::Ledger;
pub use tracking::record::Record;
pub use tracking::trackers::{CalorieTracker, CashTracker, Currency, Tracker};
pub use tracking::{BudgetLedger, TrackerError};
