use std::collections::HashMap;

use chrono::{Days, Local, NaiveDate};
use log::debug;
use rust_decimal::Decimal;

use super::record::Record;

/// Collection of dated records plus aggregate queries against a fixed limit.
///
/// Grows monotonically; records are never removed. A per-day total map is
/// kept alongside the record list so date-window queries stay cheap.
pub struct Ledger {
    limit: Decimal,
    records: Vec<Record>,
    daily_totals: HashMap<NaiveDate, Decimal>,
}

impl Ledger {
    pub fn new(limit: Decimal) -> Ledger {
        Ledger {
            limit,
            records: Vec::new(),
            daily_totals: HashMap::new(),
        }
    }

    pub fn add(&mut self, record: Record) {
        debug!(
            "recording {} ({}) on {}",
            record.amount(),
            record.comment(),
            record.date()
        );

        *self.daily_totals.entry(record.date()).or_insert(Decimal::ZERO) += record.amount();
        self.records.push(record);
    }

    /// Sum of amounts dated exactly `date`; zero if there are none.
    pub fn total_on(&self, date: NaiveDate) -> Decimal {
        self.daily_totals
            .get(&date)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn today_total(&self) -> Decimal {
        self.total_on(Local::now().date_naive())
    }

    /// Sum of amounts dated within `[end - 6 days, end]`, inclusive at both
    /// ends, so the window always spans exactly seven calendar days.
    pub fn week_total_ending(&self, end: NaiveDate) -> Decimal {
        let start = end - Days::new(6);
        self.daily_totals
            .iter()
            .filter(|(date, _)| (start..=end).contains(*date))
            .map(|(_, total)| *total)
            .sum()
    }

    pub fn week_total(&self) -> Decimal {
        self.week_total_ending(Local::now().date_naive())
    }

    pub fn limit(&self) -> Decimal {
        self.limit
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
