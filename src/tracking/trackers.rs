use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use enum_dispatch::enum_dispatch;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::ledger::Ledger;
use super::record::Record;
use super::{BudgetLedger, TrackerError};

/// Fixed conversion table. Rates are expressed in the base unit (RUB) per
/// one unit of the currency and never change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Rub,
    Usd,
    Eur,
}

impl Currency {
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    pub fn rate(&self) -> Decimal {
        match self {
            Currency::Rub => dec!(1),
            Currency::Usd => dec!(75.20),
            Currency::Eur => dec!(88.90),
        }
    }
}

impl FromStr for Currency {
    type Err = TrackerError;

    fn from_str(code: &str) -> Result<Currency, TrackerError> {
        match code.to_ascii_lowercase().as_str() {
            "rub" => Ok(Currency::Rub),
            "usd" => Ok(Currency::Usd),
            "eur" => Ok(Currency::Eur),
            _ => Err(TrackerError::UnknownCurrency(code.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[enum_dispatch(BudgetLedger)]
pub enum Tracker {
    CalorieTracker,
    CashTracker,
}

pub struct CalorieTracker {
    ledger: Ledger,
}

impl CalorieTracker {
    pub fn new(limit: Decimal) -> CalorieTracker {
        CalorieTracker {
            ledger: Ledger::new(limit),
        }
    }

    /// Status message for the current local date.
    pub fn remaining(&self) -> String {
        self.remaining_on(Local::now().date_naive())
    }

    /// Status message for `date`. A positive balance names the amount still
    /// allowed; zero and overshoot collapse to the same stop message.
    pub fn remaining_on(&self, date: NaiveDate) -> String {
        let remaining = self.ledger.limit() - self.ledger.total_on(date);
        if remaining > Decimal::ZERO {
            format!("You can eat something else today, but no more than {remaining} kcal in total")
        } else {
            "Stop eating!".to_string()
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

impl BudgetLedger for CalorieTracker {
    fn add(&mut self, record: Record) {
        self.ledger.add(record);
    }

    fn limit(&self) -> Decimal {
        self.ledger.limit()
    }

    fn today_total(&self) -> Decimal {
        self.ledger.today_total()
    }

    fn week_total(&self) -> Decimal {
        self.ledger.week_total()
    }
}

pub struct CashTracker {
    ledger: Ledger,
}

impl CashTracker {
    pub fn new(limit: Decimal) -> CashTracker {
        CashTracker {
            ledger: Ledger::new(limit),
        }
    }

    /// Status message for the current local date, in the currency named by
    /// `code` (`rub`, `usd` or `eur`, case-insensitive).
    pub fn remaining(&self, code: &str) -> Result<String, TrackerError> {
        self.remaining_on(code, Local::now().date_naive())
    }

    /// Status message for `date`.
    ///
    /// The balance is computed in the base unit first; an exactly-zero
    /// balance short-circuits before conversion. Otherwise the value is
    /// divided by the currency rate and rounded to 2 fractional digits,
    /// half-to-even.
    pub fn remaining_on(&self, code: &str, date: NaiveDate) -> Result<String, TrackerError> {
        let currency = Currency::from_str(code)?;

        let remaining = self.ledger.limit() - self.ledger.total_on(date);
        if remaining.is_zero() {
            return Ok("No money left, hang in there".to_string());
        }

        let converted = (remaining / currency.rate()).round_dp(2).normalize();
        if converted > Decimal::ZERO {
            Ok(format!("You have {converted} {currency} left for today"))
        } else {
            Ok(format!(
                "No money left, hang in there: your debt is {} {currency}",
                converted.abs()
            ))
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

impl BudgetLedger for CashTracker {
    fn add(&mut self, record: Record) {
        self.ledger.add(record);
    }

    fn limit(&self) -> Decimal {
        self.ledger.limit()
    }

    fn today_total(&self) -> Decimal {
        self.ledger.today_total()
    }

    fn week_total(&self) -> Decimal {
        self.ledger.week_total()
    }
}
