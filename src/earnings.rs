use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use strum_macros::{Display, EnumString};

use crate::calendar::seconds_between;
use crate::error::EarningsError;

const SECONDS_PER_HOUR: f64 = 60.0 * 60.0;
const SECONDS_PER_DAY: f64 = SECONDS_PER_HOUR * 24.0;
/// Average Gregorian year, close enough to absorb leap days.
const DAYS_PER_YEAR: f64 = 365.24;

#[derive(Display, EnumString, Debug, PartialEq, Clone, Copy)]
#[strum(serialize_all = "lowercase")]
pub enum Unit {
    Hour,
    Week,
    Year,
}

impl Unit {
    pub fn seconds(&self) -> f64 {
        match self {
            Unit::Hour => SECONDS_PER_HOUR,
            Unit::Week => SECONDS_PER_DAY * 7.0,
            Unit::Year => SECONDS_PER_DAY * DAYS_PER_YEAR,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Rate {
    pub amount: f64,
    pub per: Unit,
}

impl Rate {
    pub fn new(amount: f64, per: Unit) -> Self {
        Self { amount, per }
    }

    pub fn per_second(&self) -> f64 {
        self.amount / self.per.seconds()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.amount, self.per)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Money {
    pub symbol: String,
    pub amount: Decimal,
}

impl Money {
    pub fn new(symbol: &str, amount: Decimal) -> Self {
        Self {
            symbol: symbol.to_string(),
            amount: amount.round_dp_with_strategy(
                2,
                RoundingStrategy::MidpointNearestEven,
            ),
        }
    }

    /// Rounds the exact binary value, so 1.015 (really 1.01499...) is 1.01.
    pub fn from_f64(symbol: &str, amount: f64) -> Result<Self, EarningsError> {
        Decimal::from_f64_retain(amount)
            .map(|amount| Self::new(symbol, amount))
            .ok_or(EarningsError::OutOfRange { amount })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{:.2}", self.symbol, self.amount)
    }
}

/// Money that would have been earned at `per_second` between `start` and
/// `now`. Negative when `start` is in the future.
pub fn unearned(
    per_second: f64,
    symbol: &str,
    start: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<Money, EarningsError> {
    Money::from_f64(symbol, seconds_between(start, now) * per_second)
}
