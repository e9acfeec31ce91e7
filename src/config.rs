use chrono::NaiveDateTime;

use crate::calendar::{parse_iso_date, DayBoundaries};
use crate::cli::Opts;
use crate::earnings::{self, Money, Rate, Unit};
use crate::error::{ConfigError, EarningsError};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RefreshMode {
    Once,
    Continuous,
}

/// Everything needed to display the unearned amount, fixed for the run.
#[derive(Debug, PartialEq, Clone)]
pub struct Config {
    pub rate: Rate,
    pub earnings_per_second: f64,
    pub start: NaiveDateTime,
    pub currency_symbol: String,
    pub refresh: RefreshMode,
}

impl Config {
    pub fn new(
        rate: Rate,
        start: NaiveDateTime,
        currency_symbol: &str,
        refresh: RefreshMode,
    ) -> Self {
        Self {
            rate,
            earnings_per_second: rate.per_second(),
            start,
            currency_symbol: currency_symbol.to_string(),
            refresh,
        }
    }

    pub fn from_opts(opts: &Opts) -> Result<Self, ConfigError> {
        let rate = rate_from_opts(opts)?;
        let start = parse_iso_date(&opts.from)?.start_of_day();
        let refresh = if opts.not_continuous {
            RefreshMode::Once
        } else {
            RefreshMode::Continuous
        };
        Ok(Self::new(rate, start, &opts.currency_symbol, refresh))
    }

    pub fn unearned_at(&self, now: NaiveDateTime) -> Result<Money, EarningsError> {
        earnings::unearned(
            self.earnings_per_second,
            &self.currency_symbol,
            self.start,
            now,
        )
    }
}

fn rate_from_opts(opts: &Opts) -> Result<Rate, ConfigError> {
    let (flag, amount, per) = match (opts.wage, opts.salary, opts.weekly_rate) {
        (Some(amount), None, None) => ("wage", amount, Unit::Hour),
        (None, Some(amount), None) => ("salary", amount, Unit::Year),
        (None, None, Some(amount)) => ("weekly-rate", amount, Unit::Week),
        _ => return Err(ConfigError::MissingRate),
    };

    if !amount.is_finite() {
        return Err(ConfigError::NotFinite { flag, value: amount });
    }
    if amount < 0.0 {
        return Err(ConfigError::NegativeRate { flag, value: amount });
    }
    Ok(Rate::new(amount, per))
}
