use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use chrono::NaiveDateTime;
use colored::Colorize;
use tracing::trace;

use crate::config::Config;
use crate::earnings::Money;
use crate::error::RunError;

pub const LABEL: &str = "  Cash not earned: ";

pub fn highlight(text: &str) -> String {
    text.red().bold().to_string()
}

pub fn format_line(money: &Money) -> String {
    format!("{}{}", LABEL, highlight(&money.to_string()))
}

/// Print the amount a single time.
pub fn once<W, N>(out: &mut W, config: &Config, now: N) -> Result<(), RunError>
where
    W: Write,
    N: Fn() -> NaiveDateTime,
{
    let money = config.unearned_at(now())?;
    writeln!(out, "{}", format_line(&money))?;
    Ok(())
}

/// Redraw the amount in place every `tick` until `stop` is set.
///
/// The delay is measured from one print to the next, so ticks drift.
pub fn continuous<W, N>(
    out: &mut W,
    config: &Config,
    now: N,
    stop: &AtomicBool,
    tick: Duration,
) -> Result<(), RunError>
where
    W: Write,
    N: Fn() -> NaiveDateTime,
{
    while !stop.load(Ordering::SeqCst) {
        let money = config.unearned_at(now())?;
        trace!(amount = %money.amount, "tick");
        write!(out, "{}\r", format_line(&money))?;
        out.flush()?;
        thread::sleep(tick);
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DayBoundaries;
    use crate::config::RefreshMode;
    use crate::earnings::{Rate, Unit};
    use chrono::NaiveDate;
    use const_format::formatcp;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    const RESET: &str = "\x1b[0m";
    const EXPECTED_PREFIX: &str = formatcp!("{}\x1b[", LABEL);

    fn config() -> Config {
        let start = NaiveDate::from_ymd_opt(2021, 4, 15).unwrap().start_of_day();
        Config::new(Rate::new(10.0, Unit::Hour), start, "£", RefreshMode::Once)
    }

    fn hour_later() -> NaiveDateTime {
        config().start + chrono::Duration::hours(1)
    }

    fn force_colour() {
        colored::control::set_override(true);
    }

    #[test]
    fn highlight_wraps_text() {
        force_colour();
        let text = highlight("£1.00");
        assert!(text.starts_with("\x1b["));
        assert!(text.contains("£1.00"));
        assert!(text.ends_with(RESET));
    }

    #[test]
    fn line_contains_amount() {
        force_colour();
        let line = format_line(&Money::new("£", dec!(10)));
        assert!(line.starts_with(EXPECTED_PREFIX));
        assert!(line.contains("£10.00"));
        assert!(line.ends_with(RESET));
    }

    #[test]
    fn once_prints_one_line() {
        let mut out: Vec<u8> = Vec::new();
        once(&mut out, &config(), hour_later).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.lines().count(), 1);
        assert!(printed.ends_with('\n'));
        assert!(!printed.contains('\r'));
        assert!(printed.contains("£10.00"));
    }

    #[test]
    fn continuous_stopped_before_start() {
        let mut out: Vec<u8> = Vec::new();
        let stop = AtomicBool::new(true);
        continuous(&mut out, &config(), hour_later, &stop, Duration::ZERO)
            .unwrap();
        assert_eq!(out, b"\n");
    }

    #[test]
    fn continuous_redraws_until_stopped() {
        let stop = Arc::new(AtomicBool::new(false));
        let stopper = {
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(50));
                stop.store(true, Ordering::SeqCst);
            })
        };

        let mut out: Vec<u8> = Vec::new();
        continuous(
            &mut out,
            &config(),
            hour_later,
            &stop,
            Duration::from_millis(5),
        )
        .unwrap();
        stopper.join().unwrap();

        let printed = String::from_utf8(out).unwrap();
        let redraws = printed.matches('\r').count();
        assert!(redraws >= 2, "only {} redraws", redraws);
        assert_eq!(printed.matches(LABEL).count(), redraws);
        assert!(printed.ends_with("\r\n"));
    }

    #[test]
    fn continuous_reports_out_of_range() {
        let start = NaiveDate::from_ymd_opt(2021, 4, 15).unwrap().start_of_day();
        let config =
            Config::new(Rate::new(1e300, Unit::Hour), start, "£", RefreshMode::Continuous);
        let stop = AtomicBool::new(false);
        let mut out: Vec<u8> = Vec::new();

        let result = continuous(&mut out, &config, hour_later, &stop, Duration::ZERO);
        assert!(matches!(result, Err(RunError::Earnings { .. })));
        assert!(out.is_empty());
    }
}
