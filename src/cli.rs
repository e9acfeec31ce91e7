use clap::{ArgAction, ArgGroup, Parser};

/* Argument Structure
 *
 * (--wage <f64> | --salary <f64> | --weekly-rate <f64>)
 * --from <YYYY-MM-DD>
 * [--currency-symbol <symbol>]
 * [--not-continuous]
 * [-v...]
 */

/// Show how much money you have not earned since a job would have started
#[derive(Parser, Debug)]
#[command(name = "unearned", version, allow_negative_numbers = true)]
#[command(group(
    ArgGroup::new("rate")
        .required(true)
        .multiple(false)
        .args(["wage", "salary", "weekly_rate"])
))]
pub struct Opts {
    /// Hourly rate of pay
    #[arg(short, long, value_name = "WAGE")]
    pub wage: Option<f64>,

    /// Annual take home pay
    #[arg(short, long, value_name = "SALARY")]
    pub salary: Option<f64>,

    /// Weekly rate of pay
    #[arg(short = 'r', long, value_name = "WEEKLY_RATE")]
    pub weekly_rate: Option<f64>,

    /// Date the job would have started, in ISO-8601 format: YYYY-MM-DD
    #[arg(short, long, value_name = "DATE")]
    pub from: String,

    /// Symbol used for currency
    #[arg(short, long, default_value = "£", value_name = "SYMBOL")]
    pub currency_symbol: String,

    /// Only show the amount once, otherwise it is recalculated once a
    /// second until <C-c> is pressed
    #[arg(short, long)]
    pub not_continuous: bool,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
