use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Date from needs to be in ISO-8601 format (YYYY-MM-DD), found: '{input}'")]
    InvalidDate { input: String },

    #[error("Earning rate for --{flag} needs to be a finite number, found: {value}")]
    NotFinite { flag: &'static str, value: f64 },

    #[error("Earning rate for --{flag} can't be negative, found: {value}")]
    NegativeRate { flag: &'static str, value: f64 },

    #[error("Exactly one of --wage, --salary or --weekly-rate is required")]
    MissingRate,
}

#[derive(Debug, Error, PartialEq)]
pub enum EarningsError {
    #[error("Unearned amount is too large to display: {amount}")]
    OutOfRange { amount: f64 },
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("IO Error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("{source}")]
    Earnings {
        #[from]
        source: EarningsError,
    },

    #[error("Unable to handle <C-c>: {source}")]
    Interrupt {
        #[from]
        source: ctrlc::Error,
    },
}
