/*
 * Display the money not earned since a job would have started
 *
 * - Pay rate given as hourly wage, weekly rate or annual salary
 * - Normalised to earnings per second:
 *     hour = 3600s, week = 604800s, year = 365.24 days
 * - Elapsed seconds since local midnight of the start date times
 *   earnings per second is the unearned amount
 * - Printed once, or redrawn in place every second until <C-c>
 *
 * Parse or validation errors print usage and exit with status 1.
 */

mod calendar;
mod cli;
mod config;
mod display;
mod earnings;
mod error;
mod run;

use std::io;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::level_filters::LevelFilter;

use crate::cli::Opts;
use crate::config::Config;

fn main() {
    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
            _ => usage_error(&error.to_string()),
        },
    };

    init_logging(opts.verbose);

    let config = match Config::from_opts(&opts) {
        Ok(config) => config,
        Err(error) => usage_error(&error.to_string()),
    };

    if let Err(error) = run::run(&config) {
        eprintln!("{}", error);
        process::exit(1);
    }
}

fn usage_error(message: &str) -> ! {
    println!("{}\n", message.trim_end());
    println!("{}", Opts::command().render_help());
    process::exit(1);
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
