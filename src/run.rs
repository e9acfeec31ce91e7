use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::calendar::local_now;
use crate::config::{Config, RefreshMode};
use crate::display;
use crate::error::RunError;

pub const TICK: Duration = Duration::from_secs(1);

pub fn run(config: &Config) -> Result<(), RunError> {
    debug!(
        rate = %config.rate,
        per_second = config.earnings_per_second,
        start = %config.start,
        mode = ?config.refresh,
        "configured"
    );

    // The amount is always shown in bold red, even when piped.
    colored::control::set_override(true);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.refresh {
        RefreshMode::Once => display::once(&mut out, config, local_now),
        RefreshMode::Continuous => {
            let stop = interrupt_flag()?;
            display::continuous(&mut out, config, local_now, &stop, TICK)?;
            info!("interrupted, exiting");
            Ok(())
        }
    }
}

/// Flag raised by the first <C-c>; the display loop exits on its next tick.
fn interrupt_flag() -> Result<Arc<AtomicBool>, RunError> {
    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = Arc::clone(&stop);
    ctrlc::set_handler(move || handler_stop.store(true, Ordering::SeqCst))?;
    Ok(stop)
}
