//! Forward [`log`] crate records into the forest.
//!
//! Libraries that log through the [`log`] facade can feed planted trees
//! without knowing about this crate: [`install`] registers a global
//! [`log::Log`] whose records are dispatched exactly like calls to the
//! native macros, including callsite-derived tags.
//!
//! ```
//! timber::bridge::install().expect("no other global logger installed");
//!
//! log::info!("routed into the forest");
//! ```
use crate::forest;
use crate::tree::{Callsite, Priority};
use log::{Level, LevelFilter, Metadata, SetLoggerError};

/// A [`log::Log`] implementation that dispatches into the forest.
#[derive(Debug, Default)]
pub struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

/// Registers a [`LogBridge`] as the global `log` logger and opens the
/// `log` level filter; trees remain the place where filtering happens.
///
/// # Errors
///
/// Fails if another global logger is already installed.
pub fn install() -> Result<(), SetLoggerError> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

fn priority(level: Level) -> Priority {
    match level {
        Level::Trace => Priority::Trace,
        Level::Debug => Priority::Debug,
        Level::Info => Priority::Info,
        Level::Warn => Priority::Warn,
        Level::Error => Priority::Error,
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        forest::tree_count() > 0
    }

    fn log(&self, record: &log::Record) {
        let callsite = Callsite::new(
            record.module_path_static().unwrap_or("unknown"),
            record.file_static().unwrap_or("unknown"),
            record.line().unwrap_or(0),
        );
        forest::dispatch(priority(record.level()), callsite, None, Some(*record.args()));
    }

    fn flush(&self) {}
}
