//! Leveled log dispatcher.
//!
//! A [`Logger`] holds a minimum [`LogLevel`] and at most one active
//! [`LogSink`]. Events below the threshold, or sent while no sink is set, are
//! dropped; everything else goes straight to the sink with no buffering.
//!
//! Loggers are ordinary values and can be passed around explicitly. The
//! `log_*!` macros and the catch helpers use the process-wide one returned by
//! [`global`], and the free functions in this module configure it.

mod formatters;
mod level;
mod logger;
mod macros;
mod record;
mod sinks;

use std::{fmt, io, sync::Arc, sync::OnceLock};

pub use formatters::{Config, DefaultFormatter};
pub use level::LogLevel;
pub use logger::{Builder, Logger};
pub use record::Record;
pub use sinks::{FileSink, NullSink, StderrSink, TracingSink};

use crate::site::Site;

pub trait LogFormatter: Sync + Send {
    fn format(&self, record: &Record<'_>) -> String;
}

pub trait LogSink: Sync + Send {
    fn write_log(&self, record: &Record<'_>) -> io::Result<()>;

    fn flush(&self) {}
}

impl<F> LogSink for F
where
    F: Fn(&Record<'_>) + Sync + Send,
{
    fn write_log(&self, record: &Record<'_>) -> io::Result<()> {
        self(record);
        Ok(())
    }
}

/// Shared handle to a sink, as stored by a `Logger`.
pub type SharedSink = Arc<dyn LogSink>;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger. Lives until the process exits.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::default)
}

pub fn set_level(level: LogLevel) {
    global().set_level(level);
}

pub fn level() -> LogLevel {
    global().level()
}

pub fn set_sink(sink: Option<SharedSink>) {
    global().set_sink(sink);
}

pub fn sink() -> Option<SharedSink> {
    global().sink()
}

/// Swaps the global sink and hands back the previous one.
pub fn replace_sink(sink: Option<SharedSink>) -> Option<SharedSink> {
    global().replace_sink(sink)
}

pub fn log(level: LogLevel, site: Site, args: fmt::Arguments<'_>) {
    global().log(level, site, args);
}

/// Registers the global logger as the `log` crate backend.
///
/// `log::info!` and friends are then filtered by the global threshold and
/// written to the global sink, with the record's module path standing in for
/// the function name.
pub fn init_log_facade() -> crate::Result<()> {
    log::set_logger(global())?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
