use std::{
    fmt,
    path::PathBuf,
    sync::{
        atomic::{AtomicU8, Ordering},
        Arc,
    },
};

use parking_lot::RwLock;

use super::{
    formatters::{Config, DefaultFormatter},
    sinks::{FileSink, NullSink, StderrSink, TracingSink},
    LogFormatter, LogLevel, Record, SharedSink,
};
use crate::site::Site;

/// Level threshold plus the single active sink.
///
/// Each getter and setter is atomic on its own. Nothing couples a level change
/// to a sink change, so a concurrent reader may observe one without the other.
pub struct Logger {
    level: AtomicU8,
    sink: RwLock<Option<SharedSink>>,
}

impl Logger {
    pub fn new(level: LogLevel, sink: Option<SharedSink>) -> Self {
        Self {
            level: AtomicU8::new(level.as_u8()),
            sink: RwLock::new(sink),
        }
    }

    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level.as_u8(), Ordering::Relaxed);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub fn set_sink(&self, sink: Option<SharedSink>) {
        *self.sink.write() = sink;
    }

    pub fn sink(&self) -> Option<SharedSink> {
        self.sink.read().clone()
    }

    pub fn replace_sink(&self, sink: Option<SharedSink>) -> Option<SharedSink> {
        std::mem::replace(&mut *self.sink.write(), sink)
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= self.level()
    }

    /// Forwards to the sink unless filtered out. Sink errors are dropped.
    pub fn log(&self, level: LogLevel, site: Site, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        // Clone out of the lock so a slow sink never blocks `set_sink`.
        let Some(sink) = self.sink() else {
            return;
        };
        let _ = sink.write_log(&Record::new(level, site, args));
    }

    pub fn flush(&self) {
        if let Some(sink) = self.sink() {
            sink.flush();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_LEVEL,
            Some(Arc::new(StderrSink::default())),
        )
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("has_sink", &self.sink.read().is_some())
            .finish()
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Logger::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let site = Site::new(
            record.file_static().unwrap_or("(unknown)"),
            record.line().unwrap_or(0),
            record.module_path_static().unwrap_or("(unknown)"),
        );
        Logger::log(self, record.level().into(), site, *record.args());
    }

    fn flush(&self) {
        Logger::flush(self)
    }
}

type SinkConstructor = Box<dyn Fn(Box<dyn LogFormatter>) -> crate::Result<SharedSink>>;

pub struct Builder {
    level: LogLevel,
    constructor: SinkConstructor,
    formatter_builder: Box<dyn Fn(Config) -> Box<dyn LogFormatter>>,
    config: Config,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            level: crate::config::DEFAULT_LEVEL,
            constructor: Box::new(|formatter| {
                let sink: SharedSink = Arc::new(StderrSink::new(formatter));
                Ok(sink)
            }),
            formatter_builder: Box::new(|config| Box::new(DefaultFormatter::new(config))),
            config: Config::new(),
        }
    }

    pub fn with_level(self, level: LogLevel) -> Self {
        Self { level, ..self }
    }

    pub fn with_ansi(mut self, use_ansi: bool) -> Self {
        self.config.use_ansi = use_ansi;
        self
    }

    pub fn with_timestamps(mut self, datetime_format: impl Into<String>) -> Self {
        self.config.datetime_format = Some(datetime_format.into());
        self
    }

    pub fn with_file_sink(self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        Self {
            constructor: Box::new(move |formatter| {
                let sink: SharedSink = Arc::new(FileSink::new(&path, formatter)?);
                Ok(sink)
            }),
            ..self
        }
    }

    pub fn with_stderr_sink(self) -> Self {
        Self {
            constructor: Box::new(|formatter| {
                let sink: SharedSink = Arc::new(StderrSink::new(formatter));
                Ok(sink)
            }),
            ..self
        }
    }

    pub fn with_null_sink(self) -> Self {
        Self {
            constructor: Box::new(|_| {
                let sink: SharedSink = Arc::new(NullSink::new());
                Ok(sink)
            }),
            ..self
        }
    }

    pub fn with_tracing_sink(self) -> Self {
        Self {
            constructor: Box::new(|_| {
                let sink: SharedSink = Arc::new(TracingSink::new());
                Ok(sink)
            }),
            ..self
        }
    }

    pub fn with_sink(self, sink: SharedSink) -> Self {
        Self {
            constructor: Box::new(move |_| Ok(Arc::clone(&sink))),
            ..self
        }
    }

    pub fn build(&self) -> crate::Result<Logger> {
        let sink = (self.constructor)((self.formatter_builder)(self.config.clone()))?;
        Ok(Logger::new(self.level, Some(sink)))
    }

    /// Applies the built level and sink to the global logger.
    pub fn install(&self) -> crate::Result<()> {
        let built = self.build()?;
        let global = super::global();
        global.set_sink(built.sink());
        global.set_level(built.level());
        Ok(())
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn capture() -> (Arc<Mutex<Vec<String>>>, SharedSink) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let out = Arc::clone(&lines);
        let sink: SharedSink = Arc::new(move |record: &Record<'_>| {
            out.lock()
                .push(format!("{}:{}", record.level(), record.args()));
        });
        (lines, sink)
    }

    fn here() -> Site {
        Site::new(file!(), line!(), "tests")
    }

    #[test]
    fn filters_below_threshold() {
        let (lines, sink) = capture();
        let logger = Logger::new(LogLevel::Warn, Some(sink));

        logger.log(LogLevel::Info, here(), format_args!("dropped"));
        logger.log(LogLevel::Warn, here(), format_args!("kept"));

        assert_eq!(*lines.lock(), ["WARN:kept"]);
    }

    #[test]
    fn off_threshold_drops_everything() {
        let (lines, sink) = capture();
        let logger = Logger::new(LogLevel::Off, Some(sink));

        logger.log(LogLevel::Error, here(), format_args!("nope"));
        assert!(lines.lock().is_empty());
    }

    #[test]
    fn unset_sink_is_a_no_op() {
        let logger = Logger::new(LogLevel::Trace, None);
        logger.log(LogLevel::Error, here(), format_args!("nowhere"));
        assert!(logger.sink().is_none());
    }

    #[test]
    fn replace_sink_returns_previous() {
        let (_, first) = capture();
        let logger = Logger::new(LogLevel::Trace, Some(Arc::clone(&first)));

        let previous = logger.replace_sink(None).unwrap();
        assert!(Arc::ptr_eq(&previous, &first));
        assert!(logger.sink().is_none());
    }

    #[test]
    fn builder_uses_requested_level_and_sink() {
        let (lines, sink) = capture();
        let logger = Builder::new()
            .with_level(LogLevel::Error)
            .with_sink(sink)
            .build()
            .unwrap();

        assert_eq!(logger.level(), LogLevel::Error);
        logger.log(LogLevel::Error, here(), format_args!("x={}", 1));
        assert_eq!(*lines.lock(), ["ERROR:x=1"]);
    }

    #[test]
    fn builder_surfaces_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = Builder::new()
            .with_file_sink(dir.path().join("no").join("such.log"))
            .build();
        assert!(matches!(result, Err(crate::Error::LogFile { .. })));
    }

    #[test]
    fn log_records_keep_their_location() {
        let (lines, _) = capture();
        let out = Arc::clone(&lines);
        let sink: SharedSink = Arc::new(move |record: &Record<'_>| {
            out.lock()
                .push(format!("{}:{} {}", record.file(), record.line(), record.func()));
        });
        let logger = Logger::new(LogLevel::Trace, Some(sink));
        logger.log(LogLevel::Info, Site::new("f.rs", 9, "m::f"), format_args!(""));

        assert_eq!(*lines.lock(), ["f.rs:9 m::f"]);
    }
}
