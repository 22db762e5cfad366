use std::{
    fs::File,
    io::{self, LineWriter, Write},
    path::{Path, PathBuf},
};

use parking_lot::Mutex;

use super::{LogFormatter, LogLevel, LogSink, Record};
use crate::Error;

pub struct FileSink {
    file: Mutex<LineWriter<File>>,
    file_path: PathBuf,
    formatter: Box<dyn LogFormatter>,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>, formatter: Box<dyn LogFormatter>) -> crate::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::LogFile {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            file: Mutex::new(LineWriter::new(file)),
            file_path: path.to_path_buf(),
            formatter,
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl LogSink for FileSink {
    fn write_log(&self, record: &Record<'_>) -> io::Result<()> {
        let mut file = self.file.lock();
        writeln!(file, "{}", self.formatter.format(record))
    }

    fn flush(&self) {
        let _ = self.file.lock().flush();
    }
}

/// The default sink: one formatted line per event on standard error.
pub struct StderrSink {
    handle: io::Stderr,
    formatter: Box<dyn LogFormatter>,
}

impl StderrSink {
    pub fn new(formatter: Box<dyn LogFormatter>) -> Self {
        Self {
            handle: io::stderr(),
            formatter,
        }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new(Box::new(super::DefaultFormatter::default()))
    }
}

impl LogSink for StderrSink {
    fn write_log(&self, record: &Record<'_>) -> io::Result<()> {
        let mut writer = self.handle.lock();
        writeln!(writer, "{}", self.formatter.format(record))
    }

    fn flush(&self) {
        let _ = self.handle.lock().flush();
    }
}

#[derive(Debug, Default)]
pub struct NullSink {}

impl NullSink {
    pub fn new() -> Self {
        Self {}
    }
}

impl LogSink for NullSink {
    fn write_log(&self, _record: &Record<'_>) -> io::Result<()> {
        Ok(())
    }
}

/// Re-emits records as `tracing` events under the `trycatch` target.
///
/// The dispatcher's own threshold still applies first; the subscriber may
/// filter further.
#[derive(Debug, Default)]
pub struct TracingSink {}

impl TracingSink {
    pub fn new() -> Self {
        Self {}
    }
}

impl LogSink for TracingSink {
    fn write_log(&self, record: &Record<'_>) -> io::Result<()> {
        let file = record.file();
        let line = record.line();
        let func = record.func();
        let message = record.args();

        match record.level() {
            LogLevel::Trace => tracing::trace!(target: "trycatch", file, line, func, "{}", message),
            LogLevel::Debug => tracing::debug!(target: "trycatch", file, line, func, "{}", message),
            LogLevel::Info => tracing::info!(target: "trycatch", file, line, func, "{}", message),
            LogLevel::Warn => tracing::warn!(target: "trycatch", file, line, func, "{}", message),
            LogLevel::Error => tracing::error!(target: "trycatch", file, line, func, "{}", message),
            LogLevel::Off => {}
        }

        Ok(())
    }
}
