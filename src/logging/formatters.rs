use yansi::{Paint, Style};

use super::{LogFormatter, LogLevel, Record};

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub use_ansi: bool,
    /// `chrono` format string; when set, lines are prefixed with local time.
    pub datetime_format: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Produces `[LEVEL] file:line func: message`.
pub struct DefaultFormatter {
    config: Config,
}

impl DefaultFormatter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn timestamp(&self) -> Option<String> {
        let format = self.config.datetime_format.as_deref()?;
        let time = chrono::Local::now().format(format).to_string();

        if self.config.use_ansi {
            Some(format!("{} ", time.bright_black()))
        } else {
            Some(format!("{} ", time))
        }
    }

    fn format_level(&self, level: LogLevel) -> String {
        let tag = format!("[{}]", level.name());
        if !self.config.use_ansi {
            return tag;
        }

        let style = match level {
            LogLevel::Error => Style::new().red(),
            LogLevel::Warn => Style::new().yellow(),
            LogLevel::Info => Style::new().green(),
            LogLevel::Debug => Style::new().blue(),
            LogLevel::Trace | LogLevel::Off => Style::new().white(),
        };
        tag.paint(style).to_string()
    }
}

impl Default for DefaultFormatter {
    fn default() -> Self {
        Self::new(Config::new())
    }
}

impl LogFormatter for DefaultFormatter {
    fn format(&self, record: &Record<'_>) -> String {
        format!(
            "{}{} {}:{} {}: {}",
            self.timestamp().unwrap_or_default(),
            self.format_level(record.level()),
            record.file(),
            record.line(),
            record.func(),
            record.args(),
        )
    }
}
