use std::fmt;

use super::LogLevel;
use crate::site::Site;

/// One log event as handed to a sink.
///
/// The message arguments borrow from the call site, so a sink can format them
/// but never keep them past `write_log`.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    level: LogLevel,
    site: Site,
    args: fmt::Arguments<'a>,
}

impl<'a> Record<'a> {
    pub fn new(level: LogLevel, site: Site, args: fmt::Arguments<'a>) -> Self {
        Self { level, site, args }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn site(&self) -> Site {
        self.site
    }

    pub fn file(&self) -> &'static str {
        self.site.file
    }

    pub fn line(&self) -> u32 {
        self.site.line
    }

    pub fn func(&self) -> &'static str {
        self.site.func
    }

    pub fn args(&self) -> &fmt::Arguments<'a> {
        &self.args
    }

    /// The formatted message without level or location.
    pub fn message(&self) -> String {
        self.args.to_string()
    }
}
