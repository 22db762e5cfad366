//! Leveled logging macros.
//!
//! `log_trace!` .. `log_error!` always reach the global dispatcher and are
//! filtered there at runtime. `tc_warn!` and `tc_error!` are additionally
//! gated at build time by [`crate::config::WARN_LOGGING`] and
//! [`crate::config::ERROR_LOGGING`]; when a gate is off they still type-check
//! their arguments but never format them.

#[macro_export]
macro_rules! log_to {
    ($logger:expr, $lvl:expr, $($arg:tt)+) => {
        $logger.log($lvl, $crate::site!(), ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_at {
    ($lvl:expr, $($arg:tt)+) => {
        $crate::log_to!($crate::logging::global(), $lvl, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_trace { ($($arg:tt)+) => { $crate::log_at!($crate::logging::LogLevel::Trace, $($arg)+) } }
#[macro_export]
macro_rules! log_debug { ($($arg:tt)+) => { $crate::log_at!($crate::logging::LogLevel::Debug, $($arg)+) } }
#[macro_export]
macro_rules! log_info { ($($arg:tt)+) => { $crate::log_at!($crate::logging::LogLevel::Info, $($arg)+) } }
#[macro_export]
macro_rules! log_warn { ($($arg:tt)+) => { $crate::log_at!($crate::logging::LogLevel::Warn, $($arg)+) } }
#[macro_export]
macro_rules! log_error { ($($arg:tt)+) => { $crate::log_at!($crate::logging::LogLevel::Error, $($arg)+) } }

/// Warn-level log that disappears unless [`crate::config::WARN_LOGGING`].
#[macro_export]
macro_rules! tc_warn {
    ($($arg:tt)+) => {
        if $crate::config::WARN_LOGGING {
            $crate::log_warn!($($arg)+);
        }
    };
}

/// Error-level log that disappears unless [`crate::config::ERROR_LOGGING`].
#[macro_export]
macro_rules! tc_error {
    ($($arg:tt)+) => {
        if $crate::config::ERROR_LOGGING {
            $crate::log_error!($($arg)+);
        }
    };
}
