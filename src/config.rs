//! Build-time configuration.
//!
//! Everything here is resolved once, when the crate is compiled. Cargo
//! features and the panic strategy pick the values; nothing can change them at
//! runtime.
//!
//! | constant          | source                                                     |
//! |-------------------|------------------------------------------------------------|
//! | `UNWIND_ENABLED`  | `panic = "unwind"` and no `no-unwind` feature              |
//! | `DEBUG`/`RELEASE` | `debug_assertions`                                         |
//! | `WARN_LOGGING`    | debug build or `warn-log`, never with `quiet`              |
//! | `ERROR_LOGGING`   | `error-log` feature (on by default)                        |

use crate::logging::LogLevel;

/// Whether raised conditions can be intercepted in this build.
pub const UNWIND_ENABLED: bool = cfg!(all(panic = "unwind", not(feature = "no-unwind")));

pub const DEBUG: bool = cfg!(debug_assertions);

pub const RELEASE: bool = !DEBUG;

/// Gate for `tc_warn!` and the warn-level catch helpers.
pub const WARN_LOGGING: bool =
    cfg!(all(any(debug_assertions, feature = "warn-log"), not(feature = "quiet")));

/// Gate for `tc_error!` and the error-level catch helpers.
pub const ERROR_LOGGING: bool = cfg!(feature = "error-log");

/// Threshold a fresh `Logger` starts with.
pub const DEFAULT_LEVEL: LogLevel = if DEBUG {
    LogLevel::Debug
} else {
    LogLevel::Info
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");
pub const VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");
pub const VERSION_PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");
