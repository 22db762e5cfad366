//! Uniform try/catch/throw over panic payloads, plus a small leveled log
//! dispatcher.
//!
//! ```
//! use trycatch::{throw, try_catch};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("runtime error: {0}")]
//! struct RuntimeError(&'static str);
//!
//! # if !trycatch::config::UNWIND_ENABLED { return; }
//! let mut which = 0;
//! try_catch! {
//!     try { throw!(RuntimeError("rte")); }
//!     catch (_e: RuntimeError) { which = 1; }
//!     catch_error (_e) { which = 2; }
//!     catch_all { which = 3; }
//! }
//! assert_eq!(which, 1);
//! ```
//!
//! The same source builds with `panic = "abort"` (or the `no-unwind`
//! feature): handlers are still type-checked, never run, and `throw!` becomes
//! a fatal abort. See [`exit`] for the details and the one place where the two
//! builds intentionally disagree.

pub mod config;
mod error;
pub mod exit;
pub mod logging;
pub mod site;

pub use error::{Error, Result};
pub use exit::{
    abort_hook, guard, likely, set_abort_hook, unlikely, Active, Caught, Exception, Fatal,
    StructuredExit,
};
pub use logging::{LogLevel, LogSink, Logger, Record};
pub use site::Site;
