//! Structured exit: one try/catch/throw vocabulary for both build personalities.
//!
//! [`StructuredExit`] has two implementations:
//!
//! * [`Unwind`]: raised conditions are panic payloads, propagated with
//!   `resume_unwind` and intercepted with `catch_unwind`.
//! * [`AbortOnRaise`]: nothing is ever intercepted. Throwing or re-throwing
//!   terminates the process through the abort hook. **This is a change of
//!   behaviour, not an emulation**: code that must keep working in such builds
//!   has to report failures through return values.
//!
//! [`Active`] is whichever one the build selected (see
//! [`crate::config::UNWIND_ENABLED`]). The macros always go through `Active`,
//! so call sites look identical in both builds and the handler clauses of a
//! `try_catch!` are type-checked even where they can never run.
//!
//! # Guard asymmetry
//!
//! [`guard`] reports `false` when the operation raised anything. Under
//! `AbortOnRaise` nothing can be raised and intercepted, so it reports `true`
//! for every operation that returns, whatever the operation thinks of its own
//! outcome. The two personalities disagree here.

mod abort;
mod caught;
mod hook;
mod macros;
mod unwind;

use std::any::Any;
use std::error::Error;

pub use abort::AbortOnRaise;
pub use caught::{Caught, Exception};
pub use hook::{abort_hook, default_abort_hook, set_abort_hook, AbortHook, Fatal};
pub use unwind::Unwind;

use crate::site::Site;

pub trait StructuredExit {
    /// Whether `run` can ever return `Err`.
    const UNWINDS: bool;

    /// Runs a try body.
    fn run<T>(body: impl FnOnce() -> T) -> Result<T, Caught>;

    /// Runs the handler chain for `caught`. The chain returns `None` when no
    /// clause matched, in which case the condition keeps propagating.
    fn dispatch<T>(caught: Caught, handlers: impl FnOnce(&Caught) -> Option<T>) -> T;

    fn raise(payload: Box<dyn Any + Send>, site: Site) -> !;

    /// Re-raises the condition the innermost running handler is handling.
    fn rethrow(site: Site) -> !;

    fn guard<T>(op: impl FnOnce() -> T) -> bool {
        Self::run(op).is_ok()
    }
}

#[cfg(all(panic = "unwind", not(feature = "no-unwind")))]
pub type Active = Unwind;

#[cfg(not(all(panic = "unwind", not(feature = "no-unwind"))))]
pub type Active = AbortOnRaise;

/// Raises `error` as an [`Exception`]. Prefer the `throw!` macro.
pub fn throw<E>(error: E, site: Site) -> !
where
    E: Error + Send + Sync + 'static,
{
    <Active as StructuredExit>::raise(Box::new(Exception::new(error, site)), site)
}

/// Raises an arbitrary value. Prefer the `throw_any!` macro.
pub fn throw_any<P: Any + Send>(payload: P, site: Site) -> ! {
    <Active as StructuredExit>::raise(Box::new(payload), site)
}

pub fn rethrow(site: Site) -> ! {
    <Active as StructuredExit>::rethrow(site)
}

/// Runs `op`, returning `false` if it raised. See the module docs for how this
/// behaves without unwinding.
pub fn guard<T>(op: impl FnOnce() -> T) -> bool {
    <Active as StructuredExit>::guard(op)
}

#[cold]
#[inline(never)]
fn cold_path() {}

/// Branch hint: `b` is expected to be `true`.
#[inline(always)]
pub fn likely(b: bool) -> bool {
    if !b {
        cold_path();
    }
    b
}

/// Branch hint: `b` is expected to be `false`.
#[inline(always)]
pub fn unlikely(b: bool) -> bool {
    if b {
        cold_path();
    }
    b
}
