use std::any::Any;

use super::{hook, Caught, StructuredExit};
use crate::site::Site;

/// Non-raising personality.
///
/// Try bodies run directly and handlers never run, although they are still
/// compiled. Raising or re-raising is not emulated: it is a fatal error routed
/// to the abort hook. Code that must work in this mode signals failure through
/// return values instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbortOnRaise;

impl StructuredExit for AbortOnRaise {
    const UNWINDS: bool = false;

    fn run<T>(body: impl FnOnce() -> T) -> Result<T, Caught> {
        Ok(body())
    }

    fn dispatch<T>(caught: Caught, handlers: impl FnOnce(&Caught) -> Option<T>) -> T {
        match handlers(&caught) {
            Some(value) => value,
            None => hook::fatal(
                caught.site().unwrap_or(Site::UNKNOWN),
                "unhandled condition with unwinding disabled",
            ),
        }
    }

    fn raise(_payload: Box<dyn Any + Send>, site: Site) -> ! {
        hook::fatal(site, "throw called with unwinding disabled")
    }

    fn rethrow(site: Site) -> ! {
        hook::fatal(site, "rethrow called with unwinding disabled")
    }
}
