use std::{
    any::Any,
    cell::RefCell,
    panic::{self, AssertUnwindSafe},
    rc::Rc,
};

use super::{caught::Rethrow, hook, Caught, StructuredExit};
use crate::site::Site;

/// Raising-capable personality: conditions travel as panic payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unwind;

thread_local! {
    /// Conditions whose handlers are running on this thread, innermost last.
    static HANDLING: RefCell<Vec<Rc<Caught>>> = const { RefCell::new(Vec::new()) };
}

struct HandlerScope;

impl HandlerScope {
    fn enter(handled: Rc<Caught>) -> Self {
        HANDLING.with(|stack| stack.borrow_mut().push(handled));
        HandlerScope
    }

    fn current() -> Option<Rc<Caught>> {
        HANDLING.with(|stack| stack.borrow().last().cloned())
    }
}

impl Drop for HandlerScope {
    fn drop(&mut self) {
        HANDLING.with(|stack| stack.borrow_mut().pop());
    }
}

/// Re-raises the condition a finished `dispatch` was handling.
fn resume_handled(handled: Rc<Caught>) -> ! {
    match Rc::try_unwrap(handled) {
        Ok(caught) => caught.resume(),
        // A rethrown `Caught` was moved out of its handler and kept alive.
        Err(_) => hook::fatal(Site::UNKNOWN, "rethrown condition outlived its handler"),
    }
}

impl StructuredExit for Unwind {
    const UNWINDS: bool = true;

    fn run<T>(body: impl FnOnce() -> T) -> Result<T, Caught> {
        match panic::catch_unwind(AssertUnwindSafe(body)) {
            Ok(value) => Ok(value),
            Err(payload) if payload.is::<Rethrow>() => match HandlerScope::current() {
                Some(handled) => Err(Caught::rethrown(handled)),
                None => Err(Caught::new(payload)),
            },
            Err(payload) => Err(Caught::new(payload)),
        }
    }

    fn dispatch<T>(caught: Caught, handlers: impl FnOnce(&Caught) -> Option<T>) -> T {
        let caught = Rc::new(caught);
        let outcome = {
            let _scope = HandlerScope::enter(Rc::clone(&caught));
            panic::catch_unwind(AssertUnwindSafe(|| handlers(&*caught)))
        };

        match outcome {
            Ok(Some(value)) => value,
            Ok(None) => resume_handled(caught),
            Err(payload) if payload.is::<Rethrow>() => resume_handled(caught),
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    fn raise(payload: Box<dyn Any + Send>, _site: Site) -> ! {
        panic::resume_unwind(payload)
    }

    fn rethrow(site: Site) -> ! {
        if HandlerScope::current().is_none() {
            hook::fatal(site, "rethrow outside of a handler");
        }
        panic::resume_unwind(Box::new(Rethrow))
    }
}
