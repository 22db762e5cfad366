use std::{any::Any, error::Error, fmt, panic, rc::Rc};

use crate::site::Site;

trait ErrorAny: Error + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
    fn as_error(&self) -> &(dyn Error + Send + Sync + 'static);
}

impl<E: Error + Send + Sync + 'static> ErrorAny for E {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self
    }
}

/// The payload `throw!` raises: an error value plus where it was thrown.
pub struct Exception {
    error: Box<dyn ErrorAny>,
    site: Site,
}

impl Exception {
    pub fn new<E>(error: E, site: Site) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            error: Box::new(error),
            site,
        }
    }

    pub fn site(&self) -> Site {
        self.site
    }

    pub fn error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.error.as_error()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.error.as_any().downcast_ref::<T>()
    }
}

impl fmt::Debug for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exception")
            .field("error", &self.error())
            .field("site", &self.site)
            .finish()
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.error(), f)
    }
}

/// Payload of `rethrow!`. Stands for whatever the innermost running handler
/// is handling.
pub(super) struct Rethrow;

enum Payload {
    Raised(Box<dyn Any + Send>),
    /// A `rethrow!` intercepted inside a handler; the handler's `dispatch`
    /// still owns the original.
    Rethrown(Rc<Caught>),
}

/// A raised condition intercepted by a try block.
///
/// Wraps the raw panic payload. Values raised with `throw!` are matched by
/// the type of the error they carry, values raised with `throw_any!` or
/// `std::panic::panic_any` by their own type.
pub struct Caught {
    payload: Payload,
}

impl Caught {
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Self {
            payload: Payload::Raised(payload),
        }
    }

    pub(super) fn rethrown(handled: Rc<Caught>) -> Self {
        Self {
            payload: Payload::Rethrown(handled),
        }
    }

    fn raw(&self) -> &(dyn Any + Send) {
        match &self.payload {
            Payload::Raised(payload) => payload.as_ref(),
            Payload::Rethrown(handled) => handled.raw(),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.exception()
            .and_then(Exception::downcast_ref::<T>)
            .or_else(|| self.raw().downcast_ref::<T>())
    }

    pub fn is<T: Any>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    pub fn exception(&self) -> Option<&Exception> {
        self.raw().downcast_ref::<Exception>()
    }

    /// The thrown error, if this was raised with `throw!`.
    pub fn as_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.exception().map(Exception::error)
    }

    pub fn site(&self) -> Option<Site> {
        self.exception().map(Exception::site)
    }

    /// `true` if this came from a `rethrow!` inside a handler.
    pub fn is_rethrown(&self) -> bool {
        matches!(self.payload, Payload::Rethrown(_))
    }

    /// Best-effort description, including `panic!` messages.
    pub fn message(&self) -> String {
        let raw = self.raw();
        if let Some(exception) = self.exception() {
            exception.to_string()
        } else if let Some(message) = raw.downcast_ref::<&'static str>() {
            message.to_string()
        } else if let Some(message) = raw.downcast_ref::<String>() {
            message.clone()
        } else {
            "unknown exception".to_string()
        }
    }

    /// Continues unwinding. A rethrown condition goes back to the handler
    /// that owns it.
    pub fn resume(self) -> ! {
        match self.payload {
            Payload::Raised(payload) => panic::resume_unwind(payload),
            Payload::Rethrown(handled) => {
                drop(handled);
                panic::resume_unwind(Box::new(Rethrow))
            }
        }
    }
}

impl fmt::Debug for Caught {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Caught")
            .field("message", &self.message())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("disk full: {0}")]
    struct DiskFull(u8);

    fn thrown(error: DiskFull) -> Caught {
        Caught::new(Box::new(Exception::new(error, Site::new("a.rs", 1, "f"))))
    }

    #[test]
    fn thrown_errors_downcast_to_their_type() {
        let caught = thrown(DiskFull(7));
        assert_eq!(caught.downcast_ref::<DiskFull>().map(|e| e.0), Some(7));
        assert!(caught.is::<Exception>());
        assert!(!caught.is::<std::io::Error>());
    }

    #[test]
    fn thrown_errors_are_std_errors() {
        let caught = thrown(DiskFull(1));
        assert_eq!(caught.as_error().unwrap().to_string(), "disk full: 1");
        assert_eq!(caught.site().unwrap().file, "a.rs");
        assert_eq!(caught.message(), "disk full: 1");
    }

    #[test]
    fn raw_payloads_downcast_directly() {
        let caught = Caught::new(Box::new(42_i32));
        assert_eq!(caught.downcast_ref::<i32>(), Some(&42));
        assert!(caught.as_error().is_none());
        assert_eq!(caught.message(), "unknown exception");
    }

    #[test]
    fn rethrown_conditions_see_the_handled_payload() {
        let handled = Rc::new(thrown(DiskFull(3)));
        let rethrown = Caught::rethrown(Rc::clone(&handled));

        assert!(rethrown.is_rethrown());
        assert!(!handled.is_rethrown());
        assert_eq!(rethrown.downcast_ref::<DiskFull>().map(|e| e.0), Some(3));
        assert_eq!(rethrown.message(), "disk full: 3");

        drop(rethrown);
        assert_eq!(Rc::strong_count(&handled), 1);
    }

    #[test]
    fn panic_messages_are_readable() {
        assert_eq!(Caught::new(Box::new("boom")).message(), "boom");
        assert_eq!(Caught::new(Box::new(String::from("bang"))).message(), "bang");
    }
}
