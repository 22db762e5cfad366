use std::{io::Write, sync::OnceLock};

use crate::{site::Site, Error};

/// What the abort hook is told about the condition it must terminate on.
#[derive(Debug, Clone, Copy)]
pub struct Fatal<'a> {
    site: Site,
    message: &'a str,
}

impl<'a> Fatal<'a> {
    pub fn new(site: Site, message: &'a str) -> Self {
        Self { site, message }
    }

    pub fn site(&self) -> Site {
        self.site
    }

    pub fn message(&self) -> &'a str {
        self.message
    }
}

/// Must never return: abort, exit, or (in unwinding builds) panic.
pub type AbortHook = fn(&Fatal<'_>) -> !;

static ABORT_HOOK: OnceLock<AbortHook> = OnceLock::new();

/// Installs a custom abort hook. Only the first call succeeds, so do it during
/// startup before anything can raise.
pub fn set_abort_hook(hook: AbortHook) -> crate::Result<()> {
    ABORT_HOOK
        .set(hook)
        .map_err(|_| Error::AbortHookInstalled)
}

pub fn abort_hook() -> AbortHook {
    ABORT_HOOK.get().copied().unwrap_or(default_abort_hook)
}

/// Prints a diagnostic to stderr and aborts the process.
pub fn default_abort_hook(fatal: &Fatal<'_>) -> ! {
    let site = fatal.site();
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(
        stderr,
        "[trycatch] fatal: cannot raise here\n  at {}:{} in {}\n  msg: {}",
        site.file,
        site.line,
        site.func,
        fatal.message()
    );
    let _ = stderr.flush();
    std::process::abort()
}

pub(crate) fn fatal(site: Site, message: &str) -> ! {
    abort_hook()(&Fatal::new(site, message))
}
