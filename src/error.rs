use std::path::PathBuf;

/// Errors returned by the configuration side of the library.
///
/// Raised conditions travelling through `try_catch!` are not represented
/// here; they are whatever the caller threw.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `set_abort_hook` was called after a hook had already been installed.
    #[error("an abort hook is already installed")]
    AbortHookInstalled,

    /// A file sink could not open or create its target.
    #[error("failed opening or creating log file {path}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `init_log_facade` found another `log` backend already registered.
    #[error("a `log` backend is already registered")]
    LogFacade(#[from] log::SetLoggerError),

    /// A level name could not be parsed.
    #[error("unknown log level `{0}`")]
    UnknownLevel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
