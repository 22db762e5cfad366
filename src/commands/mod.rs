use std::{fmt::Display, path::PathBuf};

use clap::{Parser, Subcommand};
use eyre::Context;
use trycatch::{logging, LogLevel};

mod demo;
mod info;

#[derive(Subcommand, Debug)]
pub enum TcCmd {
    #[command(about = "Print the build personality, logging gates and levels.")]
    Info(info::Cmd),

    #[command(
        about = "Exercise logging, try/catch and guard.",
        long_about = "Exercise logging, try/catch and guard.\n\n\
            The default --value of -1 makes the operation fail on purpose, so a bare \
            `trycatch demo` in an unwinding build exits with 1 (error handler ran), or 2 with --raw \
            (catch-all ran). \
            Pass a non-negative --value to exit with 0."
    )]
    Demo(demo::Cmd),
}

impl Display for TcCmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TcCmd::Info(_cmd) => write!(f, "info"),
            TcCmd::Demo(cmd) => write!(f, "demo --value {}", cmd.value),
        }
    }
}

#[derive(Parser)]
#[command(version, long_version = "")]
#[command(about = "Shows the build personality of trycatch and exercises its macros.", long_about = None, disable_help_subcommand = true)]
pub struct Tc {
    #[arg(
        long,
        short = 'v',
        action = clap::ArgAction::Count,
        global = true,
        conflicts_with = "level",
        help = "Lower the log threshold one step per flag, starting from the build's default level.",
        display_order = 999
    )]
    pub verbose: u8,

    #[arg(
        global = true,
        long,
        env = "TRYCATCH_LOG",
        help = "Log threshold: trace, debug, info, warn, error or off. Defaults to the build's level.",
        display_order = 0
    )]
    pub level: Option<LogLevel>,

    #[arg(
        global = true,
        long,
        help = "Append log lines to this file instead of stderr.",
        display_order = 1
    )]
    pub log_file: Option<PathBuf>,

    #[arg(global = true, long, help = "Colour level names.", display_order = 2)]
    pub ansi: bool,

    #[arg(
        global = true,
        long,
        conflicts_with = "log_file",
        help = "Send log output through a tracing subscriber.",
        display_order = 3
    )]
    pub tracing: bool,

    #[command(subcommand)]
    pub cmd: TcCmd,
}

impl Tc {
    fn log_level(&self) -> LogLevel {
        if let Some(level) = self.level {
            return level;
        }

        trycatch::config::DEFAULT_LEVEL.more_verbose(self.verbose)
    }

    fn setup_logging(&self) -> eyre::Result<()> {
        let mut builder = logging::Builder::new()
            .with_level(self.log_level())
            .with_ansi(self.ansi);

        if self.tracing {
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::TRACE)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .wrap_err("Failed installing tracing subscriber")?;
            builder = builder.with_tracing_sink();
        } else if let Some(path) = &self.log_file {
            builder = builder
                .with_file_sink(path)
                .with_timestamps("%Y-%m-%d %H:%M:%S");
        } else {
            builder = builder.with_stderr_sink();
        }

        builder
            .install()
            .wrap_err("Failed configuring the log dispatcher")?;
        logging::init_log_facade().wrap_err("Failed registering the log facade")
    }

    pub fn run(self) -> eyre::Result<u8> {
        self.setup_logging()?;

        log::debug!("running command {}", &self.cmd);
        trycatch::log_trace!("log level: {}", self.log_level());

        match &self.cmd {
            TcCmd::Info(info) => info.run(),
            TcCmd::Demo(demo) => demo.run(),
        }
    }
}
