use clap::Args;
use trycatch::{
    config, guard, log_debug, log_info, log_trace, log_warn, logging, tc_error, tc_warn, throw,
    throw_any, try_catch, LogLevel,
};

#[derive(Args, Debug)]
pub struct Cmd {
    #[arg(
        long,
        default_value_t = -1,
        allow_negative_numbers = true,
        help = "Input for the operation inside the try block. Negative values, including the default, fail and make the command exit non-zero."
    )]
    pub value: i64,

    #[arg(
        long,
        help = "Raise a bare value instead of an error, so only the catch-all handler matches."
    )]
    pub raw: bool,
}

#[derive(Debug, thiserror::Error)]
#[error("x must be non-negative, got {0}")]
struct NegativeInput(i64);

/// Doubles `x`. Raises on negative input when unwinding is available and
/// returns -1 otherwise.
fn may_throw(x: i64, raw: bool) -> i64 {
    if x < 0 {
        if !config::UNWIND_ENABLED {
            return -1;
        }
        if raw {
            throw_any!(x);
        }
        throw!(NegativeInput(x));
    }
    x * 2
}

impl Cmd {
    pub fn run(&self) -> eyre::Result<u8> {
        println!(
            "UNWIND_ENABLED={}, DEBUG={}, RELEASE={}",
            config::UNWIND_ENABLED as u8,
            config::DEBUG as u8,
            config::RELEASE as u8
        );

        log_trace!("trace message");
        log_debug!("debug message");
        log_info!("info message");

        let previous = logging::level();
        logging::set_level(LogLevel::Warn);
        log_info!("this will likely be filtered");
        log_warn!("warn visible");
        logging::set_level(previous);

        let mut rc = 0;
        try_catch! {
            try {
                let a = may_throw(5, self.raw);
                println!("ok: {a}");
                let b = may_throw(self.value, self.raw);
                println!("no error raised: {b}");
            }
            catch_error (e) {
                tc_error!("caught error in demo: {}", e);
                rc = 1;
            }
            catch_all {
                tc_warn!("caught unknown exception in demo");
                rc = 2;
            }
        }

        let ok = guard!(may_throw(1, self.raw));
        println!("guard on valid input: {ok}");

        if !config::UNWIND_ENABLED {
            let c = may_throw(-2, self.raw);
            if c < 0 {
                println!("return-code error path taken (c={c})");
            }
        }

        println!("done");
        Ok(rc)
    }
}
