use clap::{Args, CommandFactory};
use trycatch::{config, logging};
use yansi::Paint;

use crate::commands::Tc;

#[derive(Args, Debug)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cmd {}

fn flag(value: bool) -> String {
    if value {
        "1".green().to_string()
    } else {
        "0".red().to_string()
    }
}

impl Cmd {
    pub fn run(&self) -> eyre::Result<u8> {
        println!(
            "Version:         {}",
            Tc::command().get_version().unwrap_or(config::VERSION)
        );
        println!("UNWIND_ENABLED:  {}", flag(config::UNWIND_ENABLED));
        println!("DEBUG:           {}", flag(config::DEBUG));
        println!("RELEASE:         {}", flag(config::RELEASE));
        println!("WARN_LOGGING:    {}", flag(config::WARN_LOGGING));
        println!("ERROR_LOGGING:   {}", flag(config::ERROR_LOGGING));
        println!("Default level:   {}", config::DEFAULT_LEVEL);
        println!("Active level:    {}", logging::level());
        Ok(0)
    }
}
