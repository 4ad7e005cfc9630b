use std::env;
use std::io::{self, BufRead};
use anyhow::{Context, Result};
use clap::{Parser, command};
use palm_debug::utils::{self, DEBUG_ENV};

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Print messages to stdout when PALM_DEBUG is set",
    long_about = "Print each MESSAGE as its own line on stdout when the PALM_DEBUG environment variable is present (any value). Without MESSAGE arguments, lines are read from stdin. Output is silently dropped when the flag is absent or stdout cannot be written."
)]
struct Args {
    #[arg(short = '!', long, long_help = "Enable debug mode", default_value = "false")]
    debug: bool,

    #[arg(help = "Messages to print, one per line")]
    messages: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var(DEBUG_ENV, "1");
        }
    }

    if !args.messages.is_empty() {
        for message in &args.messages {
            utils::debug(message);
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read message from stdin")?;
        utils::debug(&line);
    }

    Ok(())
}
