use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let code = match &cli.command {
        Commands::Run {
            checkout_root,
            timeout,
        } => commands::handle_run(cli.json, &cli.engine, checkout_root, *timeout)?,
        Commands::Plan { checkout_root } => {
            commands::handle_plan(cli.json, &cli.engine, checkout_root)?;
            0
        }
        Commands::Doctor { checkout_root } => {
            commands::handle_doctor(cli.json, &cli.engine, checkout_root)?
        }
    };

    Ok(ExitCode::from(exit_byte(code)))
}

/// Child exit statuses are masked to a byte on unix anyway; a nonzero code
/// must never mask down to 0 and read as success.
fn exit_byte(code: i32) -> u8 {
    let byte = (code & 0xff) as u8;
    if code != 0 && byte == 0 {
        1
    } else {
        byte
    }
}
