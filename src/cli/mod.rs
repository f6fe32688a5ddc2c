//! Command-line front end for the standalone host.

use anyhow::Result;

pub mod args;
pub mod commands;
mod console;
pub mod exit_status;

pub use args::{Arguments, Command};
pub use console::ConsoleSink;
pub use exit_status::ExitStatus;

use commands::{apply::apply, init::init};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(command) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Apply(cmd) => apply(cmd),
        Command::Init => init(),
    }
}
