//! CLI implementation for `pride run`
//!
//! Runs a test command and colorizes its stdout as it streams. Stderr and
//! stdin are inherited untouched.

use crate::config;
use crate::error::{Error, Result};
use crate::output::filter::filter;
use crate::output::{PaletteChoice, PrideOutput};
use clap::Args;
use std::io::{self, BufReader};
use std::process::{self, Command, ExitStatus, Stdio};

#[derive(Args)]
#[command(after_help = "\
Examples:
  pride run -- ruby -Itest test/all.rb          Run a suite with pride
  pride run --palette gradient -- rake test     Force the 256-color gradient")]
pub struct RunArgs {
    /// Palette: auto (default, from TERM), basic, or gradient
    #[arg(long, value_enum)]
    pub palette: Option<PaletteChoice>,

    /// Command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Exit code to report for a finished child
///
/// Signal deaths have no code and are reported as 1.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

pub fn execute(args: &RunArgs) -> Result<()> {
    let (program, program_args) = args
        .command
        .split_first()
        .ok_or_else(|| Error::Command("No command given".to_string()))?;

    let palette = config::load_palette(args.palette)?;

    log::debug!("spawning {} {:?}", program, program_args);
    let mut child = Command::new(program)
        .args(program_args)
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|e| Error::Command(format!("Failed to start '{}': {}", program, e)))?;

    let child_stdout = child
        .stdout
        .take()
        .ok_or_else(|| Error::Command(format!("No stdout captured from '{}'", program)))?;

    let stdout = io::stdout();
    let mut sink = PrideOutput::new(stdout.lock(), palette);
    let streamed = super::ignore_broken_pipe(
        filter(BufReader::new(child_stdout), &mut sink).map_err(Into::into),
    );

    let status = child.wait()?;
    streamed?;

    let code = exit_code(status);
    log::debug!("'{}' exited with {}", program, code);
    if code != 0 {
        process::exit(code);
    }
    Ok(())
}
