//! CLI implementation for `pride filter`
//!
//! Colorizes test runner output read from stdin.

use crate::config;
use crate::error::Result;
use crate::output::filter::filter;
use crate::output::{PaletteChoice, PrideOutput};
use clap::Args;
use std::io;

#[derive(Args)]
#[command(after_help = "\
Examples:
  ruby -Itest test/all.rb | pride filter        Colorize piped output
  pride filter --palette basic < run.log        Force the 16-color palette")]
pub struct FilterArgs {
    /// Palette: auto (default, from TERM), basic, or gradient
    #[arg(long, value_enum)]
    pub palette: Option<PaletteChoice>,
}

pub fn execute(args: &FilterArgs) -> Result<()> {
    let palette = config::load_palette(args.palette)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut sink = PrideOutput::new(stdout.lock(), palette);

    super::ignore_broken_pipe(filter(stdin.lock(), &mut sink).map_err(Into::into))
}
