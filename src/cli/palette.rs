//! CLI implementation for `pride palette`
//!
//! Shows which palette would be used and what it looks like.

use crate::cli::output_format::OutputFormat;
use crate::config;
use crate::error::Result;
use crate::output::{Palette, PaletteChoice, PaletteKind};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

#[derive(Args)]
#[command(after_help = "\
Examples:
  pride palette                           Show the palette for this terminal
  pride palette --palette gradient        Preview the gradient
  pride palette --format json             Machine-readable palette")]
pub struct PaletteArgs {
    /// Palette: auto (default, from TERM), basic, or gradient
    #[arg(long, value_enum)]
    pub palette: Option<PaletteChoice>,

    /// Output format: human (default) or json
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Output for `pride palette`
#[derive(Debug, Serialize)]
pub struct PaletteOutput {
    pub kind: PaletteKind,
    pub size: usize,
    pub colors: Vec<u8>,
}

impl From<&Palette> for PaletteOutput {
    fn from(palette: &Palette) -> Self {
        Self {
            kind: palette.kind(),
            size: palette.len(),
            colors: palette.colors().to_vec(),
        }
    }
}

/// Render one swatch per palette entry, wrapping every `per_row` entries
pub fn format_swatches(palette: &Palette, per_row: usize) -> String {
    let mut output = String::new();
    for (i, code) in palette.colors().iter().enumerate() {
        if i > 0 && i % per_row == 0 {
            output.push('\n');
        }
        output.push_str(&palette.paint(i, "\u{2588}\u{2588}"));
        output.push_str(&format!(" {:>3}  ", code));
    }
    output.push('\n');
    output
}

pub fn execute(args: &PaletteArgs) -> Result<()> {
    let palette = config::load_palette(args.palette)?;
    let output = PaletteOutput::from(&palette);

    if args.format.is_machine_readable() {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} {} ({} colors)",
            "Palette:".bold(),
            output.kind,
            output.size
        );
        println!();
        print!("{}", format_swatches(&palette, 6));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_output_basic() {
        let output = PaletteOutput::from(&Palette::basic());
        assert_eq!(output.kind, PaletteKind::Basic);
        assert_eq!(output.size, 6);
        assert_eq!(output.colors, vec![31, 32, 33, 34, 35, 36]);
    }

    #[test]
    fn test_palette_output_json() {
        let output = PaletteOutput::from(&Palette::gradient());
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"kind\":\"gradient\""));
        assert!(json.contains("\"size\":42"));
    }

    #[test]
    fn test_swatches_rows() {
        let swatches = format_swatches(&Palette::gradient(), 6);
        assert_eq!(swatches.lines().count(), 7);
        assert!(swatches.starts_with("\x1b[38;5;154m"));
    }
}
