//! CLI implementation for `pride demo`
//!
//! Runs a small built-in suite so the colors can be seen without a real
//! test runner. Some outcomes are deliberately bad; the command still
//! succeeds.

use crate::config;
use crate::error::Result;
use crate::output::{Palette, PaletteChoice, PrideOutput};
use crate::test::{Outcome, TestCase, TestRunner};
use clap::Args;
use std::io;

#[derive(Args)]
#[command(after_help = "\
Examples:
  pride demo                              Run the demo suite
  pride demo --palette gradient -V        Gradient colors, report skips too")]
pub struct DemoArgs {
    /// Palette: auto (default, from TERM), basic, or gradient
    #[arg(long, value_enum)]
    pub palette: Option<PaletteChoice>,

    /// Filter tests by name (can be used multiple times)
    #[arg(long, short = 'f', value_name = "PATTERN")]
    pub filter: Vec<String>,

    /// Report skipped tests as well
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

fn check(condition: bool, message: &str) -> Outcome {
    if condition {
        Outcome::Pass
    } else {
        Outcome::Failure(message.to_string())
    }
}

/// The demo suite: mostly passes, plus one of every other outcome
pub fn demo_suite() -> Vec<TestCase> {
    let mut tests = vec![
        TestCase::new("test_basic_palette_wraps", || {
            check(
                Palette::basic().color_at(6) == 31,
                "Expected the basic palette to wrap after 6 colors.",
            )
        }),
        TestCase::new("test_gradient_has_42_colors", || {
            check(
                Palette::gradient().len() == 42,
                "Expected 42 gradient colors.",
            )
        }),
        TestCase::new("test_gradient_starts_at_154", || {
            check(
                Palette::gradient().color_at(0) == 154,
                "Expected the gradient to start at 154.",
            )
        }),
    ];

    for n in 1..=9 {
        tests.push(TestCase::new(format!("test_rainbow_step_{}", n), move || {
            let palette = Palette::gradient();
            check(
                palette.color_at(n) == palette.color_at(n + palette.len()),
                "Expected the gradient to cycle.",
            )
        }));
    }

    tests.push(TestCase::new("test_deliberate_failure", || {
        Outcome::Failure("Expected the summary banner to sparkle.".to_string())
    }));
    tests.push(TestCase::new("test_deliberate_error", || {
        Outcome::Error("RuntimeError: not enough glitter".to_string())
    }));
    tests.push(TestCase::new("test_deliberate_skip", || {
        Outcome::Skip("Skipped, no unicorns available".to_string())
    }));

    tests
}

pub fn execute(args: &DemoArgs) -> Result<()> {
    let palette = config::load_palette(args.palette)?;

    let stdout = io::stdout();
    let mut sink = PrideOutput::new(stdout.lock(), palette);
    let result = TestRunner::new(&mut sink)
        .with_filters(args.filter.clone())
        .with_verbose(args.verbose)
        .run_all(&demo_suite())
        .map(|_| ());

    super::ignore_broken_pipe(result)
}
