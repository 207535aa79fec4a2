use clap::{Parser, Subcommand};
use pride::cli;
use pride::utils::output::print_error;
use std::process;

#[derive(Parser)]
#[command(name = "pride")]
#[command(version)]
#[command(about = "Show your testing pride: rainbow-colored test output")]
#[command(
    long_about = "pride colorizes test runner progress output: passing dots become rainbow \
stars, failures and errors are highlighted, and \"Finished tests\" becomes fabulous."
)]
#[command(after_help = "\
Getting started:
  pride run -- ruby -Itest test/all.rb    Run a test command with pride
  ruby test/all.rb | pride filter         Colorize piped output
  pride palette                           Preview the palette for this terminal
  pride demo                              Run the built-in demo suite")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a test command and colorize its output
    #[command(display_order = 1)]
    Run(cli::run::RunArgs),
    /// Colorize test output read from stdin
    #[command(display_order = 2)]
    Filter(cli::filter::FilterArgs),
    /// Show the selected palette
    #[command(display_order = 10)]
    Palette(cli::palette::PaletteArgs),
    /// Run a built-in demo suite
    #[command(display_order = 11)]
    Demo(cli::demo::DemoArgs),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run(args) => cli::run::execute(args),
        Commands::Filter(args) => cli::filter::execute(args),
        Commands::Palette(args) => cli::palette::execute(args),
        Commands::Demo(args) => cli::demo::execute(args),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        process::exit(1);
    }
}
