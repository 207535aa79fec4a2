// Colored terminal output helpers
use colored::Colorize;

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
