use colored::Colorize;
use std::process;

fn main() {
    if let Err(e) = scaffold::cli::run() {
        eprintln!("{} {}", "ERROR".red().bold(), e);
        process::exit(1);
    }
}
