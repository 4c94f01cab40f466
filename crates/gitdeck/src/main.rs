mod animation;
mod app;
mod cli;
mod commands;
mod config;
mod deck;
mod error;
mod fonts;
mod fullscreen;
mod geometry;
mod logging;
mod navigation;
mod render;
mod theme;

use clap::Parser;
use colored::Colorize;

use crate::logging::LogConfig;

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let log_config = LogConfig::from_verbosity(cli.verbose, cli.quiet).with_ansi(!cli.no_color);
    if let Err(err) = logging::init_logging(&log_config) {
        eprintln!("{} {err}", "warning:".yellow().bold());
    }

    if let Err(err) = cli.run() {
        eprintln!("{} {err:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}
