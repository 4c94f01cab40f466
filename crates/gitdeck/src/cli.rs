use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::deck::DeckVariant;

#[derive(Parser)]
#[command(name = "gitdeck")]
#[command(author, version, about)]
#[command(long_about = "An animated slide deck on the rebase + merge Git workflow.\n\n\
    Examples:\n  \
    gitdeck                        Present the full deck (fullscreen)\n  \
    gitdeck --deck visual          Present the illustrated deck\n  \
    gitdeck --windowed --slide 3   Start on slide 3 in a window\n  \
    gitdeck export -o out          Save every slide as PNG")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long)]
    pub slide: Option<usize>,

    /// Deck to present: full or visual
    #[arg(long)]
    pub deck: Option<DeckVariant>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the slide titles of a deck
    Outline {
        /// Deck to list: full or visual
        #[arg(long)]
        deck: Option<DeckVariant>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Export slides as PNG images
    Export {
        /// Deck to export: full or visual
        #[arg(long)]
        deck: Option<DeckVariant>,

        /// Output directory for PNG files
        #[arg(short, long, default_value = "export")]
        output_dir: PathBuf,

        /// Export width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Export height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.deck, fonts.cjk)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Outline { deck, json }) => crate::commands::outline::run(deck, json),
            Some(Commands::Export {
                deck,
                output_dir,
                width,
                height,
            }) => crate::commands::export::run(deck, output_dir, width, height),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::version::run();
                Ok(())
            }
            None => {
                if self.slide == Some(0) {
                    anyhow::bail!("--slide counts from 1");
                }
                crate::app::run(self.deck, self.windowed, self.slide)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn present_flags_parse() {
        let cli = Cli::try_parse_from(["gitdeck", "--windowed", "--slide", "3", "--deck", "visual"]).unwrap();
        assert!(cli.windowed);
        assert_eq!(cli.slide, Some(3));
        assert_eq!(cli.deck, Some(DeckVariant::Visual));
        assert!(cli.command.is_none());
    }

    #[test]
    fn unknown_deck_is_rejected() {
        assert!(Cli::try_parse_from(["gitdeck", "--deck", "mini"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["gitdeck", "outline", "--json", "-vv", "--no-color"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Commands::Outline { json: true, deck: None })));
    }

    #[test]
    fn export_defaults() {
        let cli = Cli::try_parse_from(["gitdeck", "export"]).unwrap();
        match cli.command {
            Some(Commands::Export {
                output_dir,
                width,
                height,
                ..
            }) => {
                assert_eq!(output_dir, PathBuf::from("export"));
                assert_eq!((width, height), (1920, 1080));
            }
            _ => panic!("expected export"),
        }
    }
}
