use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::deck::DeckVariant;
use crate::render::transition::TransitionKind;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let exists = path.exists();
    let config = if exists {
        Config::load_from(&path)?
    } else {
        Config::default()
    };

    println!("{} {}", "Config file:".bold(), path.display());
    if !exists {
        println!("  {}", "(not created yet, showing defaults)".dimmed());
    }
    println!();

    let unset = |value: Option<String>, default: &str| match value {
        Some(v) => v.normal(),
        None => format!("{default} (default)").dimmed(),
    };
    println!("{}", "defaults".bold());
    println!("  theme:       {}", unset(config.theme().map(str::to_string), "dark"));
    println!(
        "  transition:  {}",
        unset(
            config.transition().map(|t| t.name().to_string()),
            TransitionKind::default().name()
        )
    );
    println!(
        "  deck:        {}",
        unset(config.deck().map(|d| d.to_string()), DeckVariant::default().name())
    );
    println!(
        "  start_slide: {}",
        unset(config.start_slide().map(|n| n.to_string()), "1")
    );
    println!("{}", "fonts".bold());
    println!(
        "  cjk:         {}",
        unset(
            config.cjk_font().map(|p| p.display().to_string()),
            "system search"
        )
    );
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {} = {}",
        "Set".green().bold(),
        key.bold(),
        value
    );
    println!("  {}", format!("saved to {}", path.display()).dimmed());
    Ok(())
}
