use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::config::Config;
use crate::deck::{Deck, DeckVariant};

#[derive(Debug, Serialize)]
struct Outline<'a> {
    deck: DeckVariant,
    title: &'a str,
    slides: Vec<OutlineEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct OutlineEntry<'a> {
    number: usize,
    kind: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagram: Option<&'a str>,
}

fn outline(deck: &Deck) -> Outline<'static> {
    Outline {
        deck: deck.variant,
        title: deck.title,
        slides: deck
            .slides
            .iter()
            .enumerate()
            .map(|(i, slide)| OutlineEntry {
                number: i + 1,
                kind: slide.kind(),
                title: slide.title(),
                subtitle: slide.subtitle(),
                diagram: slide.diagram().map(|d| d.name()),
            })
            .collect(),
    }
}

pub fn run(deck: Option<DeckVariant>, json: bool) -> Result<()> {
    let variant = deck
        .or_else(|| Config::load_or_default().deck())
        .unwrap_or_default();
    let outline = outline(&variant.deck());

    if json {
        println!("{}", serde_json::to_string_pretty(&outline)?);
        return Ok(());
    }

    println!(
        "{} {}",
        outline.title.bold(),
        format!("({} slides)", outline.slides.len()).dimmed()
    );
    for entry in &outline.slides {
        let mut line = format!(
            "{}  {}",
            format!("{:02}", entry.number).cyan(),
            entry.title
        );
        if let Some(diagram) = entry.diagram {
            line.push_str(&format!("  {}", format!("[{diagram}]").yellow()));
        }
        println!("{line}");
        if let Some(subtitle) = entry.subtitle {
            println!("    {}", subtitle.dimmed());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_numbers_every_slide() {
        let outline = outline(&DeckVariant::Visual.deck());
        assert_eq!(outline.slides.len(), 17);
        assert_eq!(outline.slides[0].number, 1);
        assert_eq!(outline.slides[16].kind, "thank-you");
    }

    #[test]
    fn json_names_diagrams() {
        let json = serde_json::to_value(outline(&DeckVariant::Full.deck())).unwrap();
        assert_eq!(json["deck"], "full");
        assert_eq!(json["slides"][2]["diagram"], "git-flow");
        assert!(json["slides"][0].get("diagram").is_none());
    }
}
