use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::deck::DeckVariant;
use crate::render::transition::TransitionKind;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "gitdeck";

/// Keys accepted by `gitdeck config set`.
pub const KEYS: [&str; 5] = [
    "defaults.theme",
    "defaults.transition",
    "defaults.deck",
    "defaults.start_slide",
    "fonts.cjk",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck: Option<String>,

    /// 1-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_slide: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontsConfig {
    /// Font file with CJK coverage, tried before the system locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cjk: Option<PathBuf>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `gitdeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Missing or unreadable files yield the defaults; a broken file is
    /// reported but never stops the deck.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("using default config: {err}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, format!("# gitdeck configuration\n{yaml}"))?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults_mut().theme = Some(value.to_string());
            }
            "defaults.transition" => {
                match value {
                    "slide" | "fade" | "none" => {}
                    _ => anyhow::bail!(
                        "Invalid transition: {value}. Must be 'slide', 'fade', or 'none'."
                    ),
                }
                self.defaults_mut().transition = Some(value.to_string());
            }
            "defaults.deck" => {
                let deck: DeckVariant = value.parse()?;
                self.defaults_mut().deck = Some(deck.name().to_string());
            }
            "defaults.start_slide" => {
                let slide = match value.parse::<usize>() {
                    Ok(n) if n >= 1 => n,
                    _ => anyhow::bail!(
                        "Invalid start_slide: {value}. Must be a slide number starting at 1."
                    ),
                };
                self.defaults_mut().start_slide = Some(slide);
            }
            "fonts.cjk" => {
                if value.is_empty() {
                    anyhow::bail!("fonts.cjk needs a font file path.");
                }
                self.fonts.get_or_insert_with(FontsConfig::default).cjk = Some(PathBuf::from(value));
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {}", KEYS.join(", ")),
        }
        Ok(())
    }

    fn defaults_mut(&mut self) -> &mut DefaultsConfig {
        self.defaults.get_or_insert_with(DefaultsConfig::default)
    }

    pub fn theme(&self) -> Option<&str> {
        self.defaults.as_ref()?.theme.as_deref()
    }

    pub fn transition(&self) -> Option<TransitionKind> {
        let name = self.defaults.as_ref()?.transition.as_deref()?;
        Some(TransitionKind::from_name(name))
    }

    /// Configured deck; an unknown name is logged and ignored.
    pub fn deck(&self) -> Option<DeckVariant> {
        let name = self.defaults.as_ref()?.deck.as_deref()?;
        name.parse()
            .inspect_err(|err| tracing::warn!("ignoring configured deck: {err}"))
            .ok()
    }

    pub fn start_slide(&self) -> Option<usize> {
        self.defaults.as_ref()?.start_slide
    }

    pub fn cjk_font(&self) -> Option<&Path> {
        self.fonts.as_ref()?.cjk.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_the_default() {
        assert_eq!(Config::parse("{}").unwrap(), Config::default());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::parse(
            "defaults:\n  theme: light\n  transition: fade\n  deck: visual\n  start_slide: 3\nfonts:\n  cjk: /fonts/noto.otf\n",
        )
        .unwrap();
        assert_eq!(config.theme(), Some("light"));
        assert_eq!(config.transition(), Some(TransitionKind::Fade));
        assert_eq!(config.deck(), Some(DeckVariant::Visual));
        assert_eq!(config.start_slide(), Some(3));
        assert_eq!(config.cjk_font(), Some(Path::new("/fonts/noto.otf")));
    }

    #[test]
    fn set_validates_values() {
        let mut config = Config::default();
        config.set("defaults.theme", "dark").unwrap();
        config.set("defaults.transition", "none").unwrap();
        config.set("defaults.deck", "visual").unwrap();
        config.set("defaults.start_slide", "5").unwrap();
        assert!(config.set("defaults.theme", "sepia").is_err());
        assert!(config.set("defaults.transition", "spatial").is_err());
        assert!(config.set("defaults.deck", "mini").is_err());
        assert!(config.set("defaults.start_slide", "0").is_err());
        assert!(config.set("defaults.start_slide", "two").is_err());
        assert_eq!(config.theme(), Some("dark"));
        assert_eq!(config.start_slide(), Some(5));
    }

    #[test]
    fn unknown_key_lists_the_valid_ones() {
        let err = Config::default().set("defaults.aspect", "16:9").unwrap_err();
        let msg = err.to_string();
        for key in KEYS {
            assert!(msg.contains(key), "{msg}");
        }
    }

    #[test]
    fn unknown_configured_deck_is_ignored() {
        let config = Config::parse("defaults:\n  deck: mini\n").unwrap();
        assert_eq!(config.deck(), None);
    }

    #[test]
    fn saved_file_reloads() {
        let dir = std::env::temp_dir().join(format!("gitdeck-config-{}", std::process::id()));
        let path = dir.join(FILENAME);
        let mut config = Config::default();
        config.set("fonts.cjk", "/tmp/font.ttc").unwrap();
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
