//! Statically declared slide tables for each deck variant.

mod full;
mod visual;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// Which revision of the talk to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckVariant {
    #[default]
    Full,
    Visual,
}

impl DeckVariant {
    pub fn all() -> &'static [DeckVariant] {
        &[DeckVariant::Full, DeckVariant::Visual]
    }

    /// `"full, visual"`, for messages listing the accepted names.
    pub fn names() -> String {
        Self::all()
            .iter()
            .map(|v| v.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Visual => "visual",
        }
    }

    pub fn deck(self) -> Deck {
        match self {
            Self::Full => Deck {
                variant: self,
                title: "从混乱到线性：Rebase + Merge 的团队实践",
                slides: full::SLIDES,
            },
            Self::Visual => Deck {
                variant: self,
                title: "从混乱到线性：Rebase + Merge 的团队实践 (图解版)",
                slides: visual::SLIDES,
            },
        }
    }
}

impl FromStr for DeckVariant {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|v| v.name() == s)
            .ok_or_else(|| DeckError::UnknownVariant(s.to_string()))
    }
}

impl fmt::Display for DeckVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Deck {
    pub variant: DeckVariant,
    pub title: &'static str,
    pub slides: &'static [Slide],
}

impl Deck {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn get(&self, index: usize) -> Option<&'static Slide> {
        self.slides.get(index)
    }
}

/// Named accent colours; the theme decides the actual shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Blue,
    Purple,
    Pink,
    Green,
    Lime,
    Cyan,
    Yellow,
    Orange,
    Red,
    Gray,
}

/// Line icons drawn with the painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Zap,
    GitBranch,
    GitMerge,
    GitCommit,
    RotateCcw,
    History,
    CheckCircle,
    XCircle,
    AlertTriangle,
    AlertCircle,
    ShieldAlert,
    ShieldCheck,
    CheckSquare,
    Terminal,
    Plus,
    Code,
    RefreshCw,
    Combine,
    ArrowRight,
    Info,
    Heart,
    Star,
    Sparkles,
    Flame,
    Skull,
    Activity,
    Play,
    ChevronLeft,
    ChevronRight,
    Maximize,
    Minimize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    GitFlow,
    Chaos,
    StaticComparison { minimal: bool },
    LinearGraph,
}

impl DiagramKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::GitFlow => "git-flow",
            Self::Chaos => "chaos",
            Self::StaticComparison { .. } => "static-comparison",
            Self::LinearGraph => "linear-graph",
        }
    }
}

#[derive(Debug)]
pub enum Slide {
    Hero(HeroSlide),
    Content(ContentSlide),
    Comparison(ComparisonSlide),
    Code(CodeSlide),
    Principles(PrinciplesSlide),
    Flow(FlowSlide),
    ThankYou,
}

impl Slide {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Hero(_) => "hero",
            Self::Content(_) => "content",
            Self::Comparison(_) => "comparison",
            Self::Code(_) => "code",
            Self::Principles(_) => "principles",
            Self::Flow(_) => "flow",
            Self::ThankYou => "thank-you",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Hero(s) => s.badge,
            Self::Content(s) => s.title,
            Self::Comparison(s) => s.title,
            Self::Code(s) => s.title,
            Self::Principles(s) => s.title,
            Self::Flow(s) => s.title,
            Self::ThankYou => "谢谢",
        }
    }

    pub fn subtitle(&self) -> Option<&'static str> {
        match self {
            Self::Content(s) => s.subtitle,
            Self::Code(s) => s.subtitle,
            _ => None,
        }
    }

    /// The animated diagram embedded in this slide, if any.
    pub fn diagram(&self) -> Option<DiagramKind> {
        match self {
            Self::Content(s) => s.blocks.iter().find_map(|b| match b {
                Block::Diagram(kind) => Some(*kind),
                _ => None,
            }),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct HeroSlide {
    pub badge: &'static str,
    pub title: &'static [&'static str],
    pub subtitle: &'static [&'static str],
    pub start_label: &'static str,
    pub hints: &'static [&'static str],
}

#[derive(Debug)]
pub struct ContentSlide {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub bullets: &'static [Bullet],
    pub blocks: &'static [Block],
    pub centered: bool,
}

#[derive(Debug)]
pub struct Bullet {
    pub icon: Option<(Icon, Tone)>,
    pub text: &'static str,
    pub sub: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Dot,
    Check,
    Cross,
}

#[derive(Debug)]
pub enum Block {
    Diagram(DiagramKind),
    /// Monospace panel; whitespace is preserved.
    Terminal(&'static str),
    Callout {
        icon: Icon,
        tone: Tone,
        text: &'static str,
    },
    Note {
        icon: Icon,
        title: &'static str,
        body: &'static str,
    },
    Columns(&'static [Column]),
    Cards(&'static [Card]),
    Slogan {
        text: &'static str,
        caption: &'static str,
    },
    Rules(&'static [Rule]),
    List {
        marker: Marker,
        items: &'static [&'static str],
    },
    Checks(&'static [&'static str]),
    Emblem(Icon, Tone),
    Text(&'static str),
    Footnote(&'static str),
}

#[derive(Debug)]
pub struct Column {
    pub title: &'static str,
    pub tone: Tone,
    pub icon: Option<Icon>,
    /// Step number shown in a filled circle before the title.
    pub badge: Option<&'static str>,
    pub boxed: bool,
    pub body: &'static [Block],
}

#[derive(Debug)]
pub struct Card {
    pub icon: Option<Icon>,
    pub tone: Tone,
    pub title: &'static str,
    pub body: &'static str,
    pub mono: bool,
}

#[derive(Debug)]
pub struct Rule {
    pub number: &'static str,
    pub tone: Tone,
    pub text: &'static str,
}

#[derive(Debug)]
pub struct ComparisonSlide {
    pub title: &'static str,
    pub label_header: &'static str,
    pub merge_header: &'static str,
    pub rebase_header: &'static str,
    pub rows: &'static [ComparisonRow],
    pub note: &'static str,
}

#[derive(Debug)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub merge: &'static str,
    pub rebase: &'static str,
}

#[derive(Debug)]
pub struct Table {
    pub headers: &'static [&'static str],
    pub rows: &'static [&'static [&'static str]],
}

#[derive(Debug)]
pub struct CodeSlide {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub code: &'static str,
    pub table: Option<Table>,
    pub bullets: &'static [&'static str],
}

#[derive(Debug)]
pub struct PrinciplesSlide {
    pub title: &'static str,
    pub cards: &'static [Card],
}

#[derive(Debug)]
pub struct FlowSlide {
    pub title: &'static str,
    pub steps: &'static [FlowStep],
    pub tips: &'static [Card],
}

#[derive(Debug)]
pub struct FlowStep {
    pub icon: Icon,
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_have_their_fixed_lengths() {
        assert_eq!(DeckVariant::Full.deck().len(), 23);
        assert_eq!(DeckVariant::Visual.deck().len(), 17);
    }

    #[test]
    fn variant_names_round_trip_through_from_str() {
        for v in DeckVariant::all() {
            assert_eq!(v.name().parse::<DeckVariant>(), Ok(*v));
        }
        assert_eq!(
            "mini".parse::<DeckVariant>(),
            Err(DeckError::UnknownVariant("mini".to_string()))
        );
        assert_eq!(DeckVariant::names(), "full, visual");
    }

    #[test]
    fn every_slide_has_a_title() {
        for v in DeckVariant::all() {
            for (i, slide) in v.deck().slides.iter().enumerate() {
                assert!(!slide.title().is_empty(), "{v} slide {}", i + 1);
            }
        }
    }

    #[test]
    fn decks_open_with_the_hero() {
        for v in DeckVariant::all() {
            assert!(matches!(v.deck().slides[0], Slide::Hero(_)));
        }
    }

    #[test]
    fn visual_deck_embeds_every_diagram() {
        let deck = DeckVariant::Visual.deck();
        let kinds: Vec<&str> = deck
            .slides
            .iter()
            .filter_map(|s| s.diagram())
            .map(DiagramKind::name)
            .collect();
        for name in ["git-flow", "chaos", "static-comparison", "linear-graph"] {
            assert!(kinds.contains(&name), "missing {name}");
        }
        assert!(matches!(deck.slides.last(), Some(Slide::ThankYou)));
    }

    #[test]
    fn full_deck_has_the_flow_visualizer_on_slide_three() {
        let deck = DeckVariant::Full.deck();
        assert_eq!(deck.slides[2].diagram(), Some(DiagramKind::GitFlow));
    }
}
