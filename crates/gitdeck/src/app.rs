use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use eframe::egui::{self, Key};

use crate::config::Config;
use crate::deck::{Deck, DeckVariant, Slide};
use crate::error::DeckError;
use crate::fullscreen::{Fullscreen, ViewportBackend};
use crate::navigation::Navigator;
use crate::render::chrome::{self, Toast};
use crate::render::diagrams::DiagramState;
use crate::render::transition::{TransitionKind, Transitions};
use crate::render::{self, Action, SlideCtx};
use crate::theme::Theme;

/// Seconds after mounting during which entrance animations may still run.
const ENTRANCE_SECS: f32 = 4.0;

/// Rate at which the progress bar closes the gap to its target, per second.
const BAR_RATE: f32 = 8.0;
const BAR_EPSILON: f32 = 1e-3;

const ESC_WINDOW_SECS: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Slide(Action),
    First,
    Last,
    CycleTransition,
    ToggleTheme,
    ToggleHelp,
    SwitchWorkflow,
    Quit,
    Escape,
}

/// Things only the window can do, run after input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    Close,
    ToggleFullscreen,
}

const KEYMAP: [(Key, Command); 16] = [
    (Key::ArrowRight, Command::Slide(Action::Next)),
    (Key::ArrowDown, Command::Slide(Action::Next)),
    (Key::Space, Command::Slide(Action::Next)),
    (Key::ArrowLeft, Command::Slide(Action::Previous)),
    (Key::ArrowUp, Command::Slide(Action::Previous)),
    (Key::Home, Command::First),
    (Key::End, Command::Last),
    (Key::F, Command::Slide(Action::ToggleFullscreen)),
    (Key::T, Command::CycleTransition),
    (Key::D, Command::ToggleTheme),
    (Key::H, Command::ToggleHelp),
    (Key::P, Command::Slide(Action::Play)),
    (Key::R, Command::Slide(Action::Reset)),
    (Key::W, Command::SwitchWorkflow),
    (Key::Q, Command::Quit),
    (Key::Escape, Command::Escape),
];

fn command_for(key: Key) -> Option<Command> {
    KEYMAP
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, command)| *command)
}

/// State owned by a slide while it is on screen.
struct Mount {
    started: Instant,
    diagram: Option<DiagramState>,
}

impl Mount {
    fn new(slide: &Slide, now: Instant) -> Self {
        Self {
            started: now,
            diagram: slide.diagram().map(|kind| DiagramState::mount(kind, now)),
        }
    }

    fn age(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.started).as_secs_f32()
    }

    fn is_animating(&self, slide: &Slide, now: Instant) -> bool {
        self.age(now) < ENTRANCE_SECS
            || matches!(slide, Slide::ThankYou)
            || self.diagram.as_ref().is_some_and(|d| d.is_animating(now))
    }
}

struct DeckApp {
    deck: Deck,
    nav: Navigator,
    transitions: Transitions,
    fullscreen: Fullscreen,
    theme: Theme,
    mounts: BTreeMap<usize, Mount>,
    /// Displayed progress bar fill, eased towards the navigator's progress.
    bar: f32,
    last_frame: Instant,
    show_hud: bool,
    toast: Option<Toast>,
    last_esc: Option<Instant>,
}

impl DeckApp {
    fn new(
        deck: Deck,
        start: usize,
        theme: Theme,
        transition: TransitionKind,
        fullscreen: bool,
        now: Instant,
    ) -> Result<Self, DeckError> {
        let nav = Navigator::starting_at(deck.variant.name(), deck.len(), start)?;
        let mut app = Self {
            deck,
            nav,
            transitions: Transitions::new(nav.index(), transition),
            fullscreen: Fullscreen::new(fullscreen),
            theme,
            mounts: BTreeMap::new(),
            bar: nav.progress(),
            last_frame: now,
            show_hud: false,
            toast: None,
            last_esc: None,
        };
        app.sync_mounts(&[nav.index()], now);
        Ok(app)
    }

    /// Mount newly visible slides and drop the state of hidden ones.
    fn sync_mounts(&mut self, visible: &[usize], now: Instant) {
        self.mounts.retain(|index, _| visible.contains(index));
        for &index in visible {
            if let Some(slide) = self.deck.get(index) {
                self.mounts.entry(index).or_insert_with(|| {
                    tracing::debug!(index, kind = slide.kind(), "mount slide");
                    Mount::new(slide, now)
                });
            }
        }
    }

    fn current_diagram(&mut self) -> Option<&mut DiagramState> {
        self.mounts.get_mut(&self.nav.index())?.diagram.as_mut()
    }

    fn execute(&mut self, command: Command, now: Instant) -> Option<Effect> {
        match command {
            Command::Slide(Action::Next) => {
                self.nav.next();
            }
            Command::Slide(Action::Previous) => {
                self.nav.previous();
            }
            Command::Slide(Action::ToggleFullscreen) => return Some(Effect::ToggleFullscreen),
            Command::Slide(action) => {
                if let Some(diagram) = self.current_diagram() {
                    diagram.handle(action, now);
                }
            }
            Command::First => {
                self.nav.jump_to(0);
            }
            Command::Last => {
                self.nav.jump_to(self.nav.last_index());
            }
            Command::CycleTransition => {
                let kind = self.transitions.kind().cycle();
                self.transitions.set_kind(kind);
                self.toast = Some(Toast::new(format!("Transition: {}", kind.name()), now));
            }
            Command::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name), now));
            }
            Command::ToggleHelp => self.show_hud = !self.show_hud,
            Command::SwitchWorkflow => {
                if let Some(diagram) = self.current_diagram() {
                    if let DiagramState::GitFlow { workflow, .. } = &*diagram {
                        let next = workflow.toggled();
                        diagram.handle(Action::SelectWorkflow(next), now);
                    }
                }
            }
            Command::Quit => return Some(Effect::Close),
            Command::Escape => {
                if let Some(last) = self.last_esc {
                    if now.saturating_duration_since(last).as_secs_f32() < ESC_WINDOW_SECS {
                        return Some(Effect::Close);
                    }
                }
                self.last_esc = Some(now);
                self.toast = Some(Toast::new("Press Esc again to exit", now));
            }
        }
        None
    }

    /// Ease the progress bar towards the current slide.
    fn advance_bar(&mut self, dt: f32) {
        let target = self.nav.progress();
        let step = 1.0 - (-BAR_RATE * dt.max(0.0)).exp();
        self.bar += (target - self.bar) * step;
        if (target - self.bar).abs() < BAR_EPSILON {
            self.bar = target;
        }
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.transitions.is_animating()
            || self.toast.is_some()
            || self.bar != self.nav.progress()
            || self.mounts.iter().any(|(&index, mount)| {
                self.deck
                    .get(index)
                    .is_some_and(|slide| mount.is_animating(slide, now))
            })
    }

    /// Draw the visible slides back to front. Returns the clicks they received.
    fn draw_slides(&self, ui: &egui::Ui, rect: egui::Rect, now: Instant) -> Vec<Action> {
        let scale = render::compute_scale(rect);
        let settled = !self.transitions.is_animating();
        let mut actions = Vec::new();
        for (index, pose) in self.transitions.visible(now) {
            let (Some(slide), Some(mount)) = (self.deck.get(index), self.mounts.get(&index)) else {
                continue;
            };
            let ctx = SlideCtx::new(
                ui,
                &self.theme,
                egui::Id::new(("gitdeck-slide", index)),
                scale,
                mount.age(now),
                now,
                pose.opacity,
                settled && index == self.nav.index(),
            );
            let slide_rect = rect.translate(egui::vec2(pose.offset * scale, 0.0));
            render::render_slide(&ctx, slide, slide_rect, mount.diagram.as_ref());
            actions.extend(ctx.take_actions());
        }
        actions
    }

    fn apply_effect(&mut self, ctx: &egui::Context, effect: Effect, now: Instant) {
        match effect {
            Effect::Close => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            Effect::ToggleFullscreen => {
                if self
                    .fullscreen
                    .toggle(&mut ViewportBackend::new(ctx))
                    .is_err()
                {
                    self.toast = Some(Toast::new("Fullscreen is not available", now));
                }
            }
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.fullscreen.sync(ctx.input(|i| i.viewport().fullscreen));

        // Viewport commands must not be sent from inside ctx.input().
        let mut effects: Vec<Effect> = Vec::new();
        let commands: Vec<Command> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => command_for(*key),
                    _ => None,
                })
                .collect()
        });
        for command in commands {
            effects.extend(self.execute(command, now));
        }
        for effect in effects.drain(..) {
            self.apply_effect(ctx, effect, now);
        }

        self.transitions.tick(self.nav.index(), now);
        let visible: Vec<usize> = self
            .transitions
            .visible(now)
            .into_iter()
            .map(|(index, _)| index)
            .collect();
        self.sync_mounts(&visible, now);
        for mount in self.mounts.values_mut() {
            if let Some(diagram) = mount.diagram.as_mut() {
                diagram.tick(now);
            }
        }
        self.advance_bar(dt);
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }

        let bg = self.theme.background;
        let mut actions = Vec::new();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let scale = render::compute_scale(rect);
                ui.painter().rect_filled(rect, 0.0, bg);
                chrome::draw_background(ui, &self.theme, rect);

                actions.extend(self.draw_slides(ui, rect, now));
                actions.extend(chrome::draw_navigation(
                    ui,
                    &self.theme,
                    rect,
                    scale,
                    &self.nav,
                    self.bar,
                ));
                actions.extend(chrome::draw_fullscreen_button(
                    ui,
                    &self.theme,
                    rect,
                    scale,
                    self.fullscreen.is_active(),
                ));

                if let Some(toast) = &self.toast {
                    chrome::draw_toast(ui, &self.theme, rect, scale, toast, now);
                }
                if self.show_hud {
                    chrome::draw_hud(ui, &self.theme, rect, scale);
                }
            });

        for action in actions {
            effects.extend(self.execute(Command::Slide(action), now));
        }
        for effect in effects {
            self.apply_effect(ctx, effect, now);
        }

        if self.is_animating(now) {
            ctx.request_repaint();
        }
    }
}

/// Window icon: a small branch graph drawn into a pixel buffer.
fn app_icon() -> egui::IconData {
    const SIZE: u32 = 64;
    let background = image::Rgba([0x0B, 0x12, 0x20, 0xFF]);
    let blue = image::Rgba([0x3B, 0x82, 0xF6, 0xFF]);
    let purple = image::Rgba([0xA8, 0x55, 0xF7, 0xFF]);

    let nodes = [((20.0, 14.0), blue), ((20.0, 50.0), blue), ((44.0, 26.0), purple)];
    let edges = [((20.0, 14.0), (20.0, 50.0)), ((44.0, 26.0), (20.0, 42.0))];

    let image = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let p = (x as f32 + 0.5, y as f32 + 0.5);
        for (center, color) in nodes {
            if distance(p, center) <= 7.0 {
                return color;
            }
        }
        if edges.iter().any(|&(a, b)| segment_distance(p, a, b) <= 2.5) {
            return blue;
        }
        background
    });
    egui::IconData {
        rgba: image.into_raw(),
        width: SIZE,
        height: SIZE,
    }
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

fn segment_distance(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len2).clamp(0.0, 1.0)
    };
    distance(p, (a.0 + t * dx, a.1 + t * dy))
}

/// Present a deck. CLI values override the config file.
pub fn run(deck: Option<DeckVariant>, windowed: bool, start_slide: Option<usize>) -> anyhow::Result<()> {
    let config = Config::load_or_default();
    let variant = deck.or_else(|| config.deck()).unwrap_or_default();
    let deck = variant.deck();
    let start = start_slide
        .or_else(|| config.start_slide())
        .map(|n| n.saturating_sub(1))
        .unwrap_or(0);
    let theme = Theme::from_name(config.theme().unwrap_or("dark"));
    let transition = config.transition().unwrap_or_default();
    tracing::info!(deck = %variant, slides = deck.len(), start = start + 1, "presenting");

    let app = DeckApp::new(deck, start, theme, transition, !windowed, Instant::now())?;

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(deck.title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(deck.title)
    };
    let options = eframe::NativeOptions {
        viewport: viewport.with_icon(Arc::new(app_icon())),
        ..Default::default()
    };

    let font = config.cjk_font().map(Path::to_path_buf);
    eframe::run_native(
        deck.title,
        options,
        Box::new(move |cc| {
            crate::fonts::install(&cc.egui_ctx, font.as_deref());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::diagrams::Workflow;
    use std::time::Duration;

    fn app(variant: DeckVariant, start: usize, now: Instant) -> DeckApp {
        DeckApp::new(
            variant.deck(),
            start,
            Theme::dark(),
            TransitionKind::Slide,
            false,
            now,
        )
        .unwrap()
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(command_for(Key::Space), Some(Command::Slide(Action::Next)));
        assert_eq!(command_for(Key::ArrowDown), Some(Command::Slide(Action::Next)));
        assert_eq!(command_for(Key::ArrowUp), Some(Command::Slide(Action::Previous)));
        assert_eq!(command_for(Key::F), Some(Command::Slide(Action::ToggleFullscreen)));
        assert_eq!(command_for(Key::A), None);
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let now = Instant::now();
        let mut app = app(DeckVariant::Visual, 0, now);
        assert_eq!(app.execute(Command::Slide(Action::Previous), now), None);
        assert_eq!(app.nav.index(), 0);
        app.execute(Command::Last, now);
        assert_eq!(app.nav.index(), 16);
        app.execute(Command::Slide(Action::Next), now);
        assert_eq!(app.nav.index(), 16);
        app.execute(Command::First, now);
        assert_eq!(app.nav.index(), 0);
    }

    #[test]
    fn start_slide_is_clamped() {
        let app = app(DeckVariant::Visual, 99, Instant::now());
        assert_eq!(app.nav.index(), 16);
        assert!(app.mounts.contains_key(&16));
    }

    #[test]
    fn escape_twice_within_a_second_quits() {
        let t0 = Instant::now();
        let mut app = app(DeckVariant::Full, 0, t0);
        assert_eq!(app.execute(Command::Escape, t0), None);
        assert!(app.toast.is_some());
        assert_eq!(
            app.execute(Command::Escape, t0 + Duration::from_millis(500)),
            Some(Effect::Close)
        );
    }

    #[test]
    fn slow_second_escape_only_warns_again() {
        let t0 = Instant::now();
        let mut app = app(DeckVariant::Full, 0, t0);
        app.execute(Command::Escape, t0);
        assert_eq!(app.execute(Command::Escape, t0 + Duration::from_millis(1500)), None);
    }

    #[test]
    fn unmounting_drops_diagram_state() {
        let now = Instant::now();
        let mut app = app(DeckVariant::Full, 2, now);
        assert!(app.current_diagram().is_some());
        app.sync_mounts(&[3], now);
        assert!(!app.mounts.contains_key(&2));
        app.sync_mounts(&[2], now);
        assert!(matches!(
            app.current_diagram(),
            Some(DiagramState::GitFlow {
                workflow: Workflow::Merge,
                ..
            })
        ));
    }

    #[test]
    fn w_switches_the_flow_workflow() {
        let now = Instant::now();
        let mut app = app(DeckVariant::Full, 2, now);
        app.execute(Command::SwitchWorkflow, now);
        assert!(matches!(
            app.current_diagram(),
            Some(DiagramState::GitFlow {
                workflow: Workflow::Rebase,
                ..
            })
        ));
        app.execute(Command::SwitchWorkflow, now);
        assert!(matches!(
            app.current_diagram(),
            Some(DiagramState::GitFlow {
                workflow: Workflow::Merge,
                ..
            })
        ));
    }

    #[test]
    fn play_starts_the_current_diagram() {
        let now = Instant::now();
        let mut app = app(DeckVariant::Full, 2, now);
        app.execute(Command::Slide(Action::Play), now);
        let later = now + Duration::from_millis(100);
        assert!(app.current_diagram().is_some_and(|d| d.is_animating(later)));
    }

    #[test]
    fn fullscreen_and_quit_are_window_effects() {
        let now = Instant::now();
        let mut app = app(DeckVariant::Full, 0, now);
        assert_eq!(
            app.execute(Command::Slide(Action::ToggleFullscreen), now),
            Some(Effect::ToggleFullscreen)
        );
        assert_eq!(app.execute(Command::Quit, now), Some(Effect::Close));
    }

    #[test]
    fn theme_and_transition_toggle() {
        let now = Instant::now();
        let mut app = app(DeckVariant::Full, 0, now);
        app.execute(Command::ToggleTheme, now);
        assert!(!app.theme.is_dark());
        app.execute(Command::CycleTransition, now);
        assert_eq!(app.transitions.kind(), TransitionKind::Fade);
        app.execute(Command::ToggleHelp, now);
        assert!(app.show_hud);
    }

    #[test]
    fn progress_bar_eases_to_its_target() {
        let now = Instant::now();
        let mut app = app(DeckVariant::Visual, 0, now);
        app.execute(Command::Last, now);
        app.advance_bar(0.05);
        assert!(app.bar > 1.0 / 17.0 && app.bar < 1.0);
        for _ in 0..100 {
            app.advance_bar(0.05);
        }
        assert_eq!(app.bar, 1.0);
    }

    #[test]
    fn icon_has_a_node_in_the_middle_of_the_trunk() {
        let icon = app_icon();
        assert_eq!((icon.width, icon.height), (64, 64));
        let at = |x: usize, y: usize| {
            let i = (y * 64 + x) * 4;
            [icon.rgba[i], icon.rgba[i + 1], icon.rgba[i + 2]]
        };
        assert_eq!(at(20, 14), [0x3B, 0x82, 0xF6]);
        assert_eq!(at(2, 2), [0x0B, 0x12, 0x20]);
    }
}
