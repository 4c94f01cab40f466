//! Window furniture drawn over every slide: backdrop glows, navigation bar,
//! fullscreen button, toast and the shortcut overlay.

use std::time::Instant;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, pos2, vec2};

use crate::deck::Icon;
use crate::navigation::Navigator;
use crate::render::{Action, icons};
use crate::theme::Theme;

const TOAST_FADE_START: f32 = 1.0;
const TOAST_DURATION: f32 = 1.5;

/// Short status message that fades out on its own.
pub struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            start: now,
        }
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        if elapsed < TOAST_FADE_START {
            1.0
        } else if elapsed < TOAST_DURATION {
            1.0 - (elapsed - TOAST_FADE_START) / (TOAST_DURATION - TOAST_FADE_START)
        } else {
            0.0
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start).as_secs_f32() >= TOAST_DURATION
    }
}

/// Soft colour blooms in two corners of the slide.
pub fn draw_background(ui: &egui::Ui, theme: &Theme, rect: Rect) {
    let painter = ui.painter();
    let radius = rect.width().max(rect.height()) * 0.2;
    let blooms = [
        (pos2(rect.right() - rect.width() * 0.1, rect.top() + rect.height() * 0.1), theme.glow_a),
        (pos2(rect.left() + rect.width() * 0.1, rect.bottom() - rect.height() * 0.1), theme.glow_b),
    ];
    for (center, color) in blooms {
        for step in 0..6 {
            let r = radius * (1.0 - step as f32 * 0.13);
            painter.circle_filled(center, r, Theme::with_opacity(color, 0.35));
        }
    }
}

/// Circular icon button. Disabled buttons are dimmed and ignore the pointer.
/// Returns whether it was clicked.
#[allow(clippy::too_many_arguments)]
fn round_button(
    ui: &egui::Ui,
    theme: &Theme,
    id: &str,
    center: Pos2,
    diameter: f32,
    icon: Icon,
    icon_size: f32,
    enabled: bool,
) -> bool {
    let rect = Rect::from_center_size(center, vec2(diameter, diameter));
    let (hovered, clicked) = if enabled {
        let response = ui
            .interact(rect, egui::Id::new(id), Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        (response.hovered(), response.clicked())
    } else {
        (false, false)
    };

    let dim = if enabled { 1.0 } else { 0.2 };
    let fill = if hovered { theme.border } else { theme.surface };
    let painter = ui.painter();
    painter.circle_filled(center, diameter / 2.0, Theme::with_opacity(fill, dim));
    painter.circle_stroke(
        center,
        diameter / 2.0,
        Stroke::new(1.0, Theme::with_opacity(theme.border, dim)),
    );
    let color = Theme::with_opacity(theme.foreground, 0.7 * dim);
    for shape in icons::shapes(icon, center, icon_size, color) {
        painter.add(shape);
    }
    clicked
}

/// Previous/next buttons, progress bar and slide counter along the bottom.
/// `bar` is the displayed fill of the progress bar, already animated.
pub fn draw_navigation(
    ui: &egui::Ui,
    theme: &Theme,
    rect: Rect,
    scale: f32,
    nav: &Navigator,
    bar: f32,
) -> Option<Action> {
    let s = |v: f32| v * scale;
    let button = s(48.0);
    let cy = rect.bottom() - s(40.0) - button / 2.0;
    let left = rect.left() + s(48.0);
    let right = rect.right() - s(48.0);

    let mut action = None;
    let prev = pos2(left + button / 2.0, cy);
    if round_button(ui, theme, "gitdeck-nav-prev", prev, button, Icon::ChevronLeft, s(24.0), !nav.is_first()) {
        action = Some(Action::Previous);
    }
    let next = pos2(prev.x + button + s(16.0), cy);
    if round_button(ui, theme, "gitdeck-nav-next", next, button, Icon::ChevronRight, s(24.0), !nav.is_last()) {
        action = Some(Action::Next);
    }

    let painter = ui.painter();
    let counter = painter.layout_no_wrap(
        nav.counter_label(),
        FontId::monospace(s(18.0)),
        Theme::with_opacity(theme.foreground, 0.4),
    );
    let counter_rect = Align2::RIGHT_CENTER.anchor_size(pos2(right, cy), counter.size());
    painter.galley(counter_rect.min, counter, theme.foreground);

    let track_left = next.x + button / 2.0 + s(40.0);
    let track_right = counter_rect.left() - s(40.0);
    if track_right > track_left {
        let h = s(2.0).max(1.0);
        let track = Rect::from_min_max(pos2(track_left, cy - h / 2.0), pos2(track_right, cy + h / 2.0));
        painter.rect_filled(track, h, Theme::with_opacity(theme.foreground, 0.05));
        let fill = Rect::from_min_size(track.min, vec2(track.width() * bar.clamp(0.0, 1.0), h));
        painter.rect_filled(fill, h, theme.accent);
    }
    action
}

/// Top-right toggle whose icon follows the fullscreen flag.
pub fn draw_fullscreen_button(
    ui: &egui::Ui,
    theme: &Theme,
    rect: Rect,
    scale: f32,
    active: bool,
) -> Option<Action> {
    let size = 48.0 * scale;
    let center = pos2(rect.right() - 40.0 * scale - size / 2.0, rect.top() + 40.0 * scale + size / 2.0);
    let icon = if active { Icon::Minimize } else { Icon::Maximize };
    round_button(ui, theme, "gitdeck-fullscreen", center, size, icon, 20.0 * scale, true)
        .then_some(Action::ToggleFullscreen)
}

pub fn draw_toast(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32, toast: &Toast, now: Instant) {
    let opacity = toast.opacity(now);
    if opacity <= 0.0 {
        return;
    }
    let painter = ui.painter();
    let color = Theme::with_opacity(theme.foreground, opacity * 0.9);
    let bg = Theme::with_opacity(theme.code_background, opacity * 0.9);
    let galley = painter.layout_no_wrap(toast.message.clone(), FontId::proportional(20.0 * scale), color);
    let padding = 16.0 * scale;
    let size = galley.size() + vec2(padding, padding) * 2.0;
    let toast_rect = Rect::from_min_size(
        pos2(rect.center().x - size.x / 2.0, rect.bottom() - 160.0 * scale),
        size,
    );
    painter.rect_filled(toast_rect, 8.0 * scale, bg);
    painter.galley(toast_rect.min + vec2(padding, padding), galley, color);
}

const SHORTCUTS: [(&str, &str); 13] = [
    ("\u{2192} / \u{2193} / Space", "Next slide"),
    ("\u{2190} / \u{2191}", "Previous slide"),
    ("Home / End", "First / last slide"),
    ("F", "Toggle fullscreen"),
    ("T", "Cycle transition"),
    ("D", "Toggle theme"),
    ("P", "Play diagram"),
    ("R", "Reset diagram"),
    ("W", "Switch merge / rebase"),
    ("H", "Toggle this help"),
    ("Q", "Quit"),
    ("Esc", "\u{00d7}2 exit"),
    ("Click", "Buttons and diagram controls"),
];

pub fn draw_hud(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    let bg = Theme::with_opacity(theme.code_background, 0.9);
    let text_color = Theme::with_opacity(Color32::WHITE, 0.85);
    let key_color = Theme::with_opacity(theme.accent, 0.9);

    let padding = 24.0 * scale;
    let line_height = 32.0 * scale;
    let hud_height = SHORTCUTS.len() as f32 * line_height + padding * 2.0 + 40.0 * scale;
    let hud_width = 400.0 * scale;
    let hud_rect = Rect::from_center_size(rect.center(), vec2(hud_width, hud_height));
    painter.rect_filled(hud_rect, 12.0 * scale, bg);

    painter.text(
        pos2(hud_rect.left() + padding, hud_rect.top() + padding),
        Align2::LEFT_TOP,
        "Keyboard Shortcuts",
        FontId::proportional(20.0 * scale),
        Color32::WHITE,
    );

    let mut y = hud_rect.top() + padding + 40.0 * scale;
    for (key, desc) in SHORTCUTS {
        painter.text(
            pos2(hud_rect.left() + padding, y),
            Align2::LEFT_TOP,
            key,
            FontId::monospace(15.0 * scale),
            key_color,
        );
        painter.text(
            pos2(hud_rect.left() + padding + 190.0 * scale, y),
            Align2::LEFT_TOP,
            desc,
            FontId::proportional(15.0 * scale),
            text_color,
        );
        y += line_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn toast_holds_then_fades() {
        let t0 = Instant::now();
        let toast = Toast::new("Press Esc again to exit", t0);
        assert_eq!(toast.message, "Press Esc again to exit");
        assert_eq!(toast.opacity(t0), 1.0);
        assert_eq!(toast.opacity(t0 + Duration::from_millis(900)), 1.0);
        let mid = toast.opacity(t0 + Duration::from_millis(1250));
        assert!((mid - 0.5).abs() < 1e-3, "{mid}");
        assert!(!toast.is_expired(t0 + Duration::from_millis(1400)));
    }

    #[test]
    fn toast_expires_invisible() {
        let t0 = Instant::now();
        let toast = Toast::new("x", t0);
        let end = t0 + Duration::from_millis(1500);
        assert!(toast.is_expired(end));
        assert_eq!(toast.opacity(end), 0.0);
    }
}
