pub mod chrome;
pub mod diagrams;
pub mod icons;
pub mod layouts;
pub mod syntax;
pub mod text;
pub mod transition;

use std::cell::{Cell, RefCell};
use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use eframe::egui::{self, Align2, Color32, FontId, Galley, Pos2, Rect, Sense, Shape, Stroke};

use crate::deck::Slide;
use crate::theme::Theme;

use diagrams::{DiagramState, Workflow};

/// Mount age, in seconds, at which every entrance animation has finished.
pub const SETTLED_AGE: f32 = 60.0;

/// Something a click inside a slide asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    ToggleFullscreen,
    Play,
    Reset,
    SelectWorkflow(Workflow),
}

/// Everything a slide renderer needs for one frame.
///
/// Drawing goes through this context so a layout can be run once in measure
/// mode (nothing painted, no interaction) to find its height, then again at its
/// final position.
pub struct SlideCtx<'a> {
    pub ui: &'a egui::Ui,
    pub theme: &'a Theme,
    pub scale: f32,
    /// Seconds since the slide was mounted.
    pub age: f32,
    pub now: Instant,
    painter: egui::Painter,
    id: egui::Id,
    interactive: bool,
    measuring: Cell<bool>,
    actions: Rc<RefCell<Vec<Action>>>,
}

impl<'a> SlideCtx<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ui: &'a egui::Ui,
        theme: &'a Theme,
        id: egui::Id,
        scale: f32,
        age: f32,
        now: Instant,
        opacity: f32,
        interactive: bool,
    ) -> Self {
        let mut painter = ui.painter().clone();
        painter.set_opacity(opacity.clamp(0.0, 1.0));
        Self {
            ui,
            theme,
            scale,
            age,
            now,
            painter,
            id,
            interactive,
            measuring: Cell::new(false),
            actions: Rc::default(),
        }
    }

    /// Scale a length given in 1920x1080 reference pixels.
    pub fn s(&self, v: f32) -> f32 {
        v * self.scale
    }

    /// Run `f` without painting or registering clicks.
    pub fn measure<R>(&self, f: impl FnOnce() -> R) -> R {
        let was = self.measuring.replace(true);
        let out = f();
        self.measuring.set(was);
        out
    }

    /// A copy drawing at `factor` of the current opacity. Clicks land in the
    /// same action queue.
    pub fn faded(&self, factor: f32) -> SlideCtx<'a> {
        let mut painter = self.painter.clone();
        painter.multiply_opacity(factor.clamp(0.0, 1.0));
        SlideCtx {
            ui: self.ui,
            theme: self.theme,
            scale: self.scale,
            age: self.age,
            now: self.now,
            painter,
            id: self.id,
            interactive: self.interactive,
            measuring: Cell::new(self.measuring.get()),
            actions: Rc::clone(&self.actions),
        }
    }

    pub fn take_actions(&self) -> Vec<Action> {
        self.actions.take()
    }

    pub fn add(&self, shape: impl Into<Shape>) {
        if !self.measuring.get() {
            self.painter.add(shape);
        }
    }

    pub fn rect_filled(&self, rect: Rect, radius: f32, color: Color32) {
        self.add(Shape::rect_filled(rect, radius, color));
    }

    pub fn rect_stroke(&self, rect: Rect, radius: f32, stroke: impl Into<Stroke>) {
        self.add(Shape::rect_stroke(
            rect,
            radius,
            stroke,
            egui::StrokeKind::Inside,
        ));
    }

    /// Filled, outlined panel in the deck's card style.
    pub fn panel(&self, rect: Rect, radius: f32, fill: Color32, border: Color32) {
        self.rect_filled(rect, radius, fill);
        self.rect_stroke(rect, radius, Stroke::new(self.s(1.0).max(1.0), border));
    }

    pub fn circle_filled(&self, center: Pos2, radius: f32, color: Color32) {
        self.add(Shape::circle_filled(center, radius, color));
    }

    pub fn circle_stroke(&self, center: Pos2, radius: f32, stroke: impl Into<Stroke>) {
        self.add(Shape::circle_stroke(center, radius, stroke));
    }

    pub fn line_segment(&self, points: [Pos2; 2], stroke: impl Into<Stroke>) {
        self.add(Shape::line_segment(points, stroke));
    }

    pub fn line(&self, points: Vec<Pos2>, stroke: impl Into<Stroke>) {
        if points.len() >= 2 {
            let stroke: Stroke = stroke.into();
            self.add(Shape::line(points, stroke));
        }
    }

    pub fn layout(&self, text: &str, font: FontId, color: Color32, wrap_width: f32) -> Arc<Galley> {
        self.painter
            .layout(text.to_string(), font, color, wrap_width.max(1.0))
    }

    pub fn layout_no_wrap(&self, text: &str, font: FontId, color: Color32) -> Arc<Galley> {
        self.painter.layout_no_wrap(text.to_string(), font, color)
    }

    pub fn layout_job(&self, job: egui::text::LayoutJob) -> Arc<Galley> {
        self.painter.layout_job(job)
    }

    pub fn galley(&self, pos: Pos2, galley: Arc<Galley>, fallback: Color32) {
        self.add(Shape::galley(pos, galley, fallback));
    }

    /// Single-line text anchored at `pos`. Returns the occupied rect.
    pub fn text(&self, pos: Pos2, anchor: Align2, text: &str, font: FontId, color: Color32) -> Rect {
        let galley = self.layout_no_wrap(text, font, color);
        let rect = anchor.anchor_size(pos, galley.size());
        self.galley(rect.min, galley, color);
        rect
    }

    /// Clickable region. Returns whether the pointer hovers it.
    pub fn button(&self, rect: Rect, key: impl Hash, action: Action) -> bool {
        if self.measuring.get() || !self.interactive {
            return false;
        }
        let response = self
            .ui
            .interact(rect, self.id.with(key), Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            tracing::debug!(?action, "slide button clicked");
            self.actions.borrow_mut().push(action);
        }
        response.hovered()
    }
}

/// Render a single slide into `rect`.
pub fn render_slide(
    ctx: &SlideCtx<'_>,
    slide: &Slide,
    rect: Rect,
    diagram: Option<&DiagramState>,
) {
    match slide {
        Slide::Hero(hero) => layouts::hero::render(ctx, hero, rect),
        Slide::Content(content) => layouts::content::render(ctx, content, rect, diagram),
        Slide::Comparison(cmp) => layouts::comparison::render(ctx, cmp, rect),
        Slide::Code(code) => layouts::code::render(ctx, code, rect),
        Slide::Principles(p) => layouts::principles::render(ctx, p, rect),
        Slide::Flow(flow) => layouts::flow::render(ctx, flow, rect),
        Slide::ThankYou => diagrams::thank_you::render(ctx, rect),
    }
}

/// Uniform scale that fits the 1920x1080 reference canvas into `rect`.
pub fn compute_scale(rect: Rect) -> f32 {
    let ref_w = 1920.0;
    let ref_h = 1080.0;
    (rect.width() / ref_w).min(rect.height() / ref_h)
}
