use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use colored::Colorize;
use eframe::egui;

use crate::config::Config;
use crate::deck::{Deck, DeckVariant};
use crate::render::diagrams::DiagramState;
use crate::render::{self, SETTLED_AGE, SlideCtx, chrome};
use crate::theme::Theme;

/// Frames drawn before a slide is captured, so font and layout changes land.
const WARMUP_FRAMES: u8 = 2;

struct ExportApp {
    deck: Deck,
    theme: Theme,
    output_dir: PathBuf,
    current_slide: usize,
    frames: u8,
    screenshot_requested: bool,
    saved: Arc<AtomicUsize>,
    done: bool,
}

impl ExportApp {
    fn new(deck: Deck, theme: Theme, output_dir: PathBuf, saved: Arc<AtomicUsize>) -> Self {
        Self {
            deck,
            theme,
            output_dir,
            current_slide: 0,
            frames: 0,
            screenshot_requested: false,
            saved,
            done: false,
        }
    }
}

impl eframe::App for ExportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.done {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Screenshot of the previous frame
        let mut got_screenshot = false;
        ctx.input(|i| {
            for event in &i.events {
                if let egui::Event::Screenshot { image, .. } = event {
                    let path = self.output_dir.join(file_name(self.current_slide));
                    if save_color_image(image, &path) {
                        self.saved.fetch_add(1, Ordering::Relaxed);
                        eprintln!("  {} {}", "Saved".green(), path.display());
                    }
                    got_screenshot = true;
                }
            }
        });

        if got_screenshot {
            self.screenshot_requested = false;
            self.frames = 0;
            self.current_slide += 1;
            if self.current_slide >= self.deck.len() {
                self.done = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        }

        let bg = self.theme.background;
        let now = Instant::now();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);
                chrome::draw_background(ui, &self.theme, rect);

                let Some(slide) = self.deck.get(self.current_slide) else {
                    return;
                };
                let diagram = slide.diagram().map(|kind| DiagramState::settled(kind, now));
                let slide_ctx = SlideCtx::new(
                    ui,
                    &self.theme,
                    egui::Id::new(("gitdeck-export", self.current_slide)),
                    render::compute_scale(rect),
                    SETTLED_AGE,
                    now,
                    1.0,
                    false,
                );
                render::render_slide(&slide_ctx, slide, rect, diagram.as_ref());
            });

        self.frames = self.frames.saturating_add(1);
        if !self.screenshot_requested && self.frames > WARMUP_FRAMES {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            self.screenshot_requested = true;
        }

        ctx.request_repaint();
    }
}

/// `slide-01.png` for the first slide.
pub fn file_name(index: usize) -> String {
    format!("slide-{:02}.png", index + 1)
}

fn save_color_image(image: &egui::ColorImage, path: &Path) -> bool {
    let width = image.width() as u32;
    let height = image.height() as u32;
    let pixels: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|c| [c.r(), c.g(), c.b(), c.a()])
        .collect();

    match image::save_buffer(path, &pixels, width, height, image::ColorType::Rgba8) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!("failed to save {}: {err}", path.display());
            false
        }
    }
}

pub fn run(deck: Option<DeckVariant>, output_dir: PathBuf, width: u32, height: u32) -> anyhow::Result<()> {
    if width == 0 || height == 0 {
        anyhow::bail!("Export size must be non-zero, got {width}x{height}");
    }
    let config = Config::load_or_default();
    let variant = deck.or_else(|| config.deck()).unwrap_or_default();
    let deck = variant.deck();
    let theme = Theme::from_name(config.theme().unwrap_or("dark"));

    std::fs::create_dir_all(&output_dir)?;
    eprintln!(
        "Exporting {} slides of the {} deck to {} ({}x{})",
        deck.len(),
        variant.to_string().bold(),
        output_dir.display(),
        width,
        height,
    );

    let title = format!("{} export", deck.title);
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([width as f32, height as f32])
        .with_title(&title)
        .with_decorations(false);
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let font = config.cjk_font().map(Path::to_path_buf);
    let dir = output_dir.clone();
    let total = deck.len();
    let saved = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&saved);
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            crate::fonts::install(&cc.egui_ctx, font.as_deref());
            Ok(Box::new(ExportApp::new(deck, theme, dir, counter)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    check_saved(saved.load(Ordering::Relaxed), total)?;
    eprintln!("{} {total} slides", "Export complete:".green().bold());
    Ok(())
}

/// Fail unless every slide made it to disk.
fn check_saved(saved: usize, total: usize) -> anyhow::Result<()> {
    if saved < total {
        anyhow::bail!("Export incomplete: saved {saved} of {total} slides");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_one_based_and_padded() {
        assert_eq!(file_name(0), "slide-01.png");
        assert_eq!(file_name(16), "slide-17.png");
        assert_eq!(file_name(99), "slide-100.png");
    }

    #[test]
    fn missing_slides_fail_the_export() {
        assert!(check_saved(17, 17).is_ok());
        let err = check_saved(0, 17).unwrap_err();
        assert_eq!(err.to_string(), "Export incomplete: saved 0 of 17 slides");
        assert!(check_saved(16, 17).is_err());
    }

    #[test]
    fn failed_writes_are_not_counted_as_saved() {
        let image = egui::ColorImage::new([2, 2], vec![egui::Color32::RED; 4]);
        let missing = std::env::temp_dir()
            .join(format!("gitdeck-export-missing-{}", std::process::id()))
            .join("slide-01.png");
        assert!(!save_color_image(&image, &missing));

        let path = std::env::temp_dir().join(format!("gitdeck-export-{}.png", std::process::id()));
        assert!(save_color_image(&image, &path));
        std::fs::remove_file(path).unwrap();
    }
}
