//! CJK fallback font. egui's bundled fonts have no Chinese glyphs, so one is
//! borrowed from the system.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui;

const FONT_NAME: &str = "gitdeck-cjk";

const SYSTEM_FONTS: &[&str] = &[
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJKsc-Regular.otf",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/droid/DroidSansFallbackFull.ttf",
    // macOS
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    // Windows
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
];

/// First existing font: the configured one, then `candidates` in order.
pub fn find_cjk_font(configured: Option<&Path>, candidates: &[&str]) -> Option<PathBuf> {
    if let Some(path) = configured {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        tracing::warn!("configured CJK font {} not found", path.display());
    }
    candidates
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Append a CJK font as the last fallback of both families. Text still
/// renders without one, with missing glyphs.
pub fn install(ctx: &egui::Context, configured: Option<&Path>) {
    let Some(path) = find_cjk_font(configured, SYSTEM_FONTS) else {
        tracing::warn!("no CJK font found; set one with `gitdeck config set fonts.cjk <path>`");
        return;
    };
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!("failed to read font {}: {err}", path.display());
            return;
        }
    };
    tracing::debug!(font = %path.display(), "loaded CJK font");

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_font(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gitdeck-{}-{name}", std::process::id()));
        std::fs::write(&path, b"not really a font").unwrap();
        path
    }

    #[test]
    fn configured_font_wins() {
        let configured = temp_font("configured.ttf");
        let system = temp_font("system.ttf");
        let candidates = [system.to_str().unwrap()];
        assert_eq!(
            find_cjk_font(Some(&configured), &candidates),
            Some(configured.clone())
        );
        std::fs::remove_file(configured).unwrap();
        std::fs::remove_file(system).unwrap();
    }

    #[test]
    fn missing_configured_font_falls_back() {
        let system = temp_font("fallback.ttf");
        let candidates = ["/definitely/not/here.ttf", system.to_str().unwrap()];
        assert_eq!(
            find_cjk_font(Some(Path::new("/nope/font.ttf")), &candidates),
            Some(system.clone())
        );
        std::fs::remove_file(system).unwrap();
    }

    #[test]
    fn nothing_found() {
        assert_eq!(find_cjk_font(None, &["/definitely/not/here.ttf"]), None);
    }
}
