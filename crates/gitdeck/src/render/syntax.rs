use std::sync::OnceLock;

use eframe::egui::{self, Color32, FontFamily, FontId};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::theme::Theme;

fn syntax_set() -> &'static SyntaxSet {
    static SET: OnceLock<SyntaxSet> = OnceLock::new();
    SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    static SET: OnceLock<ThemeSet> = OnceLock::new();
    SET.get_or_init(ThemeSet::load_defaults)
}

/// Build a highlighted layout job for `code`. Unknown languages and
/// highlighter failures fall back to a single plain section.
pub fn highlight_code(
    code: &str,
    language: Option<&str>,
    font_size: f32,
    theme: &Theme,
    max_width: f32,
) -> egui::text::LayoutJob {
    let font_id = FontId::new(font_size, FontFamily::Monospace);
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;

    let ss = syntax_set();
    let syntax = language.and_then(|lang| ss.find_syntax_by_token(lang));
    let syn_theme = theme_set().themes.get(theme.syntect_theme_name());

    let (Some(syntax), Some(syn_theme)) = (syntax, syn_theme) else {
        plain(&mut job, code, font_id, theme.code_foreground);
        return job;
    };

    let mut highlighter = HighlightLines::new(syntax, syn_theme);
    let mut sections = Vec::new();
    for line in LinesWithEndings::from(code) {
        match highlighter.highlight_line(line, ss) {
            Ok(ranges) => sections.extend(ranges),
            Err(err) => {
                tracing::warn!("syntax highlighting failed: {err}");
                let mut fallback = egui::text::LayoutJob::default();
                fallback.wrap.max_width = max_width;
                plain(&mut fallback, code, font_id, theme.code_foreground);
                return fallback;
            }
        }
    }

    for (style, text) in sections {
        let fg = style.foreground;
        let format = egui::text::TextFormat {
            font_id: font_id.clone(),
            color: Color32::from_rgb(fg.r, fg.g, fg.b),
            ..Default::default()
        };
        job.append(text, 0.0, format);
    }
    job
}

fn plain(job: &mut egui::text::LayoutJob, code: &str, font_id: FontId, color: Color32) {
    job.append(
        code,
        0.0,
        egui::text::TextFormat {
            font_id,
            color,
            ..Default::default()
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_code_is_split_into_colored_sections() {
        let job = highlight_code(
            "git rebase -i HEAD~3\n# squash\n",
            Some("bash"),
            20.0,
            &Theme::dark(),
            800.0,
        );
        assert_eq!(job.text, "git rebase -i HEAD~3\n# squash\n");
        assert!(job.sections.len() > 1);
    }

    #[test]
    fn unknown_language_renders_plain() {
        let theme = Theme::dark();
        let job = highlight_code("hello", Some("no-such-lang"), 20.0, &theme, 800.0);
        assert_eq!(job.sections.len(), 1);
        assert_eq!(job.sections[0].format.color, theme.code_foreground);
    }
}
