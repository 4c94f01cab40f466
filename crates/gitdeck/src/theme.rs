use eframe::egui::Color32;

use crate::deck::Tone;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub faint: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    /// Translucent fill for cards and panels.
    pub surface: Color32,
    pub border: Color32,
    pub code_background: Color32,
    pub code_foreground: Color32,
    pub glow_a: Color32,
    pub glow_b: Color32,
    pub h1_size: f32,
    pub h2_size: f32,
    pub h3_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    pub code_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::BLACK,
            foreground: Color32::from_rgb(0xE5, 0xE7, 0xEB),
            muted: Color32::from_rgb(0x9C, 0xA3, 0xAF),
            faint: Color32::from_rgb(0x6B, 0x72, 0x80),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x3B, 0x82, 0xF6),
            surface: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 13),
            border: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 26),
            code_background: Color32::from_rgb(0x11, 0x18, 0x27),
            code_foreground: Color32::from_rgb(0x93, 0xC5, 0xFD),
            glow_a: Color32::from_rgba_unmultiplied(0x3B, 0x82, 0xF6, 22),
            glow_b: Color32::from_rgba_unmultiplied(0xA8, 0x55, 0xF7, 22),
            h1_size: 88.0,
            h2_size: 64.0,
            h3_size: 32.0,
            body_size: 30.0,
            small_size: 20.0,
            code_size: 20.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xF8, 0xFA, 0xFC),
            foreground: Color32::from_rgb(0x1F, 0x29, 0x37),
            muted: Color32::from_rgb(0x4B, 0x55, 0x63),
            faint: Color32::from_rgb(0x9C, 0xA3, 0xAF),
            heading_color: Color32::from_rgb(0x0F, 0x17, 0x2A),
            accent: Color32::from_rgb(0x25, 0x63, 0xEB),
            surface: Color32::from_rgba_unmultiplied(0x0F, 0x17, 0x2A, 10),
            border: Color32::from_rgba_unmultiplied(0x0F, 0x17, 0x2A, 31),
            code_background: Color32::from_rgb(0x1E, 0x29, 0x3B),
            code_foreground: Color32::from_rgb(0xBF, 0xDB, 0xFE),
            glow_a: Color32::from_rgba_unmultiplied(0x3B, 0x82, 0xF6, 18),
            glow_b: Color32::from_rgba_unmultiplied(0xA8, 0x55, 0xF7, 18),
            h1_size: 88.0,
            h2_size: 64.0,
            h3_size: 32.0,
            body_size: 30.0,
            small_size: 20.0,
            code_size: 20.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "dark"
    }

    pub fn toggled(&self) -> Self {
        if self.is_dark() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        color.gamma_multiply(opacity.clamp(0.0, 1.0))
    }

    /// Opaque blend from `a` to `b`.
    pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
        let t = t.clamp(0.0, 1.0);
        let ch = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
        Color32::from_rgb(ch(a.r(), b.r()), ch(a.g(), b.g()), ch(a.b(), b.b()))
    }

    /// Return the syntect theme name that matches this presentation theme.
    /// Code panels stay dark in both themes.
    pub fn syntect_theme_name(&self) -> &str {
        "base16-ocean.dark"
    }

    /// Resolve a named tone. Dark themes use the 400 shades, light themes the 600s.
    pub fn tone(&self, tone: Tone) -> Color32 {
        let (dark, light) = match tone {
            Tone::Blue => ((0x60, 0xA5, 0xFA), (0x25, 0x63, 0xEB)),
            Tone::Purple => ((0xC0, 0x84, 0xFC), (0x93, 0x33, 0xEA)),
            Tone::Pink => ((0xF4, 0x72, 0xB6), (0xDB, 0x27, 0x77)),
            Tone::Green => ((0x4A, 0xDE, 0x80), (0x16, 0xA3, 0x4A)),
            Tone::Lime => ((0xA3, 0xE6, 0x35), (0x65, 0xA3, 0x0D)),
            Tone::Cyan => ((0x22, 0xD3, 0xEE), (0x08, 0x91, 0xB2)),
            Tone::Yellow => ((0xFA, 0xCC, 0x15), (0xCA, 0x8A, 0x04)),
            Tone::Orange => ((0xFB, 0x92, 0x3C), (0xEA, 0x58, 0x0C)),
            Tone::Red => ((0xF8, 0x71, 0x71), (0xDC, 0x26, 0x26)),
            Tone::Gray => ((0x6B, 0x72, 0x80), (0x6B, 0x72, 0x80)),
        };
        let (r, g, b) = if self.is_dark() { dark } else { light };
        Color32::from_rgb(r, g, b)
    }

    /// Translucent wash of a tone for panel backgrounds.
    pub fn tint(&self, tone: Tone, strength: f32) -> Color32 {
        Self::with_opacity(self.tone(tone), strength)
    }
}

/// Fixed colours of the diagram artwork, identical in both themes.
pub mod ink {
    use eframe::egui::Color32;

    pub const BLUE: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);
    pub const PURPLE: Color32 = Color32::from_rgb(0xA8, 0x55, 0xF7);
    pub const PINK: Color32 = Color32::from_rgb(0xEC, 0x48, 0x99);
    pub const RED: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);
    pub const GREEN: Color32 = Color32::from_rgb(0x10, 0xB9, 0x81);
    pub const LIME: Color32 = Color32::from_rgb(0x84, 0xCC, 0x16);
    pub const CYAN: Color32 = Color32::from_rgb(0x06, 0xB6, 0xD4);
    pub const AMBER: Color32 = Color32::from_rgb(0xF5, 0x9E, 0x0B);
    pub const ORANGE: Color32 = Color32::from_rgb(0xF9, 0x73, 0x16);
    pub const GRAY: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_hits_its_endpoints() {
        assert_eq!(Theme::mix(ink::BLUE, ink::RED, 0.0), ink::BLUE);
        assert_eq!(Theme::mix(ink::BLUE, ink::RED, 1.0), ink::RED);
        assert_eq!(Theme::mix(Color32::BLACK, Color32::WHITE, 0.5), Color32::from_rgb(128, 128, 128));
    }

    #[test]
    fn toggling_alternates_between_dark_and_light() {
        let dark = Theme::dark();
        assert_eq!(dark.toggled().name, "light");
        assert_eq!(dark.toggled().toggled().name, "dark");
        assert_eq!(Theme::from_name("nonsense").name, "dark");
    }

    #[test]
    fn with_opacity_scales_existing_alpha() {
        let c = Theme::with_opacity(Color32::from_rgba_unmultiplied(10, 20, 30, 200), 0.5);
        assert_eq!(c.a(), 100);
        assert_eq!(Theme::with_opacity(Color32::WHITE, 2.0).a(), 255);
    }
}
