//! Theme engine — a pure function of the intent's colour mode.

use serde::Serialize;

use crate::generation::intent::{ColorMode, Intent};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontPair {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub mode: ColorMode,
    pub colors: Palette,
    pub fonts: FontPair,
}

pub const DARK_PALETTE: Palette = Palette {
    primary: "#D4AF37",
    background: "#0B0B0B",
    surface: "#111827",
    text: "#F9FAFB",
};

pub const LIGHT_PALETTE: Palette = Palette {
    primary: "#2563EB",
    background: "#FFFFFF",
    surface: "#111827",
    text: "#111827",
};

pub const FONTS: FontPair = FontPair {
    heading: "Inter",
    body: "Inter",
};

pub fn derive_theme(intent: &Intent) -> Theme {
    let colors = match intent.mode {
        ColorMode::Dark => DARK_PALETTE,
        ColorMode::Light => LIGHT_PALETTE,
    };
    Theme {
        mode: intent.mode,
        colors,
        fonts: FONTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(mode: ColorMode, industry: &str) -> Intent {
        Intent {
            industry: industry.to_string(),
            tone: "bold".to_string(),
            mode,
            wants_trust: true,
            wants_case_studies: false,
        }
    }

    #[test]
    fn test_dark_mode_yields_dark_palette() {
        let theme = derive_theme(&intent(ColorMode::Dark, "Fintech"));
        assert_eq!(theme.colors, DARK_PALETTE);
        assert_eq!(theme.mode, ColorMode::Dark);
    }

    #[test]
    fn test_light_mode_yields_light_palette() {
        let theme = derive_theme(&intent(ColorMode::Light, "Fintech"));
        assert_eq!(theme.colors, LIGHT_PALETTE);
    }

    #[test]
    fn test_theme_depends_only_on_mode() {
        let a = derive_theme(&intent(ColorMode::Dark, "Healthcare"));
        let b = derive_theme(&intent(ColorMode::Dark, "Gaming"));
        assert_eq!(a, b);
        assert_eq!(a, derive_theme(&intent(ColorMode::Dark, "Healthcare")));
    }

    #[test]
    fn test_fonts_are_constant() {
        let dark = derive_theme(&intent(ColorMode::Dark, "x"));
        let light = derive_theme(&intent(ColorMode::Light, "x"));
        assert_eq!(dark.fonts, light.fonts);
        assert_eq!(dark.fonts.heading, "Inter");
    }

    #[test]
    fn test_theme_serializes_hex_colors() {
        let json = serde_json::to_value(derive_theme(&intent(ColorMode::Light, "x"))).unwrap();
        assert_eq!(json["mode"], "light");
        assert_eq!(json["colors"]["primary"], "#2563EB");
        assert_eq!(json["fonts"]["body"], "Inter");
    }
}
