//! Color palettes for the picker window.

use iced::Color;

/// A Moji color theme.
#[derive(Debug, Clone)]
pub struct MojiTheme {
    pub name: &'static str,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub subtext: Color,
    pub accent: Color,
    pub border: Color,
}

impl MojiTheme {
    /// Parse a hex color string like "#cba6f7" to iced Color.
    pub fn from_hex(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() >= 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(128) as f32 / 255.0;
            let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(128) as f32 / 255.0;
            let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(128) as f32 / 255.0;
            Color::from_rgb(r, g, b)
        } else {
            Color::from_rgb(0.5, 0.5, 0.5)
        }
    }

    /// Create a color with alpha transparency.
    pub fn with_alpha(color: Color, alpha: f32) -> Color {
        Color::from_rgba(color.r, color.g, color.b, alpha)
    }

    /// Get theme by name.
    pub fn by_name(name: &str) -> Self {
        match name {
            "catppuccin-mocha" => Self::catppuccin_mocha(),
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            _ => Self::midnight(),
        }
    }

    /// Dark blue window, charcoal slots, blue selection (default).
    pub fn midnight() -> Self {
        Self {
            name: "midnight",
            background: Color::from_rgb8(18, 52, 86),
            surface: Color::from_rgb8(30, 30, 30),
            text: Color::WHITE,
            subtext: Color::from_rgb8(160, 170, 185),
            accent: Color::from_rgb8(0, 80, 160),
            border: Color::from_rgb8(0, 100, 200),
        }
    }

    /// Catppuccin Mocha theme.
    pub fn catppuccin_mocha() -> Self {
        Self {
            name: "catppuccin-mocha",
            background: Self::from_hex("#1e1e2e"),
            surface: Self::from_hex("#313244"),
            text: Self::from_hex("#cdd6f4"),
            subtext: Self::from_hex("#6c7086"),
            accent: Self::from_hex("#cba6f7"),
            border: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
        }
    }

    /// Nord theme.
    pub fn nord() -> Self {
        Self {
            name: "nord",
            background: Self::from_hex("#2e3440"),
            surface: Self::from_hex("#3b4252"),
            text: Self::from_hex("#eceff4"),
            subtext: Self::from_hex("#4c566a"),
            accent: Self::from_hex("#88c0d0"),
            border: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
        }
    }

    /// Dracula theme.
    pub fn dracula() -> Self {
        Self {
            name: "dracula",
            background: Self::from_hex("#282a36"),
            surface: Self::from_hex("#44475a"),
            text: Self::from_hex("#f8f8f2"),
            subtext: Self::from_hex("#6272a4"),
            accent: Self::from_hex("#bd93f9"),
            border: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
        }
    }
}

impl Default for MojiTheme {
    fn default() -> Self {
        Self::midnight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::THEMES;

    #[test]
    fn test_every_config_theme_resolves() {
        for name in THEMES {
            assert_eq!(MojiTheme::by_name(name).name, *name);
        }
    }

    #[test]
    fn test_unknown_theme_is_midnight() {
        assert_eq!(MojiTheme::by_name("solarized").name, "midnight");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(MojiTheme::from_hex("#ff0000"), Color::from_rgb(1.0, 0.0, 0.0));
        assert_eq!(MojiTheme::from_hex("nope"), Color::from_rgb(0.5, 0.5, 0.5));
    }
}
