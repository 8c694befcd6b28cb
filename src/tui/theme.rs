use ratatui::style::Color;

use crate::model::config::UiConfig;

/// Parsed color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    /// Drop indicator, add hints, anything that should pop.
    pub accent: Color,
    pub selection_bg: Color,
    /// The row being dragged renders in this (washed-out) pair.
    pub drag_fg: Color,
    pub drag_bg: Color,
    pub danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x14),
            text: Color::Rgb(0xC8, 0xC8, 0xD0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6A, 0x6A, 0x78),
            accent: Color::Rgb(0x5A, 0x96, 0xFA),
            selection_bg: Color::Rgb(0x2A, 0x2A, 0x38),
            drag_fg: Color::Rgb(0x55, 0x55, 0x60),
            drag_bg: Color::Rgb(0x1A, 0x1A, 0x20),
            danger: Color::Rgb(0xE0, 0x50, 0x50),
        }
    }
}

/// Parse a hex color string like "#5A96FA" into an RGB Color.
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Apply `[ui.colors]` overrides on top of the defaults.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "accent" => theme.accent = color,
                    "selection_bg" => theme.selection_bg = color,
                    "drag_fg" => theme.drag_fg = color,
                    "drag_bg" => theme.drag_bg = color,
                    "danger" => theme.danger = color,
                    _ => {}
                }
            }
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_color_accepts_rgb() {
        assert_eq!(
            parse_hex_color("#5A96FA"),
            Some(Color::Rgb(0x5A, 0x96, 0xFA))
        );
        assert_eq!(parse_hex_color("5A96FA"), None);
        assert_eq!(parse_hex_color("#5A96"), None);
        assert_eq!(parse_hex_color("#ZZZZZZ"), None);
    }

    #[test]
    fn from_config_overrides_known_slots() {
        let mut ui = UiConfig::default();
        ui.colors.insert("accent".into(), "#112233".into());
        ui.colors.insert("unknown".into(), "#445566".into());
        let theme = Theme::from_config(&ui);
        assert_eq!(theme.accent, Color::Rgb(0x11, 0x22, 0x33));
        // Untouched slots keep their defaults.
        assert_eq!(theme.text, Theme::default().text);
    }
}
