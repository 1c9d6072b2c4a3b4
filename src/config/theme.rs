use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub sidebar: SidebarStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
            sidebar: SidebarStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub background: HexColor,
    pub foreground: HexColor,
    pub accent: HexColor,
    pub muted: HexColor,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: HexColor::new("#1a1b26"),
            foreground: HexColor::new("#c0caf5"),
            accent: HexColor::new("#bb9af7"),
            muted: HexColor::new("#565f89"),
        }
    }
}

/// Colors for the sidebar button attributes (`default`, `idle`, `selected`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarStyle {
    pub item_fg: HexColor,
    pub item_bg: HexColor,
    pub badge_fg: HexColor,
    pub badge_bg: HexColor,
    pub selected_fg: HexColor,
    pub selected_bg: HexColor,
    pub use_bold_selected: bool,
}

impl Default for SidebarStyle {
    fn default() -> Self {
        Self {
            item_fg: HexColor::new("#c0caf5"),
            item_bg: HexColor::new("#1a1b26"),
            badge_fg: HexColor::new("#e0af68"),
            badge_bg: HexColor::new("#1a1b26"),
            selected_fg: HexColor::new("#1a1b26"),
            selected_bg: HexColor::new("#7aa2f7"),
            use_bold_selected: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn new(hex: &str) -> Self {
        Self(hex.to_string())
    }

    pub fn to_color(&self) -> Color {
        self.parse_hex().unwrap_or(Color::Reset)
    }

    fn parse_hex(&self) -> Option<Color> {
        let hex = self.0.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::Rgb(r, g, b))
            }
            // Short form: each nibble doubles up, #abc == #aabbcc
            3 => {
                let mut channels = [0u8; 3];
                for (slot, digit) in channels.iter_mut().zip(hex.chars()) {
                    let nibble = digit.to_digit(16)? as u8;
                    *slot = nibble * 17;
                }
                Some(Color::Rgb(channels[0], channels[1], channels[2]))
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self("#ffffff".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parsing() {
        let color = HexColor::new("#ff0000");
        assert_eq!(color.to_color(), Color::Rgb(255, 0, 0));

        let color = HexColor::new("#00ff00");
        assert_eq!(color.to_color(), Color::Rgb(0, 255, 0));

        let color = HexColor::new("#0000ff");
        assert_eq!(color.to_color(), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_short_hex_color_parsing() {
        assert_eq!(HexColor::new("#123").to_color(), Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(HexColor::new("#fff").to_color(), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_invalid_hex_falls_back_to_reset() {
        assert_eq!(HexColor::new("ff0000").to_color(), Color::Reset);
        assert_eq!(HexColor::new("#ff00").to_color(), Color::Reset);
        assert_eq!(HexColor::new("#gg0000").to_color(), Color::Reset);
    }

    #[test]
    fn test_theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.name, "default");
        assert!(theme.sidebar.use_bold_selected);
    }

    #[test]
    fn test_theme_serialization() {
        let theme = Theme::default();
        let toml_str = toml::to_string_pretty(&theme).unwrap();
        let parsed: Theme = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.name, theme.name);
        assert_eq!(parsed.sidebar.badge_fg, theme.sidebar.badge_fg);
    }
}
