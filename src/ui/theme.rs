//! Color themes and ANSI escape sequence generation.
//!
//! Two themes are built in, `dark` (the default) and `light`. Custom themes are
//! TOML files of the same shape:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e0def4"
//! selection_fg = "#191724"
//! selection_bg = "#9ccfd8"
//! text_normal = "#e0def4"
//! text_dim = "#6e6a86"
//! border = "#403d52"
//! search_bar_border = "#9ccfd8"
//! match_highlight_fg = "#191724"
//! match_highlight_bg = "#f6c177"
//! empty_state_fg = "#eb6f92"
//! filter_active_fg = "#f6c177"
//! price_fg = "#31748f"
//! ```

use crate::domain::error::{PropsiftError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "dark";

/// A named color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for each UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, hints and inactive filter values.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// The empty-state notice.
    pub empty_state_fg: String,

    /// Filter bar values narrowed past their wildcard.
    pub filter_active_fg: String,

    pub price_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "dark" => include_str!("../../themes/dark.toml"),
            "light" => include_str!("../../themes/light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PropsiftError::Theme`] if the file cannot be read or is not a
    /// valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            PropsiftError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| PropsiftError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Hard-coded palette used if the embedded default cannot be parsed.
    fn fallback() -> Self {
        let color = |hex: &str| hex.to_string();
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors {
                header_fg: color("#e0def4"),
                header_bg: None,
                selection_fg: color("#191724"),
                selection_bg: color("#9ccfd8"),
                text_normal: color("#e0def4"),
                text_dim: color("#6e6a86"),
                border: color("#403d52"),
                search_bar_border: color("#9ccfd8"),
                match_highlight_fg: color("#191724"),
                match_highlight_bg: color("#f6c177"),
                empty_state_fg: color("#eb6f92"),
                filter_active_fg: color("#f6c177"),
                price_fg: color("#31748f"),
            },
        }
    }

    /// Converts `#rrggbb` to RGB, falling back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::from_name("dark").map(|t| t.name), Some("dark".to_string()));
        assert_eq!(Theme::from_name("light").map(|t| t.name), Some("light".to_string()));
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn default_is_the_embedded_dark_theme() {
        assert_eq!(Theme::default(), Theme::from_name("dark").unwrap());
    }

    #[test]
    fn custom_theme_round_trips_through_a_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        let mut theme = Theme::fallback();
        theme.name = "custom".to_string();
        fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        assert_eq!(Theme::from_file(&path).unwrap(), theme);
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "name = 3").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(PropsiftError::Theme(_))));
        assert!(matches!(
            Theme::from_file(temp.path().join("missing.toml")),
            Err(PropsiftError::Theme(_))
        ));
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
        assert_eq!(Theme::bg("0000ff"), "\u{1b}[48;2;0;0;255m");
        assert_eq!(Theme::fg("bogus"), "\u{1b}[38;2;255;255;255m");
    }
}
