use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;

/// House palette (Catppuccin-ish dark, with the studio's signal blue).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,
    pub text: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
    pub cyan: Color,
    /// Bar colors for the audio-reactive visualizer
    pub amber: Color,
}

impl Theme {
    pub fn default() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),
            surface: Color::Rgb(49, 50, 68),
            overlay: Color::Rgb(108, 112, 134),
            text: Color::Rgb(205, 214, 244),
            red: Color::Rgb(243, 139, 168),
            green: Color::Rgb(166, 227, 161),
            yellow: Color::Rgb(249, 226, 175),
            blue: Color::Rgb(0, 212, 255),
            magenta: Color::Rgb(203, 166, 247),
            cyan: Color::Rgb(0, 255, 255),
            amber: Color::Rgb(255, 183, 0),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

pub fn theme_path() -> std::path::PathBuf {
    crate::app::config::AppConfig::config_dir().join("theme.toml")
}

/// Load the theme file, writing the default on first run. Parse failures
/// fall back to the default palette.
pub fn load_current_theme() -> Theme {
    let path = theme_path();

    if path.exists() {
        if let Ok(content) = fs::read_to_string(&path) {
            if let Ok(wrapper) = toml::from_str::<ThemeFile>(&content) {
                return wrapper.theme;
            }
            if let Ok(theme) = toml::from_str::<Theme>(&content) {
                return theme;
            }
        }
    } else {
        let default_theme = Theme::default();
        let wrapper = ThemeFile {
            theme: default_theme.clone(),
        };
        if let Ok(toml_str) = toml::to_string_pretty(&wrapper) {
            let _ = fs::write(&path, toml_str);
        }
        return default_theme;
    }

    Theme::default()
}
