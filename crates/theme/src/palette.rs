use crate::colors::Color;
use std::path::Path;
use tracing::{debug, warn};

/// The 16 ANSI terminal colours, used for section accents, the memory bar
/// and the low-load ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub black:          Color,
    pub red:            Color,
    pub green:          Color,
    pub yellow:         Color,
    pub blue:           Color,
    pub magenta:        Color,
    pub cyan:           Color,
    pub white:          Color,
    pub bright_black:   Color,
    pub bright_red:     Color,
    pub bright_green:   Color,
    pub bright_yellow:  Color,
    pub bright_blue:    Color,
    pub bright_magenta: Color,
    pub bright_cyan:    Color,
    pub bright_white:   Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            black:          Color::rgb(0x00, 0x00, 0x00),
            red:            Color::rgb(0xff, 0x00, 0x00),
            green:          Color::rgb(0x00, 0xff, 0x00),
            yellow:         Color::rgb(0xff, 0xff, 0x00),
            blue:           Color::rgb(0x00, 0x00, 0xff),
            magenta:        Color::rgb(0xff, 0x00, 0xff),
            cyan:           Color::rgb(0x00, 0xff, 0xff),
            white:          Color::rgb(0xff, 0xff, 0xff),
            bright_black:   Color::rgb(0x55, 0x55, 0x55),
            bright_red:     Color::rgb(0xff, 0x55, 0x55),
            bright_green:   Color::rgb(0x55, 0xff, 0x55),
            bright_yellow:  Color::rgb(0xff, 0xff, 0x55),
            bright_blue:    Color::rgb(0x55, 0x55, 0xff),
            bright_magenta: Color::rgb(0xff, 0x55, 0xff),
            bright_cyan:    Color::rgb(0x55, 0xff, 0xff),
            bright_white:   Color::rgb(0xff, 0xff, 0xff),
        }
    }
}

impl Palette {
    /// Load an Alacritty-style theme file.  Infallible: a missing or invalid
    /// file yields the default palette, and any missing or unparsable entry
    /// keeps its default colour.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("theme '{}' unreadable: {e}; using default palette", path.display());
                return Self::default();
            }
        };
        Self::parse(&raw).unwrap_or_else(|| {
            warn!("theme '{}' is not valid TOML; using default palette", path.display());
            Self::default()
        })
    }

    /// Parse a theme document; `None` only when it is not TOML at all.
    pub fn parse(raw: &str) -> Option<Self> {
        let doc: toml::Table = toml::from_str(raw).ok()?;
        let colors = doc.get("colors").and_then(toml::Value::as_table);
        let group = |name: &str| colors.and_then(|c| c.get(name)).and_then(toml::Value::as_table);
        let normal = group("normal");
        let bright = group("bright");

        let pick = |table: Option<&toml::Table>, key: &str, fallback: Color| {
            table
                .and_then(|t| t.get(key))
                .and_then(toml::Value::as_str)
                .and_then(Color::from_hex)
                .unwrap_or(fallback)
        };

        let d = Self::default();
        Some(Self {
            black:          pick(normal, "black", d.black),
            red:            pick(normal, "red", d.red),
            green:          pick(normal, "green", d.green),
            yellow:         pick(normal, "yellow", d.yellow),
            blue:           pick(normal, "blue", d.blue),
            magenta:        pick(normal, "magenta", d.magenta),
            cyan:           pick(normal, "cyan", d.cyan),
            white:          pick(normal, "white", d.white),
            bright_black:   pick(bright, "black", d.bright_black),
            bright_red:     pick(bright, "red", d.bright_red),
            bright_green:   pick(bright, "green", d.bright_green),
            bright_yellow:  pick(bright, "yellow", d.bright_yellow),
            bright_blue:    pick(bright, "blue", d.bright_blue),
            bright_magenta: pick(bright, "magenta", d.bright_magenta),
            bright_cyan:    pick(bright, "cyan", d.bright_cyan),
            bright_white:   pick(bright, "white", d.bright_white),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_alacritty_theme() {
        let palette = Palette::parse(
            r##"
            [colors.normal]
            red = "0xe78284"
            green = "#a6d189"

            [colors.bright]
            black = "0x626880"
            "##,
        )
        .unwrap();
        assert_eq!(palette.red, Color::rgb(0xe7, 0x82, 0x84));
        assert_eq!(palette.green, Color::rgb(0xa6, 0xd1, 0x89));
        assert_eq!(palette.bright_black, Color::rgb(0x62, 0x68, 0x80));
        // untouched entries keep their defaults
        assert_eq!(palette.blue, Palette::default().blue);
    }

    #[test]
    fn bad_entries_fall_back_per_color() {
        let palette = Palette::parse("[colors.normal]\nred = \"not a color\"").unwrap();
        assert_eq!(palette.red, Palette::default().red);
    }

    #[test]
    fn invalid_document_is_none() {
        assert!(Palette::parse("[colors").is_none());
    }

    #[test]
    fn missing_file_is_default() {
        assert_eq!(Palette::load(Path::new("/nonexistent/theme.toml")), Palette::default());
    }
}
