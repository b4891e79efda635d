pub mod colors;
pub mod palette;
pub mod style;
pub mod tiers;

pub use colors::Color;
pub use palette::Palette;
pub use style::{Section, SectionStyle};
pub use tiers::{core_load_color, MetricKind, Range, ThresholdTable, Tier};

use sysmon_config::{expand_tilde, ThemeConfig};

/// Compiled theme derived from [`ThemeConfig`].
///
/// Calling [`Theme::from_config`] is infallible: an unreadable theme file
/// or invalid colour strings fall back to the built-in palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub tiers:   ThresholdTable,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        let palette = if cfg.path.trim().is_empty() {
            Palette::default()
        } else {
            Palette::load(&expand_tilde(cfg.path.trim()))
        };
        Self::with_palette(palette)
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            tiers: ThresholdTable::gradient(),
        }
    }

    /// Shorthand for [`ThresholdTable::classify`] on a present value.
    #[inline]
    pub fn classify(&self, value: f64, kind: MetricKind) -> Color {
        self.tiers.classify(Some(value), kind)
    }

    /// Header accent for a tooltip section.
    pub fn section(&self, section: Section) -> SectionStyle {
        let p = &self.palette;
        match section {
            Section::Cpu     => SectionStyle::uniform(p.red),
            Section::Gpu     => SectionStyle::uniform(p.yellow),
            Section::Memory  => SectionStyle::uniform(p.green),
            Section::Storage => SectionStyle::uniform(p.blue),
        }
    }

    /// Ramp for the "most active cores" line, tuned for mostly idle desktops.
    pub fn low_usage_color(&self, usage: f64) -> Color {
        let p = &self.palette;
        if usage >= 20.0 {
            p.red
        } else if usage >= 15.0 {
            p.yellow
        } else if usage >= 5.0 {
            p.cyan
        } else {
            p.blue
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
