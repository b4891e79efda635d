//! Two-row block sparkline.
//!
//! Each column holds a level in `1..=16`: levels up to 8 live in the bottom
//! row, anything above fills the bottom row and spills into the top row.

use crate::markup::{sized, span};
use sysmon_history::RollingBuffer;
use sysmon_theme::{MetricKind, Theme};

/// Block glyphs for heights 1 through 8.
pub const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub const MAX_LEVEL: u8 = 16;
const ROW_LEVELS: u8 = 8;

/// Plain-text width of `"min 00% avg 00% max 00%"`.
const STATS_TEXT_LEN: f64 = 23.0;
/// The stats line is set at a smaller font, so its glyphs are narrower.
const STATS_FONT_RATIO: f64 = 0.78;
const STATS_FONT_SIZE: u32 = 11_000;

/// Which value fills the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// 50 fills the chart; CPU load rarely goes higher on a desktop.
    Half,
    /// 100 fills the chart.
    Full,
}

impl Scale {
    fn full_height(self) -> f64 {
        match self {
            Self::Half => 50.0,
            Self::Full => 100.0,
        }
    }
}

/// One glyph column, split into its two rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Top-row height, `0` = blank.
    pub top: u8,
    /// Bottom-row height, always at least 1.
    pub bottom: u8,
}

impl Column {
    /// The lowest drawable column.
    pub const FLOOR: Self = Self { top: 0, bottom: 1 };

    pub fn from_level(level: u8) -> Self {
        let level = level.clamp(1, MAX_LEVEL);
        if level <= ROW_LEVELS {
            Self { top: 0, bottom: level }
        } else {
            Self { top: level - ROW_LEVELS, bottom: ROW_LEVELS }
        }
    }

    /// Quantize a sample to a column.
    pub fn from_value(value: f64, scale: Scale) -> Self {
        let value = if value.is_nan() { 0.0 } else { value };
        let normalized = (value / scale.full_height() * 100.0).min(100.0);
        let level = (normalized / 100.0 * f64::from(MAX_LEVEL)).round();
        Self::from_level(level.clamp(1.0, f64::from(MAX_LEVEL)) as u8)
    }

    pub fn level(&self) -> u8 {
        self.top + self.bottom
    }

    fn top_glyph(&self) -> char {
        match self.top {
            0 => ' ',
            h => BLOCKS[usize::from(h.min(ROW_LEVELS)) - 1],
        }
    }

    fn bottom_glyph(&self) -> char {
        BLOCKS[usize::from(self.bottom.clamp(1, ROW_LEVELS)) - 1]
    }
}

/// Summary of the real samples shown in a sparkline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

impl Stats {
    fn over(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg = values.iter().sum::<f64>() / values.len() as f64;
        Some(Self { min, avg, max })
    }
}

/// A rendered sparkline, always exactly as wide as requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    pub columns: Vec<Column>,
    /// `None` when fewer than two real samples were available.
    pub stats: Option<Stats>,
    /// Placeholder chart: both rows draw the lowest glyph.
    pub flat: bool,
}

impl Sparkline {
    /// Flat minimum-level chart with no stats.
    pub fn flat(width: usize) -> Self {
        Self {
            columns: vec![Column::FLOOR; width],
            stats: None,
            flat: true,
        }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// `(top, bottom)` rows as plain text.
    pub fn rows(&self) -> (String, String) {
        let top = if self.flat {
            self.columns.iter().map(Column::bottom_glyph).collect()
        } else {
            self.columns.iter().map(Column::top_glyph).collect()
        };
        let bottom = self.columns.iter().map(Column::bottom_glyph).collect();
        (top, bottom)
    }
}

/// Render the most recent `width` samples.
///
/// `None` samples draw as zero. Shorter input is left-padded with zero
/// columns; the padding never counts towards [`Stats`].
pub fn render<I>(samples: I, width: usize, scale: Scale) -> Sparkline
where
    I: IntoIterator<Item = Option<f64>>,
{
    let samples: Vec<Option<f64>> = samples.into_iter().collect();
    if samples.iter().flatten().count() < 2 {
        return Sparkline::flat(width);
    }

    let window = &samples[samples.len().saturating_sub(width)..];
    let real: Vec<f64> = window.iter().flatten().copied().filter(|v| v.is_finite()).collect();
    let pad = width - window.len();

    let columns = std::iter::repeat(Column::from_value(0.0, scale))
        .take(pad)
        .chain(window.iter().map(|v| Column::from_value(v.unwrap_or(0.0), scale)))
        .collect();

    Sparkline {
        columns,
        stats: Stats::over(&real),
        flat: false,
    }
}

/// Tooltip lines for one history buffer: the two chart rows followed by a
/// right-leaning `min / avg / max` line. Empty until the buffer holds two
/// samples.
pub fn history_lines(
    history: &RollingBuffer,
    width: usize,
    scale: Scale,
    kind: MetricKind,
    theme: &Theme,
) -> Vec<String> {
    if history.len() < 2 {
        return Vec::new();
    }

    let chart = render(history.iter().map(Some), width, scale);
    let (top, bottom) = chart.rows();
    let ink = theme.palette.white;
    let mut lines = vec![span(ink, top), span(ink, bottom)];

    if let Some(stats) = chart.stats {
        let value = |v: f64| span(theme.classify(v, kind), crate::format::percent(v));
        let text = sized(
            STATS_FONT_SIZE,
            format!(
                "min {} avg {} max {}",
                value(stats.min),
                value(stats.avg),
                value(stats.max)
            ),
        );
        let pad = (width as f64 - STATS_TEXT_LEN * STATS_FONT_RATIO).max(0.0) as usize;
        lines.push(format!("{}{text}", " ".repeat(pad)));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::strip;
    use proptest::prelude::*;

    fn levels(chart: &Sparkline) -> Vec<u8> {
        chart.columns.iter().map(Column::level).collect()
    }

    #[test]
    fn quantizes_at_half_scale() {
        // 10/50 = 20% → 3.2 → 3; 20/50 → 6.4 → 6; 30/50 → 9.6 → 10
        assert_eq!(Column::from_value(10.0, Scale::Half), Column { top: 0, bottom: 3 });
        assert_eq!(Column::from_value(20.0, Scale::Half), Column { top: 0, bottom: 6 });
        assert_eq!(Column::from_value(30.0, Scale::Half), Column { top: 2, bottom: 8 });
        assert_eq!(Column::from_value(80.0, Scale::Half), Column { top: 8, bottom: 8 });
    }

    #[test]
    fn quantizes_at_full_scale() {
        assert_eq!(Column::from_value(0.0, Scale::Full), Column::FLOOR);
        assert_eq!(Column::from_value(50.0, Scale::Full).level(), 8);
        assert_eq!(Column::from_value(100.0, Scale::Full).level(), 16);
        assert_eq!(Column::from_value(250.0, Scale::Full).level(), 16);
        assert_eq!(Column::from_value(-5.0, Scale::Full), Column::FLOOR);
    }

    #[test]
    fn three_cpu_samples_in_a_wide_chart() {
        let chart = render([10.0, 20.0, 30.0].map(Some), 70, Scale::Half);
        assert_eq!(chart.width(), 70);
        assert!(chart.columns[..67].iter().all(|c| *c == Column::FLOOR));
        assert_eq!(&levels(&chart)[67..], &[3, 6, 10]);

        let (top, bottom) = chart.rows();
        assert_eq!(bottom, format!("{}▃▆█", "▁".repeat(67)));
        assert_eq!(top, format!("{}▂", " ".repeat(69)));
    }

    #[test]
    fn stats_exclude_padding() {
        let chart = render([10.0, 20.0, 30.0].map(Some), 70, Scale::Half);
        assert_eq!(chart.stats, Some(Stats { min: 10.0, avg: 20.0, max: 30.0 }));
    }

    #[test]
    fn long_input_keeps_most_recent() {
        let samples: Vec<Option<f64>> = (0..10).map(|i| Some(f64::from(i) * 10.0)).collect();
        let chart = render(samples, 3, Scale::Full);
        // 70, 80, 90 → 11.2, 12.8, 14.4
        assert_eq!(levels(&chart), vec![11, 13, 14]);
        assert_eq!(chart.stats.map(|s| (s.min, s.max)), Some((70.0, 90.0)));
    }

    #[test]
    fn fewer_than_two_real_samples_is_flat() {
        let chart = render([None, Some(40.0), None], 5, Scale::Full);
        assert_eq!(chart, Sparkline::flat(5));
        assert_eq!(chart.rows(), ("▁▁▁▁▁".to_string(), "▁▁▁▁▁".to_string()));
        assert_eq!(render(std::iter::empty(), 4, Scale::Half), Sparkline::flat(4));
    }

    #[test]
    fn none_draws_as_zero_and_is_skipped_in_stats() {
        let chart = render([Some(100.0), None, Some(50.0)], 3, Scale::Full);
        assert_eq!(levels(&chart), vec![16, 1, 8]);
        assert_eq!(chart.stats, Some(Stats { min: 50.0, avg: 75.0, max: 100.0 }));
    }

    #[test]
    fn zero_width_renders_nothing() {
        let chart = render([1.0, 2.0].map(Some), 0, Scale::Full);
        assert!(chart.columns.is_empty());
        assert_eq!(chart.stats, None);
    }

    #[test]
    fn history_lines_wait_for_two_samples() {
        let theme = Theme::default();
        let mut buf = RollingBuffer::new(10);
        buf.push(42.0);
        assert!(history_lines(&buf, 10, Scale::Full, MetricKind::MemStorage, &theme).is_empty());

        buf.push(58.0);
        let lines = history_lines(&buf, 10, Scale::Full, MetricKind::MemStorage, &theme);
        assert_eq!(lines.len(), 3);
        assert_eq!(strip(&lines[1]).chars().count(), 10);
        assert_eq!(strip(&lines[2]).trim_start(), "min 42% avg 50% max 58%");
    }

    proptest! {
        #[test]
        fn output_width_is_always_requested_width(
            samples in proptest::collection::vec(proptest::option::of(-50.0f64..500.0), 0..200),
            width in 0usize..150,
        ) {
            let chart = render(samples, width, Scale::Half);
            prop_assert_eq!(chart.width(), width);
            let (top, bottom) = chart.rows();
            prop_assert_eq!(top.chars().count(), width);
            prop_assert_eq!(bottom.chars().count(), width);
        }

        #[test]
        fn levels_stay_in_range(value in -1e4f64..1e4) {
            for scale in [Scale::Half, Scale::Full] {
                let level = Column::from_value(value, scale).level();
                prop_assert!((1..=MAX_LEVEL).contains(&level));
            }
        }
    }
}
