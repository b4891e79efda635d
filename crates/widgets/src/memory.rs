use crate::{
    format, icons,
    layout::{breakdown_blocks, dash_rule, rule},
    markup::{escape, pad_left, pad_right, sized, span, visible_len},
    sparkline::{history_lines, Scale},
    Context,
};
use sysmon_config::MemoryModule;
use sysmon_theme::{MetricKind, Section, Theme};

const LEGEND_FONT_SIZE: u32 = 11_000;
/// Visible width of the temperature column, e.g. `"42°C"`.
const TEMP_COLUMN: usize = 4;

/// Memory section: usage, cache, history, optional DIMM table and a
/// proportional used / cached / buffers / free bar.
#[derive(Debug, Default)]
pub struct MemorySection;

impl MemorySection {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, ctx: &Context<'_>, width: usize) -> Vec<String> {
        let mem = &ctx.telemetry.memory;
        let theme = ctx.theme;
        let style = theme.section(Section::Memory);
        let percent = mem.percent();

        let mut lines = vec![
            format!("{} {}:", span(style.icon, icons::MEMORY), span(style.text, "Memory")),
            rule(width),
            format!(
                "{} | Usage: {:.1} / {:.1} GB ({})",
                icons::MEM_USAGE,
                mem.used_gib(),
                mem.total_gib(),
                span(theme.classify(percent, MetricKind::MemStorage), format::percent(percent)),
            ),
            format!(
                "{} | Cached: {:.1} GB | Buffers: {:.1} GB",
                icons::MEM_CACHE,
                mem.cached_gib(),
                mem.buffers_gib(),
            ),
        ];

        lines.extend(history_lines(&ctx.history.mem, width, Scale::Full, MetricKind::MemStorage, theme));

        if !ctx.memory_modules.is_empty() {
            lines.push(dash_rule(width));
            lines.extend(module_table(ctx.memory_modules, theme));
        }

        let (used, cached, buffers, free) = mem.breakdown_percents();
        lines.push(String::new());
        lines.push(breakdown_bar(used, cached, buffers, width, theme));
        lines.push(String::new());
        lines.push(legend(used, cached, buffers, free, theme));
        lines.push(rule(width));
        lines
    }
}

/// One row per DIMM, every text column padded to its widest cell.
fn module_table(modules: &[MemoryModule], theme: &Theme) -> Vec<String> {
    let cells: Vec<[String; 5]> = modules
        .iter()
        .map(|m| {
            [
                escape(&m.label),
                escape(&m.size),
                escape(&m.kind),
                escape(&m.speed),
                escape(&m.rank),
            ]
        })
        .collect();

    let mut widths = [0usize; 5];
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(visible_len(cell));
        }
    }

    modules
        .iter()
        .zip(&cells)
        .map(|(module, row)| {
            let columns: Vec<String> = row
                .iter()
                .zip(widths)
                .map(|(cell, w)| pad_right(cell, w))
                .collect();
            let temp = span(
                theme.classify(f64::from(module.temp), MetricKind::Temperature),
                format::celsius(module.temp),
            );
            format!(
                "{} | {} | {}",
                icons::MEMORY,
                columns.join(" | "),
                pad_left(&temp, TEMP_COLUMN)
            )
        })
        .collect()
}

fn breakdown_bar(used: f64, cached: f64, buffers: f64, width: usize, theme: &Theme) -> String {
    let p = &theme.palette;
    let [used, cached, buffers, free] = breakdown_blocks(used, cached, buffers, width);
    [
        span(p.red, "█".repeat(used)),
        span(p.yellow, "█".repeat(cached)),
        span(p.cyan, "█".repeat(buffers)),
        span(p.bright_black, "░".repeat(free)),
    ]
    .concat()
}

fn legend(used: f64, cached: f64, buffers: f64, free: f64, theme: &Theme) -> String {
    let p = &theme.palette;
    sized(
        LEGEND_FONT_SIZE,
        format!(
            "{} Used {used:.1}%  {} Cached {cached:.1}%  {} Buffers {buffers:.1}%  {} Free {free:.1}%",
            span(p.red, "█"),
            span(p.yellow, "█"),
            span(p.cyan, "█"),
            span(p.bright_black, "░"),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::strip;
    use crate::testing::*;
    use sysmon_core::Telemetry;
    use sysmon_history::HistorySnapshot;

    fn module(label: &str, size: &str, temp: i32) -> MemoryModule {
        MemoryModule {
            label: label.into(),
            size: size.into(),
            speed: "3200 MHz".into(),
            kind: "DDR4".into(),
            rank: "Dual".into(),
            temp,
        }
    }

    #[test]
    fn usage_lines() {
        let telemetry = busy_telemetry();
        let history = HistorySnapshot::empty(70);
        let theme = Theme::default();
        let ctx = context(&telemetry, &history, &theme, &[]);

        let plain: Vec<String> = MemorySection::new().view(&ctx, 70).iter().map(|l| strip(l)).collect();
        // available 18 of 32 GiB → 43.75% in use
        assert_eq!(plain[2], format!("{} | Usage: 12.0 / 32.0 GB (44%)", icons::MEM_USAGE));
        assert_eq!(plain[3], format!("{} | Cached: 6.0 GB | Buffers: 1.0 GB", icons::MEM_CACHE));
        assert_eq!(plain.last().map(|l| l.chars().count()), Some(70));
    }

    #[test]
    fn breakdown_bar_spans_width() {
        let telemetry = busy_telemetry();
        let history = HistorySnapshot::empty(70);
        let theme = Theme::default();
        let ctx = context(&telemetry, &history, &theme, &[]);

        let lines = MemorySection::new().view(&ctx, 70);
        let bar = lines.iter().map(|l| strip(l)).find(|l| l.contains('░')).unwrap();
        assert_eq!(bar.chars().count(), 70);
        // 12/32 → 26 used, 6/32 → 13 cached, 1/32 → 2 buffers
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 41);
    }

    #[test]
    fn legend_reports_each_share() {
        let plain = strip(&legend(37.5, 18.7, 3.125, 62.5, &Theme::default()));
        assert_eq!(plain, "█ Used 37.5%  █ Cached 18.7%  █ Buffers 3.1%  ░ Free 62.5%");
    }

    #[test]
    fn module_table_only_when_configured() {
        let telemetry = Telemetry::default();
        let history = HistorySnapshot::empty(70);
        let theme = Theme::default();
        let without = MemorySection::new().view(&context(&telemetry, &history, &theme, &[]), 70);
        assert!(!without.iter().any(|l| l.starts_with('-')));

        let modules = [module("DIMM1", "16 GB", 42), module("DIMM2", "8 GB", 39)];
        let with = MemorySection::new().view(&context(&telemetry, &history, &theme, &modules), 70);
        assert_eq!(with.len(), without.len() + 3);
    }

    #[test]
    fn module_rows_are_padded() {
        let modules = [module("DIMM1", "16 GB", 42), module("A", "8 GB", 7)];
        let rows: Vec<String> = module_table(&modules, &Theme::default()).iter().map(|r| strip(r)).collect();
        let m = icons::MEMORY;
        assert_eq!(rows[0], format!("{m} | DIMM1 | 16 GB | DDR4 | 3200 MHz | Dual | 42°C"));
        assert_eq!(rows[1], format!("{m} | A     | 8 GB  | DDR4 | 3200 MHz | Dual |  7°C"));
    }

    #[test]
    fn zero_memory_renders_all_free() {
        let telemetry = Telemetry::default();
        let history = HistorySnapshot::empty(70);
        let theme = Theme::default();
        let ctx = context(&telemetry, &history, &theme, &[]);
        let lines = MemorySection::new().view(&ctx, 10);
        assert!(lines.iter().any(|l| strip(l) == "░".repeat(10)));
    }
}
