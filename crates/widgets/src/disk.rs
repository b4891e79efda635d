use crate::{
    format, icons,
    layout::{dash_rule, rule},
    markup::{escape, pad_left, pad_right, span},
    Context,
};
use sysmon_core::{state::storage_total_percent, StorageEntry};
use sysmon_theme::{MetricKind, Section};

/// Extra columns taken by separators in a drive row.
const ROW_SEPARATORS: usize = 10;

/// Storage section: combined usage, then one row per drive. Hidden when no
/// drive could be queried.
#[derive(Debug, Default)]
pub struct StorageSection;

impl StorageSection {
    pub fn new() -> Self {
        Self
    }

    /// One aligned row per drive.
    pub fn rows(&self, ctx: &Context<'_>) -> Vec<String> {
        let entries = &ctx.telemetry.storage;
        let columns = Columns::measure(ctx);

        entries
            .iter()
            .map(|e| {
                let pct = span(
                    ctx.theme.classify(f64::from(e.used_percent), MetricKind::MemStorage),
                    format!("{}%", e.used_percent),
                );
                format!(
                    "{} | {} {:>sw$} | {:>uw$} ({})",
                    e.icon,
                    pad_right(&escape(&e.name), columns.name),
                    format::capacity_tb(e.total_tib()),
                    format::capacity_tb(e.used_tib()),
                    pad_left(&pct, columns.percent),
                    sw = columns.size,
                    uw = columns.used,
                )
            })
            .collect()
    }

    pub fn view(&self, ctx: &Context<'_>, width: usize) -> Vec<String> {
        let entries = &ctx.telemetry.storage;
        if entries.is_empty() {
            return Vec::new();
        }

        let style = ctx.theme.section(Section::Storage);
        let table_width = width.max(Columns::measure(ctx).total() + ROW_SEPARATORS);

        let used: f64 = entries.iter().map(|e| e.used_tib()).sum();
        let total: f64 = entries.iter().map(|e| e.total_tib()).sum();
        let percent = storage_total_percent(entries);

        let mut lines = vec![
            format!("{}:", span(style.text, format!("{} Storage", icons::SSD))),
            rule(table_width),
            format!(
                "{} | Usage: {} / {} TB ({})",
                icons::HDD,
                format::capacity(used),
                format::capacity(total),
                span(
                    ctx.theme.classify(f64::from(percent), MetricKind::MemStorage),
                    format!("{percent}%")
                ),
            ),
            dash_rule(table_width),
        ];
        lines.extend(self.rows(ctx));
        lines.push(rule(table_width));
        lines
    }
}

/// Widest cell of each column, in visible characters.
struct Columns {
    name:    usize,
    size:    usize,
    used:    usize,
    percent: usize,
}

impl Columns {
    fn measure(ctx: &Context<'_>) -> Self {
        let entries = &ctx.telemetry.storage;
        Self {
            name:    widest(entries, |e| e.name.chars().count()),
            size:    widest(entries, |e| format::capacity_tb(e.total_tib()).len()),
            used:    widest(entries, |e| format::capacity_tb(e.used_tib()).len()),
            percent: widest(entries, |e| format!("{}%", e.used_percent).len()),
        }
    }

    fn total(&self) -> usize {
        self.name + self.size + self.used + self.percent
    }
}

fn widest(entries: &[StorageEntry], cell: impl Fn(&StorageEntry) -> usize) -> usize {
    entries.iter().map(cell).max().unwrap_or(0)
}
