//! Bar text and tooltip composition.
//!
//! Each tooltip section is a small widget with a `view` that returns its
//! lines for a given width. The width is shared: it is the widest of the CPU
//! rows and storage rows, and never less than the configured tooltip width.

pub mod cpu;
pub mod disk;
pub mod format;
pub mod gpu;
pub mod icons;
pub mod layout;
pub mod markup;
pub mod memory;
pub mod sparkline;

pub use cpu::CpuSection;
pub use disk::StorageSection;
pub use gpu::GpuSection;
pub use memory::MemorySection;
pub use sparkline::{render, Scale, Sparkline};

use markup::span;
use sysmon_config::MemoryModule;
use sysmon_core::Telemetry;
use sysmon_history::HistorySnapshot;
use sysmon_theme::{MetricKind, Theme};

/// Base font size of the tooltip (1024ths of a point).
const TOOLTIP_FONT_SIZE: u32 = 14_000;

/// Read-only inputs shared by every section.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub telemetry:      &'a Telemetry,
    /// History after this run's samples were appended.
    pub history:        &'a HistorySnapshot,
    pub theme:          &'a Theme,
    pub memory_modules: &'a [MemoryModule],
    /// Minimum tooltip width, also the sparkline width.
    pub min_width:      usize,
    /// Footer line; empty hides the footer.
    pub footer:         &'a str,
}

/// Compact bar label: CPU temperature, GPU temperature, memory usage.
pub fn bar_text(telemetry: &Telemetry, theme: &Theme) -> String {
    let cpu_temp = telemetry.cpu.temperature_c;
    let gpu_temp = telemetry.gpu.temperature_c;
    let mem = telemetry.memory.percent();

    format!(
        "| {} {}  {} {}  {} {} |",
        icons::CPU,
        span(theme.classify(f64::from(cpu_temp), MetricKind::Temperature), format::celsius(cpu_temp)),
        icons::GPU,
        span(theme.classify(f64::from(gpu_temp), MetricKind::Temperature), format::celsius(gpu_temp)),
        icons::MEMORY,
        span(theme.classify(mem, MetricKind::MemStorage), format::percent(mem)),
    )
}

/// Shared width for all sections.
pub fn tooltip_width(ctx: &Context<'_>) -> usize {
    let cpu_rows = CpuSection::new().rows(ctx);
    let storage_rows = StorageSection::new().rows(ctx);
    layout::content_width(cpu_rows.iter().chain(storage_rows.iter())).max(ctx.min_width)
}

/// Every tooltip line, top to bottom.
pub fn tooltip_lines(ctx: &Context<'_>) -> Vec<String> {
    let width = tooltip_width(ctx);

    let mut lines = CpuSection::new().view(ctx, width);
    lines.push(String::new());
    lines.extend(GpuSection::new().view(ctx, width));
    lines.push(String::new());
    lines.extend(MemorySection::new().view(ctx, width));

    let storage = StorageSection::new().view(ctx, width);
    if !storage.is_empty() {
        lines.push(String::new());
        lines.extend(storage);
    }

    if !ctx.footer.is_empty() {
        lines.push(String::new());
        lines.push(markup::escape(ctx.footer));
    }

    lines
}

/// The complete tooltip markup.
pub fn tooltip(ctx: &Context<'_>) -> String {
    markup::sized(TOOLTIP_FONT_SIZE, tooltip_lines(ctx).join("\n"))
}
