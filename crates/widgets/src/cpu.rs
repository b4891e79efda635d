use crate::{
    format, icons,
    layout::{center_pad, rule},
    markup::{escape, span},
    sparkline::{history_lines, Scale},
    Context,
};
use sysmon_theme::{core_load_color, MetricKind, Section};

/// Outer width of the die drawing, frame included.
const DIE_WIDTH: usize = 25;
/// Width of the substrate between the frame walls.
const DIE_INNER: usize = 19;
const CORES_PER_ROW: usize = 4;
/// Cores listed in the "most active" line.
const TOP_CORES: usize = 4;

/// CPU section: readings, load history, a die map of per-core load and the
/// cores with the highest smoothed load.
#[derive(Debug, Default)]
pub struct CpuSection;

impl CpuSection {
    pub fn new() -> Self {
        Self
    }

    /// The reading rows. Their width also drives the tooltip width.
    pub fn rows(&self, ctx: &Context<'_>) -> Vec<String> {
        let cpu = &ctx.telemetry.cpu;
        let theme = ctx.theme;

        vec![
            format!(
                "{} | Frequency: {} / {}",
                icons::FREQUENCY,
                span(theme.classify(cpu.freq_percent(), MetricKind::CpuPower), format::mhz(cpu.freq_current_mhz)),
                format::mhz(cpu.freq_max_mhz),
            ),
            format!(
                "{} | Temperature: {}",
                icons::TEMPERATURE,
                span(
                    theme.classify(f64::from(cpu.temperature_c), MetricKind::Temperature),
                    format::celsius(cpu.temperature_c)
                ),
            ),
            format!(
                "{} | Power: {}",
                icons::POWER,
                span(theme.classify(cpu.power_w, MetricKind::CpuPower), format::watts(cpu.power_w)),
            ),
            format!(
                "{} | Utilization: {}",
                icons::UTILIZATION,
                span(theme.classify(cpu.utilization, MetricKind::CpuPower), format::percent(cpu.utilization)),
            ),
        ]
    }

    pub fn view(&self, ctx: &Context<'_>, width: usize) -> Vec<String> {
        let style = ctx.theme.section(Section::Cpu);
        let mut lines = vec![
            format!(
                "{} {} - {}:",
                span(style.icon, icons::CPU),
                span(style.text, "CPU"),
                escape(&ctx.telemetry.cpu.name),
            ),
            rule(width),
        ];
        lines.extend(self.rows(ctx));
        lines.extend(history_lines(
            &ctx.history.cpu,
            width,
            Scale::Half,
            MetricKind::CpuPower,
            ctx.theme,
        ));
        lines.extend(die_map(ctx, width));
        lines.extend(most_active(ctx));
        lines
    }
}

/// Cores laid out column-major in a four-wide grid inside a package outline.
/// The substrate takes the CPU temperature colour; each core its own load.
fn die_map(ctx: &Context<'_>, width: usize) -> Vec<String> {
    let per_core = &ctx.telemetry.cpu.per_core;
    let substrate = ctx
        .theme
        .classify(f64::from(ctx.telemetry.cpu.temperature_c), MetricKind::Temperature);
    let pad = center_pad(width, DIE_WIDTH);
    let edge = format!("{pad}─ ║{}║ ─", span(substrate, "▓".repeat(DIE_INNER)));

    let mut lines = vec![format!("{pad}  ╔{}╗", "═".repeat(DIE_INNER)), edge.clone()];

    let rows = per_core.len().div_ceil(CORES_PER_ROW);
    for row in 0..rows {
        let cells: Vec<String> = (0..CORES_PER_ROW)
            .map(|col| match per_core.get(col * rows + row) {
                Some(&usage) => span(core_load_color(usage), "[█]"),
                None => "   ".to_string(),
            })
            .collect();
        lines.push(format!(
            "{pad}─ ║{}{}{}║ ─",
            span(substrate, "▓▓"),
            cells.join(" "),
            span(substrate, "▓▓"),
        ));
    }

    lines.push(edge);
    lines.push(format!("{pad}  ╚{}╝", "═".repeat(DIE_INNER)));
    lines
}

/// Heading plus one line naming the busiest cores by smoothed load.
fn most_active(ctx: &Context<'_>) -> Vec<String> {
    let ranked = ctx.history.per_core.rank(TOP_CORES);
    if ranked.is_empty() {
        return Vec::new();
    }

    let parts: Vec<String> = ranked
        .iter()
        .map(|&(core, avg)| {
            format!(
                "{} {}: {}",
                icons::CORE,
                core + 1,
                span(ctx.theme.low_usage_color(avg), format!("{avg:.1}%")),
            )
        })
        .collect();

    vec![
        "Most Active Cores (smoothed load):".to_string(),
        parts.join(" | "),
    ]
}
