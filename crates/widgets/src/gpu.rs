use crate::{
    format, icons,
    layout::rule,
    markup::{escape, span},
    sparkline::{history_lines, Scale},
    Context,
};
use sysmon_theme::{MetricKind, Section};

/// GPU section: temperature, power and load, then the load history.
#[derive(Debug, Default)]
pub struct GpuSection;

impl GpuSection {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, ctx: &Context<'_>, width: usize) -> Vec<String> {
        let gpu = &ctx.telemetry.gpu;
        let theme = ctx.theme;
        let style = theme.section(Section::Gpu);
        let load = f64::from(gpu.utilization);

        let mut lines = vec![
            format!(
                "{} {} - {}:",
                span(style.icon, icons::GPU),
                span(style.text, "GPU"),
                escape(&gpu.name),
            ),
            rule(width),
            format!(
                "{} | Temperature: {}",
                icons::TEMPERATURE,
                span(
                    theme.classify(f64::from(gpu.temperature_c), MetricKind::Temperature),
                    format::celsius(gpu.temperature_c)
                ),
            ),
            format!(
                "{} | Power: {}",
                icons::POWER,
                span(theme.classify(gpu.power_w, MetricKind::GpuPower), format::watts(gpu.power_w)),
            ),
            format!(
                "{} | Utilization: {}",
                icons::UTILIZATION,
                span(theme.classify(load, MetricKind::GpuPower), format::percent(load)),
            ),
        ];
        lines.extend(history_lines(&ctx.history.gpu, width, Scale::Full, MetricKind::GpuPower, theme));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::strip;
    use crate::testing::*;
    use sysmon_history::HistorySnapshot;
    use sysmon_theme::Theme;

    #[test]
    fn readings_are_formatted() {
        let telemetry = busy_telemetry();
        let history = HistorySnapshot::empty(70);
        let theme = Theme::default();
        let ctx = context(&telemetry, &history, &theme, &[]);

        let plain: Vec<String> = GpuSection::new().view(&ctx, 70).iter().map(|l| strip(l)).collect();
        assert!(plain[0].ends_with("GPU - NVIDIA GeForce RTX 4080 SUPER:"));
        assert!(plain[2].ends_with("Temperature: 52°C"));
        assert!(plain[3].ends_with("Power: 85.4 W"));
        assert!(plain[4].ends_with("Utilization: 37%"));
        assert_eq!(plain.len(), 5);
    }

    #[test]
    fn history_adds_chart_and_stats() {
        let telemetry = busy_telemetry();
        let mut history = HistorySnapshot::empty(70);
        for v in [0.0, 50.0, 100.0] {
            history.gpu.push(v);
        }
        let theme = Theme::default();
        let ctx = context(&telemetry, &history, &theme, &[]);

        let lines = GpuSection::new().view(&ctx, 70);
        assert_eq!(lines.len(), 8);
        let bottom = strip(&lines[6]);
        assert!(bottom.ends_with("▁▁▁██"));
        assert_eq!(bottom.chars().count(), 70);
    }
}
