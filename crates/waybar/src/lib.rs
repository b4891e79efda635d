//! One Waybar tick: load config and history, sample the hardware, render,
//! save history, handle a pending click, print the payload.

pub mod click;
pub mod payload;

pub use click::ClickType;
pub use payload::Payload;

use anyhow::Result;
use std::io::Write;
use sysmon_config::SysmonConfig;
use sysmon_core::Telemetry;
use sysmon_history::{HistorySnapshot, HistoryStore};
use sysmon_theme::Theme;
use sysmon_widgets::Context;
use tracing::{debug, warn};

/// Run once and print a single JSON line on stdout.
///
/// Only a failure to write stdout is an error; everything else degrades to
/// defaults and is logged.
pub fn run() -> Result<()> {
    let path = sysmon_config::default_path();
    let cfg = sysmon_config::load(&path).unwrap_or_else(|e| {
        warn!("Config error in '{}': {e}; using defaults.", path.display());
        SysmonConfig::default()
    });
    let theme = Theme::from_config(&cfg.theme);

    let store = HistoryStore::new(&cfg.global.history_file, cfg.global.tooltip_width);
    let mut history = store.load();

    let telemetry = sysmon_system::collect(&cfg);
    debug!(?telemetry, "sampled");

    let payload = build_payload(&telemetry, &mut history, &cfg, &theme);

    if let Err(e) = store.save(&history) {
        warn!("Could not save history to '{}': {e}", store.path().display());
    }

    if let Some(click) = ClickType::from_env() {
        if let Err(e) = click::dispatch(click, &cfg.click) {
            warn!("{click:?} click action failed: {e}");
        }
    }

    write_line(&mut std::io::stdout().lock(), &payload)
}

/// Emit `payload` as one line. A closed pipe surfaces as an error.
fn write_line(out: &mut impl Write, payload: &Payload) -> Result<()> {
    writeln!(out, "{}", payload.to_line()?)?;
    out.flush()?;
    Ok(())
}

/// Append this run's samples to `history` and render the payload.
pub fn build_payload(
    telemetry: &Telemetry,
    history: &mut HistorySnapshot,
    cfg: &SysmonConfig,
    theme: &Theme,
) -> Payload {
    record(telemetry, history);

    let ctx = Context {
        telemetry,
        history,
        theme,
        memory_modules: &cfg.memory_modules,
        min_width: cfg.global.tooltip_width,
        footer: &cfg.click.hint,
    };
    Payload::new(sysmon_widgets::bar_text(telemetry, theme), sysmon_widgets::tooltip(&ctx))
}

fn record(telemetry: &Telemetry, history: &mut HistorySnapshot) {
    history.cpu.push(telemetry.cpu.utilization);
    history.gpu.push(f64::from(telemetry.gpu.utilization));
    history.mem.push(telemetry.memory.percent());
    history.per_core.update_all(&telemetry.cpu.per_core);
}
