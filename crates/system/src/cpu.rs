use std::path::Path;
use sysinfo::{Components, System};
use sysmon_core::CpuReading;

const CPUINFO: &str = "/proc/cpuinfo";
const MAX_FREQ_KHZ: &str = "/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq";

/// Sensor labels that report the whole package, most preferred first.
const PACKAGE_LABELS: [&str; 3] = ["tctl", "package id 0", "tdie"];

/// Build a [`CpuReading`] from a `System` whose CPU list has been refreshed
/// twice (usage is a delta between refreshes).
///
/// `name_override` wins when non-empty; `power_w` comes from [`crate::power`].
pub fn read(sys: &System, name_override: &str, power_w: f64) -> CpuReading {
    let per_core: Vec<f64> = sys.cpus().iter().map(|c| f64::from(c.cpu_usage())).collect();
    let utilization = if per_core.is_empty() {
        0.0
    } else {
        f64::from(sys.global_cpu_usage())
    };

    let freq_current_mhz = if sys.cpus().is_empty() {
        0.0
    } else {
        sys.cpus().iter().map(|c| c.frequency() as f64).sum::<f64>() / sys.cpus().len() as f64
    };

    CpuReading {
        name: resolve_name(name_override, sys),
        utilization,
        per_core,
        freq_current_mhz,
        freq_max_mhz: read_max_freq_mhz().unwrap_or(0.0),
        temperature_c: read_temperature().unwrap_or(0),
        power_w,
    }
}

fn resolve_name(name_override: &str, sys: &System) -> String {
    if !name_override.trim().is_empty() {
        return name_override.trim().to_string();
    }
    std::fs::read_to_string(CPUINFO)
        .ok()
        .and_then(|raw| parse_model_name(&raw))
        .or_else(|| {
            sys.cpus()
                .first()
                .map(|c| c.brand().trim().to_string())
                .filter(|b| !b.is_empty())
        })
        .unwrap_or_else(|| "Unknown CPU".to_string())
}

/// First `model name` entry of `/proc/cpuinfo`.
pub fn parse_model_name(cpuinfo: &str) -> Option<String> {
    cpuinfo
        .lines()
        .filter(|l| l.starts_with("model name"))
        .find_map(|l| l.split_once(':'))
        .map(|(_, name)| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

fn read_max_freq_mhz() -> Option<f64> {
    let raw = std::fs::read_to_string(Path::new(MAX_FREQ_KHZ)).ok()?;
    let khz: f64 = raw.trim().parse().ok()?;
    Some(khz / 1000.0)
}

fn read_temperature() -> Option<i32> {
    let components = Components::new_with_refreshed_list();
    let readings = components
        .iter()
        .filter_map(|c| c.temperature().map(|t| (c.label().to_string(), t)));
    pick_package_temp(readings)
}

/// Pick the package temperature out of `(label, °C)` sensor readings,
/// preferring [`PACKAGE_LABELS`] in order.
pub fn pick_package_temp(readings: impl IntoIterator<Item = (String, f32)>) -> Option<i32> {
    let readings: Vec<(String, f32)> = readings
        .into_iter()
        .filter(|(_, t)| t.is_finite())
        .collect();

    PACKAGE_LABELS.iter().find_map(|wanted| {
        readings
            .iter()
            .find(|(label, _)| label.to_lowercase().contains(wanted))
            .map(|(_, t)| *t as i32)
    })
}
