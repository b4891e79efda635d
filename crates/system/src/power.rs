//! CPU package power from the Linux RAPL powercap interface.

use std::path::Path;
use std::time::Duration;
use sysmon_core::{Result, SysmonError};

/// Cumulative package energy counter, in microjoules.
pub const RAPL_ENERGY: &str = "/sys/class/powercap/intel-rapl:0/energy_uj";
/// Value at which the counter wraps back to zero.
pub const RAPL_MAX_RANGE: &str = "/sys/class/powercap/intel-rapl:0/max_energy_range_uj";

/// Readings above this are counter glitches, not real draw.
pub const MAX_PLAUSIBLE_WATTS: f64 = 250.0;

/// Wrap point assumed when `max_energy_range_uj` is unreadable.
const DEFAULT_WRAP: u64 = 1 << 32;

/// Read a sysfs counter holding a single unsigned integer.
pub fn read_counter(path: &Path) -> Result<u64> {
    let raw = std::fs::read_to_string(path)?;
    raw.trim()
        .parse::<u64>()
        .map_err(|e| SysmonError::Telemetry(format!("{}: {e}", path.display())))
}

/// Average power over `interval` between two energy readings.
///
/// A decreasing counter is treated as one wrap at `wrap_at` (or 2^32 when
/// unknown). Results outside `[0, MAX_PLAUSIBLE_WATTS]` read as `0.0`.
pub fn watts_between(start_uj: u64, end_uj: u64, wrap_at: Option<u64>, interval: Duration) -> f64 {
    let secs = interval.as_secs_f64();
    if secs <= 0.0 {
        return 0.0;
    }

    let delta_uj = if end_uj >= start_uj {
        end_uj - start_uj
    } else {
        let wrap = u128::from(wrap_at.unwrap_or(DEFAULT_WRAP));
        (wrap + u128::from(end_uj)).saturating_sub(u128::from(start_uj)) as u64
    };

    let watts = delta_uj as f64 / 1_000_000.0 / secs;
    if watts.is_finite() && (0.0..=MAX_PLAUSIBLE_WATTS).contains(&watts) {
        watts
    } else {
        0.0
    }
}
