use serde::{Deserialize, Serialize};

const GIB: f64 = (1u64 << 30) as f64;
const TIB: f64 = (1u64 << 40) as f64;

/// Everything sampled during one invocation.
///
/// Every field defaults to zero/unknown, so a run where every provider
/// failed still renders a complete (if empty) tooltip.
#[derive(Debug, Clone, Default)]
pub struct Telemetry {
    pub cpu:     CpuReading,
    pub gpu:     GpuReading,
    pub memory:  MemoryReading,
    /// One entry per configured drive that answered; failed drives are absent.
    pub storage: Vec<StorageEntry>,
}

/// A point-in-time CPU reading.
#[derive(Debug, Clone, Default)]
pub struct CpuReading {
    /// Model name, e.g. `"AMD Ryzen 9 9900X"`.
    pub name: String,
    /// Average usage across all cores (0.0 – 100.0).
    pub utilization: f64,
    /// Per-core usage (0.0 – 100.0), indexed by logical core.
    pub per_core: Vec<f64>,
    pub freq_current_mhz: f64,
    pub freq_max_mhz: f64,
    /// Package temperature in whole degrees Celsius.
    pub temperature_c: i32,
    /// Package power draw in watts, already clamped to the plausible range.
    pub power_w: f64,
}

impl CpuReading {
    /// Current frequency as a percentage of the maximum; `0.0` when the
    /// maximum is unknown.
    #[must_use]
    pub fn freq_percent(&self) -> f64 {
        if self.freq_max_mhz <= 0.0 {
            return 0.0;
        }
        self.freq_current_mhz / self.freq_max_mhz * 100.0
    }
}

/// A point-in-time GPU reading. All zeros when no GPU could be queried.
#[derive(Debug, Clone, Default)]
pub struct GpuReading {
    pub name: String,
    pub utilization: u32,
    pub temperature_c: i32,
    pub power_w: f64,
    pub freq_current_mhz: u32,
    pub freq_max_mhz: u32,
}

/// System memory, in bytes.
#[derive(Debug, Clone, Default)]
pub struct MemoryReading {
    pub total:     u64,
    pub used:      u64,
    pub available: u64,
    pub cached:    u64,
    pub buffers:   u64,
}

impl MemoryReading {
    /// Share of memory not available to new allocations (0.0 – 100.0).
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let in_use = self.total.saturating_sub(self.available);
        in_use as f64 / self.total as f64 * 100.0
    }

    /// `(used, cached, buffers, free)` as percentages of total.
    #[must_use]
    pub fn breakdown_percents(&self) -> (f64, f64, f64, f64) {
        if self.total == 0 {
            return (0.0, 0.0, 0.0, 0.0);
        }
        let total = self.total as f64;
        let free = self.total.saturating_sub(self.used);
        (
            self.used as f64 / total * 100.0,
            self.cached as f64 / total * 100.0,
            self.buffers as f64 / total * 100.0,
            free as f64 / total * 100.0,
        )
    }

    #[must_use]
    pub fn used_gib(&self) -> f64 {
        self.used as f64 / GIB
    }

    #[must_use]
    pub fn total_gib(&self) -> f64 {
        self.total as f64 / GIB
    }

    #[must_use]
    pub fn cached_gib(&self) -> f64 {
        self.cached as f64 / GIB
    }

    #[must_use]
    pub fn buffers_gib(&self) -> f64 {
        self.buffers as f64 / GIB
    }
}

/// Usage of one configured drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageEntry {
    /// Display name, e.g. `"System"`.
    pub name: String,
    /// Path that was queried, e.g. `"/mnt/games"`.
    pub mount: String,
    /// Nerd Font glyph shown in front of the row.
    pub icon: String,
    pub used_bytes: u64,
    pub total_bytes: u64,
    /// Whole-number usage percentage (truncated).
    pub used_percent: u8,
}

impl StorageEntry {
    #[must_use]
    pub fn used_tib(&self) -> f64 {
        self.used_bytes as f64 / TIB
    }

    #[must_use]
    pub fn total_tib(&self) -> f64 {
        self.total_bytes as f64 / TIB
    }
}

/// Combined usage across all entries as a truncated whole percentage; `0`
/// when the combined capacity is zero.
#[must_use]
pub fn storage_total_percent(entries: &[StorageEntry]) -> u8 {
    let used: u64 = entries.iter().map(|e| e.used_bytes).sum();
    let total: u64 = entries.iter().map(|e| e.total_bytes).sum();
    if total == 0 {
        return 0;
    }
    (used as f64 / total as f64 * 100.0).clamp(0.0, 100.0) as u8
}
