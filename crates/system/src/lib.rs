//! Best-effort telemetry providers.
//!
//! Every reader returns a `Result`/`Option`; [`collect`] turns each failure
//! into the zero/unknown default explicitly, so the caller always gets a
//! complete [`Telemetry`].

pub mod cpu;
pub mod gpu;
pub mod memory;
pub mod power;
pub mod storage;

use std::path::Path;
use std::time::Duration;
use sysinfo::System;
use sysmon_config::SysmonConfig;
use sysmon_core::{GpuReading, Result, Telemetry};
use tracing::debug;

/// The one deliberate pause of a run: RAPL energy is sampled on both sides
/// of it and CPU usage is measured across it.
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(500);

/// Sample everything once. Blocks for [`SAMPLE_INTERVAL`].
pub fn collect(cfg: &SysmonConfig) -> Telemetry {
    let mut sys = System::new();
    sys.refresh_cpu_all();
    let energy_start = power::read_counter(Path::new(power::RAPL_ENERGY));

    std::thread::sleep(SAMPLE_INTERVAL);

    let power_w = package_power(energy_start);
    sys.refresh_cpu_all();
    sys.refresh_memory();

    Telemetry {
        cpu:     cpu::read(&sys, &cfg.global.cpu_name, power_w),
        gpu:     gpu_or_default(gpu::read(), &cfg.global.gpu_name),
        memory:  memory::read(&sys),
        storage: storage::read(&cfg.storage),
    }
}

fn package_power(start: Result<u64>) -> f64 {
    let end = start.and_then(|start| {
        let end = power::read_counter(Path::new(power::RAPL_ENERGY))?;
        Ok((start, end))
    });
    let wrap = || power::read_counter(Path::new(power::RAPL_MAX_RANGE)).ok();
    power_or_zero(end, wrap)
}

/// Watts across the sample window, or 0 when either counter read failed.
fn power_or_zero(counters: Result<(u64, u64)>, wrap_at: impl FnOnce() -> Option<u64>) -> f64 {
    match counters {
        Ok((start, end)) => power::watts_between(start, end, wrap_at(), SAMPLE_INTERVAL),
        Err(e) => {
            debug!("CPU power unavailable: {e}");
            0.0
        }
    }
}

/// GPU reading, or zeros (with the configured or placeholder name) when the
/// query failed.
fn gpu_or_default(reading: Result<GpuReading>, name_override: &str) -> GpuReading {
    let mut reading = reading.unwrap_or_else(|e| {
        debug!("GPU unavailable: {e}");
        GpuReading {
            name: "Unknown GPU".to_string(),
            ..GpuReading::default()
        }
    });
    if !name_override.trim().is_empty() {
        reading.name = name_override.trim().to_string();
    }
    reading
}

#[cfg(test)]
mod tests {
    use super::*;
    use sysmon_core::SysmonError;

    fn gone() -> SysmonError {
        SysmonError::Telemetry("not present".into())
    }

    #[test]
    fn failed_counter_read_is_zero_watts() {
        assert_eq!(power_or_zero(Err(gone()), || Some(1 << 32)), 0.0);
    }

    #[test]
    fn counter_delta_becomes_watts() {
        // 20 J over half a second
        let watts = power_or_zero(Ok((1_000_000, 21_000_000)), || None);
        assert!((watts - 40.0).abs() < 1e-9);
    }

    #[test]
    fn failed_gpu_query_is_unknown_and_zeroed() {
        let gpu = gpu_or_default(Err(gone()), "");
        assert_eq!(gpu.name, "Unknown GPU");
        assert_eq!(gpu.utilization, 0);
        assert_eq!(gpu.temperature_c, 0);
        assert_eq!(gpu.power_w, 0.0);
        assert_eq!(gpu.freq_max_mhz, 0);
    }

    #[test]
    fn configured_gpu_name_wins() {
        let failed = gpu_or_default(Err(gone()), "  RTX 4080  ");
        assert_eq!(failed.name, "RTX 4080");

        let queried = GpuReading {
            name: "NVIDIA GeForce RTX 4080 SUPER".into(),
            utilization: 37,
            ..GpuReading::default()
        };
        let gpu = gpu_or_default(Ok(queried), "4080S");
        assert_eq!(gpu.name, "4080S");
        assert_eq!(gpu.utilization, 37);

        let unnamed = gpu_or_default(Ok(GpuReading { name: "T400".into(), ..GpuReading::default() }), " ");
        assert_eq!(unnamed.name, "T400");
    }
}
