use regex::Regex;
use std::process::Command;
use std::sync::LazyLock;
use sysmon_core::{GpuReading, Result, SysmonError};

const QUERY: &str =
    "--query-gpu=name,utilization.gpu,temperature.gpu,power.draw,clocks.gr,clocks.max.sm";

/// Leading number of a CSV field; `[N/A]` and `[Not Supported]` do not match.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)?").expect("static regex"));

/// Query the first NVIDIA GPU with a single `nvidia-smi` call.
pub fn read() -> Result<GpuReading> {
    let output = Command::new("nvidia-smi")
        .args([QUERY, "--format=csv,noheader,nounits"])
        .output()
        .map_err(|e| SysmonError::Telemetry(format!("nvidia-smi: {e}")))?;

    if !output.status.success() {
        return Err(SysmonError::Telemetry(format!(
            "nvidia-smi exited with {}",
            output.status
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_query(&stdout)
        .ok_or_else(|| SysmonError::Telemetry(format!("unexpected nvidia-smi output: {stdout:?}")))
}

/// Parse the first row of the CSV produced by [`QUERY`].
///
/// Each field stands alone: one the driver reports as `[N/A]` reads as 0
/// and the rest of the row, name included, is kept. `None` only when there
/// is no row or no name.
pub fn parse_query(output: &str) -> Option<GpuReading> {
    let line = output.lines().next()?;
    let mut fields = line.split(',').map(str::trim);

    let name = fields.next().filter(|n| !n.is_empty())?.to_string();
    let mut next = || fields.next().map(number).unwrap_or(0.0);

    Some(GpuReading {
        name,
        utilization:      next().round() as u32,
        temperature_c:    next().round() as i32,
        power_w:          next(),
        freq_current_mhz: next().round() as u32,
        freq_max_mhz:     next().round() as u32,
    })
}

fn number(field: &str) -> f64 {
    NUMBER
        .find(field)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}
