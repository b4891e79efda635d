//! Locale-invariant number formatting for the tooltip.

/// Round up to the next 0.1. Values already on a tenth (within float noise)
/// stay put, so `0.3` does not become `0.4`.
pub fn ceil_tenth(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    let tenths = (value * 10.0 - 1e-9).ceil();
    if tenths <= 0.0 {
        return 0.0;
    }
    tenths / 10.0
}

/// Capacity with one decimal, rounded up: `1.01` → `"1.1"`.
pub fn capacity(value: f64) -> String {
    format!("{:.1}", ceil_tenth(value))
}

/// Capacity in tebibytes with unit suffix, e.g. `"1.9TB"`.
pub fn capacity_tb(value_tib: f64) -> String {
    format!("{}TB", capacity(value_tib))
}

pub fn watts(value: f64) -> String {
    format!("{value:.1} W")
}

pub fn percent(value: f64) -> String {
    format!("{value:.0}%")
}

pub fn celsius(value: i32) -> String {
    format!("{value}°C")
}

pub fn mhz(value: f64) -> String {
    format!("{value:.0} MHz")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_rounds_up() {
        assert_eq!(capacity(1.01), "1.1");
        assert_eq!(capacity(1.0), "1.0");
        assert_eq!(capacity(0.3), "0.3");
        assert_eq!(capacity(1.86), "1.9");
        assert_eq!(capacity(0.0), "0.0");
        assert_eq!(capacity(1e-12), "0.0");
    }

    #[test]
    fn capacity_tb_suffix() {
        assert_eq!(capacity_tb(1.8189), "1.9TB");
    }

    #[test]
    fn fixed_precision() {
        assert_eq!(watts(85.43), "85.4 W");
        assert_eq!(watts(0.0), "0.0 W");
        assert_eq!(percent(37.2), "37%");
        assert_eq!(celsius(0), "0°C");
        assert_eq!(mhz(4712.6), "4713 MHz");
    }
}
