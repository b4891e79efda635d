//! Nerd Font glyphs used in the bar and tooltip.

pub const CPU: &str = "\u{f2db}";
pub const GPU: &str = "\u{e266}";
pub const MEMORY: &str = "\u{efc5}";
pub const SSD: &str = "\u{f0a0}";
pub const HDD: &str = "\u{f02ca}";

pub const FREQUENCY: &str = "\u{f192}";
pub const TEMPERATURE: &str = "\u{f2c7}";
pub const POWER: &str = "\u{f492}";
pub const UTILIZATION: &str = "\u{f1fe}";
pub const CORE: &str = "\u{f035b}";
pub const MEM_USAGE: &str = "\u{f061a}";
pub const MEM_CACHE: &str = "\u{f0249}";
