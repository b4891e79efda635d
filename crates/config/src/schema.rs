use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure parsed from `sysmon.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SysmonConfig {
    /// General settings.
    pub global: GlobalConfig,
    /// Drives listed in the storage section, in display order.
    pub storage: Vec<DriveConfig>,
    /// Static DIMM descriptors; empty hides the module table.
    pub memory_modules: Vec<MemoryModule>,
    /// Theme / palette settings.
    pub theme: ThemeConfig,
    /// Commands launched on click.
    pub click: ClickConfig,
}

impl Default for SysmonConfig {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            storage: vec![DriveConfig::new("System", "/", "\u{f0a0}")],
            memory_modules: Vec::new(),
            theme: ThemeConfig::default(),
            click: ClickConfig::default(),
        }
    }
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// CPU model override; empty = read from `/proc/cpuinfo`.
    pub cpu_name: String,
    /// GPU model override; empty = ask `nvidia-smi`.
    pub gpu_name: String,
    /// Number of samples kept per history buffer, and the minimum tooltip
    /// width in columns.
    pub tooltip_width: usize,
    /// Where the rolling history is persisted between runs.
    pub history_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            cpu_name:      String::new(),
            gpu_name:      String::new(),
            tooltip_width: 70,
            history_file:  std::env::temp_dir().join("waybar_sysmon_history.json"),
        }
    }
}

/// One `[[storage]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveConfig {
    /// Display name, e.g. `"Games"`.
    pub name: String,
    /// Any path on the filesystem to report, e.g. `"/mnt/games"`.
    pub mount: String,
    /// Nerd Font glyph.
    #[serde(default)]
    pub icon: String,
}

impl DriveConfig {
    pub fn new(name: impl Into<String>, mount: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name:  name.into(),
            mount: mount.into(),
            icon:  icon.into(),
        }
    }
}

/// One `[[memory_modules]]` entry, shown verbatim in the memory table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryModule {
    pub label: String,
    /// e.g. `"16 GB"`.
    pub size: String,
    /// e.g. `"3200 MHz"`.
    pub speed: String,
    #[serde(rename = "type", default = "MemoryModule::default_kind")]
    pub kind: String,
    #[serde(default = "MemoryModule::default_rank")]
    pub rank: String,
    /// Module temperature in °C.
    #[serde(default)]
    pub temp: i32,
}

impl MemoryModule {
    fn default_kind() -> String {
        "DDR4".to_string()
    }

    fn default_rank() -> String {
        "Dual".to_string()
    }
}

/// Theme / palette configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Alacritty-style TOML theme (`[colors.normal]` / `[colors.bright]`).
    /// Empty = built-in palette. A leading `~/` is expanded.
    pub path: String,
}

/// Click actions, dispatched from `$WAYBAR_CLICK_TYPE`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickConfig {
    /// Run inside a terminal on left click.
    pub left: Vec<String>,
    /// Run directly on right click.
    pub right: Vec<String>,
    /// Terminal override; empty = `$TERMINAL`, then a `PATH` search.
    pub terminal: String,
    /// Footer line shown at the bottom of the tooltip; empty hides it.
    pub hint: String,
}

impl Default for ClickConfig {
    fn default() -> Self {
        Self {
            left:     vec!["btop".to_string()],
            right:    vec!["/usr/bin/coolercontrol".to_string()],
            terminal: String::new(),
            hint:     "\u{1f5b1}\u{fe0f} LMB: Btop | \u{1f5b1}\u{fe0f} RMB: C-Control".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let cfg: SysmonConfig = toml::from_str(
            r#"
            [global]
            tooltip_width = 40
            "#,
        )
        .unwrap();
        assert_eq!(cfg.global.tooltip_width, 40);
        assert!(cfg.global.cpu_name.is_empty());
        assert_eq!(cfg.storage, vec![DriveConfig::new("System", "/", "\u{f0a0}")]);
        assert_eq!(cfg.click.left, vec!["btop".to_string()]);
    }

    #[test]
    fn storage_and_modules_parse() {
        let cfg: SysmonConfig = toml::from_str(
            r#"
            [[storage]]
            name = "Games"
            mount = "/mnt/games"

            [[memory_modules]]
            label = "DIMM1"
            size = "16 GB"
            speed = "3200 MHz"
            temp = 42
            "#,
        )
        .unwrap();
        assert_eq!(cfg.storage, vec![DriveConfig::new("Games", "/mnt/games", "")]);
        let module = &cfg.memory_modules[0];
        assert_eq!(module.kind, "DDR4");
        assert_eq!(module.rank, "Dual");
        assert_eq!(module.temp, 42);
    }

    #[test]
    fn empty_storage_list_is_allowed() {
        let cfg: SysmonConfig = toml::from_str("storage = []").unwrap();
        assert!(cfg.storage.is_empty());
    }
}
