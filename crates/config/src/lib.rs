pub mod schema;

pub use schema::{ClickConfig, DriveConfig, GlobalConfig, MemoryModule, SysmonConfig, ThemeConfig};

use std::path::{Path, PathBuf};
use sysmon_core::{Result, SysmonError};

/// Load configuration from a TOML file.  Returns `SysmonConfig::default()` if
/// the file doesn't exist so the module always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<SysmonConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(SysmonConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| SysmonError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse a config document.
pub fn parse(raw: &str) -> Result<SysmonConfig> {
    toml::from_str(raw).map_err(|e| SysmonError::Config(format!("TOML parse error: {e}")))
}

/// Return the config path: `$SYSMON_CONFIG` if set, otherwise
/// `$XDG_CONFIG_HOME/sysmon/sysmon.toml`.
pub fn default_path() -> PathBuf {
    if let Ok(explicit) = std::env::var("SYSMON_CONFIG") {
        return PathBuf::from(explicit);
    }
    config_home().join("sysmon").join("sysmon.toml")
}

fn config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// `$HOME`, or the current directory when unset.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
}

/// Expand a leading `~/` against `$HOME`.
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None if path == "~" => home_dir(),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load("/nonexistent/sysmon/sysmon.toml").unwrap();
        assert_eq!(cfg.global.tooltip_width, 70);
        assert_eq!(cfg.storage.len(), 1);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = parse("global = [").unwrap_err();
        assert!(matches!(err, SysmonError::Config(_)));
    }

    #[test]
    fn expand_tilde_leaves_absolute_paths() {
        assert_eq!(expand_tilde("/etc/theme.toml"), PathBuf::from("/etc/theme.toml"));
        assert!(expand_tilde("~/theme.toml").ends_with("theme.toml"));
    }
}
