//! Click-to-launch. Waybar re-runs the module with `WAYBAR_CLICK_TYPE` set
//! when the user clicks it.

use std::path::Path;
use std::process::{Command, Stdio};
use sysmon_config::ClickConfig;
use sysmon_core::Result;
use tracing::{debug, info};

pub const CLICK_ENV: &str = "WAYBAR_CLICK_TYPE";

/// Terminals tried in order when neither the config nor `$TERMINAL` names one.
const TERMINALS: [&str; 3] = ["alacritty", "kitty", "gnome-terminal"];
const FALLBACK_TERMINAL: &str = "xterm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickType {
    Left,
    Right,
}

impl ClickType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn from_env() -> Option<Self> {
        std::env::var(CLICK_ENV).ok().as_deref().and_then(Self::parse)
    }
}

/// Pick the terminal emulator: explicit config, then `$TERMINAL`, then the
/// first known terminal accepted by `installed`, then xterm.
pub fn resolve_terminal(
    configured: &str,
    env_terminal: Option<&str>,
    installed: impl Fn(&str) -> bool,
) -> String {
    if !configured.trim().is_empty() {
        return configured.trim().to_string();
    }
    if let Some(term) = env_terminal.map(str::trim).filter(|t| !t.is_empty()) {
        return term.to_string();
    }
    TERMINALS
        .into_iter()
        .find(|t| installed(*t))
        .unwrap_or(FALLBACK_TERMINAL)
        .to_string()
}

/// Whether `name` is an executable file somewhere on `$PATH`.
pub fn on_path(name: &str) -> bool {
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| is_file(&dir.join(name))))
        .unwrap_or(false)
}

fn is_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}

/// The argv to launch for `click`, or `None` when nothing is configured.
/// Left click wraps the command in `terminal -e`.
pub fn command_line(click: ClickType, cfg: &ClickConfig, terminal: &str) -> Option<Vec<String>> {
    match click {
        ClickType::Left if !cfg.left.is_empty() => {
            let mut argv = vec![terminal.to_string(), "-e".to_string()];
            argv.extend(cfg.left.iter().cloned());
            Some(argv)
        }
        ClickType::Right if !cfg.right.is_empty() => Some(cfg.right.clone()),
        _ => None,
    }
}

/// Launch the configured action detached from our stdout, which belongs to
/// Waybar.
pub fn dispatch(click: ClickType, cfg: &ClickConfig) -> Result<()> {
    let terminal = match click {
        ClickType::Left => {
            let env = std::env::var("TERMINAL").ok();
            resolve_terminal(&cfg.terminal, env.as_deref(), on_path)
        }
        ClickType::Right => String::new(),
    };

    let Some(argv) = command_line(click, cfg, &terminal) else {
        debug!("no action configured for {click:?} click");
        return Ok(());
    };
    let Some((program, args)) = argv.split_first() else {
        return Ok(());
    };

    info!("{click:?} click: launching {}", argv.join(" "));
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_click_types() {
        assert_eq!(ClickType::parse("left"), Some(ClickType::Left));
        assert_eq!(ClickType::parse("right\n"), Some(ClickType::Right));
        assert_eq!(ClickType::parse("middle"), None);
        assert_eq!(ClickType::parse(""), None);
    }

    #[test]
    fn terminal_precedence() {
        let none = |_: &str| false;
        let kitty = |t: &str| t == "kitty";

        assert_eq!(resolve_terminal("foot", Some("wezterm"), kitty), "foot");
        assert_eq!(resolve_terminal("", Some("wezterm"), kitty), "wezterm");
        assert_eq!(resolve_terminal(" ", Some(""), kitty), "kitty");
        assert_eq!(resolve_terminal("", None, |_| true), "alacritty");
        assert_eq!(resolve_terminal("", None, none), "xterm");
    }

    #[test]
    fn left_click_runs_in_terminal() {
        let cfg = ClickConfig::default();
        assert_eq!(
            command_line(ClickType::Left, &cfg, "kitty"),
            Some(vec!["kitty".to_string(), "-e".to_string(), "btop".to_string()])
        );
    }

    #[test]
    fn right_click_runs_directly() {
        let cfg = ClickConfig::default();
        assert_eq!(
            command_line(ClickType::Right, &cfg, "kitty"),
            Some(vec!["/usr/bin/coolercontrol".to_string()])
        );
    }

    #[test]
    fn empty_command_does_nothing() {
        let cfg = ClickConfig {
            left: Vec::new(),
            right: Vec::new(),
            ..ClickConfig::default()
        };
        assert_eq!(command_line(ClickType::Left, &cfg, "xterm"), None);
        assert!(dispatch(ClickType::Right, &cfg).is_ok());
    }

    #[test]
    fn missing_program_is_an_error() {
        let cfg = ClickConfig {
            right: vec!["/nonexistent/sysmon-click-target".to_string()],
            ..ClickConfig::default()
        };
        assert!(dispatch(ClickType::Right, &cfg).is_err());
    }
}
