//! Pango markup helpers.

use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;
use sysmon_theme::Color;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static regex"));
static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(?:amp|lt|gt|apos|quot);").expect("static regex"));

/// `text` in the given foreground colour.
pub fn span(color: Color, text: impl Display) -> String {
    format!("<span foreground='{color}'>{text}</span>")
}

/// `text` at a Pango font size (1024ths of a point).
pub fn sized(size: u32, text: impl Display) -> String {
    format!("<span size='{size}'>{text}</span>")
}

/// Escape text that is interpolated into markup verbatim (device names,
/// labels from the config file).
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Drop all tags, leaving the visible text.
pub fn strip(markup: &str) -> String {
    TAG.replace_all(markup, "").into_owned()
}

/// Number of visible characters once tags are removed. An entity draws as
/// a single glyph.
pub fn visible_len(markup: &str) -> usize {
    ENTITY.replace_all(&strip(markup), "_").chars().count()
}

/// Right-align `markup` to `width` visible characters.
pub fn pad_left(markup: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(markup));
    format!("{}{markup}", " ".repeat(pad))
}

/// Left-align `markup` to `width` visible characters.
pub fn pad_right(markup: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(markup));
    format!("{markup}{}", " ".repeat(pad))
}
