use serde::Serialize;

/// The record Waybar reads from a `custom` module with `"return-type": "json"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    pub text:    String,
    pub tooltip: String,
    pub markup:  &'static str,
    #[serde(rename = "click-events")]
    pub click_events: bool,
}

impl Payload {
    pub fn new(text: String, tooltip: String) -> Self {
        Self {
            text,
            tooltip,
            markup: "pango",
            click_events: true,
        }
    }

    /// Single-line JSON; embedded newlines in the tooltip are escaped.
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
