use crate::colors::Color;

/// Tooltip sections that carry their own accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Cpu,
    Gpu,
    Memory,
    Storage,
}

/// Accent colours for a section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionStyle {
    pub icon: Color,
    pub text: Color,
}

impl SectionStyle {
    pub const fn uniform(color: Color) -> Self {
        Self { icon: color, text: color }
    }
}
