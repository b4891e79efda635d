//! Threshold classification: numeric metric → gradient colour.
//!
//! A [`ThresholdTable`] is an ordered list of [`Tier`]s, coolest first. Each
//! tier carries one inclusive [`Range`] per [`MetricKind`]; a value takes the
//! colour of the first tier whose range for its kind contains it.
//!
//! Values that no tier claims (below the first range, in the gap between two
//! integer-bounded ranges such as `35.5 °C`, or past a bounded top range)
//! resolve to the **last** tier. Callers have always seen this behaviour, so
//! it is kept even though "coolest tier" would be the more obvious choice for
//! values below the table.

use crate::colors::Color;

/// What a value measures, selecting which range of each tier applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// CPU, GPU or DIMM temperature in °C.
    Temperature,
    /// CPU package power in watts; also used for CPU load percentages.
    CpuPower,
    /// GPU board power in watts; also used for GPU load percentages.
    GpuPower,
    /// Memory or storage usage percentage.
    MemStorage,
}

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub low:  f64,
    pub high: f64,
}

impl Range {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Range with no upper bound.
    pub const fn from(low: f64) -> Self {
        Self { low, high: f64::INFINITY }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// One band of the gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub color:       Color,
    pub temperature: Range,
    pub cpu_power:   Range,
    pub gpu_power:   Range,
    pub mem_storage: Range,
}

impl Tier {
    pub fn range(&self, kind: MetricKind) -> Range {
        match kind {
            MetricKind::Temperature => self.temperature,
            MetricKind::CpuPower    => self.cpu_power,
            MetricKind::GpuPower    => self.gpu_power,
            MetricKind::MemStorage  => self.mem_storage,
        }
    }
}

/// Ordered tiers, coolest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    tiers: Vec<Tier>,
}

impl ThresholdTable {
    pub fn new(tiers: Vec<Tier>) -> Self {
        Self { tiers }
    }

    /// The built-in seven-step cool → hot gradient.
    pub fn gradient() -> Self {
        #[rustfmt::skip]
        let tiers = vec![
            tier(0x8caaee, Range::new(0.0, 35.0),  Range::new(0.0, 30.0),    Range::new(0.0, 50.0),    Range::new(0.0, 10.0)),
            tier(0x99d1db, Range::new(36.0, 45.0), Range::new(31.0, 60.0),   Range::new(51.0, 100.0),  Range::new(10.0, 20.0)),
            tier(0x81c8be, Range::new(46.0, 54.0), Range::new(61.0, 90.0),   Range::new(101.0, 200.0), Range::new(20.0, 40.0)),
            tier(0xe5c890, Range::new(55.0, 65.0), Range::new(91.0, 120.0),  Range::new(201.0, 300.0), Range::new(40.0, 60.0)),
            tier(0xef9f76, Range::new(66.0, 75.0), Range::new(121.0, 150.0), Range::new(301.0, 400.0), Range::new(60.0, 80.0)),
            tier(0xea999c, Range::new(76.0, 85.0), Range::new(151.0, 180.0), Range::new(401.0, 450.0), Range::new(80.0, 90.0)),
            tier(0xe78284, Range::from(86.0),      Range::from(181.0),       Range::from(451.0),       Range::new(90.0, 100.0)),
        ];
        Self { tiers }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Position of the tier `value` falls into.
    ///
    /// `None` for a missing or NaN value, or an empty table. Unmatched values
    /// map to the last tier.
    pub fn tier_index(&self, value: Option<f64>, kind: MetricKind) -> Option<usize> {
        let value = value.filter(|v| !v.is_nan())?;
        let last = self.tiers.len().checked_sub(1)?;
        Some(
            self.tiers
                .iter()
                .position(|t| t.range(kind).contains(value))
                .unwrap_or(last),
        )
    }

    /// Colour for `value`; [`Color::WHITE`] when it cannot be classified.
    pub fn classify(&self, value: Option<f64>, kind: MetricKind) -> Color {
        self.tier_index(value, kind)
            .and_then(|i| self.tiers.get(i))
            .map_or(Color::WHITE, |t| t.color)
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::gradient()
    }
}

const fn tier(hex: u32, temperature: Range, cpu_power: Range, gpu_power: Range, mem_storage: Range) -> Tier {
    Tier {
        color: Color::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8),
        temperature,
        cpu_power,
        gpu_power,
        mem_storage,
    }
}

/// Per-core colour for the CPU die map, keyed on instantaneous load.
pub fn core_load_color(usage: f64) -> Color {
    const RAMP: [(f64, u32); 5] = [
        (20.0, 0x81c8be),
        (40.0, 0xa6d189),
        (60.0, 0xe5c890),
        (80.0, 0xef9f76),
        (95.0, 0xea999c),
    ];
    let hex = RAMP
        .iter()
        .find(|(limit, _)| usage < *limit)
        .map_or(0xe78284, |(_, hex)| *hex);
    Color::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}
