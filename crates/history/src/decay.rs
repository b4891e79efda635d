use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weight given to the previous average on each update.
///
/// Polls arrive at irregular intervals, so this is a per-update smoothing
/// factor rather than a time window.
pub const DECAY: f64 = 0.95;

/// Exponentially smoothed load per CPU core, carried across invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoreTracker {
    averages: BTreeMap<usize, f64>,
}

impl CoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one instantaneous sample into core `core`'s average and return
    /// the new average. The first sample for a core becomes its average.
    /// A non-finite sample counts as `0.0`.
    pub fn update(&mut self, core: usize, sample: f64) -> f64 {
        let sample = if sample.is_finite() { sample } else { 0.0 };
        let avg = self
            .averages
            .entry(core)
            .and_modify(|avg| *avg = *avg * DECAY + sample * (1.0 - DECAY))
            .or_insert(sample);
        *avg
    }

    /// Update every core from a per-core usage slice (index = core).
    pub fn update_all(&mut self, samples: &[f64]) {
        for (core, &sample) in samples.iter().enumerate() {
            self.update(core, sample);
        }
    }

    pub fn average(&self, core: usize) -> Option<f64> {
        self.averages.get(&core).copied()
    }

    /// The `n` busiest cores, highest average first; ties keep ascending
    /// core order.
    pub fn rank(&self, n: usize) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self.averages.iter().map(|(&c, &a)| (c, a)).collect();
        // stable sort over ascending keys keeps ties in core order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    pub fn len(&self) -> usize {
        self.averages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }
}
