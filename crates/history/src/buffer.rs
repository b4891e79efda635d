use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Rolling history of samples for one metric stream. Feeds the sparklines.
///
/// Holds at most `capacity` samples; pushing into a full buffer evicts the
/// oldest one first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingBuffer {
    samples:  VecDeque<f64>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new sample, evicting the oldest if at capacity. Non-finite
    /// samples are stored as `0.0` so the snapshot stays serializable.
    pub fn push(&mut self, value: f64) {
        if self.capacity == 0 {
            return;
        }
        let value = if value.is_finite() { value } else { 0.0 };
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    /// Change the capacity, keeping the most recent samples.
    pub fn rebound(&mut self, capacity: usize) {
        while self.samples.len() > capacity {
            self.samples.pop_front();
        }
        self.capacity = capacity;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn evicts_oldest_first() {
        let mut buf = RollingBuffer::new(3);
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            buf.push(v);
        }
        assert_eq!(buf.iter().collect::<Vec<_>>(), vec![3.0, 4.0, 5.0]);
        assert_eq!(buf.latest(), Some(5.0));
    }

    #[test]
    fn non_finite_samples_become_zero() {
        let mut buf = RollingBuffer::new(2);
        buf.push(f64::NAN);
        buf.push(f64::INFINITY);
        assert_eq!(buf.iter().collect::<Vec<_>>(), vec![0.0, 0.0]);
    }

    #[test]
    fn zero_capacity_stays_empty() {
        let mut buf = RollingBuffer::new(0);
        buf.push(1.0);
        assert!(buf.is_empty());
    }

    #[test]
    fn rebound_keeps_most_recent() {
        let mut buf = RollingBuffer::new(5);
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            buf.push(v);
        }
        buf.rebound(2);
        assert_eq!(buf.iter().collect::<Vec<_>>(), vec![4.0, 5.0]);
        buf.push(6.0);
        assert_eq!(buf.iter().collect::<Vec<_>>(), vec![5.0, 6.0]);
    }

    proptest! {
        #[test]
        fn never_exceeds_capacity(cap in 0usize..100, values in proptest::collection::vec(0.0f64..100.0, 0..300)) {
            let mut buf = RollingBuffer::new(cap);
            for v in &values {
                buf.push(*v);
                prop_assert!(buf.len() <= cap);
            }
            // the survivors are exactly the newest `cap` pushes, in order
            let keep = values.len().min(cap);
            let expected: Vec<f64> = values[values.len() - keep..].to_vec();
            prop_assert_eq!(buf.iter().collect::<Vec<_>>(), expected);
        }
    }
}
