//! Bounded time series of recorded samples.

use std::collections::VecDeque;

use super::states::Sample;

/// Samples retained for export
pub const STORAGE_CAPACITY: usize = 4000;
/// Most recent samples handed to plotting consumers
pub const DISPLAY_CAPACITY: usize = 2000;

/// Ring buffer of samples in chronological order.
///
/// Pushing past capacity evicts the oldest sample. Consumers read through
/// owned copies (`snapshot`, `display_window`) so they never see the tail
/// while it is being appended to.
#[derive(Debug, Clone)]
pub struct TimeSeriesBuffer {
    capacity: usize,
    samples: VecDeque<Sample>,
}

impl Default for TimeSeriesBuffer {
    fn default() -> Self {
        Self::new(STORAGE_CAPACITY)
    }
}

impl TimeSeriesBuffer {
    /// Creates an empty buffer holding at most `capacity` samples (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            samples: VecDeque::with_capacity(capacity.clamp(1, STORAGE_CAPACITY)),
        }
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

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Appends a sample, evicting the oldest one when full
    pub fn push(&mut self, sample: Sample) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn extend<I: IntoIterator<Item = Sample>>(&mut self, samples: I) {
        for s in samples {
            self.push(s);
        }
    }

    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.front()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Owned copy of every retained sample
    pub fn snapshot(&self) -> Vec<Sample> {
        self.samples.iter().copied().collect()
    }

    /// Owned copy of at most the `limit` most recent samples
    pub fn display_window(&self, limit: usize) -> Vec<Sample> {
        let skip = self.samples.len().saturating_sub(limit);
        self.samples.iter().skip(skip).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(t: f64) -> Sample {
        Sample { t, x1: 0.0, v1: 0.0, x2: 0.0, v2: 0.0, k1: 0.0, k2: 0.0, us: 0.0, emec: 0.0, ediss: 0.0, p: 0.0 }
    }

    #[test]
    fn evicts_oldest_first() {
        let mut buf = TimeSeriesBuffer::new(3);
        buf.extend((0..5).map(|i| at(i as f64)));
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.oldest().map(|s| s.t), Some(2.0));
        assert_eq!(buf.latest().map(|s| s.t), Some(4.0));
    }

    #[test]
    fn display_window_keeps_the_tail() {
        let mut buf = TimeSeriesBuffer::new(10);
        buf.extend((0..6).map(|i| at(i as f64)));
        let tail: Vec<f64> = buf.display_window(4).iter().map(|s| s.t).collect();
        assert_eq!(tail, vec![2.0, 3.0, 4.0, 5.0]);
        assert_eq!(buf.display_window(100).len(), 6);
    }
}
