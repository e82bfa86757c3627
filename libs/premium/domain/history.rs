//! Bounded rolling history of premium samples

use std::collections::VecDeque;

use super::models::Sample;

/// Append-only FIFO of samples with a fixed capacity
///
/// Owned exclusively by the poll loop; the renderer only ever sees owned
/// snapshots. When an append would exceed capacity the oldest sample is
/// evicted.
#[derive(Debug)]
pub struct HistoryBuffer {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Create an empty buffer holding at most `capacity` samples
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be positive");

        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest one when at capacity
    pub fn append(&mut self, sample: Sample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Owned copy of the current series, oldest first
    pub fn snapshot(&self) -> Vec<Sample> {
        self.samples.iter().cloned().collect()
    }

    /// Most recently appended sample
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn sample(premium: f64) -> Sample {
        let reference = 7.20;
        let mid = reference * (1.0 + premium / 100.0);
        Sample::new(Local::now(), premium, mid, reference)
    }

    #[test]
    fn test_append_within_capacity() {
        let mut buffer = HistoryBuffer::new(100);

        for i in 0..50 {
            buffer.append(sample(i as f64 / 100.0));
        }

        assert_eq!(buffer.len(), 50);
        assert!(buffer.len() <= buffer.capacity());
    }

    #[test]
    fn test_eviction_drops_exactly_the_oldest() {
        let mut buffer = HistoryBuffer::new(100);

        // Fill to capacity with premiums 1..=100
        for i in 1..=100 {
            buffer.append(sample(i as f64));
        }
        assert_eq!(buffer.len(), 100);

        buffer.append(sample(101.0));

        // [s2..s100, s101]: length unchanged, oldest gone, order preserved
        let snapshot = buffer.snapshot();
        assert_eq!(snapshot.len(), 100);
        assert_eq!(snapshot[0].premium_rate, 2.0);
        assert_eq!(snapshot[98].premium_rate, 100.0);
        assert_eq!(snapshot[99].premium_rate, 101.0);
    }

    #[test]
    fn test_snapshot_is_an_owned_copy() {
        let mut buffer = HistoryBuffer::new(10);
        buffer.append(sample(1.0));

        let mut snapshot = buffer.snapshot();
        assert_eq!(snapshot.last().unwrap().premium_rate, 1.0);

        // Mutating the snapshot must not touch the buffer
        snapshot.clear();
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.latest().unwrap().premium_rate, 1.0);
    }

    #[test]
    fn test_latest_tracks_last_append() {
        let mut buffer = HistoryBuffer::new(10);
        assert!(buffer.latest().is_none());
        assert!(buffer.is_empty());

        buffer.append(sample(0.5));
        buffer.append(sample(-0.3));

        assert_eq!(buffer.latest().unwrap().premium_rate, -0.3);
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_zero_capacity_rejected() {
        HistoryBuffer::new(0);
    }
}
