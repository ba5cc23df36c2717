//! Bounded history of past positions used to draw orbit traces.

use std::collections::VecDeque;

use anyhow::{ensure, Result};

use super::states::NVec2;

/// Fixed-capacity FIFO of positions, oldest at the front.
///
/// Once full, each push evicts the oldest sample, so the buffer always holds
/// the most recent `capacity` positions.
#[derive(Debug, Clone)]
pub struct Trajectory {
    entries: VecDeque<NVec2>,
    capacity: usize,
}

impl Trajectory {
    pub fn new(capacity: usize) -> Result<Self> {
        ensure!(capacity > 0, "trace capacity must be at least 1");
        Ok(Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    pub fn push(&mut self, position: NVec2) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(position);
    }

    /// Change the capacity. Shrinking drops the oldest samples right away.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        ensure!(capacity > 0, "trace capacity must be at least 1");
        self.capacity = capacity;
        while self.entries.len() > capacity {
            self.entries.pop_front();
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Move every stored sample by `offset`, e.g. after a frame change.
    pub fn translate(&mut self, offset: NVec2) {
        for p in self.entries.iter_mut() {
            *p += offset;
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<NVec2> {
        self.entries.back().copied()
    }

    /// Stored positions in chronological order, oldest first.
    /// Consecutive samples form one unbroken line strip.
    pub fn as_polyline(&self) -> impl Iterator<Item = NVec2> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64) -> NVec2 {
        NVec2::new(x, 0.0)
    }

    #[test]
    fn rejects_zero_capacity() {
        assert!(Trajectory::new(0).is_err());
        let mut tr = Trajectory::new(3).unwrap();
        assert!(tr.set_capacity(0).is_err());
        assert_eq!(tr.capacity(), 3);
    }

    #[test]
    fn fills_up_to_capacity() {
        let mut tr = Trajectory::new(3).unwrap();
        assert!(tr.is_empty());
        tr.push(p(1.0));
        tr.push(p(2.0));
        assert_eq!(tr.len(), 2);
        assert_eq!(tr.latest(), Some(p(2.0)));
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut tr = Trajectory::new(3).unwrap();
        for i in 0..7 {
            tr.push(p(i as f64));
        }
        let line: Vec<_> = tr.as_polyline().collect();
        assert_eq!(line, vec![p(4.0), p(5.0), p(6.0)]);
    }

    #[test]
    fn shrinking_keeps_most_recent() {
        let mut tr = Trajectory::new(5).unwrap();
        for i in 0..5 {
            tr.push(p(i as f64));
        }
        tr.set_capacity(2).unwrap();
        let line: Vec<_> = tr.as_polyline().collect();
        assert_eq!(line, vec![p(3.0), p(4.0)]);

        tr.push(p(5.0));
        assert_eq!(tr.len(), 2);
        assert_eq!(tr.latest(), Some(p(5.0)));
    }

    #[test]
    fn growing_keeps_entries() {
        let mut tr = Trajectory::new(2).unwrap();
        tr.push(p(1.0));
        tr.push(p(2.0));
        tr.set_capacity(4).unwrap();
        tr.push(p(3.0));
        assert_eq!(tr.len(), 3);
    }

    #[test]
    fn translate_moves_every_sample() {
        let mut tr = Trajectory::new(3).unwrap();
        tr.push(p(1.0));
        tr.push(p(2.0));
        tr.translate(NVec2::new(-1.0, 3.0));
        let line: Vec<_> = tr.as_polyline().collect();
        assert_eq!(line, vec![NVec2::new(0.0, 3.0), NVec2::new(1.0, 3.0)]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut tr = Trajectory::new(4).unwrap();
        tr.push(p(1.0));
        tr.clear();
        assert!(tr.is_empty());
        assert_eq!(tr.capacity(), 4);
        assert_eq!(tr.as_polyline().count(), 0);
    }
}
