//! Bounded visualization window over the metrics series.

use std::collections::VecDeque;

use crate::models::SeriesPoint;

/// Fixed-capacity FIFO of charted points.
///
/// Appending beyond capacity evicts from the front, so the window always
/// holds the most recent points, ordered oldest to newest. Memory stays
/// constant no matter how long the stream runs.
#[derive(Debug, Clone)]
pub struct SeriesWindow {
    points: VecDeque<SeriesPoint>,
    capacity: usize,
}

impl Default for SeriesWindow {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl SeriesWindow {
    /// Number of points the chart keeps.
    pub const DEFAULT_CAPACITY: usize = 50;

    /// Create a window holding at most `capacity` points.
    ///
    /// A capacity below one is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, evicting the oldest if the window is full.
    pub fn push(&mut self, point: SeriesPoint) {
        if self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Most recently appended point.
    pub fn latest(&self) -> Option<&SeriesPoint> {
        self.points.back()
    }

    /// Points in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter()
    }

    /// People counts in arrival order, ready for plotting.
    pub fn counts(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.count).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(count: u64) -> SeriesPoint {
        SeriesPoint {
            label: format!("10:0:{}", count % 60),
            count,
        }
    }

    #[test]
    fn short_series_keeps_every_point_in_order() {
        let mut window = SeriesWindow::default();
        for count in 1..=10 {
            window.push(point(count));
        }
        assert_eq!(window.len(), 10);
        assert_eq!(window.counts(), (1..=10).collect::<Vec<u64>>());
    }

    #[test]
    fn overflow_keeps_exactly_the_most_recent_fifty() {
        let mut window = SeriesWindow::default();
        for count in 1..=60 {
            window.push(point(count));
        }
        assert_eq!(window.len(), 50);
        assert_eq!(window.counts(), (11..=60).collect::<Vec<u64>>());
    }

    #[test]
    fn full_window_evicts_only_the_oldest() {
        let mut window = SeriesWindow::new(50);
        for count in 1..=50 {
            window.push(point(count));
        }
        window.push(point(51));
        assert_eq!(window.len(), 50);
        assert_eq!(window.counts(), (2..=51).collect::<Vec<u64>>());
    }

    #[test]
    fn latest_tracks_the_newest_point() {
        let mut window = SeriesWindow::new(3);
        assert!(window.latest().is_none());
        window.push(point(1));
        window.push(point(2));
        assert_eq!(window.latest().map(|p| p.count), Some(2));
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut window = SeriesWindow::new(0);
        window.push(point(1));
        window.push(point(2));
        assert_eq!(window.len(), 1);
        assert_eq!(window.latest().map(|p| p.count), Some(2));
    }
}
