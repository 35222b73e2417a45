//! Edge-triggered end-of-list detection over a stream of scroll samples.

use std::time::{Duration, Instant};

/// One sample of the list's scroll geometry, in rows.
#[derive(Debug, Clone, Copy)]
pub struct ScrollMetrics {
    pub content_height: f64,
    pub visible_height: f64,
    pub offset: f64,
}

/// Turns continuous scroll-position samples into discrete "reached the end"
/// events.
///
/// Samples are throttled to at most one per `min_interval`; accepted samples
/// are reduced to a near-end boolean, and only the false-to-true edge yields
/// an event. Holding the list at the bottom therefore fires exactly once
/// until the user scrolls back up.
#[derive(Debug)]
pub struct EndOfListDetector {
    threshold: f64,
    min_interval: Duration,
    last_sample_at: Option<Instant>,
    near_end: bool,
}

impl EndOfListDetector {
    pub fn new(threshold: f64, min_interval: Duration) -> Self {
        Self {
            threshold,
            min_interval,
            last_sample_at: None,
            near_end: false,
        }
    }

    /// Feed one sample; returns true when a `ReachedEndOfList` event should
    /// be dispatched.
    pub fn sample(&mut self, metrics: ScrollMetrics) -> bool {
        self.sample_at(metrics, Instant::now())
    }

    /// Same as [`sample`](Self::sample) with an explicit clock, so the
    /// throttle window is testable.
    pub fn sample_at(&mut self, metrics: ScrollMetrics, now: Instant) -> bool {
        if let Some(last) = self.last_sample_at
            && now.duration_since(last) < self.min_interval
        {
            return false;
        }
        self.last_sample_at = Some(now);

        let reached = metrics.content_height > metrics.visible_height
            && metrics.offset + metrics.visible_height
                >= metrics.content_height - self.threshold;

        let edge = reached && !self.near_end;
        self.near_end = reached;
        edge
    }
}
