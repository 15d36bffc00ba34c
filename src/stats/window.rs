/*
# Sliding Window Aggregator

 Trailing time window over (bits, seconds) pairs. Each push appends to the window and then,
 while the window holds more than its nominal duration, measures the windowed bitrate, keeps
 it if it is a new peak, and drops the oldest entry. Every entry is pushed and evicted once,
 so the cost per sample is constant amortized.
*/

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const WINDOW_1S: f64 = 1.0;
pub const WINDOW_5S: f64 = 5.0;
pub const WINDOW_10S: f64 = 10.0;

/// Highest windowed bitrate seen and where on the timeline the window started
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowPeak {
    pub bitrate: f64,
    pub location: f64,
}

#[derive(Debug, Clone)]
pub struct WindowAggregator {
    window_seconds: f64,
    entries: VecDeque<(f64, f64)>,
    sum_bits: f64,
    sum_seconds: f64,
    peak: WindowPeak,
}

impl WindowAggregator {
    pub fn new(window_seconds: f64) -> Self {
        Self {
            window_seconds,
            entries: VecDeque::new(),
            sum_bits: 0.0,
            sum_seconds: 0.0,
            peak: WindowPeak::default(),
        }
    }

    pub fn window_seconds(&self) -> f64 {
        self.window_seconds
    }

    /// Add one sample ending the window at `position` (playlist seconds).
    pub fn push(&mut self, bits: f64, seconds: f64, position: f64) {
        self.entries.push_back((bits, seconds));
        self.sum_bits += bits;
        self.sum_seconds += seconds;

        while self.sum_seconds > self.window_seconds {
            let bitrate = self.sum_bits / self.sum_seconds;
            // No peak until a whole window fits after the start of the timeline
            if bitrate > self.peak.bitrate && position - self.window_seconds > 0.0 {
                self.peak = WindowPeak {
                    bitrate,
                    location: (position - self.sum_seconds).max(0.0),
                };
            }

            match self.entries.pop_front() {
                Some((old_bits, old_seconds)) => {
                    self.sum_bits -= old_bits;
                    self.sum_seconds -= old_seconds;
                }
                None => break,
            }

            if self.entries.is_empty() {
                // drop accumulated rounding error
                self.sum_bits = 0.0;
                self.sum_seconds = 0.0;
            }
        }
    }

    pub fn peak(&self) -> WindowPeak {
        self.peak
    }

    /// Seconds currently held in the window
    pub fn pending_seconds(&self) -> f64 {
        self.sum_seconds
    }

    pub fn pending_bits(&self) -> f64 {
        self.sum_bits
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget all pending entries and the peak
    pub fn reset(&mut self) {
        self.entries.clear();
        self.sum_bits = 0.0;
        self.sum_seconds = 0.0;
        self.peak = WindowPeak::default();
    }
}

/// The 1, 5 and 10 second windows tracked for every chapter
#[derive(Debug, Clone)]
pub struct WindowSet {
    pub one_second: WindowAggregator,
    pub five_seconds: WindowAggregator,
    pub ten_seconds: WindowAggregator,
}

impl Default for WindowSet {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowSet {
    pub fn new() -> Self {
        Self {
            one_second: WindowAggregator::new(WINDOW_1S),
            five_seconds: WindowAggregator::new(WINDOW_5S),
            ten_seconds: WindowAggregator::new(WINDOW_10S),
        }
    }

    /// Feed the same sample into all three windows
    pub fn push(&mut self, bits: f64, seconds: f64, position: f64) {
        self.one_second.push(bits, seconds, position);
        self.five_seconds.push(bits, seconds, position);
        self.ten_seconds.push(bits, seconds, position);
    }

    pub fn peaks(&self) -> [WindowPeak; 3] {
        [
            self.one_second.peak(),
            self.five_seconds.peak(),
            self.ten_seconds.peak(),
        ]
    }

    pub fn reset(&mut self) {
        self.one_second.reset();
        self.five_seconds.reset();
        self.ten_seconds.reset();
    }
}
