/// Per-chapter totals and the largest single sample
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameStatsTracker {
    total_bits: u64,
    total_seconds: f64,
    frame_count: u64,
    max_frame_size: u64,
    max_frame_size_at: f64,
}

impl FrameStatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account one sample at playlist `position`.
    ///
    /// Only samples flagged as frame boundaries count as frames, but every sample
    /// contributes to the totals and competes for the largest size.
    pub fn accept(&mut self, bits: u64, seconds: f64, is_frame_boundary: bool, position: f64) {
        self.total_bits = self.total_bits.saturating_add(bits);
        self.total_seconds += seconds;

        if is_frame_boundary {
            self.frame_count += 1;
        }

        let bytes = bits / 8;
        if bytes > self.max_frame_size {
            self.max_frame_size = bytes;
            self.max_frame_size_at = position;
        }
    }

    pub fn total_bits(&self) -> u64 {
        self.total_bits
    }

    pub fn total_seconds(&self) -> f64 {
        self.total_seconds
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn max_frame_size(&self) -> u64 {
        self.max_frame_size
    }

    pub fn max_frame_size_at(&self) -> f64 {
        self.max_frame_size_at
    }

    /// Average frame size in bytes, 0 without frames
    pub fn average_frame_size(&self) -> f64 {
        if self.frame_count > 0 {
            self.total_bits as f64 / self.frame_count as f64 / 8.0
        } else {
            0.0
        }
    }

    /// Bits per second over the declared chapter length, 0 for empty chapters
    pub fn average_bitrate(&self, chapter_length: f64) -> f64 {
        if chapter_length > 0.0 {
            self.total_bits as f64 / chapter_length
        } else {
            0.0
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
