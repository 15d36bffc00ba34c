use crate::stats::{FrameStatsTracker, WindowAggregator, WindowPeak, WindowSet};

#[cfg(test)]
mod test_helpers {
    use crate::stats::WindowAggregator;

    pub const MBIT: f64 = 1_000_000.0;

    /// Push `count` one-second samples of `bits` at positions 0, 1, 2, ...
    pub fn push_constant(window: &mut WindowAggregator, bits: f64, count: usize) {
        for i in 0..count {
            window.push(bits, 1.0, i as f64);
        }
    }
}

#[test]
fn test_window_without_full_span_has_no_peak() {
    let mut window = WindowAggregator::new(1.0);
    window.push(test_helpers::MBIT, 1.0, 0.5);
    assert_eq!(window.peak(), WindowPeak::default());
    assert_eq!(window.len(), 1);
    assert_eq!(window.pending_seconds(), 1.0);
}

#[test]
fn test_window_constant_rate_peak_and_location() {
    use test_helpers::*;
    let mut window = WindowAggregator::new(1.0);
    push_constant(&mut window, MBIT, 12);

    let peak = window.peak();
    assert_eq!(peak.bitrate, MBIT);
    // location is the window start (position - pending seconds), not the window end;
    // first credited at position 2 with two seconds pending
    assert_eq!(peak.location, 0.0);
    assert_eq!(window.len(), 1);
}

#[test]
fn test_window_guard_suppresses_peak_at_timeline_start() {
    use test_helpers::MBIT;
    let mut window = WindowAggregator::new(1.0);
    window.push(MBIT, 1.0, 0.0);
    window.push(5.0 * MBIT, 1.0, 1.0);
    // window was over-full at position 1, but 1 - 1 is not past the start
    assert_eq!(window.peak().bitrate, 0.0);

    window.push(MBIT, 1.0, 2.0);
    assert_eq!(window.peak().bitrate, 3.0 * MBIT);
    assert_eq!(window.peak().location, 0.0);
}

#[test]
fn test_window_spike_and_tie_keeps_first_location() {
    use test_helpers::*;
    let mut window = WindowAggregator::new(1.0);
    push_constant(&mut window, MBIT, 6);
    window.push(3.0 * MBIT, 1.0, 6.0);
    assert_eq!(window.peak().bitrate, 2.0 * MBIT);
    assert_eq!(window.peak().location, 4.0);

    // (3 + 1) / 2 again: equal, not greater
    window.push(MBIT, 1.0, 7.0);
    assert_eq!(window.peak().bitrate, 2.0 * MBIT);
    assert_eq!(window.peak().location, 4.0);
}

#[test]
fn test_window_sample_longer_than_window_drains() {
    use test_helpers::MBIT;
    let mut window = WindowAggregator::new(1.0);
    window.push(MBIT, 1.0, 5.0);
    window.push(8.0 * MBIT, 4.0, 6.0);

    // 9 Mbit over 5 s, then the long sample alone at 2 Mbps
    assert_eq!(window.peak().bitrate, 2.0 * MBIT);
    assert_eq!(window.peak().location, 2.0);
    assert!(window.is_empty());
    assert_eq!(window.pending_seconds(), 0.0);
    assert_eq!(window.pending_bits(), 0.0);
}

#[test]
fn test_window_location_clamped_at_timeline_start() {
    use test_helpers::MBIT;
    let mut window = WindowAggregator::new(1.0);
    // five seconds pending at position 2 would start the window at -3
    window.push(5.0 * MBIT, 5.0, 2.0);

    assert_eq!(window.peak().bitrate, MBIT);
    assert_eq!(window.peak().location, 0.0);
    assert!(window.is_empty());
}

#[test]
fn test_window_reset_clears_state() {
    use test_helpers::*;
    let mut window = WindowAggregator::new(1.0);
    push_constant(&mut window, MBIT, 4);
    assert!(window.peak().bitrate > 0.0);

    window.reset();
    assert!(window.is_empty());
    assert_eq!(window.peak(), WindowPeak::default());
    assert_eq!(window.pending_seconds(), 0.0);
    assert_eq!(window.window_seconds(), 1.0);
}

#[test]
fn test_window_set_converges_for_constant_rate() {
    let mut windows = WindowSet::new();
    for i in 0..12 {
        windows.push(test_helpers::MBIT, 1.0, i as f64);
    }

    let peaks = windows.peaks();
    for peak in peaks {
        assert_eq!(peak.bitrate, test_helpers::MBIT);
        assert_eq!(peak.location, 0.0);
    }

    windows.reset();
    assert!(windows.peaks().iter().all(|p| *p == WindowPeak::default()));
}

#[test]
fn test_window_set_long_window_needs_more_content() {
    let mut windows = WindowSet::new();
    for i in 0..8 {
        windows.push(test_helpers::MBIT, 1.0, i as f64);
    }

    let [one, five, ten] = windows.peaks();
    assert_eq!(one.bitrate, test_helpers::MBIT);
    assert_eq!(five.bitrate, test_helpers::MBIT);
    assert_eq!(ten.bitrate, 0.0);
}

#[test]
fn test_frame_tracker_totals_and_max() {
    let mut frames = FrameStatsTracker::new();
    frames.accept(8_000, 0.04, true, 10.0);
    frames.accept(80_000, 0.04, true, 10.04);
    frames.accept(8_000, 0.04, false, 10.08);
    frames.accept(80_000, 0.04, true, 10.12);

    assert_eq!(frames.total_bits(), 176_000);
    assert_eq!(frames.frame_count(), 3);
    assert_eq!(frames.max_frame_size(), 10_000);
    // equal size later does not move the location
    assert_eq!(frames.max_frame_size_at(), 10.04);
    assert!((frames.total_seconds() - 0.16).abs() < 1e-12);
    assert!((frames.average_frame_size() - 176_000.0 / 3.0 / 8.0).abs() < 1e-9);
    assert_eq!(frames.average_bitrate(2.0), 88_000.0);
}

#[test]
fn test_frame_tracker_guards_divisions() {
    let mut frames = FrameStatsTracker::new();
    assert_eq!(frames.average_frame_size(), 0.0);
    assert_eq!(frames.average_bitrate(0.0), 0.0);

    frames.accept(8_000, 0.04, false, 1.0);
    assert_eq!(frames.frame_count(), 0);
    assert_eq!(frames.average_frame_size(), 0.0);
    assert_eq!(frames.average_bitrate(0.0), 0.0);
    assert_eq!(frames.average_bitrate(-1.0), 0.0);

    frames.reset();
    assert_eq!(frames, FrameStatsTracker::default());
}

#[test]
fn test_frame_tracker_saturates_total_bits() {
    let mut frames = FrameStatsTracker::new();
    frames.accept(u64::MAX - 8, 1.0, true, 0.0);
    frames.accept(64, 1.0, true, 1.0);

    assert_eq!(frames.total_bits(), u64::MAX);
    assert_eq!(frames.frame_count(), 2);
    assert_eq!(frames.max_frame_size(), (u64::MAX - 8) / 8);
}
