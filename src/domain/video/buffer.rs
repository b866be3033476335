// SPDX-License-Identifier: MPL-2.0
//! Buffered and played time ranges reported by the media engine.

/// A closed interval of media time in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns true if `secs` lies inside the range, both ends inclusive.
    #[must_use]
    pub fn contains(&self, secs: f64) -> bool {
        self.start <= secs && secs <= self.end
    }

    /// Length of the range in seconds (zero for inverted ranges).
    #[must_use]
    pub fn len_secs(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

/// Finds the buffered interval enclosing the current playback time.
///
/// Ranges are scanned in order and the first match wins.
#[must_use]
pub fn enclosing_range(ranges: &[TimeRange], current_secs: f64) -> Option<TimeRange> {
    ranges.iter().copied().find(|r| r.contains(current_secs))
}

/// Sum of all interval lengths, used for the played-time latch.
#[must_use]
pub fn total_length(ranges: &[TimeRange]) -> f64 {
    ranges.iter().map(TimeRange::len_secs).sum()
}

/// Presentation of the "loaded" bar segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LoadedIndicator {
    /// Nothing around the playhead is buffered (or duration is unknown).
    #[default]
    Hidden,
    /// Segment inset from the left and right edges, in percent of the bar.
    Span { left_percent: f64, right_percent: f64 },
}

impl LoadedIndicator {
    /// Resolves the indicator for the playhead position.
    ///
    /// Returns [`LoadedIndicator::Hidden`] instead of NaN-derived offsets when
    /// no range encloses the playhead or the duration is not positive.
    #[must_use]
    pub fn resolve(ranges: &[TimeRange], current_secs: f64, duration_secs: f64) -> Self {
        if !(duration_secs.is_finite() && duration_secs > 0.0) {
            return Self::Hidden;
        }
        match enclosing_range(ranges, current_secs) {
            Some(range) => Self::Span {
                left_percent: 100.0 * range.start / duration_secs,
                right_percent: 100.0 - 100.0 * range.end / duration_secs,
            },
            None => Self::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}
