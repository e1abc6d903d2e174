//! Active lyric line lookup
//!
//! Runs on every playback tick, so the lookup is a binary search over the
//! sorted `time` field rather than a linear scan.

use super::parser::LyricLine;

/// Find the index of the lyric line active at `current_time` (seconds)
///
/// Returns the greatest index `i` with `lyrics[i].time <= current_time`.
/// Before the first line the first index is returned, so the opening line is
/// shown highlighted while the intro plays. Returns `None` only for an empty
/// sequence.
pub fn find_active_index(lyrics: &[LyricLine], current_time: f64) -> Option<usize> {
    if lyrics.is_empty() {
        return None;
    }

    let after = lyrics.partition_point(|line| line.time <= current_time);
    Some(after.saturating_sub(1))
}

/// Remembers the last highlighted line so the presentation step only runs on change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightTracker {
    current: Option<usize>,
}

impl HighlightTracker {
    /// The line currently highlighted, `None` before the first highlight
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Recompute the active line and return it only if it changed
    pub fn update(&mut self, lyrics: &[LyricLine], current_time: f64) -> Option<usize> {
        let index = find_active_index(lyrics, current_time)?;
        if self.current == Some(index) {
            return None;
        }
        self.current = Some(index);
        Some(index)
    }

    /// Forget the highlighted line (new track loaded)
    pub fn reset(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(times: &[f64]) -> Vec<LyricLine> {
        times
            .iter()
            .enumerate()
            .map(|(i, &time)| LyricLine {
                time,
                text: format!("line {}", i),
            })
            .collect()
    }

    #[test]
    fn test_empty_sequence_has_no_active_line() {
        assert_eq!(find_active_index(&[], 12.0), None);
    }

    #[test]
    fn test_before_first_line_defaults_to_first() {
        let lyrics = lines(&[5.0, 10.0]);
        assert_eq!(find_active_index(&lyrics, 0.0), Some(0));
        assert_eq!(find_active_index(&lyrics, 4.99), Some(0));
    }

    #[test]
    fn test_exact_and_interval_lookup() {
        let lyrics = lines(&[1.0, 5.0, 9.0, 20.0]);
        assert_eq!(find_active_index(&lyrics, 1.0), Some(0));
        assert_eq!(find_active_index(&lyrics, 4.999), Some(0));
        assert_eq!(find_active_index(&lyrics, 5.0), Some(1));
        assert_eq!(find_active_index(&lyrics, 15.0), Some(2));
        assert_eq!(find_active_index(&lyrics, 300.0), Some(3));
    }

    #[test]
    fn test_duplicate_times_resolve_to_last_of_run() {
        let lyrics = lines(&[1.0, 3.0, 3.0, 3.0, 7.0]);
        assert_eq!(find_active_index(&lyrics, 3.5), Some(3));
    }

    #[test]
    fn test_matches_linear_scan() {
        let lyrics = lines(&[0.5, 0.5, 2.0, 3.25, 3.25, 8.0, 13.5, 21.0]);
        let mut t = 0.0;
        while t < 25.0 {
            let index = find_active_index(&lyrics, t).unwrap_or(usize::MAX);
            let expected = lyrics
                .iter()
                .rposition(|line| line.time <= t)
                .unwrap_or(0);
            assert_eq!(index, expected, "mismatch at t={}", t);
            if index + 1 < lyrics.len() && lyrics[index].time <= t {
                assert!(t < lyrics[index + 1].time);
            }
            t += 0.125;
        }
    }

    #[test]
    fn test_same_interval_same_index() {
        let lyrics = lines(&[2.0, 6.0, 11.0]);
        assert_eq!(
            find_active_index(&lyrics, 6.01),
            find_active_index(&lyrics, 10.99)
        );
    }

    #[test]
    fn test_tracker_reports_only_changes() {
        let lyrics = lines(&[1.0, 5.0, 9.0]);
        let mut tracker = HighlightTracker::default();

        assert_eq!(tracker.update(&lyrics, 1.5), Some(0));
        assert_eq!(tracker.update(&lyrics, 2.5), None);
        assert_eq!(tracker.update(&lyrics, 4.9), None);
        assert_eq!(tracker.update(&lyrics, 5.0), Some(1));
        // Seeking backwards is a change too
        assert_eq!(tracker.update(&lyrics, 0.2), Some(0));
        assert_eq!(tracker.current(), Some(0));

        tracker.reset();
        assert_eq!(tracker.current(), None);
        assert_eq!(tracker.update(&lyrics, 0.2), Some(0));
    }

    #[test]
    fn test_tracker_ignores_empty_lyrics() {
        let mut tracker = HighlightTracker::default();
        assert_eq!(tracker.update(&[], 3.0), None);
        assert_eq!(tracker.current(), None);
    }
}
