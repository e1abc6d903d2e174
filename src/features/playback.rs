//! Loop modes and track transitions
//!
//! All code that decides which track comes next goes through
//! [`PlaybackStateMachine`], both for natural track end and for user skips.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Deserializer, Serialize};

/// Loop mode, cycled by the loop button in a fixed ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// Play in order, wrap to the first track after the last
    #[default]
    ListRepeat,
    /// Replay the current track
    SingleRepeat,
    /// Random track other than the current one
    Shuffle,
    /// Play in order, stop after the last track
    SequentialStop,
}

impl std::fmt::Display for LoopMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl LoopMode {
    /// All modes in cycle order
    #[cfg(test)]
    pub const ALL: [LoopMode; 4] = [
        LoopMode::ListRepeat,
        LoopMode::SingleRepeat,
        LoopMode::Shuffle,
        LoopMode::SequentialStop,
    ];

    /// Get the next loop mode in cycle order
    pub fn next(self) -> Self {
        match self {
            LoopMode::ListRepeat => LoopMode::SingleRepeat,
            LoopMode::SingleRepeat => LoopMode::Shuffle,
            LoopMode::Shuffle => LoopMode::SequentialStop,
            LoopMode::SequentialStop => LoopMode::ListRepeat,
        }
    }

    /// Get display name for the mode
    pub fn display_name(&self) -> &'static str {
        match self {
            LoopMode::ListRepeat => "列表循环",
            LoopMode::SingleRepeat => "单曲循环",
            LoopMode::Shuffle => "随机播放",
            LoopMode::SequentialStop => "顺序循环",
        }
    }

    /// Parse a configuration name such as `"list_repeat"`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "list_repeat" => Some(LoopMode::ListRepeat),
            "single_repeat" => Some(LoopMode::SingleRepeat),
            "shuffle" => Some(LoopMode::Shuffle),
            "sequential_stop" => Some(LoopMode::SequentialStop),
            _ => None,
        }
    }
}

/// Lenient deserializer: an unknown mode name falls back to the default
pub fn deserialize_loop_mode_lenient<'de, D>(deserializer: D) -> Result<LoopMode, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(LoopMode::from_name(&name).unwrap_or_else(|| {
        tracing::warn!(
            "Unknown loop mode {:?} in settings, using {:?}",
            name,
            LoopMode::default()
        );
        LoopMode::default()
    }))
}

/// What to do when the current track reaches its end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Load (or reload) and play the track at this index
    Load(usize),
    /// Leave playback stopped on the current track
    Stop,
}

/// Direction of a user-requested skip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDirection {
    Previous,
    Next,
}

/// Owns the loop mode and computes track transitions
pub struct PlaybackStateMachine {
    mode: LoopMode,
    rng: StdRng,
}

impl std::fmt::Debug for PlaybackStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackStateMachine")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl PlaybackStateMachine {
    /// Create a state machine seeded from the OS
    pub fn new(mode: LoopMode) -> Self {
        Self::with_rng(mode, StdRng::from_os_rng())
    }

    /// Create a state machine with a given random source
    pub fn with_rng(mode: LoopMode, rng: StdRng) -> Self {
        Self { mode, rng }
    }

    pub fn mode(&self) -> LoopMode {
        self.mode
    }

    /// Advance the loop mode ring and return the new mode
    pub fn cycle_mode(&mut self) -> LoopMode {
        self.mode = self.mode.next();
        self.mode
    }

    /// Transition taken when track `current` of `len` tracks ends
    pub fn on_track_end(&mut self, current: usize, len: usize) -> Transition {
        if len == 0 {
            return Transition::Stop;
        }

        match self.mode {
            LoopMode::ListRepeat => Transition::Load((current + 1) % len),
            LoopMode::SingleRepeat => Transition::Load(current),
            LoopMode::Shuffle => Transition::Load(self.random_other(current, len)),
            LoopMode::SequentialStop => {
                let next = current + 1;
                if next >= len {
                    Transition::Stop
                } else {
                    Transition::Load(next)
                }
            }
        }
    }

    /// Index selected by a previous/next button press
    ///
    /// Shuffle picks a random other track, every other mode steps with wrap-around.
    pub fn skip(&mut self, current: usize, len: usize, direction: SkipDirection) -> Option<usize> {
        if len == 0 {
            return None;
        }

        let index = match (self.mode, direction) {
            (LoopMode::Shuffle, _) => self.random_other(current, len),
            (_, SkipDirection::Next) => (current + 1) % len,
            (_, SkipDirection::Previous) => {
                if current == 0 {
                    len - 1
                } else {
                    current - 1
                }
            }
        };
        Some(index)
    }

    /// Uniform pick over `[0, len)` without `current`; `current` when it is the only track
    fn random_other(&mut self, current: usize, len: usize) -> usize {
        if len <= 1 {
            return current;
        }
        let pick = self.rng.random_range(0..len - 1);
        if pick >= current { pick + 1 } else { pick }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(mode: LoopMode) -> PlaybackStateMachine {
        PlaybackStateMachine::with_rng(mode, StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_mode_ring() {
        let mut mode = LoopMode::ListRepeat;
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(
            seen,
            [
                LoopMode::ListRepeat,
                LoopMode::SingleRepeat,
                LoopMode::Shuffle,
                LoopMode::SequentialStop,
                LoopMode::ListRepeat
            ]
        );
    }

    #[test]
    fn test_cycle_mode_updates_machine() {
        let mut sm = machine(LoopMode::SequentialStop);
        assert_eq!(sm.cycle_mode(), LoopMode::ListRepeat);
        assert_eq!(sm.mode(), LoopMode::ListRepeat);
    }

    #[test]
    fn test_list_repeat_wraps() {
        let mut sm = machine(LoopMode::ListRepeat);
        assert_eq!(sm.on_track_end(0, 3), Transition::Load(1));
        assert_eq!(sm.on_track_end(2, 3), Transition::Load(0));
    }

    #[test]
    fn test_single_repeat_reloads_current() {
        let mut sm = machine(LoopMode::SingleRepeat);
        assert_eq!(sm.on_track_end(1, 3), Transition::Load(1));
    }

    #[test]
    fn test_sequential_stop_terminates_at_end() {
        let mut sm = machine(LoopMode::SequentialStop);
        assert_eq!(sm.on_track_end(1, 3), Transition::Load(2));
        assert_eq!(sm.on_track_end(2, 3), Transition::Stop);
    }

    #[test]
    fn test_shuffle_never_repeats_current() {
        let mut sm = machine(LoopMode::Shuffle);
        let mut hits = [0usize; 5];
        for _ in 0..10_000 {
            match sm.on_track_end(2, 5) {
                Transition::Load(next) => {
                    assert_ne!(next, 2);
                    hits[next] += 1;
                }
                Transition::Stop => panic!("shuffle never stops"),
            }
        }
        // Every other track is reachable
        for (idx, count) in hits.iter().enumerate() {
            if idx != 2 {
                assert!(*count > 2000, "track {} picked {} times", idx, count);
            }
        }
    }

    #[test]
    fn test_shuffle_single_track_stays() {
        let mut sm = machine(LoopMode::Shuffle);
        assert_eq!(sm.on_track_end(0, 1), Transition::Load(0));
    }

    #[test]
    fn test_empty_catalog_stops() {
        for mode in LoopMode::ALL {
            let mut sm = machine(mode);
            assert_eq!(sm.on_track_end(0, 0), Transition::Stop);
            assert_eq!(sm.skip(0, 0, SkipDirection::Next), None);
        }
    }

    #[test]
    fn test_skip_wraps_in_both_directions() {
        let mut sm = machine(LoopMode::SequentialStop);
        assert_eq!(sm.skip(2, 3, SkipDirection::Next), Some(0));
        assert_eq!(sm.skip(0, 3, SkipDirection::Previous), Some(2));
        assert_eq!(sm.skip(1, 3, SkipDirection::Previous), Some(0));

        let mut sm = machine(LoopMode::SingleRepeat);
        assert_eq!(sm.skip(1, 3, SkipDirection::Next), Some(2));
    }

    #[test]
    fn test_skip_in_shuffle_picks_other_track() {
        let mut sm = machine(LoopMode::Shuffle);
        for _ in 0..200 {
            let next = sm.skip(0, 4, SkipDirection::Previous).unwrap_or(0);
            assert!((1..4).contains(&next));
        }
    }

    #[test]
    fn test_loop_mode_names_round_trip() {
        for mode in LoopMode::ALL {
            let json = serde_json::to_string(&mode).unwrap_or_default();
            let name = json.trim_matches('"');
            assert_eq!(LoopMode::from_name(name), Some(mode));
        }
        assert_eq!(LoopMode::from_name("party"), None);
    }
}
