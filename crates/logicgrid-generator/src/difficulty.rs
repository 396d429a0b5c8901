//! Difficulty calibration policy.

use std::ops::RangeInclusive;

/// Requested puzzle difficulty.
///
/// Each difficulty maps to a target range of given counts. The mapping is a
/// tunable policy, not intrinsic to the puzzle model: a puzzle's actual
/// hardness also depends on which cells were removed, but given count is the
/// calibration knob this engine exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Difficulty {
    /// At least 40 givens.
    #[display("easy")]
    Easy,
    /// 30-39 givens.
    #[display("medium")]
    Medium,
    /// 22-29 givens.
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// The acceptable given-count range for this difficulty.
    #[must_use]
    pub const fn givens_band(self) -> RangeInclusive<usize> {
        match self {
            Self::Easy => 40..=81,
            Self::Medium => 30..=39,
            Self::Hard => 22..=29,
        }
    }

    /// The given count the removal loop aims for (the band's lower bound).
    ///
    /// Removal stops as soon as the board is down to this many givens; a
    /// pass that stalls earlier may still land inside the band.
    #[must_use]
    pub const fn removal_target(self) -> usize {
        *self.givens_band().start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_do_not_overlap() {
        assert_eq!(Difficulty::Easy.givens_band(), 40..=81);
        assert_eq!(Difficulty::Medium.givens_band(), 30..=39);
        assert_eq!(Difficulty::Hard.givens_band(), 22..=29);

        for pair in Difficulty::ALL.windows(2) {
            assert!(pair[1].givens_band().end() < pair[0].givens_band().start());
        }
    }

    #[test]
    fn test_target_is_band_start() {
        for difficulty in Difficulty::ALL {
            assert_eq!(
                difficulty.removal_target(),
                *difficulty.givens_band().start()
            );
        }
    }
}
