//! Ranked output records.

use crate::{MatchReasons, Society, SocietyMatch};

/// A society together with the score it earned for one profile.
///
/// Derived per request and never persisted. Serialises as the society's
/// fields plus `score` and `matchReasons`; `matchReasons` is always present
/// and empty when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ScoredSociety {
    /// The scored catalog record.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub society: Society,
    /// Relevance score.
    pub score: u32,
    /// Explanations for the score.
    pub match_reasons: MatchReasons,
}

impl ScoredSociety {
    /// Attach a [`SocietyMatch`] to its society.
    #[must_use]
    pub fn new(society: Society, scored: SocietyMatch) -> Self {
        Self {
            society,
            score: scored.score,
            match_reasons: scored.match_reasons,
        }
    }

    /// Report whether any rule fired for this society.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        self.score > 0
    }

    /// Display band for the score.
    #[must_use]
    pub const fn strength(&self) -> MatchStrength {
        MatchStrength::from_score(self.score)
    }
}

/// Coarse banding of scores for display.
///
/// # Examples
/// ```
/// use society_match_core::MatchStrength;
///
/// assert_eq!(MatchStrength::from_score(12), MatchStrength::High);
/// assert_eq!(MatchStrength::from_score(8), MatchStrength::Mid);
/// assert_eq!(MatchStrength::from_score(0), MatchStrength::Low);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchStrength {
    /// Below [`MatchStrength::MID_THRESHOLD`].
    Low,
    /// At least [`MatchStrength::MID_THRESHOLD`].
    Mid,
    /// At least [`MatchStrength::HIGH_THRESHOLD`].
    High,
}

impl MatchStrength {
    /// Lowest score banded as [`MatchStrength::High`].
    pub const HIGH_THRESHOLD: u32 = 12;
    /// Lowest score banded as [`MatchStrength::Mid`].
    pub const MID_THRESHOLD: u32 = 6;

    /// Band a raw score.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Self::High
        } else if score >= Self::MID_THRESHOLD {
            Self::Mid
        } else {
            Self::Low
        }
    }
}
