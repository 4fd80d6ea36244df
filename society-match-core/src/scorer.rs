//! Score societies for a user profile.
//!
//! The `Scorer` trait assigns a relevance score and a set of match reasons
//! to a [`Society`](crate::Society) given a visitor's
//! [`Profile`](crate::Profile).

use crate::{MatchReasons, Profile, Society};

/// Score and explanation produced for one society.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SocietyMatch {
    /// Sum of the weights of every rule that fired.
    pub score: u32,
    /// Reasons in the order their rules fired.
    pub match_reasons: MatchReasons,
}

impl SocietyMatch {
    /// A match where no rule fired.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            score: 0,
            match_reasons: MatchReasons::new(),
        }
    }
}

/// Calculate a relevance score for a society.
///
/// Higher scores indicate a better match between the society and the
/// caller's profile. Implementations must be thread-safe (`Send` + `Sync`)
/// so one scorer can serve concurrent ranking calls.
///
/// Implementations must:
/// - Be pure: the same inputs always give the same score and reasons.
/// - Return [`SocietyMatch::none`] for an empty profile.
/// - Never panic on sparse societies or profiles.
///
/// # Examples
///
/// ```rust
/// use society_match_core::{Category, Profile, Scorer, Society, SocietyMatch};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, _society: &Society, _profile: &Profile) -> SocietyMatch {
///         SocietyMatch { score: 1, ..SocietyMatch::none() }
///     }
/// }
///
/// let society = Society::new(1, "Nebula", Category::Technical);
/// let scored = FlatScorer.score(&society, &Profile::new());
/// assert_eq!(scored.score, 1);
/// ```
pub trait Scorer: Send + Sync {
    /// Return the score and reasons for `society` according to `profile`.
    fn score(&self, society: &Society, profile: &Profile) -> SocietyMatch;
}
