//! Matching and ranking engine for campus societies.
//!
//! The crate turns a visitor [`Profile`] and a catalog of [`Society`]
//! records into a ranked, explained list:
//! - **Scoring** ([`SocietyScorer`]) applies the category, keyword, skill
//!   and role rules with configurable [`MatchWeights`] and records a
//!   [`MatchReason`](society_match_core::MatchReason) for each rule that
//!   fires.
//! - **Ranking** ([`Ranker`]) scores every society independently and sorts
//!   by score, breaking ties by name.
//!
//! The engine is synchronous and holds no mutable state, so one scorer or
//! ranker can serve concurrent callers against a shared catalog snapshot.
//!
//! # Examples
//!
//! ```
//! use society_match_core::{Category, Profile, Society};
//! use society_match_scorer::rank_societies;
//!
//! let catalog = vec![
//!     Society::new(1, "Nebula", Category::Technical).with_tags(["ai"]),
//!     Society::new(6, "Art Society", Category::Art),
//! ];
//! let profile = Profile::new().with_interests(["AI"]);
//! let ranked = rank_societies(&catalog, &profile);
//! assert_eq!(ranked[0].society.name, "Nebula");
//! assert_eq!(ranked[0].score, 3);
//! assert!(ranked[1].match_reasons.is_empty());
//! ```

#![forbid(unsafe_code)]

mod matcher;
mod rank;
mod weights;

pub use matcher::SocietyScorer;
pub use rank::{RankOptions, Ranker, compare_names, ranking_order};
pub use weights::{
    CATEGORY_MATCH, KEYWORD_MATCH, MAX_KEYWORD_MATCHES, MatchWeights, ROLE_MATCH, SKILL_MATCH,
};

use society_match_core::{Profile, ScoredSociety, Scorer, Society, SocietyMatch};

/// Score one society with the default weights.
///
/// # Examples
/// ```
/// use society_match_core::{Category, MatchReason, Profile, Society};
/// use society_match_scorer::score_society;
///
/// let society = Society::new(1, "Nebula", Category::Technical);
/// let scored = score_society(&society, &Profile::new().with_interests(["technical"]));
/// assert_eq!(scored.score, 5);
/// assert_eq!(
///     scored.match_reasons.as_slice(),
///     [MatchReason::Category("technical".into())]
/// );
/// ```
#[must_use]
pub fn score_society(society: &Society, profile: &Profile) -> SocietyMatch {
    SocietyScorer::default().score(society, profile)
}

/// Rank a catalog with the default weights, keeping every society.
#[must_use]
pub fn rank_societies(catalog: &[Society], profile: &Profile) -> Vec<ScoredSociety> {
    Ranker::new(SocietyScorer::default()).rank(catalog, profile)
}
