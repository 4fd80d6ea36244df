//! Facade crate for the society-match recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the default
//! scorer and ranker behind the `scorer` feature flag.

#![forbid(unsafe_code)]

pub use society_match_core::{
    CatalogStore, Category, MatchKind, MatchReason, MatchReasons, MatchStrength, MemoryCatalog,
    ParseCategoryError, Profile, ScoredSociety, Scorer, Society, SocietyMatch,
};

#[cfg(feature = "scorer")]
pub use society_match_scorer::{
    MatchWeights, RankOptions, Ranker, SocietyScorer, rank_societies, score_society,
};
