//! Core domain types for the society matching engine.
//!
//! The crate models the campus catalog ([`Society`], [`Category`]), the
//! per-request query ([`Profile`]) and the ranked output ([`ScoredSociety`]
//! with its [`MatchReasons`]). Scoring strategies plug in through the
//! [`Scorer`] trait and catalog sources through [`CatalogStore`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod category;
pub mod profile;
pub mod reason;
pub mod scored;
pub mod scorer;
pub mod society;
pub mod terms;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::{CatalogStore, MemoryCatalog};
pub use category::{Category, ParseCategoryError};
pub use profile::Profile;
pub use reason::{MatchKind, MatchReason, MatchReasons};
pub use scored::{MatchStrength, ScoredSociety};
pub use scorer::{Scorer, SocietyMatch};
pub use society::Society;
