//! Rank a catalog of societies for one profile.
//!
//! Every society is scored independently, then the list is sorted by score
//! (highest first) with ties broken by name. The sort is stable, so two
//! societies with equal score and equal name keep their catalog order.

#![forbid(unsafe_code)]

use std::{cmp::Ordering, sync::LazyLock};

use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences, options::CollatorOptions};
use society_match_core::{CatalogStore, Profile, ScoredSociety, Scorer, Society};

/// Caller-selected trimming applied after sorting.
///
/// The default returns the full catalog, zero scores included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankOptions {
    /// Drop societies that scored zero.
    pub matched_only: bool,
    /// Keep at most this many entries.
    pub limit: Option<usize>,
}

impl RankOptions {
    /// Keep only societies with a positive score.
    #[must_use]
    pub const fn matched_only(mut self) -> Self {
        self.matched_only = true;
        self
    }

    /// Truncate the ranked list to `limit` entries.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Ranks catalogs with a [`Scorer`].
///
/// # Examples
/// ```
/// use society_match_core::{Category, Profile, Society};
/// use society_match_scorer::{Ranker, SocietyScorer};
///
/// let catalog = vec![
///     Society::new(1, "Nebula", Category::Technical),
///     Society::new(6, "Art Society", Category::Art),
/// ];
/// let ranker = Ranker::new(SocietyScorer::default());
/// let ranked = ranker.rank(&catalog, &Profile::new());
/// let names: Vec<_> = ranked.iter().map(|s| s.society.name.as_str()).collect();
/// assert_eq!(names, ["Art Society", "Nebula"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ranker<S> {
    scorer: S,
}

impl<S: Scorer> Ranker<S> {
    /// Build a ranker around `scorer`.
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// The wrapped scorer.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score and sort the whole catalog.
    #[must_use]
    pub fn rank<C>(&self, catalog: &C, profile: &Profile) -> Vec<ScoredSociety>
    where
        C: CatalogStore + ?Sized,
    {
        self.rank_with(catalog, profile, RankOptions::default())
    }

    /// Score and sort the catalog, then apply `options`.
    #[must_use]
    pub fn rank_with<C>(
        &self,
        catalog: &C,
        profile: &Profile,
        options: RankOptions,
    ) -> Vec<ScoredSociety>
    where
        C: CatalogStore + ?Sized,
    {
        let societies = catalog.snapshot();
        let mut ranked: Vec<ScoredSociety> = societies
            .iter()
            .map(|society| ScoredSociety::new(society.clone(), self.scorer.score(society, profile)))
            .collect();
        ranked.sort_by(ranking_order);

        if options.matched_only {
            ranked.retain(ScoredSociety::is_match);
        }
        if let Some(limit) = options.limit {
            ranked.truncate(limit);
        }

        log::debug!(
            "Ranked {} societies, returning {} ({} matched)",
            societies.len(),
            ranked.len(),
            ranked.iter().filter(|entry| entry.is_match()).count()
        );
        ranked
    }
}

/// Total order used for ranking: score descending, then name.
#[must_use]
pub fn ranking_order(left: &ScoredSociety, right: &ScoredSociety) -> Ordering {
    right
        .score
        .cmp(&left.score)
        .then_with(|| compare_names(&left.society, &right.society))
}

/// Root-locale collator shared by every ranking.
static NAME_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(CollatorPreferences::default(), CollatorOptions::default())
        .inspect_err(|err| log::warn!("Root collation unavailable, using case folding: {err}"))
        .ok()
});

/// Tie-break comparison between society names.
///
/// Names are collated with the Unicode root locale, so accented names sort
/// beside their base letters and lowercase precedes uppercase when names
/// differ only in case. Exact byte order settles names the collator treats
/// as equal, keeping the order total.
#[must_use]
pub fn compare_names(left: &Society, right: &Society) -> Ordering {
    let collated = NAME_COLLATOR.as_ref().map_or_else(
        || left.name.to_lowercase().cmp(&right.name.to_lowercase()),
        |collator| collator.compare(&left.name, &right.name),
    );
    collated.then_with(|| left.name.cmp(&right.name))
}
