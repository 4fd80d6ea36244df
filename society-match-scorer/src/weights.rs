//! Tunable weights consumed by the scoring rules.
#![forbid(unsafe_code)]

/// Points added when an interest matches the society category.
pub const CATEGORY_MATCH: u32 = 5;
/// Points added per interest found in the society text.
pub const KEYWORD_MATCH: u32 = 3;
/// Points added per matching society skill.
pub const SKILL_MATCH: u32 = 4;
/// Points added per matching society role.
pub const ROLE_MATCH: u32 = 4;
/// Most keyword matches counted for one society.
pub const MAX_KEYWORD_MATCHES: u32 = 3;

/// Weights applied by [`SocietyScorer`](crate::SocietyScorer).
///
/// # Examples
/// ```
/// use society_match_scorer::MatchWeights;
///
/// let weights = MatchWeights::default();
/// assert_eq!(weights.category, 5);
/// assert_eq!(weights.keyword_cap(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWeights {
    /// Category match weight, applied at most once per society.
    pub category: u32,
    /// Keyword match weight, applied per matching interest.
    pub keyword: u32,
    /// Skill match weight, applied per matching society skill.
    pub skill: u32,
    /// Role match weight, applied per matching society role.
    pub role: u32,
    /// Cap on keyword matches per society.
    pub max_keyword_matches: u32,
}

impl MatchWeights {
    /// Largest keyword contribution a single society can earn.
    #[must_use]
    pub const fn keyword_cap(&self) -> u32 {
        self.keyword.saturating_mul(self.max_keyword_matches)
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            category: CATEGORY_MATCH,
            keyword: KEYWORD_MATCH,
            skill: SKILL_MATCH,
            role: ROLE_MATCH,
            max_keyword_matches: MAX_KEYWORD_MATCHES,
        }
    }
}
