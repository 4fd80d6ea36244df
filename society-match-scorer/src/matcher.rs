//! Four-factor relevance scoring for societies.
//!
//! The scorer compares a [`Profile`] against one [`Society`] using four
//! rules, evaluated in a fixed order:
//!
//! 1. **Category**: some interest is a substring of the category label.
//!    Fires at most once.
//! 2. **Keyword**: an interest is a substring of the society haystack
//!    (name, description and tags). Counted per interest, in profile order,
//!    up to [`MatchWeights::max_keyword_matches`].
//! 3. **Skill**: a society skill and some profile skill are substrings of
//!    one another, in either direction.
//! 4. **Role**: a role goal contains the first word of a society role, or
//!    the full role contains the goal.
//!
//! Rules 3 and 4 only run when the profile declared skills or role goals.
//! A rule adds its weight only when it records a new reason, so the score
//! always equals the summed weights of the reasons.

#![forbid(unsafe_code)]

use society_match_core::{
    MatchReason, MatchReasons, Profile, Scorer, Society, SocietyMatch, terms::normalise,
};

use crate::MatchWeights;

/// Rule-based [`Scorer`] for campus societies.
///
/// # Examples
/// ```
/// use society_match_core::{Category, Profile, Scorer, Society};
/// use society_match_scorer::SocietyScorer;
///
/// let society = Society::new(1, "Nebula", Category::Technical);
/// let profile = Profile::new().with_interests(["technical"]);
/// let scored = SocietyScorer::default().score(&society, &profile);
/// assert_eq!(scored.score, 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SocietyScorer {
    weights: MatchWeights,
}

impl SocietyScorer {
    /// Build a scorer using `weights`.
    #[must_use]
    pub const fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    /// The weights in effect.
    #[must_use]
    pub const fn weights(&self) -> MatchWeights {
        self.weights
    }
}

impl Scorer for SocietyScorer {
    fn score(&self, society: &Society, profile: &Profile) -> SocietyMatch {
        if profile.is_empty() {
            return SocietyMatch::none();
        }

        let mut tally = Tally::default();
        self.match_category(society, profile, &mut tally);
        self.match_keywords(society, profile, &mut tally);
        if let Some(skills) = profile.skills() {
            self.match_skills(society, skills, &mut tally);
        }
        if let Some(goals) = profile.role_goals() {
            self.match_roles(society, goals, &mut tally);
        }

        log::trace!(
            "Scored society {} ({}) at {} with {} reasons",
            society.id,
            society.name,
            tally.score,
            tally.reasons.len()
        );
        tally.finish()
    }
}

impl SocietyScorer {
    fn match_category(&self, society: &Society, profile: &Profile, tally: &mut Tally) {
        let category = society.category.as_str();
        if profile
            .interests()
            .iter()
            .any(|interest| category.contains(interest.as_str()))
        {
            tally.add(
                MatchReason::Category(category.to_owned()),
                self.weights.category,
            );
        }
    }

    fn match_keywords(&self, society: &Society, profile: &Profile, tally: &mut Tally) {
        let haystack = haystack(society);
        let mut matches = 0_u32;
        for interest in profile.interests() {
            if matches >= self.weights.max_keyword_matches {
                break;
            }
            if haystack.contains(interest.as_str())
                && tally.add(
                    MatchReason::Interest(interest.clone()),
                    self.weights.keyword,
                )
            {
                matches = matches.saturating_add(1);
            }
        }
    }

    fn match_skills(&self, society: &Society, skills: &[String], tally: &mut Tally) {
        for skill in &society.skills {
            let wanted = normalise(skill);
            if wanted.is_empty() {
                continue;
            }
            let overlaps = skills.iter().any(|held| {
                wanted.contains(held.as_str()) || held.contains(wanted.as_str())
            });
            if overlaps {
                tally.add(MatchReason::Skill(skill.clone()), self.weights.skill);
            }
        }
    }

    fn match_roles(&self, society: &Society, goals: &[String], tally: &mut Tally) {
        for role in &society.roles {
            let title = normalise(role);
            let Some(first_word) = title.split_whitespace().next() else {
                continue;
            };
            let overlaps = goals
                .iter()
                .any(|goal| goal.contains(first_word) || title.contains(goal.as_str()));
            if overlaps {
                tally.add(MatchReason::Role(role.clone()), self.weights.role);
            }
        }
    }
}

/// Lowercase text searched by the keyword rule.
fn haystack(society: &Society) -> String {
    let mut parts = Vec::with_capacity(society.tags.len().saturating_add(2));
    parts.push(society.name.as_str());
    parts.push(society.description.as_str());
    parts.extend(society.tags.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

#[derive(Debug, Default)]
struct Tally {
    score: u32,
    reasons: MatchReasons,
}

impl Tally {
    /// Record `reason` and add `weight` when the reason is new.
    fn add(&mut self, reason: MatchReason, weight: u32) -> bool {
        let fresh = self.reasons.record(reason);
        if fresh {
            self.score = self.score.saturating_add(weight);
        }
        fresh
    }

    fn finish(self) -> SocietyMatch {
        SocietyMatch {
            score: self.score,
            match_reasons: self.reasons,
        }
    }
}
