//! User profiles: the interests, skills and role goals a visitor declares.
//!
//! Every term is normalised on the way in (see [`crate::terms`]), so the
//! scorer can compare profile terms directly. Skills and role goals are
//! optional: a profile that never declared them behaves exactly like a
//! minimal interests-only profile.

use crate::terms::normalise_all;

/// Declared preferences used as the query against the catalog.
///
/// # Examples
/// ```
/// use society_match_core::Profile;
///
/// let profile = Profile::new()
///     .with_interests(["Coding", "AI", "coding"])
///     .with_skills(["Python"]);
/// assert_eq!(profile.interests(), ["coding", "ai"]);
/// assert_eq!(profile.skills(), Some(&["python".to_owned()][..]));
/// assert!(profile.role_goals().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "record::ProfileRecord", into = "record::ProfileRecord")
)]
pub struct Profile {
    interests: Vec<String>,
    skills: Option<Vec<String>>,
    role_goals: Option<Vec<String>>,
}

impl Profile {
    /// Construct an empty profile.
    ///
    /// # Examples
    /// ```
    /// use society_match_core::Profile;
    ///
    /// assert!(Profile::new().is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the interests while returning `self` for chaining.
    #[must_use]
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.interests = normalise_all(interests);
        self
    }

    /// Declare skills, marking this as a rich profile.
    #[must_use]
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.skills = Some(normalise_all(skills));
        self
    }

    /// Declare role goals, marking this as a rich profile.
    #[must_use]
    pub fn with_role_goals<I, S>(mut self, role_goals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.role_goals = Some(normalise_all(role_goals));
        self
    }

    /// Normalised interests in declaration order.
    #[must_use]
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Normalised skills, or `None` when the profile never declared any.
    #[must_use]
    pub fn skills(&self) -> Option<&[String]> {
        self.skills.as_deref()
    }

    /// Normalised role goals, or `None` when the profile never declared any.
    #[must_use]
    pub fn role_goals(&self) -> Option<&[String]> {
        self.role_goals.as_deref()
    }

    /// Report whether the profile carries no usable terms at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interests.is_empty()
            && self.skills().is_none_or(<[String]>::is_empty)
            && self.role_goals().is_none_or(<[String]>::is_empty)
    }

    /// Union this profile with `other`.
    ///
    /// Terms from `self` come first. An optional field is present in the
    /// result when either side declared it.
    ///
    /// # Examples
    /// ```
    /// use society_match_core::Profile;
    ///
    /// let stored = Profile::new().with_interests(["dance"]);
    /// let request = Profile::new().with_interests(["art", "Dance"]);
    /// let merged = stored.merged_with(&request);
    /// assert_eq!(merged.interests(), ["dance", "art"]);
    /// ```
    #[must_use]
    pub fn merged_with(&self, other: &Self) -> Self {
        Self {
            interests: normalise_all(self.interests.iter().chain(&other.interests)),
            skills: merge_optional(self.skills(), other.skills()),
            role_goals: merge_optional(self.role_goals(), other.role_goals()),
        }
    }
}

fn merge_optional(left: Option<&[String]>, right: Option<&[String]>) -> Option<Vec<String>> {
    match (left, right) {
        (None, None) => None,
        (left, right) => Some(normalise_all(
            left.unwrap_or_default()
                .iter()
                .chain(right.unwrap_or_default()),
        )),
    }
}

#[cfg(feature = "serde")]
mod record {
    use serde::{Deserialize, Deserializer, Serialize};

    use super::Profile;
    use crate::terms::normalise_all;

    /// Wire shape of a profile: `interests`, `skills`, `roleGoals`.
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct ProfileRecord {
        #[serde(default, deserialize_with = "lenient_terms")]
        interests: Option<Vec<String>>,
        #[serde(
            default,
            deserialize_with = "lenient_terms",
            skip_serializing_if = "Option::is_none"
        )]
        skills: Option<Vec<String>>,
        #[serde(
            default,
            deserialize_with = "lenient_terms",
            skip_serializing_if = "Option::is_none"
        )]
        role_goals: Option<Vec<String>>,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    /// Accept an array of arbitrary JSON values and keep only the strings.
    fn lenient_terms<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries: Option<Vec<Entry>> = Option::deserialize(deserializer)?;
        Ok(entries.map(|items| {
            let total = items.len();
            let terms: Vec<String> = items
                .into_iter()
                .filter_map(|entry| match entry {
                    Entry::Text(text) => Some(text),
                    Entry::Other(_) => None,
                })
                .collect();
            let skipped = total.saturating_sub(terms.len());
            if skipped > 0 {
                log::warn!("Skipped {skipped} non-string profile entries");
            }
            terms
        }))
    }

    impl From<ProfileRecord> for Profile {
        fn from(record: ProfileRecord) -> Self {
            Self {
                interests: normalise_all(record.interests.unwrap_or_default()),
                skills: record.skills.map(normalise_all),
                role_goals: record.role_goals.map(normalise_all),
            }
        }
    }

    impl From<Profile> for ProfileRecord {
        fn from(profile: Profile) -> Self {
            Self {
                interests: Some(profile.interests),
                skills: profile.skills,
                role_goals: profile.role_goals,
            }
        }
    }
}
