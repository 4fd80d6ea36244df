//! Structured explanations for why a society scored.
//!
//! Each scoring rule that fires records a [`MatchReason`]. The reasons for
//! one society are collected in [`MatchReasons`], which drops repeated
//! `(kind, label)` pairs and otherwise keeps the order in which rules fired.

/// The rule that produced a [`MatchReason`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// An interest matched the society category.
    Category,
    /// An interest appeared in the society name, description or tags.
    Interest,
    /// A profile skill overlapped a society skill.
    Skill,
    /// A role goal overlapped a society role.
    Role,
}

impl MatchKind {
    /// Return the kind as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Interest => "interest",
            Self::Skill => "skill",
            Self::Role => "role",
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fired scoring rule and the label it matched on.
///
/// Serialises as `{ "kind": "...", "label": "..." }`.
///
/// # Examples
/// ```
/// use society_match_core::{MatchKind, MatchReason};
///
/// let reason = MatchReason::Skill("Python".into());
/// assert_eq!(reason.kind(), MatchKind::Skill);
/// assert_eq!(reason.label(), "Python");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "label", rename_all = "lowercase")
)]
pub enum MatchReason {
    /// Category label of the society.
    Category(String),
    /// Normalised interest found in the society text.
    Interest(String),
    /// Society skill, as listed in the catalog.
    Skill(String),
    /// Society role, as listed in the catalog.
    Role(String),
}

impl MatchReason {
    /// The rule this reason came from.
    #[must_use]
    pub const fn kind(&self) -> MatchKind {
        match self {
            Self::Category(_) => MatchKind::Category,
            Self::Interest(_) => MatchKind::Interest,
            Self::Skill(_) => MatchKind::Skill,
            Self::Role(_) => MatchKind::Role,
        }
    }

    /// The label the rule matched on.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Category(label) | Self::Interest(label) | Self::Skill(label) | Self::Role(label) => {
                label
            }
        }
    }
}

/// Ordered, de-duplicated reasons for a single society.
///
/// # Examples
/// ```
/// use society_match_core::{MatchReason, MatchReasons};
///
/// let mut reasons = MatchReasons::new();
/// assert!(reasons.record(MatchReason::Interest("coding".into())));
/// assert!(!reasons.record(MatchReason::Interest("coding".into())));
/// assert_eq!(reasons.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct MatchReasons {
    reasons: Vec<MatchReason>,
}

impl MatchReasons {
    /// Construct an empty reason list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reasons: Vec::new(),
        }
    }

    /// Append `reason` unless an identical `(kind, label)` pair is present.
    ///
    /// Returns `true` when the reason was new.
    pub fn record(&mut self, reason: MatchReason) -> bool {
        if self.reasons.contains(&reason) {
            return false;
        }
        self.reasons.push(reason);
        true
    }

    /// Iterate over the reasons in the order they were recorded.
    pub fn iter(&self) -> std::slice::Iter<'_, MatchReason> {
        self.reasons.iter()
    }

    /// Borrow the reasons as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[MatchReason] {
        &self.reasons
    }

    /// Number of recorded reasons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    /// Report whether no rule fired.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}

impl<'a> IntoIterator for &'a MatchReasons {
    type Item = &'a MatchReason;
    type IntoIter = std::slice::Iter<'a, MatchReason>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MatchReasons {
    type Item = MatchReason;
    type IntoIter = std::vec::IntoIter<MatchReason>;

    fn into_iter(self) -> Self::IntoIter {
        self.reasons.into_iter()
    }
}

impl FromIterator<MatchReason> for MatchReasons {
    fn from_iter<T: IntoIterator<Item = MatchReason>>(iter: T) -> Self {
        let mut reasons = Self::new();
        for reason in iter {
            reasons.record(reason);
        }
        reasons
    }
}
