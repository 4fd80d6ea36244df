//! Society records held by the catalog.

use crate::Category;

/// A campus society as loaded from the catalog.
///
/// Records are immutable once loaded; the engine only reads them. Sequence
/// fields keep their catalog order for display even though matching treats
/// them as unordered.
///
/// # Examples
/// ```
/// use society_match_core::{Category, Society};
///
/// let society = Society::new(2, "Binary Club", Category::Technical)
///     .with_description("Competitive coding community")
///     .with_tags(["coding", "dsa"]);
///
/// assert_eq!(society.name, "Binary Club");
/// assert_eq!(society.tags, vec!["coding".to_owned(), "dsa".to_owned()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Society {
    /// Unique identifier.
    pub id: u64,
    /// Display name, unique within a catalog.
    pub name: String,
    /// Closed-set category.
    pub category: Category,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Keyword tags.
    #[cfg_attr(feature = "serde", serde(default, alias = "keywords"))]
    pub tags: Vec<String>,
    /// Capability labels the society values.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<String>,
    /// Role titles a member could hold.
    #[cfg_attr(feature = "serde", serde(default))]
    pub roles: Vec<String>,
}

impl Society {
    /// Construct a `Society` with no description, tags, skills or roles.
    ///
    /// # Examples
    /// ```
    /// use society_match_core::{Category, Society};
    ///
    /// let society = Society::new(1, "Nebula", Category::Technical);
    /// assert!(society.tags.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            description: String::new(),
            tags: Vec::new(),
            skills: Vec::new(),
            roles: Vec::new(),
        }
    }

    /// Set the description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the keyword tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the skill labels.
    #[must_use]
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the role titles.
    #[must_use]
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_preserve_order() {
        let society = Society::new(5, "IOTUINO", Category::Technical)
            .with_skills(["Arduino", "IoT", "Embedded C"])
            .with_roles(["Hardware Engineer", "Robotics Lead"]);
        assert_eq!(society.skills, vec!["Arduino", "IoT", "Embedded C"]);
        assert_eq!(society.roles, vec!["Hardware Engineer", "Robotics Lead"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialises_keywords_alias_and_sparse_records() {
        let json = r#"{
            "id": 2,
            "name": "Binary Club",
            "category": "Technical",
            "keywords": ["coding", "dsa"]
        }"#;
        let society: Society = serde_json::from_str(json).expect("valid society json");
        assert_eq!(society.category, Category::Technical);
        assert_eq!(society.tags, vec!["coding", "dsa"]);
        assert!(society.description.is_empty());
        assert!(society.skills.is_empty());
        assert!(society.roles.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rejects_category_outside_closed_set() {
        let json = r#"{ "id": 6, "name": "Art Society", "category": "Art & Culture" }"#;
        let result: Result<Society, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
