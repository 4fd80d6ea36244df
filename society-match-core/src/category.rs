//! Categories a society is filed under.
//!
//! The set is closed: collaborators validate category names when they load
//! records, so the engine only ever sees one of these variants.
//!
//! # Examples
//! ```
//! use society_match_core::Category;
//!
//! assert_eq!(Category::Technical.as_str(), "technical");
//! assert_eq!(Category::Art.to_string(), "art");
//! ```

use thiserror::Error;

/// Broad grouping for a society.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Category {
    /// Engineering, coding and hardware clubs.
    Technical,
    /// Visual and performing art groups.
    Art,
    /// Heritage, language and cultural groups.
    Cultural,
    /// Athletics and team sports.
    Sports,
    /// Anything that fits nowhere else.
    Other,
}

/// Error returned when a category name is not part of the closed set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown category '{name}'")]
pub struct ParseCategoryError {
    /// The rejected input, as supplied.
    pub name: String,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Technical,
        Self::Art,
        Self::Cultural,
        Self::Sports,
        Self::Other,
    ];

    /// Return the category as a lowercase `&str`.
    ///
    /// The returned label is also the normalised form used for matching.
    ///
    /// # Examples
    /// ```
    /// use society_match_core::Category;
    ///
    /// assert_eq!(Category::Sports.as_str(), "sports");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Art => "art",
            Self::Cultural => "cultural",
            Self::Sports => "sports",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| ParseCategoryError { name: s.to_owned() })
    }
}

impl TryFrom<String> for Category {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_owned()
    }
}
