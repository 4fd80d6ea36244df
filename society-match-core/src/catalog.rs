//! Read access to the society catalog.
//!
//! The `CatalogStore` trait is the seam between the engine and whatever
//! holds society records. Stores hand out a read-only snapshot of the active
//! societies; the engine never learns how records were filtered or loaded.

use crate::Society;

/// Read-only access to the active societies.
///
/// # Examples
///
/// ```rust
/// use society_match_core::{CatalogStore, Category, MemoryCatalog, Society};
///
/// let catalog = MemoryCatalog::with_societies([
///     Society::new(1, "Nebula", Category::Technical),
///     Society::new(6, "Art Society", Category::Art),
/// ]);
///
/// assert_eq!(catalog.snapshot().len(), 2);
/// ```
pub trait CatalogStore {
    /// Return every active society.
    ///
    /// The slice order carries no meaning for ranking.
    fn snapshot(&self) -> &[Society];
}

/// `CatalogStore` backed by an in-memory list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct MemoryCatalog {
    societies: Vec<Society>,
}

impl MemoryCatalog {
    /// Create a catalog containing a single society.
    #[must_use]
    pub fn with_society(society: Society) -> Self {
        Self::with_societies(std::iter::once(society))
    }

    /// Create a catalog from a collection of societies.
    #[must_use]
    pub fn with_societies<I>(societies: I) -> Self
    where
        I: IntoIterator<Item = Society>,
    {
        Self {
            societies: societies.into_iter().collect(),
        }
    }

    /// Number of societies held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.societies.len()
    }

    /// Report whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.societies.is_empty()
    }

    /// Consume the catalog and return the underlying records.
    #[must_use]
    pub fn into_inner(self) -> Vec<Society> {
        self.societies
    }
}

impl CatalogStore for MemoryCatalog {
    fn snapshot(&self) -> &[Society] {
        &self.societies
    }
}

impl CatalogStore for [Society] {
    fn snapshot(&self) -> &[Society] {
        self
    }
}

impl CatalogStore for Vec<Society> {
    fn snapshot(&self) -> &[Society] {
        self
    }
}
