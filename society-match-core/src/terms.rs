//! Normalisation shared by every text comparison in the engine.

/// Trim surrounding whitespace and lowercase `term`.
///
/// # Examples
/// ```
/// use society_match_core::terms::normalise;
///
/// assert_eq!(normalise("  Machine Learning "), "machine learning");
/// ```
#[must_use]
pub fn normalise(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Normalise a sequence of terms into a de-duplicated list.
///
/// Empty terms are dropped. The first occurrence of each term wins, so the
/// caller's ordering survives.
///
/// # Examples
/// ```
/// use society_match_core::terms::normalise_all;
///
/// let terms = normalise_all(["AI", " ", "ai", "Coding"]);
/// assert_eq!(terms, vec!["ai".to_owned(), "coding".to_owned()]);
/// ```
#[must_use]
pub fn normalise_all<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalised: Vec<String> = Vec::new();
    for term in terms {
        let candidate = normalise(term.as_ref());
        if candidate.is_empty() || normalised.contains(&candidate) {
            continue;
        }
        normalised.push(candidate);
    }
    normalised
}
