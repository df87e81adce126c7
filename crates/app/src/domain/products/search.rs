//! Suggestion ranking.
//!
//! Substring and prefix matches take priority; when none exist the ranking
//! falls back to fuzzy name similarity so near-misses ("chocolte") still
//! surface suggestions.

use levenshtein::levenshtein;

use crate::domain::products::records::ProductRecord;

/// Minimum similarity for a fuzzy fallback suggestion.
const SIMILARITY_THRESHOLD: f64 = 0.5;

/// Normalised similarity between two strings in `[0.0, 1.0]`.
///
/// `1.0 - distance / max_len`, case-insensitive.
pub(crate) fn similarity(query: &str, candidate: &str) -> f64 {
    let query = query.to_lowercase();
    let candidate = candidate.to_lowercase();

    let max_len = query.chars().count().max(candidate.chars().count());

    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(&query, &candidate);

    1.0 - distance as f64 / max_len as f64
}

/// Rank products as suggestions for `query`.
///
/// Products whose name or description contains the query (case-insensitive)
/// win outright, prefix matches first. Only when no substring match exists
/// does the fuzzy fallback apply, keeping names with similarity of at least
/// 0.5 ranked by similarity descending.
pub(crate) fn rank_suggestions(query: &str, products: Vec<ProductRecord>) -> Vec<ProductRecord> {
    let needle = query.to_lowercase();

    if needle.is_empty() {
        return Vec::new();
    }

    let mut substring_matches: Vec<ProductRecord> = products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    if !substring_matches.is_empty() {
        substring_matches.sort_by_key(|product| {
            let name = product.name.to_lowercase();

            (!name.starts_with(&needle), name)
        });

        return substring_matches;
    }

    let mut scored: Vec<(f64, ProductRecord)> = products
        .into_iter()
        .filter_map(|product| {
            let score = similarity(query, &product.name);

            (score >= SIMILARITY_THRESHOLD).then_some((score, product))
        })
        .collect();

    scored.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    scored.into_iter().map(|(_, product)| product).collect()
}
