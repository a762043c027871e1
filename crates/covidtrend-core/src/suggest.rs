// crates/covidtrend-core/src/suggest.rs
use crate::model::SearchSuggestion;
use crate::traits::SearchFields;

/// Default cap on returned suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Prefix search over `candidates[..].field(field_index)`.
///
/// Matching compares lowercased forms only; accented letters match
/// themselves and nothing else. Results keep the candidates'
/// order and scanning stops as soon as `limit` matches are collected, so the
/// caller decides relevance by how it orders `candidates`.
pub fn match_prefix<T, V, D, F>(
    candidates: &[T],
    search_term: &str,
    field_index: usize,
    display_fn: D,
    value_fn: F,
    limit: usize,
) -> Vec<SearchSuggestion<V>>
where
    T: SearchFields,
    D: Fn(&T) -> String,
    F: Fn(&T) -> V,
{
    let needle = search_term.to_lowercase();
    let mut out = Vec::new();
    if limit == 0 {
        return out;
    }

    for candidate in candidates {
        let matched = candidate
            .field(field_index)
            .is_some_and(|text| text.to_lowercase().starts_with(&needle));

        if matched {
            out.push(SearchSuggestion {
                display_text: display_fn(candidate),
                value: value_fn(candidate),
            });
            if out.len() == limit {
                break;
            }
        }
    }
    out
}
