//! Filtering and ordering over collection snapshots.

/// Types that expose a text haystack for substring search.
pub trait Searchable {
    /// Concatenated text the query string is matched against.
    fn haystack(&self) -> String;
}

/// Filter `items` by a case-insensitive substring match of `q` against each
/// record's haystack, then sort descending by `sort_key`.
///
/// An empty `q` matches everything. The sort is stable, so records with
/// equal keys keep their original (insertion) order. The result is a fresh
/// snapshot, never a live view.
#[must_use]
pub fn filter_and_sort<I, T, K, F>(items: Vec<(I, T)>, q: &str, sort_key: F) -> Vec<(I, T)>
where
    T: Searchable,
    K: Ord,
    F: Fn(&T) -> K,
{
    let needle = q.to_lowercase();
    let mut matched: Vec<(I, T)> = items
        .into_iter()
        .filter(|(_, item)| item.haystack().to_lowercase().contains(&needle))
        .collect();
    matched.sort_by(|a, b| sort_key(&b.1).cmp(&sort_key(&a.1)));
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::Business;
    use crate::category::Category;
    use crate::id::BusinessId;

    fn business(name: &str, description: &str, category: Category) -> Business {
        Business::builder()
            .name(name)
            .location("somewhere")
            .description(description)
            .category(category)
            .build()
            .unwrap()
    }

    fn collection() -> Vec<(BusinessId, Business)> {
        vec![
            (
                "a1".parse().unwrap(),
                business("Joe's Bar", "craft beer", Category::Bar),
            ),
            (
                "b2".parse().unwrap(),
                business("City Club", "dancing", Category::Club),
            ),
        ]
    }

    fn ids(items: &[(BusinessId, Business)]) -> Vec<&str> {
        items.iter().map(|(id, _)| id.as_str()).collect()
    }

    #[test]
    fn should_return_all_records_sorted_descending_when_query_empty() {
        let result = filter_and_sort(collection(), "", |b| b.category);
        assert_eq!(ids(&result), ["b2", "a1"]);
    }

    #[test]
    fn should_filter_by_description_substring() {
        let result = filter_and_sort(collection(), "beer", |b| b.category);
        assert_eq!(ids(&result), ["a1"]);
    }

    #[test]
    fn should_match_case_insensitively_across_name_and_description() {
        let result = filter_and_sort(collection(), "joe's", |b| b.category);
        assert_eq!(ids(&result), ["a1"]);

        let result = filter_and_sort(collection(), "DANCING", |b| b.category);
        assert_eq!(ids(&result), ["b2"]);
    }

    #[test]
    fn should_return_empty_when_nothing_matches() {
        let result = filter_and_sort(collection(), "bistro", |b| b.category);
        assert!(result.is_empty());
    }

    #[test]
    fn should_preserve_insertion_order_on_ties() {
        let mut items = collection();
        items.push((
            "c3".parse().unwrap(),
            business("Dive Bar", "cheap beer", Category::Bar),
        ));

        let result = filter_and_sort(items, "", |b| b.category);
        // Both bars share a key; "a1" was inserted before "c3".
        assert_eq!(ids(&result), ["b2", "a1", "c3"]);
    }
}
