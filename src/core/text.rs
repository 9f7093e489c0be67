// src/core/text.rs
//
// Small string helpers shared by the index loader and the filter.

/// Search normalization: trim, then lower-case.
pub fn normalize_search(text: &str) -> String {
    text.trim().to_lowercase()
}

/// `needle` must already be normalized.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// "new-york-ny" -> "New York Ny". Used when a master entry carries no label.
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => s!(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowers() {
        assert_eq!(normalize_search("  OrAnge "), "orange");
        assert_eq!(normalize_search("   "), "");
    }

    #[test]
    fn slug_titles() {
        assert_eq!(title_from_slug("orange-county-ca"), "Orange County Ca");
        assert_eq!(title_from_slug("--texas"), "Texas");
        assert_eq!(title_from_slug(""), "");
    }

    #[test]
    fn folded_contains() {
        assert!(contains_folded("Travis County, TX", "county, tx"));
        assert!(!contains_folded("Travis County, TX", "harris"));
    }
}
