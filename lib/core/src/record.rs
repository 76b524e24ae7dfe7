use serde::{Deserialize, Serialize};

/// One cleaned catalog entry.
///
/// Produced by the indexer and immutable afterwards. `combined` is the
/// concatenation of the three text fields; `cleaned` is its normalized
/// form (see [`crate::text::normalize_text`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub title: String,
    pub genres: String,
    pub keywords: String,
    pub overview: String,
    pub combined: String,
    pub cleaned: String,
}

impl CatalogRecord {
    /// Build a record from its raw fields, deriving the combined and
    /// cleaned text.
    #[must_use]
    pub fn new(title: String, genres: String, keywords: String, overview: String) -> Self {
        let combined = format!("{} {} {}", genres, keywords, overview);
        let cleaned = crate::text::normalize_text(&combined);
        Self {
            title,
            genres,
            keywords,
            overview,
            combined,
            cleaned,
        }
    }
}

/// Ordered table of catalog records.
///
/// The row index is the join key into the similarity matrix: row `i`
/// of the table corresponds to row/column `i` of the matrix. Titles
/// are not guaranteed unique; [`RecordTable::find_title`] resolves
/// duplicates to the first matching row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordTable {
    records: Vec<CatalogRecord>,
}

impl RecordTable {
    #[inline]
    #[must_use]
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self { records }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CatalogRecord> {
        self.records.get(index)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &CatalogRecord> {
        self.records.iter()
    }

    /// Resolve a title to its row index.
    ///
    /// Matching is case-insensitive and exact. When several rows share
    /// a title the first one in row order wins; this tie-break is part
    /// of the public contract, not an accident of iteration order.
    #[must_use]
    pub fn find_title(&self, title: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.title.eq_ignore_ascii_case(title))
    }

    /// Unique titles in ascending order, for selection UIs.
    #[must_use]
    pub fn selectable_titles(&self) -> Vec<String> {
        let mut titles: Vec<String> = self.records.iter().map(|r| r.title.clone()).collect();
        titles.sort();
        titles.dedup();
        titles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RecordTable {
        RecordTable::new(vec![
            CatalogRecord::new("Inception".into(), "action".into(), "dream".into(), "a heist in dreams".into()),
            CatalogRecord::new("Heat".into(), "crime".into(), "heist".into(), "a crew plans a heist".into()),
            CatalogRecord::new("inception".into(), "drama".into(), "remake".into(), "an unrelated remake".into()),
        ])
    }

    #[test]
    fn test_derived_fields() {
        let r = CatalogRecord::new(
            "A".into(),
            "action".into(),
            "car chase".into(),
            "a thief steals a car".into(),
        );
        assert_eq!(r.combined, "action car chase a thief steals a car");
        assert_eq!(r.cleaned, "action car chase thief steals car");
    }

    #[test]
    fn test_find_title_case_insensitive() {
        let t = table();
        assert_eq!(t.find_title("HEAT"), Some(1));
        assert_eq!(t.find_title("heat"), Some(1));
    }

    #[test]
    fn test_find_title_first_match_wins() {
        let t = table();
        // Rows 0 and 2 share the title; the first row is the answer.
        assert_eq!(t.find_title("INCEPTION"), Some(0));
    }

    #[test]
    fn test_find_title_missing() {
        assert_eq!(table().find_title("Nonexistent Title"), None);
    }

    #[test]
    fn test_selectable_titles_sorted_unique() {
        let t = table();
        // Exact-string dedup: "Inception" and "inception" are distinct.
        assert_eq!(t.selectable_titles(), vec!["Heat", "Inception", "inception"]);
    }
}
