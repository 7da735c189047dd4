use std::collections::HashSet;

/// Unique keywords gathered for one preview or import.
///
/// Equality is exact string equality, no case folding or Unicode
/// normalization. Iteration order is unspecified; use `sorted()` for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordBatch {
    keywords: HashSet<String>,
}

impl KeywordBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add keywords, returning how many were not already present
    pub fn extend<I>(&mut self, keywords: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.keywords.len();
        self.keywords.extend(keywords);
        self.keywords.len() - before
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.keywords.iter()
    }

    /// Keywords in lexical order, for presentation only
    pub fn sorted(&self) -> Vec<String> {
        let mut keywords: Vec<String> = self.keywords.iter().cloned().collect();
        keywords.sort();
        keywords
    }

    /// Keywords of this batch not present in `existing`
    pub fn difference(&self, existing: &HashSet<String>) -> Vec<String> {
        self.keywords
            .iter()
            .filter(|keyword| !existing.contains(*keyword))
            .cloned()
            .collect()
    }
}

impl FromIterator<String> for KeywordBatch {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            keywords: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for KeywordBatch {
    type Item = String;
    type IntoIter = std::collections::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keywords.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedup_across_files() {
        let mut batch = KeywordBatch::new();
        assert_eq!(batch.extend(strings(&["cat", "dog", "cat"])), 2);
        assert_eq!(batch.extend(strings(&["dog", "bird"])), 1);

        assert_eq!(batch.sorted(), strings(&["bird", "cat", "dog"]));
    }

    #[test]
    fn test_exact_equality_only() {
        let batch: KeywordBatch = strings(&["Cat", "cat", "café", "cafe\u{301}"])
            .into_iter()
            .collect();

        assert_eq!(batch.len(), 4);
    }

    #[test]
    fn test_difference_against_existing() {
        let batch: KeywordBatch = strings(&["cat", "dog", "bird"]).into_iter().collect();
        let existing: HashSet<String> = strings(&["cat", "fish"]).into_iter().collect();

        let mut new = batch.difference(&existing);
        new.sort();

        assert_eq!(new, strings(&["bird", "dog"]));
        assert!(new.iter().all(|k| !existing.contains(k)));
        assert!(new.iter().all(|k| batch.contains(k)));
    }

    #[test]
    fn test_difference_with_everything_existing() {
        let batch: KeywordBatch = strings(&["cat"]).into_iter().collect();
        let existing: HashSet<String> = strings(&["cat"]).into_iter().collect();

        assert!(batch.difference(&existing).is_empty());
    }
}
