/// Which rule picked the keyword column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Header equals the target exactly
    Exact,
    /// Header contains the target, ignoring case
    Contains,
    /// Nothing matched, first column used
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMatch {
    pub index: usize,
    pub name: String,
    pub rule: MatchRule,
}

impl ColumnMatch {
    fn new(index: usize, name: &str, rule: MatchRule) -> Self {
        Self {
            index,
            name: name.to_string(),
            rule,
        }
    }
}

/// Resolve the keyword column from header names.
///
/// Tries an exact match, then the first header containing `target`
/// case-insensitively, then the first column. Returns None only when there
/// are no columns at all. `target` is trimmed before matching.
pub fn resolve_column<S: AsRef<str>>(columns: &[S], target: &str) -> Option<ColumnMatch> {
    let target = target.trim();

    if let Some(index) = columns.iter().position(|c| c.as_ref() == target) {
        return Some(ColumnMatch::new(index, columns[index].as_ref(), MatchRule::Exact));
    }

    let needle = target.to_lowercase();
    if let Some(index) = columns
        .iter()
        .position(|c| c.as_ref().to_lowercase().contains(&needle))
    {
        return Some(ColumnMatch::new(
            index,
            columns[index].as_ref(),
            MatchRule::Contains,
        ));
    }

    columns
        .first()
        .map(|first| ColumnMatch::new(0, first.as_ref(), MatchRule::Fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_wins() {
        let columns = ["kw_phrase", "kw", "KW"];
        let found = resolve_column(&columns, "kw").unwrap();
        assert_eq!(found, ColumnMatch::new(1, "kw", MatchRule::Exact));
    }

    #[test]
    fn test_exact_match_is_case_sensitive() {
        let columns = ["Keyword", "KW"];
        let found = resolve_column(&columns, "kw").unwrap();
        assert_eq!(found.rule, MatchRule::Contains);
        assert_eq!(found.name, "KW");
    }

    #[test]
    fn test_substring_match() {
        let columns = ["volume", "kw_phrase", "other_kw"];
        let found = resolve_column(&columns, "kw").unwrap();
        assert_eq!(found, ColumnMatch::new(1, "kw_phrase", MatchRule::Contains));
    }

    #[test]
    fn test_fallback_to_first_column() {
        let columns = ["phrase", "volume"];
        let found = resolve_column(&columns, "kw").unwrap();
        assert_eq!(found, ColumnMatch::new(0, "phrase", MatchRule::Fallback));
    }

    #[test]
    fn test_no_columns() {
        let columns: [&str; 0] = [];
        assert_eq!(resolve_column(&columns, "kw"), None);
    }

    #[test]
    fn test_target_is_trimmed() {
        let columns = ["volume", "kw"];
        let found = resolve_column(&columns, "  kw ").unwrap();
        assert_eq!(found.rule, MatchRule::Exact);
        assert_eq!(found.index, 1);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let columns = vec!["a".to_string(), "Search KW".to_string(), "kw2".to_string()];
        let first = resolve_column(&columns, "kw");
        for _ in 0..10 {
            assert_eq!(resolve_column(&columns, "kw"), first);
        }
        assert_eq!(first.unwrap().name, "Search KW");
    }
}
