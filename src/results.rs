use std::collections::HashSet;

use serde::Serialize;

use crate::person::Person;

/// The output of a search.
///
/// `performed` separates "nothing was asked" (blank query) from "something
/// was asked and nothing matched". Both have empty `matches`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    /// The submitted query, trimmed. Empty when not performed.
    pub query: String,

    /// Whether a non-blank query was submitted.
    pub performed: bool,

    /// Matching records, in directory order.
    pub matches: Vec<Person>,
}

impl SearchResults {
    /// The result of a blank query.
    pub fn not_performed() -> Self {
        Self::default()
    }

    /// Performed, but nothing matched.
    pub fn is_empty_hit(&self) -> bool {
        self.performed && self.matches.is_empty()
    }
}

/// Summary counts over a loaded record set.
///
/// Distinctness is exact string equality. Computed once when the directory
/// is loaded; searching never changes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
    /// Distinct `name` values.
    pub expert_count: usize,

    /// Distinct non-empty values across the three keyword columns.
    pub expertise_count: usize,

    /// Distinct `affiliation` values.
    pub affiliation_count: usize,
}

impl DirectoryStats {
    pub fn compute(records: &[Person]) -> Self {
        let names: HashSet<&str> = records.iter().map(|p| p.name.as_str()).collect();
        let affiliations: HashSet<&str> = records.iter().map(|p| p.affiliation.as_str()).collect();
        let expertise: HashSet<&str> = records.iter().flat_map(Person::keywords).collect();

        Self {
            expert_count:      names.len(),
            expertise_count:   expertise.len(),
            affiliation_count: affiliations.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_distinct() {
        let records = vec![
            Person::new("Ada", "Lab", "Math", "Engines", ""),
            Person::new("Ada", "Lab", "Math", "", ""),
            Person::new("Alan", "Park", "Crypto", "Math", "Engines"),
        ];
        let stats = DirectoryStats::compute(&records);

        assert_eq!(stats.expert_count, 2);
        assert_eq!(stats.affiliation_count, 2);
        assert_eq!(stats.expertise_count, 3);
    }

    #[test]
    fn empty_keywords_are_not_expertise() {
        let stats = DirectoryStats::compute(&[Person::new("A", "", "", "", "")]);
        assert_eq!(stats.expertise_count, 0);
        assert_eq!(stats.affiliation_count, 1);
    }

    #[test]
    fn empty_hit_needs_performed() {
        assert!(!SearchResults::not_performed().is_empty_hit());
        let hit = SearchResults { query: "x".into(), performed: true, matches: vec![] };
        assert!(hit.is_empty_hit());
    }
}
