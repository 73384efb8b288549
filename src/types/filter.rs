use std::collections::BTreeSet;

use serde::Serialize;

use super::Issue;

/// User-selected restriction on the displayed issues. An empty set on
/// either dimension means no constraint on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub statuses: BTreeSet<String>,
    pub priorities: BTreeSet<String>,
}

impl FilterState {
    pub fn from_selections(
        statuses: impl IntoIterator<Item = String>,
        priorities: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            statuses: statuses.into_iter().collect(),
            priorities: priorities.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty() && self.priorities.is_empty()
    }

    /// Conjunction across the two dimensions, membership within each.
    /// An issue without a priority never matches a non-empty priority
    /// selection.
    pub fn matches(&self, issue: &Issue) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&issue.status.name) {
            return false;
        }

        if !self.priorities.is_empty() {
            return match &issue.priority {
                Some(priority) => self.priorities.contains(&priority.name),
                None => false,
            };
        }

        true
    }

    /// Filters a fetched list, preserving server order.
    pub fn apply<'a>(&self, issues: &'a [Issue]) -> Vec<&'a Issue> {
        issues.iter().filter(|issue| self.matches(issue)).collect()
    }
}

/// The distinct status and priority names present in a fetched list,
/// i.e. the values worth offering as filter choices. `BTreeSet` keeps
/// display order lexicographic.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub statuses: BTreeSet<String>,
    pub priorities: BTreeSet<String>,
}

impl FilterOptions {
    pub fn derive(issues: &[Issue]) -> Self {
        let statuses = issues
            .iter()
            .map(|issue| issue.status.name.clone())
            .collect();
        let priorities = issues
            .iter()
            .filter_map(|issue| issue.priority.as_ref())
            .map(|priority| priority.name.clone())
            .collect();

        Self {
            statuses,
            priorities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NamedField;

    fn named(name: &str) -> NamedField {
        NamedField {
            name: name.to_string(),
        }
    }

    fn issue(id: u64, status: &str, priority: Option<&str>) -> Issue {
        Issue {
            id,
            subject: format!("Issue {id}"),
            status: named(status),
            project: named("Sandbox"),
            priority: priority.map(named),
        }
    }

    fn sample() -> Vec<Issue> {
        vec![
            issue(1, "New", Some("High")),
            issue(2, "New", None),
            issue(3, "Closed", Some("Low")),
        ]
    }

    fn ids(issues: &[&Issue]) -> Vec<u64> {
        issues.iter().map(|issue| issue.id).collect()
    }

    #[test]
    fn empty_filter_accepts_every_issue() {
        let filter = FilterState::default();
        assert!(filter.is_empty());
        for issue in sample() {
            assert!(filter.matches(&issue));
        }
    }

    #[test]
    fn status_selection_keeps_matching_issues_in_order() {
        let filter = FilterState::from_selections(vec!["New".to_string()], vec![]);
        let issues = sample();
        assert_eq!(ids(&filter.apply(&issues)), vec![1, 2]);
    }

    #[test]
    fn priority_selection_keeps_matching_issues() {
        let filter = FilterState::from_selections(vec![], vec!["Low".to_string()]);
        let issues = sample();
        assert_eq!(ids(&filter.apply(&issues)), vec![3]);
    }

    #[test]
    fn dimensions_combine_as_conjunction() {
        let filter =
            FilterState::from_selections(vec!["New".to_string()], vec!["High".to_string()]);
        let issues = sample();
        // Issue 2 has a matching status but no priority at all.
        assert_eq!(ids(&filter.apply(&issues)), vec![1]);
    }

    #[test]
    fn missing_priority_never_matches_a_priority_selection() {
        let no_priority = issue(2, "New", None);
        let filter = FilterState::from_selections(vec![], vec!["High".to_string()]);
        assert!(!filter.matches(&no_priority));

        // Still rejected when the status dimension would have accepted it.
        let filter =
            FilterState::from_selections(vec!["New".to_string()], vec!["High".to_string()]);
        assert!(!filter.matches(&no_priority));
    }

    #[test]
    fn within_a_dimension_any_selected_value_matches() {
        let filter = FilterState::from_selections(
            vec!["New".to_string(), "Closed".to_string()],
            vec![],
        );
        let issues = sample();
        assert_eq!(ids(&filter.apply(&issues)), vec![1, 2, 3]);
    }

    #[test]
    fn derive_on_empty_list_yields_empty_options() {
        let options = FilterOptions::derive(&[]);
        assert!(options.statuses.is_empty());
        assert!(options.priorities.is_empty());
    }

    #[test]
    fn derive_collapses_duplicates_and_skips_missing_priorities() {
        let options = FilterOptions::derive(&sample());

        let statuses: Vec<&str> = options.statuses.iter().map(String::as_str).collect();
        let priorities: Vec<&str> = options.priorities.iter().map(String::as_str).collect();

        assert_eq!(statuses, vec!["Closed", "New"]);
        assert_eq!(priorities, vec!["High", "Low"]);
    }

    #[test]
    fn derive_keeps_dimensions_separate() {
        let issues = vec![issue(1, "High", Some("New"))];
        let options = FilterOptions::derive(&issues);

        assert!(options.statuses.contains("High"));
        assert!(!options.statuses.contains("New"));
        assert!(options.priorities.contains("New"));
        assert!(!options.priorities.contains("High"));
    }

    #[test]
    fn apply_neither_duplicates_nor_reorders() {
        let issues = vec![
            issue(5, "New", Some("High")),
            issue(1, "New", Some("High")),
            issue(3, "New", Some("High")),
        ];
        let filter = FilterState::from_selections(vec!["New".to_string()], vec![]);
        assert_eq!(ids(&filter.apply(&issues)), vec![5, 1, 3]);
    }
}
