use indexmap::IndexMap;
use crate::structs::issue::Issue;

/// Issues keyed by component, first-seen order across groups and insertion order within.
pub type ComponentGroups = IndexMap<String, Vec<Issue>>;

pub struct ComponentGrouper;

impl ComponentGrouper {
    pub fn group(issues: Vec<Issue>) -> ComponentGroups {
        let mut groups = ComponentGroups::new();
        for issue in issues {
            groups.entry(issue.component.clone()).or_default().push(issue);
        }
        groups
    }
}
