pub mod confidence_source;
pub mod file_tree_source;
pub mod issue_source;
