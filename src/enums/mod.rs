pub mod business_priority;
pub mod commands;
pub mod dependency_kind;
pub mod dependency_status;
pub mod file_source_kind;
pub mod issue_type;
