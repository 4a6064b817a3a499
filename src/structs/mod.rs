pub mod api_response;
pub mod cli;
pub mod component_metrics;
pub mod config;
pub mod dependency;
pub mod dependency_endpoint;
pub mod file_entry;
pub mod github;
pub mod issue;
pub mod sonarqube;
pub mod tech_debt_item;
