pub mod config;
pub mod dependency_config;
pub mod github_config;
pub mod github_credentials;
pub mod server_config;
pub mod sonarqube_config;
pub mod sonarqube_credentials;
