use serde::{Deserialize, Serialize};
use crate::structs::config::dependency_config::DependencyConfig;
use crate::structs::config::github_config::GitHubConfig;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::config::sonarqube_config::SonarQubeConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub sonarqube: SonarQubeConfig,

    #[serde(default)]
    pub github: GitHubConfig,

    #[serde(default)]
    pub dependencies: DependencyConfig,
}
