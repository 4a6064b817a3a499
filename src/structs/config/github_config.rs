use serde::{Deserialize, Serialize};
use crate::errors::{VelocityError, VelocityResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::github_credentials::GitHubCredentials;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GitHubConfig {
    #[serde(default = "ConfigHelper::default_github_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub owner: Option<String>,

    #[serde(default)]
    pub repo: Option<String>,

    #[serde(default)]
    pub token: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: ConfigHelper::default_github_api_url(),
            owner: None,
            repo: None,
            token: None,
        }
    }
}

impl GitHubConfig {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if ConfigHelper::non_empty(&self.owner).is_none() {
            missing.push("owner");
        }
        if ConfigHelper::non_empty(&self.repo).is_none() {
            missing.push("repo");
        }
        if ConfigHelper::non_empty(&self.token).is_none() {
            missing.push("token");
        }
        missing
    }

    pub fn credentials(&self) -> VelocityResult<GitHubCredentials> {
        match (
            ConfigHelper::non_empty(&self.owner),
            ConfigHelper::non_empty(&self.repo),
            ConfigHelper::non_empty(&self.token),
        ) {
            (Some(owner), Some(repo), Some(token)) => Ok(GitHubCredentials {
                api_url: self.api_url.trim_end_matches('/').to_string(),
                owner: owner.to_string(),
                repo: repo.to_string(),
                token: token.to_string(),
            }),
            _ => Err(VelocityError::config_error("GitHub", &self.missing_fields())),
        }
    }
}
