use serde::{Deserialize, Serialize};
use crate::errors::{VelocityError, VelocityResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::sonarqube_credentials::SonarQubeCredentials;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SonarQubeConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub token: Option<String>,

    #[serde(default)]
    pub project_key: Option<String>,

    #[serde(default)]
    pub organization: Option<String>,
}

impl SonarQubeConfig {
    /// Names of the required values that are absent or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if ConfigHelper::non_empty(&self.url).is_none() {
            missing.push("url");
        }
        if ConfigHelper::non_empty(&self.token).is_none() {
            missing.push("token");
        }
        if ConfigHelper::non_empty(&self.project_key).is_none() {
            missing.push("projectKey");
        }
        missing
    }

    pub fn credentials(&self) -> VelocityResult<SonarQubeCredentials> {
        match (
            ConfigHelper::non_empty(&self.url),
            ConfigHelper::non_empty(&self.token),
            ConfigHelper::non_empty(&self.project_key),
        ) {
            (Some(url), Some(token), Some(project_key)) => Ok(SonarQubeCredentials {
                url: url.trim_end_matches('/').to_string(),
                token: token.to_string(),
                project_key: project_key.to_string(),
                organization: ConfigHelper::non_empty(&self.organization).map(str::to_string),
            }),
            _ => Err(VelocityError::config_error("SonarQube", &self.missing_fields())),
        }
    }
}
