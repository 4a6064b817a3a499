use serde::{Deserialize, Serialize};
use crate::structs::sonarqube::sonar_issue::SonarIssue;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SonarIssuesResponse {
    #[serde(default)]
    pub issues: Vec<SonarIssue>,
    #[serde(default)]
    pub total: Option<u64>,
}
