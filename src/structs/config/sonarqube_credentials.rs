/// Validated SonarQube connection values; only built once all required fields are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SonarQubeCredentials {
    pub url: String,
    pub token: String,
    pub project_key: String,
    pub organization: Option<String>,
}
