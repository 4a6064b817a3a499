use async_trait::async_trait;
use reqwest::{Client, Response};
use crate::config::constants::{PAGE_SIZE, SONAR_MEASURE_KEYS};
use crate::errors::{VelocityError, VelocityResult};
use crate::structs::config::sonarqube_credentials::SonarQubeCredentials;
use crate::structs::file_entry::FileEntry;
use crate::structs::issue::Issue;
use crate::structs::sonarqube::sonar_components_response::SonarComponentsResponse;
use crate::structs::sonarqube::sonar_issues_response::SonarIssuesResponse;
use crate::structs::sonarqube::sonar_measures_response::SonarMeasuresResponse;
use crate::traits::file_tree_source::FileTreeSource;
use crate::traits::issue_source::IssueSource;

const SERVICE: &str = "SonarQube";

#[derive(Clone)]
pub struct SonarQubeClient {
    client: Client,
    credentials: SonarQubeCredentials,
}

impl SonarQubeClient {
    pub fn new(client: Client, credentials: SonarQubeCredentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    pub fn credentials(&self) -> &SonarQubeCredentials {
        &self.credentials
    }

    async fn get(&self, path: &str, mut query: Vec<(&str, String)>) -> VelocityResult<Response> {
        if let Some(organization) = &self.credentials.organization {
            query.push(("organization", organization.clone()));
        }

        let url = format!("{}{}", self.credentials.url, path);
        log::debug!("➡️ GET {} {:?}", url, query);

        self.client
            .get(&url)
            .bearer_auth(&self.credentials.token)
            .query(&query)
            .send()
            .await
            .map_err(|e| VelocityError::NetworkError {
                operation: format!("{} request", SERVICE),
                url: Some(url.clone()),
                reason: e.to_string(),
            })
    }

    /// One page of unresolved issues, coerced into domain issues.
    pub async fn search_issues(&self) -> VelocityResult<Vec<Issue>> {
        let response = self
            .get(
                "/api/issues/search",
                vec![
                    ("componentKeys", self.credentials.project_key.clone()),
                    ("resolved", "false".to_string()),
                    ("ps", PAGE_SIZE.to_string()),
                ],
            )
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(VelocityError::upstream_error(
                SERVICE,
                Some(status.as_u16()),
                &format!("SonarQube issues API error: {}", status.as_u16()),
            ));
        }

        let payload: SonarIssuesResponse = response.json().await?;
        log::debug!(
            "SonarQube returned {} issues (total {:?})",
            payload.issues.len(),
            payload.total
        );
        Ok(payload.issues.into_iter().map(Issue::from).collect())
    }

    pub async fn component_files(&self) -> VelocityResult<Vec<FileEntry>> {
        let response = self
            .get(
                "/api/components/tree",
                vec![
                    ("component", self.credentials.project_key.clone()),
                    ("qualifiers", "FIL".to_string()),
                    ("ps", PAGE_SIZE.to_string()),
                ],
            )
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(VelocityError::upstream_error(
                SERVICE,
                Some(status.as_u16()),
                &format!("SonarQube components API error: {}", status.as_u16()),
            ));
        }

        let payload: SonarComponentsResponse = response.json().await?;
        Ok(payload.components.into_iter().filter_map(FileEntry::from_sonar).collect())
    }

    pub async fn project_measures(&self) -> VelocityResult<SonarMeasuresResponse> {
        let response = self
            .get(
                "/api/measures/component",
                vec![
                    ("component", self.credentials.project_key.clone()),
                    ("metricKeys", SONAR_MEASURE_KEYS.to_string()),
                ],
            )
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VelocityError::upstream_error(
                SERVICE,
                Some(status.as_u16()),
                &format!("SonarQube API error ({}): {}", status.as_u16(), error_text),
            ));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl IssueSource for SonarQubeClient {
    async fn fetch_issues(&self) -> VelocityResult<Vec<Issue>> {
        self.search_issues().await
    }
}

#[async_trait]
impl FileTreeSource for SonarQubeClient {
    async fn fetch_files(&self) -> VelocityResult<Vec<FileEntry>> {
        self.component_files().await
    }
}
