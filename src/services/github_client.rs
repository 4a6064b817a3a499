use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use crate::config::constants::PAGE_SIZE;
use crate::errors::{VelocityError, VelocityResult};
use crate::structs::config::github_credentials::GitHubCredentials;
use crate::structs::file_entry::FileEntry;
use crate::structs::github::github_content::GitHubContent;
use crate::traits::file_tree_source::FileTreeSource;

const SERVICE: &str = "GitHub";

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    credentials: GitHubCredentials,
}

impl GitHubClient {
    pub fn new(client: Client, credentials: GitHubCredentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Top-level repository contents; directories are dropped.
    pub async fn repository_files(&self) -> VelocityResult<Vec<FileEntry>> {
        let url = format!(
            "{}/repos/{}/{}/contents",
            self.credentials.api_url, self.credentials.owner, self.credentials.repo
        );
        log::debug!("➡️ GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.credentials.token)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| VelocityError::NetworkError {
                operation: format!("{} request", SERVICE),
                url: Some(url.clone()),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VelocityError::upstream_error(
                SERVICE,
                Some(status.as_u16()),
                &format!("GitHub contents API error ({}): {}", status.as_u16(), error_text),
            ));
        }

        let contents: Vec<GitHubContent> = response.json().await?;
        Ok(contents
            .into_iter()
            .filter_map(FileEntry::from_github)
            .take(PAGE_SIZE as usize)
            .collect())
    }
}

#[async_trait]
impl FileTreeSource for GitHubClient {
    async fn fetch_files(&self) -> VelocityResult<Vec<FileEntry>> {
        self.repository_files().await
    }
}
