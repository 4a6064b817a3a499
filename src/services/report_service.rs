use chrono::{DateTime, Utc};
use reqwest::Client;
use crate::enums::file_source_kind::FileSourceKind;
use crate::errors::VelocityResult;
use crate::services::confidence::SeededConfidence;
use crate::services::dependency_analyzer::DependencyAnalyzer;
use crate::services::github_client::GitHubClient;
use crate::services::sonarqube_client::SonarQubeClient;
use crate::services::tech_debt_analyzer::TechDebtAnalyzer;
use crate::structs::api_response::{ConnectionResponse, DependencyResponse, TechDebtResponse};
use crate::structs::config::config::Config;
use crate::traits::confidence_source::ConfidenceSource;
use crate::traits::file_tree_source::FileTreeSource;
use crate::traits::issue_source::IssueSource;

/// Wires configuration, upstream clients and the analyzers into the endpoint payloads.
///
/// Configuration is validated before any client is built, so a missing value never
/// reaches the network.
pub struct ReportService;

impl ReportService {
    pub fn sonarqube_client(config: &Config, http: &Client) -> VelocityResult<SonarQubeClient> {
        let credentials = config.sonarqube.credentials()?;
        Ok(SonarQubeClient::new(http.clone(), credentials))
    }

    pub fn file_source(config: &Config, http: &Client) -> VelocityResult<Box<dyn FileTreeSource>> {
        match config.dependencies.source {
            FileSourceKind::SonarQube => Ok(Box::new(Self::sonarqube_client(config, http)?)),
            FileSourceKind::GitHub => {
                let credentials = config.github.credentials()?;
                Ok(Box::new(GitHubClient::new(http.clone(), credentials)))
            }
        }
    }

    pub async fn tech_debt(source: &dyn IssueSource, now: DateTime<Utc>) -> VelocityResult<TechDebtResponse> {
        let issues = source.fetch_issues().await?;
        let issue_count = issues.len();
        let items = TechDebtAnalyzer::analyze(issues, now);
        log::info!("📊 Scored {} modules from {} issues", items.len(), issue_count);
        Ok(TechDebtResponse::new(items))
    }

    pub async fn dependencies(
        source: &dyn FileTreeSource,
        confidence: &mut (dyn ConfidenceSource + Send),
    ) -> VelocityResult<DependencyResponse> {
        let files = source.fetch_files().await?;
        let dependencies = DependencyAnalyzer::suggest(&files, confidence);
        log::info!("🔗 Suggested {} dependencies across {} files", dependencies.len(), files.len());
        Ok(DependencyResponse::new(dependencies))
    }

    pub async fn tech_debt_report(config: &Config, http: &Client) -> VelocityResult<TechDebtResponse> {
        let client = Self::sonarqube_client(config, http)?;
        Self::tech_debt(&client, Utc::now()).await
    }

    pub async fn dependency_report(config: &Config, http: &Client, seed: Option<u64>) -> VelocityResult<DependencyResponse> {
        let source = Self::file_source(config, http)?;
        let mut confidence = SeededConfidence::from_optional_seed(seed.or(config.dependencies.seed));
        Self::dependencies(source.as_ref(), &mut confidence).await
    }

    pub async fn connection_report(config: &Config, http: &Client) -> VelocityResult<ConnectionResponse> {
        let client = Self::sonarqube_client(config, http)?;
        let measures = client.project_measures().await?;
        let credentials = client.credentials();

        Ok(ConnectionResponse {
            success: true,
            connected: true,
            project_key: credentials.project_key.clone(),
            organization: credentials.organization.clone(),
            project_name: measures.component.name,
            metrics: measures.component.measures,
        })
    }
}
