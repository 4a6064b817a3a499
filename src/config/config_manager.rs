use std::path::{Path, PathBuf};
use std::fs;
use crate::config::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, GITHUB_REPO_NAME_ENV, GITHUB_REPO_OWNER_ENV, GITHUB_TOKEN_ENV,
    PORT_ENV, SONARQUBE_ORGANIZATION_ENV, SONARQUBE_PROJECT_KEY_ENV, SONARQUBE_TOKEN_ENV, SONARQUBE_URL_ENV,
};
use crate::errors::{VelocityError, VelocityResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads the config file (if any) and lets the process environment override it.
    pub fn load() -> VelocityResult<Config> {
        let config = Self::load_from(&Self::config_path())?;
        Ok(Self::apply_env_overrides(config, |key| std::env::var(key).ok()))
    }

    pub fn load_from(path: &Path) -> VelocityResult<Config> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| VelocityError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| VelocityError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = env(SONARQUBE_URL_ENV) {
            config.sonarqube.url = Some(url);
        }
        if let Some(token) = env(SONARQUBE_TOKEN_ENV) {
            config.sonarqube.token = Some(token);
        }
        if let Some(project_key) = env(SONARQUBE_PROJECT_KEY_ENV) {
            config.sonarqube.project_key = Some(project_key);
        }
        if let Some(organization) = env(SONARQUBE_ORGANIZATION_ENV) {
            config.sonarqube.organization = Some(organization);
        }
        if let Some(owner) = env(GITHUB_REPO_OWNER_ENV) {
            config.github.owner = Some(owner);
        }
        if let Some(repo) = env(GITHUB_REPO_NAME_ENV) {
            config.github.repo = Some(repo);
        }
        if let Some(token) = env(GITHUB_TOKEN_ENV) {
            config.github.token = Some(token);
        }
        match env(PORT_ENV).map(|p| p.parse::<u16>()) {
            Some(Ok(port)) => config.server.port = port,
            Some(Err(e)) => log::warn!("⚠️ Ignoring {}: {}", PORT_ENV, e),
            None => {}
        }

        config
    }

    pub fn create_sample_config() -> VelocityResult<PathBuf> {
        let sample_config = r#"# VelocityIQ Configuration
# Every value below can also be supplied through the environment
# (SONARQUBE_URL, SONARQUBE_TOKEN, SONARQUBE_PROJECT_KEY, SONARQUBE_ORGANIZATION,
#  GITHUB_REPO_OWNER, GITHUB_REPO_NAME, GITHUB_TOKEN, VELOCITYIQ_PORT).
# Environment values win over this file.

[server]
host = "127.0.0.1"
port = 8080
# Timeout applied to every upstream call
request_timeout_secs = 30

[sonarqube]
url = "https://sonarcloud.io"
token = ""
project_key = ""
# Required for SonarCloud, optional for self-hosted SonarQube
organization = ""

[github]
api_url = "https://api.github.com"
owner = ""
repo = ""
token = ""

[dependencies]
# Where suggested dependencies read files from: "sonarqube" or "github"
source = "sonarqube"
# Fix the confidence generator for reproducible output
# seed = 42
"#;
        let config_file_path = Self::config_path();
        if config_file_path.exists() {
            return Err(VelocityError::ConfigurationFileError {
                path: config_file_path.display().to_string(),
                reason: "file already exists".to_string(),
            });
        }
        if let Some(dir) = config_file_path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&config_file_path, sample_config)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

}
