use std::time::Instant;
use serde::Serialize;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{VelocityError, VelocityResult};
use crate::services::http_client::HttpClientFactory;
use crate::services::report_service::ReportService;
use crate::structs::config::config::Config;
use crate::ui::dashboard_server::{AppState, DashboardServer};

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> VelocityResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => Self::init_command(),
            Commands::Serve { port, host, open } => Self::serve_command(port, host, open).await,
            Commands::TechDebt => Self::tech_debt_command().await,
            Commands::Dependencies { seed } => Self::dependencies_command(seed).await,
            Commands::Check => Self::check_command().await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command() -> VelocityResult<()> {
        log::info!("🚀 Initializing velocityiq configuration...");
        let path = ConfigManager::create_sample_config()?;
        log::info!("📝 Fill in the SonarQube values in {}", path.display());
        log::info!("🔧 Run 'velocityiq check' to test the connection.");
        Ok(())
    }

    async fn serve_command(port: Option<u16>, host: Option<String>, open: bool) -> VelocityResult<()> {
        let mut config = ConfigManager::load()?;
        if let Some(port) = port {
            config.server.port = port;
        }
        if let Some(host) = host {
            config.server.host = host;
        }

        let missing = config.sonarqube.missing_fields();
        if !missing.is_empty() {
            log::warn!("⚠️ SonarQube is not fully configured (missing: {}); endpoints will answer 400", missing.join(", "));
        }

        let mut server = DashboardServer::new(AppState::new(config)?);
        let addr = server.start()?;

        if open {
            let url = format!("http://{}/api/health", addr);
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open browser: {}", e);
            }
        }

        tokio::signal::ctrl_c()
            .await
            .map_err(|e| VelocityError::system_error("waiting for ctrl-c", &e.to_string()))?;
        server.shutdown()
    }

    async fn tech_debt_command() -> VelocityResult<()> {
        let config = ConfigManager::load()?;
        let http = Self::http_client(&config)?;
        let response = ReportService::tech_debt_report(&config, &http).await?;
        Self::print_json(&response)
    }

    async fn dependencies_command(seed: Option<u64>) -> VelocityResult<()> {
        let config = ConfigManager::load()?;
        let http = Self::http_client(&config)?;
        let response = ReportService::dependency_report(&config, &http, seed).await?;
        Self::print_json(&response)
    }

    async fn check_command() -> VelocityResult<()> {
        let config = ConfigManager::load()?;
        let http = Self::http_client(&config)?;
        let report = ReportService::connection_report(&config, &http).await?;

        log::info!(
            "✅ Connected to SonarQube project '{}' ({})",
            report.project_key,
            report.project_name.as_deref().unwrap_or("unnamed")
        );
        for measure in &report.metrics {
            log::info!("   {:<26} {}", measure.metric, measure.value.as_deref().unwrap_or("-"));
        }
        Ok(())
    }

    fn http_client(config: &Config) -> VelocityResult<reqwest::Client> {
        HttpClientFactory::build(config.server.request_timeout_secs)
    }

    fn print_json<T: Serialize>(value: &T) -> VelocityResult<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
