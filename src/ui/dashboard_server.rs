use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use reqwest::Client;
use serde_json::{json, Map, Value};
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::{Filter, Rejection, Reply};
use crate::errors::{VelocityError, VelocityResult};
use crate::services::http_client::HttpClientFactory;
use crate::services::report_service::ReportService;
use crate::structs::config::config::Config;

/// Per-process state shared by every request; nothing in here is mutated.
pub struct AppState {
    pub config: Config,
    pub http: Client,
}

impl AppState {
    pub fn new(config: Config) -> VelocityResult<Self> {
        let http = HttpClientFactory::build(config.server.request_timeout_secs)?;
        Ok(Self { config, http })
    }
}

pub struct DashboardServer {
    state: Arc<AppState>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl DashboardServer {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
            shutdown_tx: None,
        }
    }

    pub fn start(&mut self) -> VelocityResult<SocketAddr> {
        let host: IpAddr = self.state.config.server.host.parse().map_err(|e: std::net::AddrParseError| {
            VelocityError::ConfigurationFileError {
                path: "server.host".to_string(),
                reason: e.to_string(),
            }
        })?;
        let addr = SocketAddr::new(host, self.state.config.server.port);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let (bound, server) = warp::serve(routes(Arc::clone(&self.state)))
            .try_bind_with_graceful_shutdown(addr, async move {
                shutdown_rx.await.ok();
            })
            .map_err(|e| VelocityError::system_error("binding dashboard server", &e.to_string()))?;

        tokio::spawn(server);

        log::info!("🌐 Dashboard API listening on http://{}", bound);
        Ok(bound)
    }

    pub fn shutdown(&mut self) -> VelocityResult<()> {
        log::info!("🛑 Shutting down dashboard server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                VelocityError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        log::info!("✅ Dashboard server shutdown complete");
        Ok(())
    }
}

pub fn routes(state: Arc<AppState>) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let state_filter = warp::any().map(move || Arc::clone(&state));

    let health = warp::path!("api" / "health")
        .and(warp::get())
        .map(|| warp::reply::json(&json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") })));

    let tech_debt = warp::path!("api" / "tech-debt")
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(tech_debt_handler);

    let dependencies = warp::path!("api" / "dependencies")
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(dependencies_handler);

    let sonarqube_test = warp::path!("api" / "sonarqube" / "test")
        .and(warp::get())
        .and(state_filter)
        .and_then(sonarqube_test_handler);

    health
        .or(tech_debt)
        .or(dependencies)
        .or(sonarqube_test)
        .with(warp::cors()
            .allow_any_origin()
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["GET"]))
        .with(warp::log("velocityiq::api"))
        .recover(handle_rejection)
}

async fn tech_debt_handler(state: Arc<AppState>) -> Result<impl Reply, Infallible> {
    match ReportService::tech_debt_report(&state.config, &state.http).await {
        Ok(response) => Ok(warp::reply::with_status(warp::reply::json(&response), StatusCode::OK)),
        Err(e) => {
            log::error!("Tech Debt API Error: {}", e.technical_details());
            Ok(error_reply(&e, Map::new()))
        }
    }
}

async fn dependencies_handler(state: Arc<AppState>) -> Result<impl Reply, Infallible> {
    match ReportService::dependency_report(&state.config, &state.http, None).await {
        Ok(response) => Ok(warp::reply::with_status(warp::reply::json(&response), StatusCode::OK)),
        Err(e) => {
            log::error!("Dependency API error: {}", e.technical_details());
            Ok(error_reply(&e, Map::new()))
        }
    }
}

async fn sonarqube_test_handler(state: Arc<AppState>) -> Result<impl Reply, Infallible> {
    match ReportService::connection_report(&state.config, &state.http).await {
        Ok(response) => Ok(warp::reply::with_status(warp::reply::json(&response), StatusCode::OK)),
        Err(e) => {
            log::warn!("SonarQube connection check failed: {}", e);
            let mut extra = Map::new();
            extra.insert("connected".to_string(), Value::Bool(false));
            Ok(error_reply(&e, extra))
        }
    }
}

/// `{ success: false, error }` plus, for configuration errors, the missing keys.
fn error_reply(error: &VelocityError, extra: Map<String, Value>) -> WithStatus<Json> {
    let mut body = Map::new();
    body.insert("success".to_string(), Value::Bool(false));
    body.extend(extra);
    body.insert("error".to_string(), Value::String(error.to_string()));

    if let VelocityError::ConfigurationError { missing, .. } = error {
        let missing: Map<String, Value> = missing
            .iter()
            .map(|field| (field.clone(), Value::Bool(true)))
            .collect();
        body.insert("missing".to_string(), Value::Object(missing));
    }

    let status = StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    warp::reply::with_status(warp::reply::json(&Value::Object(body)), status)
}

async fn handle_rejection(rejection: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found")
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else {
        log::error!("Unhandled rejection: {:?}", rejection);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&json!({ "success": false, "error": message })),
        status,
    ))
}
