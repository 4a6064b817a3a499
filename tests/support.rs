use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use velocityiq::enums::file_source_kind::FileSourceKind;
use velocityiq::structs::config::config::Config;
use velocityiq::ui::dashboard_server::{routes, AppState};
use warp::http::{HeaderMap, StatusCode};
use warp::Filter;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub accept: Option<String>,
}

/// Canned answers for the fake SonarQube and GitHub APIs.
#[derive(Clone)]
pub struct StubResponses {
    pub status: u16,
    pub issues: Value,
    pub components: Value,
    pub measures: Value,
    pub contents: Value,
}

impl Default for StubResponses {
    fn default() -> Self {
        Self {
            status: 200,
            issues: json!({ "issues": [], "total": 0 }),
            components: json!({ "components": [] }),
            measures: json!({ "component": { "key": "velocity", "name": "Velocity", "measures": [] } }),
            contents: json!([]),
        }
    }
}

pub struct StubSonarQube {
    pub addr: SocketAddr,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubSonarQube {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn spawn_stub(responses: StubResponses) -> StubSonarQube {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let status = StatusCode::from_u16(responses.status).unwrap();

    let answer = {
        let requests = Arc::clone(&requests);
        move |path: &str, body: &Value, query: HashMap<String, String>, headers: HeaderMap| {
            let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string);
            requests.lock().unwrap().push(RecordedRequest {
                path: path.to_string(),
                query,
                authorization: header("authorization"),
                accept: header("accept"),
            });
            warp::reply::with_status(warp::reply::json(body), status)
        }
    };

    let issues_answer = answer.clone();
    let issues_body = responses.issues;
    let issues = warp::path!("api" / "issues" / "search")
        .and(warp::query::<HashMap<String, String>>())
        .and(warp::header::headers_cloned())
        .map(move |query, headers| issues_answer("/api/issues/search", &issues_body, query, headers));

    let tree_answer = answer.clone();
    let tree_body = responses.components;
    let tree = warp::path!("api" / "components" / "tree")
        .and(warp::query::<HashMap<String, String>>())
        .and(warp::header::headers_cloned())
        .map(move |query, headers| tree_answer("/api/components/tree", &tree_body, query, headers));

    let measures_answer = answer.clone();
    let measures_body = responses.measures;
    let measures = warp::path!("api" / "measures" / "component")
        .and(warp::query::<HashMap<String, String>>())
        .and(warp::header::headers_cloned())
        .map(move |query, headers| measures_answer("/api/measures/component", &measures_body, query, headers));

    let contents_answer = answer;
    let contents_body = responses.contents;
    let contents = warp::path!("repos" / String / String / "contents")
        .and(warp::query::<HashMap<String, String>>())
        .and(warp::header::headers_cloned())
        .map(move |owner: String, repo: String, query, headers| {
            contents_answer(&format!("/repos/{}/{}/contents", owner, repo), &contents_body, query, headers)
        });

    let (addr, server) = warp::serve(issues.or(tree).or(measures).or(contents)).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    StubSonarQube { addr, requests }
}

/// SonarQube stays configured; the dependency file tree comes from the GitHub stub.
pub fn github_config(url: &str) -> Config {
    let mut config = sonar_config(url);
    config.dependencies.source = FileSourceKind::GitHub;
    config.github.api_url = url.to_string();
    config.github.owner = Some("acme".to_string());
    config.github.repo = Some("platform".to_string());
    config.github.token = Some("ghp_test".to_string());
    config
}

pub fn sonar_config(url: &str) -> Config {
    let mut config = Config::default();
    config.sonarqube.url = Some(url.to_string());
    config.sonarqube.token = Some("squ_test".to_string());
    config.sonarqube.project_key = Some("velocity".to_string());
    config.server.request_timeout_secs = 5;
    config
}

/// Drives the real route tree; handlers call out to whatever `config` points at.
pub async fn get(config: Config, path: &str) -> (StatusCode, Value) {
    let app = routes(Arc::new(AppState::new(config).unwrap()));
    let response = warp::test::request().method("GET").path(path).reply(&app).await;
    let body = serde_json::from_slice(response.body()).unwrap();
    (response.status(), body)
}

pub fn sonar_timestamp(minutes_ago: i64) -> String {
    (Utc::now() - Duration::minutes(minutes_ago))
        .format("%Y-%m-%dT%H:%M:%S%z")
        .to_string()
}
