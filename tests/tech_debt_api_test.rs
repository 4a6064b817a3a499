use serde_json::json;
use velocityiq::structs::config::config::Config;
use crate::support::{get, sonar_config, sonar_timestamp, spawn_stub, StubResponses};

#[tokio::test]
async fn scores_two_bug_file() {
    let stub = spawn_stub(StubResponses {
        issues: json!({
            "issues": [
                { "component": "velocity:a/X.ts", "type": "BUG", "debt": "10min", "creationDate": sonar_timestamp(5) },
                { "component": "velocity:a/X.ts", "type": "BUG", "debt": "20min", "creationDate": sonar_timestamp(5) }
            ],
            "total": 2
        }),
        ..StubResponses::default()
    });

    let (status, body) = get(sonar_config(&stub.url()), "/api/tech-debt").await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 1);

    let item = &body["items"][0];
    assert_eq!(item["id"], "TD-001");
    assert_eq!(item["module"], "A");
    assert_eq!(item["codeQuality"], 9.0);
    assert_eq!(item["changeFrequency"], 1.0);
    assert_eq!(item["businessPriority"], "P2");
    assert_eq!(item["bugCount"], 2);
    assert_eq!(item["complexity"], 15);
    assert_eq!(item["duplication"], 0);
    assert_eq!(item["riskScore"], 1.7);
    assert_eq!(item["lastUpdated"], "5 minutes ago");
    assert_eq!(item["filesAffected"], json!(["a/X.ts"]));
}

#[tokio::test]
async fn sends_expected_search_query() {
    let stub = spawn_stub(StubResponses::default());
    let mut config = sonar_config(&stub.url());
    config.sonarqube.organization = Some("acme".to_string());

    let (status, _) = get(config, "/api/tech-debt").await;
    assert_eq!(status, 200);

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.path, "/api/issues/search");
    assert_eq!(request.query["componentKeys"], "velocity");
    assert_eq!(request.query["resolved"], "false");
    assert_eq!(request.query["ps"], "500");
    assert_eq!(request.query["organization"], "acme");
    assert_eq!(request.authorization.as_deref(), Some("Bearer squ_test"));
}

#[tokio::test]
async fn zero_issues_is_an_empty_success() {
    let stub = spawn_stub(StubResponses::default());

    let (status, body) = get(sonar_config(&stub.url()), "/api/tech-debt").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "success": true, "count": 0, "items": [] }));
}

#[tokio::test]
async fn ranks_by_risk_but_keeps_grouping_ids() {
    let stub = spawn_stub(StubResponses {
        issues: json!({
            "issues": [
                { "component": "velocity:src/ui/button.tsx", "type": "CODE_SMELL", "debt": "5min", "creationDate": sonar_timestamp(10) },
                { "component": "velocity:src/auth_core/session.ts", "type": "VULNERABILITY", "debt": "1h", "creationDate": sonar_timestamp(60 * 30) },
                { "component": "velocity:src/auth_core/session.ts", "type": "BUG", "creationDate": sonar_timestamp(60 * 24 * 3) }
            ]
        }),
        ..StubResponses::default()
    });

    let (_, body) = get(sonar_config(&stub.url()), "/api/tech-debt").await;

    assert_eq!(body["items"][0]["id"], "TD-002");
    assert_eq!(body["items"][0]["module"], "Auth Core");
    assert_eq!(body["items"][0]["businessPriority"], "P0");
    assert_eq!(body["items"][0]["lastUpdated"], "1 day ago");
    assert_eq!(body["items"][1]["id"], "TD-001");
    assert_eq!(body["items"][1]["module"], "Ui");
}

#[tokio::test]
async fn upstream_failure_is_500_with_message() {
    let stub = spawn_stub(StubResponses {
        status: 503,
        ..StubResponses::default()
    });

    let (status, body) = get(sonar_config(&stub.url()), "/api/tech-debt").await;

    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "SonarQube issues API error: 503");
}

#[tokio::test]
async fn missing_project_key_is_400_without_network_call() {
    let stub = spawn_stub(StubResponses::default());
    let mut config = sonar_config(&stub.url());
    config.sonarqube.project_key = None;

    let (status, body) = get(config, "/api/tech-debt").await;

    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert_eq!(body["missing"], json!({ "projectKey": true }));
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn unreachable_upstream_is_500() {
    let mut config = Config::default();
    config.sonarqube.url = Some("http://127.0.0.1:9".to_string());
    config.sonarqube.token = Some("t".to_string());
    config.sonarqube.project_key = Some("k".to_string());
    config.server.request_timeout_secs = 2;

    let (status, body) = get(config, "/api/tech-debt").await;

    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
}
