pub mod component_grouper;
pub mod confidence;
pub mod dependency_analyzer;
pub mod github_client;
pub mod http_client;
pub mod report_service;
pub mod risk_scorer;
pub mod sonarqube_client;
pub mod tech_debt_analyzer;
