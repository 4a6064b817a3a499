pub mod sonar_component;
pub mod sonar_components_response;
pub mod sonar_issue;
pub mod sonar_issues_response;
pub mod sonar_measure;
pub mod sonar_measures_response;
