use serde::{Deserialize, Serialize};
use crate::structs::sonarqube::sonar_measure::SonarMeasure;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SonarMeasuresResponse {
    pub component: SonarMeasuredComponent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SonarMeasuredComponent {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub measures: Vec<SonarMeasure>,
}
