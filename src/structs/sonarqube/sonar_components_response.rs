use serde::{Deserialize, Serialize};
use crate::structs::sonarqube::sonar_component::SonarComponent;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SonarComponentsResponse {
    #[serde(default)]
    pub components: Vec<SonarComponent>,
}
