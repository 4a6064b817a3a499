use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SonarMeasure {
    pub metric: String,
    #[serde(default)]
    pub value: Option<String>,
}
