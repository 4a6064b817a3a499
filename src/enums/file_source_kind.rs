use serde::{Deserialize, Serialize};

/// Where the dependency heuristic reads its file list from.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, Default)]
pub enum FileSourceKind {
    #[default]
    #[serde(rename = "sonarqube")]
    SonarQube,
    #[serde(rename = "github")]
    GitHub,
}
