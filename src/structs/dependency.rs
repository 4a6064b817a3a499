use serde::{Deserialize, Serialize};
use crate::enums::dependency_kind::DependencyKind;
use crate::enums::dependency_status::DependencyStatus;
use crate::structs::dependency_endpoint::DependencyEndpoint;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub id: String,
    pub source: DependencyEndpoint,
    pub target: DependencyEndpoint,
    #[serde(rename = "type")]
    pub kind: DependencyKind,
    pub status: DependencyStatus,
    pub confidence: u8,
    pub reasons: Vec<String>,
    pub detected_date: String,
    pub shared_files: Vec<String>,
}
