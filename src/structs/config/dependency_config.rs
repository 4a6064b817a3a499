use serde::{Deserialize, Serialize};
use crate::enums::file_source_kind::FileSourceKind;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DependencyConfig {
    #[serde(default)]
    pub source: FileSourceKind,

    /// Fixed seed for the confidence generator; unset means a fresh seed per request.
    #[serde(default)]
    pub seed: Option<u64>,
}
