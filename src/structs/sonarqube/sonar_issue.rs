use serde::{Deserialize, Serialize};

/// Issue as returned by `/api/issues/search`; every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SonarIssue {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default, rename = "type")]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub debt: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
}
