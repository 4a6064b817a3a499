use serde::{Deserialize, Serialize};

/// Entry of the GitHub repository contents listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubContent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, rename = "type")]
    pub content_type: Option<String>,
}
