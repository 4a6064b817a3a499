use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEndpoint {
    pub id: String,
    pub title: String,
    pub assignee: String,
    pub status: String,
}

impl DependencyEndpoint {
    pub fn for_file(path: &str) -> Self {
        Self {
            id: path.to_string(),
            title: path.to_string(),
            assignee: "Auto-detected".to_string(),
            status: "Active".to_string(),
        }
    }
}
