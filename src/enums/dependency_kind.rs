use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum DependencyKind {
    #[serde(rename = "suggested")]
    Suggested,
}
