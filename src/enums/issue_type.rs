use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum IssueType {
    #[serde(rename = "BUG")]
    Bug,
    #[serde(rename = "VULNERABILITY")]
    Vulnerability,
    #[serde(rename = "CODE_SMELL")]
    CodeSmell,
    #[serde(other)]
    Other,
}

impl IssueType {
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("BUG") => Self::Bug,
            Some("VULNERABILITY") => Self::Vulnerability,
            Some("CODE_SMELL") => Self::CodeSmell,
            _ => Self::Other,
        }
    }
}
