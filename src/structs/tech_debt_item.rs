use serde::{Deserialize, Serialize};
use crate::enums::business_priority::BusinessPriority;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechDebtItem {
    pub id: String,
    pub module: String,
    pub risk_score: f64,
    pub code_quality: f64,
    pub change_frequency: f64,
    pub business_priority: BusinessPriority,
    pub bug_count: usize,
    pub files_affected: Vec<String>,
    pub last_updated: String,
    pub complexity: i64,
    pub duplication: usize,
}
