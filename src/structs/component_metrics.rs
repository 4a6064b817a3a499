use chrono::{DateTime, Utc};
use crate::enums::business_priority::BusinessPriority;

/// Metrics derived from one component's issues, before rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentMetrics {
    pub bugs: usize,
    pub vulnerabilities: usize,
    pub code_smells: usize,
    pub issue_count: usize,
    pub avg_complexity: f64,
    pub code_quality: f64,
    pub change_frequency: f64,
    pub priority: BusinessPriority,
    pub duplication: usize,
    pub latest_update: Option<DateTime<Utc>>,
}
