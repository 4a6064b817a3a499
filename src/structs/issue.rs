use chrono::{DateTime, Utc};
use crate::config::constants::UNKNOWN_COMPONENT;
use crate::enums::issue_type::IssueType;
use crate::helpers::format_helper::FormatHelper;
use crate::structs::sonarqube::sonar_issue::SonarIssue;

/// An unresolved static-analysis issue, coerced from the wire shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub component: String,
    pub issue_type: IssueType,
    pub debt: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl Issue {
    pub fn new(component: &str, issue_type: IssueType, debt: Option<&str>, creation_date: Option<DateTime<Utc>>) -> Self {
        Self {
            component: component.to_string(),
            issue_type,
            debt: debt.map(str::to_string),
            creation_date,
        }
    }

    /// Leading integer of the debt estimate in minutes, 0 when missing or non-numeric.
    pub fn debt_minutes(&self) -> f64 {
        self.debt
            .as_deref()
            .and_then(FormatHelper::parse_leading_int)
            .unwrap_or(0.0)
    }
}

impl From<SonarIssue> for Issue {
    fn from(raw: SonarIssue) -> Self {
        Self {
            component: raw
                .component
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNKNOWN_COMPONENT.to_string()),
            issue_type: IssueType::from_wire(raw.issue_type.as_deref()),
            debt: raw.debt,
            creation_date: raw.creation_date.as_deref().and_then(FormatHelper::parse_timestamp),
        }
    }
}
