use chrono::{DateTime, Utc};
use crate::helpers::format_helper::FormatHelper;
use crate::services::component_grouper::ComponentGrouper;
use crate::services::risk_scorer::RiskScorer;
use crate::structs::issue::Issue;
use crate::structs::tech_debt_item::TechDebtItem;

const ID_PREFIX: &str = "TD";
const UNKNOWN_TIME: &str = "Unknown";

/// Turns a flat issue list into risk-ranked tech-debt items.
///
/// Pure: the caller supplies `now`, so the same input always produces the same output.
pub struct TechDebtAnalyzer;

impl TechDebtAnalyzer {
    pub fn analyze(issues: Vec<Issue>, now: DateTime<Utc>) -> Vec<TechDebtItem> {
        let groups = ComponentGrouper::group(issues);

        // IDs follow grouping order and are fixed before the ranking sort.
        let mut items: Vec<TechDebtItem> = groups
            .iter()
            .enumerate()
            .map(|(index, (component, component_issues))| {
                Self::build_item(index + 1, component, component_issues, now)
            })
            .collect();

        Self::rank(&mut items);
        items
    }

    /// Stable, so equal scores keep their grouping order.
    pub fn rank(items: &mut [TechDebtItem]) {
        items.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));
    }

    fn build_item(sequence: usize, component: &str, issues: &[Issue], now: DateTime<Utc>) -> TechDebtItem {
        let file_name = FormatHelper::file_name(component);
        let metrics = RiskScorer::derive_metrics(issues);
        let risk_score = RiskScorer::risk_score(
            metrics.code_quality,
            metrics.change_frequency,
            metrics.priority,
            metrics.bugs,
        );

        TechDebtItem {
            id: FormatHelper::sequential_id(ID_PREFIX, sequence),
            module: FormatHelper::format_module_name(FormatHelper::module_name(file_name)),
            risk_score: FormatHelper::round_to_tenth(risk_score),
            code_quality: FormatHelper::round_to_tenth(metrics.code_quality),
            change_frequency: FormatHelper::round_to_tenth(metrics.change_frequency),
            business_priority: metrics.priority,
            bug_count: metrics.bugs + metrics.vulnerabilities,
            files_affected: vec![file_name.to_string()],
            last_updated: metrics
                .latest_update
                .map_or_else(|| UNKNOWN_TIME.to_string(), |latest| FormatHelper::time_ago(latest, now)),
            // `as` saturates, so oversized debt estimates clamp instead of wrapping.
            complexity: metrics.avg_complexity.round() as i64,
            duplication: metrics.duplication,
        }
    }
}
