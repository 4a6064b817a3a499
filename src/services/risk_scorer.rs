use chrono::{DateTime, Utc};
use crate::enums::business_priority::BusinessPriority;
use crate::enums::issue_type::IssueType;
use crate::structs::component_metrics::ComponentMetrics;
use crate::structs::issue::Issue;

const QUALITY_WEIGHT: f64 = 0.4;
const CHANGE_WEIGHT: f64 = 0.2;
const BUG_WEIGHT: f64 = 0.2;
const PRIORITY_WEIGHT: f64 = 0.2;

const BUG_PENALTY: f64 = 0.5;
const VULNERABILITY_PENALTY: f64 = 0.8;
const CODE_SMELL_PENALTY: f64 = 0.2;

pub struct RiskScorer;

impl RiskScorer {
    pub fn derive_metrics(issues: &[Issue]) -> ComponentMetrics {
        let count = |kind: IssueType| issues.iter().filter(|i| i.issue_type == kind).count();
        let bugs = count(IssueType::Bug);
        let vulnerabilities = count(IssueType::Vulnerability);
        let code_smells = count(IssueType::CodeSmell);

        let total_debt: f64 = issues.iter().map(Issue::debt_minutes).sum();
        let avg_complexity = total_debt / issues.len().max(1) as f64;

        ComponentMetrics {
            bugs,
            vulnerabilities,
            code_smells,
            issue_count: issues.len(),
            avg_complexity,
            code_quality: Self::code_quality(bugs, vulnerabilities, code_smells),
            change_frequency: Self::change_frequency(issues.len()),
            priority: BusinessPriority::classify(bugs, vulnerabilities),
            duplication: (code_smells * 2).min(100),
            latest_update: Self::latest_update(issues),
        }
    }

    pub fn code_quality(bugs: usize, vulnerabilities: usize, code_smells: usize) -> f64 {
        let penalty = bugs as f64 * BUG_PENALTY
            + vulnerabilities as f64 * VULNERABILITY_PENALTY
            + code_smells as f64 * CODE_SMELL_PENALTY;
        (10.0 - penalty).max(0.0)
    }

    /// Issue count stands in for churn, capped at 10.
    pub fn change_frequency(issue_count: usize) -> f64 {
        (issue_count as f64 * 0.5).min(10.0)
    }

    /// Weighted 0..10 composite; the priority weight is normalised by 3.
    pub fn risk_score(code_quality: f64, change_frequency: f64, priority: BusinessPriority, bugs: usize) -> f64 {
        let quality_risk = (10.0 - code_quality) / 10.0;
        let change_risk = change_frequency / 10.0;
        let bug_risk = (bugs as f64 / 10.0).min(1.0);

        (quality_risk * QUALITY_WEIGHT
            + change_risk * CHANGE_WEIGHT
            + bug_risk * BUG_WEIGHT
            + priority.weight() * PRIORITY_WEIGHT / 3.0)
            * 10.0
    }

    fn latest_update(issues: &[Issue]) -> Option<DateTime<Utc>> {
        issues.iter().filter_map(|i| i.creation_date).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn issues_of(bugs: usize, vulnerabilities: usize, code_smells: usize) -> Vec<Issue> {
        let mut issues = Vec::new();
        issues.extend((0..bugs).map(|_| Issue::new("a/X.ts", IssueType::Bug, Some("10"), None)));
        issues.extend((0..vulnerabilities).map(|_| Issue::new("a/X.ts", IssueType::Vulnerability, None, None)));
        issues.extend((0..code_smells).map(|_| Issue::new("a/X.ts", IssueType::CodeSmell, Some("oops"), None)));
        issues
    }

    #[test]
    fn two_bugs_scenario() {
        let issues = vec![
            Issue::new("a/X.ts", IssueType::Bug, Some("10"), None),
            Issue::new("a/X.ts", IssueType::Bug, Some("20"), None),
        ];
        let metrics = RiskScorer::derive_metrics(&issues);

        assert_eq!((metrics.bugs, metrics.vulnerabilities, metrics.code_smells), (2, 0, 0));
        assert!((metrics.code_quality - 9.0).abs() < 1e-9);
        assert!((metrics.change_frequency - 1.0).abs() < 1e-9);
        assert_eq!(metrics.priority, BusinessPriority::P2);
        assert!((metrics.avg_complexity - 15.0).abs() < 1e-9);
        assert_eq!(metrics.duplication, 0);
    }

    #[test]
    fn non_numeric_debt_contributes_zero() {
        let metrics = RiskScorer::derive_metrics(&issues_of(0, 0, 4));
        assert_eq!(metrics.avg_complexity, 0.0);
        assert_eq!(metrics.duplication, 8);
    }

    #[test]
    fn other_issue_types_only_count_towards_size() {
        let mut issues = issues_of(1, 0, 0);
        issues.push(Issue::new("a/X.ts", IssueType::Other, Some("30"), None));
        let metrics = RiskScorer::derive_metrics(&issues);

        assert_eq!(metrics.issue_count, 2);
        assert_eq!(metrics.bugs, 1);
        assert!((metrics.change_frequency - 1.0).abs() < 1e-9);
        assert!((metrics.avg_complexity - 20.0).abs() < 1e-9);
    }

    #[test]
    fn huge_debts_add_without_overflow() {
        let issues = vec![
            Issue::new("a/X.ts", IssueType::Bug, Some("9223372036854775807min"), None),
            Issue::new("a/X.ts", IssueType::Bug, Some("10min"), None),
        ];
        let metrics = RiskScorer::derive_metrics(&issues);
        assert!(metrics.avg_complexity > 4.6e18);
    }

    #[test]
    fn twenty_digit_debt_is_not_coerced_to_zero() {
        let issues = vec![Issue::new("a/X.ts", IssueType::Bug, Some("99999999999999999999min"), None)];
        let metrics = RiskScorer::derive_metrics(&issues);
        assert_eq!(metrics.avg_complexity, 1e20);
    }

    #[test]
    fn maximal_risk_is_ten() {
        let score = RiskScorer::risk_score(0.0, 10.0, BusinessPriority::P0, 10);
        assert!((score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn minimal_risk_is_priority_floor() {
        let score = RiskScorer::risk_score(10.0, 0.0, BusinessPriority::P2, 0);
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn quality_never_negative_and_caps_hold(bugs in 0usize..200, vulns in 0usize..200, smells in 0usize..200) {
            let metrics = RiskScorer::derive_metrics(&issues_of(bugs, vulns, smells));
            prop_assert!(metrics.code_quality >= 0.0);
            prop_assert!(metrics.change_frequency <= 10.0);
            prop_assert!(metrics.duplication <= 100);
        }

        #[test]
        fn any_vulnerability_means_p0(bugs in 0usize..50, vulns in 1usize..50) {
            prop_assert_eq!(BusinessPriority::classify(bugs, vulns), BusinessPriority::P0);
        }

        #[test]
        fn risk_is_monotonic_in_bugs(bugs in 0usize..40, vulns in 0usize..10, smells in 0usize..20) {
            let score = |m: &ComponentMetrics| RiskScorer::risk_score(m.code_quality, m.change_frequency, m.priority, m.bugs);
            let base = RiskScorer::derive_metrics(&issues_of(bugs, vulns, smells));
            let more = RiskScorer::derive_metrics(&issues_of(bugs + 1, vulns, smells));
            prop_assert!(score(&more) >= score(&base) - 1e-12);
        }

        #[test]
        fn risk_is_monotonic_in_vulnerabilities(bugs in 0usize..40, vulns in 0usize..10, smells in 0usize..20) {
            let score = |m: &ComponentMetrics| RiskScorer::risk_score(m.code_quality, m.change_frequency, m.priority, m.bugs);
            let base = RiskScorer::derive_metrics(&issues_of(bugs, vulns, smells));
            let more = RiskScorer::derive_metrics(&issues_of(bugs, vulns + 1, smells));
            prop_assert!(score(&more) >= score(&base) - 1e-12);
        }

        #[test]
        fn risk_is_monotonic_in_change_frequency(quality in 0.0f64..=10.0, freq in 0.0f64..10.0, bump in 0.0f64..5.0, bugs in 0usize..20) {
            let priority = BusinessPriority::classify(bugs, 0);
            let base = RiskScorer::risk_score(quality, freq, priority, bugs);
            let more = RiskScorer::risk_score(quality, (freq + bump).min(10.0), priority, bugs);
            prop_assert!(more >= base - 1e-12);
        }
    }
}
