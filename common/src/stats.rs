//! レポート集計統計

use std::collections::HashSet;

use crate::types::Report;

/// 現在のレポート集合から導出されるサマリ統計
///
/// 常にレポート集合の純関数として再計算される。
/// 独立した更新経路は存在しない
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub total_reports: usize,
    pub total_tests: usize,
    pub unique_tests: usize,
    /// レポートあたりの平均検査値数（小数第1位で丸め）
    pub avg_values_per_report: f64,
}

impl SummaryStats {
    /// レポート集合から統計を計算する
    ///
    /// 空集合は「統計なし」としてNoneを返す（ゼロ埋めではない）
    pub fn from_reports(reports: &[Report]) -> Option<Self> {
        if reports.is_empty() {
            return None;
        }

        let total_tests: usize = reports.iter().map(|r| r.lab_values.len()).sum();
        let unique_tests = reports
            .iter()
            .flat_map(|r| r.lab_values.iter())
            .map(|lab| lab.test.as_str())
            .collect::<HashSet<_>>()
            .len();
        let avg = total_tests as f64 / reports.len() as f64;

        Some(SummaryStats {
            total_reports: reports.len(),
            total_tests,
            unique_tests,
            avg_values_per_report: (avg * 10.0).round() / 10.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LabValue;

    fn report_with_tests(names: &[&str]) -> Report {
        Report {
            lab_values: names
                .iter()
                .map(|name| LabValue {
                    test: name.to_string(),
                    value: "1".to_string(),
                    unit: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_set_has_no_stats() {
        assert_eq!(SummaryStats::from_reports(&[]), None);
    }

    #[test]
    fn test_stats_counts_and_average() {
        // 検査値2件・3件・0件の3レポート → 平均 5/3 = 1.666... → 1.7
        let reports = vec![
            report_with_tests(&["Glucose", "HbA1c"]),
            report_with_tests(&["Glucose", "WBC", "RBC"]),
            report_with_tests(&[]),
        ];

        let stats = SummaryStats::from_reports(&reports).unwrap();
        assert_eq!(stats.total_reports, 3);
        assert_eq!(stats.total_tests, 5);
        assert_eq!(stats.avg_values_per_report, 1.7);
    }

    #[test]
    fn test_unique_tests_by_name_equality() {
        let reports = vec![
            report_with_tests(&["Glucose", "HbA1c"]),
            report_with_tests(&["Glucose", "WBC", "RBC"]),
        ];

        let stats = SummaryStats::from_reports(&reports).unwrap();
        assert_eq!(stats.total_tests, 5);
        assert_eq!(stats.unique_tests, 4);
    }

    #[test]
    fn test_average_rounded_to_one_decimal() {
        // 1レポート・1件 → 1.0
        let stats = SummaryStats::from_reports(&[report_with_tests(&["Glucose"])]).unwrap();
        assert_eq!(stats.avg_values_per_report, 1.0);

        // 3レポート・4件 → 4/3 = 1.333... → 1.3
        let reports = vec![
            report_with_tests(&["A", "B"]),
            report_with_tests(&["C", "D"]),
            report_with_tests(&[]),
        ];
        let stats = SummaryStats::from_reports(&reports).unwrap();
        assert_eq!(stats.avg_values_per_report, 1.3);
    }

    #[test]
    fn test_reports_without_values_still_counted() {
        let reports = vec![report_with_tests(&[]), report_with_tests(&[])];
        let stats = SummaryStats::from_reports(&reports).unwrap();
        assert_eq!(stats.total_reports, 2);
        assert_eq!(stats.total_tests, 0);
        assert_eq!(stats.unique_tests, 0);
        assert_eq!(stats.avg_values_per_report, 0.0);
    }
}
