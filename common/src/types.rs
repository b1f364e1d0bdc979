//! スキャン結果・レポートの型定義
//!
//! WebクライアントとAPIサーバーで共有される契約:
//! - ScanResult: POST /upload のレスポンス
//! - ReportsResponse: GET /get-reports/{patient} のレスポンス

use serde::{Deserialize, Deserializer, Serialize};

/// 抽出された検査値1件（検査名・値・単位）
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LabValue {
    pub test: String,

    /// サーバーは文字列と数値のどちらでも返すことがある
    #[serde(default, deserialize_with = "string_or_number")]
    pub value: String,

    #[serde(default)]
    pub unit: Option<String>,
}

/// スキャン1回のレスポンス。新しいスキャンごとに丸ごと置き換えられる
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScanResult {
    pub filename: String,

    #[serde(default)]
    pub lab_values: Vec<LabValue>,

    #[serde(default)]
    pub message: String,
}

/// 保存済みレポート1件
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Report {
    #[serde(default)]
    pub report_date: String,

    #[serde(default)]
    pub source_file: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub lab_values: Vec<LabValue>,
}

impl Report {
    /// カテゴリから表示重要度を導出
    pub fn severity(&self) -> Severity {
        Severity::from_category(self.category.as_deref())
    }
}

/// ReportServiceのレスポンス envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportsResponse {
    pub reports: Vec<Report>,
}

/// レポートカテゴリの表示重要度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
    Neutral,
}

impl Severity {
    /// カテゴリ文字列からのマッピング（大文字小文字を区別しない）
    ///
    /// normal→Low / warning→Medium / critical→High / 未設定・未知→Neutral
    pub fn from_category(category: Option<&str>) -> Self {
        match category.map(|c| c.trim().to_ascii_lowercase()).as_deref() {
            Some("normal") => Severity::Low,
            Some("warning") => Severity::Medium,
            Some("critical") => Severity::High,
            _ => Severity::Neutral,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Low => "severity-low",
            Severity::Medium => "severity-medium",
            Severity::High => "severity-high",
            Severity::Neutral => "severity-neutral",
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lab_value_string_value() {
        let lab: LabValue =
            serde_json::from_str(r#"{"test":"Glucose","value":"90","unit":"mg/dL"}"#).unwrap();
        assert_eq!(lab.test, "Glucose");
        assert_eq!(lab.value, "90");
        assert_eq!(lab.unit.as_deref(), Some("mg/dL"));
    }

    #[test]
    fn test_lab_value_numeric_value() {
        let lab: LabValue = serde_json::from_str(r#"{"test":"HbA1c","value":5.7}"#).unwrap();
        assert_eq!(lab.value, "5.7");
        assert_eq!(lab.unit, None);
    }

    #[test]
    fn test_lab_value_integer_value() {
        let lab: LabValue = serde_json::from_str(r#"{"test":"WBC","value":7200}"#).unwrap();
        assert_eq!(lab.value, "7200");
    }

    #[test]
    fn test_scan_result_missing_optional_fields() {
        // filename以外は欠けていてもデフォルトで埋める
        let result: ScanResult = serde_json::from_str(r#"{"filename":"a.png"}"#).unwrap();
        assert_eq!(result.filename, "a.png");
        assert!(result.lab_values.is_empty());
        assert_eq!(result.message, "");
    }

    #[test]
    fn test_scan_result_missing_filename_is_error() {
        let result = serde_json::from_str::<ScanResult>(r#"{"message":"ok"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_report_without_category() {
        let report: Report =
            serde_json::from_str(r#"{"report_date":"2024-01-15T10:30:00","source_file":"a.png"}"#)
                .unwrap();
        assert_eq!(report.category, None);
        assert_eq!(report.severity(), Severity::Neutral);
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(Severity::from_category(Some("normal")), Severity::Low);
        assert_eq!(Severity::from_category(Some("warning")), Severity::Medium);
        assert_eq!(Severity::from_category(Some("critical")), Severity::High);
        assert_eq!(Severity::from_category(None), Severity::Neutral);
    }

    #[test]
    fn test_severity_case_insensitive() {
        assert_eq!(Severity::from_category(Some("Normal")), Severity::Low);
        assert_eq!(Severity::from_category(Some("CRITICAL")), Severity::High);
        assert_eq!(Severity::from_category(Some(" Warning ")), Severity::Medium);
    }

    #[test]
    fn test_severity_unknown_category() {
        assert_eq!(Severity::from_category(Some("unusual")), Severity::Neutral);
        assert_eq!(Severity::from_category(Some("")), Severity::Neutral);
    }

    #[test]
    fn test_severity_css_class() {
        assert_eq!(Severity::Low.css_class(), "severity-low");
        assert_eq!(Severity::Neutral.css_class(), "severity-neutral");
    }
}
