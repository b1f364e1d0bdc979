//! 表示テキスト整形

use crate::types::ScanResult;

/// スキャン結果を複数行の表示テキストへ整形する
///
/// 構成:
/// - 先頭: ファイル名ヘッダ
/// - 中間: 検査値ごとに「<番号>. <検査名>: <値> <単位>」（番号は1始まり）
/// - 末尾: ステータスメッセージ
///
/// # Examples
/// ```
/// use medscan_common::{format_scan_result, LabValue, ScanResult};
///
/// let result = ScanResult {
///     filename: "a.png".to_string(),
///     lab_values: vec![LabValue {
///         test: "Glucose".to_string(),
///         value: "90".to_string(),
///         unit: Some("mg/dL".to_string()),
///     }],
///     message: "ok".to_string(),
/// };
/// let text = format_scan_result(&result);
/// assert!(text.contains("1. Glucose: 90 mg/dL"));
/// assert!(text.ends_with("ok"));
/// ```
pub fn format_scan_result(result: &ScanResult) -> String {
    let lines: Vec<String> = result
        .lab_values
        .iter()
        .enumerate()
        .map(|(index, lab)| match lab.unit.as_deref() {
            Some(unit) if !unit.is_empty() => {
                format!("{}. {}: {} {}", index + 1, lab.test, lab.value, unit)
            }
            _ => format!("{}. {}: {}", index + 1, lab.test, lab.value),
        })
        .collect();

    format!(
        "📄 File: {}\n\n🔍 Extracted Lab Values:\n{}\n\n✅ {}",
        result.filename,
        lines.join("\n"),
        result.message
    )
}

/// 失敗したスキャンのエラー表示テキスト
pub fn format_scan_error(reason: &str) -> String {
    format!("❌ Error processing file: {}", reason)
}

/// レポート日時の日付部分を取り出す
///
/// "2024-01-15T10:30:00" → "2024-01-15"。区切りが無ければそのまま返す
pub fn format_report_date(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}
