//! APIレスポンスパーサー
//!
//! ScanService / ReportService のJSONボディをパースする。
//! 不正なボディは通信エラーと同じ扱い（Error::Transport）

use crate::error::{Error, Result};
use crate::types::{ReportsResponse, ScanResult};

/// ScanServiceのレスポンスボディをパース
///
/// # Arguments
/// * `body` - POST /upload のレスポンスボディ（JSON文字列）
///
/// # Returns
/// * `Ok(ScanResult)` - パース成功
/// * `Err(Error::Transport)` - ボディが不正な場合
pub fn parse_scan_response(body: &str) -> Result<ScanResult> {
    serde_json::from_str(body)
        .map_err(|e| Error::Transport(format!("malformed scan response: {}", e)))
}

/// ReportServiceのレスポンスボディをパース
///
/// # Arguments
/// * `body` - GET /get-reports/{patient} のレスポンスボディ（JSON文字列）
///
/// # Returns
/// * `Ok(ReportsResponse)` - パース成功
/// * `Err(Error::Transport)` - ボディが不正な場合
pub fn parse_reports_response(body: &str) -> Result<ReportsResponse> {
    serde_json::from_str(body)
        .map_err(|e| Error::Transport(format!("malformed reports response: {}", e)))
}
