//! ReportService連携（患者名によるレポート検索）

use medscan_common::{parse_reports_response, Report, Result};
use web_sys::{Request, RequestInit, RequestMode};

use super::js_error;
use super::scan::fetch_text;

/// 患者名で保存済みレポートを取得する
///
/// 患者名はパスセグメントとしてエスケープされる
pub async fn fetch_reports(base_url: &str, patient_name: &str) -> Result<Vec<Report>> {
    let encoded = js_sys::encode_uri_component(patient_name);
    let url = format!("{}/get-reports/{}", base_url, String::from(encoded));

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| js_error("request", &e))?;

    let body = fetch_text(&request).await?;
    parse_reports_response(&body).map(|response| response.reports)
}
