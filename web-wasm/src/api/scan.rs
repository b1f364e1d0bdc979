//! ScanService連携（画像アップロード→検査値抽出）

use medscan_common::{parse_scan_response, Error, Result, ScanResult};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use super::js_error;

/// 選択ファイルをmultipartボディでPOSTし、スキャン結果を受け取る
///
/// リトライは行わない。非2xxと不正ボディはError::Transport
pub async fn upload_scan(base_url: &str, file: &File, patient_name: &str) -> Result<ScanResult> {
    let url = format!("{}/upload", base_url);

    let form = FormData::new().map_err(|e| js_error("form data", &e))?;
    form.append_with_blob("file", file)
        .map_err(|e| js_error("form data", &e))?;
    form.append_with_str("patient_name", patient_name)
        .map_err(|e| js_error("form data", &e))?;

    // Content-Typeはブラウザがboundary付きで設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| js_error("request", &e))?;

    let body = fetch_text(&request).await?;
    parse_scan_response(&body)
}

/// fetchを実行し、2xxならレスポンスボディの文字列を返す
pub(crate) async fn fetch_text(request: &Request) -> Result<String> {
    let window =
        web_sys::window().ok_or_else(|| Error::Transport("no window".to_string()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| js_error("network error", &e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| js_error("unexpected fetch result", &e))?;

    if !resp.ok() {
        return Err(Error::Transport(format!(
            "HTTP error! status: {}",
            resp.status()
        )));
    }

    let text_value = JsFuture::from(resp.text().map_err(|e| js_error("response body", &e))?)
        .await
        .map_err(|e| js_error("response body", &e))?;

    Ok(text_value.as_string().unwrap_or_default())
}
