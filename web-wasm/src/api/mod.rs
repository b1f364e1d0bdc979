//! バックエンドAPI連携

pub mod reports;
pub mod scan;

use medscan_common::Error;
use wasm_bindgen::JsValue;

/// デフォルトのAPIベースURL（開発環境のバックエンド）
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// JS側のエラーをTransportエラーへ変換
pub(crate) fn js_error(context: &str, value: &JsValue) -> Error {
    let detail = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Transport(format!("{}: {}", context, detail))
}
