//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// - Validation: ローカル入力の不備。ネットワークには一切触れない
/// - Transport: 通信失敗・非2xx・不正なレスポンスボディ
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
