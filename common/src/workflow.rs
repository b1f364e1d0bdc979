//! 画面ワークフローの状態と入力バリデーション

use crate::error::{Error, Result};

/// アップロード画面の状態
///
/// Empty → FileSelected → Submitting → ResultReady、
/// resetでどの状態からもEmptyへ戻る
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Empty,
    FileSelected,
    Submitting,
    ResultReady,
}

impl ScanPhase {
    /// submitはFileSelectedからのみ有効。Submitting中の再submitはno-op
    pub fn can_submit(self) -> bool {
        self == ScanPhase::FileSelected
    }

    pub fn is_submitting(self) -> bool {
        self == ScanPhase::Submitting
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScanPhase::Empty => "empty",
            ScanPhase::FileSelected => "selected",
            ScanPhase::Submitting => "submitting",
            ScanPhase::ResultReady => "ready",
        }
    }
}

/// 選択ファイルのメディアタイプ検証
///
/// `image/`で始まらないものは`Error::Validation`。
/// ファイルピッカーとドラッグ&ドロップの両方がここを通る
pub fn validate_image_type(media_type: &str) -> Result<()> {
    if media_type.starts_with("image/") {
        Ok(())
    } else {
        let shown = if media_type.is_empty() { "(unknown)" } else { media_type };
        Err(Error::Validation(format!(
            "unsupported file type: {}",
            shown
        )))
    }
}

/// 検索クエリ（患者名）の検証
///
/// 空白のみのクエリは`Error::Validation`。成功時はtrim済みの名前を返す
pub fn validate_query(query: &str) -> Result<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(Error::Validation("patient name is empty".to_string()))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_phase_default_is_empty() {
        assert_eq!(ScanPhase::default(), ScanPhase::Empty);
    }

    #[test]
    fn test_can_submit_only_from_file_selected() {
        assert!(!ScanPhase::Empty.can_submit());
        assert!(ScanPhase::FileSelected.can_submit());
        assert!(!ScanPhase::Submitting.can_submit());
        assert!(!ScanPhase::ResultReady.can_submit());
    }

    #[test]
    fn test_is_submitting() {
        assert!(ScanPhase::Submitting.is_submitting());
        assert!(!ScanPhase::FileSelected.is_submitting());
    }

    #[test]
    fn test_validate_image_type_accepts_images() {
        assert!(validate_image_type("image/png").is_ok());
        assert!(validate_image_type("image/jpeg").is_ok());
        assert!(validate_image_type("image/webp").is_ok());
    }

    #[test]
    fn test_validate_image_type_rejects_non_images() {
        for media_type in ["application/pdf", "text/plain", "video/mp4", "imagex/png"] {
            let result = validate_image_type(media_type);
            assert!(matches!(result, Err(Error::Validation(_))), "{}", media_type);
        }
    }

    #[test]
    fn test_validate_image_type_rejects_empty() {
        let err = validate_image_type("").unwrap_err();
        assert!(format!("{}", err).contains("(unknown)"));
    }

    #[test]
    fn test_validate_query_trims() {
        assert_eq!(validate_query("  Jane Doe  ").unwrap(), "Jane Doe");
    }

    #[test]
    fn test_validate_query_rejects_blank() {
        assert!(matches!(validate_query(""), Err(Error::Validation(_))));
        assert!(matches!(validate_query("   "), Err(Error::Validation(_))));
        assert!(matches!(validate_query("\t\n"), Err(Error::Validation(_))));
    }
}
