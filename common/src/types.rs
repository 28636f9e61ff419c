//! OCR結果の型定義
//!
//! ドキュメントストアに保存されたOCR結果レコード。
//! 一覧ビューと詳細ビューの両方で使用される。

use serde::{Deserialize, Serialize};

/// タイムスタンプ（エポック秒表現）
///
/// 取り込み側の直列化によっては`_seconds`/`_nanoseconds`キーで
/// 格納されるため、エイリアスで両方を受け付ける
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timestamp {
    #[serde(alias = "_seconds")]
    pub seconds: i64,

    #[serde(default, alias = "_nanoseconds")]
    pub nanos: i32,
}

impl Timestamp {
    pub fn from_seconds(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }
}

/// OCR結果レコード
///
/// idはストアが作成時に割り当てる一意な識別子。
/// レコードはこのシステムから見て不変（更新・削除経路なし）。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OcrResult {
    pub id: String,

    pub file_name: String,

    /// 抽出されたOCRテキスト（プレビューと検索に使用）
    pub text: String,

    /// 一覧の並び順にのみ使用
    pub timestamp: Option<Timestamp>,

    pub created_at: Option<Timestamp>,

    /// 元ドキュメントのインライン表示用URL
    pub image_url: String,

    /// 元ドキュメントのダウンロード用URL
    pub download_url: String,

    pub content_type: String,

    pub user_name: String,

    pub document_name: String,

    pub facility_name: String,

    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocr_result_default() {
        let result = OcrResult::default();
        assert_eq!(result.id, "");
        assert_eq!(result.file_name, "");
        assert!(result.timestamp.is_none());
        assert!(result.created_at.is_none());
    }

    #[test]
    fn test_ocr_result_serialize_camel_case() {
        let result = OcrResult {
            id: "abc123".to_string(),
            file_name: "scan.pdf".to_string(),
            image_url: "https://example.com/scan.png".to_string(),
            download_url: "https://example.com/scan.pdf".to_string(),
            user_name: "山田太郎".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"fileName\":\"scan.pdf\""));
        assert!(json.contains("\"imageUrl\":\"https://example.com/scan.png\""));
        assert!(json.contains("\"downloadUrl\":\"https://example.com/scan.pdf\""));
        assert!(json.contains("\"userName\":\"山田太郎\""));
    }

    #[test]
    fn test_ocr_result_deserialize_missing_fields() {
        // 最小限のフィールドのみでデシリアライズできることを確認
        let json = r#"{"fileName": "minimal.pdf"}"#;

        let result: OcrResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.file_name, "minimal.pdf");
        assert_eq!(result.text, ""); // デフォルト値
        assert!(result.timestamp.is_none()); // デフォルト値
    }

    #[test]
    fn test_timestamp_deserialize_plain_keys() {
        let json = r#"{"seconds": 100, "nanos": 5}"#;

        let ts: Timestamp = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(ts.seconds, 100);
        assert_eq!(ts.nanos, 5);
    }

    #[test]
    fn test_timestamp_deserialize_underscore_aliases() {
        // 取り込みサービスの直列化形式（_seconds/_nanoseconds）
        let json = r#"{"_seconds": 1737180000, "_nanoseconds": 123000000}"#;

        let ts: Timestamp = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(ts.seconds, 1737180000);
        assert_eq!(ts.nanos, 123000000);
    }

    #[test]
    fn test_timestamp_deserialize_missing_nanos() {
        let json = r#"{"seconds": 42}"#;

        let ts: Timestamp = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(ts.seconds, 42);
        assert_eq!(ts.nanos, 0);
    }

    #[test]
    fn test_ocr_result_roundtrip() {
        let original = OcrResult {
            id: "doc-1".to_string(),
            file_name: "report.pdf".to_string(),
            text: "検査結果は正常でした。".to_string(),
            timestamp: Some(Timestamp::from_seconds(1737180000)),
            created_at: Some(Timestamp {
                seconds: 1737180000,
                nanos: 500,
            }),
            image_url: "https://example.com/report.png".to_string(),
            download_url: "https://example.com/report.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            user_name: "佐藤花子".to_string(),
            document_name: "健康診断書".to_string(),
            facility_name: "中央クリニック".to_string(),
            date: "2025-01-18".to_string(),
        };

        let json = serde_json::to_string(&original).expect("シリアライズ失敗");
        let restored: OcrResult = serde_json::from_str(&json).expect("デシリアライズ失敗");

        assert_eq!(original, restored);
    }
}
