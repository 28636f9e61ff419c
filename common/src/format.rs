//! 日時フォーマット
//!
//! エポック秒からの決定的な表示文字列生成。
//! ブラウザのロケール依存を避け、常にUTC・固定書式で描画する。

use chrono::DateTime;

/// 日付表示（YYYY/MM/DD）
///
/// chronoの表現範囲外の秒は"-"にする
pub fn format_date(seconds: i64) -> String {
    match DateTime::from_timestamp(seconds, 0) {
        Some(dt) => dt.format("%Y/%m/%d").to_string(),
        None => "-".to_string(),
    }
}

/// 日時表示（YYYY/MM/DD HH:MM:SS）
pub fn format_date_time(seconds: i64) -> String {
    match DateTime::from_timestamp(seconds, 0) {
        Some(dt) => dt.format("%Y/%m/%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}
