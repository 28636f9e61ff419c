//! 一覧ビューのデータロジック
//!
//! 取得した全レコードの並べ替えとクライアントサイド絞り込み。
//! ストア側は順序を保証しないため、並び順はこちらの責務。

use std::cmp::Reverse;

use crate::types::OcrResult;

/// タイムスタンプ降順（新しい順）に並べ替える
///
/// タイムスタンプのないレコードは最古扱いとし、末尾に置く。
/// 安定ソートのため、同時刻のレコードはストアの返却順を保つ。
pub fn sort_by_newest(results: &mut [OcrResult]) {
    results.sort_by_key(|r| Reverse(sort_key(r)));
}

fn sort_key(result: &OcrResult) -> i64 {
    result.timestamp.map(|t| t.seconds).unwrap_or(i64::MIN)
}

/// ファイル名の部分一致フィルタ（大文字小文字を区別しない）
///
/// 空クエリは全件を返す。取得済みの全件に対して毎回再計算する
/// （再取得はしない）。
pub fn filter_by_file_name<'a>(results: &'a [OcrResult], query: &str) -> Vec<&'a OcrResult> {
    if query.is_empty() {
        return results.iter().collect();
    }
    let needle = query.to_lowercase();
    results
        .iter()
        .filter(|r| r.file_name.to_lowercase().contains(&needle))
        .collect()
}

/// テーブル表示用のテキストプレビュー
///
/// 文字境界で安全に切り詰め、切り詰めた場合は省略記号を付ける
pub fn text_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}…", truncated)
}
