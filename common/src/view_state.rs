//! ページ毎のビュー状態
//!
//! 一覧: Loading -> {Populated | Empty}、Populated <-> Filtered
//! 詳細: Loading -> {Found | NotFound}（終端）

use crate::error::Result;
use crate::listing::{filter_by_file_name, sort_by_newest};
use crate::types::OcrResult;

/// 一覧ビューの状態
///
/// 初回アクティベーション時の取得で一度だけLoadingから遷移する。
/// Filteredへの遷移はテキスト入力のみが駆動し、再取得は発生しない。
#[derive(Debug, Clone, PartialEq)]
pub enum ListingState {
    Loading,
    Populated(Vec<OcrResult>),
    /// 取得済み全件とクエリの組。表示対象はvisible()で得る
    Filtered {
        results: Vec<OcrResult>,
        query: String,
    },
    Empty,
}

impl ListingState {
    /// 取得結果から初期状態を作る
    ///
    /// 成功時は新しい順に並べ替えてPopulated。
    /// 0件と取得失敗は同じEmpty（ユーザーには区別を見せない）。
    pub fn from_fetch(fetched: Result<Vec<OcrResult>>) -> Self {
        match fetched {
            Ok(mut results) if !results.is_empty() => {
                sort_by_newest(&mut results);
                ListingState::Populated(results)
            }
            _ => ListingState::Empty,
        }
    }

    /// 検索クエリを適用する
    ///
    /// 取得済みの全件は保持したまま、PopulatedとFilteredの間を遷移する。
    /// Loading/Emptyでは何もしない。
    pub fn set_query(&mut self, query: &str) {
        let current = std::mem::replace(self, ListingState::Loading);
        *self = match current {
            ListingState::Populated(results) | ListingState::Filtered { results, .. } => {
                if query.is_empty() {
                    ListingState::Populated(results)
                } else {
                    ListingState::Filtered {
                        results,
                        query: query.to_string(),
                    }
                }
            }
            other => other,
        };
    }

    /// 取得済みの全件（並び順は維持）
    pub fn all(&self) -> &[OcrResult] {
        match self {
            ListingState::Populated(results) | ListingState::Filtered { results, .. } => results,
            _ => &[],
        }
    }

    /// 現在表示すべきレコード（Filteredなら絞り込み後）
    pub fn visible(&self) -> Vec<&OcrResult> {
        match self {
            ListingState::Populated(results) => results.iter().collect(),
            ListingState::Filtered { results, query } => filter_by_file_name(results, query),
            _ => Vec::new(),
        }
    }

    /// 現在の検索クエリ（Filtered以外は空）
    pub fn query(&self) -> &str {
        match self {
            ListingState::Filtered { query, .. } => query,
            _ => "",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListingState::Loading)
    }
}

/// 詳細ビューの状態
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Found(OcrResult),
    NotFound,
}

impl DetailState {
    /// 取得結果から終端状態を作る
    ///
    /// 取得エラーはNotFoundと同一に扱う（ログは呼び出し側の責務）
    pub fn from_fetch(fetched: Result<OcrResult>) -> Self {
        match fetched {
            Ok(result) => DetailState::Found(result),
            Err(_) => DetailState::NotFound,
        }
    }
}
