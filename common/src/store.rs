//! ドキュメントストアのポート定義
//!
//! このシステムがストアに要求するのはコレクション全件取得と
//! IDによる点検索の2操作のみ。実装はweb-wasm側（Firestore REST）、
//! テストではインメモリ実装に差し替える。

use async_trait::async_trait;

use crate::error::Result;
use crate::types::OcrResult;

/// ドキュメントストアとの境界
///
/// ブラウザのFutureはSendでないため`?Send`
#[async_trait(?Send)]
pub trait DocumentStore {
    /// コレクション内の全レコードを返す（順序保証なし）
    async fn list_all(&self, collection: &str) -> Result<Vec<OcrResult>>;

    /// IDによる点検索
    ///
    /// 該当なしはError::NotFound
    async fn get_by_id(&self, collection: &str, id: &str) -> Result<OcrResult>;
}
