//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// Fetchはネットワーク/ストア障害、Decodeは応答をワイヤ型へ変換
/// できなかった場合、NotFoundは該当IDのドキュメントが存在しない場合
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Document not found: {0}")]
    NotFound(String),
}

impl Error {
    /// 有効なリクエストに対する「該当なし」かどうか
    ///
    /// NotFoundは障害ではないためログ対象にしない
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
