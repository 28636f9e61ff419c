//! OCR Viewer Common Library
//!
//! Web(WASM)フロントエンドと共有される型とユーティリティ:
//! - types: OCR結果レコードとタイムスタンプ
//! - firestore: ストアREST応答のワイヤ型とマッピング
//! - store: ドキュメントストアのポート定義
//! - listing / view_state: 一覧・詳細ビューのデータロジック

pub mod error;
pub mod firestore;
pub mod format;
pub mod listing;
pub mod store;
pub mod types;
pub mod view_state;

pub use error::{Error, Result};
pub use firestore::{to_ocr_result, FirestoreDocument, FirestoreValue, ListDocumentsResponse};
pub use format::{format_date, format_date_time};
pub use listing::{filter_by_file_name, sort_by_newest, text_preview};
pub use store::DocumentStore;
pub use types::{OcrResult, Timestamp};
pub use view_state::{DetailState, ListingState};
