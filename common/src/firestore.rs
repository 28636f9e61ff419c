//! Firestore REST APIのワイヤ型とマッピング
//!
//! ストアはFirestoreのRESTサーフェス経由で参照する:
//! - 一覧: GET .../documents/{collection} -> ListDocumentsResponse
//! - 取得: GET .../documents/{collection}/{id} -> FirestoreDocument
//!
//! フィールド値は外部タグ付きのValueユニオン
//! （stringValue / integerValue / timestampValue / mapValue など）

use std::collections::HashMap;

use chrono::DateTime;
use serde::Deserialize;

use crate::types::{OcrResult, Timestamp};

/// 一覧取得レスポンス
///
/// コレクションが空の場合はdocumentsキー自体が存在しない
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListDocumentsResponse {
    pub documents: Vec<FirestoreDocument>,
    pub next_page_token: Option<String>,
}

/// Firestoreドキュメント
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirestoreDocument {
    /// "projects/{p}/databases/(default)/documents/{collection}/{id}" 形式
    pub name: String,
    pub fields: HashMap<String, FirestoreValue>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

impl FirestoreDocument {
    /// ドキュメント名の末尾セグメント（= ドキュメントID）
    pub fn document_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

/// Firestoreのフィールド値
///
/// ワイヤ上は`{"stringValue": "..."}`のような外部タグ付き表現
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum FirestoreValue {
    NullValue(()),
    BooleanValue(bool),
    /// 64bit整数は文字列エンコードされる
    IntegerValue(String),
    DoubleValue(f64),
    /// RFC 3339形式
    TimestampValue(String),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(serde_json::Value),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArrayValue {
    pub values: Vec<FirestoreValue>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapValue {
    pub fields: HashMap<String, FirestoreValue>,
}

/// FirestoreドキュメントをOcrResultへ変換
///
/// ストアはスキーマレスのため、欠損・型不一致のフィールドは
/// デフォルト値へフォールバックする
pub fn to_ocr_result(doc: &FirestoreDocument) -> OcrResult {
    let f = &doc.fields;
    OcrResult {
        id: doc.document_id().to_string(),
        file_name: get_string(f, "fileName"),
        text: get_string(f, "text"),
        timestamp: get_timestamp(f, "timestamp"),
        created_at: get_timestamp(f, "createdAt"),
        image_url: get_string(f, "imageUrl"),
        download_url: get_string(f, "downloadUrl"),
        content_type: get_string(f, "contentType"),
        user_name: get_string(f, "userName"),
        document_name: get_string(f, "documentName"),
        facility_name: get_string(f, "facilityName"),
        date: get_string(f, "date"),
    }
}

fn get_string(fields: &HashMap<String, FirestoreValue>, key: &str) -> String {
    match fields.get(key) {
        Some(FirestoreValue::StringValue(s)) => s.clone(),
        _ => String::new(),
    }
}

fn get_timestamp(fields: &HashMap<String, FirestoreValue>, key: &str) -> Option<Timestamp> {
    timestamp_from_value(fields.get(key)?)
}

/// タイムスタンプ表現の揺れを吸収する
///
/// 受け付ける形式:
/// 1. timestampValue（RFC 3339）
/// 2. mapValue（`_seconds`/`_nanoseconds`または`seconds`/`nanoseconds`）
/// 3. integerValue（エポック秒）
pub fn timestamp_from_value(value: &FirestoreValue) -> Option<Timestamp> {
    match value {
        FirestoreValue::TimestampValue(s) => {
            let dt = DateTime::parse_from_rfc3339(s).ok()?;
            Some(Timestamp {
                seconds: dt.timestamp(),
                nanos: dt.timestamp_subsec_nanos() as i32,
            })
        }
        FirestoreValue::MapValue(map) => {
            let seconds = get_integer(&map.fields, "_seconds")
                .or_else(|| get_integer(&map.fields, "seconds"))?;
            let nanos = get_integer(&map.fields, "_nanoseconds")
                .or_else(|| get_integer(&map.fields, "nanoseconds"))
                .unwrap_or(0);
            Some(Timestamp {
                seconds,
                nanos: nanos as i32,
            })
        }
        FirestoreValue::IntegerValue(s) => Some(Timestamp::from_seconds(s.parse().ok()?)),
        _ => None,
    }
}

fn get_integer(fields: &HashMap<String, FirestoreValue>, key: &str) -> Option<i64> {
    match fields.get(key)? {
        FirestoreValue::IntegerValue(s) => s.parse().ok(),
        FirestoreValue::DoubleValue(d) => Some(*d as i64),
        _ => None,
    }
}
